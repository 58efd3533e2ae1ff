//! Capsule demo binary.
//!
//! Plays the role of the library's external callers: constructs each handle
//! and wrapper, drives it through a short scenario, and prints the observable
//! results. The debounce burst needs real timers, so everything runs on a
//! current-thread tokio runtime - one logical timer queue, no extra threads.
//!
//! Optional `capsule.toml` in the working directory overrides the counter,
//! account, and debounce defaults. Log verbosity comes from `CAPSULE_LOG`
//! (tracing `EnvFilter` syntax); logs go to stderr so the demo output stays
//! clean.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use capsule_core::{
    BankAccount, Calculator, Counter, Memo, Once, RecursiveMemo, ShoppingList, TaskDebouncer,
};
use capsule_types::{AccountConfig, CounterConfig, DebounceConfig, KeyError};

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_env("CAPSULE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoConfig {
    counter: CounterConfig,
    account: AccountConfig,
    debounce: DebounceConfig,
}

fn load_config() -> DemoConfig {
    let raw = match std::fs::read_to_string("capsule.toml") {
        Ok(raw) => raw,
        Err(_) => return DemoConfig::default(),
    };
    match toml::from_str(&raw) {
        Ok(config) => {
            tracing::info!("Loaded capsule.toml");
            config
        }
        Err(err) => {
            tracing::warn!("Ignoring invalid capsule.toml: {err}");
            DemoConfig::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let config = load_config();

    counters_demo(&config.counter);
    account_demo(&config.account);
    list_demo();
    calculator_demo()?;
    memo_demo()?;
    once_demo();
    debounce_demo(&config.debounce).await;

    Ok(())
}

fn counters_demo(config: &CounterConfig) {
    println!("== Independent counters ==");

    let mut first = Counter::new(*config);
    let mut second = Counter::new(CounterConfig::with_initial_value(5));

    first.increment();
    first.increment();
    first.decrement();
    second.increment();

    println!("first counter:  {}", first.value());
    println!("second counter: {}", second.value());
}

fn account_demo(config: &AccountConfig) {
    println!("\n== Bank account ==");

    let mut account = BankAccount::new(*config);
    if let Ok(balance) = account.deposit(50.0) {
        println!("deposit 50 -> balance {balance}");
    }
    if let Ok(balance) = account.withdraw(25.0) {
        println!("withdraw 25 -> balance {balance}");
    }
    if let Err(err) = account.withdraw(1_000_000.0) {
        println!("withdraw 1000000 rejected: {err}");
    }
    if let Err(err) = account.deposit(-50.0) {
        println!("deposit -50 rejected: {err}");
    }
    println!("final balance: {}", account.balance());
}

fn list_demo() {
    println!("\n== Shopping list ==");

    let mut list = ShoppingList::new();
    list.add("Milk");
    list.add("Bread");
    list.add("Eggs");
    list.remove("Bread");

    println!("items: {:?}", list.items());
}

fn calculator_demo() -> Result<()> {
    println!("\n== Chaining calculator ==");

    let mut calc = Calculator::new();
    let result = calc
        .add(5.0)
        .multiply(2.0)
        .subtract(3.0)
        .add(10.0)
        .divide(2.0)?
        .result();
    println!("((0 + 5) * 2 - 3 + 10) / 2 = {result}");

    println!("divide by zero: {:?}", calc.divide(0.0).map(|_| ()));
    Ok(())
}

fn fib_naive(n: u64, invocations: &mut u64) -> u64 {
    *invocations += 1;
    if n <= 1 {
        return n;
    }
    fib_naive(n - 1, invocations) + fib_naive(n - 2, invocations)
}

fn fib(memo: &mut RecursiveMemo<u64, u64>, n: &u64) -> Result<u64, KeyError> {
    if *n <= 1 {
        return Ok(*n);
    }
    let a = memo.call(&fib, &(*n - 1))?;
    let b = memo.call(&fib, &(*n - 2))?;
    Ok(a + b)
}

fn memo_demo() -> Result<()> {
    println!("\n== Memoization ==");

    let mut naive_invocations = 0;
    let naive = fib_naive(20, &mut naive_invocations);
    println!("naive fib(20) = {naive} in {naive_invocations} invocations");

    let mut memo = RecursiveMemo::new();
    let memoized = memo.call(&fib, &20)?;
    println!(
        "memoized fib(20) = {memoized} in {} invocations",
        memo.invocations()
    );

    memo.call(&fib, &20)?;
    println!(
        "second memoized fib(20): still {} invocations ({} hits)",
        memo.invocations(),
        memo.hits()
    );

    // memoizing a function built from captured state
    let factor = 3_u64;
    let mut scaled = Memo::new(move |n: &u64| n * factor);
    scaled.call(&7)?;
    scaled.call(&7)?;
    println!(
        "scaled(7) twice -> {} invocation(s) of the wrapped closure",
        scaled.invocations()
    );
    Ok(())
}

fn once_demo() {
    println!("\n== Once ==");

    let mut setup = Once::new(|| {
        println!("(expensive setup runs now)");
        42
    });
    println!("first call:  {}", setup.call());
    println!("second call: {}", setup.call());
}

async fn debounce_demo(config: &DebounceConfig) {
    println!("\n== Debounced input handler ==");

    let fired = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&fired);
    let mut debouncer = TaskDebouncer::from_config(config, move |text: String| {
        if let Ok(mut fired) = sink.lock() {
            fired.push(text);
        }
    });

    let gap = Duration::from_millis(50).min(config.delay() / 2);
    for text in ["a", "ab", "abc"] {
        debouncer.call(text.to_string());
        tokio::time::sleep(gap).await;
    }

    tokio::time::sleep(config.delay() + Duration::from_millis(50)).await;

    if let Ok(fired) = fired.lock() {
        println!(
            "3 calls, {} firing(s), last arguments {:?}",
            fired.len(),
            fired.last()
        );
    }
}
