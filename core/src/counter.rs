//! Step-aware counter handle.

use capsule_types::CounterConfig;

/// A counter that exclusively owns its count.
///
/// Two counters are always independent: each `new` call produces a fresh
/// private state, and nothing hands out a reference to it. Mutating
/// operations return the new value; arithmetic saturates at the i64 bounds
/// rather than wrapping.
#[derive(Debug, Clone)]
pub struct Counter {
    value: i64,
    initial_value: i64,
    step: i64,
}

impl Counter {
    #[must_use]
    pub fn new(config: CounterConfig) -> Self {
        Self {
            value: config.initial_value(),
            initial_value: config.initial_value(),
            step: config.step(),
        }
    }

    /// Advance by the configured step and return the new value.
    pub fn increment(&mut self) -> i64 {
        self.value = self.value.saturating_add(self.step);
        self.value
    }

    /// Retreat by the configured step and return the new value.
    pub fn decrement(&mut self) -> i64 {
        self.value = self.value.saturating_sub(self.step);
        self.value
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Restore the configured initial value and return it.
    pub fn reset(&mut self) -> i64 {
        self.value = self.initial_value;
        self.value
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::Counter;
    use capsule_types::CounterConfig;

    #[test]
    fn increment_twice_decrement_once() {
        let mut counter = Counter::new(CounterConfig::with_initial_value(10));
        counter.increment();
        counter.increment();
        counter.decrement();
        assert_eq!(counter.value(), 11);
    }

    #[test]
    fn counters_are_independent() {
        let mut a = Counter::new(CounterConfig::with_initial_value(10));
        let mut b = Counter::new(CounterConfig::with_initial_value(5));

        a.increment();
        a.increment();
        b.increment();

        assert_eq!(a.value(), 12);
        assert_eq!(b.value(), 6);
    }

    #[test]
    fn mutating_ops_return_the_new_value() {
        let mut counter = Counter::default();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.decrement(), 0);
    }

    #[test]
    fn custom_step() {
        let config = CounterConfig::new(0, 5).unwrap();
        let mut counter = Counter::new(config);
        assert_eq!(counter.increment(), 5);
        assert_eq!(counter.increment(), 10);
        assert_eq!(counter.decrement(), 5);
    }

    #[test]
    fn reset_restores_initial_value() {
        let mut counter = Counter::new(CounterConfig::with_initial_value(7));
        counter.increment();
        counter.increment();
        assert_eq!(counter.reset(), 7);
        assert_eq!(counter.value(), 7);
    }

    #[test]
    fn increment_saturates_at_max() {
        let mut counter = Counter::new(CounterConfig::with_initial_value(i64::MAX));
        assert_eq!(counter.increment(), i64::MAX);
    }
}
