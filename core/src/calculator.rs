//! Chaining calculator handle.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivideByZero,
}

/// A running-total calculator with method chaining.
///
/// The accumulator starts at zero and is only reachable through the
/// operations below. `divide` rejects a zero divisor and leaves the
/// accumulator untouched, so a failed chain can keep going from the last
/// good value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    result: f64,
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, n: f64) -> &mut Self {
        self.result += n;
        self
    }

    pub fn subtract(&mut self, n: f64) -> &mut Self {
        self.result -= n;
        self
    }

    pub fn multiply(&mut self, n: f64) -> &mut Self {
        self.result *= n;
        self
    }

    pub fn divide(&mut self, n: f64) -> Result<&mut Self, CalcError> {
        if n == 0.0 {
            return Err(CalcError::DivideByZero);
        }
        self.result /= n;
        Ok(self)
    }

    #[must_use]
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Reset the accumulator to zero.
    pub fn clear(&mut self) -> &mut Self {
        self.result = 0.0;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{CalcError, Calculator};

    #[test]
    fn chained_operations() {
        let mut calc = Calculator::new();
        let result = calc
            .add(5.0)
            .multiply(2.0)
            .subtract(3.0)
            .add(10.0)
            .divide(2.0)
            .unwrap()
            .result();
        assert_eq!(result, 8.5);
    }

    #[test]
    fn divide_by_zero_leaves_accumulator_unchanged() {
        let mut calc = Calculator::new();
        calc.add(10.0);
        assert_eq!(calc.divide(0.0), Err(CalcError::DivideByZero));
        assert_eq!(calc.result(), 10.0);
    }

    #[test]
    fn clear_resets_to_zero() {
        let mut calc = Calculator::new();
        calc.add(42.0).clear();
        assert_eq!(calc.result(), 0.0);
    }

    #[test]
    fn calculators_are_independent() {
        let mut a = Calculator::new();
        let b = Calculator::new();
        a.add(1.0);
        assert_eq!(a.result(), 1.0);
        assert_eq!(b.result(), 0.0);
    }
}
