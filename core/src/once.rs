//! Run-once wrapper.

/// Wraps a function so it runs at most once; later calls replay the stored
/// result without invoking the function again.
#[derive(Debug)]
pub struct Once<F, R> {
    func: Option<F>,
    result: Option<R>,
}

impl<F, R> Once<F, R>
where
    F: FnOnce() -> R,
    R: Clone,
{
    #[must_use]
    pub fn new(func: F) -> Self {
        Self {
            func: Some(func),
            result: None,
        }
    }

    /// First call invokes the function; every later call returns a clone of
    /// the stored result.
    pub fn call(&mut self) -> R {
        if self.result.is_none()
            && let Some(func) = self.func.take()
        {
            self.result = Some(func());
        }
        self.result
            .clone()
            .expect("Once::new seeds the function, so a result exists after the first call")
    }

    #[must_use]
    pub fn has_run(&self) -> bool {
        self.result.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Once;

    #[test]
    fn runs_exactly_once() {
        let mut invocations = 0_u32;
        let mut once = Once::new(|| {
            invocations += 1;
            21 * 2
        });

        assert!(!once.has_run());
        assert_eq!(once.call(), 42);
        assert_eq!(once.call(), 42);
        assert_eq!(once.call(), 42);
        assert!(once.has_run());
        drop(once);
        assert_eq!(invocations, 1);
    }

    #[test]
    fn replays_the_first_result() {
        let mut next = 0_u32;
        let mut once = Once::new(move || {
            next += 1;
            next
        });
        assert_eq!(once.call(), 1);
        assert_eq!(once.call(), 1);
    }
}
