use std::cell::RefCell;

/// Channel through which a mock records an assertion failure without
/// changing what it returns.
pub trait TestReporter {
    fn report_failure(&self, message: String);
}

impl<F: Fn(String)> TestReporter for F {
    fn report_failure(&self, message: String) {
        self(message)
    }
}

/// Reporter that keeps every failure for inspection at the end of a test
#[derive(Debug, Default)]
pub struct FailureRecorder {
    failures: RefCell<Vec<String>>,
}

impl FailureRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded failures, oldest first
    pub fn failures(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.borrow().len()
    }

    /// Panic with every recorded failure if there are any
    pub fn assert_clean(&self) {
        let failures = self.failures.borrow();
        if !failures.is_empty() {
            panic!(
                "{} assertion failure(s) recorded:\n{}",
                failures.len(),
                failures.join("\n")
            );
        }
    }
}

impl TestReporter for FailureRecorder {
    fn report_failure(&self, message: String) {
        tracing::trace!(%message, "assertion failure recorded");
        self.failures.borrow_mut().push(message);
    }
}
