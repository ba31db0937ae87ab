use serde::Serialize;

/// Outcome of one rule invocation against one notebook or folder.
///
/// A failed result always carries at least one message explaining the failure;
/// a passed result carries at least one informational message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    name: &'static str,
    passed: bool,
    messages: Vec<String>,
}

impl CheckResult {
    #[must_use]
    pub fn pass(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            passed: true,
            messages: vec![message.into()],
        }
    }

    #[must_use]
    pub fn fail(name: &'static str, message: impl Into<String>) -> Self {
        Self::fail_many(name, vec![message.into()])
    }

    /// Builds a failure from several violations.
    ///
    /// `messages` must not be empty.
    #[must_use]
    pub fn fail_many(name: &'static str, messages: Vec<String>) -> Self {
        debug_assert!(!messages.is_empty(), "failed check {name} needs a message");
        Self {
            name,
            passed: false,
            messages,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.passed
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.passed { "PASS" } else { "FAIL" }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
