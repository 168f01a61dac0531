//! Rule and evaluation result types.

use thiserror::Error;

/// Evaluation strategy, fixed when the schema is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Stop at the first failing rule.
    ShortCircuit,
    /// Run every rule and aggregate all failures.
    #[default]
    CollectAll,
}

/// A single rule failure.
///
/// A rule either describes its failure with plain message text or supplies a
/// preconstructed error value of its own; the schema reports both uniformly.
#[derive(Debug, Error)]
pub enum RuleFailure {
    /// Message text supplied by the rule.
    #[error("{0}")]
    Message(String),
    /// An underlying error value supplied by the rule.
    #[error("{0}")]
    Cause(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The result of applying one rule to one password.
#[derive(Debug)]
pub struct RuleOutcome {
    pass: bool,
    failure: Option<RuleFailure>,
}

impl RuleOutcome {
    /// The rule passed.
    pub fn pass() -> Self {
        Self {
            pass: true,
            failure: None,
        }
    }

    /// The rule failed with message text.
    pub fn fail(msg: impl Into<String>) -> Self {
        Self {
            pass: false,
            failure: Some(RuleFailure::Message(msg.into())),
        }
    }

    /// The rule failed with its own error value.
    pub fn fail_with(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            pass: false,
            failure: Some(RuleFailure::Cause(Box::new(err))),
        }
    }

    pub fn passed(&self) -> bool {
        self.pass
    }

    pub(crate) fn into_failure(self) -> RuleFailure {
        self.failure
            .unwrap_or_else(|| RuleFailure::Message(String::new()))
    }
}

/// The aggregate result of evaluating a password against a schema.
///
/// Short-circuit mode reports at most one failure; collect-all mode always
/// reports the full list, which is empty when every rule passed. An empty
/// rule set yields `Success` in both modes.
#[derive(Debug)]
pub enum Evaluation {
    /// Every rule passed (or the rule set was empty).
    Success,
    /// Short-circuit mode: the first failing rule. Later rules never ran.
    Failure(RuleFailure),
    /// Collect-all mode: every failure, in rule-registration order.
    Failures(Vec<RuleFailure>),
    /// Evaluation was cancelled before all rules ran.
    #[cfg(feature = "async")]
    Cancelled,
}

impl Evaluation {
    /// The primary pass/fail signal.
    pub fn passed(&self) -> bool {
        match self {
            Evaluation::Success => true,
            Evaluation::Failure(_) => false,
            Evaluation::Failures(failures) => failures.is_empty(),
            #[cfg(feature = "async")]
            Evaluation::Cancelled => false,
        }
    }

    /// Failure messages in report order; empty on success.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Evaluation::Success => Vec::new(),
            Evaluation::Failure(failure) => vec![failure.to_string()],
            Evaluation::Failures(failures) => failures.iter().map(|f| f.to_string()).collect(),
            #[cfg(feature = "async")]
            Evaluation::Cancelled => Vec::new(),
        }
    }
}
