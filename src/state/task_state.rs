/// Task state definitions for tracking a document through the pipeline
use std::fmt;

/// Pipeline stage at which a task failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FailureStage {
    /// Network or HTTP failure retrieving the document
    Fetch,

    /// The bytes could not be decoded into text and a page count
    Parse,

    /// The finished record could not be written
    Persist,

    /// Unexpected failure caught at the task boundary
    Internal,
}

impl FailureStage {
    /// Short identifier used in log entries and stored reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Parse => "parse",
            Self::Persist => "persist",
            Self::Internal => "internal",
        }
    }

    /// Returns all failure stages in pipeline order
    pub fn all() -> [Self; 4] {
        [Self::Fetch, Self::Parse, Self::Persist, Self::Internal]
    }
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents the current state of one document's pipeline
///
/// ```text
/// Pending -> Fetching -> Parsing -> Deriving -> Persisting -> Succeeded
///               |           |          |            |
///               +-----------+----------+------------+--> Failed(stage)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskState {
    // ===== Active States =====
    /// Dispatched, waiting for a worker
    Pending,

    /// Downloading the document bytes
    Fetching,

    /// Decoding the PDF into text
    Parsing,

    /// Computing summary and keywords
    Deriving,

    /// Writing the record to the store
    Persisting,

    // ===== Terminal States =====
    /// Record durably written
    Succeeded,

    /// Stopped at the given stage
    Failed(FailureStage),
}

impl TaskState {
    /// Returns true if no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }

    /// Returns true if this represents a successful completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// The stage a failure raised from this state is attributed to
    ///
    /// `Deriving` is pure and cannot fail on its own, so anything going wrong
    /// there is an internal failure.
    pub fn failure_stage(&self) -> FailureStage {
        match self {
            Self::Pending | Self::Fetching => FailureStage::Fetch,
            Self::Parsing => FailureStage::Parse,
            Self::Persisting => FailureStage::Persist,
            Self::Deriving | Self::Succeeded | Self::Failed(_) => FailureStage::Internal,
        }
    }

    /// Returns true if the machine allows moving from `self` to `next`
    pub fn can_transition_to(&self, next: TaskState) -> bool {
        use TaskState::*;
        match (self, next) {
            (Pending, Fetching)
            | (Fetching, Parsing)
            | (Parsing, Deriving)
            | (Deriving, Persisting)
            | (Persisting, Succeeded) => true,
            (Failed(_) | Succeeded, _) => false,
            (_, Failed(_)) => true,
            _ => false,
        }
    }

    /// Short identifier for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetching => "fetching",
            Self::Parsing => "parsing",
            Self::Deriving => "deriving",
            Self::Persisting => "persisting",
            Self::Succeeded => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(stage) => write!(f, "failed({})", stage),
            other => f.write_str(other.as_str()),
        }
    }
}
