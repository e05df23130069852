//! Batch orchestrator - fan-out of the per-document pipeline
//!
//! This module drives every URL of a batch through
//! fetch → extract → derive → persist as an independent task:
//! - A semaphore bounds how many documents are in flight at once
//! - Each task captures its own outcome; failures never reach siblings
//! - The orchestrator waits for every task before reporting

use crate::derive::{ExtractKeywords, FrequencyKeywords, PeriodSummarizer, Summarize};
use crate::pipeline::extractor::{LopdfExtractor, TextExtractor};
use crate::pipeline::fetcher::Fetcher;
use crate::pipeline::SummaryRecord;
use crate::state::{FailureStage, TaskState};
use crate::storage::Persister;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

/// Default worker pool size
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Terminal result of one document's pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The record was written
    Succeeded { url: String },

    /// The pipeline stopped at `stage`
    Failed {
        url: String,
        stage: FailureStage,
        cause: String,
    },
}

impl TaskOutcome {
    pub fn url(&self) -> &str {
        match self {
            Self::Succeeded { url } | Self::Failed { url, .. } => url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// The failing stage, if any
    pub fn stage(&self) -> Option<FailureStage> {
        match self {
            Self::Succeeded { .. } => None,
            Self::Failed { stage, .. } => Some(*stage),
        }
    }

    /// The terminal [`TaskState`] this outcome corresponds to
    pub fn state(&self) -> TaskState {
        match self {
            Self::Succeeded { .. } => TaskState::Succeeded,
            Self::Failed { stage, .. } => TaskState::Failed(*stage),
        }
    }
}

/// Aggregate result of a batch, produced after every task has finished
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Number of URLs dispatched
    pub attempted: usize,

    /// Number of records written
    pub succeeded: usize,

    /// Failure counts per stage
    pub failed_by_stage: BTreeMap<FailureStage, usize>,

    /// Wall-clock time from dispatch to the completion barrier
    pub elapsed: Duration,

    /// One outcome per dispatched URL, in input order
    pub outcomes: Vec<TaskOutcome>,
}

impl BatchReport {
    /// Builds a report from the collected task outcomes
    pub fn from_outcomes(outcomes: Vec<TaskOutcome>, elapsed: Duration) -> Self {
        let mut failed_by_stage = BTreeMap::new();
        let mut succeeded = 0;

        for outcome in &outcomes {
            match outcome.stage() {
                None => succeeded += 1,
                Some(stage) => *failed_by_stage.entry(stage).or_insert(0) += 1,
            }
        }

        Self {
            attempted: outcomes.len(),
            succeeded,
            failed_by_stage,
            elapsed,
            outcomes,
        }
    }

    /// Total failed tasks across all stages
    pub fn failed(&self) -> usize {
        self.failed_by_stage.values().sum()
    }
}

/// The collaborators every task runs through
#[derive(Clone)]
struct Stages {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn TextExtractor>,
    summarizer: Arc<dyn Summarize>,
    keywords: Arc<dyn ExtractKeywords>,
    persister: Arc<dyn Persister>,
}

/// Runs batches of URLs through the digest pipeline
pub struct Orchestrator {
    stages: Stages,
    concurrency: usize,
}

impl Orchestrator {
    /// Creates an orchestrator with the default extractor, summarizer and
    /// keyword extractor and a pool of [`DEFAULT_CONCURRENCY`] workers
    pub fn new(fetcher: Arc<dyn Fetcher>, persister: Arc<dyn Persister>) -> Self {
        Self {
            stages: Stages {
                fetcher,
                extractor: Arc::new(LopdfExtractor),
                summarizer: Arc::new(PeriodSummarizer),
                keywords: Arc::new(FrequencyKeywords::default()),
                persister,
            },
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Sets the worker pool size (clamped to at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.stages.extractor = extractor;
        self
    }

    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarize>) -> Self {
        self.stages.summarizer = summarizer;
        self
    }

    pub fn with_keywords(mut self, keywords: Arc<dyn ExtractKeywords>) -> Self {
        self.stages.keywords = keywords;
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Processes every URL and waits for all of them to finish
    ///
    /// Never fails: per-document errors are logged and counted in the
    /// returned report.
    pub async fn run(&self, urls: Vec<String>) -> BatchReport {
        let start = Instant::now();
        let total = urls.len();
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let shared = Arc::new(self.stages.clone());

        tracing::info!(
            "Dispatching {} documents with {} workers",
            total,
            self.concurrency
        );

        let handles: Vec<(String, JoinHandle<TaskOutcome>)> = urls
            .into_iter()
            .map(|url| {
                let stages = Arc::clone(&shared);
                let semaphore = Arc::clone(&semaphore);
                let task_url = url.clone();
                let handle = tokio::spawn(async move {
                    let _permit = match semaphore.acquire_owned().await {
                        Ok(permit) => permit,
                        Err(e) => {
                            return TaskProgress::new(task_url).fail(FailureStage::Internal, e)
                        }
                    };
                    process_document(&stages, task_url).await
                });
                (url, handle)
            })
            .collect();

        // Completion barrier
        let mut outcomes = Vec::with_capacity(total);
        for (done, (url, handle)) in handles.into_iter().enumerate() {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => TaskProgress::new(url).fail(FailureStage::Internal, e),
            };
            outcomes.push(outcome);

            if (done + 1) % 10 == 0 {
                tracing::info!("Progress: {}/{} documents collected", done + 1, total);
            }
        }

        let report = BatchReport::from_outcomes(outcomes, start.elapsed());
        tracing::info!(
            "Batch completed: {} of {} documents digested in {:?}",
            report.succeeded,
            report.attempted,
            report.elapsed
        );
        report
    }
}

/// Tracks one task through the [`TaskState`] machine
struct TaskProgress {
    url: String,
    state: TaskState,
}

impl TaskProgress {
    fn new(url: String) -> Self {
        Self {
            url,
            state: TaskState::Pending,
        }
    }

    fn advance(&mut self, next: TaskState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid task transition {} -> {}",
            self.state,
            next
        );
        tracing::trace!("{}: {} -> {}", self.url, self.state, next);
        self.state = next;
    }

    fn succeed(mut self) -> TaskOutcome {
        self.advance(TaskState::Succeeded);
        tracing::debug!("Digested {}", self.url);
        TaskOutcome::Succeeded { url: self.url }
    }

    fn fail(mut self, stage: FailureStage, cause: impl Display) -> TaskOutcome {
        let cause = cause.to_string();
        tracing::error!(url = %self.url, stage = %stage, "Failed to process document: {}", cause);
        if !self.state.is_terminal() {
            self.advance(TaskState::Failed(stage));
        }
        TaskOutcome::Failed {
            url: self.url,
            stage,
            cause,
        }
    }

    /// Fails at whatever stage the task is currently in
    fn fail_here(self, cause: impl Display) -> TaskOutcome {
        let stage = self.state.failure_stage();
        self.fail(stage, cause)
    }
}

/// Runs fetch → extract → derive → persist for a single URL
async fn process_document(stages: &Stages, url: String) -> TaskOutcome {
    let mut task = TaskProgress::new(url);

    task.advance(TaskState::Fetching);
    let bytes = match stages.fetcher.fetch(&task.url).await {
        Ok(bytes) => bytes,
        Err(e) => return task.fail_here(e),
    };

    task.advance(TaskState::Parsing);
    let extractor = Arc::clone(&stages.extractor);
    let parsed = match tokio::task::spawn_blocking(move || extractor.extract(&bytes)).await {
        Ok(Ok(parsed)) => parsed,
        Ok(Err(e)) => return task.fail_here(e),
        Err(e) => return task.fail_here(e),
    };

    task.advance(TaskState::Deriving);
    let summary = stages.summarizer.summarize(&parsed.text, parsed.page_count);
    let keywords = stages
        .keywords
        .extract_keywords(&parsed.text, parsed.page_count);
    let record = SummaryRecord::new(task.url.clone(), summary, keywords, parsed.page_count);

    task.advance(TaskState::Persisting);
    if let Err(e) = stages.persister.persist(&record).await {
        return task.fail_here(e);
    }

    task.succeed()
}
