use super::types::{AssessmentStatus, DocumentStatus, UploadedDocument};
use std::time::{Duration, Instant};

/// Delay before a document moves from uploading to processing.
pub const PROCESSING_DELAY: Duration = Duration::from_secs(1);
/// Total delay before an item reaches its terminal success stage.
pub const COMPLETION_DELAY: Duration = Duration::from_secs(3);

/// Source of the current instant. The app injects `SystemClock`; tests pass
/// fabricated instants and never sleep.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// User-visible completion message attached to a terminal transition.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

/// One pending status change for one item.
#[derive(Debug, Clone)]
pub struct Transition<S> {
    pub item_id: String,
    pub status: S,
    pub fires_at: Instant,
    pub notice: Option<Notice>,
}

/// Pollable queue of pending transitions. There is no cancellation and no
/// retry; once scheduled, a transition fires on the first poll at or after
/// its deadline, regardless of which tab is visible.
#[derive(Debug)]
pub struct StageScheduler<S> {
    pending: Vec<Transition<S>>,
}

impl<S> StageScheduler<S> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, transition: Transition<S>) {
        self.pending.push(transition);
    }

    /// Removes and returns every transition due at `now`, ordered by fire
    /// time. Transitions for different items stay independent.
    pub fn drain_due(&mut self, now: Instant) -> Vec<Transition<S>> {
        let mut due = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].fires_at <= now {
                due.push(self.pending.remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by_key(|transition| transition.fires_at);
        due
    }

    /// Earliest pending deadline, used to request a timed repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|transition| transition.fires_at).min()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<S> Default for StageScheduler<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// The two fixed stages of the document pipeline: processing after one
/// second, completed (with its toast) after three.
pub fn document_stages(
    document: &UploadedDocument,
    now: Instant,
) -> [Transition<DocumentStatus>; 2] {
    [
        Transition {
            item_id: document.id.clone(),
            status: DocumentStatus::Processing,
            fires_at: now + PROCESSING_DELAY,
            notice: None,
        },
        Transition {
            item_id: document.id.clone(),
            status: DocumentStatus::Completed,
            fires_at: now + COMPLETION_DELAY,
            notice: Some(Notice {
                title: "Document Processed".to_string(),
                body: format!(
                    "{} has been processed and is ready for analysis.",
                    document.name
                ),
            }),
        },
    ]
}

/// Assessments skip the intermediate stage and go straight to ready.
pub fn assessment_stage(
    assessment_id: &str,
    topic: &str,
    now: Instant,
) -> Transition<AssessmentStatus> {
    Transition {
        item_id: assessment_id.to_string(),
        status: AssessmentStatus::Ready,
        fires_at: now + COMPLETION_DELAY,
        notice: Some(Notice {
            title: "Assessment Generated".to_string(),
            body: format!("Your {} assessment is ready to use!", topic),
        }),
    }
}
