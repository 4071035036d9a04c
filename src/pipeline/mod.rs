mod scheduler;
mod store;
mod types;

pub use scheduler::{
    assessment_stage, document_stages, Clock, Notice, StageScheduler, SystemClock, Transition,
    COMPLETION_DELAY, PROCESSING_DELAY,
};
pub use store::{StagedItem, StagedStore};
pub use types::{
    mime_type_for, Assessment, AssessmentKind, AssessmentRequest, AssessmentStatus, Difficulty,
    DocumentStatus, UploadedDocument, SUPPORTED_EXTENSIONS,
};
