use super::store::StagedItem;
use crate::utils::id::opaque_id;
use chrono::{DateTime, Local};
use std::path::Path;

pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["pdf", "doc", "docx", "txt"];

/// Maps an accepted extension to its MIME type; `None` means the file is
/// rejected at the drop surface.
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension().and_then(|e| e.to_str())?.to_lowercase();
    match ext.as_str() {
        "pdf" => Some("application/pdf"),
        "doc" => Some("application/msword"),
        "docx" => {
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        "txt" => Some("text/plain"),
        _ => None,
    }
}

/// Variant order is stage order; the store only allows forward moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DocumentStatus {
    Uploading,
    Processing,
    Completed,
    Error,
}

impl DocumentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Uploading => "uploading",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub status: DocumentStatus,
}

impl UploadedDocument {
    pub fn new(name: String, size: u64, mime_type: &str) -> Self {
        Self {
            id: opaque_id(),
            name,
            size,
            mime_type: mime_type.to_string(),
            status: DocumentStatus::Uploading,
        }
    }
}

impl StagedItem for UploadedDocument {
    type Status = DocumentStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> DocumentStatus {
        self.status
    }

    fn set_status(&mut self, status: DocumentStatus) {
        self.status = status;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AssessmentStatus {
    Generating,
    Ready,
    Completed,
}

impl AssessmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Generating => "generating",
            Self::Ready => "ready",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Mixed,
}

impl AssessmentKind {
    pub const ALL: [AssessmentKind; 4] = [
        Self::MultipleChoice,
        Self::TrueFalse,
        Self::ShortAnswer,
        Self::Mixed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::MultipleChoice => "Multiple Choice",
            Self::TrueFalse => "True/False",
            Self::ShortAnswer => "Short Answer",
            Self::Mixed => "Mixed Format",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// A fully validated generator submission. Built by the form; every field is
/// required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentRequest {
    pub topic: String,
    pub kind: AssessmentKind,
    pub difficulty: Difficulty,
    pub question_count: u32,
}

#[derive(Debug, Clone)]
pub struct Assessment {
    pub id: String,
    pub title: String,
    pub kind: AssessmentKind,
    pub difficulty: Difficulty,
    pub question_count: u32,
    pub status: AssessmentStatus,
    pub created_at: DateTime<Local>,
}

impl Assessment {
    pub fn new(request: &AssessmentRequest, created_at: DateTime<Local>) -> Self {
        Self {
            id: opaque_id(),
            title: format!("{} Assessment", request.topic),
            kind: request.kind,
            difficulty: request.difficulty,
            question_count: request.question_count,
            status: AssessmentStatus::Generating,
            created_at,
        }
    }
}

impl StagedItem for Assessment {
    type Status = AssessmentStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> AssessmentStatus {
        self.status
    }

    fn set_status(&mut self, status: AssessmentStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(topic: &str) -> AssessmentRequest {
        AssessmentRequest {
            topic: topic.to_string(),
            kind: AssessmentKind::MultipleChoice,
            difficulty: Difficulty::Hard,
            question_count: 10,
        }
    }

    #[test]
    fn assessment_title_is_derived_from_the_topic() {
        let assessment = Assessment::new(&request("Linear Algebra"), Local::now());
        assert_eq!(assessment.title, "Linear Algebra Assessment");
        assert_eq!(assessment.status, AssessmentStatus::Generating);
        assert_eq!(assessment.question_count, 10);
    }

    #[test]
    fn fresh_items_get_distinct_ids() {
        let a = Assessment::new(&request("Calculus"), Local::now());
        let b = Assessment::new(&request("Calculus"), Local::now());
        assert_ne!(a.id, b.id);

        let c = UploadedDocument::new("notes.pdf".to_string(), 10, "application/pdf");
        let d = UploadedDocument::new("notes.pdf".to_string(), 10, "application/pdf");
        assert_ne!(c.id, d.id);
    }

    #[test]
    fn mime_types_cover_the_accepted_extensions() {
        assert_eq!(
            mime_type_for(Path::new("syllabus.pdf")),
            Some("application/pdf")
        );
        assert_eq!(
            mime_type_for(Path::new("notes.TXT")),
            Some("text/plain")
        );
        assert_eq!(
            mime_type_for(Path::new("essay.docx")),
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        );
        assert_eq!(mime_type_for(Path::new("photo.png")), None);
        assert_eq!(mime_type_for(Path::new("no_extension")), None);
    }

    #[test]
    fn document_terminal_statuses() {
        assert!(DocumentStatus::Completed.is_terminal());
        assert!(DocumentStatus::Error.is_terminal());
        assert!(!DocumentStatus::Uploading.is_terminal());
        assert!(!DocumentStatus::Processing.is_terminal());
    }
}
