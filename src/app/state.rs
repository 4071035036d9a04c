use crate::pipeline::{AssessmentKind, AssessmentRequest, Difficulty};

pub const QUESTION_COUNTS: [u32; 4] = [5, 10, 15, 20];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Documents,
    Assessments,
    Recommendations,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Self::Overview,
        Self::Documents,
        Self::Assessments,
        Self::Recommendations,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Documents => "Documents",
            Self::Assessments => "Assessments",
            Self::Recommendations => "AI Recommendations",
        }
    }

    /// Stable key used in the config file.
    pub fn key(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Documents => "documents",
            Self::Assessments => "assessments",
            Self::Recommendations => "recommendations",
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

/// Draft state of the assessment generator form. Selects start unset so a
/// submission requires an explicit choice for every field.
#[derive(Debug, Clone, Default)]
pub struct GeneratorForm {
    pub topic: String,
    pub kind: Option<AssessmentKind>,
    pub difficulty: Option<Difficulty>,
    pub question_count: Option<u32>,
}

impl GeneratorForm {
    /// All four fields are required; `None` means the form is incomplete.
    pub fn submission(&self) -> Option<AssessmentRequest> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return None;
        }
        Some(AssessmentRequest {
            topic: topic.to_string(),
            kind: self.kind?,
            difficulty: self.difficulty?,
            question_count: self.question_count?,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
