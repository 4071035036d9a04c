#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationKind {
    Review,
    Practice,
    Explore,
}

impl RecommendationKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Review => "🧠",
            Self::Practice => "⭐",
            Self::Explore => "💡",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Recommendation {
    pub title: &'static str,
    pub reason: &'static str,
    pub priority: Priority,
    pub estimated_time: &'static str,
    pub confidence: u32,
    pub topics: &'static [&'static str],
    pub kind: RecommendationKind,
}

static STUDY_PLAN: [Recommendation; 3] = [
    Recommendation {
        title: "Review Machine Learning Fundamentals",
        reason: "Based on your recent assessment performance",
        priority: Priority::High,
        estimated_time: "45 min",
        confidence: 92,
        topics: &["Neural Networks", "Supervised Learning"],
        kind: RecommendationKind::Review,
    },
    Recommendation {
        title: "Practice Data Structures Problems",
        reason: "Identified knowledge gap in algorithms",
        priority: Priority::Medium,
        estimated_time: "30 min",
        confidence: 87,
        topics: &["Trees", "Graphs"],
        kind: RecommendationKind::Practice,
    },
    Recommendation {
        title: "Explore Advanced Statistics",
        reason: "Next logical step in your learning path",
        priority: Priority::Low,
        estimated_time: "60 min",
        confidence: 78,
        topics: &["Bayesian Methods", "Hypothesis Testing"],
        kind: RecommendationKind::Explore,
    },
];

/// The hard-coded study plan shown on the overview and recommendations tabs.
pub fn study_recommendations() -> &'static [Recommendation] {
    &STUDY_PLAN
}
