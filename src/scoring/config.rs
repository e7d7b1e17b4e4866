/// Thresholds and labels used when turning answers into scores.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Minimum percentage for a practice test to count as passed.
    pub pass_threshold_percent: u32,

    /// Placement accuracy below this marks the weak areas below.
    pub weak_accuracy_threshold: f64,

    /// Placement feedback labels
    pub placement_strong_areas: Vec<String>,
    pub placement_weak_areas: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pass_threshold_percent: 60,
            weak_accuracy_threshold: 0.7,
            placement_strong_areas: vec!["Reading Comprehension".into()],
            placement_weak_areas: vec!["Vocabulary".into(), "Grammar".into()],
        }
    }
}
