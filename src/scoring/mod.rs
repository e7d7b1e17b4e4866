pub mod config;
pub mod placement;
pub mod practice;

pub use config::ScoringConfig;
pub use placement::score_placement;
pub use practice::score_test;

/// Rounded share of `correct` out of `total`, 0 for an empty set.
pub(crate) fn percentage(correct: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}
