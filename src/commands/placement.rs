use anyhow::{bail, Result};
use log::info;

use crate::{
    catalog::Catalog,
    models::{Answers, PlacementQuizResult},
    scoring::{score_placement, ScoringConfig},
    store::{AppAction, AppStore},
};

/// Score the catalog's placement quiz and store the result, replacing any
/// earlier attempt. Unanswered questions count as wrong.
pub async fn submit_placement_quiz(
    store: &AppStore,
    catalog: &Catalog,
    answers: &Answers,
    config: &ScoringConfig,
) -> Result<PlacementQuizResult> {
    if catalog.placement_questions.is_empty() {
        bail!("catalog has no placement questions");
    }

    let result = score_placement(&catalog.placement_questions, answers, config);
    store
        .dispatch(AppAction::SetPlacementResult(result.clone()))
        .wait()
        .await;

    info!(
        "Placement quiz scored: {} ({}% confidence)",
        result.estimated_level, result.confidence
    );
    Ok(result)
}
