use serde::Serialize;

use crate::{models::PlanTier, store::AppState};

/// Where the app should land after startup.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LaunchDestination {
    /// Persisted data is still being restored.
    Loading,
    Welcome,
    Pricing,
    Home,
}

pub fn launch_destination(state: &AppState) -> LaunchDestination {
    if state.is_loading {
        return LaunchDestination::Loading;
    }

    match (&state.user, state.is_authenticated) {
        (Some(user), true) if user.subscription.plan == PlanTier::Free => {
            LaunchDestination::Pricing
        }
        (Some(_), true) => LaunchDestination::Home,
        _ => LaunchDestination::Welcome,
    }
}
