use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, Duration, TimeZone, Utc};
use log::info;
use uuid::Uuid;

use crate::{
    catalog::Catalog,
    models::{Subscription, SubscriptionStatus, User},
    store::{AppAction, AppStore},
};

/// Create a local account from the catalog's template profile and sign it in.
/// There is no server-side account; the record only lives in session state.
pub async fn sign_up(store: &AppStore, catalog: &Catalog, email: &str, name: &str) -> Result<User> {
    let email = email.trim();
    let name = name.trim();
    if email.is_empty() || name.is_empty() {
        bail!("email and name are required");
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        email: email.to_string(),
        name: Some(name.to_string()),
        ..catalog.template_user.clone()
    };

    let persisted = store.dispatch(AppAction::SetUser(user.clone()));
    store.dispatch(AppAction::SetAuthenticated(true));
    persisted.wait().await;

    info!("Signed up user {}", user.id);
    Ok(user)
}

pub async fn sign_out(store: &AppStore) {
    store.dispatch(AppAction::SignOut).wait().await;
}

/// Expiry recorded for lifetime plans.
fn lifetime_expiry() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2099, 12, 31, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Switch the signed-in user to `plan_id`. No payment is taken; this is the
/// state change a successful checkout produces.
pub async fn purchase_plan(
    store: &AppStore,
    catalog: &Catalog,
    plan_id: &str,
    now: DateTime<Utc>,
) -> Result<Subscription> {
    let plan = catalog
        .plan(plan_id)
        .ok_or_else(|| anyhow!("unknown subscription plan '{plan_id}'"))?;
    let user = store
        .state()
        .user
        .ok_or_else(|| anyhow!("no signed-in user to upgrade"))?;

    let expires_at = match plan.period.duration_days() {
        Some(days) => now + Duration::days(days),
        None => lifetime_expiry(),
    };
    let subscription = Subscription {
        plan: plan.period.tier(),
        status: SubscriptionStatus::Active,
        expires_at,
    };

    store
        .dispatch(AppAction::SetUser(User {
            subscription: subscription.clone(),
            ..user
        }))
        .wait()
        .await;

    info!("User upgraded to the {} plan", subscription.plan.as_str());
    Ok(subscription)
}
