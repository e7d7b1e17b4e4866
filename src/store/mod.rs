//! Application state store: the single source of truth for session state.
//!
//! Callers read the state and dispatch [`AppAction`]s; the store applies them
//! synchronously, wakes subscribers and mirrors the user, test results and
//! placement result to storage once the initial restore has run.

mod actions;
mod context;
mod controller;
mod persist;
mod state;

pub use actions::{AppAction, PersistedData, TestProgress};
pub use context::AppContext;
pub use controller::AppStore;
pub use persist::{PersistOutcome, PersistTask};
pub use state::{reduce, AppState, CurrentTestSession};
