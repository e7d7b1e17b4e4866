//! Operations the screens run against the store.
//!
//! Each command validates its input before dispatching anything, so a failed
//! command leaves the state untouched. Commands wait for the write-through they
//! trigger; persistence failures are logged by the store and not reported here.

pub mod account;
pub mod history;
pub mod launch;
pub mod placement;
pub mod practice;

pub use account::{purchase_plan, sign_out, sign_up};
pub use history::{history_summary, HistorySummary};
pub use launch::{launch_destination, LaunchDestination};
pub use placement::submit_placement_quiz;
pub use practice::{finish_practice_test, record_answer, start_practice_test};
