//! Services: orchestration over the domain rules and repositories.

pub mod session;

pub use session::{AwardOutcome, SessionController, TurnOutcome};
