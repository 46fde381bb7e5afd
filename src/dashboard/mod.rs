//! Stateful dashboard session and its derived view.

pub mod session;
pub mod view;

pub use session::{ApplyOutcome, DashboardSession, DashboardSnapshot, LoadState};
pub use view::DashboardView;
