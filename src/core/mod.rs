//! Core data model and error types.

pub mod errors;
pub mod estado;
pub mod types;

pub use errors::{Error, FetchError, Result};
pub use estado::EstadoCategory;
pub use types::{CategoryCount, DailyCount, FilterParams, Turno, TurnoField};
