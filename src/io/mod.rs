//! Fetch layer: endpoint envelopes, the HTTP client and offline sources.

pub mod envelope;
pub mod http;
pub mod memory;
pub mod traits;

pub use envelope::{decode_turnos, decode_view, turnos_from_rows, ApiResponse};
pub use http::HttpClient;
pub use memory::{load_turnos_file, parse_turnos_dump, InMemorySource};
pub use traits::{TurnoSource, ViewSource};
