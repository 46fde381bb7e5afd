//! Request status categories.

use serde::Serialize;

/// Known status family of a free-text `estado`.
///
/// Status text is never compared by equality: the category is decided by
/// case-insensitive substring containment, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoCategory {
    /// "asignado": the request got an appointment
    Confirmed,
    /// "pendiente"
    Pending,
    /// "cancelado"
    Cancelled,
    /// Anything else
    Unknown,
}

impl EstadoCategory {
    pub fn classify(estado: &str) -> Self {
        let estado = estado.to_lowercase();
        if estado.contains("asignado") {
            EstadoCategory::Confirmed
        } else if estado.contains("pendiente") {
            EstadoCategory::Pending
        } else if estado.contains("cancelado") {
            EstadoCategory::Cancelled
        } else {
            EstadoCategory::Unknown
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EstadoCategory::Confirmed => "Asignado",
            EstadoCategory::Pending => "Pendiente",
            EstadoCategory::Cancelled => "Cancelado",
            EstadoCategory::Unknown => "Otro",
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, EstadoCategory::Confirmed)
    }
}
