//! Record, filter and series types shared by every engine component.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::normalize::{iso_date_part, normalize_text, parse_calendar_date};

/// One appointment request as delivered by the spreadsheet endpoint.
///
/// Cells may arrive as strings, numbers, booleans or null; every text field is
/// decoded leniently so a single odd cell never fails the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Turno {
    #[serde(default, deserialize_with = "lenient_text")]
    pub centro: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub especialidad: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub estado: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub fecha_solicitud: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub fecha_solicitud_iso: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub fecha_turno: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub fecha_turno_iso: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub dni: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub cobertura: Option<String>,
    /// Upstream columns without a dedicated field, in arrival order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Turno {
    /// Value of a known field; `None` when the field is absent.
    pub fn field(&self, field: TurnoField) -> Option<&str> {
        match field {
            TurnoField::Centro => Some(self.centro.as_str()),
            TurnoField::Especialidad => Some(self.especialidad.as_str()),
            TurnoField::Estado => Some(self.estado.as_str()),
            TurnoField::Cobertura => self.cobertura.as_deref(),
            TurnoField::Dni => self.dni.as_deref(),
            TurnoField::FechaSolicitud => self.fecha_solicitud.as_deref(),
            TurnoField::FechaTurno => self.fecha_turno.as_deref(),
        }
    }

    /// Look a column up by its upstream name, falling back to the extra
    /// columns for names without a dedicated field.
    pub fn raw_field(&self, name: &str) -> Option<String> {
        let typed = match name {
            "centro" => Some(self.centro.as_str()),
            "especialidad" => Some(self.especialidad.as_str()),
            "estado" => Some(self.estado.as_str()),
            "fecha_solicitud" => self.fecha_solicitud.as_deref(),
            "fecha_solicitud_iso" => self.fecha_solicitud_iso.as_deref(),
            "fecha_turno" => self.fecha_turno.as_deref(),
            "fecha_turno_iso" => self.fecha_turno_iso.as_deref(),
            "dni" => self.dni.as_deref(),
            "cobertura" => self.cobertura.as_deref(),
            _ => {
                return self
                    .extra
                    .get(name)
                    .cloned()
                    .and_then(value_to_text);
            }
        };
        typed.map(str::to_string)
    }

    /// Calendar day of the request, from the authoritative ISO timestamp.
    pub fn request_date(&self) -> Option<NaiveDate> {
        self.fecha_solicitud_iso
            .as_deref()
            .and_then(|iso| parse_calendar_date(iso_date_part(iso)))
    }
}

/// Fields a record can be grouped or listed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnoField {
    Centro,
    Especialidad,
    Estado,
    Cobertura,
    Dni,
    FechaSolicitud,
    FechaTurno,
}

impl TurnoField {
    /// Upstream column name.
    pub fn name(&self) -> &'static str {
        match self {
            TurnoField::Centro => "centro",
            TurnoField::Especialidad => "especialidad",
            TurnoField::Estado => "estado",
            TurnoField::Cobertura => "cobertura",
            TurnoField::Dni => "dni",
            TurnoField::FechaSolicitud => "fecha_solicitud",
            TurnoField::FechaTurno => "fecha_turno",
        }
    }

    /// Display bucket for records where this field is absent or blank.
    pub fn missing_label(&self) -> String {
        format!("Sin {}", self.name())
    }
}

impl fmt::Display for TurnoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Filter selection sent to the endpoint.
///
/// Absent fields place no constraint on their dimension. List fields are
/// OR-sets and are never stored empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centro: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub especialidad: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<Vec<String>>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_from(mut self, from: Option<NaiveDate>) -> Self {
        self.from = from;
        self
    }

    pub fn with_to(mut self, to: Option<NaiveDate>) -> Self {
        self.to = to;
        self
    }

    pub fn with_centros<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.centro = non_empty(values);
        self
    }

    pub fn with_especialidades<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.especialidad = non_empty(values);
        self
    }

    pub fn with_estados<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.estado = non_empty(values);
        self
    }

    /// Both ends of the date range, when the range is fully specified.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.from.zip(self.to)
    }

    /// Period comparison is only meaningful with a closed range.
    pub fn has_range(&self) -> bool {
        self.date_range().is_some()
    }

    /// Query parameters in endpoint form: dates as `YYYY-MM-DD`, lists
    /// comma-joined under a single key.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = self.from {
            pairs.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        let lists = [
            ("centro", &self.centro),
            ("especialidad", &self.especialidad),
            ("estado", &self.estado),
        ];
        for (key, values) in lists {
            if let Some(values) = values.as_ref().filter(|v| !v.is_empty()) {
                pairs.push((key, values.join(",")));
            }
        }
        pairs
    }

    /// Local evaluation of the filter, mirroring what the endpoint does
    /// server-side. Used by offline sources.
    pub fn matches(&self, turno: &Turno) -> bool {
        if self.from.is_some() || self.to.is_some() {
            let Some(day) = turno.request_date() else {
                return false;
            };
            if self.from.is_some_and(|from| day < from) || self.to.is_some_and(|to| day > to) {
                return false;
            }
        }

        list_accepts(&self.centro, &turno.centro)
            && list_accepts(&self.especialidad, &turno.especialidad)
            && list_accepts(&self.estado, &turno.estado)
    }
}

fn non_empty<I, S>(values: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let values: Vec<String> = values
        .into_iter()
        .map(Into::into)
        .filter(|v| !v.trim().is_empty())
        .collect();
    (!values.is_empty()).then_some(values)
}

fn list_accepts(accepted: &Option<Vec<String>>, value: &str) -> bool {
    match accepted {
        None => true,
        Some(list) => {
            let value = normalize_text(value);
            list.iter().any(|candidate| normalize_text(candidate) == value)
        }
    }
}

/// Count for one category of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub value: usize,
}

impl CategoryCount {
    pub fn new(name: impl Into<String>, value: usize) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Count for one calendar day of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub value: usize,
}

/// Decode any JSON scalar as text; null means absent.
pub(crate) fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn lenient_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_to_text))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_text(deserializer)?.unwrap_or_default())
}
