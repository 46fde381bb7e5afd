//! Tagged cell values for tables whose columns are only known at runtime.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One cell of a dynamically shaped row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Arrays and objects, kept as-is.
    Nested(Value),
}

impl CellValue {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Empty,
            Value::String(s) => CellValue::Text(s),
            Value::Number(n) => n
                .as_f64()
                .map(CellValue::Number)
                .unwrap_or_else(|| CellValue::Text(n.to_string())),
            Value::Bool(b) => CellValue::Bool(b),
            nested => CellValue::Nested(nested),
        }
    }

    /// String form used for searching and sorting.
    ///
    /// Independent of display glyphs: booleans are `true`/`false`, integral
    /// numbers have no fraction, nested values are compact JSON.
    pub fn canonical(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Nested(v) => v.to_string(),
        }
    }

    /// Presentation form: yes/no-like values become check/cross glyphs.
    pub fn display(&self) -> String {
        match self {
            CellValue::Bool(true) => CHECK.to_string(),
            CellValue::Bool(false) => CROSS.to_string(),
            CellValue::Number(n) if *n == 1.0 => CHECK.to_string(),
            CellValue::Number(n) if *n == 0.0 => CROSS.to_string(),
            CellValue::Text(s) if is_truthy_text(s) => CHECK.to_string(),
            CellValue::Text(s) if is_falsy_text(s) => CROSS.to_string(),
            other => other.canonical(),
        }
    }
}

const CHECK: &str = "✅";
const CROSS: &str = "❌";

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn is_truthy_text(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "true" | "si" | "sí" | "yes" | "1"
    )
}

fn is_falsy_text(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "false" | "no" | "0")
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Mapping from column name to cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: HashMap<String, CellValue>,
}

impl Row {
    pub fn from_object(object: Map<String, Value>) -> Self {
        Self {
            cells: object
                .into_iter()
                .map(|(k, v)| (k, CellValue::from_json(v)))
                .collect(),
        }
    }

    /// Cell for a column; missing columns read as empty.
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Rows with the column set discovered from the first row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DynamicTable {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl DynamicTable {
    /// Build from decoded JSON rows. Columns come from the first row's keys
    /// in their original order; non-object rows become empty rows.
    pub fn from_json_rows(rows: Vec<Value>) -> Self {
        let columns = match rows.first() {
            Some(Value::Object(first)) => first.keys().cloned().collect(),
            _ => Vec::new(),
        };
        let rows = rows
            .into_iter()
            .map(|row| match row {
                Value::Object(object) => Row::from_object(object),
                _ => Row::default(),
            })
            .collect();
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
