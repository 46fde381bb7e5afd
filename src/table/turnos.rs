//! The appointment table, ordered by request timestamp.

use std::cmp::Reverse;

use serde::Serialize;

use super::pagination::{page_count, Pagination};
use super::sort::SortDirection;
use crate::core::{EstadoCategory, Turno};
use crate::normalize::format_display_date;

pub const DEFAULT_TURNOS_PAGE_SIZE: usize = 50;

/// Display projection of one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnoRow {
    pub fecha_solicitud: String,
    pub centro: String,
    pub especialidad: String,
    pub estado: String,
    pub categoria: EstadoCategory,
    pub fecha_turno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cobertura: Option<String>,
}

impl TurnoRow {
    /// ISO timestamps are formatted for display; raw values are the fallback.
    pub fn from_turno(turno: &Turno) -> Self {
        let fecha_solicitud = match turno.fecha_solicitud_iso.as_deref() {
            Some(iso) if !iso.trim().is_empty() => format_display_date(Some(iso)),
            _ => format_display_date(turno.fecha_solicitud.as_deref()),
        };
        let fecha_turno = match turno.fecha_turno_iso.as_deref() {
            Some(iso) if !iso.trim().is_empty() => format_display_date(Some(iso)),
            _ => format_display_date(turno.fecha_turno.as_deref()),
        };

        Self {
            fecha_solicitud,
            centro: turno.centro.clone(),
            especialidad: turno.especialidad.clone(),
            estado: turno.estado.clone(),
            categoria: EstadoCategory::classify(&turno.estado),
            fecha_turno,
            cobertura: turno.cobertura.clone(),
        }
    }
}

/// One page of the appointment table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnoPage {
    pub rows: Vec<TurnoRow>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub direction: SortDirection,
}

/// Sort direction and page of the appointment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnoTable {
    direction: SortDirection,
    pagination: Pagination,
}

impl Default for TurnoTable {
    fn default() -> Self {
        Self::new(DEFAULT_TURNOS_PAGE_SIZE)
    }
}

impl TurnoTable {
    /// Newest requests first.
    pub fn new(page_size: usize) -> Self {
        Self {
            direction: SortDirection::Descending,
            pagination: Pagination::new(page_size),
        }
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Flip the sort direction and return to the first page.
    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
        self.pagination.reset();
    }

    pub fn set_page(&mut self, page: usize, total: usize) {
        self.pagination.set_page(page, total);
    }

    pub fn next_page(&mut self, total: usize) {
        self.pagination.next_page(total);
    }

    pub fn prev_page(&mut self, total: usize) {
        self.pagination.prev_page(total);
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    /// All records in table order. Missing timestamps compare as "".
    pub fn sorted<'a>(&self, records: &'a [Turno]) -> Vec<&'a Turno> {
        let mut sorted: Vec<&Turno> = records.iter().collect();
        let key = |t: &'a Turno| t.fecha_solicitud_iso.as_deref().unwrap_or("");
        match self.direction {
            SortDirection::Ascending => sorted.sort_by_key(|t| key(*t)),
            SortDirection::Descending => sorted.sort_by_key(|t| Reverse(key(*t))),
        }
        sorted
    }

    pub fn page_of(&self, records: &[Turno]) -> TurnoPage {
        let total = records.len();
        let sorted = self.sorted(records);
        let rows = sorted[self.pagination.range(total)]
            .iter()
            .map(|t| TurnoRow::from_turno(*t))
            .collect();

        TurnoPage {
            rows,
            page: self.pagination.effective_page(total),
            total_pages: page_count(total, self.pagination.page_size()).max(1),
            total,
            direction: self.direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turno(iso: Option<&str>, centro: &str) -> Turno {
        Turno {
            centro: centro.into(),
            estado: "Asignado".into(),
            fecha_solicitud_iso: iso.map(Into::into),
            ..Default::default()
        }
    }

    fn centros(page: &TurnoPage) -> Vec<&str> {
        page.rows.iter().map(|r| r.centro.as_str()).collect()
    }

    #[test]
    fn test_default_is_newest_first() {
        let records = vec![
            turno(Some("2024-03-01T10:00:00Z"), "a"),
            turno(None, "sin"),
            turno(Some("2024-03-05T08:00:00Z"), "b"),
        ];
        let page = TurnoTable::default().page_of(&records);
        assert_eq!(page.direction, SortDirection::Descending);
        assert_eq!(centros(&page), vec!["b", "a", "sin"]);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order_both_ways() {
        let records = vec![
            turno(Some("2024-03-02T10:00:00Z"), "a"),
            turno(Some("2024-03-02T10:00:00Z"), "b"),
            turno(None, "c"),
            turno(None, "d"),
        ];
        let desc = TurnoTable::default();
        let sorted: Vec<&str> = desc.sorted(&records).iter().map(|t| t.centro.as_str()).collect();
        assert_eq!(sorted, vec!["a", "b", "c", "d"]);

        let asc = TurnoTable::default().with_direction(SortDirection::Ascending);
        let sorted: Vec<&str> = asc.sorted(&records).iter().map(|t| t.centro.as_str()).collect();
        assert_eq!(sorted, vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn test_toggle_direction_resets_page() {
        let records: Vec<Turno> = (0..120)
            .map(|i| turno(Some(&format!("2024-03-01T00:{:02}:{:02}Z", i / 60, i % 60)), "x"))
            .collect();
        let mut table = TurnoTable::default();
        table.set_page(3, records.len());
        assert_eq!(table.page(), 3);
        assert_eq!(table.page_of(&records).rows.len(), 20);

        table.toggle_direction();
        assert_eq!(table.page(), 1);
        assert_eq!(table.direction(), SortDirection::Ascending);
        let page = table.page_of(&records);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.rows.len(), 50);
    }

    #[test]
    fn test_row_dates_fall_back_to_raw_values() {
        let mut record = turno(Some("2024-03-05T08:00:00Z"), "a");
        record.fecha_turno = Some("a confirmar".into());
        let row = TurnoRow::from_turno(&record);
        assert_eq!(row.fecha_solicitud, "05/03/2024");
        assert_eq!(row.fecha_turno, "a confirmar");
        assert_eq!(row.categoria, EstadoCategory::Confirmed);

        let row = TurnoRow::from_turno(&turno(None, "b"));
        assert_eq!(row.fecha_solicitud, "—");
    }

    #[test]
    fn test_empty_records_single_empty_page() {
        let page = TurnoTable::default().page_of(&[]);
        assert!(page.rows.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }
}
