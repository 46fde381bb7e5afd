//! Tabular views: generic runtime-shaped tables and the appointment table.

pub mod filter;
pub mod pagination;
pub mod sort;
pub mod turnos;
pub mod value;
pub mod view;

pub use filter::{filter_indices, row_matches};
pub use pagination::{clamp_page, page_count, page_range, Pagination};
pub use sort::{sort_indices, toggle_sort, SortDirection, SortState};
pub use turnos::{TurnoPage, TurnoRow, TurnoTable, DEFAULT_TURNOS_PAGE_SIZE};
pub use value::{CellValue, DynamicTable, Row};
pub use view::{PageWindow, TableView};
