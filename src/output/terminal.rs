//! Terminal rendering of dashboard views and tables.

use colored::Colorize;
use comfy_table::{
    presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, Color, ContentArrangement, Table,
};

use crate::aggregation::EstadoCount;
use crate::comparison::{ChangeDirection, Kpis};
use crate::core::{CategoryCount, DailyCount, EstadoCategory};
use crate::dashboard::DashboardView;
use crate::table::{PageWindow, TurnoPage};

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);
    table
}

/// `+12.5%`, `-3.0%`, or a dash when there is nothing to compare.
pub fn format_change(change: Option<f64>) -> String {
    match change {
        None => "—".dimmed().to_string(),
        Some(pct) => {
            let text = format!("{:+.1}%", pct);
            match ChangeDirection::from_percent(pct) {
                ChangeDirection::Up => text.green().to_string(),
                ChangeDirection::Down => text.red().to_string(),
                ChangeDirection::Flat => text.normal().to_string(),
            }
        }
    }
}

pub fn format_kpis(kpis: &Kpis) -> String {
    let current = &kpis.current;
    let changes = &kpis.comparisons;
    let cards = [
        (
            "Total solicitudes",
            current.total_requests.to_string(),
            changes.total_requests,
        ),
        ("Confirmados", current.confirmed.to_string(), changes.confirmed),
        (
            "Tasa de conversión",
            format!("{:.1}%", current.conversion_rate),
            changes.conversion_rate,
        ),
        (
            "Especialidades activas",
            current.active_specialties.to_string(),
            changes.active_specialties,
        ),
    ];

    let mut table = new_table(&["KPI", "Valor", "vs. período anterior"]);
    for (label, value, change) in cards {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(value).set_alignment(CellAlignment::Right),
            Cell::new(format_change(change)).set_alignment(CellAlignment::Right),
        ]);
    }

    let mut out = table.to_string();
    if !kpis.has_comparison {
        out.push_str(&format!(
            "\n{}",
            "Sin comparación: se requiere un rango de fechas completo".dimmed()
        ));
    }
    out
}

/// Category counts with a proportional bar.
pub fn format_series(title: &str, series: &[CategoryCount]) -> String {
    let mut out = format!("{}\n", title.bold());
    if series.is_empty() {
        out.push_str(&format!("  {}\n", "Sin datos".dimmed()));
        return out;
    }

    let max = series.iter().map(|c| c.value).max().unwrap_or(0).max(1);
    let width = series.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);
    for entry in series {
        let bar = "█".repeat((entry.value * 30).div_ceil(max));
        out.push_str(&format!(
            "  {:<width$}  {:>5}  {}\n",
            entry.name,
            entry.value,
            bar.blue(),
            width = width
        ));
    }
    out
}

pub fn format_estados(series: &[EstadoCount]) -> String {
    let mut table = new_table(&["Estado", "Categoría", "Cantidad"]);
    for entry in series {
        let color = match entry.category {
            EstadoCategory::Confirmed => Color::Green,
            EstadoCategory::Pending => Color::Yellow,
            EstadoCategory::Cancelled => Color::Red,
            EstadoCategory::Unknown => Color::Grey,
        };
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(entry.category.display_name()).fg(color),
            Cell::new(entry.value).set_alignment(CellAlignment::Right),
        ]);
    }
    format!("{}\n{}", "Estados".bold(), table)
}

pub fn format_timeline(timeline: &[DailyCount]) -> String {
    let series: Vec<CategoryCount> = timeline
        .iter()
        .map(|d| CategoryCount::new(d.date.format("%Y-%m-%d").to_string(), d.value))
        .collect();
    format_series("Solicitudes por día", &series)
}

pub fn format_turno_page(page: &TurnoPage) -> String {
    let mut table = new_table(&[
        "Fecha solicitud",
        "Centro",
        "Especialidad",
        "Estado",
        "Fecha turno",
    ]);
    for row in &page.rows {
        let estado_color = match row.categoria {
            EstadoCategory::Confirmed => Color::Green,
            EstadoCategory::Pending => Color::Yellow,
            EstadoCategory::Cancelled => Color::Red,
            EstadoCategory::Unknown => Color::Reset,
        };
        table.add_row(vec![
            Cell::new(&row.fecha_solicitud),
            Cell::new(&row.centro),
            Cell::new(&row.especialidad),
            Cell::new(&row.estado).fg(estado_color),
            Cell::new(&row.fecha_turno),
        ]);
    }
    format!(
        "{}\n{}",
        table,
        format!(
            "Página {} de {} ({} turnos, {})",
            page.page,
            page.total_pages,
            page.total,
            page.direction.display_name()
        )
        .dimmed()
    )
}

pub fn format_page_window(window: &PageWindow<'_>) -> String {
    if window.columns.is_empty() {
        return "Sin datos".dimmed().to_string();
    }

    let headers: Vec<&str> = window.columns.iter().map(String::as_str).collect();
    let mut table = new_table(&headers);
    for row in &window.rows {
        table.add_row(
            window
                .columns
                .iter()
                .map(|column| Cell::new(row.get(column).display()))
                .collect::<Vec<_>>(),
        );
    }
    format!(
        "{}\n{}",
        table,
        format!(
            "Página {} de {} ({} filas)",
            window.page, window.total_pages, window.matched
        )
        .dimmed()
    )
}

pub fn format_dashboard(view: &DashboardView) -> String {
    let charts = &view.charts;
    let mut sections = vec![format_kpis(&view.kpis)];
    if let Some(warning) = &view.comparison_warning {
        sections.push(format!("{} {}", "⚠".yellow(), warning.yellow()));
    }
    sections.push(format_series("Solicitudes por centro", &charts.por_centro));
    sections.push(format_estados(&charts.por_estado));
    sections.push(format_series("Top especialidades", &charts.top_especialidades));
    sections.push(format_series("Top coberturas", &charts.top_coberturas));
    sections.push(format_series(
        "Turnos sin fecha por centro",
        &charts.sin_fecha_por_centro,
    ));
    sections.push(format_timeline(&charts.timeline));
    sections.push(format_turno_page(&view.turnos));
    sections.join("\n\n")
}

/// Shown in place of the dashboard when loading failed.
pub fn format_error(message: &str) -> String {
    format!("{} {}", "Error:".red().bold(), message)
}
