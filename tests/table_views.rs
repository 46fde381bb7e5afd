use pretty_assertions::assert_eq;
use serde_json::json;
use turnos_dashboard::io::decode_view;
use turnos_dashboard::table::{SortDirection, TableView};

fn coberturas_body() -> String {
    json!({
        "ok": true,
        "data": [
            {"cobertura": "OSDE", "plan": 210, "activa": true, "convenio": "SI"},
            {"cobertura": "PAMI", "plan": null, "activa": false, "convenio": "no"},
            {"cobertura": "Swiss Medical", "plan": 310, "activa": true, "convenio": "SI"},
            {"cobertura": "IOMA", "plan": 110, "activa": 1, "convenio": "SI"},
            {"cobertura": "osde binario", "plan": 410, "activa": 0, "convenio": "no"}
        ]
    })
    .to_string()
}

fn names(view: &TableView, table: &turnos_dashboard::DynamicTable) -> Vec<String> {
    view.window(table)
        .rows
        .iter()
        .map(|row| row.get("cobertura").canonical())
        .collect()
}

#[test]
fn test_view_pipeline_search_sort_page() {
    let table = decode_view("views", &coberturas_body()).unwrap();
    assert_eq!(table.columns, vec!["cobertura", "plan", "activa", "convenio"]);

    let mut view = TableView::new(2);
    assert_eq!(view.window(&table).total_pages, 3);

    view.set_query("OSDE");
    assert_eq!(names(&view, &table), vec!["OSDE", "osde binario"]);

    view.set_query("");
    view.toggle_sort("plan");
    // Canonical strings: "" < "110" < "210" < "310" < "410"
    assert_eq!(names(&view, &table), vec!["PAMI", "IOMA"]);

    view.toggle_sort("plan");
    assert_eq!(view.sort().map(|s| s.direction), Some(SortDirection::Descending));
    assert_eq!(names(&view, &table), vec!["osde binario", "Swiss Medical"]);

    view.set_page(99, &table);
    let window = view.window(&table);
    assert_eq!(window.page, 3);
    assert_eq!(window.rows.len(), 1);
    assert_eq!(window.rows[0].get("cobertura").canonical(), "PAMI");
}

#[test]
fn test_search_matches_canonical_booleans_and_numbers() {
    let table = decode_view("views", &coberturas_body()).unwrap();
    let mut view = TableView::new(100);

    view.set_query("false");
    assert_eq!(names(&view, &table), vec!["PAMI"]);

    view.set_query("10");
    assert_eq!(
        names(&view, &table),
        vec!["OSDE", "Swiss Medical", "IOMA", "osde binario"]
    );
}

#[test]
fn test_display_glyphs_do_not_affect_search() {
    let table = decode_view("views", &coberturas_body()).unwrap();
    assert_eq!(table.rows[0].get("activa").display(), "✅");
    assert_eq!(table.rows[1].get("convenio").display(), "❌");

    let mut view = TableView::new(100);
    view.set_query("✅");
    assert!(view.window(&table).rows.is_empty());
}
