use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::Dimension;
use crate::data::model::Measure;
use crate::format;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };
    if dataset.is_empty() {
        ui.label("The loaded sheet has no rows.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for dim in Dimension::ALL {
                let all_values = dim.universe(&dataset);

                // "Select All" mirrors whether the whole universe is selected.
                let mut all = state.selection.is_all_selected(dim, &dataset);
                if ui
                    .checkbox(&mut all, format!("Select All {}", dim.label()))
                    .changed()
                {
                    if all {
                        state.select_all(dim);
                    } else {
                        state.select_none(dim);
                    }
                }

                let n_selected = state.selection.values(dim).len();
                let header_text = format!("{}  ({n_selected}/{})", dim.label(), all_values.len());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(dim.label())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        for val in all_values {
                            let mut checked = state.selection.values(dim).contains(val);
                            if ui.checkbox(&mut checked, val.as_str()).changed() {
                                state.toggle_filter_value(dim, val);
                            }
                        }
                    });
                ui.separator();
            }

            // ---- Year range ----
            if let Some((min_year, max_year)) = dataset.year_bounds {
                ui.strong("Select Year Range:");
                let (mut from, mut to) = state.selection.years;
                ui.add(egui::Slider::new(&mut from, min_year..=max_year).text("from"));
                ui.add(egui::Slider::new(&mut to, min_year..=max_year).text("to"));
                state.set_year_range(from, to);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.tab, Tab::Dashboard, "Dashboard");
        ui.selectable_value(&mut state.tab, Tab::DataView, "Data View");

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} visible",
                ds.len(),
                state.view.totals.rows
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// KPI row
// ---------------------------------------------------------------------------

pub fn kpi_row(ui: &mut Ui, state: &AppState) {
    let totals = &state.view.totals;
    let kpis = [
        ("Total Case Equivs", format::thousands(totals.case_equivalents, 2)),
        ("Total Units Sold", format::count(totals.units_sold)),
        ("Total Revenue", format::currency(totals.net_price)),
    ];
    ui.columns(kpis.len(), |cols| {
        for (col, (label, value)) in cols.iter_mut().zip(kpis) {
            col.label(RichText::new(label).weak());
            col.label(RichText::new(value).size(28.0).strong());
        }
    });
}

/// Measure picker for the comparison view.
pub fn measure_selector(ui: &mut Ui, state: &mut AppState) {
    let mut measure = state.comparison_measure;
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select Metric:");
        egui::ComboBox::from_id_salt("compare_metric")
            .selected_text(measure.label())
            .show_ui(ui, |ui: &mut Ui| {
                for m in Measure::ALL {
                    ui.selectable_value(&mut measure, m, m.label());
                }
            });
    });
    state.set_comparison_measure(measure);
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sales data")
        .add_filter("Supported files", &["xlsx", "xlsm", "xlsb", "xls", "ods", "csv", "json", "parquet", "pq"])
        .add_filter("Excel / ODS", &["xlsx", "xlsm", "xlsb", "xls", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(path);
    }
}
