use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::yoy_color;
use crate::data::compare::Window;
use crate::data::loader::COLUMNS;
use crate::format;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Comparison table
// ---------------------------------------------------------------------------

/// Month label, both windows and a sign-coloured YoY column.
pub fn comparison_table(ui: &mut Ui, state: &AppState) {
    let Some(comparison) = &state.view.comparison else {
        ui.label("No data for the current filters.");
        return;
    };

    ui.label(
        RichText::new(format!(
            "Last 12 months: {} – {}    Previous 12 months: {} – {}",
            comparison.last_window_start.format("%b %Y"),
            comparison.latest_date.format("%b %Y"),
            comparison.previous_window_start.format("%b %Y"),
            comparison.last_window_start.pred_opt().unwrap_or(comparison.last_window_start).format("%b %Y"),
        ))
        .weak(),
    );

    let rows = &comparison.rows;
    TableBuilder::new(ui)
        .id_salt("comparison_table")
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(60.0))
        .columns(Column::auto().at_least(140.0), 3)
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for title in ["Label", Window::Last.label(), Window::Previous.label(), "YoY % Change"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut table_row| {
                let row = &rows[table_row.index()];
                table_row.col(|ui| {
                    ui.label(row.label());
                });
                table_row.col(|ui| {
                    ui.label(format::optional(row.last_period_value));
                });
                table_row.col(|ui| {
                    ui.label(format::optional(row.previous_period_value));
                });
                table_row.col(|ui| {
                    let mut text = RichText::new(format::yoy(row.yoy));
                    if let Some(color) = yoy_color(row.yoy) {
                        text = text.color(color);
                    }
                    ui.label(text);
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Raw filtered rows
// ---------------------------------------------------------------------------

pub fn data_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    let visible = &state.view.visible;

    TableBuilder::new(ui)
        .id_salt("data_table")
        .striped(true)
        .resizable(true)
        .max_scroll_height(400.0)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(70.0), COLUMNS.len())
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for title in COLUMNS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, visible.len(), |mut table_row| {
                let Some(rec) = dataset.records.get(visible[table_row.index()]) else {
                    return;
                };
                let cells = [
                    rec.item_name.clone(),
                    rec.distributor.clone(),
                    rec.state.clone(),
                    rec.year.to_string(),
                    rec.month.to_string(),
                    format::thousands(rec.case_equivalents, 2),
                    format::thousands(rec.units_sold, 0),
                    format::thousands(rec.net_price, 2),
                ];
                for cell in cells {
                    table_row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
