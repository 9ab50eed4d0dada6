use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{panels, plot, tables};

pub const TITLE: &str = "27-Month Rolling Sales Dashboard";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalesDashboardApp {
    pub state: AppState,
}

impl SalesDashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { state }
    }
}

impl eframe::App for SalesDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Dashboard => {
                ui.heading(TITLE);
                ui.add_space(8.0);
                panels::kpi_row(ui, &self.state);
                ui.separator();
                plot::time_series_plot(ui, &self.state);
            }
            Tab::DataView => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Last 12 Months vs Previous 12 Months Comparison");
                    panels::measure_selector(ui, &mut self.state);
                    tables::comparison_table(ui, &self.state);
                    ui.add_space(8.0);
                    plot::comparison_bar_chart(ui, &self.state);
                    ui.separator();
                    ui.heading("Filtered Data Table");
                    tables::data_table(ui, &self.state);
                });
            }
        });
    }
}
