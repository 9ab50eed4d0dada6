use std::ops::RangeInclusive;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};

use crate::data::compare::Window;
use crate::data::model::{month_label, Measure};
use crate::format;
use crate::state::AppState;

/// Months since year 0, so consecutive months are one unit apart on the x axis.
fn month_index(year: i32, month: u32) -> f64 {
    (year as i64 * 12 + month as i64 - 1) as f64
}

fn month_axis_label(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    let x = mark.value;
    if x.fract() != 0.0 {
        return String::new();
    }
    let idx = x as i64;
    let year = idx.div_euclid(12);
    let month = idx.rem_euclid(12) as u32 + 1;
    format!("{} {year}", month_label(month))
}

// ---------------------------------------------------------------------------
// Monthly time series (Dashboard tab)
// ---------------------------------------------------------------------------

/// One line per measure over the filtered months.
pub fn time_series_plot(ui: &mut Ui, state: &AppState) {
    ui.strong("Monthly Sales Metrics Over Time");

    let monthly = &state.view.monthly;
    Plot::new("time_series")
        .legend(Legend::default())
        .x_axis_label("Date")
        .y_axis_label("Metric")
        .x_axis_formatter(month_axis_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if monthly.is_empty() {
                return;
            }
            for measure in Measure::ALL {
                let points: PlotPoints = monthly
                    .iter()
                    .map(|m| [month_index(m.year, m.month), m.get(measure)])
                    .collect();

                let line = Line::new(points)
                    .name(measure.label())
                    .color(state.colors.measure(measure))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}

// ---------------------------------------------------------------------------
// Last 12 vs previous 12 grouped bars (Data View tab)
// ---------------------------------------------------------------------------

pub fn comparison_bar_chart(ui: &mut Ui, state: &AppState) {
    let Some(comparison) = &state.view.comparison else {
        return;
    };
    let measure = comparison.measure;
    ui.strong(format!("{measure} - Last 12 Months vs Previous 12 Months"));

    let charts: Vec<BarChart> = [(Window::Last, -0.2), (Window::Previous, 0.2)]
        .into_iter()
        .map(|(window, offset)| {
            let bars: Vec<Bar> = comparison
                .rows
                .iter()
                .filter_map(|row| {
                    let value = row.value(window)?;
                    let name = format!(
                        "{} {}: {} (YoY {})",
                        row.label(),
                        window.label(),
                        format::thousands(value, 2),
                        format::yoy(row.yoy)
                    );
                    Some(Bar::new(row.month as f64 + offset, value).width(0.38).name(name))
                })
                .collect();
            BarChart::new(bars)
                .name(window.label())
                .color(state.colors.window(window))
        })
        .collect();

    Plot::new("comparison_bars")
        .legend(Legend::default())
        .height(320.0)
        .x_axis_label("Month")
        .y_axis_label(measure.label())
        .x_axis_formatter(|mark, _range| {
            let x = mark.value;
            if x.fract() == 0.0 && (1.0..=12.0).contains(&x) {
                month_label(x as u32).to_string()
            } else {
                String::new()
            }
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_index_is_contiguous_across_years() {
        assert_eq!(month_index(2024, 1) - month_index(2023, 12), 1.0);
        assert_eq!(month_index(2024, 12) - month_index(2024, 1), 11.0);
    }
}
