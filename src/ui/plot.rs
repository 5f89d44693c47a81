use eframe::egui::{self, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::color::to_color32;
use crate::data::model::Series;
use crate::state::AppState;
use crate::ui::Panel;

// ---------------------------------------------------------------------------
// Series plots (central panel)
// ---------------------------------------------------------------------------

/// Render both panels stacked vertically, each taking half the height.
pub fn mosaic(ui: &mut Ui, state: &AppState) {
    let spacing = ui.spacing().item_spacing.y;
    let panel_height = (ui.available_height() - spacing) / Panel::ALL.len() as f32;

    for panel in Panel::ALL {
        ui.allocate_ui(egui::vec2(ui.available_width(), panel_height), |ui: &mut Ui| {
            series_plot(ui, state, panel);
        });
    }
}

/// One titled line chart.
fn series_plot(ui: &mut Ui, state: &AppState, panel: Panel) {
    let series = panel.series(&state.run);
    let colors = panel.colors(&state.colors);

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(panel.title()).strong().size(16.0));
    });

    Plot::new(format!("plot_{}", panel.key()))
        .height(ui.available_height())
        .legend(egui_plot::Legend::default())
        .x_axis_label("T")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (column, &rgb) in (0..series.n_columns()).zip(colors.iter().cycle()) {
                let points: PlotPoints = series.points(column).into();
                let line = Line::new(points)
                    .name(trace_name(series, column))
                    .color(to_color32(rgb))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}

/// Legend label for one trace; the column number only appears when there are several.
pub fn trace_name(series: &Series, column: usize) -> String {
    if series.n_columns() > 1 {
        format!("{} [{column}]", series.name)
    } else {
        series.name.clone()
    }
}
