use eframe::egui;

use crate::data::model::RunLogs;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RunlogViewerApp {
    pub state: AppState,
}

impl RunlogViewerApp {
    pub fn new(run: RunLogs) -> Self {
        Self {
            state: AppState::new(run),
        }
    }
}

impl eframe::App for RunlogViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: run status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: the two stacked plots ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::mosaic(ui, &self.state);
        });
    }
}
