mod app;
mod color;
mod data;
mod export;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::RunlogViewerApp;
use clap::Parser;
use data::model::LogLayout;
use eframe::egui;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory holding log_index and the run's log files
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Write the figure to this PNG instead of opening a window
    #[arg(long, value_name = "PNG")]
    save: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let layout = LogLayout::new(&args.dir);
    let run = data::loader::load_run(&layout)
        .with_context(|| format!("loading run logs from {}", args.dir.display()))?;

    if let Some(path) = &args.save {
        return export::save_png(&run, path);
    }

    let (width, height) = ui::figure_pixels();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([800.0, 400.0]),
        ..Default::default()
    };

    let title = format!("Run log viewer – run {}", run.index);
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(RunlogViewerApp::new(run)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_dir_and_window() {
        let args = Args::parse_from(["runlog-viewer"]);
        assert_eq!(args.dir, PathBuf::from("."));
        assert!(args.save.is_none());
    }

    #[test]
    fn save_flag_selects_headless_output() {
        let args = Args::parse_from(["runlog-viewer", "--dir", "runs", "--save", "out.png"]);
        assert_eq!(args.dir, PathBuf::from("runs"));
        assert_eq!(args.save, Some(PathBuf::from("out.png")));
    }
}
