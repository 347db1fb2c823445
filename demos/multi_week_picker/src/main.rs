#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![expect(rustdoc::missing_crate_level_docs)] // it's a demo

use chrono::{Datelike as _, Weekday};
use eframe::egui;
use egui_week_select::{MonthView, MultiWeekConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let today = chrono::Local::now().date_naive();
    let config = MultiWeekConfig::default().week(4).current_week(1);
    let view = match MonthView::with_week_start(config, today.year(), today.month(), Weekday::Sat)
    {
        Ok(view) => view,
        Err(err) => {
            log::error!("Can't show {today}: {err}");
            return Ok(());
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Multi-week picker",
        options,
        Box::new(|_cc| Ok(Box::new(MyApp::new(view)))),
    )
}

struct MyApp {
    view: MonthView,
}

impl MyApp {
    fn new(mut view: MonthView) -> Self {
        view.open();
        Self { view }
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pick a charter");
            self.view.ui(ui);

            ui.separator();
            match self.view.active_range() {
                Some(range) => ui.label(format!(
                    "Selected {range} ({} days)",
                    range.num_days()
                )),
                None => ui.label("Nothing selected yet"),
            };
        });
    }
}

impl Drop for MyApp {
    fn drop(&mut self) {
        self.view.close();
        self.view.destroy();
    }
}
