// src/gui/components/status_bar.rs
use eframe::egui;

use crate::gui::{actions::refresh, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let label = if app.running { "Refreshing…" } else { "Refresh" };
        let btn = ui
            .add_enabled(!app.running, egui::Button::new(label))
            .on_hover_text(format!("Fetch the source again and write a new snapshot to {}", app.state.data_dir.display()));
        if btn.clicked() {
            refresh::start(app, ui.ctx());
        }
        if app.running {
            ui.spinner();
        }
        ui.separator();
        ui.label(app.status_text());
    });
    ui.small(
        "Medical knowledge database. Use for informational purposes only. \
         Consult medical professionals for diagnosis and treatment.",
    );
}
