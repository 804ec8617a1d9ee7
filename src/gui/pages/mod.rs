// src/gui/pages/mod.rs
use eframe::egui;

use crate::{gui::app::App, index::Snapshot};

pub mod diseases;
pub mod stats;
pub mod symptoms;

/// One tab of the viewer. Pages read the snapshot and may update the
/// picks held in `app.state.gui`; they never touch the snapshot itself.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, snap: &Snapshot);
}
