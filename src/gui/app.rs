// src/gui/app.rs
use std::sync::{mpsc::Receiver, Arc, Mutex};

use eframe::egui;

use crate::{config::state::AppState, index::Snapshot};

use super::{actions::refresh, components, pages::Page, router};

pub fn run(state: AppState, options: eframe::NativeOptions) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Disease-Symptopedia",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )
}

/// Outcome of a background refresh, sent back to the UI thread.
pub type RefreshResult = Result<Snapshot, String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded snapshot; replaced wholesale on refresh, never mutated
    pub snapshot: Option<Arc<Snapshot>>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub refresh_rx: Option<Receiver<RefreshResult>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (snapshot, status) = match Snapshot::open_latest(&state.data_dir) {
            Ok(snap) => {
                let msg = format!("Loaded snapshot {}", snap.id());
                (Some(Arc::new(snap)), msg)
            }
            Err(e) => {
                logw!("Init: no snapshot loaded ({})", e);
                (None, format!("No data found: {}. Click Refresh to run the pipeline.", e))
            }
        };

        logf!("Init: data dir {}, default page {}", state.data_dir.display(), router::page_at(0).title());

        Self {
            state,
            snapshot,
            status: Arc::new(Mutex::new(status)),
            running: false,
            refresh_rx: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize {
        self.state.gui.current_page_index
    }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) {
        self.state.gui.current_page_index = idx;
    }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        router::page_at(self.current_index())
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Swap in a freshly loaded snapshot and drop picks it no longer knows.
    pub fn set_snapshot(&mut self, snap: Snapshot) {
        let gui = &mut self.state.gui;
        if let Some(s) = &gui.selected_symptom {
            if !snap.index().symptoms.contains(s) {
                gui.selected_symptom = None;
            }
        }
        if let Some(d) = &gui.selected_disease {
            if snap.index().symptoms_for(d).is_empty() {
                gui.selected_disease = None;
            }
        }
        self.snapshot = Some(Arc::new(snap));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        refresh::poll(self);
        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        egui::SidePanel::right("about")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                components::about_panel::draw(ui);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Disease-Symptopedia");
            ui.label(
                "An interactive disease-symptom knowledge explorer with Columbia University's \
                 Disease-Symptom Knowledge Database.",
            );
            ui.separator();

            components::tabs::draw(ui, self);
            ui.separator();

            let Some(snap) = self.snapshot.clone() else {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    "No snapshot loaded. Use Refresh below to fetch the knowledge base.",
                );
                return;
            };

            ui.label(format!("Data loaded from: {}", snap.id().display_spaced()));
            ui.add_space(6.0);

            let page = self.current_page();
            page.draw(ui, self, &snap);
        });
    }
}
