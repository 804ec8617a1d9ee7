// src/gui/components/data_table.rs
//
// Draws a TableData. Purely a view: numeric columns centered, text left.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::table_model::TableData;

/// `text_columns` are left aligned; everything else is centered.
pub fn draw(ui: &mut egui::Ui, id: &str, data: &TableData, text_columns: &[usize], widths: &[f32]) {
    let cols = data.ncols();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let max_h = (ui.available_height() - 8.0).max(120.0);
    let mut table = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .max_scroll_height(max_h)
        .min_scrolled_height(0.0);
    for ci in 0..cols {
        let w = widths.get(ci).copied().unwrap_or(80.0);
        let col = if ci + 1 == cols {
            Column::remainder().at_least(w)
        } else {
            Column::initial(w).resizable(true).clip(true).at_least(20.0)
        };
        table = table.column(col);
    }

    let numeric = |ci: usize| !text_columns.contains(&ci);

    table
        .header(24.0, |mut header| {
            for (ci, h) in data.headers.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = egui::Label::new(RichText::new(h).strong()).selectable(false);
                    if numeric(ci) {
                        ui.centered_and_justified(|ui| {
                            ui.add(label);
                        });
                    } else {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.add(label);
                        });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, data.nrows(), |mut row| {
                let Some(cells) = data.rows.get(row.index()) else { return };
                for ci in 0..cols {
                    let cell = cells.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if numeric(ci) {
                            ui.centered_and_justified(|ui| {
                                ui.label(cell);
                            });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.label(cell);
                            });
                        }
                    });
                }
            });
        });
}
