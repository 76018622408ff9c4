// src/gui/components/records_table.rs
//
// Read-only preview of the last run. Purely a view.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::HEADERS, gui::app::App};

const WIDTHS: [f32; 4] = [130.0, 420.0, 110.0, 80.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.records.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.weak("No records yet. Press Collect.");
        });
        return;
    }

    let mut table = TableBuilder::new(ui).striped(true).min_scrolled_height(0.0);
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true));
    }

    table
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.records.len(), |mut row| {
                let Some(rec) = app.records.get(row.index()) else { return };
                for cell in rec.cells() {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
