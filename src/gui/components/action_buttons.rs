// src/gui/components/action_buttons.rs

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

const BUTTON: egui::Vec2 = egui::vec2(120.0, 36.0);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.running();

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let collect = ui.add_enabled(
            !running,
            egui::Button::new(egui::RichText::new("Collect").strong()).min_size(BUTTON),
        );
        if collect.clicked() {
            actions::collect(app, ui.ctx());
        }

        if ui.add(egui::Button::new("Exit").min_size(BUTTON)).clicked() {
            actions::exit(ui.ctx());
        }

        if running {
            ui.add(Spinner::new().size(16.0));
        }
        ui.label(app.status_text());
    });

    ui.horizontal(|ui| {
        ui.label("Output:");
        ui.monospace(app.options.export.out_path().display().to_string());
    });
    ui.add_space(4.0);
}
