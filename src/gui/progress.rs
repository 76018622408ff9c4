// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{gui::app::set_status, progress::Progress, record::Site};

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    total: usize,
    records: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, total: 0, records: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        set_status(&self.status, msg);
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn page(&mut self, site: Site, page: u32, last: u32) {
        self.set_status(format!(
            "{site}: page {page}/{last} ({}/{} sites, {} records so far)",
            self.done + 1, self.total, self.records
        ));
    }
    fn site_done(&mut self, _site: Site, records: usize) {
        self.done += 1;
        self.records += records;
    }
    fn finish(&mut self) {
        self.set_status(format!("Fetch complete ({} records); writing file…", self.records));
    }
}
