// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::options::Options,
    record::Record,
    runner::RunSlot,
};

use super::{components, fonts};

pub const TITLE: &str = "Announcement Collector";

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        TITLE,
        options,
        Box::new(|cc| {
            fonts::install(&cc.egui_ctx);
            Ok(Box::new(App::new(Options::default())))
        }),
    )?;
    Ok(())
}

pub struct App {
    pub options: Options,

    // one collection run at a time
    pub slot: RunSlot,

    // status line (worker writes here)
    pub status: Arc<Mutex<String>>,

    // records of the last finished run, handed over by the worker
    pub finished: Arc<Mutex<Option<Vec<Record>>>>,

    // preview table contents (UI thread only)
    pub records: Vec<Record>,
}

impl App {
    pub fn new(options: Options) -> Self {
        logf!(out = %options.export.out_path().display(), "Init");
        Self {
            options,
            slot: RunSlot::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            finished: Arc::new(Mutex::new(None)),
            records: Vec::new(),
        }
    }

    #[inline]
    pub fn running(&self) -> bool { self.slot.is_busy() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        set_status(&self.status, msg);
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Pull in records a finished worker left behind.
    fn take_finished(&mut self) {
        let mut slot = self.finished.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(records) = slot.take() {
            self.records = records;
        }
    }
}

/// Shared by the UI thread and the worker.
pub fn set_status<T: Into<String>>(status: &Mutex<String>, msg: T) {
    *status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.take_finished();

        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            components::action_buttons::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::records_table::draw(ui, self);
        });

        // Keep the status line moving while the worker runs.
        if self.running() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
