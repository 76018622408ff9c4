// src/gui/actions.rs
//
// Button "executive" actions. Layout stays in components/action_buttons.rs.

use std::thread;

use eframe::egui;

use crate::{
    error::Error,
    gui::{
        app::{set_status, App},
        progress::GuiProgress,
    },
    runner,
};

/// Start one collection run on a worker thread.
/// A click while a run is in flight is rejected, not queued.
pub fn collect(app: &mut App, ctx: &egui::Context) {
    let Some(ticket) = app.slot.try_acquire() else {
        logd!("Collect: clicked while a run is in flight; ignored");
        app.status(Error::Busy.to_string());
        return;
    };

    let opts = app.options.clone();
    let status = app.status.clone();
    let finished = app.finished.clone();
    let ctx = ctx.clone();

    logf!("Collect: begin");
    app.status("Starting…");

    let spawned = thread::Builder::new()
        .name(s!("collector"))
        .spawn(move || {
            // Slot stays taken until this thread is done.
            let _ticket = ticket;

            let mut prog = GuiProgress::new(status.clone(), ctx.clone());
            let msg = match runner::collect(&opts, Some(&mut prog)) {
                Ok(summary) => {
                    let ack = summary.ack();
                    logf!("Collect: {ack}");
                    if let Ok(mut slot) = finished.lock() {
                        *slot = Some(summary.records);
                    }
                    ack
                }
                Err(e) => {
                    loge!("Collect: {e}");
                    format!("Error: {e}")
                }
            };
            set_status(&status, msg);
            ctx.request_repaint();
        });

    if let Err(e) = spawned {
        loge!("Collect: could not start worker: {e}");
        app.status(format!("Error: {e}"));
    }
}

/// Close the window; the process ends when the event loop returns.
pub fn exit(ctx: &egui::Context) {
    logf!("Exit");
    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
}
