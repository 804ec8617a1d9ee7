// src/gui/actions/refresh.rs
//
// Re-run the pipeline off the UI thread. The worker sends back a fully
// loaded snapshot; the UI swaps it in on the next frame.

use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    gui::{
        app::{App, RefreshResult},
        progress::GuiProgress,
    },
    index::Snapshot,
    runner,
};

pub fn start(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    app.running = true;
    app.status("Refreshing…");

    let opts = app.state.pipeline.clone();
    logf!("Refresh: Begin url={} out={}", opts.url, opts.out_dir.display());

    let status = app.status.clone();
    let ctx2 = ctx.clone();
    let (tx, rx) = mpsc::channel::<RefreshResult>();
    app.refresh_rx = Some(rx);

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let res = runner::run(&opts, Some(&mut prog))
            .map_err(|e| e.to_string())
            .and_then(|summary| Snapshot::open(summary.snapshot).map_err(|e| e.to_string()))
            .map(|snap| {
                // build lookups here, not on the UI thread
                snap.index();
                snap
            });
        if tx.send(res).is_err() {
            logd!("Refresh: viewer closed before the result arrived");
        }
        ctx2.request_repaint();
    });
}

/// Pick up a finished refresh, if any.
pub fn poll(app: &mut App) {
    let Some(rx) = app.refresh_rx.as_ref() else { return };
    let msg = match rx.try_recv() {
        Err(TryRecvError::Empty) => return,
        Ok(Ok(snap)) => {
            let msg = format!("Loaded snapshot {}", snap.id());
            logf!("Refresh: {}", msg);
            app.set_snapshot(snap);
            msg
        }
        Ok(Err(e)) => {
            loge!("Refresh: failed: {}", e);
            format!("Refresh failed: {}", e)
        }
        Err(TryRecvError::Disconnected) => {
            loge!("Refresh: worker exited without a result");
            s!("Refresh failed: worker exited without a result")
        }
    };
    app.status(msg);
    app.running = false;
    app.refresh_rx = None;
}
