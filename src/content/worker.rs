// Content worker thread - fetches pages off the UI thread

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use super::provider::{ContentProvider, PageSource};
use super::ContentError;

/// Request to resolve one page. `generation` ties the eventual result back to
/// the selection that asked for it.
#[derive(Debug)]
pub struct LoadCommand {
    pub generation: u64,
    pub section: String,
    pub page: String,
}

#[derive(Debug)]
pub struct LoadResult {
    pub generation: u64,
    pub section: String,
    pub page: String,
    pub result: Result<PageSource, ContentError>,
}

/// Spawns the worker loop. The thread exits when the command sender is
/// dropped; a repaint is requested after every posted result so the UI picks
/// it up on the next frame.
pub fn spawn_worker(
    ctx: eframe::egui::Context,
    provider: Arc<dyn ContentProvider>,
) -> (Sender<LoadCommand>, Receiver<LoadResult>) {
    let (cmd_tx, cmd_rx) = channel::<LoadCommand>();
    let (res_tx, res_rx) = channel::<LoadResult>();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            log::debug!(
                "resolving {}/{} (generation {})",
                cmd.section,
                cmd.page,
                cmd.generation
            );
            let result = provider.fetch(&cmd.section, &cmd.page);
            if res_tx
                .send(LoadResult {
                    generation: cmd.generation,
                    section: cmd.section,
                    page: cmd.page,
                    result,
                })
                .is_err()
            {
                break;
            }
            ctx.request_repaint();
        }
    });

    (cmd_tx, res_rx)
}
