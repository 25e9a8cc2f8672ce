// src/ui/session.rs
//! The interactive loop: read commands, run page actions, print what the page reports.

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinSet;
use tracing::debug;

use super::input::{Command, parse_line};
use super::render::{self, ColorMode};
use crate::services::chat_page::ChatPage;
use crate::services::notifications::PageEvent;

pub type SharedOutput<W> = Arc<Mutex<W>>;

fn lock<W>(out: &SharedOutput<W>) -> MutexGuard<'_, W> {
    out.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Run until `/quit` or end of input.
///
/// Uploads and questions run as background tasks, so a second question can be
/// sent before the first is answered. On exit every started action is awaited
/// and every queued event is printed before returning. The view only finishes
/// once the last handle to the page's notifier is gone, so `page` should be
/// the caller's only clone.
pub async fn run<R, W>(
    page: ChatPage,
    mut events: UnboundedReceiver<PageEvent>,
    input: R,
    out: SharedOutput<W>,
    color: ColorMode,
    startup_pdf: Option<PathBuf>,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let view_out = out.clone();
    let view = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            let mut w = lock(&view_out);
            render::print_event(&mut *w, &event, color)?;
            w.flush()?;
        }
        Ok::<_, std::io::Error>(())
    });

    {
        let mut w = lock(&out);
        render::print_banner(&mut *w, None, color)?;
        render::print_placeholder(&mut *w, color)?;
    }

    if let Some(path) = startup_pdf {
        // Await the first upload so the prompt reflects its outcome.
        let _ = page.upload_path(&path).await;
    }

    let mut actions = JoinSet::new();
    let mut lines = input.lines();
    loop {
        let selected = page.state().selected_file().await;
        {
            let mut w = lock(&out);
            write!(w, "{}", render::prompt(selected.as_deref()))?;
            w.flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            Command::Quit => break,
            Command::Help => render::print_help(&mut *lock(&out))?,
            Command::History => {
                if page.state().document_id().await.is_none() {
                    render::print_placeholder(&mut *lock(&out), color)?;
                } else {
                    let history = page.state().conversation.history().await;
                    render::print_transcript(&mut *lock(&out), &history, color)?;
                }
            }
            Command::Invalid(msg) => writeln!(lock(&out), "{}", msg)?,
            Command::Upload(path) => {
                let page = page.clone();
                actions.spawn(async move {
                    let _ = page.upload_path(&path).await;
                });
            }
            Command::Ask(text) => {
                let page = page.clone();
                actions.spawn(async move {
                    let _ = page.ask(&text).await;
                });
            }
        }

        // Reap finished actions so the set doesn't grow for the whole session.
        while actions.try_join_next().is_some() {}
    }

    debug!(pending = actions.len(), "waiting for in-flight actions");
    while actions.join_next().await.is_some() {}

    // The view stops once the last notifier handle is gone.
    drop(page);
    match view.await {
        Ok(result) => result,
        Err(e) => Err(std::io::Error::other(e)),
    }
}
