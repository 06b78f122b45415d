use std::rc::Rc;

use cliplens_types::AppEvent;
use slint::{ComponentHandle, VecModel, Weak};

use crate::{LinkRow, ResultsWindow};

/// Apply one app event to the result window.
///
/// Returns `false` once the UI should stop receiving events.
pub fn handle_events(event: AppEvent, window_weak: &Weak<ResultsWindow>) -> bool {
    match event {
        AppEvent::ShowResult { text, links } => {
            if let Some(w) = window_weak.upgrade() {
                let rows: Vec<LinkRow> = links
                    .iter()
                    .map(|span| LinkRow {
                        label: text[span.start..span.end].into(),
                        url: span.url.as_str().into(),
                    })
                    .collect();
                tracing::debug!("[UI] showing {} chars, {} links", text.len(), rows.len());
                w.set_result_text(text.into());
                w.set_links(Rc::new(VecModel::from(rows)).into());
                w.show().ok();
            }
            true
        }
        AppEvent::ShowNotice(message) => {
            if let Some(w) = window_weak.upgrade() {
                tracing::debug!("[UI] notice: {message}");
                w.set_result_text(message.into());
                w.set_links(Rc::new(VecModel::<LinkRow>::default()).into());
                w.show().ok();
            }
            true
        }
        AppEvent::Quit => {
            if let Some(w) = window_weak.upgrade() {
                w.hide().ok();
            }
            slint::quit_event_loop().ok();
            false
        }
        _ => true,
    }
}
