//! Sticky Notes App
//!
//! Board section (toolbar and note cards) plus the sibling overlay that
//! holds open editors.

use leptos::prelude::*;
use log::error;
use notes_core::{JsonSlot, LocalClock, NoteBoard};

use crate::components::{EditOverlay, NoteList, Toolbar};
use crate::config::load_config;
use crate::context::BoardContext;
use crate::ids::JsRandomIds;
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let repo = JsonSlot::new(BrowserStorage, config.storage_key.clone());

    let board = match NoteBoard::load(repo, config, &mut JsRandomIds, &LocalClock) {
        Ok(board) => board,
        Err(e) => {
            error!("[APP] failed to start board: {}", e);
            let recent = rolling_logger::global()
                .map(|logger| logger.recent().join("\n"))
                .unwrap_or_default();
            return view! {
                <div class="board-error">
                    <p>"Notes could not be loaded."</p>
                    <pre class="board-log">{recent}</pre>
                </div>
            }
            .into_any();
        }
    };

    provide_context(BoardContext::new(board));

    view! {
        <section class="sticky-notes">
            <Toolbar />
            <NoteList />
        </section>
        <div class="sticky-notes-edit-container">
            <EditOverlay />
        </div>
    }
    .into_any()
}
