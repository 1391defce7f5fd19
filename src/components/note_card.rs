//! Note Card Component
//!
//! Read-only display of one note. Double-click opens its editor.

use leptos::prelude::*;
use notes_core::NoteId;

use crate::context::BoardContext;

#[component]
pub fn NoteCard(id: NoteId) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let time = move || {
        ctx.board
            .with(|b| b.card(id).map(|c| c.note.updated_at.clone()))
            .unwrap_or_default()
    };
    let content = move || {
        ctx.board
            .with(|b| b.card(id).map(|c| c.note.content.clone()))
            .unwrap_or_default()
    };
    let rows = move || ctx.board.with(|b| b.rows(id)).to_string();
    let hidden = move || ctx.board.with(|b| !b.is_visible(id));
    let unsaved = move || ctx.board.with(|b| b.card(id).is_some_and(|c| !c.persisted));

    view! {
        <div
            class="note noselect"
            class:hide=hidden
            class:unsaved=unsaved
            id=id.to_string()
            on:dblclick=move |_| ctx.open_editor(id)
        >
            <div class="time">{time}</div>
            <textarea
                class="content"
                placeholder="Take a note..."
                disabled=true
                rows=rows
                prop:value=content
            ></textarea>
        </div>
    }
}
