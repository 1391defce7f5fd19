//! Edit Overlay Component
//!
//! Open editors, newest first. Keyed by session so reopening a note
//! builds a fresh editor.

use leptos::prelude::*;

use crate::components::NoteEditor;
use crate::context::BoardContext;

#[component]
pub fn EditOverlay() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let sessions = move || {
        ctx.board.with(|b| {
            b.editors()
                .iter()
                .map(|e| (e.id, e.session))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <For
            each=sessions
            key=|(_, session)| *session
            children=move |(id, _)| view! { <NoteEditor id=id /> }
        />
    }
}
