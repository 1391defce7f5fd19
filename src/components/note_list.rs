//! Note List Component
//!
//! Cards in board order, keyed by note id so reordering moves nodes.

use leptos::prelude::*;
use notes_core::{Card, NoteId};

use crate::components::NoteCard;
use crate::context::BoardContext;

#[component]
pub fn NoteList() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let card_ids = move || {
        ctx.board
            .with(|b| b.cards().iter().map(Card::id).collect::<Vec<NoteId>>())
    };

    view! {
        <div class="notes-container">
            <For
                each=card_ids
                key=|id| *id
                children=move |id| view! { <NoteCard id=id /> }
            />
        </div>
    }
}
