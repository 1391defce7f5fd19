//! Note Editor Component
//!
//! Editing surface for one note: delete, saving indicator, close and the
//! text area. Every keystroke is written through the board.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use notes_core::{CloseOutcome, NoteId};

use crate::context::BoardContext;

#[component]
pub fn NoteEditor(id: NoteId) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    // The textarea is uncontrolled after the first render
    let initial = ctx
        .board
        .with_untracked(|b| b.editor(id).map(|e| e.draft.clone()))
        .unwrap_or_default();
    let delay = ctx.save_indicator_ms();

    let (saving, set_saving) = signal(false);
    let (failed, set_failed) = signal(false);

    let on_input = move |ev: web_sys::Event| {
        let Some(textarea) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        else {
            return;
        };

        match ctx.edit(id, &textarea.value()) {
            Ok(_) => {
                set_failed.set(false);
                set_saving.set(true);
                // one timer per keystroke; overlapping hides are harmless
                Timeout::new(delay, move || {
                    let _ = set_saving.try_set(false);
                })
                .forget();
            }
            Err(_) => {
                set_saving.set(false);
                set_failed.set(true);
            }
        }
    };

    let on_close = move |_: web_sys::MouseEvent| {
        if ctx.close(id) == CloseOutcome::Abandoned {
            log::debug!("[EDITOR] note {} closed empty", id);
        }
    };

    view! {
        <div class="edit-note" id=id.to_string()>
            <div class="buttons">
                <div class="left">
                    <button type="button" class="delete" on:click=move |_| ctx.delete(id)>
                        <span class="material-symbols-sharp">" delete "</span>
                    </button>
                </div>
                <div class="right">
                    <button
                        type="button"
                        class="save"
                        class:hide=move || !saving.get() && !failed.get()
                        class:failed=move || failed.get()
                        title=move || if failed.get() { "Not saved" } else { "Saving" }
                    >
                        <span class="material-symbols-sharp">
                            {move || if failed.get() { " sync_problem " } else { " cached " }}
                        </span>
                    </button>
                    <button type="button" class="close" on:click=on_close>
                        <span class="material-symbols-sharp">" close "</span>
                    </button>
                </div>
            </div>

            <textarea
                name="content"
                placeholder="Take a note..."
                prop:value=initial
                on:input=on_input
            ></textarea>
        </div>
    }
}
