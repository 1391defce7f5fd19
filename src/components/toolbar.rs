//! Toolbar Component
//!
//! Add button, heading and the live search box.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::BoardContext;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    view! {
        <button type="button" class="add" on:click=move |_| ctx.add()>
            <span class="material-symbols-sharp">" add "</span>
        </button>

        <h2 class="heading">"Sticky Notes"</h2>

        <input
            type="text"
            name="search"
            id="search"
            placeholder="Search..."
            prop:value=move || ctx.board.with(|b| b.query().to_string())
            on:input=move |ev| {
                let input = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                if let Some(input) = input {
                    ctx.search(&input.value());
                }
            }
        />
    }
}
