//! Sticky Notes Frontend Entry Point

mod config;
mod storage;
mod ids;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if rolling_logger::init(level).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }

    mount_to_body(App);
}
