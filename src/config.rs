//! Board Configuration Loading
//!
//! Hosts may override defaults with a JSON object in the
//! `data-board-config` attribute of `<body>`.

use log::warn;
use notes_core::BoardConfig;

const CONFIG_ATTRIBUTE: &str = "data-board-config";

/// Config from the page, or defaults
pub fn load_config() -> BoardConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));

    match raw {
        Some(raw) => BoardConfig::from_json(&raw).unwrap_or_else(|e| {
            warn!("[APP] ignoring invalid {}: {}", CONFIG_ATTRIBUTE, e);
            BoardConfig::default()
        }),
        None => BoardConfig::default(),
    }
}
