//! UI Components
//!
//! Leptos components for the board and its editor overlay.

mod toolbar;
mod note_list;
mod note_card;
mod edit_overlay;
mod note_editor;

pub use toolbar::Toolbar;
pub use note_list::NoteList;
pub use note_card::NoteCard;
pub use edit_overlay::EditOverlay;
pub use note_editor::NoteEditor;
