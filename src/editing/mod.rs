// Editing - Caret arithmetic behind dictation editing commands
//
// Every function is pure: it takes the whole buffer and a caret and returns
// positions or the text to insert. Offsets count chars, not bytes.

pub mod commands;
pub mod phrase;
pub mod sentence;
pub mod smart;
mod text;

pub use commands::{delete_phrase, insert_before, prepare_commit_text, replace_phrase, TextEdit};
pub use phrase::{
    get_insert_before_index, get_replace_phrase_data, select_between, PhraseDeletion,
    SelectionRange,
};
pub use sentence::{nav_next_sent, nav_prev_sent};
pub use smart::{smart_capitalization, smart_spacing};
