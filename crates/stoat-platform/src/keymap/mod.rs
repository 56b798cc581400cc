mod parse;
mod types;

pub use parse::{parse_keybind, primary_modifier};
pub use types::{KeyBind, Modifier};
