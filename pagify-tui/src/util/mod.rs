//! Util 层：终端与文本辅助

mod terminal;
pub mod text;

pub use terminal::{Term, init_terminal, restore_terminal};
