pub mod render;
mod text;
pub mod tokens;

pub use text::{TextUi, UiState};
pub use tokens::Command;
