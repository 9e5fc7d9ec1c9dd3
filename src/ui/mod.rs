pub mod keybindings;
pub mod lightbox;

pub use keybindings::{handle_key_press, Key, ViewMode};
pub use lightbox::{Lightbox, LightboxState};
