// Keybindings for the gallery
// Translates key presses forwarded by the renderer into gallery events
//
// Keybindings:
// - Left / h: Previous item (lightbox) or previous page (grid)
// - Right / l: Next item (lightbox) or next page (grid)
// - PageUp / PageDown: Previous / next page window (grid)
// - Escape: Close lightbox
// - z: Toggle zoom in the lightbox

use crate::session::GalleryEvent;

/// Current view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    Lightbox,
}

/// Keys the renderer forwards. Anything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    PageUp,
    PageDown,
    Escape,
    Char(char),
    Other,
}

impl Key {
    /// Maps DOM-style key names (`"ArrowLeft"`, `"Escape"`, `"z"`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Self::Left,
            "ArrowRight" | "Right" => Self::Right,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Escape" | "Esc" => Self::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Handle a key press in the given mode
pub fn handle_key_press(mode: ViewMode, key: Key) -> Option<GalleryEvent> {
    match mode {
        ViewMode::Lightbox => match key {
            Key::Left | Key::Char('h') => Some(GalleryEvent::LightboxPrevious),
            Key::Right | Key::Char('l') => Some(GalleryEvent::LightboxNext),
            Key::Escape => Some(GalleryEvent::LightboxClose),
            Key::Char('z') | Key::Char('Z') => Some(GalleryEvent::LightboxZoomToggle),
            _ => None,
        },
        ViewMode::Grid => match key {
            Key::Left | Key::Char('h') => Some(GalleryEvent::PreviousPage),
            Key::Right | Key::Char('l') => Some(GalleryEvent::NextPage),
            Key::PageUp => Some(GalleryEvent::PreviousWindow),
            Key::PageDown => Some(GalleryEvent::NextWindow),
            _ => None,
        },
    }
}
