//! Codicon glyphs for tab icons and menu entries.
//!
//! Glyphs are rendered with [`CODICON_FONT`](iced_fonts::CODICON_FONT).

use crate::collection::TabIcon;

/// `file`
pub const FILE: char = '\u{ea7b}';
/// `history`, drawn for [`TabIcon::InfoClock`].
pub const HISTORY: char = '\u{ea82}';
/// `add`
pub const ADD: char = '\u{ea60}';
/// `pass`, drawn for [`TabIcon::CheckCircle`].
pub const PASS: char = '\u{eba4}';
/// `kebab-vertical`, the tab menu trigger.
pub const KEBAB: char = '\u{eb10}';
/// `pinned`
pub const PINNED: char = '\u{eba0}';
/// `edit`
pub const EDIT: char = '\u{ea73}';
/// `copy`
pub const COPY: char = '\u{ebcc}';
/// `files`
pub const FILES: char = '\u{eaf0}';
/// `trash`
pub const TRASH: char = '\u{ea81}';

impl TabIcon {
    /// The glyph drawn for this icon.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            TabIcon::File => FILE,
            TabIcon::InfoClock => HISTORY,
            TabIcon::Plus => ADD,
            TabIcon::CheckCircle => PASS,
        }
    }
}

/// Resolves a symbolic icon name to its glyph.
///
/// Unknown names resolve to `None` and render nothing.
#[must_use]
pub fn resolve(name: &str) -> Option<char> {
    name.parse::<TabIcon>().ok().map(TabIcon::glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(resolve("file"), Some(FILE));
        assert_eq!(resolve("infoClock"), Some(HISTORY));
        assert_eq!(resolve("plus"), Some(ADD));
        assert_eq!(resolve("checkCircle"), Some(PASS));
    }

    #[test]
    fn unknown_names_render_nothing() {
        assert_eq!(resolve("File"), None);
        assert_eq!(resolve(""), None);
    }
}
