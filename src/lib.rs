//! A reorderable bottom page-tab bar for [iced](https://iced.rs).
//!
//! * [`TabCollection`] is the ordered list of pages and its mutation rules.
//! * [`TabBar`] is the widget: click to select, drag to reorder, insert
//!   between two tabs or at the end, and open a per-tab action menu.
//! * [`BottomNavigation`] ties the bar, the action menu and the "new page"
//!   dialog together and reports [`Intent`]s for the application to apply.
//!
//! Icons are codicon glyphs; register
//! [`CODICON_FONT_BYTES`](iced_fonts::CODICON_FONT_BYTES) with the
//! application.

#![warn(missing_docs)]

pub mod collection;
pub mod dialog;
mod error;
pub mod icon;
pub mod menu;
mod navigation;
mod status;
pub mod style;
mod tab;
mod tab_bar;

pub use collection::{Tab, TabCollection, TabIcon, TabId};
pub use error::TabError;
pub use navigation::{
    menu_entries, BottomNavigation, Intent, MenuAction, MenuState, NavigationEvent,
};
pub use status::{Status, StyleFn};
pub use style::Style;
pub use tab::TabLabel;
pub use tab_bar::{ScrollMode, TabBar};
