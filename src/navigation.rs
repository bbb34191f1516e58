//! The bottom navigation: tab bar, action menu and "new page" dialog.
//!
//! [`BottomNavigation`] only owns the short-lived interaction state. It turns
//! each [`NavigationEvent`] into at most one [`Intent`], which the owning
//! application applies to its [`TabCollection`] and active tab.

use iced::widget::{button, column, row, text, text_input, Space};
use iced::{event, keyboard, window, Element, Event, Length, Point, Size, Subscription};

use crate::collection::{TabCollection, TabIcon, TabId};
use crate::dialog::Dialog;
use crate::error::TabError;
use crate::icon;
use crate::menu::{self, EntryStyle, MenuEntry};
use crate::tab::TabLabel;
use crate::tab_bar::TabBar;

const DIALOG_TITLE: &str = "Name of your Form Page";
const NAME_PLACEHOLDER: &str = "Form Name";
const DUPLICATE_NAME_MESSAGE: &str = "A tab with this name already exists.";

/// Something that happened in the bottom navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationEvent {
    /// A tab was clicked without being dragged.
    Select(TabId),
    /// A tab started moving under the pointer.
    DragStarted(TabId),
    /// A drag finished, over another tab or over nothing.
    DragEnded {
        /// The tab that moved.
        dragged: TabId,
        /// The tab under the pointer on release.
        over: Option<TabId>,
    },
    /// The menu trigger of a tab was pressed.
    OpenMenu {
        /// The tab the menu acts on.
        tab: TabId,
        /// Window position the menu grows up from.
        anchor: Point,
    },
    /// The user pressed outside the open menu.
    DismissMenu,
    /// A menu entry was chosen.
    MenuAction(MenuAction),
    /// An insert connector or the "Add Page" button was pressed.
    RequestCreate {
        /// Index of the tab to insert after; `None` appends.
        after: Option<usize>,
    },
    /// The dialog's name field changed.
    NameChanged(String),
    /// The dialog was submitted.
    ConfirmCreate,
    /// The dialog was dismissed.
    CancelCreate,
    /// Escape was pressed.
    Escape,
    /// The window changed size.
    Resized(Size),
}

/// Entries of the tab action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Set as first page.
    MoveToFront,
    /// Rename.
    Rename,
    /// Copy.
    Copy,
    /// Duplicate.
    Duplicate,
    /// Delete.
    Remove,
}

/// A change the owning application should apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Make this tab the active one.
    Select(TabId),
    /// [`TabCollection::reorder`].
    Reorder {
        /// The tab that moved.
        dragged: TabId,
        /// The tab whose position it takes.
        target: TabId,
    },
    /// [`TabCollection::insert`] with a name that was valid when confirmed.
    Insert {
        /// Trimmed name of the new tab.
        name: String,
        /// Icon of the new tab.
        icon: TabIcon,
        /// Index of the tab to insert after; `None` appends.
        after: Option<usize>,
    },
    /// [`TabCollection::move_to_front`].
    MoveToFront(TabId),
    /// [`TabCollection::duplicate`].
    Duplicate(TabId),
    /// [`TabCollection::remove`].
    Remove(TabId),
    /// The user asked to rename this tab.
    Rename(TabId),
    /// The user asked to copy this tab.
    Copy(TabId),
}

/// The open action menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuState {
    /// The tab the menu acts on.
    pub tab: TabId,
    /// Its index when the menu opened.
    pub index: usize,
    /// Window position the menu grows up from.
    pub anchor: Point,
}

#[derive(Debug, Clone, PartialEq)]
struct CreateDialog {
    after: Option<usize>,
    name: String,
    error: Option<TabError>,
}

impl CreateDialog {
    fn can_confirm(&self) -> bool {
        !self.name.trim().is_empty() && self.error.is_none()
    }
}

/// Interaction state of the bottom navigation.
///
/// At most one of a drag, the menu and the dialog is in progress at a time.
#[derive(Debug, Clone)]
pub struct BottomNavigation {
    drag: Option<TabId>,
    menu: Option<MenuState>,
    dialog: Option<CreateDialog>,
    area: Size,
}

impl Default for BottomNavigation {
    fn default() -> Self {
        Self {
            drag: None,
            menu: None,
            dialog: None,
            area: Size::INFINITE,
        }
    }
}

impl BottomNavigation {
    /// Creates an idle navigation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tab being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<TabId> {
        self.drag
    }

    /// The open menu, if any.
    #[must_use]
    pub fn menu(&self) -> Option<&MenuState> {
        self.menu.as_ref()
    }

    /// Whether the "new page" dialog is open.
    #[must_use]
    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// Where the dialog will insert: the index to insert after, or `None`
    /// to append. Also `None` while the dialog is closed.
    #[must_use]
    pub fn pending_insertion(&self) -> Option<usize> {
        self.dialog.as_ref().and_then(|dialog| dialog.after)
    }

    /// The current content of the dialog's name field.
    #[must_use]
    pub fn dialog_name(&self) -> Option<&str> {
        self.dialog.as_ref().map(|dialog| dialog.name.as_str())
    }

    /// The validation error shown in the dialog.
    #[must_use]
    pub fn dialog_error(&self) -> Option<&TabError> {
        self.dialog.as_ref().and_then(|dialog| dialog.error.as_ref())
    }

    /// Applies `event` and returns what the application should do about it.
    pub fn update(&mut self, tabs: &TabCollection, event: NavigationEvent) -> Option<Intent> {
        match event {
            NavigationEvent::Select(id) => {
                self.menu = None;
                tabs.get(id).map(|_| Intent::Select(id))
            }
            NavigationEvent::DragStarted(id) => {
                if self.dialog.is_some() {
                    log::debug!("drag of {id} ignored: dialog is open");
                    return None;
                }
                self.menu = None;
                self.drag = Some(id);
                None
            }
            NavigationEvent::DragEnded { dragged, over } => {
                if self.drag.take() != Some(dragged) {
                    log::debug!("drop of {dragged} ignored: no drag in progress");
                    return None;
                }
                let target = over.filter(|target| *target != dragged)?;
                if tabs.get(dragged).is_none() || tabs.get(target).is_none() {
                    log::debug!("drop of {dragged} onto {target} ignored: unknown tab");
                    return None;
                }
                Some(Intent::Reorder { dragged, target })
            }
            NavigationEvent::OpenMenu { tab, anchor } => {
                if self.drag.is_some() || self.dialog.is_some() {
                    return None;
                }
                self.menu = tabs.position(tab).map(|index| MenuState { tab, index, anchor });
                None
            }
            NavigationEvent::DismissMenu => {
                self.menu = None;
                None
            }
            NavigationEvent::MenuAction(action) => {
                let menu = self.menu.take()?;
                let tab = menu.tab;
                match action {
                    MenuAction::MoveToFront if menu.index == 0 => None,
                    MenuAction::MoveToFront => Some(Intent::MoveToFront(tab)),
                    MenuAction::Rename => Some(Intent::Rename(tab)),
                    MenuAction::Copy => Some(Intent::Copy(tab)),
                    MenuAction::Duplicate => Some(Intent::Duplicate(tab)),
                    MenuAction::Remove => Some(Intent::Remove(tab)),
                }
            }
            NavigationEvent::RequestCreate { after } => {
                if self.drag.is_some() {
                    log::debug!("create request ignored: drag in progress");
                    return None;
                }
                self.menu = None;
                self.dialog = Some(CreateDialog {
                    after,
                    name: String::new(),
                    error: None,
                });
                None
            }
            NavigationEvent::NameChanged(name) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.error = tabs
                        .is_name_taken(&name)
                        .then(|| TabError::DuplicateName(name.trim().to_owned()));
                    dialog.name = name;
                }
                None
            }
            NavigationEvent::ConfirmCreate => self.confirm(tabs),
            NavigationEvent::CancelCreate => {
                self.dialog = None;
                None
            }
            NavigationEvent::Escape => {
                if self.dialog.take().is_none() {
                    self.menu = None;
                }
                None
            }
            NavigationEvent::Resized(size) => {
                self.area = size;
                None
            }
        }
    }

    fn confirm(&mut self, tabs: &TabCollection) -> Option<Intent> {
        let dialog = self.dialog.as_mut()?;
        let name = dialog.name.trim();

        if name.is_empty() {
            log::debug!("create rejected: empty name");
            dialog.error = None;
            return None;
        }
        if tabs.is_name_taken(name) {
            log::debug!("create rejected: \"{name}\" is taken");
            dialog.error = Some(TabError::DuplicateName(name.to_owned()));
            return None;
        }

        let intent = Intent::Insert {
            name: name.to_owned(),
            icon: TabIcon::File,
            after: dialog.after,
        };
        self.dialog = None;
        Some(intent)
    }

    /// The tab bar for `tabs`, with `active` highlighted.
    ///
    /// The returned bar can be styled further before it is turned into an
    /// element.
    #[must_use]
    pub fn bar<'a>(
        &self,
        tabs: &TabCollection,
        active: Option<TabId>,
    ) -> TabBar<'a, NavigationEvent, TabId> {
        let bar = tabs
            .iter()
            .fold(TabBar::new(NavigationEvent::Select), |bar, tab| {
                bar.push(tab.id(), TabLabel::from(tab))
            })
            .on_drag_start(NavigationEvent::DragStarted)
            .on_drag_end(|dragged, over| NavigationEvent::DragEnded { dragged, over })
            .on_menu(|tab, anchor| NavigationEvent::OpenMenu { tab, anchor })
            .on_insert(|after| NavigationEvent::RequestCreate { after });

        match active {
            Some(id) => bar.set_active_tab(&id),
            None => bar,
        }
    }

    /// The dialog or the menu, whichever is open.
    ///
    /// Mount it over the application with [`dialog::mount`](crate::dialog::mount).
    #[must_use]
    pub fn overlay(&self) -> Option<Element<'_, NavigationEvent>> {
        if let Some(dialog) = &self.dialog {
            return Some(create_dialog(dialog));
        }

        self.menu.as_ref().map(|state| {
            menu::view(
                menu_entries(state.index),
                state.anchor,
                self.area,
                NavigationEvent::DismissMenu,
            )
        })
    }

    /// Escape handling and window size tracking.
    pub fn subscription(&self) -> Subscription<NavigationEvent> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(NavigationEvent::Escape),
            Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
                Some(NavigationEvent::Resized(size))
            }
            _ => None,
        })
    }
}

/// The menu entries for the tab at `index`.
#[must_use]
pub fn menu_entries(index: usize) -> Vec<MenuEntry<NavigationEvent>> {
    let entry = |label: &str, glyph: char, action: MenuAction| {
        MenuEntry::new(label, NavigationEvent::MenuAction(action)).icon(glyph)
    };

    let mut entries = Vec::with_capacity(5);
    if index != 0 {
        entries.push(entry("Set as first page", icon::PINNED, MenuAction::MoveToFront));
    }
    entries.push(entry("Rename", icon::EDIT, MenuAction::Rename));
    entries.push(entry("Copy", icon::COPY, MenuAction::Copy));
    entries.push(entry("Duplicate", icon::FILES, MenuAction::Duplicate));
    entries.push(entry("Delete", icon::TRASH, MenuAction::Remove).style(EntryStyle::Danger));
    entries
}

fn create_dialog(dialog: &CreateDialog) -> Element<'_, NavigationEvent> {
    let input = text_input(NAME_PLACEHOLDER, &dialog.name)
        .on_input(NavigationEvent::NameChanged)
        .on_submit(NavigationEvent::ConfirmCreate)
        .padding(8);

    let mut content = column![input].spacing(6);
    if let Some(error) = &dialog.error {
        let message = match error {
            TabError::DuplicateName(_) => DUPLICATE_NAME_MESSAGE.to_owned(),
            other => other.to_string(),
        };
        content = content.push(text(message).size(12).style(text::danger));
    }

    let footer = row![
        Space::new().width(Length::Fill),
        button(text("Cancel"))
            .style(button::secondary)
            .on_press(NavigationEvent::CancelCreate),
        button(text("Continue"))
            .style(button::primary)
            .on_press_maybe(dialog.can_confirm().then_some(NavigationEvent::ConfirmCreate)),
    ]
    .spacing(8);

    Dialog::new(NavigationEvent::CancelCreate)
        .title(text(DIALOG_TITLE).size(18))
        .footer(footer)
        .view(content)
}
