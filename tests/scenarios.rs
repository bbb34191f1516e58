//! End-to-end flows through the bottom navigation and the tab collection.

use iced_page_tabs::{BottomNavigation, Intent, NavigationEvent, TabCollection, TabError, TabId};

/// A host that applies intents the way an application would.
struct Host {
    tabs: TabCollection,
    active: Option<TabId>,
    navigation: BottomNavigation,
}

impl Host {
    fn new() -> Self {
        let tabs = TabCollection::default();
        let active = tabs.first().map(|tab| tab.id());
        Self {
            tabs,
            active,
            navigation: BottomNavigation::new(),
        }
    }

    fn send(&mut self, event: NavigationEvent) {
        let Some(intent) = self.navigation.update(&self.tabs, event) else {
            return;
        };
        match intent {
            Intent::Select(id) => self.active = Some(id),
            Intent::Reorder { dragged, target } => self.tabs = self.tabs.reorder(dragged, target),
            Intent::Insert { name, icon, after } => {
                self.tabs = self.tabs.insert(&name, icon, after).expect("validated by the dialog");
            }
            Intent::MoveToFront(id) => self.tabs = self.tabs.move_to_front(id),
            Intent::Duplicate(id) => self.tabs = self.tabs.duplicate(id).expect("fresh copy name"),
            Intent::Remove(id) => {
                if let Ok(tabs) = self.tabs.remove(id) {
                    self.tabs = tabs;
                }
            }
            Intent::Rename(_) | Intent::Copy(_) => {}
        }
    }

    fn id(&self, name: &str) -> TabId {
        self.tabs
            .iter()
            .find(|tab| tab.name() == name)
            .map(|tab| tab.id())
            .expect("tab exists")
    }

    fn names(&self) -> Vec<&str> {
        self.tabs.iter().map(|tab| tab.name()).collect()
    }
}

#[test]
fn drag_details_onto_ending() {
    let mut host = Host::new();
    let (details, ending) = (host.id("Details"), host.id("Ending"));

    host.send(NavigationEvent::DragStarted(details));
    host.send(NavigationEvent::DragEnded {
        dragged: details,
        over: Some(ending),
    });

    assert_eq!(host.names(), ["Info", "Other", "Ending", "Details"]);
    assert_eq!(host.navigation.dragging(), None);
}

#[test]
fn create_review_after_details() {
    let mut host = Host::new();

    host.send(NavigationEvent::RequestCreate { after: Some(1) });
    host.send(NavigationEvent::NameChanged("Review".into()));
    host.send(NavigationEvent::ConfirmCreate);

    assert_eq!(host.names(), ["Info", "Details", "Review", "Other", "Ending"]);
    assert!(!host.navigation.is_dialog_open());
}

#[test]
fn create_with_taken_name_is_rejected() {
    let mut host = Host::new();

    host.send(NavigationEvent::RequestCreate { after: None });
    host.send(NavigationEvent::NameChanged("info".into()));
    host.send(NavigationEvent::ConfirmCreate);

    assert_eq!(host.names(), ["Info", "Details", "Other", "Ending"]);
    assert!(host.navigation.is_dialog_open());
    assert_eq!(
        host.navigation.dialog_error(),
        Some(&TabError::DuplicateName("info".into()))
    );
}

#[test]
fn drag_without_target_is_cancelled() {
    let mut host = Host::new();
    let other = host.id("Other");

    host.send(NavigationEvent::DragStarted(other));
    assert_eq!(host.navigation.dragging(), Some(other));
    host.send(NavigationEvent::DragEnded {
        dragged: other,
        over: None,
    });

    assert_eq!(host.names(), ["Info", "Details", "Other", "Ending"]);
    assert_eq!(host.navigation.dragging(), None);
}

#[test]
fn cancel_is_idempotent() {
    let mut host = Host::new();

    host.send(NavigationEvent::CancelCreate);
    assert!(!host.navigation.is_dialog_open());

    host.send(NavigationEvent::RequestCreate { after: Some(2) });
    host.send(NavigationEvent::NameChanged("Draft".into()));
    host.send(NavigationEvent::CancelCreate);
    host.send(NavigationEvent::CancelCreate);

    assert!(!host.navigation.is_dialog_open());
    assert_eq!(host.navigation.pending_insertion(), None);
    assert_eq!(host.navigation.dialog_name(), None);
    assert_eq!(host.tabs.len(), 4);

    // A reopened dialog starts blank.
    host.send(NavigationEvent::RequestCreate { after: None });
    assert_eq!(host.navigation.dialog_name(), Some(""));
}

#[test]
fn add_page_appends() {
    let mut host = Host::new();

    host.send(NavigationEvent::RequestCreate { after: None });
    host.send(NavigationEvent::NameChanged("Summary".into()));
    host.send(NavigationEvent::ConfirmCreate);

    assert_eq!(host.names().last(), Some(&"Summary"));
}

#[test]
fn menu_actions_edit_the_list() {
    let mut host = Host::new();
    let anchor = iced::Point::new(200.0, 560.0);

    let other = host.id("Other");
    host.send(NavigationEvent::Select(other));
    assert_eq!(host.active, Some(other));

    host.send(NavigationEvent::OpenMenu { tab: other, anchor });
    host.send(NavigationEvent::MenuAction(iced_page_tabs::MenuAction::MoveToFront));
    assert_eq!(host.names(), ["Other", "Info", "Details", "Ending"]);

    host.send(NavigationEvent::OpenMenu { tab: other, anchor });
    host.send(NavigationEvent::MenuAction(iced_page_tabs::MenuAction::Duplicate));
    assert_eq!(host.names(), ["Other", "Other copy", "Info", "Details", "Ending"]);

    let copy = host.id("Other copy");
    host.send(NavigationEvent::OpenMenu { tab: copy, anchor });
    host.send(NavigationEvent::MenuAction(iced_page_tabs::MenuAction::Remove));
    assert_eq!(host.names(), ["Other", "Info", "Details", "Ending"]);
    assert!(host.navigation.menu().is_none());
}
