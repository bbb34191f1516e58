//! Interaction status of the parts of a [`TabBar`](crate::TabBar).

/// The status of a tab (e.g. for styling).
///
/// The "Add Page" button and the insert connectors only ever use `Inactive`
/// and `Hovered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Currently selected tab
    Active,
    /// Currently not selected tab
    Inactive,
    /// Can be pressed and it is being hovered.
    Hovered,
    /// The tab is currently being dragged.
    Dragging,
}

/// The style function of widget.
pub type StyleFn<'a, Theme, Style> = Box<dyn Fn(&Theme, Status) -> Style + 'a>;

/// A pressable region of the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Part {
    /// The body of the tab at this index.
    Tab(usize),
    /// The menu trigger of the tab at this index.
    Kebab(usize),
    /// The dashed connector following the tab at this index.
    Connector(usize),
    /// The trailing "Add Page" button.
    AddButton,
}

impl Part {
    /// The tab index this part belongs to, if any.
    pub(crate) fn tab_index(self) -> Option<usize> {
        match self {
            Part::Tab(i) | Part::Kebab(i) => Some(i),
            Part::Connector(_) | Part::AddButton => None,
        }
    }
}

/// Resolves the status of the tab at `index`.
///
/// A dragged tab wins over everything; hovering never highlights while a drag
/// is in progress.
pub(crate) fn tab_status(
    index: usize,
    active: Option<usize>,
    hovered: Option<Part>,
    dragging: Option<usize>,
) -> Status {
    if dragging == Some(index) {
        Status::Dragging
    } else if active == Some(index) {
        Status::Active
    } else if dragging.is_none() && hovered.and_then(Part::tab_index) == Some(index) {
        Status::Hovered
    } else {
        Status::Inactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_tab_ignores_hover() {
        assert_eq!(
            tab_status(1, Some(1), Some(Part::Tab(1)), None),
            Status::Active
        );
    }

    #[test]
    fn kebab_hover_highlights_its_tab() {
        assert_eq!(
            tab_status(2, Some(0), Some(Part::Kebab(2)), None),
            Status::Hovered
        );
        assert_eq!(
            tab_status(2, Some(0), Some(Part::Connector(2)), None),
            Status::Inactive
        );
    }

    #[test]
    fn dragging_suppresses_hover() {
        assert_eq!(
            tab_status(3, Some(0), Some(Part::Tab(3)), Some(1)),
            Status::Inactive
        );
        assert_eq!(tab_status(1, Some(1), None, Some(1)), Status::Dragging);
    }
}
