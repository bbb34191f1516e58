//! The ordered list of tabs shown on the [`TabBar`](crate::TabBar).
//!
//! A [`TabCollection`] is never mutated in place: every operation borrows the
//! current list and hands back a new one, so the owner replaces its copy
//! wholesale.

use std::fmt;
use std::str::FromStr;

use crate::error::TabError;

/// Stable identifier of a [`Tab`].
///
/// Ids are handed out by the owning [`TabCollection`] and are independent of
/// the tab's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl TabId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value of the id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of icons a [`Tab`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabIcon {
    /// A plain page.
    #[default]
    File,
    /// The introductory page.
    InfoClock,
    /// Used by the add controls.
    Plus,
    /// The closing page.
    CheckCircle,
}

impl TabIcon {
    /// Every icon, in declaration order.
    pub const ALL: [TabIcon; 4] = [
        TabIcon::File,
        TabIcon::InfoClock,
        TabIcon::Plus,
        TabIcon::CheckCircle,
    ];

    /// The symbolic name of the icon.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TabIcon::File => "file",
            TabIcon::InfoClock => "infoClock",
            TabIcon::Plus => "plus",
            TabIcon::CheckCircle => "checkCircle",
        }
    }
}

impl fmt::Display for TabIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TabIcon {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabIcon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| TabError::UnknownIcon(s.to_owned()))
    }
}

/// A single page tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    id: TabId,
    name: String,
    icon: TabIcon,
}

impl Tab {
    /// Creates a tab.
    pub fn new(id: TabId, name: impl Into<String>, icon: TabIcon) -> Self {
        Self {
            id,
            name: name.into(),
            icon,
        }
    }

    /// The tab identifier.
    #[must_use]
    pub fn id(&self) -> TabId {
        self.id
    }

    /// The label shown on the tab.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The icon shown next to the label.
    #[must_use]
    pub fn icon(&self) -> TabIcon {
        self.icon
    }
}

/// An ordered, non-empty sequence of [`Tab`]s.
///
/// The order is the display order. Ids are unique and names are unique under
/// case-insensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabCollection {
    tabs: Vec<Tab>,
    /// `None` once every `u64` id has been handed out.
    next_id: Option<u64>,
}

impl Default for TabCollection {
    /// The pages of a fresh form.
    fn default() -> Self {
        let seed = [
            ("Info", TabIcon::InfoClock),
            ("Details", TabIcon::File),
            ("Other", TabIcon::File),
            ("Ending", TabIcon::CheckCircle),
        ];

        Self {
            tabs: seed
                .into_iter()
                .zip(0..)
                .map(|((name, icon), id)| Tab::new(TabId(id), name, icon))
                .collect(),
            next_id: Some(seed.len() as u64),
        }
    }
}

impl TabCollection {
    /// Creates a collection from seed tabs.
    ///
    /// Seed names are stored trimmed, like inserted ones.
    ///
    /// # Errors
    /// Fails if `seed` is empty, if a name is blank, or if two tabs share an
    /// id or a name.
    pub fn new(mut seed: Vec<Tab>) -> Result<Self, TabError> {
        if seed.is_empty() {
            return Err(TabError::Empty);
        }

        for tab in &mut seed {
            let trimmed = tab.name.trim();
            if trimmed.is_empty() {
                return Err(TabError::EmptyName);
            }
            if trimmed.len() != tab.name.len() {
                tab.name = trimmed.to_owned();
            }
        }

        for (i, tab) in seed.iter().enumerate() {
            let earlier = &seed[..i];
            if earlier.iter().any(|other| other.id == tab.id) {
                return Err(TabError::DuplicateId(tab.id));
            }
            if earlier.iter().any(|other| names_match(&other.name, &tab.name)) {
                return Err(TabError::DuplicateName(tab.name.clone()));
            }
        }

        let next_id = seed
            .iter()
            .map(|tab| tab.id.0)
            .max()
            .and_then(|last| last.checked_add(1));
        Ok(Self {
            tabs: seed,
            next_id,
        })
    }

    /// The number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always `false` for a collection built through the public constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Iterates the tabs in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tab> {
        self.tabs.iter()
    }

    /// The tabs in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[Tab] {
        &self.tabs
    }

    /// The first tab in display order.
    #[must_use]
    pub fn first(&self) -> Option<&Tab> {
        self.tabs.first()
    }

    /// Looks up a tab by id.
    #[must_use]
    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// The display position of a tab.
    #[must_use]
    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    /// Whether `candidate` (trimmed) matches an existing name, ignoring case.
    #[must_use]
    pub fn is_name_taken(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        self.tabs.iter().any(|tab| names_match(&tab.name, candidate))
    }

    /// Moves `dragged` to the position currently held by `target`.
    ///
    /// Every other tab keeps its relative order. Dropping a tab onto itself,
    /// or naming an id that is not in the collection, returns an unchanged
    /// copy.
    #[must_use]
    pub fn reorder(&self, dragged: TabId, target: TabId) -> Self {
        let (Some(from), Some(to)) = (self.position(dragged), self.position(target)) else {
            log::debug!("reorder {dragged} -> {target} ignored: unknown tab");
            return self.clone();
        };

        let mut next = self.clone();
        if from != to {
            let tab = next.tabs.remove(from);
            next.tabs.insert(to, tab);
        }
        next
    }

    /// Inserts a new tab right after the tab at `after`, or at the end when
    /// `after` is `None` or points at the last tab (or beyond).
    ///
    /// The stored name is trimmed and the tab receives a fresh id.
    ///
    /// # Errors
    /// Fails if the trimmed name is empty or already taken, or if no fresh id
    /// is left.
    pub fn insert(
        &self,
        name: &str,
        icon: TabIcon,
        after: Option<usize>,
    ) -> Result<Self, TabError> {
        let name = name.trim();
        if name.is_empty() {
            log::debug!("insert rejected: empty name");
            return Err(TabError::EmptyName);
        }
        if self.is_name_taken(name) {
            log::debug!("insert rejected: \"{name}\" is taken");
            return Err(TabError::DuplicateName(name.to_owned()));
        }

        let at = after.map_or(self.tabs.len(), |index| (index + 1).min(self.tabs.len()));

        let mut next = self.clone();
        let id = next.allocate_id()?;
        next.tabs.insert(at, Tab::new(id, name, icon));
        Ok(next)
    }

    /// Moves a tab to the front of the collection.
    #[must_use]
    pub fn move_to_front(&self, id: TabId) -> Self {
        match self.first() {
            Some(first) => self.reorder(id, first.id),
            None => self.clone(),
        }
    }

    /// Inserts a copy of a tab right after it, named after the original.
    ///
    /// An unknown id returns an unchanged copy.
    ///
    /// # Errors
    /// Propagates the rejection from [`insert`](Self::insert).
    pub fn duplicate(&self, id: TabId) -> Result<Self, TabError> {
        let Some(index) = self.position(id) else {
            log::debug!("duplicate {id} ignored: unknown tab");
            return Ok(self.clone());
        };
        let source = &self.tabs[index];
        let name = self.copy_name(&source.name);
        self.insert(&name, source.icon, Some(index))
    }

    /// Removes a tab.
    ///
    /// An unknown id returns an unchanged copy.
    ///
    /// # Errors
    /// Refuses to remove the last remaining tab.
    pub fn remove(&self, id: TabId) -> Result<Self, TabError> {
        let Some(index) = self.position(id) else {
            log::debug!("remove {id} ignored: unknown tab");
            return Ok(self.clone());
        };
        if self.tabs.len() == 1 {
            log::debug!("remove {id} rejected: last tab");
            return Err(TabError::LastTab);
        }

        let mut next = self.clone();
        next.tabs.remove(index);
        Ok(next)
    }

    fn allocate_id(&mut self) -> Result<TabId, TabError> {
        let Some(raw) = self.next_id else {
            log::debug!("insert rejected: tab ids exhausted");
            return Err(TabError::IdsExhausted);
        };
        self.next_id = raw.checked_add(1);
        Ok(TabId(raw))
    }

    fn copy_name(&self, base: &str) -> String {
        let mut candidate = format!("{base} copy");
        let mut n = 2;
        while self.is_name_taken(&candidate) {
            candidate = format!("{base} copy {n}");
            n += 1;
        }
        candidate
    }
}

impl<'a> IntoIterator for &'a TabCollection {
    type Item = &'a Tab;
    type IntoIter = std::slice::Iter<'a, Tab>;

    fn into_iter(self) -> Self::IntoIter {
        self.tabs.iter()
    }
}

fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tabs: &TabCollection) -> Vec<&str> {
        tabs.iter().map(Tab::name).collect()
    }

    fn id_of(tabs: &TabCollection, name: &str) -> TabId {
        tabs.iter()
            .find(|tab| tab.name() == name)
            .map(Tab::id)
            .expect("tab should exist")
    }

    #[test]
    fn default_seed_is_form_pages() {
        let tabs = TabCollection::default();
        assert_eq!(names(&tabs), ["Info", "Details", "Other", "Ending"]);
        assert_eq!(tabs.first().map(Tab::icon), Some(TabIcon::InfoClock));
    }

    #[test]
    fn new_rejects_empty_seed() {
        assert_eq!(TabCollection::new(Vec::new()), Err(TabError::Empty));
    }

    #[test]
    fn new_rejects_duplicate_ids_and_names() {
        let same_id = vec![
            Tab::new(TabId::new(1), "A", TabIcon::File),
            Tab::new(TabId::new(1), "B", TabIcon::File),
        ];
        assert_eq!(
            TabCollection::new(same_id),
            Err(TabError::DuplicateId(TabId::new(1)))
        );

        let same_name = vec![
            Tab::new(TabId::new(1), "Page", TabIcon::File),
            Tab::new(TabId::new(2), "PAGE", TabIcon::File),
        ];
        assert_eq!(
            TabCollection::new(same_name),
            Err(TabError::DuplicateName(String::from("PAGE")))
        );
    }

    #[test]
    fn new_trims_seed_names_and_rejects_blank_ones() {
        let padded = vec![
            Tab::new(TabId::new(1), " Info ", TabIcon::InfoClock),
            Tab::new(TabId::new(2), "Ending", TabIcon::CheckCircle),
        ];
        let tabs = TabCollection::new(padded).unwrap();
        assert_eq!(names(&tabs), ["Info", "Ending"]);

        let blank = vec![
            Tab::new(TabId::new(1), "Info", TabIcon::InfoClock),
            Tab::new(TabId::new(2), "   ", TabIcon::File),
        ];
        assert_eq!(TabCollection::new(blank), Err(TabError::EmptyName));

        let clashing = vec![
            Tab::new(TabId::new(1), "Info", TabIcon::InfoClock),
            Tab::new(TabId::new(2), " info", TabIcon::File),
        ];
        assert_eq!(
            TabCollection::new(clashing),
            Err(TabError::DuplicateName(String::from("info")))
        );
    }

    #[test]
    fn seed_with_largest_id_refuses_further_inserts() {
        let seed = vec![
            Tab::new(TabId::new(0), "A", TabIcon::File),
            Tab::new(TabId::new(u64::MAX), "B", TabIcon::File),
        ];
        let tabs = TabCollection::new(seed).unwrap();
        assert_eq!(
            tabs.insert("C", TabIcon::File, None),
            Err(TabError::IdsExhausted)
        );
        assert_eq!(tabs.duplicate(TabId::new(0)), Err(TabError::IdsExhausted));
        assert_eq!(names(&tabs), ["A", "B"]);
    }

    #[test]
    fn last_free_id_is_handed_out_once() {
        let seed = vec![Tab::new(TabId::new(u64::MAX - 1), "A", TabIcon::File)];
        let tabs = TabCollection::new(seed).unwrap();

        let next = tabs.insert("B", TabIcon::File, None).unwrap();
        assert_eq!(next.get(TabId::new(u64::MAX)).map(Tab::name), Some("B"));
        assert_eq!(
            next.insert("C", TabIcon::File, None),
            Err(TabError::IdsExhausted)
        );
    }

    #[test]
    fn reorder_moves_dragged_onto_target_position() {
        let tabs = TabCollection::default();
        let moved = tabs.reorder(id_of(&tabs, "Details"), id_of(&tabs, "Ending"));
        assert_eq!(names(&moved), ["Info", "Other", "Ending", "Details"]);

        let back = moved.reorder(id_of(&tabs, "Ending"), id_of(&tabs, "Info"));
        assert_eq!(names(&back), ["Ending", "Info", "Other", "Details"]);
    }

    #[test]
    fn reorder_keeps_relative_order_of_other_tabs() {
        let tabs = TabCollection::default();
        for dragged in tabs.iter() {
            for target in tabs.iter() {
                let moved = tabs.reorder(dragged.id(), target.id());
                let others_before: Vec<_> =
                    tabs.iter().filter(|t| t.id() != dragged.id()).collect();
                let others_after: Vec<_> =
                    moved.iter().filter(|t| t.id() != dragged.id()).collect();
                assert_eq!(others_before, others_after);
                assert_eq!(moved.position(dragged.id()), tabs.position(target.id()));
            }
        }
    }

    #[test]
    fn reorder_onto_self_or_unknown_is_noop() {
        let tabs = TabCollection::default();
        let info = id_of(&tabs, "Info");
        let missing = TabId::new(99);

        assert_eq!(tabs.reorder(info, info), tabs);
        assert_eq!(tabs.reorder(missing, info), tabs);
        assert_eq!(tabs.reorder(info, missing), tabs);
    }

    #[test]
    fn insert_after_index_places_tab_next_to_it() {
        let tabs = TabCollection::default();
        let next = tabs.insert("Review", TabIcon::File, Some(1)).unwrap();
        assert_eq!(names(&next), ["Info", "Details", "Review", "Other", "Ending"]);
        assert_eq!(next.len(), tabs.len() + 1);
    }

    #[test]
    fn insert_without_index_matches_insert_after_last() {
        let tabs = TabCollection::default();
        let appended = tabs.insert("Summary", TabIcon::File, None).unwrap();
        let after_last = tabs
            .insert("Summary", TabIcon::File, Some(tabs.len() - 1))
            .unwrap();
        assert_eq!(appended, after_last);
        assert_eq!(names(&appended).last(), Some(&"Summary"));

        let far_out = tabs.insert("Summary", TabIcon::File, Some(42)).unwrap();
        assert_eq!(appended, far_out);
    }

    #[test]
    fn insert_allocates_fresh_ids() {
        let tabs = TabCollection::default();
        let one = tabs.insert("One", TabIcon::File, None).unwrap();
        let two = one.insert("Two", TabIcon::File, None).unwrap();
        let a = id_of(&two, "One");
        let b = id_of(&two, "Two");
        assert_ne!(a, b);
        assert!(tabs.iter().all(|tab| tab.id() != a && tab.id() != b));
    }

    #[test]
    fn insert_trims_and_rejects_invalid_names() {
        let tabs = TabCollection::default();
        assert_eq!(
            tabs.insert("   ", TabIcon::File, None),
            Err(TabError::EmptyName)
        );
        assert_eq!(
            tabs.insert(" info ", TabIcon::File, None),
            Err(TabError::DuplicateName(String::from("info")))
        );

        let next = tabs.insert("  Review  ", TabIcon::File, None).unwrap();
        assert!(next.iter().any(|tab| tab.name() == "Review"));
    }

    #[test]
    fn name_lookup_ignores_case_and_padding() {
        let tabs = TabCollection::default();
        assert!(tabs.is_name_taken("DETAILS"));
        assert!(tabs.is_name_taken("  ending"));
        assert!(!tabs.is_name_taken("Review"));
    }

    #[test]
    fn move_to_front_reorders_onto_first() {
        let tabs = TabCollection::default();
        let moved = tabs.move_to_front(id_of(&tabs, "Other"));
        assert_eq!(names(&moved), ["Other", "Info", "Details", "Ending"]);
    }

    #[test]
    fn duplicate_inserts_unique_copy_after_source() {
        let tabs = TabCollection::default();
        let details = id_of(&tabs, "Details");

        let once = tabs.duplicate(details).unwrap();
        assert_eq!(
            names(&once),
            ["Info", "Details", "Details copy", "Other", "Ending"]
        );

        let twice = once.duplicate(details).unwrap();
        assert_eq!(
            names(&twice),
            ["Info", "Details", "Details copy 2", "Details copy", "Other", "Ending"]
        );
        assert_eq!(
            twice.get(id_of(&twice, "Details copy 2")).map(Tab::icon),
            Some(TabIcon::File)
        );
    }

    #[test]
    fn remove_keeps_collection_non_empty() {
        let only = TabCollection::new(vec![Tab::new(TabId::new(7), "Only", TabIcon::File)])
            .unwrap();
        assert_eq!(only.remove(TabId::new(7)), Err(TabError::LastTab));

        let tabs = TabCollection::default();
        let next = tabs.remove(id_of(&tabs, "Other")).unwrap();
        assert_eq!(names(&next), ["Info", "Details", "Ending"]);
        assert_eq!(tabs.remove(TabId::new(99)).unwrap(), tabs);
    }

    #[test]
    fn icon_names_round_trip() {
        for icon in TabIcon::ALL {
            assert_eq!(icon.name().parse::<TabIcon>(), Ok(icon));
        }
        assert_eq!(
            "rocket".parse::<TabIcon>(),
            Err(TabError::UnknownIcon(String::from("rocket")))
        );
    }
}
