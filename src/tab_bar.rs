//! Displays a reorderable [`TabBar`] of form pages.
//!
//! The bar reports what the user did through its callbacks; the owning
//! application keeps the tabs and applies the changes itself.

use iced::advanced::{
    layout::{Limits, Node},
    mouse, renderer,
    widget::{tree, Operation, Tree},
    Clipboard, Layout, Shell, Widget,
};
use iced::widget::{container, scrollable, text, Scrollable};
use iced::{Border, Color, Element, Event, Font, Length, Padding, Pixels, Point, Rectangle};

use crate::status::{Status, StyleFn};
use crate::style::{Catalog, Style};
use crate::tab::{self, Callbacks, Metrics, TabLabel};
use iced::mouse::Cursor;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// The default icon size.
const DEFAULT_ICON_SIZE: f32 = 14.0;
/// The default text size.
const DEFAULT_TEXT_SIZE: f32 = 14.0;
/// The default padding inside each tab.
const DEFAULT_PADDING: Padding = Padding {
    top: 4.0,
    right: 10.0,
    bottom: 4.0,
    left: 10.0,
};
/// The default gap between a tab's icon, text and menu trigger.
const DEFAULT_SPACING: Pixels = Pixels(6.0);
/// The default width of the dashed connector after each tab.
const DEFAULT_CONNECTOR_WIDTH: f32 = 32.0;
/// The default spacing for the embedded scrollbar (when not floating).
const DEFAULT_SCROLLBAR_SPACING: Pixels = Pixels(4.0);
/// Factor to convert vertical scroll lines to horizontal pixels (matches iced's scroll speed).
const VERTICAL_TO_HORIZONTAL_SCROLL_FACTOR: f32 = 60.0;

/// State for the `TabBar` widget tree (used for diff tag).
pub(crate) struct TabBarState;

/// A reorderable bar of page tabs.
///
/// # Example
/// ```ignore
/// # use iced_page_tabs::{TabBar, TabCollection, TabId, TabLabel};
/// #
/// #[derive(Debug, Clone)]
/// enum Message {
///     Selected(TabId),
///     Dropped(TabId, Option<TabId>),
/// }
///
/// let tabs = TabCollection::default();
/// let bar = tabs
///     .iter()
///     .fold(TabBar::new(Message::Selected), |bar, tab| {
///         bar.push(tab.id(), TabLabel::from(tab))
///     })
///     .on_drag_end(Message::Dropped)
///     .set_active_tab(&tabs.as_slice()[0].id());
/// # let _: iced::Element<'_, Message> = bar.into();
/// ```
pub struct TabBar<'a, Message, Id, Theme = iced::Theme, Renderer = iced::Renderer>
where
    Renderer: renderer::Renderer + iced::advanced::text::Renderer,
    Theme: Catalog,
    Id: Eq + Clone,
{
    /// The index of the currently active tab, if it is in the bar.
    active_tab: Option<usize>,
    /// The labels of the tabs.
    tab_labels: Vec<TabLabel>,
    /// The ids of the tabs, in display order.
    tab_ids: Vec<Id>,
    /// Messages produced by the bar.
    callbacks: Callbacks<Message, Id>,
    /// The width of the [`TabBar`].
    width: Length,
    /// The height of the [`TabBar`].
    height: Length,
    /// The maximum height of the [`TabBar`].
    max_height: f32,
    /// The icon size.
    icon_size: f32,
    /// The text size.
    text_size: f32,
    /// The padding of the tabs of the [`TabBar`].
    padding: Padding,
    /// The gap between the parts of a tab.
    spacing: Pixels,
    /// The width of the connector after each tab.
    connector_width: f32,
    /// The optional icon font of the [`TabBar`].
    font: Option<Font>,
    /// The optional text font of the [`TabBar`].
    text_font: Option<Font>,
    /// The style of the [`TabBar`].
    class: <Theme as Catalog>::Class<'a>,
    /// Scrollbar visibility for the tab bar.
    scroll_mode: ScrollMode,
    _renderer: PhantomData<Renderer>,
}

/// Scroll behavior of the [`TabBar`].
///
/// Overflowing tabs can always be scrolled with the mouse wheel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollMode {
    /// Scrollbar overlays the content when visible.
    Floating,
    /// Scrollbar is embedded in its own row below the tabs with the given spacing.
    Embedded(Pixels),
}

impl Default for ScrollMode {
    fn default() -> Self {
        Self::Embedded(DEFAULT_SCROLLBAR_SPACING)
    }
}

impl<Message, Id, Theme, Renderer> fmt::Debug for TabBar<'_, Message, Id, Theme, Renderer>
where
    Renderer: renderer::Renderer + iced::advanced::text::Renderer,
    Theme: Catalog,
    Id: Eq + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabBar")
            .field("active_tab", &self.active_tab)
            .field("tab_labels", &self.tab_labels)
            .field("size", &self.tab_ids.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("scroll_mode", &self.scroll_mode)
            .finish()
    }
}

impl<'a, Message, Id, Theme, Renderer> TabBar<'a, Message, Id, Theme, Renderer>
where
    Renderer: renderer::Renderer + iced::advanced::text::Renderer<Font = Font>,
    Theme: Catalog + text::Catalog + scrollable::Catalog + container::Catalog,
    Id: Eq + Clone,
{
    /// Creates an empty [`TabBar`] which sends `on_select` when a tab is
    /// clicked without being dragged.
    pub fn new<F>(on_select: F) -> Self
    where
        F: 'static + Fn(Id) -> Message,
    {
        Self::with_tab_labels(Vec::new(), on_select)
    }

    /// Similar to [`new`](Self::new) but with the given tabs.
    pub fn with_tab_labels<F>(tab_labels: Vec<(Id, TabLabel)>, on_select: F) -> Self
    where
        F: 'static + Fn(Id) -> Message,
    {
        let (tab_ids, tab_labels) = tab_labels.into_iter().unzip();
        Self {
            active_tab: None,
            tab_labels,
            tab_ids,
            callbacks: Callbacks {
                on_select: Arc::new(on_select),
                on_drag_start: None,
                on_drag_end: None,
                on_menu: None,
                on_insert: None,
            },
            width: Length::Fill,
            height: Length::Shrink,
            max_height: u32::MAX as f32,
            icon_size: DEFAULT_ICON_SIZE,
            text_size: DEFAULT_TEXT_SIZE,
            padding: DEFAULT_PADDING,
            spacing: DEFAULT_SPACING,
            connector_width: DEFAULT_CONNECTOR_WIDTH,
            font: None,
            text_font: None,
            class: <Theme as Catalog>::default(),
            scroll_mode: ScrollMode::default(),
            _renderer: PhantomData,
        }
    }

    /// Gets the id of the currently active tab.
    #[must_use]
    pub fn get_active_tab_id(&self) -> Option<&Id> {
        self.active_tab.and_then(|idx| self.tab_ids.get(idx))
    }

    /// Gets the index of the currently active tab.
    #[must_use]
    pub fn get_active_tab_idx(&self) -> Option<usize> {
        self.active_tab
    }

    /// Sets the height of the bar; tabs are centered vertically in it.
    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the font of the icons. Defaults to the codicon font.
    #[must_use]
    pub fn icon_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Sets the size of the tab icons and the menu trigger.
    #[must_use]
    pub fn icon_size(mut self, icon_size: f32) -> Self {
        self.icon_size = icon_size;
        self
    }

    /// Caps the height of the bar.
    #[must_use]
    pub fn max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    /// Sets the message sent once a pressed tab has moved far enough to
    /// count as a drag.
    #[must_use]
    pub fn on_drag_start<F>(mut self, on_drag_start: F) -> Self
    where
        F: 'static + Fn(Id) -> Message,
    {
        self.callbacks.on_drag_start = Some(Arc::new(on_drag_start));
        self
    }

    /// Enables dragging. The message carries the dragged tab and the tab it
    /// was dropped over, if the pointer was released inside the bar.
    #[must_use]
    pub fn on_drag_end<F>(mut self, on_drag_end: F) -> Self
    where
        F: 'static + Fn(Id, Option<Id>) -> Message,
    {
        self.callbacks.on_drag_end = Some(Arc::new(on_drag_end));
        self
    }

    /// Shows a menu trigger on the active tab. The message carries the tab
    /// and the window position the menu should open from.
    #[must_use]
    pub fn on_menu<F>(mut self, on_menu: F) -> Self
    where
        F: 'static + Fn(Id, Point) -> Message,
    {
        self.callbacks.on_menu = Some(Arc::new(on_menu));
        self
    }

    /// Enables the insert buttons on the connectors and the trailing
    /// "Add Page" button.
    ///
    /// The message carries the index of the tab to insert after, or `None`
    /// to append.
    #[must_use]
    pub fn on_insert<F>(mut self, on_insert: F) -> Self
    where
        F: 'static + Fn(Option<usize>) -> Message,
    {
        self.callbacks.on_insert = Some(Arc::new(on_insert));
        self
    }

    /// Sets the padding inside each tab and the "Add Page" button.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Appends a tab.
    #[must_use]
    pub fn push(mut self, id: Id, tab_label: TabLabel) -> Self {
        self.tab_labels.push(tab_label);
        self.tab_ids.push(id);
        self
    }

    /// Gets the amount of tabs in the [`TabBar`].
    #[must_use]
    pub fn size(&self) -> usize {
        self.tab_ids.len()
    }

    /// Sets the gap between the icon, text and menu trigger of a tab.
    #[must_use]
    pub fn spacing(mut self, spacing: impl Into<Pixels>) -> Self {
        self.spacing = spacing.into();
        self
    }

    /// Sets the width of the dashed connector after each tab.
    #[must_use]
    pub fn connector_width(mut self, width: f32) -> Self {
        self.connector_width = width;
        self
    }

    /// Sets how the scrollbar is shown when the tabs overflow.
    #[must_use]
    pub fn scroll_mode(mut self, mode: ScrollMode) -> Self {
        self.scroll_mode = mode;
        self
    }

    /// Sets the font of the text of the [`TabLabel`]s of the [`TabBar`].
    #[must_use]
    pub fn text_font(mut self, text_font: Font) -> Self {
        self.text_font = Some(text_font);
        self
    }

    /// Sets the size of the tab names.
    #[must_use]
    pub fn text_size(mut self, text_size: f32) -> Self {
        self.text_size = text_size;
        self
    }

    /// Sets the currently active tab. An id that is not in the bar leaves
    /// no tab active.
    #[must_use]
    pub fn set_active_tab(mut self, active_tab: &Id) -> Self {
        self.active_tab = self.tab_ids.iter().position(|id| id == active_tab);
        self
    }

    /// Sets a style function that maps a [`Status`] to a [`Style`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self
    where
        <Theme as Catalog>::Class<'a>: From<StyleFn<'a, Theme, Style>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme, Style>).into();
        self
    }

    /// Sets the style class.
    #[must_use]
    pub fn class(mut self, class: impl Into<<Theme as Catalog>::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }

    /// Sets the width of the [`TabBar`].
    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    fn scrollbar_direction(&self) -> scrollable::Direction {
        let scrollbar = match self.scroll_mode {
            ScrollMode::Floating => scrollable::Scrollbar::default(),
            ScrollMode::Embedded(spacing) => scrollable::Scrollbar::default().spacing(spacing),
        };
        scrollable::Direction::Horizontal(scrollbar)
    }

    fn tab_content(&self) -> tab::Tab<'_, 'a, Message, Id, Theme, Renderer> {
        tab::Tab::new(
            self.tab_labels.clone(),
            self.tab_ids.clone(),
            self.active_tab,
            Metrics {
                icon_size: self.icon_size,
                text_size: self.text_size,
                label_spacing: self.spacing.0,
                connector_width: self.connector_width,
                padding: self.padding,
                height: self.height,
                font: self.font,
                text_font: self.text_font,
            },
            self.callbacks.clone(),
            &self.class,
        )
    }

    /// Returns the inner element (Scrollable wrapping the tab content).
    pub(crate) fn wrapper_element(&self) -> Element<'_, Message, Theme, Renderer> {
        Element::new(
            Scrollable::with_direction(Element::new(self.tab_content()), self.scrollbar_direction())
                .width(self.width)
                .height(self.height),
        )
    }

    fn wrapper_tree<'t>(
        &self,
        tree: &'t mut Tree,
        element: &mut Element<'_, Message, Theme, Renderer>,
    ) -> &'t mut Tree {
        if tree.children.is_empty() {
            tree.children.push(Tree::new(element.as_widget()));
        } else {
            tree.children[0].diff(element.as_widget_mut());
        }
        &mut tree.children[0]
    }
}

/// Widget implementation for [`TabBar`](TabBar).
impl<Message, Id, Theme, Renderer> Widget<Message, Theme, Renderer>
    for TabBar<'_, Message, Id, Theme, Renderer>
where
    Renderer: renderer::Renderer + iced::advanced::text::Renderer<Font = Font>,
    Theme: Catalog + text::Catalog + scrollable::Catalog + container::Catalog,
    Id: Eq + Clone,
{
    fn size(&self) -> iced::Size<Length> {
        iced::Size::new(self.width, self.height)
    }

    fn layout(&mut self, tree: &mut Tree, renderer: &Renderer, limits: &Limits) -> Node {
        let mut element = self.wrapper_element();
        let tab_tree = self.wrapper_tree(tree, &mut element);

        let limits = limits.max_height(self.max_height);
        element.as_widget_mut().layout(tab_tree, renderer, &limits)
    }

    fn draw(
        &self,
        state: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let style_sheet = Catalog::style(theme, &self.class, Status::Inactive);

        if bounds.intersects(viewport) {
            renderer.fill_quad(
                renderer::Quad {
                    bounds,
                    border: Border {
                        radius: style_sheet.bar.border_radius,
                        width: style_sheet.bar.border_width,
                        color: style_sheet.bar.border_color.unwrap_or(Color::TRANSPARENT),
                    },
                    shadow: style_sheet.bar.shadow,
                    ..renderer::Quad::default()
                },
                style_sheet
                    .bar
                    .background
                    .unwrap_or_else(|| Color::TRANSPARENT.into()),
            );
        }

        let element = self.wrapper_element();
        element.as_widget().draw(
            &state.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<TabBarState>()
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(self.wrapper_element().as_widget())]
    }

    fn diff(&self, tree: &mut Tree) {
        let element = self.wrapper_element();
        tree.diff_children(std::slice::from_ref(&element));
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation<()>,
    ) {
        operation.container(None, layout.bounds());

        let mut element = self.wrapper_element();
        let tab_tree = self.wrapper_tree(tree, &mut element);
        element
            .as_widget_mut()
            .operate(tab_tree, layout, renderer, operation);
    }

    fn update(
        &mut self,
        state: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        // A plain vertical wheel scrolls the bar sideways.
        let transformed_event = match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let delta_x = horizontal_delta(*delta);
                (delta_x != 0.0 && cursor.is_over(layout.bounds())).then(|| {
                    Event::Mouse(mouse::Event::WheelScrolled {
                        delta: mouse::ScrollDelta::Pixels { x: delta_x, y: 0.0 },
                    })
                })
            }
            _ => None,
        };

        let event_ref = transformed_event.as_ref().unwrap_or(event);
        let mut element = self.wrapper_element();
        let tab_tree = self.wrapper_tree(state, &mut element);
        element.as_widget_mut().update(
            tab_tree, event_ref, layout, cursor, renderer, clipboard, shell, viewport,
        );
        if transformed_event.is_some() {
            shell.capture_event();
        }
    }

    fn mouse_interaction(
        &self,
        state: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let element = self.wrapper_element();
        element.as_widget().mouse_interaction(
            &state.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }
}

impl<'a, Message, Id, Theme, Renderer> From<TabBar<'a, Message, Id, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Renderer: 'a + renderer::Renderer + iced::advanced::text::Renderer<Font = Font>,
    Theme: 'a + Catalog + text::Catalog + scrollable::Catalog + container::Catalog,
    Message: 'a,
    Id: 'a + Eq + Clone,
{
    fn from(tab_bar: TabBar<'a, Message, Id, Theme, Renderer>) -> Self {
        Element::new(tab_bar)
    }
}

/// Folds a wheel delta onto the horizontal axis, in pixels.
fn horizontal_delta(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => y * VERTICAL_TO_HORIZONTAL_SCROLL_FACTOR,
        mouse::ScrollDelta::Pixels { x, y } => x + y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TabCollection, TabId};

    #[derive(Debug, Clone)]
    enum Message {
        Selected(TabId),
    }

    fn bar(tabs: &TabCollection) -> TabBar<'static, Message, TabId> {
        tabs.iter().fold(TabBar::new(Message::Selected), |bar, tab| {
            bar.push(tab.id(), TabLabel::from(tab))
        })
    }

    #[test]
    fn wheel_lines_scroll_sideways() {
        assert_eq!(
            horizontal_delta(mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 }),
            -VERTICAL_TO_HORIZONTAL_SCROLL_FACTOR
        );
        assert_eq!(
            horizontal_delta(mouse::ScrollDelta::Pixels { x: 3.0, y: 4.0 }),
            7.0
        );
    }

    #[test]
    fn active_tab_follows_id() {
        let tabs = TabCollection::default();
        let details = tabs.as_slice()[1].id();

        let bar = bar(&tabs).set_active_tab(&details);
        assert_eq!(bar.size(), 4);
        assert_eq!(bar.get_active_tab_idx(), Some(1));
        assert_eq!(bar.get_active_tab_id(), Some(&details));
    }

    #[test]
    fn unknown_active_id_selects_nothing() {
        let tabs = TabCollection::default();
        let bar = bar(&tabs).set_active_tab(&TabId::new(99));
        assert_eq!(bar.get_active_tab_idx(), None);

        let Message::Selected(id) = (bar.callbacks.on_select)(tabs.as_slice()[2].id());
        assert_eq!(id, tabs.as_slice()[2].id());
    }
}
