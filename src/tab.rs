//! Content widget for [`TabBar`](crate::TabBar).
//!
//! Lays out the tabs with their connectors and the trailing "Add Page"
//! button, hit tests presses in content space (it lives inside a
//! [`Scrollable`](iced::widget::Scrollable)) and runs the drag gesture.

use iced::advanced::{
    layout::{Limits, Node},
    renderer,
    widget::{tree, Operation, Tree},
    Clipboard, Layout, Shell, Widget,
};
use iced::widget::{container, text, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse, touch, Alignment, Background, Border, Color, Element, Event, Font, Length, Padding,
    Pixels, Point, Rectangle, Size, Vector,
};
use iced_fonts::CODICON_FONT;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::collection::Tab as TabData;
use crate::icon;
use crate::status::{tab_status, Part, Status};
use crate::style::{Catalog, Style};

/// Offset added to icon/text size during layout to prevent clipping.
const LAYOUT_SIZE_OFFSET: f32 = 1.0;
/// Minimum pointer travel (in pixels) before a press becomes a drag.
const DRAG_THRESHOLD: f32 = 5.0;
/// Height of the pressable area of a connector.
const CONNECTOR_HIT_HEIGHT: f32 = 20.0;
/// Diameter of the round insert button drawn on a hovered connector.
const INSERT_BUTTON_SIZE: f32 = 16.0;
/// Length of one dash of a connector.
const DASH_LENGTH: f32 = 4.0;
/// Gap between two dashes of a connector.
const DASH_GAP: f32 = 3.0;
/// Horizontal shift of the menu anchor from the trigger's right edge.
const MENU_ANCHOR_INSET: f32 = 4.0;
/// Label of the trailing add button.
const ADD_LABEL: &str = "Add Page";

/// The icon and text shown on a tab of a [`TabBar`](crate::TabBar).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TabLabel {
    icon: Option<char>,
    text: String,
}

impl TabLabel {
    /// Creates a label with an optional icon glyph.
    pub fn new(icon: Option<char>, text: impl Into<String>) -> Self {
        Self {
            icon,
            text: text.into(),
        }
    }

    /// The icon glyph, if any.
    #[must_use]
    pub fn icon(&self) -> Option<char> {
        self.icon
    }

    /// The label text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for TabLabel {
    fn from(value: &str) -> Self {
        Self::new(None, value)
    }
}

impl From<String> for TabLabel {
    fn from(value: String) -> Self {
        Self::new(None, value)
    }
}

impl From<(char, &str)> for TabLabel {
    fn from(value: (char, &str)) -> Self {
        Self::new(Some(value.0), value.1)
    }
}

impl From<&TabData> for TabLabel {
    fn from(tab: &TabData) -> Self {
        Self::new(Some(tab.icon().glyph()), tab.name())
    }
}

/// Tracks a press on a tab, which becomes a drag once it travels far enough.
#[derive(Debug, Clone)]
pub(crate) struct DragState {
    /// Index of the pressed tab.
    pub(crate) tab_index: usize,
    /// Pointer position when the press occurred.
    pub(crate) press_origin: Point,
    /// Latest pointer position.
    pub(crate) current_pos: Point,
    /// Whether the pointer has travelled past the drag threshold.
    pub(crate) is_dragging: bool,
    /// Horizontal offset from the tab's left edge to the press point.
    pub(crate) tab_offset_x: f32,
}

/// State stored in the content widget's tree.
#[derive(Debug, Clone, Default)]
pub(crate) struct TabContentState {
    pub(crate) drag: Option<DragState>,
    pub(crate) hovered: Option<Part>,
}

impl TabContentState {
    fn dragged_index(&self) -> Option<usize> {
        self.drag
            .as_ref()
            .filter(|drag| drag.is_dragging)
            .map(|drag| drag.tab_index)
    }
}

/// Callbacks shared between the [`TabBar`](crate::TabBar) and its content.
pub(crate) struct Callbacks<Message, Id> {
    pub(crate) on_select: Arc<dyn Fn(Id) -> Message>,
    pub(crate) on_drag_start: Option<Arc<dyn Fn(Id) -> Message>>,
    pub(crate) on_drag_end: Option<Arc<dyn Fn(Id, Option<Id>) -> Message>>,
    pub(crate) on_menu: Option<Arc<dyn Fn(Id, Point) -> Message>>,
    pub(crate) on_insert: Option<Arc<dyn Fn(Option<usize>) -> Message>>,
}

impl<Message, Id> Clone for Callbacks<Message, Id> {
    fn clone(&self) -> Self {
        Self {
            on_select: Arc::clone(&self.on_select),
            on_drag_start: self.on_drag_start.as_ref().map(Arc::clone),
            on_drag_end: self.on_drag_end.as_ref().map(Arc::clone),
            on_menu: self.on_menu.as_ref().map(Arc::clone),
            on_insert: self.on_insert.as_ref().map(Arc::clone),
        }
    }
}

/// Sizes and fonts of the content, configured on the [`TabBar`](crate::TabBar).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Metrics {
    pub(crate) icon_size: f32,
    pub(crate) text_size: f32,
    pub(crate) label_spacing: f32,
    pub(crate) connector_width: f32,
    pub(crate) padding: Padding,
    pub(crate) height: Length,
    pub(crate) font: Option<Font>,
    pub(crate) text_font: Option<Font>,
}

/// Content widget of the tab bar.
pub(crate) struct Tab<'a, 'b, Message, Id, Theme = iced::Theme, Renderer = iced::Renderer>
where
    Renderer: renderer::Renderer + iced::advanced::text::Renderer,
    Theme: Catalog,
    Id: Clone,
{
    labels: Vec<TabLabel>,
    ids: Vec<Id>,
    active_tab: Option<usize>,
    metrics: Metrics,
    callbacks: Callbacks<Message, Id>,
    class: &'a <Theme as Catalog>::Class<'b>,
    _renderer: PhantomData<Renderer>,
}

impl<Message, Id, Theme, Renderer> fmt::Debug for Tab<'_, '_, Message, Id, Theme, Renderer>
where
    Renderer: renderer::Renderer + iced::advanced::text::Renderer,
    Theme: Catalog,
    Id: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tab")
            .field("labels", &self.labels)
            .field("active_tab", &self.active_tab)
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// The layouts of one tab and the connector that follows it.
#[derive(Clone, Copy)]
struct SlotLayout<'a> {
    tab: Layout<'a>,
    connector: Layout<'a>,
}

impl<'a> SlotLayout<'a> {
    fn label(self) -> Option<Layout<'a>> {
        self.tab.children().next()
    }

    fn kebab(self) -> Option<Layout<'a>> {
        self.tab.children().nth(1)
    }
}

/// Splits the content layout into tab slots and the optional add button.
fn split_layout(layout: Layout<'_>, count: usize) -> (Vec<SlotLayout<'_>>, Option<Layout<'_>>) {
    let mut children = layout.children();
    let slots = children
        .by_ref()
        .take(count)
        .filter_map(|slot| {
            let mut parts = slot.children();
            Some(SlotLayout {
                tab: parts.next()?,
                connector: parts.next()?,
            })
        })
        .collect();
    (slots, children.next())
}

impl<'a, 'b, Message, Id, Theme, Renderer> Tab<'a, 'b, Message, Id, Theme, Renderer>
where
    Renderer: renderer::Renderer + iced::advanced::text::Renderer<Font = Font>,
    Theme: Catalog + text::Catalog + container::Catalog,
    Id: Clone,
{
    pub(crate) fn new(
        labels: Vec<TabLabel>,
        ids: Vec<Id>,
        active_tab: Option<usize>,
        metrics: Metrics,
        callbacks: Callbacks<Message, Id>,
        class: &'a <Theme as Catalog>::Class<'b>,
    ) -> Self {
        Self {
            labels,
            ids,
            active_tab,
            metrics,
            callbacks,
            class,
            _renderer: PhantomData,
        }
    }

    fn has_menu(&self) -> bool {
        self.callbacks.on_menu.is_some()
    }

    fn icon_font(&self) -> Font {
        self.metrics.font.unwrap_or(CODICON_FONT)
    }

    fn row_element(&self) -> Row<'_, Message, Theme, Renderer> {
        let metrics = self.metrics;
        let icon_font = self.icon_font();

        let mut row = self
            .labels
            .iter()
            .fold(Row::<Message, Theme, Renderer>::new(), |row, label| {
                let mut tab_row = Row::new()
                    .push(
                        Container::new(label_row(
                            label.icon,
                            label.text.as_str(),
                            metrics,
                            icon_font,
                        ))
                        .align_y(Vertical::Center),
                    )
                    .align_y(Alignment::Center)
                    .padding(metrics.padding)
                    .spacing(metrics.label_spacing)
                    .width(Length::Shrink);

                if self.has_menu() {
                    // Reserved even when hidden so tabs keep their width.
                    tab_row = tab_row.push(
                        Space::new()
                            .width(metrics.icon_size + LAYOUT_SIZE_OFFSET)
                            .height(metrics.icon_size + LAYOUT_SIZE_OFFSET),
                    );
                }

                row.push(
                    Row::new()
                        .push(tab_row)
                        .push(
                            Space::new()
                                .width(metrics.connector_width)
                                .height(CONNECTOR_HIT_HEIGHT),
                        )
                        .align_y(Alignment::Center),
                )
            });

        if self.callbacks.on_insert.is_some() {
            row = row.push(
                Container::new(label_row(Some(icon::ADD), ADD_LABEL, metrics, icon_font))
                    .padding(metrics.padding)
                    .align_y(Vertical::Center),
            );
        }

        row.width(Length::Shrink)
            .height(metrics.height)
            .align_y(Alignment::Center)
    }

    fn hit_test(
        &self,
        position: Point,
        slots: &[SlotLayout<'_>],
        add: Option<Layout<'_>>,
    ) -> Option<Part> {
        for (i, slot) in slots.iter().enumerate() {
            if slot.tab.bounds().contains(position) {
                let over_kebab = self.active_tab == Some(i)
                    && self.has_menu()
                    && slot
                        .kebab()
                        .is_some_and(|kebab| kebab.bounds().contains(position));
                return Some(if over_kebab { Part::Kebab(i) } else { Part::Tab(i) });
            }
            if i + 1 < slots.len() && slot.connector.bounds().contains(position) {
                return Some(Part::Connector(i));
            }
        }

        add.filter(|add| add.bounds().contains(position))
            .map(|_| Part::AddButton)
    }
}

impl<Message, Id, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Tab<'_, '_, Message, Id, Theme, Renderer>
where
    Renderer: renderer::Renderer + iced::advanced::text::Renderer<Font = Font>,
    Theme: Catalog + text::Catalog + container::Catalog,
    Id: Clone,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Shrink, self.metrics.height)
    }

    fn layout(&mut self, tree: &mut Tree, renderer: &Renderer, limits: &Limits) -> Node {
        let row = self.row_element();
        let mut element = Element::new(row);
        let tab_tree = if let Some(child_tree) = tree.children.get_mut(0) {
            child_tree.diff(element.as_widget_mut());
            child_tree
        } else {
            let child_tree = Tree::new(element.as_widget());
            tree.children.insert(0, child_tree);
            &mut tree.children[0]
        };

        element
            .as_widget_mut()
            .layout(tab_tree, renderer, &limits.width(Length::Shrink).loose())
    }

    fn draw(
        &self,
        state: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let content_state = state.state.downcast_ref::<TabContentState>();
        let dragged = content_state.dragged_index();
        let hovered = content_state.hovered;
        let (slots, add) = split_layout(layout, self.labels.len());

        let fonts = Fonts {
            icon: (self.icon_font(), self.metrics.icon_size),
            text: (
                self.metrics.text_font.unwrap_or_default(),
                self.metrics.text_size,
            ),
        };
        let connector_style = Catalog::style(theme, self.class, Status::Inactive).connector;

        for (i, slot) in slots.iter().enumerate() {
            let show_button =
                dragged.is_none() && i + 1 < slots.len() && hovered == Some(Part::Connector(i));
            draw_connector(
                renderer,
                slot.connector,
                &connector_style,
                show_button,
                fonts.icon.0,
                viewport,
            );
        }

        if let Some(add) = add {
            let status = if dragged.is_none() && hovered == Some(Part::AddButton) {
                Status::Hovered
            } else {
                Status::Inactive
            };
            let style = Catalog::style(theme, self.class, status);
            draw_add_button(renderer, add, &style, fonts, viewport);
        }

        let draw_at = |renderer: &mut Renderer, index: usize, offset: Vector, status: Status| {
            let Some(slot) = slots.get(index) else {
                return;
            };
            let kebab = (status == Status::Active && dragged.is_none() && self.has_menu())
                .then(|| slot.kebab())
                .flatten()
                .map(|kebab| (kebab, hovered == Some(Part::Kebab(index))));
            let style = Catalog::style(theme, self.class, status);
            renderer.with_translation(offset, |renderer| {
                draw_tab(renderer, &self.labels[index], *slot, kebab, &style, fonts, viewport);
            });
        };

        let Some(drag) = content_state.drag.as_ref().filter(|drag| drag.is_dragging) else {
            for i in 0..slots.len() {
                let status = tab_status(i, self.active_tab, hovered, None);
                draw_at(renderer, i, Vector::ZERO, status);
            }
            return;
        };

        let dragged_idx = drag.tab_index;
        let target = cursor
            .position_over(layout.bounds())
            .and_then(|pos| closest_tab(slots.iter().map(|s| s.tab.bounds().center_x()), pos.x))
            .unwrap_or(dragged_idx);

        for (slot, &tab_idx) in preview_order(slots.len(), dragged_idx, target).iter().enumerate() {
            if tab_idx == dragged_idx {
                continue;
            }
            let offset_x = slots[slot].tab.bounds().x - slots[tab_idx].tab.bounds().x;
            let status = tab_status(tab_idx, self.active_tab, None, Some(dragged_idx));
            draw_at(renderer, tab_idx, Vector::new(offset_x, 0.0), status);
        }

        // The dragged tab floats under the pointer.
        if let Some(dragged_slot) = slots.get(dragged_idx) {
            let original = dragged_slot.tab.bounds();
            let offset = Vector::new(
                drag.current_pos.x - drag.tab_offset_x - original.x,
                drag.current_pos.y - original.center_y(),
            );
            draw_at(renderer, dragged_idx, offset, Status::Dragging);
        }
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<TabContentState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(TabContentState::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(Element::new(self.row_element()))]
    }

    fn diff(&self, tree: &mut Tree) {
        let content = Element::new(self.row_element());
        tree.diff_children(std::slice::from_ref(&content));
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation<()>,
    ) {
        operation.container(None, layout.bounds());
        operation.traverse(&mut |operation| {
            if let Some(tab_tree) = tree.children.get_mut(0) {
                let row = self.row_element();
                let mut element = Element::new(row);
                tab_tree.diff(element.as_widget_mut());
                element
                    .as_widget_mut()
                    .operate(tab_tree, layout, renderer, operation);
            }
        });
    }

    fn update(
        &mut self,
        state: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let content_state = state.state.downcast_mut::<TabContentState>();
        let (slots, add) = split_layout(layout, self.labels.len());

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                let Some(pos) = cursor.position_over(layout.bounds()) else {
                    return;
                };
                if shell.is_event_captured() {
                    return;
                }

                match self.hit_test(pos, &slots, add) {
                    Some(Part::Kebab(i)) => {
                        if let (Some(on_menu), Some(kebab), Some(id)) = (
                            self.callbacks.on_menu.as_ref(),
                            slots[i].kebab(),
                            self.ids.get(i),
                        ) {
                            let bounds = kebab.bounds();
                            let scroll = scroll_offset(layout.bounds(), viewport);
                            let anchor = Point::new(
                                bounds.x + bounds.width - MENU_ANCHOR_INSET - scroll.x,
                                bounds.y - scroll.y,
                            );
                            shell.publish(on_menu(id.clone(), anchor));
                            shell.capture_event();
                        }
                    }
                    Some(Part::Tab(i)) => {
                        let tab_bounds = slots[i].tab.bounds();
                        content_state.drag = Some(DragState {
                            tab_index: i,
                            press_origin: pos,
                            current_pos: pos,
                            is_dragging: false,
                            tab_offset_x: pos.x - tab_bounds.x,
                        });
                        shell.capture_event();
                    }
                    Some(Part::Connector(i)) => {
                        if let Some(on_insert) = self.callbacks.on_insert.as_ref() {
                            shell.publish(on_insert(Some(i)));
                            shell.capture_event();
                        }
                    }
                    Some(Part::AddButton) => {
                        if let Some(on_insert) = self.callbacks.on_insert.as_ref() {
                            shell.publish(on_insert(None));
                            shell.capture_event();
                        }
                    }
                    None => {}
                }
            }

            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                let can_drag = self.callbacks.on_drag_end.is_some();
                if let Some(drag) = content_state.drag.as_mut() {
                    if let Some(pos) = cursor.position() {
                        drag.current_pos = pos;
                        if !drag.is_dragging
                            && can_drag
                            && pos.distance(drag.press_origin) >= DRAG_THRESHOLD
                        {
                            drag.is_dragging = true;
                            if let (Some(on_drag_start), Some(id)) = (
                                self.callbacks.on_drag_start.as_ref(),
                                self.ids.get(drag.tab_index),
                            ) {
                                shell.publish(on_drag_start(id.clone()));
                            }
                            log::trace!("tab drag started at index {}", drag.tab_index);
                        }
                        if drag.is_dragging {
                            shell.request_redraw();
                            shell.capture_event();
                        }
                    }
                }
            }

            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                if let Some(drag) = content_state.drag.take() {
                    let Some(id) = self.ids.get(drag.tab_index) else {
                        return;
                    };

                    if drag.is_dragging {
                        let target = cursor.position_over(layout.bounds()).and_then(|pos| {
                            closest_tab(slots.iter().map(|s| s.tab.bounds().center_x()), pos.x)
                        });
                        log::trace!("tab drag from index {} ended over {target:?}", drag.tab_index);
                        if let Some(on_drag_end) = self.callbacks.on_drag_end.as_ref() {
                            let over = target.and_then(|t| self.ids.get(t)).cloned();
                            shell.publish(on_drag_end(id.clone(), over));
                        }
                        shell.request_redraw();
                        shell.capture_event();
                    } else if slots
                        .get(drag.tab_index)
                        .is_some_and(|slot| cursor.is_over(slot.tab.bounds()))
                    {
                        shell.publish((self.callbacks.on_select)(id.clone()));
                        shell.capture_event();
                    }
                }
            }

            Event::Touch(touch::Event::FingerLost { .. }) => {
                if let Some(drag) = content_state.drag.take() {
                    if drag.is_dragging {
                        if let (Some(on_drag_end), Some(id)) =
                            (self.callbacks.on_drag_end.as_ref(), self.ids.get(drag.tab_index))
                        {
                            shell.publish(on_drag_end(id.clone(), None));
                        }
                        shell.request_redraw();
                    }
                }
            }

            _ => {}
        }

        let hovered = if content_state.dragged_index().is_some() {
            None
        } else {
            cursor
                .position_over(layout.bounds())
                .and_then(|pos| self.hit_test(pos, &slots, add))
        };
        if hovered != content_state.hovered {
            content_state.hovered = hovered;
            shell.request_redraw();
        }
    }

    fn mouse_interaction(
        &self,
        state: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let content_state = state.state.downcast_ref::<TabContentState>();
        if content_state.dragged_index().is_some() {
            return mouse::Interaction::Grabbing;
        }

        let (slots, add) = split_layout(layout, self.labels.len());
        match cursor
            .position_over(layout.bounds())
            .and_then(|pos| self.hit_test(pos, &slots, add))
        {
            Some(Part::Tab(_)) if self.callbacks.on_drag_end.is_some() => mouse::Interaction::Grab,
            Some(_) => mouse::Interaction::Pointer,
            None => mouse::Interaction::default(),
        }
    }
}

/// How far the enclosing scrollable has scrolled, derived from the viewport
/// it hands to its content.
fn scroll_offset(content_bounds: Rectangle, viewport: &Rectangle) -> Vector {
    Vector::new(
        (viewport.x - content_bounds.x).max(0.0),
        (viewport.y - content_bounds.y).max(0.0),
    )
}

/// Picks the tab whose center is closest to `cursor_x`.
///
/// Ties go to the leftmost tab.
pub(crate) fn closest_tab(centers: impl IntoIterator<Item = f32>, cursor_x: f32) -> Option<usize> {
    centers
        .into_iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (a - cursor_x).abs().total_cmp(&(b - cursor_x).abs()))
        .map(|(i, _)| i)
}

/// The display order while the tab at `from` hovers over the slot of `to`.
pub(crate) fn preview_order(len: usize, from: usize, to: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).filter(|&i| i != from).collect();
    if from < len {
        order.insert(to.min(order.len()), from);
    }
    order
}

/// The icon and text of a label, laid out side by side.
fn label_row<'a, Message, Theme, Renderer>(
    glyph: Option<char>,
    label: &'a str,
    metrics: Metrics,
    icon_font: Font,
) -> Row<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Renderer: iced::advanced::text::Renderer<Font = Font> + 'a,
    Theme: text::Catalog + 'a,
{
    let mut content = Row::new()
        .align_y(Alignment::Center)
        .spacing(metrics.label_spacing);
    if let Some(glyph) = glyph {
        content = content.push(layout_icon(
            glyph,
            metrics.icon_size + LAYOUT_SIZE_OFFSET,
            icon_font,
        ));
    }
    content.push(layout_text(
        label,
        metrics.text_size + LAYOUT_SIZE_OFFSET,
        metrics.text_font.unwrap_or_default(),
    ))
}

fn layout_icon<'a, Theme, Renderer>(icon: char, size: f32, font: Font) -> Text<'a, Theme, Renderer>
where
    Renderer: iced::advanced::text::Renderer,
    Renderer::Font: From<Font>,
    Theme: text::Catalog,
{
    Text::<Theme, Renderer>::new(icon.to_string())
        .size(size)
        .font(font)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .shaping(text::Shaping::Advanced)
        .width(Length::Shrink)
}

fn layout_text<'a, Theme, Renderer>(
    label: &'a str,
    size: f32,
    font: Font,
) -> Text<'a, Theme, Renderer>
where
    Renderer: iced::advanced::text::Renderer,
    Renderer::Font: From<Font>,
    Theme: text::Catalog,
{
    Text::<Theme, Renderer>::new(label)
        .size(size)
        .font(font)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .shaping(text::Shaping::Advanced)
        .width(Length::Shrink)
}

#[derive(Clone, Copy)]
struct Fonts {
    icon: (Font, f32),
    text: (Font, f32),
}

fn fill_label<Renderer>(
    renderer: &mut Renderer,
    content: String,
    bounds: Rectangle,
    (font, size): (Font, f32),
    color: Color,
) where
    Renderer: iced::advanced::text::Renderer<Font = Font>,
{
    use iced::advanced::widget::text::{LineHeight, Wrapping};

    renderer.fill_text(
        iced::advanced::text::Text {
            content,
            bounds: Size::new(bounds.width, bounds.height),
            size: Pixels(size),
            font,
            align_x: text::Alignment::Center,
            align_y: Vertical::Center,
            line_height: LineHeight::Relative(1.3),
            shaping: text::Shaping::Advanced,
            wrapping: Wrapping::default(),
        },
        Point::new(bounds.center_x(), bounds.center_y()),
        color,
        bounds,
    );
}

/// Draws the icon and text children of a label container.
fn draw_label_content<Renderer>(
    renderer: &mut Renderer,
    container_layout: Layout<'_>,
    icon: Option<char>,
    label: &str,
    fonts: Fonts,
    (icon_color, text_color): (Color, Color),
) where
    Renderer: iced::advanced::text::Renderer<Font = Font>,
{
    let Some(content) = container_layout.children().next() else {
        return;
    };
    let mut parts = content.children();

    if let Some(glyph) = icon {
        if let Some(icon_layout) = parts.next() {
            fill_label(renderer, glyph.to_string(), icon_layout.bounds(), fonts.icon, icon_color);
        }
    }
    if let Some(text_layout) = parts.next() {
        fill_label(renderer, label.to_owned(), text_layout.bounds(), fonts.text, text_color);
    }
}

fn draw_tab<Renderer>(
    renderer: &mut Renderer,
    label: &TabLabel,
    slot: SlotLayout<'_>,
    kebab: Option<(Layout<'_>, bool)>,
    style: &Style,
    fonts: Fonts,
    viewport: &Rectangle,
) where
    Renderer: renderer::Renderer + iced::advanced::text::Renderer<Font = Font>,
{
    let bounds = slot.tab.bounds();

    if bounds.intersects(viewport) {
        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border {
                    radius: style.tab.border_radius,
                    width: style.tab.border_width,
                    color: style.tab.border_color,
                },
                shadow: style.tab.shadow,
                ..renderer::Quad::default()
            },
            style.tab.background,
        );
    }

    if let Some(label_layout) = slot.label() {
        draw_label_content(
            renderer,
            label_layout,
            label.icon,
            &label.text,
            fonts,
            (style.tab.icon_color, style.tab.text_color),
        );
    }

    if let Some((kebab_layout, is_hovered)) = kebab {
        let kebab_bounds = kebab_layout.bounds();
        if is_hovered {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: kebab_bounds,
                    border: Border {
                        radius: style.tab.border_radius,
                        ..Border::default()
                    },
                    ..renderer::Quad::default()
                },
                style
                    .tab
                    .kebab_background
                    .unwrap_or(Background::Color(Color::TRANSPARENT)),
            );
        }
        fill_label(
            renderer,
            icon::KEBAB.to_string(),
            kebab_bounds,
            fonts.icon,
            style.tab.text_color,
        );
    }
}

fn draw_connector<Renderer>(
    renderer: &mut Renderer,
    layout: Layout<'_>,
    style: &crate::style::ConnectorStyle,
    show_button: bool,
    icon_font: Font,
    viewport: &Rectangle,
) where
    Renderer: renderer::Renderer + iced::advanced::text::Renderer<Font = Font>,
{
    let bounds = layout.bounds();
    if !bounds.intersects(viewport) {
        return;
    }

    let y = bounds.center_y().floor();
    let mut x = bounds.x;
    while x < bounds.x + bounds.width {
        let width = DASH_LENGTH.min(bounds.x + bounds.width - x);
        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x,
                    y,
                    width,
                    height: 1.0,
                },
                ..renderer::Quad::default()
            },
            Background::Color(style.line_color),
        );
        x += DASH_LENGTH + DASH_GAP;
    }

    if show_button {
        let button = Rectangle {
            x: bounds.center_x() - INSERT_BUTTON_SIZE / 2.0,
            y: bounds.center_y() - INSERT_BUTTON_SIZE / 2.0,
            width: INSERT_BUTTON_SIZE,
            height: INSERT_BUTTON_SIZE,
        };
        renderer.fill_quad(
            renderer::Quad {
                bounds: button,
                border: Border {
                    radius: (INSERT_BUTTON_SIZE / 2.0).into(),
                    width: 1.0,
                    color: style.button_border_color,
                },
                ..renderer::Quad::default()
            },
            style.button_background,
        );
        fill_label(
            renderer,
            icon::ADD.to_string(),
            button,
            (icon_font, INSERT_BUTTON_SIZE - 6.0),
            style.icon_color,
        );
    }
}

fn draw_add_button<Renderer>(
    renderer: &mut Renderer,
    layout: Layout<'_>,
    style: &Style,
    fonts: Fonts,
    viewport: &Rectangle,
) where
    Renderer: renderer::Renderer + iced::advanced::text::Renderer<Font = Font>,
{
    let bounds = layout.bounds();
    if bounds.intersects(viewport) {
        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border {
                    radius: style.tab.border_radius,
                    width: 1.0,
                    color: style.connector.button_border_color,
                },
                ..renderer::Quad::default()
            },
            style.tab.background,
        );
    }

    draw_label_content(
        renderer,
        layout,
        Some(icon::ADD),
        ADD_LABEL,
        fonts,
        (style.connector.icon_color, style.connector.icon_color),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_center_wins() {
        let centers = [10.0, 50.0, 90.0, 130.0];
        assert_eq!(closest_tab(centers, 0.0), Some(0));
        assert_eq!(closest_tab(centers, 65.0), Some(1));
        assert_eq!(closest_tab(centers, 71.0), Some(2));
        assert_eq!(closest_tab(centers, 500.0), Some(3));
    }

    #[test]
    fn ties_go_to_the_left() {
        assert_eq!(closest_tab([10.0, 30.0], 20.0), Some(0));
    }

    #[test]
    fn no_tabs_no_target() {
        assert_eq!(closest_tab(std::iter::empty(), 20.0), None);
    }

    #[test]
    fn preview_matches_collection_reorder() {
        // Details (1) dropped onto Ending (3).
        assert_eq!(preview_order(4, 1, 3), [0, 2, 3, 1]);
        assert_eq!(preview_order(4, 3, 0), [3, 0, 1, 2]);
        assert_eq!(preview_order(4, 2, 2), [0, 1, 2, 3]);
    }

    #[test]
    fn scroll_offset_follows_viewport() {
        let content = Rectangle::new(Point::new(0.0, 400.0), Size::new(900.0, 48.0));
        let viewport = Rectangle::new(Point::new(120.0, 400.0), Size::new(300.0, 48.0));
        assert_eq!(scroll_offset(content, &viewport), Vector::new(120.0, 0.0));

        let unscrolled = Rectangle::new(Point::new(0.0, 0.0), Size::new(1024.0, 768.0));
        assert_eq!(scroll_offset(content, &unscrolled), Vector::ZERO);
    }

    #[test]
    fn label_from_tab_uses_icon_glyph() {
        let tabs = crate::TabCollection::default();
        let first = tabs.first().expect("seed is not empty");
        let label = TabLabel::from(first);
        assert_eq!(label.icon(), Some(icon::HISTORY));
        assert_eq!(label.text(), "Info");
    }
}
