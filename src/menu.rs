//! Floating action menu anchored to a window point.
//!
//! The menu is drawn on top of the application together with a full-window
//! dismiss layer, so a press anywhere outside the panel closes it.

use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, column, container, mouse_area, row, text, Space, Stack};
use iced::{
    alignment, Background, Border, Color, Element, Length, Padding, Point, Shadow, Size, Theme,
    Vector,
};
use iced_fonts::CODICON_FONT;

const MENU_WIDTH: f32 = 160.0;
const MENU_ITEM_HEIGHT: f32 = 30.0;
const MENU_ITEM_FONT_SIZE: f32 = 12.0;
const MENU_ITEM_HORIZONTAL_PADDING: f32 = 8.0;
const MENU_ICON_SPACING: f32 = 8.0;
const MENU_CONTAINER_PADDING: f32 = 4.0;
const MENU_MARGIN: f32 = 4.0;

/// How a [`MenuEntry`] is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryStyle {
    /// Regular entry.
    #[default]
    Normal,
    /// Destructive entry, painted in the theme's danger color.
    Danger,
}

/// One row of the menu.
#[derive(Debug, Clone)]
pub struct MenuEntry<Message> {
    /// Text of the row.
    pub label: String,
    /// Optional codicon glyph shown before the label.
    pub icon: Option<char>,
    /// Message published when the row is pressed.
    pub on_press: Message,
    /// Paint style of the row.
    pub style: EntryStyle,
}

impl<Message> MenuEntry<Message> {
    /// Creates a normal entry.
    pub fn new(label: impl Into<String>, on_press: Message) -> Self {
        Self {
            label: label.into(),
            icon: None,
            on_press,
            style: EntryStyle::Normal,
        }
    }

    /// Sets the glyph shown before the label.
    #[must_use]
    pub fn icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the paint style.
    #[must_use]
    pub fn style(mut self, style: EntryStyle) -> Self {
        self.style = style;
        self
    }
}

/// Total menu height for a given number of entries.
fn menu_height(count: usize) -> f32 {
    count as f32 * MENU_ITEM_HEIGHT + MENU_CONTAINER_PADDING * 2.0
}

/// Top-left corner of a menu with `count` entries opened from `anchor`.
///
/// The bottom edge of the menu sits on the anchor and the left edge starts
/// at it. The result is kept inside `area` when the menu fits.
#[must_use]
pub fn placement(anchor: Point, count: usize, area: Size) -> Point {
    let height = menu_height(count);

    let max_x = (area.width - MENU_WIDTH - MENU_MARGIN).max(MENU_MARGIN);
    let max_y = (area.height - height - MENU_MARGIN).max(MENU_MARGIN);

    Point::new(
        anchor.x.clamp(MENU_MARGIN, max_x),
        (anchor.y - height).clamp(MENU_MARGIN, max_y),
    )
}

/// Renders the menu over a window of size `area`.
///
/// `on_dismiss` is published when the user presses outside the panel.
pub fn view<'a, Message>(
    entries: Vec<MenuEntry<Message>>,
    anchor: Point,
    area: Size,
    on_dismiss: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let position = placement(anchor, entries.len(), area);
    let items = entries.into_iter().map(entry_element);

    let panel = container(column(items).spacing(0))
        .width(Length::Fixed(MENU_WIDTH))
        .padding(MENU_CONTAINER_PADDING)
        .style(panel_style);

    let positioned = container(panel).padding(Padding {
        top: position.y,
        right: 0.0,
        bottom: 0.0,
        left: position.x,
    });

    let dismiss_layer = mouse_area(container(Space::new()).width(Length::Fill).height(Length::Fill))
        .on_press(on_dismiss);

    Stack::with_children(vec![dismiss_layer.into(), positioned.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn entry_element<'a, Message>(entry: MenuEntry<Message>) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let glyph = text(entry.icon.map(String::from).unwrap_or_default())
        .font(CODICON_FONT)
        .size(MENU_ITEM_FONT_SIZE + 2.0)
        .width(Length::Fixed(MENU_ITEM_FONT_SIZE + 2.0));
    let label = text(entry.label)
        .size(MENU_ITEM_FONT_SIZE)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center);

    let style = entry.style;
    button(
        row![glyph, label]
            .spacing(MENU_ICON_SPACING)
            .align_y(alignment::Vertical::Center),
    )
    .padding([0.0, MENU_ITEM_HORIZONTAL_PADDING])
    .width(Length::Fill)
    .height(Length::Fixed(MENU_ITEM_HEIGHT))
    .style(move |theme, status| entry_button_style(theme, status, style))
    .on_press(entry.on_press)
    .into()
}

fn entry_button_style(theme: &Theme, status: ButtonStatus, style: EntryStyle) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => Some(palette.background.weak.color.into()),
        _ => None,
    };

    let text_color = match style {
        EntryStyle::Normal => palette.background.base.text,
        EntryStyle::Danger => palette.danger.base.color,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: 2.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

fn panel_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.2,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_room_above_when_placing_then_bottom_touches_anchor() {
        let area = Size::new(800.0, 600.0);
        let anchor = Point::new(200.0, 550.0);

        let position = placement(anchor, 5, area);

        assert_eq!(position.x, anchor.x);
        assert!((position.y + menu_height(5) - anchor.y).abs() < 0.1);
    }

    #[test]
    fn given_anchor_near_right_edge_when_placing_then_stays_inside() {
        let area = Size::new(500.0, 400.0);
        let position = placement(Point::new(490.0, 380.0), 4, area);

        assert!(position.x + MENU_WIDTH <= area.width - MENU_MARGIN + 0.1);
        assert!(position.x >= MENU_MARGIN);
    }

    #[test]
    fn given_anchor_near_top_when_placing_then_clamps_to_margin() {
        let area = Size::new(800.0, 600.0);
        let position = placement(Point::new(100.0, 20.0), 5, area);

        assert_eq!(position.y, MENU_MARGIN);
    }

    #[test]
    fn given_unknown_area_when_placing_then_only_lifts_menu() {
        let position = placement(Point::new(300.0, 500.0), 2, Size::INFINITE);

        assert_eq!(position, Point::new(300.0, 500.0 - menu_height(2)));
    }

    #[test]
    fn given_danger_entry_when_styling_then_uses_danger_color() {
        let theme = Theme::Light;
        let palette = theme.extended_palette();

        let style = entry_button_style(&theme, ButtonStatus::Active, EntryStyle::Danger);
        assert_eq!(style.text_color, palette.danger.base.color);
        assert_eq!(style.background, None);

        let hovered = entry_button_style(&theme, ButtonStatus::Hovered, EntryStyle::Normal);
        assert_eq!(hovered.background, Some(Background::Color(palette.background.weak.color)));
    }
}
