//! Style and theme for the [`TabBar`](crate::TabBar).

use crate::status::{Status, StyleFn};
use iced::{border::Radius, Background, Color, Shadow, Theme};

/// Border color of the dragged tab.
fn drag_border() -> Color {
    Color::from_rgb8(0x2F, 0x72, 0xE2)
}

/// The appearance of the outer tab bar container.
#[derive(Clone, Copy, Debug)]
pub struct BarStyle {
    /// The background of the tab bar.
    pub background: Option<Background>,
    /// The border color of the tab bar.
    pub border_color: Option<Color>,
    /// The border width of the tab bar.
    pub border_width: f32,
    /// The border radius of the tab bar.
    pub border_radius: Radius,
    /// Shadow applied to the outer bar.
    pub shadow: Shadow,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            background: Some(Background::Color(Color::WHITE)),
            border_color: None,
            border_width: 0.0,
            border_radius: Radius::default(),
            shadow: Shadow::default(),
        }
    }
}

/// The appearance of a tab, and of the "Add Page" button.
#[derive(Clone, Copy, Debug)]
pub struct TabStyle {
    /// The background of the tab.
    pub background: Background,
    /// The border color of the tab.
    pub border_color: Color,
    /// The border width of the tab.
    pub border_width: f32,
    /// The border radius of the tab.
    pub border_radius: Radius,
    /// The icon color.
    pub icon_color: Color,
    /// The text color.
    pub text_color: Color,
    /// The background of the menu trigger when hovered.
    pub kebab_background: Option<Background>,
    /// Shadow applied to each tab.
    pub shadow: Shadow,
}

impl Default for TabStyle {
    fn default() -> Self {
        Self {
            background: Background::Color(Color::from_rgb(0.96, 0.96, 0.97)),
            border_color: Color::TRANSPARENT,
            border_width: 0.0,
            border_radius: Radius::new(6.0),
            icon_color: Color::from_rgb(0.55, 0.57, 0.62),
            text_color: Color::from_rgb(0.4, 0.42, 0.46),
            kebab_background: Some(Background::Color(Color::from_rgb(0.9, 0.9, 0.92))),
            shadow: Shadow::default(),
        }
    }
}

/// The appearance of the dashed connector between two tabs.
#[derive(Clone, Copy, Debug)]
pub struct ConnectorStyle {
    /// Color of the dashes.
    pub line_color: Color,
    /// Background of the round insert button.
    pub button_background: Background,
    /// Border color of the round insert button.
    pub button_border_color: Color,
    /// Color of the `+` glyph.
    pub icon_color: Color,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            line_color: Color::from_rgb(0.75, 0.75, 0.75),
            button_background: Background::Color(Color::WHITE),
            button_border_color: Color::from_rgb(0.88, 0.89, 0.91),
            icon_color: Color::from_rgb(0.1, 0.1, 0.12),
        }
    }
}

/// Combined style used by the [`TabBar`](crate::TabBar).
#[derive(Clone, Copy, Debug, Default)]
pub struct Style {
    /// Style of the outer bar container.
    pub bar: BarStyle,
    /// Style of individual tabs.
    pub tab: TabStyle,
    /// Style of the connectors between tabs.
    pub connector: ConnectorStyle,
}

/// The Catalog of a [`TabBar`](crate::TabBar).
pub trait Catalog {
    ///Style for the trait to use.
    type Class<'a>;

    /// The default class produced by the [`Catalog`].
    fn default<'a>() -> Self::Class<'a>;

    /// The [`Style`] of a class with the given status.
    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style;
}

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self, Style>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

/// The primary theme of a [`TabBar`](crate::TabBar).
#[must_use]
pub fn primary(theme: &Theme, status: Status) -> Style {
    let mut base = Style::default();
    let palette = theme.extended_palette();

    base.bar.background = Some(Background::Color(palette.background.base.color));

    match status {
        Status::Inactive => {}
        Status::Hovered => {
            base.tab.background = Background::Color(palette.background.weak.color);
        }
        Status::Active => {
            base.tab.background = Background::Color(palette.background.base.color);
            base.tab.border_color = palette.background.strong.color;
            base.tab.border_width = 1.0;
            base.tab.icon_color = palette.primary.base.color;
            base.tab.text_color = palette.background.base.text;
        }
        Status::Dragging => {
            base.tab.background = Background::Color(palette.primary.weak.color);
            base.tab.border_color = drag_border();
            base.tab.border_width = 1.0;
            base.tab.icon_color = palette.primary.base.color;
            base.tab.text_color = palette.primary.weak.text;
        }
    }

    base
}

/// The dark theme of a [`TabBar`](crate::TabBar).
#[must_use]
pub fn dark(_theme: &Theme, status: Status) -> Style {
    let mut base = Style::default();
    base.bar.background = Some(Background::Color([0.08, 0.08, 0.08].into()));
    base.tab.background = Background::Color([0.13, 0.13, 0.13].into());
    base.tab.icon_color = [0.7, 0.7, 0.7].into();
    base.tab.text_color = [0.8, 0.8, 0.8].into();
    base.tab.kebab_background = Some(Background::Color([0.25, 0.25, 0.25].into()));
    base.connector.line_color = [0.35, 0.35, 0.35].into();
    base.connector.button_background = Background::Color([0.15, 0.15, 0.15].into());
    base.connector.button_border_color = [0.3, 0.3, 0.3].into();
    base.connector.icon_color = Color::WHITE;

    match status {
        Status::Inactive => {}
        Status::Hovered => {
            base.tab.background = Background::Color([0.18, 0.18, 0.18].into());
        }
        Status::Active => {
            base.tab.background = Background::Color([0.1, 0.1, 0.1].into());
            base.tab.border_color = [0.3, 0.3, 0.3].into();
            base.tab.border_width = 1.0;
            base.tab.icon_color = Color::WHITE;
            base.tab.text_color = Color::WHITE;
        }
        Status::Dragging => {
            base.tab.background = Background::Color([0.1, 0.1, 0.1].into());
            base.tab.border_color = drag_border();
            base.tab.border_width = 1.0;
            base.tab.icon_color = Color::WHITE;
            base.tab.text_color = Color::WHITE;
        }
    }

    base
}
