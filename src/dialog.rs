//! Modal dialog host.
//!
//! A [`Dialog`] renders a card centered over a dimmed backdrop. Pressing the
//! backdrop or the close button publishes the dialog's close message; Escape
//! is routed by [`BottomNavigation::subscription`](crate::BottomNavigation::subscription).

use iced::widget::{button, center, column, container, mouse_area, opaque, row, text, Space, Stack};
use iced::{alignment, Background, Border, Color, Element, Length, Shadow, Theme, Vector};

const DIALOG_MAX_WIDTH: f32 = 448.0;
const DIALOG_PADDING: f32 = 24.0;
const DIALOG_SPACING: f32 = 12.0;
const CLOSE_SIZE: f32 = 22.0;
const BACKDROP_OPACITY: f32 = 0.2;

/// A modal card with an optional title and footer.
pub struct Dialog<'a, Message> {
    on_close: Message,
    title: Option<Element<'a, Message>>,
    footer: Option<Element<'a, Message>>,
    max_width: f32,
}

impl<'a, Message> Dialog<'a, Message>
where
    Message: Clone + 'a,
{
    /// Creates a dialog that publishes `on_close` when dismissed.
    pub fn new(on_close: Message) -> Self {
        Self {
            on_close,
            title: None,
            footer: None,
            max_width: DIALOG_MAX_WIDTH,
        }
    }

    /// Sets the header shown next to the close button.
    #[must_use]
    pub fn title(mut self, title: impl Into<Element<'a, Message>>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the row shown under the content.
    #[must_use]
    pub fn footer(mut self, footer: impl Into<Element<'a, Message>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Sets the maximum width of the card.
    #[must_use]
    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    /// Wraps `content` in the card and the backdrop.
    pub fn view(self, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
        let close = button(text("\u{00d7}").size(CLOSE_SIZE).line_height(1.0))
            .padding(0)
            .style(button::text)
            .on_press(self.on_close.clone());

        let header = row![
            self.title
                .unwrap_or_else(|| Space::new().width(Length::Shrink).into()),
            Space::new().width(Length::Fill),
            close,
        ]
        .align_y(alignment::Vertical::Center);

        let content: Element<'a, Message> = content.into();
        let mut body = column![header, content].spacing(DIALOG_SPACING);
        if let Some(footer) = self.footer {
            body = body.push(footer);
        }

        let card = container(body)
            .padding(DIALOG_PADDING)
            .width(Length::Fill)
            .max_width(self.max_width)
            .style(card_style);

        opaque(
            mouse_area(center(opaque(card)).style(backdrop_style)).on_press(self.on_close),
        )
    }
}

/// Stacks `overlay` on top of `base`.
///
/// Without an overlay only `base` is rendered.
pub fn mount<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    overlay: Option<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    match overlay {
        Some(overlay) => Stack::with_children(vec![base.into(), overlay])
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => base.into(),
    }
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: BACKDROP_OPACITY,
            ..Color::BLACK
        })),
        ..container::Style::default()
    }
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color {
                a: 0.25,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_dims_the_page() {
        let style = backdrop_style(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(Color {
                a: BACKDROP_OPACITY,
                ..Color::BLACK
            }))
        );
    }

    #[test]
    fn card_follows_theme_background() {
        let theme = Theme::Dark;
        let style = card_style(&theme);
        assert_eq!(
            style.background,
            Some(Background::Color(theme.extended_palette().background.base.color))
        );
    }
}
