//! A form builder page shell: the current page fills the window and the
//! reorderable page tabs sit at the bottom.

use env_logger::Env;
use iced::widget::{center, column, container, text};
use iced::{clipboard, Background, Color, Element, Length, Subscription, Task, Theme};

use iced_fonts::CODICON_FONT_BYTES;
use iced_page_tabs::{dialog, BottomNavigation, Intent, NavigationEvent, TabCollection, TabId};

const BAR_HEIGHT: f32 = 52.0;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(FormPages::default, FormPages::update, FormPages::view)
        .title("Form pages")
        .subscription(FormPages::subscription)
        .font(CODICON_FONT_BYTES)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Navigation(NavigationEvent),
}

#[derive(Debug)]
struct FormPages {
    tabs: TabCollection,
    active: Option<TabId>,
    navigation: BottomNavigation,
}

impl Default for FormPages {
    fn default() -> Self {
        let tabs = TabCollection::default();
        let active = tabs.first().map(|tab| tab.id());
        Self {
            tabs,
            active,
            navigation: BottomNavigation::new(),
        }
    }
}

impl FormPages {
    fn update(&mut self, message: Message) -> Task<Message> {
        let Message::Navigation(event) = message;
        match self.navigation.update(&self.tabs, event) {
            Some(intent) => self.apply(intent),
            None => Task::none(),
        }
    }

    fn apply(&mut self, intent: Intent) -> Task<Message> {
        match intent {
            Intent::Select(id) => self.active = Some(id),
            Intent::Reorder { dragged, target } => {
                self.tabs = self.tabs.reorder(dragged, target);
            }
            Intent::Insert { name, icon, after } => match self.tabs.insert(&name, icon, after) {
                Ok(tabs) => self.tabs = tabs,
                Err(error) => log::warn!("could not add page: {error}"),
            },
            Intent::MoveToFront(id) => self.tabs = self.tabs.move_to_front(id),
            Intent::Duplicate(id) => match self.tabs.duplicate(id) {
                Ok(tabs) => self.tabs = tabs,
                Err(error) => log::warn!("could not duplicate page: {error}"),
            },
            Intent::Remove(id) => self.remove(id),
            Intent::Rename(id) => {
                log::info!("rename requested for page {id}");
            }
            Intent::Copy(id) => {
                if let Some(tab) = self.tabs.get(id) {
                    return clipboard::write(tab.name().to_owned());
                }
            }
        }
        Task::none()
    }

    fn remove(&mut self, id: TabId) {
        let previous = self
            .tabs
            .position(id)
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| self.tabs.as_slice().get(index))
            .map(|tab| tab.id());

        match self.tabs.remove(id) {
            Ok(tabs) => self.tabs = tabs,
            Err(error) => {
                log::warn!("could not delete page: {error}");
                return;
            }
        }

        if self.active == Some(id) {
            self.active = previous.or_else(|| self.tabs.first().map(|tab| tab.id()));
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let title = self
            .active
            .and_then(|id| self.tabs.get(id))
            .map(|tab| tab.name())
            .unwrap_or_default();

        let page = center(text(title).size(18).color(Color::WHITE))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_: &Theme| container::Style {
                background: Some(Background::Color(page_background())),
                ..container::Style::default()
            });

        let bar: Element<'_, NavigationEvent> = self
            .navigation
            .bar(&self.tabs, self.active)
            .height(BAR_HEIGHT)
            .into();

        let shell = column![page, bar];
        dialog::mount(shell, self.navigation.overlay()).map(Message::Navigation)
    }

    fn subscription(&self) -> Subscription<Message> {
        self.navigation.subscription().map(Message::Navigation)
    }
}

fn page_background() -> Color {
    Color::from_rgb8(0x0a, 0x66, 0xc2)
}
