//! Widgets for the list and settings screens

use chrono::Local;
use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Theme};
use shopping_list_core::{Category, Icon, Item};
use shopping_list_prefs::HeaderColor;

use super::{App, Message, Screen};
use crate::style;

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = match self.screen {
            Screen::List => self.list_screen(),
            Screen::Settings => self.settings_screen(),
        };

        container(content)
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Title bar tinted with the header color preference
    fn header<'a>(&self, title: &str, action: Element<'a, Message>) -> Element<'a, Message> {
        container(
            row![text(title.to_string()).size(28).width(Length::Fill), action]
                .spacing(10)
                .align_y(Alignment::Center),
        )
        .padding(10)
        .width(Length::Fill)
        .style(style::header(self.prefs.header_color()))
        .into()
    }

    fn list_screen(&self) -> Element<'_, Message> {
        let selected = self.selected_category();

        let header = self.header(
            "Shopping List",
            button(text("⚙")).on_press(Message::OpenSettings).into(),
        );

        let search = text_input("🔍 Search...", &self.search)
            .on_input(Message::SearchChanged)
            .padding(8);

        let categories = row(self
            .list
            .categories()
            .effective_categories()
            .iter()
            .map(|category| category_chip(category, category.id() == selected.id())))
        .spacing(10);

        let editing = self.editing.is_some();
        let placeholder = if editing { "Edit item" } else { "New item" };
        let mut draft = row![
            text_input(placeholder, &self.draft)
                .on_input(Message::DraftChanged)
                .on_submit(Message::SubmitDraft)
                .padding(8),
            button(text(if editing { "💾" } else { "➕" })).on_press(Message::SubmitDraft),
        ]
        .spacing(10)
        .align_y(Alignment::Center);
        if editing {
            draft = draft.push(
                button(text("✕"))
                    .on_press(Message::CancelEdit)
                    .style(button::secondary),
            );
        }

        let items: Vec<Element<'_, Message>> = self
            .list
            .items()
            .filter(selected.name(), &self.search)
            .map(|item| item_row(item, self.editing == Some(item.id())))
            .collect();

        let items: Element<'_, Message> = if items.is_empty() {
            text("Nothing here yet").style(text::secondary).into()
        } else {
            scrollable(column(items).spacing(6))
                .height(Length::Fill)
                .into()
        };

        column![header, search, categories, draft, items]
            .spacing(16)
            .into()
    }

    fn settings_screen(&self) -> Element<'_, Message> {
        let header = self.header(
            "Settings",
            button(text("Back")).on_press(Message::CloseSettings).into(),
        );

        let dark = self.prefs.dark_mode();
        let dark_style: ButtonStyle = if dark {
            button::primary
        } else {
            button::secondary
        };
        let appearance = column![
            text("Appearance").size(20),
            row![
                text("Dark mode").width(Length::Fill),
                button(text(if dark { "On" } else { "Off" }))
                    .on_press(Message::DarkModeToggled(!dark))
                    .style(dark_style),
            ]
            .align_y(Alignment::Center),
            row![
                text("Header color").width(Length::Fill),
                pick_list(
                    HeaderColor::ALL,
                    Some(self.prefs.header_color()),
                    Message::HeaderColorSelected,
                ),
            ]
            .align_y(Alignment::Center),
        ]
        .spacing(10);

        let editors: Vec<Element<'_, Message>> = self
            .list
            .categories()
            .effective_categories()
            .iter()
            .map(|category| self.category_editor(category))
            .collect();

        let categories = column![
            text("Categories").size(20),
            column(editors).spacing(8),
            button(text("➕ New category"))
                .on_press(Message::AddCategory)
                .style(button::secondary),
        ]
        .spacing(10);

        let danger = button(text("Delete all items"))
            .on_press(Message::ClearItems)
            .style(button::danger);

        column![
            header,
            scrollable(column![appearance, categories, danger].spacing(24)).height(Length::Fill),
        ]
        .spacing(16)
        .into()
    }

    /// Name, icon and remove controls for one category
    ///
    /// Removal is disabled while items still belong to the category. A typed
    /// name shows as-is until it is submitted.
    fn category_editor<'a>(&self, category: &Category) -> Element<'a, Message> {
        let id = category.id();
        let blocking = self.list.blocking_items(id);

        let usage = if blocking > 0 {
            text(format!("{blocking} item(s)")).size(12).style(text::secondary)
        } else {
            text("")
        };

        let name = self
            .category_drafts
            .get(&id)
            .map_or(category.name(), String::as_str);

        row![
            text_input("Category name", name)
                .on_input(move |name| Message::CategoryNameChanged(id, name))
                .on_submit(Message::CategoryNameSubmitted(id))
                .padding(6),
            pick_list(Icon::ALL, Some(category.icon()), move |icon| {
                Message::CategoryIconSelected(id, icon)
            }),
            usage,
            button(text("−"))
                .on_press_maybe((blocking == 0).then_some(Message::RemoveCategory(id)))
                .style(button::danger),
        ]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
    }
}

fn category_chip<'a>(category: &Category, selected: bool) -> Element<'a, Message> {
    let style: ButtonStyle = if selected {
        button::primary
    } else {
        button::secondary
    };

    button(text(format!(
        "{} {}",
        category.icon().glyph(),
        category.name()
    )))
    .on_press(Message::CategorySelected(category.id()))
    .style(style)
    .into()
}

fn item_row<'a>(item: &Item, editing: bool) -> Element<'a, Message> {
    let (mark, toggle_style): (&str, ButtonStyle) = if item.is_done() {
        ("✓", button::success)
    } else {
        ("○", button::secondary)
    };

    let name = text(item.name().to_string());
    let name = if item.is_done() {
        name.style(text::secondary)
    } else {
        name
    };

    let created = text(
        item.created_at()
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string(),
    )
    .size(12)
    .style(text::secondary);

    let edit_style: ButtonStyle = if editing {
        button::primary
    } else {
        button::text
    };

    row![
        button(text(mark))
            .on_press(Message::ToggleDone(item.id()))
            .style(toggle_style),
        column![name, created].spacing(2).width(Length::Fill),
        button(text("✎"))
            .on_press(Message::EditItem(item.id()))
            .style(edit_style),
        button(text("🗑"))
            .on_press(Message::RemoveItem(item.id()))
            .style(button::danger),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
