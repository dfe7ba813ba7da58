//! Application state and message handling

use std::collections::HashMap;

use iced::{Task, Theme};
use shopping_list_core::{Category, CategoryId, Icon, ItemId, ListResult, ShoppingList};
use shopping_list_prefs::{HeaderColor, Preferences};
use shopping_list_store::FileStore;

mod view;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    List,
    Settings,
}

/// Application state
pub struct App {
    store: FileStore,
    list: ShoppingList,
    prefs: Preferences,
    screen: Screen,
    selected: CategoryId,

    // Input fields
    search: String,
    draft: String,
    editing: Option<ItemId>,
    /// Category names being typed, applied on submit or when leaving the field
    category_drafts: HashMap<CategoryId, String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    // List screen
    SearchChanged(String),
    CategorySelected(CategoryId),
    DraftChanged(String),
    SubmitDraft,
    ToggleDone(ItemId),
    EditItem(ItemId),
    CancelEdit,
    RemoveItem(ItemId),
    OpenSettings,

    // Settings screen
    CloseSettings,
    DarkModeToggled(bool),
    HeaderColorSelected(HeaderColor),
    CategoryNameChanged(CategoryId, String),
    CategoryNameSubmitted(CategoryId),
    CategoryIconSelected(CategoryId, Icon),
    RemoveCategory(CategoryId),
    AddCategory,
    ClearItems,
}

/// Log a discarded change; the user never sees these
fn succeeded<T>(action: &'static str, result: ListResult<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(action, error = %err, "change discarded");
            false
        }
    }
}

impl App {
    pub fn new(store: FileStore) -> (App, Task<Message>) {
        let list = ShoppingList::load(&store);
        let prefs = Preferences::load(&store);
        let selected = list.categories().first().id();

        tracing::info!(
            items = list.items().len(),
            categories = list.categories().effective_categories().len(),
            "loaded shopping list"
        );

        let app = App {
            store,
            list,
            prefs,
            screen: Screen::List,
            selected,
            search: String::new(),
            draft: String::new(),
            editing: None,
            category_drafts: HashMap::new(),
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        match self.screen {
            Screen::List => "Shopping List".to_string(),
            Screen::Settings => "Shopping List - Settings".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        if self.prefs.dark_mode() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The selected category, or the first one if it has gone away
    fn selected_category(&self) -> Category {
        self.list
            .categories()
            .find(self.selected)
            .unwrap_or_else(|| self.list.categories().first())
    }

    fn ensure_selection(&mut self) {
        self.selected = self.selected_category().id();
    }

    fn save_items(&self) {
        if let Err(err) = self.list.items().save(&self.store) {
            tracing::warn!(error = %err, "could not save items");
        }
    }

    fn save_categories(&self) {
        if let Err(err) = self.list.categories().save(&self.store) {
            tracing::warn!(error = %err, "could not save categories");
        }
    }

    fn stop_editing(&mut self) {
        self.editing = None;
        self.draft.clear();
    }

    /// Apply a typed category name, carrying its items along
    ///
    /// A refused name is dropped and the field shows the stored name again.
    fn commit_category_name(&mut self, id: CategoryId) {
        let Some(name) = self.category_drafts.remove(&id) else {
            return;
        };

        match self.list.rename_category(id, &name) {
            Ok(moved) => {
                self.save_categories();
                if moved > 0 {
                    self.save_items();
                }
            }
            Err(err) => tracing::debug!(error = %err, "rename discarded"),
        }
    }

    /// Apply every pending category name except the one for `keep`
    fn commit_category_names(&mut self, keep: Option<CategoryId>) {
        let pending: Vec<CategoryId> = self
            .category_drafts
            .keys()
            .copied()
            .filter(|id| Some(*id) != keep)
            .collect();
        for id in pending {
            self.commit_category_name(id);
        }
    }

    /// Add the draft as a new item, or apply it to the item being edited
    fn submit_draft(&mut self) {
        let category = self.selected_category();

        let changed = match self.editing {
            Some(id) => {
                succeeded("rename item", self.list.items_mut().rename(id, &self.draft))
                    && succeeded(
                        "move item",
                        self.list.items_mut().move_to(id, category.name()),
                    )
            }
            None => succeeded(
                "add item",
                self.list.items_mut().add(&self.draft, category.name()),
            ),
        };

        if changed {
            self.stop_editing();
            self.save_items();
        }
    }

    /// Put an item into the input field and select its category
    fn edit_item(&mut self, id: ItemId) {
        let Some(item) = self.list.items().get(id) else {
            return;
        };

        self.draft = item.name().to_string();
        self.editing = Some(id);

        let owner = self
            .list
            .categories()
            .effective_categories()
            .iter()
            .find(|category| category.name() == item.category_name())
            .map(Category::id);
        if let Some(owner) = owner {
            self.selected = owner;
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(value) => {
                self.search = value;
            }

            Message::CategorySelected(id) => {
                self.selected = id;
            }

            Message::DraftChanged(value) => {
                self.draft = value;
            }

            Message::SubmitDraft => self.submit_draft(),

            Message::ToggleDone(id) => {
                if succeeded("toggle item", self.list.items_mut().toggle_done(id)) {
                    self.save_items();
                }
            }

            Message::EditItem(id) => self.edit_item(id),

            Message::CancelEdit => self.stop_editing(),

            Message::RemoveItem(id) => {
                if succeeded("remove item", self.list.items_mut().remove(id)) {
                    if self.editing == Some(id) {
                        self.stop_editing();
                    }
                    self.save_items();
                }
            }

            Message::OpenSettings => {
                self.screen = Screen::Settings;
            }

            Message::CloseSettings => {
                self.commit_category_names(None);
                self.screen = Screen::List;
                self.ensure_selection();
            }

            Message::DarkModeToggled(dark_mode) => {
                if let Err(err) = self.prefs.set_dark_mode(&self.store, dark_mode) {
                    tracing::warn!(error = %err, "could not save dark mode");
                }
            }

            Message::HeaderColorSelected(color) => {
                if let Err(err) = self.prefs.set_header_color(&self.store, color) {
                    tracing::warn!(error = %err, "could not save header color");
                }
            }

            Message::CategoryNameChanged(id, name) => {
                self.commit_category_names(Some(id));
                self.category_drafts.insert(id, name);
            }

            Message::CategoryNameSubmitted(id) => self.commit_category_name(id),

            Message::CategoryIconSelected(id, icon) => {
                if succeeded("change icon", self.list.set_category_icon(id, icon)) {
                    self.save_categories();
                }
            }

            Message::RemoveCategory(id) => {
                self.category_drafts.remove(&id);
                if succeeded("remove category", self.list.remove_category(id)) {
                    self.save_categories();
                    self.ensure_selection();
                }
            }

            Message::AddCategory => {
                self.list.add_category("", Icon::Question);
                self.save_categories();
            }

            Message::ClearItems => {
                let removed = self.list.items_mut().clear();
                tracing::info!(removed, "deleted all items");
                self.stop_editing();
                self.save_items();
            }
        }

        Task::none()
    }
}
