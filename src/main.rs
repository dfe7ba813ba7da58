//! Shopping list
//!
//! Add items to categories, tick them off, search them, and tune the look.
//! Everything is kept in a local JSON store under the platform config
//! directory (or `SHOPPING_LIST_STORE_DIR`).

use shopping_list_store::{AppName, FileStore};
use tracing_subscriber::EnvFilter;

mod app;
mod style;

use app::App;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app_name = AppName::new("hu", "gavaller", "Bevasarlolista");
    let store = FileStore::new(&app_name);
    tracing::info!(path = %store.group_path().display(), "using store");

    iced::application(move || App::new(store.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .run()
}
