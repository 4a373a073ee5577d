pub mod kitchen;
pub mod user;

use pantryplan::config::Config;
use pantryplan::presenter::{TerminalPresenter, View};
use pantryplan_kitchen::{JsonFileStore, Kitchen};
use pantryplan_user::{AccountBook, kitchen_path};

/// Kitchen of the logged in user, or the shared one.
pub fn open_kitchen(config: &Config) -> Kitchen<JsonFileStore> {
    let accounts = AccountBook::open(config.accounts_path());
    let path = kitchen_path(&config.storage.data_dir, accounts.current_user());

    tracing::debug!(path = %path.display(), user = ?accounts.current_user(), "opening kitchen");

    Kitchen::open(JsonFileStore::new(path), config.kitchen_settings())
}

pub fn render(kitchen: &Kitchen<JsonFileStore>, view: View) -> pantryplan_shared::Result<()> {
    let mut presenter = TerminalPresenter::new(std::io::stdout().lock(), view);
    kitchen.present(&mut presenter)
}
