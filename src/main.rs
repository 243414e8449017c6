//! Binary entry point: resolve where data lives, start file logging, bring up
//! the database, load the camp list and hand control to the TUI.
use anyhow::Context;
use blood_donation_manager::logging::init_tracing;
use blood_donation_manager::{run_app, App, Config, Store};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::from_home()?;
    let _log_guard = init_tracing(&config.log_dir())?;
    info!(data_dir = %config.data_dir().display(), "starting blood donation manager");

    let store = Store::open(config.db_path()).context("failed to prepare database location")?;
    store.initialize().context("failed to initialize database")?;
    let camps = store.list_camps().context("failed to load camps")?;

    let mut app = App::new(store, camps);
    run_app(&mut app)
}
