use directories::ProjectDirs;
use minitodo::api::TodoApi;
use minitodo::config::TodoConfig;
use minitodo::store::fs::FileStore;
use tracing::{error, info, warn};

mod cli;

use cli::terminal::{ConsoleScreen, Screen};

fn main() {
    let dirs = ProjectDirs::from("com", "minitodo", "minitodo");
    let config = match &dirs {
        Some(dirs) => TodoConfig::load_or_default(dirs.config_dir()),
        None => TodoConfig::default(),
    };
    cli::logging::init(&config, dirs.as_ref().map(|d| d.data_local_dir()));
    info!(data_file = %config.data_file.display(), "starting");

    let mut api = TodoApi::new(FileStore::new(&config.data_file), &config);
    api.load();

    let mut screen = ConsoleScreen::new();
    if let Err(e) = cli::run(&mut api, &mut screen, config.due_soon_days) {
        error!(error = %e, "terminal failed, saving before exit");
        api.save();
    }
    if let Err(e) = screen.release() {
        warn!(error = %e, "could not restore the terminal");
    }
}
