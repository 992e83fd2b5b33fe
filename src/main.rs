use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use pulseboard::cli::CliArgs;
use pulseboard::config::AppConfig;
use pulseboard::model::{AppModel, CalendarData};
use pulseboard::runtime::App;
use pulseboard::theme::{self, Theme};

fn main() -> Result<()> {
    pulseboard::tracing::init();

    let args = CliArgs::parse();
    let config = AppConfig::load();

    let theme_id = args.theme.as_deref().unwrap_or(&config.theme);
    let theme = theme::load_theme(theme_id).unwrap_or_else(|e| {
        tracing::warn!("Failed to load theme '{}': {}", theme_id, e);
        Theme::default()
    });

    let data = match &args.fixture {
        Some(path) => CalendarData::from_file(path)?,
        None => CalendarData::demo(),
    };

    let mut model = AppModel::new(config, theme, data);
    if args.open || model.config.open_on_start {
        model.overlay.open();
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model);
    event_loop.run_app(&mut app)?;

    Ok(())
}
