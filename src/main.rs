mod app;
mod cli;
mod converter;
mod converter_screen;
mod keybinds;
mod logging;
mod main_screen_widget;
mod mode;
mod session;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use logging::LogTarget;
use mode::ConversionMode;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Convert { value }) => {
            let target = cli.log_file.as_deref().map_or(LogTarget::Stderr, LogTarget::File);
            logging::init(target)?;
            println!("{}", cli::run_convert(cli.mode, &value)?);
            Ok(())
        }
        None => {
            if let Some(path) = cli.log_file.as_deref() {
                logging::init(LogTarget::File(path))?;
            }
            let mut terminal = ratatui::init();
            let result = app::run_app(&mut terminal, cli.mode.map(ConversionMode::from));
            ratatui::restore();
            result
        }
    }
}
