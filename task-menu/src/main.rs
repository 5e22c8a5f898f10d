use anyhow::Context;
use clap::{ArgAction, Parser};
use log::info;
use std::path::PathBuf;
use task_menu::TaskRepository;
use task_menu::config::Config;
use task_menu::logging;
use task_menu::menu::MenuController;
use task_menu::terminal::Console;

/// Keep a to-do list for the length of one session, through text menus
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// TOML file with logging and field length settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Log more to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = Config::load(args.config.as_deref()).context("cannot load configuration")?;
    let level = logging::level_filter(&config.logging.level, args.verbose)?;
    let _log4rs_handle = logging::init(level).context("cannot set up logging")?;
    info!("Starting task menu");

    let mut tasks = TaskRepository::with_limits(config.limits);
    {
        let mut controller = MenuController::new(&mut tasks, Console::stdio());
        controller.run().context("menu stopped unexpectedly")?;
    }

    info!("Discarding {} task(s) on exit", tasks.len());
    Ok(())
}
