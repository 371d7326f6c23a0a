//! mpwt CLI entry point.
//!
//! This binary provides the `mpwt` command for opening Windows Terminal pane
//! grids and managing launch history and favourites.

use clap::Parser;
use mpwt::cli::{Cli, Command, ConfigCommand, DisplayArgs, FavouriteCommand, LaunchArgs};
use mpwt::config::Config;
use mpwt::error::Result;
use mpwt::layout::{self, parse_commands};
use mpwt::log::{LogTarget, Logger, TracingLogger};
use mpwt::store::Store;
use mpwt::{loader, wt};
use std::io::Read;
use std::path::Path;

fn main() {
    if let Err(e) = run() {
        TracingLogger.fatal(&e.to_string());
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = if cli.debug {
        Ok(LogTarget::Development)
    } else {
        loader::default_log_path().map(LogTarget::File)
    };
    mpwt::log::init_or_warn(target);

    let config_path = match cli.config {
        Some(path) => path,
        None => loader::default_config_path()?,
    };
    let logger = TracingLogger;

    match cli.command {
        Command::Launch(args) => run_launch(&config_path, args, &logger),
        Command::History {
            launch: Some(index),
            dry_run,
            ..
        } => rerun_history(index, dry_run, &logger),
        Command::History { limit, .. } => print_history(limit),
        Command::Favourite(cmd) => run_favourite(&config_path, cmd, &logger),
        Command::Config(cmd) => run_config(&config_path, cmd),
    }
}

/// Load the config and apply per-invocation flags on top.
fn effective_config(path: &Path, display: &DisplayArgs) -> Result<Config> {
    let config = display.apply(&loader::load_or_init(path)?);
    config.validate()?;
    Ok(config)
}

fn open_store() -> Result<Store> {
    Store::open(loader::default_store_path()?)
}

/// Render a launch from user commands and run it.
fn run_launch(config_path: &Path, args: LaunchArgs, logger: &dyn Logger) -> Result<()> {
    let config = effective_config(config_path, &args.display)?;

    let text = if let Some(ref file) = args.file {
        std::fs::read_to_string(file)?
    } else if !args.commands.is_empty() {
        args.commands.join("\n")
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    };
    let commands = parse_commands(&text)?;

    let request = config.request(commands);
    let rendered = layout::synthesize(&request, Some(logger))?;

    if args.dry_run {
        println!("{}", rendered);
        return Ok(());
    }

    wt::launch(&rendered)?;
    open_store()?.insert_history(&request.commands, &rendered)?;
    logger.info(&format!("launched {} panes", request.commands.len()));
    Ok(())
}

/// Print recorded launches, newest first.
fn print_history(limit: Option<usize>) -> Result<()> {
    let store = open_store()?;
    let limit = limit.unwrap_or(usize::MAX);

    for (i, entry) in store.history().take(limit).enumerate() {
        println!(
            "{:>3}. ({} panes) {}",
            i + 1,
            entry.pane_count,
            entry.cmds.join(", ")
        );
        println!(
            "     {}",
            entry.executed_at.format("%d/%m/%Y %H:%M:%S")
        );
    }
    Ok(())
}

/// Run a recorded launch again and record it as the newest entry.
fn rerun_history(index: usize, dry_run: bool, logger: &dyn Logger) -> Result<()> {
    let mut store = open_store()?;
    let entry = store.history_entry(index)?.clone();

    if dry_run {
        println!("{}", entry.wt_cmd);
        return Ok(());
    }

    wt::launch(&entry.wt_cmd)?;
    store.insert_history(&entry.cmds, &entry.wt_cmd)?;
    logger.info(&format!("re-launched history entry {}", index));
    Ok(())
}

fn run_favourite(config_path: &Path, cmd: FavouriteCommand, logger: &dyn Logger) -> Result<()> {
    let mut store = open_store()?;

    match cmd {
        FavouriteCommand::List => {
            for fav in store.favourites() {
                println!("{} ({} panes) {}", fav.name, fav.cmds.len(), fav.cmds.join(", "));
            }
        }
        FavouriteCommand::Add {
            name,
            from_history,
            commands,
            display,
        } => {
            let (cmds, wt_cmd) = match from_history {
                Some(index) => {
                    let entry = store.history_entry(index)?;
                    (entry.cmds.clone(), entry.wt_cmd.clone())
                }
                None => {
                    let config = effective_config(config_path, &display)?;
                    let request = config.request(parse_commands(&commands.join("\n"))?);
                    let rendered = layout::synthesize(&request, Some(logger))?;
                    (request.commands, rendered)
                }
            };
            store.insert_favourite(&name, &wt_cmd, &cmds)?;
            println!("Favourite saved: {}", name.trim());
        }
        FavouriteCommand::Delete { name } => {
            store.delete_favourite(&name)?;
            println!("Favourite deleted: {}", name);
        }
        FavouriteCommand::Launch { name, dry_run } => {
            let fav = store
                .favourite(&name)
                .cloned()
                .ok_or_else(|| mpwt::MpwtError::FavouriteNotFound(name.clone()))?;

            if dry_run {
                println!("{}", fav.wt_cmd);
                return Ok(());
            }

            wt::launch(&fav.wt_cmd)?;
            store.insert_history(&fav.cmds, &fav.wt_cmd)?;
            logger.info(&format!("launched favourite {}", fav.name));
        }
    }

    Ok(())
}

fn run_config(config_path: &Path, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => println!("{}", config_path.display()),
        ConfigCommand::Show => {
            loader::load_or_init(config_path)?;
            print!("{}", loader::read_raw(config_path)?);
        }
        ConfigCommand::Write => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            loader::write_raw(config_path, &buf)?;
            println!("Config saved: {}", config_path.display());
        }
    }
    Ok(())
}
