use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use flexi_logger::{Logger, LoggerHandle};
use rolo::api::Assistant;
use rolo::error::{Result, RoloError};
use rolo::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;

mod args;
mod repl;

use args::Cli;
use repl::Reply;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.verbose);

    let store = FileStore::new(resolve_data_dir(&cli));
    log::debug!("data directory: {}", store.data_dir().display());
    let mut assistant = Assistant::open(store)?;

    println!("{}", "Welcome to the assistant bot!".bold());
    loop {
        print!("Enter a command: ");
        io::stdout().flush().map_err(RoloError::Io)?;

        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input).map_err(RoloError::Io)?;
        if bytes == 0 {
            // EOF behaves like `exit`.
            println!();
            println!("Good bye!");
            break;
        }

        let tokens = repl::tokenize(&input);
        let Some((command, args)) = tokens.split_first() else {
            continue;
        };

        match repl::respond(&mut assistant, command, args) {
            Ok(Reply::Message(text)) => println!("{}", text),
            Ok(Reply::Farewell) => {
                println!("Good bye!");
                break;
            }
            Err(e) => println!("{}", e.to_string().red()),
        }
    }

    Ok(())
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs =
                ProjectDirs::from("com", "rolo", "rolo").expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    }
}

fn init_logging(verbose: bool) -> Option<LoggerHandle> {
    let spec = if verbose { "debug" } else { "warn" };
    Logger::try_with_env_or_str(spec).ok()?.start().ok()
}
