use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo", version)]
#[command(about = "A file-backed address book and notebook for the command line", long_about = None)]
pub struct Cli {
    /// Directory holding addressbook.json, notes.json, and config.json
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose (debug-level) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
