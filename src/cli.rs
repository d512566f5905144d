use crate::config::{DEFAULT_DIRECTORY, DEFAULT_SEASON};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "season-rename")]
#[command(author, version, about, long_about = None)]
#[command(about = "Rename a season of episode files to 'Title SxxEyy.ext'")]
pub struct Args {
    /// Name to use for the series (defaults to the directory name)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Season token, used verbatim. Add zero padding manually
    #[arg(short, long, default_value = DEFAULT_SEASON)]
    pub season: String,

    /// The directory to rename files in
    #[arg(short = 'd', long = "dir", default_value = DEFAULT_DIRECTORY)]
    pub directory: PathBuf,

    /// Actually execute the renames (otherwise only print them)
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print the planned renames as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
