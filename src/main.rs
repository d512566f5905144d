use clap::Parser;
use season_rename::cli::Args;
use season_rename::config::RenameOptions;
use season_rename::error::{AppError, ExitCode};
use season_rename::logging;
use season_rename::output::{display_json, display_rename_set};
use season_rename::progress::Progress;
use season_rename::rename::{apply_rename_set, build_rename_set};
use std::io::{self, Write};
use tracing::{debug, error, info};

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    debug!(?args, "Arguments parsed");

    let code = match run(&args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            error!("{}", e);
            println!("{}", e.detailed_message());
            e.exit_code()
        }
    };

    std::process::exit(code.into());
}

fn run(args: &Args) -> Result<(), AppError> {
    // Keep stdout clean for JSON consumers
    let mut progress = if args.json {
        Progress::stderr()
    } else {
        Progress::stdout()
    };

    let options = RenameOptions::from_args(args);

    info!(directory = ?args.directory, season = %options.season, "Building rename set");
    let set = build_rename_set(&args.directory, &options, &mut progress)?;

    if set.is_empty() {
        info!("No media files matched");
    }

    {
        let mut stdout = io::stdout().lock();
        if args.json {
            display_json(&set, &mut stdout).map_err(output_error)?;
        } else {
            display_rename_set(&set, &mut stdout).map_err(output_error)?;
        }
        stdout.flush().map_err(output_error)?;
    }

    if args.yes {
        let renamed = apply_rename_set(&args.directory, &set)?;
        progress.rename_complete(renamed, false);
    } else {
        progress.rename_complete(set.len(), true);
    }

    Ok(())
}

fn output_error(e: io::Error) -> AppError {
    AppError::Other(format!("Failed to display output: {}", e))
}
