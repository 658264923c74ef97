mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status for failures outside the build pipeline (e.g. `init` refusing to overwrite)
const OTHER_FAILURE: u8 = 10;

#[derive(Parser)]
#[command(name = "startpage")]
#[command(version, about = "Static site builder for a single-page browser start page", long_about = None)]
struct Cli {
    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Build dist/index.html from the project
    Build {
        /// Path to project root
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output directory (defaults to <path>/dist)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Embed config text into the page without HTML escaping
        #[arg(long)]
        trusted: bool,
    },

    /// Check the project and compile its stylesheet without writing anything
    Validate {
        /// Path to project root
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a new project with a default theme, font and template
    Init {
        /// Path to create the project in
        path: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(logging::level_for(cli.quiet, cli.verbose));

    let result = match cli.command {
        Command::Build {
            path,
            output,
            trusted,
        } => commands::build::run(path, output, trusted),
        Command::Validate { path } => commands::validate::run(path),
        Command::Init { path } => commands::init::run(path),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "startpage", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Print a failure and map it to the process exit status.
fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<startpage_core::Error>() {
        Some(error) => {
            eprintln!("{}", error);
            if let Some(hint) = error.hint() {
                eprintln!("{}", hint);
            }
            ExitCode::from(error.exit_code())
        }
        None => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(OTHER_FAILURE)
        }
    }
}
