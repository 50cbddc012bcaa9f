use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_demo_command, handle_report_command, ReportArgs};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::logging;
use expense_tracker::services::SystemClock;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Track expenses and produce monthly category reports",
    long_about = "Records expenses in memory and renders monthly reports grouped \
                  by category, in a simple or a detailed layout."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a monthly report from expenses given on the command line
    Report(ReportArgs),

    /// Write the sample October 2023 reports
    Demo {
        /// Directory for the report files (defaults to the configured report directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    // `report` works without a config directory, so path resolution
    // failures only surface for the commands that need one.
    let paths = TrackerPaths::new();
    let settings = match &paths {
        Ok(paths) => Settings::load_or_create(paths)?,
        Err(e) => {
            tracing::warn!(error = %e, "no config directory, using default settings");
            Settings::default()
        }
    };

    match cli.command {
        Some(Commands::Report(args)) => {
            handle_report_command(&settings, args, SystemClock)?;
        }
        Some(Commands::Demo { output_dir }) => {
            let output_dir = match output_dir {
                Some(dir) => dir,
                None => settings.report_dir(&paths?),
            };
            handle_demo_command(&output_dir, SystemClock)?;
        }
        Some(Commands::Config) => {
            let paths = paths?;
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Report directory: {}", settings.report_dir(&paths).display());
            println!();
            println!("Settings:");
            println!("  Default report style: {}", settings.default_style);
        }
        None => {
            println!("Expense Tracker - monthly expense reports by category");
            println!();
            println!("Run 'expense-tracker --help' for usage information.");
            println!("Run 'expense-tracker demo' to write the sample reports.");
        }
    }

    Ok(())
}
