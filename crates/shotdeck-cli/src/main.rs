mod commands;
mod reader;

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use commands::list::{GroupByArg, ListArgs, SortArg};
use reader::{read_library, ScannedFile};
use shotdeck_core::{build_record, error_record, Catalog, CATALOG_VERSION};
use shotdeck_lint::LintConfig;

#[derive(Parser)]
#[command(
    name = "shotdeck",
    version,
    about = "shotdeck screenshot catalog — browse UI component screenshots by their filename-encoded variants"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a screenshot directory and output the catalog as JSON
    Scan {
        /// Screenshot directory (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List screenshots with search, filters, grouping and sorting
    List {
        /// Screenshot directory (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Case-insensitive search over component, state, description and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only this component
        #[arg(long)]
        component: Option<String>,

        /// Only this state
        #[arg(long)]
        state: Option<String>,

        /// Required tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Match any of the given tags instead of all of them
        #[arg(long)]
        any_tags: bool,

        /// Grouping
        #[arg(long, value_enum, default_value_t = GroupByArg::Component)]
        group_by: GroupByArg,

        /// Sort key
        #[arg(long, value_enum, default_value_t = SortArg::Alphabetical)]
        sort: SortArg,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Show a component's property controls and resolve a selection
    Variants {
        /// Component name
        component: String,

        /// Screenshot directory (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Current selection entry KEY=VALUE (repeatable)
        #[arg(long = "select", value_name = "KEY=VALUE")]
        selections: Vec<String>,

        /// Change one property and snap the selection to a captured variant
        #[arg(long, value_name = "KEY=VALUE")]
        change: Option<String>,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Report documentation coverage and property usage
    Analyze {
        /// Screenshot directory (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Lint a screenshot library for naming and coverage issues
    Lint {
        /// Screenshot directory (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Scan { path, output } => match run_scan(&path, output.as_deref()) {
            Ok(json) => {
                if output.is_none() {
                    println!("{json}");
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Commands::List {
            path,
            search,
            component,
            state,
            tags,
            any_tags,
            group_by,
            sort,
            desc,
        } => {
            let args = ListArgs {
                search,
                component,
                state,
                tags,
                any_tags,
                group_by,
                sort,
                desc,
            };
            match commands::list::run_list(&path, &args) {
                Ok(output) => {
                    println!("{output}");
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        Commands::Variants {
            component,
            path,
            selections,
            change,
            format,
        } => match commands::variants::run_variants(
            &path,
            &component,
            &selections,
            change.as_deref(),
            &format,
        ) {
            Ok(output) => {
                println!("{output}");
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Commands::Analyze { path, format } => {
            match commands::analyze::run_analyze(&path, &format) {
                Ok(output) => {
                    println!("{output}");
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        Commands::Lint { path, format } => match commands::lint::run_lint(&path, &format) {
            Ok((output, error_count)) => {
                println!("{output}");
                if error_count > 0 {
                    process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_secs()
        .init();
}

/// Scan a screenshot directory into a catalog, along with the lint levels
/// from its config file.
pub fn load_catalog(input_path: &Path) -> Result<(Catalog, LintConfig), String> {
    let library = read_library(input_path).map_err(|e| e.to_string())?;

    if library.files.is_empty() {
        log::warn!("No screenshots found at {}", input_path.display());
    }

    let screenshots = library
        .files
        .iter()
        .enumerate()
        .map(|(index, file)| match file {
            ScannedFile::Ok(entry) => build_record(entry, index, &library.documentation),
            ScannedFile::Failed { filename } => error_record(filename, index),
        })
        .collect::<Vec<_>>();
    log::info!(
        "Catalogued {} screenshots from {}",
        screenshots.len(),
        input_path.display()
    );

    let catalog = Catalog {
        catalog_version: CATALOG_VERSION.to_string(),
        project: library.project,
        screenshots,
    };
    Ok((catalog, library.lint))
}

fn run_scan(input_path: &Path, output_file: Option<&Path>) -> Result<String, String> {
    let (catalog, _) = load_catalog(input_path)?;
    let json = serde_json::to_string_pretty(&catalog)
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(out_path) = output_file {
        std::fs::write(out_path, &json)
            .map_err(|e| format!("Failed to write {}: {e}", out_path.display()))?;
        return Ok(format!("Written to {}", out_path.display()));
    }

    Ok(json)
}
