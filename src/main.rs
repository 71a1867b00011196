//! collview - Terminal Viewer for Biological Collection Records
//!
//! Browse and filter specimen records interactively, print a filtered view, or build the
//! JavaScript data bundle from a CSV export.

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use collview::config::Config;
use collview::render::text::write_report;
use collview::render::ui::{ColorTheme, TerminalUI, ThemeName};
use collview::source::{self, DEFAULT_BUNDLE_PATH, DEFAULT_CSV_PATH};
use collview::{Application, RecordFilter};
use std::io;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("collview")
        .version(collview::VERSION)
        .about("A terminal viewer with incremental filtering for biological collection records")
        .long_about(
            "collview loads specimen records from a generated collection-data.js bundle, a JSON \
             array, or a CSV export and filters them by a free-text query. At most 500 records \
             are shown for any query.",
        )
        .args_conflicts_with_subcommands(true)
        .arg(
            Arg::new("data")
                .help("Data file to load (bundle, JSON, or CSV)")
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("query")
                .help("Initial query")
                .long("query")
                .short('q')
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("print")
                .help("Print the filtered view to stdout instead of starting the UI")
                .long("print")
                .short('p')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("theme")
                .help("Color theme: default, monochrome, or high-contrast")
                .long("theme")
                .value_name("THEME"),
        )
        .arg(
            Arg::new("config")
                .help("Configuration file (defaults to the per-user config.toml)")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .subcommand(
            Command::new("build")
                .about("Generate the JavaScript data bundle from a CSV export")
                .arg(
                    Arg::new("csv")
                        .help("CSV export to read")
                        .long("csv")
                        .value_name("PATH")
                        .default_value(DEFAULT_CSV_PATH)
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("out")
                        .help("Bundle file to write")
                        .long("out")
                        .value_name("PATH")
                        .default_value(DEFAULT_BUNDLE_PATH)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
}

fn run_build(matches: &ArgMatches) -> Result<()> {
    let csv = matches
        .get_one::<PathBuf>("csv")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH));
    let out = matches
        .get_one::<PathBuf>("out")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLE_PATH));

    let report = source::build_bundle(&csv, &out)?;
    println!(
        "Generated {} with {} records.",
        report.output.display(),
        report.record_count
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Silent unless RUST_LOG is set
    env_logger::init();

    let matches = cli().get_matches();

    if let Some(build) = matches.subcommand_matches("build") {
        return run_build(build);
    }

    let config = Config::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;

    // Command-line flags win over the configuration file
    let data_path = matches
        .get_one::<PathBuf>("data")
        .cloned()
        .or_else(|| config.data_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLE_PATH));
    let theme = match matches.get_one::<String>("theme") {
        Some(name) => name.parse::<ThemeName>()?,
        None => config.theme,
    };
    let query = matches
        .get_one::<String>("query")
        .cloned()
        .unwrap_or_default();

    let records = source::load_or_empty(&data_path)?;

    if matches.get_flag("print") {
        let filter = RecordFilter::new(records);
        let mut stdout = io::stdout().lock();
        write_report(&mut stdout, &filter.filter(query.as_str()))?;
        return Ok(());
    }

    let ui_renderer = Box::new(TerminalUI::with_theme(ColorTheme::from_name(theme))?);
    let mut app = Application::new(records, &data_path, ui_renderer)?
        .with_poll_interval(config.poll_interval())
        .with_initial_query(query);

    app.run().await?;

    Ok(())
}
