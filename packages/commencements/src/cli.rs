//! Command-line interface for akn-commencements.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use console::style;
use serde::Serialize;

use crate::beautifier::CommencementsBeautifier;
use crate::config::{parse_date, split_ids, validate_country, DEFAULT_COUNTRY};
use crate::error::{CommencementsError, Result};
use crate::output::{render, save, OutputFormat};
use crate::provisions::{expand_commenced_provisions, PointInTime, Timeline};
use crate::toc::{toc_rules_for_country, TocBuilder, TocElement, TocRules};

/// Tables of contents, provision merging and commencement descriptions for
/// Akoma Ntoso legislation.
#[derive(Parser)]
#[command(name = "akn-commencements")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the table of contents of a document.
    Toc {
        /// Akoma Ntoso XML document, or a TOC as JSON
        file: PathBuf,

        /// Country whose TOC rules apply (e.g., za)
        #[arg(short, long, default_value = DEFAULT_COUNTRY)]
        country: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Describe which provisions of a document are commenced.
    Describe {
        /// Akoma Ntoso XML document, or a TOC as JSON
        file: PathBuf,

        /// Comma-separated provision ids (e.g., sec_1,sec_2)
        #[arg(short, long)]
        provisions: String,

        /// The ids are of uncommenced provisions
        #[arg(short, long)]
        uncommenced: bool,

        /// Country whose TOC rules apply (e.g., za)
        #[arg(short, long, default_value = DEFAULT_COUNTRY)]
        country: String,
    },

    /// Merge the commenceable provisions of several points in time.
    Merge {
        /// Point in time as DATE=FILE (e.g., 2021-03-01=act.xml); repeatable
        #[arg(long = "pit", required = true)]
        points_in_time: Vec<String>,

        /// Ignore points in time after this date (YYYY-MM-DD)
        #[arg(long)]
        up_to: Option<String>,

        /// Country whose TOC rules apply (e.g., za)
        #[arg(short, long, default_value = DEFAULT_COUNTRY)]
        country: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Complete a commencement's provisions with descendants and fully commenced containers.
    Expand {
        /// Akoma Ntoso XML document, or a TOC as JSON
        file: PathBuf,

        /// Comma-separated ids commenced by this commencement
        #[arg(short, long)]
        provisions: String,

        /// Comma-separated ids commenced by earlier commencements
        #[arg(long, default_value = "")]
        previously: String,

        /// Country whose TOC rules apply (e.g., za)
        #[arg(short, long, default_value = DEFAULT_COUNTRY)]
        country: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Toc {
            file,
            country,
            format,
            output,
        } => toc_command(&file, &country, format, output.as_deref()),
        Commands::Describe {
            file,
            provisions,
            uncommenced,
            country,
        } => describe_command(&file, &provisions, uncommenced, &country),
        Commands::Merge {
            points_in_time,
            up_to,
            country,
            format,
            output,
        } => merge_command(
            &points_in_time,
            up_to.as_deref(),
            &country,
            format,
            output.as_deref(),
        ),
        Commands::Expand {
            file,
            provisions,
            previously,
            country,
            format,
        } => expand_command(&file, &provisions, &previously, &country, format),
    }
}

fn rules_for(country: &str) -> Result<TocRules> {
    validate_country(country)?;
    Ok(toc_rules_for_country(country))
}

/// Load a table of contents from a JSON TOC or an Akoma Ntoso document.
pub fn load_toc(path: &Path, rules: &TocRules) -> Result<Vec<TocElement>> {
    let content = fs::read_to_string(path)?;

    if path.extension().is_some_and(|ext| ext == "json") {
        tracing::debug!(path = %path.display(), "Loading TOC from JSON");
        Ok(serde_json::from_str(&content)?)
    } else {
        tracing::debug!(path = %path.display(), "Building TOC from XML");
        TocBuilder::new(rules.clone()).table_of_contents_from_str(&content)
    }
}

/// Parse a `DATE=FILE` point-in-time argument.
pub fn parse_point_in_time(arg: &str) -> Result<(NaiveDate, PathBuf)> {
    let (date, file) = arg
        .split_once('=')
        .filter(|(_, file)| !file.is_empty())
        .ok_or_else(|| CommencementsError::InvalidPointInTime(arg.to_string()))?;
    Ok((parse_date(date)?, PathBuf::from(file)))
}

/// Print `value`, or save it to `output` when given.
fn write_output<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            save(value, format, path)?;
            println!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{}", render(value, format)?),
    }
    Ok(())
}

fn toc_command(
    file: &Path,
    country: &str,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let rules = rules_for(country)?;
    let toc = load_toc(file, &rules)?;

    write_output(&toc, format, output)
}

fn describe_command(file: &Path, provisions: &str, uncommenced: bool, country: &str) -> Result<()> {
    let rules = rules_for(country)?;
    let toc = load_toc(file, &rules)?;
    let items = rules.commenceable_items(&toc);

    let ids = split_ids(provisions);
    let description = CommencementsBeautifier::new(!uncommenced).describe(&items, &ids);
    println!("{description}");

    Ok(())
}

fn merge_command(
    points_in_time: &[String],
    up_to: Option<&str>,
    country: &str,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let rules = rules_for(country)?;
    let up_to = up_to.map(parse_date).transpose()?;

    let mut timeline = Timeline::new();
    for arg in points_in_time {
        let (date, file) = parse_point_in_time(arg)?;
        timeline.add_point_in_time(PointInTime::new(date, load_toc(&file, &rules)?));
    }

    eprintln!(
        "{} {} points in time",
        style("Merging").bold(),
        style(timeline.len()).cyan()
    );

    let provisions = timeline.commenceable_provisions(&rules, up_to);
    write_output(&provisions, format, output)
}

fn expand_command(
    file: &Path,
    provisions: &str,
    previously: &str,
    country: &str,
    format: OutputFormat,
) -> Result<()> {
    let rules = rules_for(country)?;
    let toc = load_toc(file, &rules)?;
    let items = rules.commenceable_items(&toc);

    let expanded =
        expand_commenced_provisions(&items, &split_ids(provisions), &split_ids(previously));

    if expanded.is_changed() {
        eprintln!(
            "{} {}",
            style("Added:").green().bold(),
            expanded.added.join(", ")
        );
    }
    write_output(&expanded.provisions, format, None)
}
