//! PatentWatch CLI — list, show and validate patent expiration records.
//!
//! Commands:
//! - `list` — filter by name, group by expiration year, print as table/JSON/CSV
//! - `show` — print every field of one record
//! - `validate` — load the catalog and report problems
//! - `export` — print the loaded catalog as TOML

mod output;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use patentwatch_core::{derive_view, Catalog, CatalogError, DrugId, SearchQuery, TrackerConfig};

#[derive(Parser)]
#[command(
    name = "patentwatch",
    about = "PatentWatch CLI — when brand-name drugs go generic"
)]
struct Cli {
    /// Config file. Defaults to <config dir>/patentwatch/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file (TOML or JSON), overriding the config.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Debug logging on stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List drugs matching a search, grouped by expiration year.
    List(ListArgs),
    /// Show every field of one drug.
    Show {
        /// Drug id.
        id: DrugId,

        /// Evaluate months-until as of this date (YYYY-MM-DD). Defaults to now.
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Load and validate the catalog.
    Validate,
    /// Print the loaded catalog as TOML.
    Export,
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive text matched against brand and generic names.
    /// Defaults to `initial_search` from the config.
    #[arg(long, short)]
    search: Option<String>,

    /// Include patents that have already expired.
    #[arg(long, conflicts_with = "hide_expired")]
    show_expired: bool,

    /// Leave out expired patents even if the config shows them.
    #[arg(long)]
    hide_expired: bool,

    /// Evaluate expiry and months-until as of this date (YYYY-MM-DD). Defaults to now.
    #[arg(long)]
    as_of: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

impl ListArgs {
    /// Page inputs: flags win, the config fills in the rest.
    fn query(&self, config: &TrackerConfig) -> SearchQuery {
        let text = self
            .search
            .clone()
            .unwrap_or_else(|| config.initial_search.clone());
        let show_expired = if self.show_expired {
            true
        } else if self.hide_expired {
            false
        } else {
            config.show_expired
        };
        SearchQuery::new(text, show_expired)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(TrackerConfig::default_path);
    let config = TrackerConfig::load(&config_path)?;
    init_logging(&config.log_filter, cli.verbose)?;
    debug!(config = %config_path.display(), "config loaded");

    let config = resolve(&cli, config);
    let catalog = load_catalog(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Commands::List(args) => run_list(&mut out, &catalog, args, &config),
        Commands::Show { id, as_of } => run_show(&mut out, &catalog, *id, as_of.as_deref()),
        Commands::Validate => run_validate(&mut out, &catalog),
        Commands::Export => run_export(&mut out, &catalog),
    }
}

/// Apply global flags on top of the loaded config.
fn resolve(cli: &Cli, mut config: TrackerConfig) -> TrackerConfig {
    if let Some(path) = &cli.catalog {
        config.catalog = Some(path.clone());
    }
    config
}

fn load_catalog(config: &TrackerConfig) -> Result<Catalog> {
    config.load_catalog().context("load drug catalog")
}

fn init_logging(filter: &str, verbose: bool) -> Result<()> {
    let directive = if verbose { "debug" } else { filter };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .with_context(|| format!("invalid log filter {directive:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;
    Ok(())
}

fn parse_as_of(as_of: Option<&str>) -> Result<NaiveDateTime> {
    match as_of {
        Some(s) => {
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("invalid --as-of date '{s}', expected YYYY-MM-DD"))?;
            Ok(date.and_time(NaiveTime::MIN))
        }
        None => Ok(chrono::Local::now().naive_local()),
    }
}

fn run_list<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    args: &ListArgs,
    config: &TrackerConfig,
) -> Result<()> {
    let now = parse_as_of(args.as_of.as_deref())?;
    let query = args.query(config);
    let view = derive_view(catalog.records(), &query, now);
    debug!(matched = view.matched, hidden = view.hidden_expired, "list");

    match args.format {
        Format::Table => output::write_table(out, &view, &query),
        Format::Json => output::write_json(out, &view),
        Format::Csv => output::write_csv(out, &view),
    }
}

fn run_show<W: Write>(out: &mut W, catalog: &Catalog, id: DrugId, as_of: Option<&str>) -> Result<()> {
    let now = parse_as_of(as_of)?;
    let record = catalog.require(id)?;
    output::write_detail(out, record, now)
}

fn run_validate<W: Write>(out: &mut W, catalog: &Catalog) -> Result<()> {
    writeln!(out, "Catalog OK: {} records", catalog.len())?;
    if let Some((first, last)) = catalog.expiration_span() {
        writeln!(
            out,
            "Expirations span {} to {}",
            patentwatch_core::format::long_date(first),
            patentwatch_core::format::long_date(last)
        )?;
    }
    Ok(())
}

fn run_export<W: Write>(out: &mut W, catalog: &Catalog) -> Result<()> {
    let text = catalog.to_toml().context("serialize catalog")?;
    out.write_all(text.as_bytes())?;
    Ok(())
}
