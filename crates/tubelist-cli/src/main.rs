//! tubelist - paginated terminal tables for search results.

/// Application configuration (TOML).
mod config;
/// Input file loading.
mod input;
/// Terminal size detection.
mod terminal;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use tubelist::{AnyListView, Geometry, SongTitle};

use crate::config::{AppConfig, resolve_config_path};
use crate::input::load_records;
use crate::terminal::{TerminalGeometry, stdout_is_tty};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Render one page of a list.
    Render(PageArgs),
    /// Print the values of the chosen rows as JSON.
    Select(ChoiceArgs),
    /// Print the number of pages of a list.
    Pages(InputArgs),
    /// Toggle the checked state of song titles and re-render the page.
    Toggle(ChoiceArgs),
    /// Write a config file with the default settings.
    Init(InitArgs),
}

/// Arguments naming the input file.
#[derive(clap::Args)]
struct InputArgs {
    /// JSON file holding an array of records, or an object with an `items` array.
    #[arg(long, required = true)]
    input: PathBuf,
}

/// Arguments for commands that work on one page.
#[derive(clap::Args)]
struct PageArgs {
    /// Input records.
    #[command(flatten)]
    input: InputArgs,

    /// Page number, starting at 1. Clamped to the last page.
    #[arg(long, default_value_t = 1)]
    page: usize,
}

/// Arguments for commands taking a row selection.
#[derive(clap::Args)]
struct ChoiceArgs {
    /// Input records and page.
    #[command(flatten)]
    page: PageArgs,

    /// Rows to pick, e.g. "1,3,5-7".
    #[arg(long, required = true)]
    choice: String,
}

/// Arguments for the `init` subcommand.
#[derive(clap::Args)]
struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    force: bool,
}

/// Builds the list view for `input` with the settings from the config file.
///
/// # Errors
///
/// Returns an error if the config or the input cannot be loaded, or the
/// records do not form a valid list.
fn load_view(input: &InputArgs, dir: Option<&PathBuf>) -> Result<AnyListView> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    let records = load_records(&input.input)?;

    let fallback = Geometry::fixed(config.terminal.width, config.terminal.max_results);
    let view = AnyListView::from_records(
        records,
        |kind| config.columns.for_kind(kind),
        TerminalGeometry::new(fallback),
    )
    .with_context(|| format!("invalid list in {}", input.input.display()))?
    .with_palette(config.display.palette(stdout_is_tty()))
    .with_scope(config.display.selection_scope);

    tracing::debug!(kind = %view.kind(), items = view.len(), "list view ready");
    Ok(view)
}

/// Opens the page requested on the command line (1-based).
fn open_page(view: &mut AnyListView, page: usize) {
    view.set_page(page.saturating_sub(1));
    if view.page().saturating_add(1) != page.max(1) {
        tracing::debug!(
            requested = page,
            shown = view.page().saturating_add(1),
            "page clamped"
        );
    }
}

/// Writes the current page followed by a `Page x/y` footer.
fn write_page(out: &mut impl Write, view: &AnyListView) -> Result<()> {
    write!(out, "{}", view.render())?;
    writeln!(
        out,
        "Page {}/{}",
        view.page().saturating_add(1),
        view.num_pages()
    )?;
    Ok(())
}

/// Runs the `render` subcommand.
///
/// # Errors
///
/// Returns an error if the view cannot be built or stdout cannot be written.
#[instrument(skip_all)]
fn run_render(args: &PageArgs, dir: Option<&PathBuf>) -> Result<()> {
    let mut view = load_view(&args.input, dir)?;
    open_page(&mut view, args.page);

    let mut out = std::io::stdout().lock();
    write_page(&mut out, &view).context("failed to write to stdout")
}

/// Runs the `select` subcommand.
///
/// # Errors
///
/// Returns an error if the view cannot be built, a chosen row does not
/// exist, or stdout cannot be written.
#[instrument(skip_all)]
fn run_select(args: &ChoiceArgs, dir: Option<&PathBuf>) -> Result<()> {
    let mut view = load_view(&args.page.input, dir)?;
    open_page(&mut view, args.page.page);

    let selected = view
        .select(&args.choice)
        .with_context(|| format!("invalid selection \"{}\"", args.choice))?;
    tracing::info!(count = selected.len(), "selected rows");

    let json = serde_json::to_string_pretty(&selected).context("failed to serialize selection")?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{json}").context("failed to write to stdout")
}

/// Runs the `pages` subcommand.
///
/// # Errors
///
/// Returns an error if the view cannot be built or stdout cannot be written.
#[instrument(skip_all)]
fn run_pages(args: &InputArgs, dir: Option<&PathBuf>) -> Result<()> {
    let view = load_view(args, dir)?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", view.num_pages()).context("failed to write to stdout")
}

/// Runs the `toggle` subcommand.
///
/// # Errors
///
/// Returns an error if the list is not a song-title list, a chosen row
/// does not exist, or stdout cannot be written.
#[instrument(skip_all)]
fn run_toggle(args: &ChoiceArgs, dir: Option<&PathBuf>) -> Result<()> {
    let mut view = load_view(&args.page.input, dir)?;
    open_page(&mut view, args.page.page);

    let kind = view.kind();
    let Some(songs) = view.as_song_titles_mut() else {
        bail!("toggle only applies to song_title lists, got {kind}");
    };
    let toggled = songs
        .update_selected(&args.choice, SongTitle::toggle)
        .with_context(|| format!("invalid selection \"{}\"", args.choice))?;
    tracing::info!(toggled, "toggled song titles");

    let mut out = std::io::stdout().lock();
    write_page(&mut out, &view).context("failed to write to stdout")
}

/// Runs the `init` subcommand.
///
/// # Errors
///
/// Returns an error if the config file exists and `--force` is not given,
/// or the file cannot be written.
#[instrument(skip_all)]
fn run_init(args: &InitArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    if config_path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    AppConfig::template()
        .save(&config_path)
        .context("failed to save config")?;
    tracing::info!("Wrote {}", config_path.display());
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Render(args) => run_render(&args, dir),
        Commands::Select(args) => run_select(&args, dir),
        Commands::Pages(args) => run_pages(&args, dir),
        Commands::Toggle(args) => run_toggle(&args, dir),
        Commands::Init(args) => run_init(&args, dir),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tubelist::{ItemKind, Record, default_columns};

    use super::*;

    fn view_of(json: &str, max_results: usize) -> AnyListView {
        let records: Vec<Record> = serde_json::from_str(json).unwrap();
        AnyListView::from_records(records, default_columns, Geometry::fixed(40, max_results))
            .unwrap()
    }

    #[test]
    fn test_open_page_is_one_based_and_clamped() {
        // Arrange
        let mut view = view_of(
            r#"[
                {"type": "song_title", "data": ["a", "1"]},
                {"type": "song_title", "data": ["b", "2"]},
                {"type": "song_title", "data": ["c", "3"]}
            ]"#,
            2,
        );

        // Act & Assert
        open_page(&mut view, 2);
        assert_eq!(view.page(), 1);
        open_page(&mut view, 0);
        assert_eq!(view.page(), 0);
        open_page(&mut view, 9);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_write_page_appends_footer() {
        // Arrange
        let view = view_of(r#"[{"type": "user", "data": {}}]"#, 5);
        let mut out = Vec::new();

        // Act
        write_page(&mut out, &view).unwrap();

        // Assert
        let text = String::from_utf8(out).unwrap();
        assert_eq!(view.kind(), ItemKind::User);
        assert!(text.starts_with('\n'));
        assert!(text.ends_with("Page 1/1\n"));
    }
}
