//! headgrid CLI - check header manifests and print their layouts.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::doc_markdown
)]

use clap::{Parser, Subcommand, ValueEnum};
use headgrid_core::ColumnNode;
use headgrid_layout::{HeaderLayout, HeaderLayoutEngine, RowItem};
use headgrid_yaml::{HeaderManifest, ParseError};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "headgrid")]
#[command(about = "Grouped table header layout tool")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header layout of a manifest
    Layout {
        /// Path to manifest file (YAML or JSON)
        #[arg(default_value = "headers.yaml")]
        manifest: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check header manifest validity
    Check {
        /// Path to manifest file (YAML or JSON)
        #[arg(default_value = "headers.yaml")]
        manifest: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line per header row
    Text,
    /// Full layout as JSON
    Json,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Layout { manifest, format } => print_layout(&manifest, format),
        Commands::Check { manifest } => check_manifest(&manifest),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_layout(path: &Path, format: OutputFormat) -> Result<(), ParseError> {
    let manifest = HeaderManifest::load(path)?;
    tracing::debug!(name = %manifest.name, columns = manifest.columns.len(), "loaded manifest");
    let tree = manifest.into_tree();
    let mut engine = HeaderLayoutEngine::new();
    let layout = engine.layout(&tree);

    match format {
        OutputFormat::Text => print!("{}", render_text(&layout)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&*layout)?),
    }
    Ok(())
}

fn check_manifest(path: &Path) -> Result<(), ParseError> {
    println!("Checking manifest: {}", path.display());

    let manifest = HeaderManifest::from_path(path)?;
    // Each warning is already logged by validation.
    let warnings = manifest.validate()?;
    let name = manifest.name.clone();
    let layout = HeaderLayoutEngine::new().compute(&manifest.into_tree());

    print!("{}", check_summary(&name, &layout, warnings.len()));
    Ok(())
}

fn check_summary(name: &str, layout: &HeaderLayout, warnings: usize) -> String {
    let mut out = String::from("Manifest valid!\n");
    let _ = writeln!(out, "  Name: {}", name);
    let _ = writeln!(out, "  Header rows: {}", layout.row_count());
    let _ = writeln!(out, "  Leaf columns: {}", layout.leaf_count());
    let _ = writeln!(out, "  Collapsed columns: {}", layout.suppressed_count());
    let _ = writeln!(out, "  Warnings: {}", warnings);
    out
}

/// Human-readable label of a header cell.
fn cell_label(column: &ColumnNode) -> String {
    if let Some(title) = column.title() {
        return title.to_string();
    }
    if let Some(key) = column.key() {
        return key.to_string();
    }
    match column.as_leaf() {
        Some(leaf) => format!("<{:?}>", leaf.kind).to_lowercase(),
        None => "<group>".to_string(),
    }
}

fn render_cell(item: &RowItem) -> String {
    let mut cell = format!(
        "{} [{}x{}]",
        cell_label(&item.column),
        item.col_span,
        item.row_span
    );
    if item.is_last {
        cell.push_str(" |");
    }
    cell
}

fn render_text(layout: &HeaderLayout) -> String {
    let mut out = String::new();
    for (depth, row) in layout.rows().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(render_cell).collect();
        let _ = writeln!(out, "row {}: {}", depth, cells.join("  "));
    }
    let keys: Vec<String> = layout.cols().iter().map(|c| c.key.to_string()).collect();
    let _ = writeln!(out, "cols: {}", keys.join(", "));
    out
}
