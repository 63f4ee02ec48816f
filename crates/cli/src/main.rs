use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use menubar_store::{MenuDataStore, source_for_root};
use menubar_types::{MenuCollection, MenuNode};
use menubar_util::{MenubarConfig, category_label};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// Browse the site navigation menus in the terminal.
#[derive(Debug, Parser)]
#[command(name = "menubar", version, about)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load all three menu documents and print a summary of each.
    Check,
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Directory containing the menu documents.
    #[arg(long, global = true, conflicts_with = "base_url")]
    data_dir: Option<PathBuf>,

    /// Base URL serving the menu documents.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Configuration file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file while the navigator is running.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.source.config {
        Some(path) => MenubarConfig::load_from(path)?,
        None => MenubarConfig::load()?,
    };

    match cli.command {
        Some(Command::Check) => {
            init_tracing(std::io::stderr, true);
            let store = build_store(&config, cli.source)?;
            run_check(&store).await
        }
        None => {
            match cli.source.log_file.clone().or_else(|| config.log_file.clone()) {
                Some(path) => {
                    let file = File::create(&path).with_context(|| format!("failed to create log file {}", path.display()))?;
                    init_tracing(Mutex::new(file), false);
                }
                None => init_tracing(std::io::sink, false),
            }
            let store = build_store(&config, cli.source)?;
            menubar_tui::run(store).await
        }
    }
}

fn init_tracing<W>(writer: W, ansi: bool)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .try_init();
}

fn build_store(config: &MenubarConfig, source: SourceArgs) -> Result<MenuDataStore> {
    let root = config.resolve_root(source.data_dir, source.base_url)?;
    info!(root = ?root, "Resolved menu document root");
    let source = source_for_root(&root, config.locations.clone())?;
    Ok(MenuDataStore::new(source))
}

async fn run_check(store: &MenuDataStore) -> Result<()> {
    let collection = store.load().await.context("failed to load the menu documents")?;
    let mut stdout = std::io::stdout().lock();
    write_summary(&mut stdout, &collection)?;
    Ok(())
}

/// Writes one block per menu: title, categories in document order, footer links.
fn write_summary(out: &mut impl Write, collection: &MenuCollection) -> std::io::Result<()> {
    for (key, menu) in collection.iter() {
        writeln!(out, "{key}: {}", menu.title)?;
        if menu.categories.is_empty() {
            writeln!(out, "  (no categories)")?;
        }
        for (category, items) in &menu.categories {
            writeln!(
                out,
                "  {} [{category}]: {} items, {} in total",
                category_label(category),
                items.len(),
                count_nodes(items)
            )?;
        }
        if !menu.footer_links.is_empty() {
            writeln!(out, "  footer: {}", menu.footer_links.join(", "))?;
        }
    }
    Ok(())
}

fn count_nodes(nodes: &[MenuNode]) -> usize {
    nodes.iter().map(|node| 1 + count_nodes(node.children())).sum()
}
