use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use kb_embeddings::{EmbeddingClient, EmbeddingConfig, EmbeddingMode};
use kb_indexer::{IndexStore, KbIndexer};
use kb_search::{render_report, HybridSearch, SearchQuery};
use std::path::PathBuf;

mod recent;

#[derive(Parser)]
#[command(name = "kb")]
#[command(about = "Hybrid keyword + semantic search over a markdown knowledge base", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Knowledge-base root directory
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Embedding backend
    #[arg(long, global = true, value_enum, default_value = "openai")]
    embed_mode: EmbedMode,
}

#[derive(Copy, Clone, ValueEnum)]
enum EmbedMode {
    #[value(name = "openai")]
    OpenAi,
    Stub,
}

impl EmbedMode {
    const fn as_domain(self) -> EmbeddingMode {
        match self {
            EmbedMode::OpenAi => EmbeddingMode::OpenAi,
            EmbedMode::Stub => EmbeddingMode::Stub,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build or incrementally update the search index
    Index,

    /// Search the knowledge base
    Search(SearchArgs),

    /// Print recent daily entries, newest first
    Recent(RecentArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Search terms (keywords or phrases)
    terms: Vec<String>,

    /// Number of results
    #[arg(long, default_value_t = kb_search::DEFAULT_LIMIT)]
    top: usize,

    /// Skip semantic scoring and rank by keywords alone
    #[arg(long)]
    keyword_only: bool,

    /// Rebuild the index before searching
    #[arg(long)]
    reindex: bool,
}

#[derive(Args)]
struct RecentArgs {
    /// Directory of daily entries named YYYY-MM-DD.md, relative to the root
    #[arg(long, default_value = "recent")]
    dir: PathBuf,

    /// Lookback window in days
    #[arg(long, default_value_t = recent::DEFAULT_LOOKBACK_DAYS)]
    days: u32,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Index => run_index(&cli),
        Commands::Search(args) => cmd_search(&cli, args),
        Commands::Recent(args) => cmd_recent(&cli, args),
    }
}

fn build_client(cli: &Cli, config: &EmbeddingConfig) -> Result<Box<dyn EmbeddingClient>> {
    kb_embeddings::build_client(cli.embed_mode.as_domain(), config)
        .context("failed to initialise embedding backend")
}

fn run_index(cli: &Cli) -> Result<()> {
    let config = EmbeddingConfig::from_env();
    let client = build_client(cli, &config)?;
    let indexer = KbIndexer::new(&cli.root, client.as_ref())?.with_max_batch(config.max_batch);
    let stats = indexer.index()?;

    if stats.skipped {
        println!("No files changed; index is up to date.");
    } else {
        println!(
            "Indexed {} files: {} chunks ({} embedded) in {} ms",
            stats.files, stats.chunks, stats.chunks_embedded, stats.time_ms
        );
    }
    Ok(())
}

fn cmd_search(cli: &Cli, args: &SearchArgs) -> Result<()> {
    if args.terms.is_empty() {
        bail!("no search terms given; usage: kb search <terms>...");
    }

    if args.reindex {
        run_index(cli)?;
    }

    let store = IndexStore::for_root(&cli.root);
    let Some(index) = store.load() else {
        bail!(
            "index not found at {}; run `kb index` first",
            store.path().display()
        );
    };

    // Query embeddings must come from the model the index was built with.
    let client: Option<Box<dyn EmbeddingClient>> = if args.keyword_only {
        None
    } else {
        let mut config = EmbeddingConfig::from_env();
        config.model = index.model.clone();
        Some(build_client(cli, &config)?)
    };

    let query = SearchQuery {
        terms: args.terms.clone(),
        limit: args.top,
        keyword_only: args.keyword_only,
    };
    let results = HybridSearch::new(&index, client.as_deref()).search(&query)?;

    println!("{}", render_report(&results));
    Ok(())
}

fn cmd_recent(cli: &Cli, args: &RecentArgs) -> Result<()> {
    let dir = if args.dir.is_absolute() {
        args.dir.clone()
    } else {
        cli.root.join(&args.dir)
    };

    let report = recent::render_recent(&dir, args.days)?;
    if !report.is_empty() {
        println!("{report}");
    }
    Ok(())
}
