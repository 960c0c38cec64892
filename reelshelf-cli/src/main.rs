use std::path::PathBuf;

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use reelshelf_core::CatalogScope;
use reelshelf_model::{ListKind, SortBy, SortOrder, TitleId, TitleType};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

#[derive(Parser, Debug)]
#[command(name = "reelshelf", version)]
#[command(about = "Browse the movie and TV catalog and keep a favorites list and watchlist")]
struct Cli {
    /// Config file (TOML or JSON); overrides $REELSHELF_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog service origin; overrides the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Directory holding the favorites and watchlist files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep lists in memory only; nothing is written to disk
    #[arg(long, global = true, default_value_t = false)]
    ephemeral: bool,

    /// Print JSON instead of formatted text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the whole catalog
    Discover(ListingArgs),
    /// Browse movies only
    Movies(ListingArgs),
    /// Browse TV series and mini-series only
    Series(ListingArgs),
    /// Search titles by free text
    Search {
        query: String,
        /// Maximum results (1-50)
        #[arg(long, default_value_t = reelshelf_core::view_model::SEARCH_LIMIT)]
        limit: u32,
    },
    /// Show one title in detail
    Show {
        id: TitleId,
        /// Include the first credits
        #[arg(long)]
        credits: bool,
        /// Include the first image URLs
        #[arg(long)]
        images: bool,
    },
    /// Fetch several titles at once (at most 5 are requested)
    Batch {
        #[arg(required = true)]
        ids: Vec<TitleId>,
    },
    /// Add a title to favorites, or remove it if already there
    Favorite { id: TitleId },
    /// Add a title to the watchlist, or remove it if already there
    Watch { id: TitleId },
    /// Print a stored list
    List { list: ListKind },
    /// Empty a stored list
    Clear { list: ListKind },
    /// Print title types, sort fields, sort orders and genres
    Vocab,
}

#[derive(ClapArgs, Debug, Clone)]
struct ListingArgs {
    /// Title type filter, repeatable (e.g. movie, tv-series)
    #[arg(long = "type", value_name = "TYPE")]
    types: Vec<TitleType>,

    /// Genre filter, repeatable (see `reelshelf vocab`)
    #[arg(long = "genre", value_name = "GENRE")]
    genres: Vec<String>,

    /// Sort field (e.g. popularity, user-rating, release-date)
    #[arg(long)]
    sort_by: Option<SortBy>,

    /// Sort direction: asc or desc
    #[arg(long)]
    order: Option<SortOrder>,

    /// Minimum aggregate rating, 0 to 10
    #[arg(long, value_parser = parse_rating)]
    min_rating: Option<f64>,

    #[arg(long)]
    min_year: Option<i32>,

    #[arg(long)]
    max_year: Option<i32>,

    /// Pages to fetch
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,
}

fn parse_rating(raw: &str) -> Result<f64, String> {
    let rating: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if (0.0..=10.0).contains(&rating) {
        Ok(rating)
    } else {
        Err(format!("rating must be between 0 and 10, got {rating}"))
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,reelshelf=info".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if let Command::Vocab = cli.command {
        return commands::vocab(cli.json);
    }

    let ctx = commands::Context::build(
        cli.config.as_deref(),
        cli.base_url,
        cli.data_dir,
        cli.ephemeral,
        cli.json,
    )?;

    match cli.command {
        Command::Discover(args) => ctx.browse(CatalogScope::All, args.into()).await,
        Command::Movies(args) => ctx.browse(CatalogScope::Movies, args.into()).await,
        Command::Series(args) => ctx.browse(CatalogScope::Series, args.into()).await,
        Command::Search { query, limit } => ctx.search(&query, limit).await,
        Command::Show {
            id,
            credits,
            images,
        } => ctx.show(&id, credits, images).await,
        Command::Batch { ids } => ctx.batch(&ids).await,
        Command::Favorite { id } => ctx.toggle(ListKind::Favorites, &id).await,
        Command::Watch { id } => ctx.toggle(ListKind::Watchlist, &id).await,
        Command::List { list } => ctx.list(list),
        Command::Clear { list } => ctx.clear(list),
        Command::Vocab => commands::vocab(cli.json),
    }
}

impl From<ListingArgs> for commands::Listing {
    fn from(args: ListingArgs) -> Self {
        commands::Listing {
            types: args.types,
            genres: args.genres,
            sort_by: args.sort_by,
            sort_order: args.order,
            min_rating: args.min_rating,
            min_year: args.min_year,
            max_year: args.max_year,
            pages: args.pages,
        }
    }
}
