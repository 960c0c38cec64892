use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, anyhow, bail};
use reelshelf_config::LoadedConfig;
use reelshelf_core::{
    ApiResult, CatalogClient, CatalogScope, CollectionViewModel, FileStorage,
    FilterConfig, FilterUpdate, MembershipStore, MemoryStorage, SearchViewModel,
    StoragePort, load_title_detail,
};
use reelshelf_core::view_model::Applied;
use reelshelf_model::{
    GENRES, ListKind, SortBy, SortOrder, Title, TitleId, TitleType,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use crate::render::{self, Marks};

type Store = MembershipStore<Box<dyn StoragePort>>;

/// Filter flags shared by `discover`, `movies` and `series`.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub types: Vec<TitleType>,
    pub genres: Vec<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub min_rating: Option<f64>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub pages: u32,
}

impl Listing {
    /// Apply the flags on top of `base`; unset flags keep its values.
    pub fn filters(&self, base: FilterConfig) -> FilterConfig {
        let mut filters = base;
        if !self.types.is_empty() {
            let types: BTreeSet<TitleType> = self.types.iter().cloned().collect();
            filters = filters.update(FilterUpdate::Types(types));
        }
        if !self.genres.is_empty() {
            let genres = self.genres.iter().map(|g| canonical_genre(g)).collect();
            filters = filters.update(FilterUpdate::Genres(genres));
        }
        if let Some(sort_by) = self.sort_by {
            filters = filters.update(FilterUpdate::SortBy(sort_by));
        }
        if let Some(order) = self.sort_order {
            filters = filters.update(FilterUpdate::SortOrder(order));
        }
        if let Some(rating) = self.min_rating {
            filters = filters.update(FilterUpdate::MinRating(rating));
        }
        if let Some(year) = self.min_year {
            filters = filters.update(FilterUpdate::MinYear(year));
        }
        if let Some(year) = self.max_year {
            filters = filters.update(FilterUpdate::MaxYear(year));
        }
        filters
    }
}

/// Known genres are matched case-insensitively; anything else is sent as
/// typed.
fn canonical_genre(raw: &str) -> String {
    let raw = raw.trim();
    GENRES
        .iter()
        .find(|genre| genre.eq_ignore_ascii_case(raw))
        .map(|genre| genre.to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[derive(Debug, Clone)]
enum StorageChoice {
    Memory,
    Dir(PathBuf),
    Platform,
}

/// Resolved settings plus the remote client for one invocation.
#[derive(Debug)]
pub struct Context {
    client: CatalogClient,
    storage: StorageChoice,
    json: bool,
}

impl Context {
    pub fn build(
        config_path: Option<&Path>,
        base_url: Option<String>,
        data_dir: Option<PathBuf>,
        ephemeral: bool,
        json: bool,
    ) -> Result<Self> {
        let LoadedConfig { config, source } =
            reelshelf_config::load(config_path).context("failed to load configuration")?;
        debug!(source = ?source, "Using configuration");

        let base_url = base_url.unwrap_or(config.api.base_url.clone());
        let client = CatalogClient::with_timeout(&base_url, config.api.timeout())
            .context("failed to build catalog client")?;

        let storage = if ephemeral {
            StorageChoice::Memory
        } else if let Some(dir) = data_dir.or(config.storage.data_dir) {
            StorageChoice::Dir(dir)
        } else {
            StorageChoice::Platform
        };

        Ok(Self {
            client,
            storage,
            json,
        })
    }

    fn open_store(&self) -> Result<Store> {
        let storage: Box<dyn StoragePort> = match &self.storage {
            StorageChoice::Memory => Box::new(MemoryStorage::new()),
            StorageChoice::Dir(dir) => Box::new(FileStorage::with_data_dir(dir)),
            StorageChoice::Platform => Box::new(
                FileStorage::new().context("failed to locate the data directory")?,
            ),
        };
        Ok(MembershipStore::load(storage))
    }

    pub async fn browse(&self, scope: CatalogScope, listing: Listing) -> Result<()> {
        let filters = listing.filters(FilterConfig::default());
        let mut view =
            CollectionViewModel::new(self.client.clone(), scope, filters);

        if let Applied::Failed = view.load_first_page().await {
            bail!(view_error(view.state().error()));
        }
        for _ in 1..listing.pages {
            match view.load_more().await {
                None => break,
                Some(Applied::Failed) => bail!(view_error(view.state().error())),
                Some(_) => {}
            }
        }
        info!(
            scope = scope.label(),
            items = view.items().len(),
            pages = view.pages_loaded(),
            "Listing loaded"
        );

        if self.json {
            return print_json(&json!({
                "scope": scope,
                "filters": view.filters(),
                "titles": view.items(),
                "nextPageToken": view.page_token(),
            }));
        }

        let active = view.filters().active_count();
        let mut header = format!("{} · {} titles", scope.label(), view.items().len());
        if active > 0 {
            header.push_str(&format!(" · {active} filter(s) active"));
        }
        println!("{header}");
        self.print_rows(view.items());
        if view.has_more() {
            println!("… more available (use --pages {})", view.pages_loaded() + 1);
        }
        Ok(())
    }

    pub async fn search(&self, query: &str, limit: u32) -> Result<()> {
        let mut view = SearchViewModel::new(self.client.clone()).with_limit(limit);

        match view.search(query).await {
            None => bail!("search query must not be blank"),
            Some(Applied::Failed) => bail!(view_error(view.state().error())),
            Some(_) => {}
        }

        if self.json {
            return print_json(&json!({
                "query": view.query(),
                "titles": view.results(),
            }));
        }

        if view.results().is_empty() {
            println!("No titles match \"{}\".", view.query());
            return Ok(());
        }
        println!("{} result(s) for \"{}\"", view.results().len(), view.query());
        self.print_rows(view.results());
        Ok(())
    }

    pub async fn show(&self, id: &TitleId, credits: bool, images: bool) -> Result<()> {
        let detail = expect_success(
            load_title_detail(&self.client, id).await,
            &format!("failed to load {id}"),
        )?;

        if self.json {
            return print_json(&detail);
        }

        print!("{}", render::title_detail(&detail, credits, images));
        if let Ok(store) = self.open_store() {
            let marks = marks_for(&store, id);
            let lists: Vec<&str> = [
                (marks.favorite, ListKind::Favorites),
                (marks.watchlist, ListKind::Watchlist),
            ]
            .into_iter()
            .filter(|(member, _)| *member)
            .map(|(_, kind)| kind.label())
            .collect();
            if !lists.is_empty() {
                println!("\n  on your lists: {}", lists.join(", "));
            }
        }
        Ok(())
    }

    pub async fn batch(&self, ids: &[TitleId]) -> Result<()> {
        let batch = expect_success(
            self.client.get_titles_by_ids(ids).await,
            "batch lookup failed",
        )?;

        if self.json {
            return print_json(&batch.titles);
        }
        self.print_rows(&batch.titles);
        Ok(())
    }

    /// Members are removed using the stored record; new titles are fetched
    /// first so the full record is kept.
    pub async fn toggle(&self, kind: ListKind, id: &TitleId) -> Result<()> {
        let mut store = self.open_store()?;

        let title = match store.list(kind).iter().find(|entry| &entry.id == id) {
            Some(existing) => existing.clone(),
            None => expect_success(
                self.client.get_title(id).await,
                &format!("failed to fetch {id}"),
            )?,
        };
        let name = title.display_title().to_string();

        let member = store
            .toggle(kind, title)
            .with_context(|| format!("failed to update {}", kind.label().to_lowercase()))?;

        if self.json {
            return print_json(&json!({
                "list": kind,
                "id": id,
                "member": member,
            }));
        }
        if member {
            println!("Added {name} to {}.", kind.label().to_lowercase());
        } else {
            println!("Removed {name} from {}.", kind.label().to_lowercase());
        }
        Ok(())
    }

    pub fn list(&self, kind: ListKind) -> Result<()> {
        let store = self.open_store()?;
        let titles = store.list(kind);

        if self.json {
            return print_json(&titles);
        }
        if titles.is_empty() {
            println!("{}", render::empty_list(kind));
            return Ok(());
        }
        println!("{} · {} titles", kind.label(), titles.len());
        for title in titles {
            println!("{}", render::title_row(title, marks_for(&store, &title.id)));
        }
        Ok(())
    }

    pub fn clear(&self, kind: ListKind) -> Result<()> {
        let mut store = self.open_store()?;
        let removed = store.len(kind);
        store
            .clear(kind)
            .with_context(|| format!("failed to clear {}", kind.label().to_lowercase()))?;

        if self.json {
            return print_json(&json!({ "list": kind, "removed": removed }));
        }
        println!("Cleared {} ({removed} removed).", kind.label().to_lowercase());
        Ok(())
    }

    fn print_rows(&self, titles: &[Title]) {
        let store = self.open_store().ok();
        for title in titles {
            let marks = store
                .as_ref()
                .map(|store| marks_for(store, &title.id))
                .unwrap_or_default();
            println!("{}", render::title_row(title, marks));
        }
    }
}

pub fn vocab(json: bool) -> Result<()> {
    if json {
        let types: Vec<&str> = TitleType::all().iter().map(|t| t.api_name()).collect();
        let sorts: Vec<&str> = SortBy::all().iter().map(|s| s.api_name()).collect();
        let orders: Vec<&str> = SortOrder::all().iter().map(|o| o.api_name()).collect();
        return print_json(&json!({
            "titleTypes": types,
            "sortBy": sorts,
            "sortOrder": orders,
            "genres": GENRES,
        }));
    }
    print!("{}", render::vocabulary());
    Ok(())
}

fn marks_for(store: &Store, id: &TitleId) -> Marks {
    Marks {
        favorite: store.contains(ListKind::Favorites, id),
        watchlist: store.contains(ListKind::Watchlist, id),
    }
}

fn expect_success<T>(result: ApiResult<T>, what: &str) -> Result<T> {
    result
        .into_result()
        .map_err(|message| anyhow!("{what}: {message}"))
}

fn view_error(message: Option<&str>) -> String {
    message.unwrap_or("request failed").to_string()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to encode JSON")?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flags_keep_defaults() {
        let base = FilterConfig::for_year(2025);
        let filters = Listing {
            pages: 1,
            ..Listing::default()
        }
        .filters(base.clone());
        assert_eq!(filters, base);
    }

    #[test]
    fn flags_map_onto_filter_fields() {
        let listing = Listing {
            types: vec![TitleType::TvSeries, TitleType::TvSeries],
            genres: vec!["sci-fi".into(), "Drama".into()],
            sort_by: Some(SortBy::Year),
            sort_order: Some(SortOrder::Asc),
            min_rating: Some(7.0),
            min_year: Some(1990),
            max_year: None,
            pages: 1,
        };

        let filters = listing.filters(FilterConfig::for_year(2025));
        assert_eq!(filters.types.len(), 1);
        assert!(filters.genres.contains("Sci-Fi"));
        assert!(filters.genres.contains("Drama"));
        assert_eq!(filters.sort_by, SortBy::Year);
        assert_eq!(filters.sort_order, SortOrder::Asc);
        assert_eq!(filters.min_rating, 7.0);
        assert_eq!(filters.min_year, 1990);
        assert_eq!(filters.max_year, 2025);
        assert_eq!(filters.active_count(), 4);
    }

    #[test]
    fn unknown_genres_pass_through_trimmed() {
        assert_eq!(canonical_genre("  Mockumentary "), "Mockumentary");
        assert_eq!(canonical_genre("sci-fi"), "Sci-Fi");
    }
}
