//! Plain-text rendering for terminal output.

use std::fmt::Write as _;

use reelshelf_core::TitleDetail;
use reelshelf_model::{GENRES, ListKind, SortBy, SortOrder, Title, TitleType};

/// Membership markers shown next to a title row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marks {
    pub favorite: bool,
    pub watchlist: bool,
}

impl Marks {
    fn badge(&self) -> &'static str {
        match (self.favorite, self.watchlist) {
            (true, true) => "♥+",
            (true, false) => "♥ ",
            (false, true) => " +",
            (false, false) => "  ",
        }
    }
}

/// One line per title: markers, id, title, year, type, rating, genres.
pub fn title_row(title: &Title, marks: Marks) -> String {
    let mut row = format!(
        "{} {:<11} {}",
        marks.badge(),
        title.id.as_str(),
        title.display_title()
    );
    if let Some(year) = title.year_label() {
        let _ = write!(row, " ({year})");
    }
    if let Some(kind) = &title.title_type {
        let _ = write!(row, " [{}]", kind.label());
    }
    let _ = write!(row, "  ★ {}", title.display_rating());
    if !title.genres.is_empty() {
        let _ = write!(row, "  {}", title.genres.join(", "));
    }
    row
}

pub fn title_detail(detail: &TitleDetail, credits: bool, images: bool) -> String {
    let title = &detail.title;
    let mut out = String::new();

    let _ = writeln!(out, "{}", title.display_title());
    if let Some(original) = title.distinct_original_title() {
        let _ = writeln!(out, "  original title: {original}");
    }

    let mut facts = Vec::new();
    if let Some(year) = title.year_label() {
        facts.push(year);
    }
    if let Some(kind) = &title.title_type {
        facts.push(kind.label());
    }
    if let Some(minutes) = title.runtime_minutes() {
        facts.push(format!("{minutes} min"));
    }
    let votes = title
        .rating
        .as_ref()
        .and_then(|rating| rating.vote_count)
        .map(|count| format!(" ({count} votes)"))
        .unwrap_or_default();
    facts.push(format!("★ {}{votes}", title.display_rating()));
    let _ = writeln!(out, "  {}", facts.join(" · "));

    if !title.genres.is_empty() {
        let _ = writeln!(out, "  genres: {}", title.genres.join(", "));
    }
    if let Some(plot) = &title.plot {
        let _ = writeln!(out, "\n  {plot}\n");
    }

    let people = |label: &str, list: &[reelshelf_model::Person], out: &mut String| {
        if !list.is_empty() {
            let names: Vec<&str> = list.iter().map(|p| p.name()).collect();
            let _ = writeln!(out, "  {label}: {}", names.join(", "));
        }
    };
    people("directed by", &title.directors, &mut out);
    people("written by", &title.writers, &mut out);
    people("starring", &title.stars, &mut out);

    if !title.origin_countries.is_empty() {
        let names: Vec<&str> = title
            .origin_countries
            .iter()
            .map(|c| c.name.as_deref().unwrap_or(&c.code))
            .collect();
        let _ = writeln!(out, "  countries: {}", names.join(", "));
    }
    if let Some(poster) = title.poster_url() {
        let _ = writeln!(out, "  poster: {poster}");
    }

    if credits {
        let _ = writeln!(out, "\nCredits");
        if detail.credits.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for credit in &detail.credits {
            let name = credit
                .name
                .as_ref()
                .map(|person| person.name())
                .unwrap_or("?");
            let category = credit.category.as_deref().unwrap_or("credit");
            let _ = write!(out, "  {name} ({category})");
            if !credit.characters.is_empty() {
                let _ = write!(out, " as {}", credit.characters.join(" / "));
            }
            out.push('\n');
        }
    }

    if images {
        let _ = writeln!(out, "\nImages");
        if detail.images.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for image in &detail.images {
            let _ = writeln!(out, "  {}", image.url);
        }
    }

    out
}

pub fn empty_list(kind: ListKind) -> String {
    format!("Your {} is empty.", kind.label().to_lowercase())
}

pub fn vocabulary() -> String {
    let mut out = String::from("Title types:\n");
    for kind in TitleType::all() {
        let _ = writeln!(out, "  {:<16} {}", kind.api_name(), kind.label());
    }
    out.push_str("\nSort fields:\n");
    for sort in SortBy::all() {
        let _ = writeln!(out, "  {:<26} {}", sort.api_name(), sort.label());
    }
    out.push_str("\nSort orders:\n");
    for order in SortOrder::all() {
        let _ = writeln!(out, "  {:<26} {}", order.api_name(), order.label());
    }
    let _ = write!(out, "\nGenres:\n  {}\n", GENRES.join(", "));
    out
}
