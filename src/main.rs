mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use roamer::config::RoamerConfig;
use roamer::format::{format_count, format_duration, format_published};
use roamer::sort::{page_count, paginate, sort_items, SortOrder};
use roamer::types::{ContentItem, FilterCriteria};
use roamer::Roamer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs to stderr; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = RoamerConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    let roamer = Roamer::open(config).await?;

    match cli.command {
        Commands::List { kind, country, tags, search, sort, page, per_page, json } => {
            let criteria = FilterCriteria::default()
                .with_kind(kind)
                .with_country(country)
                .with_tags(tags)
                .with_search(search);
            let per_page = per_page.unwrap_or(roamer.config().per_page);
            let (window, total) = list_page(&roamer, &criteria, sort, page, per_page);

            if json {
                println!("{}", serde_json::to_string_pretty(&window)?);
                return Ok(());
            }
            for item in &window {
                println!("{}", item_line(&roamer, item));
            }
            println!("-- {} matching, page {} of {}", total, page, page_count(total, per_page).max(1));
        }
        Commands::Countries => {
            for c in roamer.countries() {
                println!("{}", c);
            }
        }
        Commands::Tags { limit } => {
            let tags = match limit {
                Some(n) => roamer.popular_tags_limit(n),
                None => roamer.popular_tags(),
            };
            for t in tags {
                println!("{}", t);
            }
        }
        Commands::Stats => {
            let s = roamer.stats();
            println!("items:        {}", s.total_items);
            println!("  long-form:  {}", s.long_form);
            println!("  short-form: {}", s.short_form);
            println!("countries:    {}", s.countries);
            println!("tags:         {}", s.distinct_tags);
            println!("views:        {}", format_count(s.total_views));
        }
    }
    Ok(())
}

/// Filter, then sort, then cut one page. Returns the page and the match count.
fn list_page<'a>(
    roamer: &'a Roamer,
    criteria: &FilterCriteria,
    sort: SortOrder,
    page: usize,
    per_page: usize,
) -> (Vec<&'a ContentItem>, usize) {
    let mut items = roamer.filter(criteria);
    sort_items(&mut items, sort);
    (paginate(&items, page, per_page).to_vec(), items.len())
}

fn item_line(roamer: &Roamer, item: &ContentItem) -> String {
    format!(
        "{:<44} {:<10} {:<12} {:>7} views  {:>8}  {}",
        item.title,
        item.kind,
        roamer.country_of(item).unwrap_or("-"),
        format_count(item.view_count),
        format_duration(item.duration_seconds),
        format_published(item.published_at.as_deref()),
    )
}
