use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::NewsItem;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
    /// Slug of a single article to open.
    pub article: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFeed {
    pub items: Vec<NewsItem>,
    pub categories: Vec<String>,
}

/// Platform news, newest first, optionally narrowed to one category.
pub fn news_feed(catalog: &Catalog, category: Option<&str>) -> NewsFeed {
    let mut items: Vec<NewsItem> = catalog
        .news
        .iter()
        .filter(|n| match category.filter(|c| !c.is_empty()) {
            Some(c) => n.category.eq_ignore_ascii_case(c),
            None => true,
        })
        .cloned()
        .collect();
    items.sort_by(|a, b| b.published.cmp(&a.published));

    let mut categories: Vec<String> = catalog.news.iter().map(|n| n.category.clone()).collect();
    categories.sort();
    categories.dedup();

    NewsFeed { items, categories }
}

pub fn article(catalog: &Catalog, slug: &str) -> Option<NewsItem> {
    catalog.news_article(slug).cloned()
}
