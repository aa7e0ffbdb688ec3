//! Article Feed
//!
//! View state of the articles section: the currently loaded page, loading
//! and error flags, search term and pagination. Each fetch carries a
//! generation number and only the latest one may land.
//!
//! Search filters the loaded page only, never the whole catalog.

use thiserror::Error;

use crate::catalog::{self, ArticleCatalog};
use crate::models::Article;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Unavailable(String),
}

/// One page of articles as returned by a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub total_pages: u32,
}

/// Load one page from the static catalog
///
/// The error arm exists for a real backend; static data never produces it.
pub fn fetch_page(page: u32, page_size: usize) -> Result<ArticlePage, FetchError> {
    let catalog = ArticleCatalog::default();
    Ok(ArticlePage {
        articles: catalog.page(page, page_size).to_vec(),
        total_pages: catalog.total_pages(page_size),
    })
}

/// Handle for an in-flight fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFeed {
    articles: Vec<Article>,
    loading: bool,
    error: Option<String>,
    search_term: String,
    current_page: u32,
    total_pages: u32,
    generation: u64,
}

impl Default for ArticleFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleFeed {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            loading: false,
            error: None,
            search_term: String::new(),
            current_page: 1,
            total_pages: 1,
            generation: 0,
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Articles of the loaded page
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Start loading the current page
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        FetchTicket {
            generation: self.generation,
            page: self.current_page,
        }
    }

    /// Apply a fetch result; returns false if a newer fetch superseded it
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<ArticlePage, FetchError>) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "[FEED] dropping stale response for page {} (generation {} < {})",
                ticket.page,
                ticket.generation,
                self.generation
            );
            return false;
        }
        match result {
            Ok(page) => {
                self.articles = page.articles;
                self.total_pages = page.total_pages.max(1);
            }
            Err(e) => {
                log::warn!("[FEED] failed to load page {}: {}", ticket.page, e);
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Move to `page` clamped to the known range; returns whether it changed
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.total_pages);
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// Search applied to the loaded page
    pub fn visible_articles(&self) -> Vec<Article> {
        catalog::search(&self.articles, &self.search_term)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Pagination is hidden while searching or when everything fits one page
    pub fn show_pagination(&self) -> bool {
        !self.is_searching() && self.total_pages > 1
    }

    /// Numbered page buttons, `1..=min(max, total_pages)`
    pub fn page_buttons(&self, max: u32) -> Vec<u32> {
        (1..=max.min(self.total_pages)).collect()
    }

    pub fn no_results(&self) -> bool {
        self.is_searching() && self.visible_articles().is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_searching() {
            format!(
                "Showing {} of {} articles matching \"{}\"",
                self.visible_articles().len(),
                self.articles.len(),
                self.search_term
            )
        } else {
            format!(
                "Page {} of {} \u{2022} Showing {} articles",
                self.current_page,
                self.total_pages,
                self.articles.len()
            )
        }
    }
}
