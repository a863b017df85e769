//! Run-wide collection of every site's headlines.
//!
//! [`build_aggregate`] fetches each registered front page, runs its adapter
//! and keeps the non-empty results in an [`Aggregate`]. A site whose fetch
//! fails or whose page yields nothing is simply absent; it never stops the
//! other sites from being processed.
//!
//! The aggregate is built completely before any subscriber is served and is
//! read-only from then on.

use crate::fetcher::PageFetcher;
use crate::models::ResultSet;
use crate::scrapers::adapter::{ExtractionLimits, SiteAdapter};
use futures::stream::{self, StreamExt};
use reqwest::header::HeaderMap;
use scraper::Html;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Mapping from site id to that site's [`ResultSet`].
///
/// Only sites with at least one headline are present. Iteration follows
/// insertion order, which [`build_aggregate`] keeps equal to registry order.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    sets: HashMap<String, ResultSet>,
    order: Vec<String>,
}

impl Aggregate {
    /// Add a site's result. Empty results are dropped and `false` is returned.
    pub fn insert(&mut self, set: ResultSet) -> bool {
        if set.is_empty() {
            return false;
        }
        if !self.sets.contains_key(&set.site_id) {
            self.order.push(set.site_id.clone());
        }
        self.sets.insert(set.site_id.clone(), set);
        true
    }

    pub fn get(&self, site_id: &str) -> Option<&ResultSet> {
        self.sets.get(site_id)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Result sets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ResultSet> {
        self.order.iter().filter_map(|id| self.sets.get(id))
    }

    /// Total number of headlines across all sites.
    pub fn headline_count(&self) -> usize {
        self.sets.values().map(ResultSet::len).sum()
    }
}

/// Fetch and extract every adapter's front page.
///
/// Up to `concurrency` fetches are in flight at once; results are consumed
/// in `adapters` order, so the outcome does not depend on which request
/// finishes first.
#[instrument(level = "info", skip_all, fields(sites = adapters.len(), concurrency = concurrency))]
pub async fn build_aggregate<F: PageFetcher>(
    adapters: &[SiteAdapter],
    fetcher: &F,
    headers: &HeaderMap,
    limits: &ExtractionLimits,
    concurrency: usize,
) -> Aggregate {
    let pages: Vec<(&SiteAdapter, Option<String>)> = stream::iter(adapters)
        .map(|adapter| async move {
            match fetcher.fetch(adapter.url, headers).await {
                Ok(body) => (adapter, Some(body)),
                Err(e) => {
                    warn!(
                        site = adapter.site_id,
                        url = adapter.url,
                        error = %e,
                        "Fetch failed; site contributes no headlines"
                    );
                    (adapter, None)
                }
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut aggregate = Aggregate::default();
    for (adapter, body) in pages {
        let document = body.as_deref().map(Html::parse_document);
        let set = adapter.extract(document.as_ref(), limits);
        let count = set.len();
        if aggregate.insert(set) {
            info!(site = adapter.site_id, count, "Collected headlines");
        } else {
            debug!(site = adapter.site_id, "No headlines; site omitted");
        }
    }

    info!(
        sites = aggregate.len(),
        headlines = aggregate.headline_count(),
        "Aggregate built"
    );
    aggregate
}
