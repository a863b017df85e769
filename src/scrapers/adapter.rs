//! The shared extraction algorithm every site adapter runs.
//!
//! A [`SiteAdapter`] is plain data: a CSS selector for candidate elements,
//! a [`FieldRule`] for the title, a [`FieldRule`] for the link and a
//! [`LinkRule`] describing how hrefs become absolute URLs. All sites share
//! [`SiteAdapter::extract`], which:
//!
//! 1. Selects at most `max_candidates` candidate elements in document order
//! 2. Reads a title and a link from each, skipping candidates missing either
//! 3. Drops candidates whose normalized title was already accepted
//! 4. Stops once `max_records` headlines have been accepted
//!
//! Extraction never fails. A missing document, a bad selector or a page with
//! no matching elements all produce an empty [`ResultSet`].

use crate::models::{ColumnLabels, HeadlineRecord, ResultSet};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

/// Whitespace runs containing at least one line break.
static LINE_BREAK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[\r\n]+\s*").unwrap());

/// Caps applied to every extraction.
///
/// `max_candidates` bounds how many elements are inspected at all;
/// `max_records` bounds how many headlines are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionLimits {
    pub max_candidates: usize,
    pub max_records: usize,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self {
            max_candidates: 10,
            max_records: 5,
        }
    }
}

/// Where a field's value comes from once its element has been found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// All text nodes below the element, concatenated.
    Text,
    /// The value of the named attribute.
    Attr(&'static str),
}

/// How to read one field out of a candidate element.
///
/// `path` is walked one selector at a time, each step taking the first
/// matching descendant of the previous element. An empty path reads the
/// candidate itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub path: &'static [&'static str],
    pub source: FieldSource,
}

impl FieldRule {
    /// Text of the first element reached through `path`.
    pub const fn text(path: &'static [&'static str]) -> Self {
        Self {
            path,
            source: FieldSource::Text,
        }
    }

    /// Attribute `name` of the first element reached through `path`.
    pub const fn attr(path: &'static [&'static str], name: &'static str) -> Self {
        Self {
            path,
            source: FieldSource::Attr(name),
        }
    }

    fn read(&self, candidate: ElementRef<'_>, steps: &[Selector]) -> Option<String> {
        let mut current = candidate;
        for step in steps {
            current = current.select(step).next()?;
        }
        match self.source {
            FieldSource::Text => Some(current.text().collect::<String>()),
            FieldSource::Attr(name) => current.value().attr(name).map(str::to_string),
        }
    }
}

/// How a scraped href is turned into an absolute URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRule {
    /// The site publishes absolute links; stray relative ones are joined
    /// onto the page URL.
    Absolute,
    /// The site publishes relative links that belong under this base.
    Prefixed(&'static str),
}

impl LinkRule {
    /// Resolve `href` found on `page_url`, or `None` if no absolute URL results.
    pub fn resolve(&self, page_url: &str, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        if let Some(rest) = href.strip_prefix("//") {
            return Some(format!("https://{rest}"));
        }
        if let Ok(parsed) = Url::parse(href) {
            return matches!(parsed.scheme(), "http" | "https").then(|| href.to_string());
        }

        match self {
            LinkRule::Prefixed(base) => Some(format!(
                "{}/{}",
                base.trim_end_matches('/'),
                href.trim_start_matches('/')
            )),
            LinkRule::Absolute => Url::parse(page_url)
                .ok()?
                .join(href)
                .ok()
                .map(|url| url.to_string()),
        }
    }
}

/// Collapse every whitespace run containing a line break into a single
/// space and trim. Returns `None` when nothing is left.
pub fn normalize_title(raw: &str) -> Option<String> {
    let collapsed = LINE_BREAK_RUN.replace_all(raw, " ");
    let trimmed = collapsed.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// One news site's extraction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteAdapter {
    /// Key used in subscriber configuration and the aggregate (e.g. `"vg"`).
    pub site_id: &'static str,
    /// Display name, used as the first column label.
    pub label: &'static str,
    /// Front page to fetch.
    pub url: &'static str,
    /// CSS selector matching candidate elements.
    pub candidates: &'static str,
    pub title: FieldRule,
    pub link: FieldRule,
    pub link_rule: LinkRule,
}

/// Selectors parsed once per extraction.
struct Compiled {
    candidates: Selector,
    title: Vec<Selector>,
    link: Vec<Selector>,
}

impl SiteAdapter {
    pub fn labels(&self) -> ColumnLabels {
        ColumnLabels::for_site(self.label)
    }

    fn compile(&self) -> Result<Compiled, String> {
        let parse = |css: &'static str| Selector::parse(css).map_err(|e| format!("{css}: {e}"));
        let parse_path =
            |path: &'static [&'static str]| path.iter().map(|&css| parse(css)).collect::<Result<Vec<_>, _>>();

        Ok(Compiled {
            candidates: parse(self.candidates)?,
            title: parse_path(self.title.path)?,
            link: parse_path(self.link.path)?,
        })
    }

    fn read_candidate(&self, candidate: ElementRef<'_>, compiled: &Compiled) -> Option<HeadlineRecord> {
        let title = self
            .title
            .read(candidate, &compiled.title)
            .and_then(|raw| normalize_title(&raw));
        let link = self
            .link
            .read(candidate, &compiled.link)
            .and_then(|href| self.link_rule.resolve(self.url, &href));

        match (title, link) {
            (Some(title), Some(link)) => Some(HeadlineRecord { title, link }),
            (title, link) => {
                debug!(
                    site = self.site_id,
                    has_title = title.is_some(),
                    has_link = link.is_some(),
                    "Skipping malformed candidate"
                );
                None
            }
        }
    }

    /// Extract this site's headlines from a parsed front page.
    ///
    /// `None` stands for a page that could not be fetched and yields an
    /// empty [`ResultSet`]. Titles are deduplicated within this call only.
    pub fn extract(&self, document: Option<&Html>, limits: &ExtractionLimits) -> ResultSet {
        let Some(document) = document else {
            return ResultSet::empty(self.site_id, self.labels());
        };

        let compiled = match self.compile() {
            Ok(compiled) => compiled,
            Err(e) => {
                warn!(site = self.site_id, error = %e, "Invalid selector; site yields no headlines");
                return ResultSet::empty(self.site_id, self.labels());
            }
        };

        let records: Vec<HeadlineRecord> = document
            .select(&compiled.candidates)
            .take(limits.max_candidates)
            .filter_map(|candidate| self.read_candidate(candidate, &compiled))
            .unique_by(|record| record.title.clone())
            .take(limits.max_records)
            .collect();

        debug!(site = self.site_id, count = records.len(), "Extracted headlines");
        ResultSet {
            site_id: self.site_id.to_string(),
            labels: self.labels(),
            records,
        }
    }
}
