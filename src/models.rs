//! Data models shared by the scrapers, the aggregate and the subscriber fan-out.
//!
//! This module defines the core data structures used throughout the application:
//! - [`HeadlineRecord`]: One headline/link pair pulled from a front page
//! - [`ColumnLabels`]: The two column headers a site's table is presented with
//! - [`ResultSet`]: One site's capped, deduplicated headlines for the current run
//! - [`SubscriberPreference`]: Which sites a subscriber follows and how many headlines each
//! - [`SubscriberDigest`]: The per-subscriber slice of the aggregate, ready for rendering
//!
//! Nothing here outlives a single run; each run is a fresh, stateless pass.

use serde::Serialize;

/// A single headline scraped from a news front page.
///
/// # Fields
///
/// * `title` - Whitespace-normalized, non-empty headline text
/// * `link` - Absolute URL of the story
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineRecord {
    /// The normalized headline text.
    pub title: String,
    /// The absolute URL the headline points to.
    pub link: String,
}

/// Column headers used when a site's headlines are presented as a table.
///
/// The first label names the site; the second is always `"Link"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnLabels {
    pub site: String,
    pub link: String,
}

impl ColumnLabels {
    /// Build the labels for a site, pairing its display name with `"Link"`.
    pub fn for_site(site_label: &str) -> Self {
        Self {
            site: site_label.to_string(),
            link: "Link".to_string(),
        }
    }
}

/// One site's extracted headlines for the current run.
///
/// Built once by an extraction adapter and never mutated afterwards; the
/// fan-out only reads and copies prefixes of `records`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    /// The site identifier this set was extracted for (e.g. `"vg"`).
    pub site_id: String,
    /// Column headers used for presentation.
    pub labels: ColumnLabels,
    /// Headlines in document order, unique by title.
    pub records: Vec<HeadlineRecord>,
}

impl ResultSet {
    /// An empty result for a site, used when its page was unavailable.
    pub fn empty(site_id: &str, labels: ColumnLabels) -> Self {
        Self {
            site_id: site_id.to_string(),
            labels,
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A subscriber's wishes: where to send the digest and what to put in it.
///
/// `wants` keeps the order the subscriber listed their sites in, which is
/// also the order the digest sections appear in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberPreference {
    pub subscriber_id: String,
    pub email: String,
    /// `(site_id, desired_count)` pairs in configuration order.
    pub wants: Vec<(String, usize)>,
}

/// One section of a digest: a site's labels plus the headlines taken from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestSection {
    pub labels: ColumnLabels,
    pub records: Vec<HeadlineRecord>,
}

/// The per-subscriber projection of the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberDigest {
    pub subscriber_id: String,
    pub email: String,
    pub sections: Vec<DigestSection>,
}

impl SubscriberDigest {
    /// `true` when none of the requested sites had anything to offer.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_labels_for_site() {
        let labels = ColumnLabels::for_site("Wall Street Journal");
        assert_eq!(labels.site, "Wall Street Journal");
        assert_eq!(labels.link, "Link");
    }

    #[test]
    fn test_empty_result_set() {
        let set = ResultSet::empty("vg", ColumnLabels::for_site("VG"));
        assert_eq!(set.site_id, "vg");
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_result_set_serialization() {
        let set = ResultSet {
            site_id: "dagen".to_string(),
            labels: ColumnLabels::for_site("Dagen"),
            records: vec![HeadlineRecord {
                title: "Nyhet".to_string(),
                link: "https://www.dagen.no/nyhet".to_string(),
            }],
        };

        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"site_id\":\"dagen\""));
        assert!(json.contains("https://www.dagen.no/nyhet"));
    }

    #[test]
    fn test_digest_is_empty_without_sections() {
        let digest = SubscriberDigest {
            subscriber_id: "per".to_string(),
            email: "per@example.com".to_string(),
            sections: vec![],
        };
        assert!(digest.is_empty());
    }
}
