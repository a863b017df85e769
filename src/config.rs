//! YAML configuration: mail settings, extraction limits and subscribers.
//!
//! ```yaml
//! mail:
//!   sender: news@example.com
//!   server: smtp.example.com
//! limits:
//!   max_records: 5
//! subscribers:
//!   per:
//!     email: per@example.com
//!     newspapers:
//!       dagen: 3
//!       vg: 5
//! ```
//!
//! A subscriber's `newspapers` mapping (alias `wants`) keeps the order it is
//! written in, since that is the order of sections in their digest.

use crate::error::ConfigError;
use crate::models::SubscriberPreference;
use crate::scrapers::{self, adapter::ExtractionLimits};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub limits: ExtractionLimits,
    /// Subscribers keyed by subscriber id.
    #[serde(default)]
    pub subscribers: BTreeMap<String, SubscriberEntry>,
}

/// Outgoing mail settings and the fixed parts of every digest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// `From:` address, also the default SMTP login.
    pub sender: String,
    /// SMTP relay host.
    pub server: String,
    /// SMTP submission port (STARTTLS).
    pub port: u16,
    pub subject: String,
    /// Heading shown above the tables, followed by the date.
    pub heading: String,
    pub footer: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            sender: String::new(),
            server: String::new(),
            port: 587,
            subject: "Nyheter".to_string(),
            heading: "Dagens Nyheter".to_string(),
            footer: "Ha en fin dag.".to_string(),
        }
    }
}

/// One subscriber as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubscriberEntry {
    pub email: String,
    #[serde(alias = "wants", deserialize_with = "ordered_counts")]
    pub newspapers: Vec<(String, usize)>,
}

/// Deserialize a `site: count` mapping into pairs, keeping document order.
///
/// Counts below zero are clamped to zero.
fn ordered_counts<'de, D>(deserializer: D) -> Result<Vec<(String, usize)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedCounts;

    impl<'de> Visitor<'de> for OrderedCounts {
        type Value = Vec<(String, usize)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a mapping of site id to headline count")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut counts = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((site, count)) = map.next_entry::<String, i64>()? {
                counts.push((site, usize::try_from(count.max(0)).unwrap_or(usize::MAX)));
            }
            Ok(counts)
        }
    }

    deserializer.deserialize_map(OrderedCounts)
}

impl AppConfig {
    /// Parse a configuration document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse the configuration file at `path`.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml(&yaml)?;
        info!(subscribers = config.subscribers.len(), "Loaded configuration");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (id, entry) in &self.subscribers {
            if entry.email.trim().is_empty() {
                return Err(ConfigError::invalid(format!("subscriber '{id}' has no email")));
            }
        }
        Ok(())
    }

    /// Subscribers as fan-out input, ordered by subscriber id.
    pub fn preferences(&self) -> Vec<SubscriberPreference> {
        self.subscribers
            .iter()
            .map(|(id, entry)| SubscriberPreference {
                subscriber_id: id.clone(),
                email: entry.email.trim().to_string(),
                wants: entry.newspapers.clone(),
            })
            .collect()
    }

    /// Warn about requested sites that no adapter provides.
    ///
    /// They are not an error: fan-out treats them like sites that produced
    /// nothing this run.
    pub fn warn_unknown_sites(&self) -> usize {
        let mut unknown = 0;
        for (id, entry) in &self.subscribers {
            for (site, _) in &entry.newspapers {
                if scrapers::find(site).is_none() {
                    warn!(subscriber = %id, site = %site, "Subscriber requests an unknown site");
                    unknown += 1;
                }
            }
        }
        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
mail:
  sender: news@example.com
  server: smtp.example.com
limits:
  max_records: 4
subscribers:
  per:
    email: per@example.com
    newspapers:
      vg: 5
      dagen: 3
      wsj: -2
      nrk: 1
  anne:
    email: " anne@example.com "
    wants:
      jerusalem: 2
"#;

    #[test]
    fn test_parse_sample() {
        let config = AppConfig::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.mail.sender, "news@example.com");
        assert_eq!(config.mail.port, 587);
        assert_eq!(config.mail.subject, "Nyheter");
        assert_eq!(config.limits.max_records, 4);
        assert_eq!(config.limits.max_candidates, 10);
        assert_eq!(config.subscribers.len(), 2);
    }

    #[test]
    fn test_newspapers_keep_document_order_and_clamp_negatives() {
        let config = AppConfig::from_yaml(SAMPLE).unwrap();
        let per = &config.subscribers["per"];
        assert_eq!(
            per.newspapers,
            vec![
                ("vg".to_string(), 5),
                ("dagen".to_string(), 3),
                ("wsj".to_string(), 0),
                ("nrk".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_preferences_sorted_by_id_with_trimmed_email() {
        let prefs = AppConfig::from_yaml(SAMPLE).unwrap().preferences();
        let ids: Vec<&str> = prefs.iter().map(|p| p.subscriber_id.as_str()).collect();
        assert_eq!(ids, vec!["anne", "per"]);
        assert_eq!(prefs[0].email, "anne@example.com");
        assert_eq!(prefs[0].wants, vec![("jerusalem".to_string(), 2)]);
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let yaml = "subscribers:\n  ghost:\n    email: ''\n    newspapers:\n      vg: 1\n";
        let err = AppConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert!(config.subscribers.is_empty());
        assert_eq!(config.limits, ExtractionLimits::default());
        assert_eq!(config.mail, MailConfig::default());
    }

    #[test]
    fn test_unknown_sites_are_counted() {
        let config = AppConfig::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.warn_unknown_sites(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
