//! Subscriber fan-out: projecting the shared aggregate into digests.
//!
//! Each subscriber gets, for every site they asked for and in the order
//! they asked, the first `min(desired, available)` headlines of that site.
//! Sites missing from the aggregate are skipped silently. The aggregate is
//! only read, so subscribers can be served in any order.

use crate::aggregate::Aggregate;
use crate::models::{DigestSection, SubscriberDigest, SubscriberPreference};
use tracing::debug;

/// Build one subscriber's digest from the aggregate.
pub fn build_digest(preference: &SubscriberPreference, aggregate: &Aggregate) -> SubscriberDigest {
    let sections = preference
        .wants
        .iter()
        .filter_map(|(site_id, desired)| {
            let Some(set) = aggregate.get(site_id) else {
                debug!(subscriber = %preference.subscriber_id, site = %site_id, "Site unavailable this run");
                return None;
            };
            let take = (*desired).min(set.len());
            // A zero count yields no section rather than an empty table, so a
            // subscriber who only asks for zero headlines gets no mail at all.
            (take > 0).then(|| DigestSection {
                labels: set.labels.clone(),
                records: set.records[..take].to_vec(),
            })
        })
        .collect();

    SubscriberDigest {
        subscriber_id: preference.subscriber_id.clone(),
        email: preference.email.clone(),
        sections,
    }
}
