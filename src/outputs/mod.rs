//! Everything that turns headlines into something a person reads.
//!
//! # Submodules
//!
//! - [`html`]: Renders a [`SubscriberDigest`] as an HTML mail body
//! - [`markdown`]: Renders the aggregate as Markdown tables for the console preview
//! - [`json`]: Writes a JSON snapshot of the aggregate
//!
//! The delivery layer only depends on the [`DigestRenderer`] trait, so the
//! concrete format can change without touching fan-out or delivery.

pub mod html;
pub mod json;
pub mod markdown;

use crate::models::SubscriberDigest;

/// A digest ready to hand to a delivery channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDigest {
    pub subject: String,
    pub html: String,
}

/// Turns a subscriber's digest into a message body.
pub trait DigestRenderer {
    fn render(&self, digest: &SubscriberDigest) -> RenderedDigest;
}
