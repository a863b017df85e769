//! [Jerusalem Post](https://www.jpost.com/breaking-news) breaking news list.
//!
//! Each item is a `div.breaking-news-link-container`; the headline lives in
//! the anchor's `title` attribute rather than its text.

use super::adapter::{FieldRule, LinkRule, SiteAdapter};

pub const ADAPTER: SiteAdapter = SiteAdapter {
    site_id: "jerusalem",
    label: "Jerusalem Post",
    url: "https://www.jpost.com/breaking-news",
    candidates: "div.breaking-news-link-container",
    title: FieldRule::attr(&["a"], "title"),
    link: FieldRule::attr(&["a"], "href"),
    link_rule: LinkRule::Absolute,
};
