//! [Wall Street Journal](https://www.wsj.com) front page.
//!
//! Headline and link both come from the first anchor of each `<article>`.

use super::adapter::{FieldRule, LinkRule, SiteAdapter};

pub const ADAPTER: SiteAdapter = SiteAdapter {
    site_id: "wsj",
    label: "Wall Street Journal",
    url: "https://www.wsj.com",
    candidates: "article",
    title: FieldRule::text(&["a"]),
    link: FieldRule::attr(&["a"], "href"),
    link_rule: LinkRule::Absolute,
};
