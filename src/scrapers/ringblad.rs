//! [Ringerikes Blad](https://www.ringblad.no/) front page.
//!
//! Plain `<article>` elements with an `<h2>` headline and a site-relative
//! link on the first anchor.

use super::adapter::{FieldRule, LinkRule, SiteAdapter};

pub const ADAPTER: SiteAdapter = SiteAdapter {
    site_id: "ringblad",
    label: "Ringerikes Blad",
    url: "https://www.ringblad.no/",
    candidates: "article",
    title: FieldRule::text(&["h2"]),
    link: FieldRule::attr(&["a"], "href"),
    link_rule: LinkRule::Prefixed("https://www.ringblad.no"),
};
