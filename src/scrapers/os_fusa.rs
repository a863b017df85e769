//! [Os og Fusa Posten](https://www.osogfusa.no/) front page.
//!
//! Same teaser markup as Dagen: `article.teaser`, `<h3>` headline, absolute
//! link on the first anchor.

use super::adapter::{FieldRule, LinkRule, SiteAdapter};

pub const ADAPTER: SiteAdapter = SiteAdapter {
    site_id: "os_fusa",
    label: "Os og Fusa Posten",
    url: "https://www.osogfusa.no/",
    candidates: "article.teaser",
    title: FieldRule::text(&["h3"]),
    link: FieldRule::attr(&["a"], "href"),
    link_rule: LinkRule::Absolute,
};
