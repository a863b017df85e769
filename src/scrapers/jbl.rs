//! [Jærbladet](https://www.jbl.no) front page.
//!
//! Every `<article>` wraps its headline `<h2>` inside the first anchor, and
//! the anchor's href is site-relative.

use super::adapter::{FieldRule, LinkRule, SiteAdapter};

pub const ADAPTER: SiteAdapter = SiteAdapter {
    site_id: "jbl",
    label: "Jærbladet",
    url: "https://www.jbl.no",
    candidates: "article",
    title: FieldRule::text(&["a", "h2"]),
    link: FieldRule::attr(&["a"], "href"),
    link_rule: LinkRule::Prefixed("https://www.jbl.no"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::adapter::ExtractionLimits;
    use scraper::Html;

    #[test]
    fn test_jbl_headline_inside_first_anchor() {
        let doc = Html::parse_document(
            r#"<body>
                <article><a href="/nyheter/s/5-2"><h2>Ny skole på Bryne</h2></a></article>
                <article><a href="/sport/s/5-3"><span>Bare bilde</span></a><h2>Utenfor lenken</h2></article>
            </body>"#,
        );

        let set = ADAPTER.extract(Some(&doc), &ExtractionLimits::default());
        assert_eq!(set.len(), 1);
        assert_eq!(set.records[0].title, "Ny skole på Bryne");
        assert_eq!(set.records[0].link, "https://www.jbl.no/nyheter/s/5-2");
    }
}
