//! [VG](https://www.vg.no/) front page.
//!
//! Stories sit in `div.article-container`; the `<h2>` headline is split over
//! several lines in the markup.

use super::adapter::{FieldRule, LinkRule, SiteAdapter};

pub const ADAPTER: SiteAdapter = SiteAdapter {
    site_id: "vg",
    label: "VG",
    url: "https://www.vg.no/",
    candidates: "div.article-container",
    title: FieldRule::text(&["h2"]),
    link: FieldRule::attr(&["a"], "href"),
    link_rule: LinkRule::Absolute,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::adapter::ExtractionLimits;
    use scraper::Html;

    #[test]
    fn test_vg_multiline_headline() {
        let doc = Html::parse_document(
            r#"<body>
                <div class="article-container">
                    <a href="https://www.vg.no/nyheter/i/abc">
                        <h2><span>Regjeringen</span>
                        <span>legger fram budsjett</span></h2>
                    </a>
                </div>
            </body>"#,
        );

        let set = ADAPTER.extract(Some(&doc), &ExtractionLimits::default());
        assert_eq!(set.len(), 1);
        assert_eq!(set.records[0].title, "Regjeringen legger fram budsjett");
        assert_eq!(set.records[0].link, "https://www.vg.no/nyheter/i/abc");
    }
}
