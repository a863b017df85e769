//! [Dagen](https://www.dagen.no/) front page.
//!
//! Stories are `<article class="teaser">` cards with the headline in an
//! `<h3>` and an absolute link on the first anchor.

use super::adapter::{FieldRule, LinkRule, SiteAdapter};

pub const ADAPTER: SiteAdapter = SiteAdapter {
    site_id: "dagen",
    label: "Dagen",
    url: "https://www.dagen.no/",
    candidates: "article.teaser",
    title: FieldRule::text(&["h3"]),
    link: FieldRule::attr(&["a"], "href"),
    link_rule: LinkRule::Absolute,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::adapter::ExtractionLimits;
    use scraper::Html;

    #[test]
    fn test_dagen_teasers() {
        let doc = Html::parse_document(
            r#"<main>
                <article class="teaser big">
                    <a href="https://www.dagen.no/nyheter/kirke/1"><h3>
                        Kirken samlet
                    </h3></a>
                </article>
                <article class="promo"><a href="https://www.dagen.no/annonse"><h3>Annonse</h3></a></article>
                <article class="teaser"><a href="https://www.dagen.no/nyheter/2"><h3>Valget nærmer seg</h3></a></article>
            </main>"#,
        );

        let set = ADAPTER.extract(Some(&doc), &ExtractionLimits::default());
        assert_eq!(set.site_id, "dagen");
        assert_eq!(set.len(), 2);
        assert_eq!(set.records[0].title, "Kirken samlet");
        assert_eq!(set.records[0].link, "https://www.dagen.no/nyheter/kirke/1");
        assert_eq!(set.records[1].title, "Valget nærmer seg");
    }
}
