//! [Haugesunds Avis](https://www.h-avis.no/avaldsnes/), Avaldsnes section.
//!
//! Teasers are `<article class="teaser_container">` with an `<h2>` headline
//! that often wraps across lines. Links are relative to the section.

use super::adapter::{FieldRule, LinkRule, SiteAdapter};

pub const ADAPTER: SiteAdapter = SiteAdapter {
    site_id: "h_avis",
    label: "Haugesunds Avis - Avaldsnes",
    url: "https://www.h-avis.no/avaldsnes/",
    candidates: "article.teaser_container",
    title: FieldRule::text(&["h2"]),
    link: FieldRule::attr(&["a"], "href"),
    link_rule: LinkRule::Prefixed("https://www.h-avis.no/avaldsnes"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::adapter::ExtractionLimits;
    use scraper::Html;

    #[test]
    fn test_h_avis_wrapped_headline_and_relative_link() {
        let doc = Html::parse_document(
            r#"<div>
                <article class="teaser_container">
                    <a href="/nyheter/brann-i-sentrum/s/5-1"><h2>Brann i
                    sentrum</h2></a>
                </article>
                <article class="teaser_container"><h2>Uten lenke</h2></article>
            </div>"#,
        );

        let set = ADAPTER.extract(Some(&doc), &ExtractionLimits::default());
        assert_eq!(set.len(), 1);
        assert_eq!(set.records[0].title, "Brann i sentrum");
        assert_eq!(
            set.records[0].link,
            "https://www.h-avis.no/avaldsnes/nyheter/brann-i-sentrum/s/5-1"
        );
        assert_eq!(set.labels.site, "Haugesunds Avis - Avaldsnes");
    }
}
