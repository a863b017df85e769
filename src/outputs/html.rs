//! HTML mail body for a subscriber digest.
//!
//! Layout: a dated heading, one two-column table per section (site label
//! and `Link` as headers) and a footer line. All scraped text is escaped
//! before it is embedded.

use super::{DigestRenderer, RenderedDigest};
use crate::config::MailConfig;
use crate::models::{DigestSection, SubscriberDigest};
use chrono::NaiveDate;
use html_escape::{encode_double_quoted_attribute, encode_text};

const CSS: &str = r#"<style>
table {
    border-collapse: collapse;
    margin-bottom: 20px;
}
th, td {
    padding: 8px;
    text-align: left;
}
th {
    background-color: #dddddd;
}
td {
    border: 1px solid #dddddd;
}
td:first-child {
    width: 30%;
}
td:last-child {
    width: 80%;
}
</style>"#;

/// Renders digests as a single HTML document.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    subject: String,
    heading: String,
    footer: String,
    date: NaiveDate,
}

impl HtmlRenderer {
    /// Renderer for digests sent on `date`, with texts taken from `mail`.
    pub fn new(mail: &MailConfig, date: NaiveDate) -> Self {
        Self {
            subject: mail.subject.clone(),
            heading: mail.heading.clone(),
            footer: mail.footer.clone(),
            date,
        }
    }

    fn section_table(section: &DigestSection) -> String {
        let mut table = String::from("<table border=\"1\">\n<thead>\n<tr>");
        table.push_str(&format!(
            "<th>{}</th><th>{}</th>",
            encode_text(&section.labels.site),
            encode_text(&section.labels.link)
        ));
        table.push_str("</tr>\n</thead>\n<tbody>\n");

        for record in &section.records {
            table.push_str(&format!(
                "<tr><td>{}</td><td><a href=\"{}\">{}</a></td></tr>\n",
                encode_text(&record.title),
                encode_double_quoted_attribute(&record.link),
                encode_text(&record.link)
            ));
        }

        table.push_str("</tbody>\n</table>\n");
        table
    }
}

impl DigestRenderer for HtmlRenderer {
    fn render(&self, digest: &SubscriberDigest) -> RenderedDigest {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(CSS);
        html.push_str("\n</head>\n<body>\n");
        html.push_str(&format!(
            "<h2>{} {}</h2><br>\n",
            encode_text(&self.heading),
            self.date.format("%d.%m.%Y")
        ));

        for section in &digest.sections {
            html.push_str(&Self::section_table(section));
        }

        html.push_str(&format!("<h3><br>{}</h3>\n", encode_text(&self.footer)));
        html.push_str("</body>\n</html>\n");

        RenderedDigest {
            subject: self.subject.clone(),
            html,
        }
    }
}
