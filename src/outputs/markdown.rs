//! Markdown rendering of the aggregate for the console preview.
//!
//! Each site becomes a two-column table headed by its column labels, in
//! the order the aggregate lists them.

use crate::aggregate::Aggregate;
use crate::models::ResultSet;

/// Escape characters that would break a table cell.
fn cell(text: &str) -> String {
    text.replace('\\', "\\\\").replace('|', "\\|")
}

/// Render one site's headlines as a Markdown table.
pub fn result_set_to_markdown(set: &ResultSet) -> String {
    let mut md = format!(
        "| {} | {} |\n|---|---|\n",
        cell(&set.labels.site),
        cell(&set.labels.link)
    );
    for record in &set.records {
        md.push_str(&format!("| {} | {} |\n", cell(&record.title), cell(&record.link)));
    }
    md
}

/// Render every site in the aggregate, one table after another.
pub fn aggregate_to_markdown(aggregate: &Aggregate) -> String {
    aggregate
        .iter()
        .map(result_set_to_markdown)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColumnLabels, HeadlineRecord};

    fn set(site: &str, titles: &[&str]) -> ResultSet {
        ResultSet {
            site_id: site.to_lowercase(),
            labels: ColumnLabels::for_site(site),
            records: titles
                .iter()
                .map(|t| HeadlineRecord {
                    title: t.to_string(),
                    link: format!("https://example.com/{}", t.len()),
                })
                .collect(),
        }
    }

    #[test]
    fn test_result_set_table() {
        let md = result_set_to_markdown(&set("VG", &["Hei", "A | B"]));
        assert_eq!(
            md,
            "| VG | Link |\n|---|---|\n| Hei | https://example.com/3 |\n| A \\| B | https://example.com/5 |\n"
        );
    }

    #[test]
    fn test_aggregate_tables_in_order() {
        let mut aggregate = Aggregate::default();
        aggregate.insert(set("Dagen", &["En"]));
        aggregate.insert(set("VG", &["To"]));

        let md = aggregate_to_markdown(&aggregate);
        let dagen = md.find("| Dagen | Link |").unwrap();
        let vg = md.find("| VG | Link |").unwrap();
        assert!(dagen < vg);
    }

    #[test]
    fn test_empty_aggregate() {
        assert_eq!(aggregate_to_markdown(&Aggregate::default()), "");
    }
}
