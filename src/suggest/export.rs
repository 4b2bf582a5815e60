//! Downloadable suggestions report.

use std::io;

use serde::Serialize;

use crate::emissions::Category;
use crate::error::Result;

use super::SuggestionSet;

#[derive(Serialize)]
struct SuggestionRow<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Suggestions")]
    suggestions: String,
}

impl SuggestionSet {
    /// Write the suggestions report as CSV.
    ///
    /// One row for the priority actions, then one per category; each cell
    /// joins its lines with newlines. Empty categories export an empty cell.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.serialize(SuggestionRow {
            category: "Priority Actions",
            suggestions: self.priority_actions.join("\n"),
        })?;
        for category in Category::ALL {
            csv.serialize(SuggestionRow {
                category: category.short_label(),
                suggestions: self.for_category(category).join("\n"),
            })?;
        }

        csv.flush()?;
        Ok(())
    }

    /// The suggestions report as a CSV string.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
