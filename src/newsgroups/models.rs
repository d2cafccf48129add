// src/newsgroups/models.rs
#![allow(dead_code)]
use clap::ValueEnum;
use serde::Deserialize;

/// One page of the datasets-server rows response.
/// Example: https://datasets-server.huggingface.co/rows?dataset=SetFit/20_newsgroups&config=default&split=train&offset=0&length=100
#[derive(Debug, Deserialize)]
pub struct RowsResponse {
    pub rows: Vec<RowEntry>,
    pub num_rows_total: u64,
}

#[derive(Debug, Deserialize)]
pub struct RowEntry {
    pub row_idx: u64,
    pub row: NewsgroupRow,
}

/// A single 20 Newsgroups record as served by the dataset.
/// Only `text` feeds the extraction; the label fields are part of the
/// wire format but unused here.
#[derive(Debug, Deserialize)]
pub struct NewsgroupRow {
    pub text: String,
    #[serde(default)]
    pub label: Option<i64>,
    #[serde(default)]
    pub label_text: Option<String>,
}

/// Which pre-partitioned split(s) of the dataset to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Subset {
    Train,
    Test,
    /// Train followed by test, in that order.
    All,
}

impl Subset {
    pub fn splits(self) -> &'static [&'static str] {
        match self {
            Subset::Train => &["train"],
            Subset::Test => &["test"],
            Subset::All => &["train", "test"],
        }
    }
}

/// Which structural elements to drop from each record while the
/// collection is materialized.
#[derive(Debug, Clone, Copy)]
pub struct Remove {
    pub headers: bool,
    pub footers: bool,
    pub quotes: bool,
}

impl Remove {
    pub fn all() -> Self {
        Self { headers: true, footers: true, quotes: true }
    }

    pub fn none() -> Self {
        Self { headers: false, footers: false, quotes: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_rows_page() {
        let body = r#"{
            "features": [{"feature_idx": 0, "name": "text", "type": {"dtype": "string", "_type": "Value"}}],
            "rows": [
                {"row_idx": 0, "row": {"text": "first", "label": 7, "label_text": "rec.autos"}, "truncated_cells": []},
                {"row_idx": 1, "row": {"text": "second"}, "truncated_cells": []}
            ],
            "num_rows_total": 11314,
            "num_rows_per_page": 100,
            "partial": false
        }"#;

        let page: RowsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.num_rows_total, 11314);
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[0].row.text, "first");
        assert_eq!(page.rows[0].row.label, Some(7));
        assert_eq!(page.rows[1].row.label_text, None);
    }

    #[test]
    fn subset_split_order_is_train_then_test() {
        assert_eq!(Subset::All.splits(), ["train", "test"]);
        assert_eq!(Subset::Train.splits(), ["train"]);
        assert_eq!(Subset::Test.splits(), ["test"]);
    }
}
