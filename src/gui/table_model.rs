// src/gui/table_model.rs
//! TableData: what the lookup tabs render.
//!
//! Pages build a `TableData` from the loaded `LookupIndex` and hand it to
//! `components::data_table`, which only knows headers and string cells.

use crate::index::LookupIndex;

pub const DISEASE_TABLE_HEADERS: [&str; 3] = ["Rank", "Disease", "Symptom Count"];
pub const SYMPTOM_TABLE_HEADERS: [&str; 3] = ["Rank", "Symptom", "Associated Diseases"];

/// Number of names spelled out in the symptom details line.
pub const DETAILS_LIMIT: usize = 10;

/// Number of symptoms listed under a disease table.
pub const TOP_SYMPTOMS_SHOWN: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn with(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self { headers: headers.iter().map(|h| s!(*h)).collect(), rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Diseases for one symptom: rank, name, and how many symptoms that disease has.
    pub fn diseases_for_symptom(ix: &LookupIndex, symptom: &str) -> Self {
        let rows = ix
            .diseases_for(symptom)
            .iter()
            .enumerate()
            .map(|(i, d)| vec![(i + 1).to_string(), d.clone(), ix.symptoms_for(d).len().to_string()])
            .collect();
        Self::with(&DISEASE_TABLE_HEADERS, rows)
    }

    /// Symptoms for one disease: rank, name, and how many diseases share it.
    pub fn symptoms_for_disease(ix: &LookupIndex, disease: &str) -> Self {
        let rows = ix
            .symptoms_for(disease)
            .iter()
            .enumerate()
            .map(|(i, s)| vec![(i + 1).to_string(), s.clone(), ix.diseases_for(s).len().to_string()])
            .collect();
        Self::with(&SYMPTOM_TABLE_HEADERS, rows)
    }
}

/// First few names joined by ", ", with "..." when the list was cut.
pub fn details_line(names: &[String]) -> String {
    let shown = names.len().min(DETAILS_LIMIT);
    let mut out = names[..shown].join(", ");
    if names.len() > DETAILS_LIMIT {
        out.push_str("...");
    }
    out
}

/// Case-insensitive substring filter for the pick lists. Empty filter keeps all.
pub fn filter_options<'a>(options: &'a [String], filter: &str) -> Vec<&'a String> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return options.iter().collect();
    }
    options.iter().filter(|o| o.to_lowercase().contains(&needle)).collect()
}
