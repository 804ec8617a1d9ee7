// src/specs/kb.rs
//
// Row interpretation for the Disease-Symptom KB table.
//
// Table shape (three columns):
//   | Disease                        | Count | Symptom                      |
//   | UMLS:C0020538_hypertensive ... | 3363  | UMLS:C0008031_pain chest     |
//   |                                |       | UMLS:C0392680_shortness of…  |
//   | UMLS:C0011847_diabetes         | 1421  | UMLS:C0032617_polyuria       |
//
// The disease and count cells are merged down in the source, so most rows
// leave them empty and inherit the last disease seen. Row order matters.

use crate::config::consts::UMLS_MARKER;
use crate::model::RawTriple;

/// Disease/frequency carried across continuation rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarryState {
    pub disease: Option<String>,
    pub frequency: String,
}

/// What happened to each row; logged after a parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterpretStats {
    pub rows: usize,
    pub short: usize,
    pub headers: usize,
    pub disease_rows: usize,
    pub continuations: usize,
    pub discarded: usize,
}

/// Fold accumulator: carry state plus everything emitted so far.
#[derive(Debug, Default)]
pub struct Interpretation {
    pub carry: CarryState,
    pub triples: Vec<RawTriple>,
    pub stats: InterpretStats,
}

impl Interpretation {
    /// Apply one row. Rows with fewer than three cells are ignored.
    pub fn step(mut self, row: &[String]) -> Self {
        self.stats.rows += 1;

        let [c1, c2, c3, ..] = row else {
            self.stats.short += 1;
            return self;
        };

        if is_header_row(c1, c2) {
            self.stats.headers += 1;
            return self;
        }

        let (c1, c2, c3) = (c1.trim(), c2.trim(), c3.trim());

        if c1.contains(UMLS_MARKER) && is_count(c2) {
            self.carry = CarryState {
                disease: Some(s!(c1)),
                frequency: c2.replace(',', ""),
            };
            self.stats.disease_rows += 1;
            if c3.contains(UMLS_MARKER) {
                self.emit(c3);
            }
        } else if c3.contains(UMLS_MARKER) && self.carry.disease.is_some() {
            // Also reached by a coded cell 1 whose count is not numeric: such a
            // row does not start a disease, and its symptom goes to the carried one.
            self.stats.continuations += 1;
            self.emit(c3);
        } else {
            self.stats.discarded += 1;
        }
        self
    }

    fn emit(&mut self, symptom_code: &str) {
        if let Some(disease) = self.carry.disease.as_deref() {
            self.triples.push(RawTriple::new(disease, &self.carry.frequency, symptom_code));
        }
    }
}

/// Header detection, kept literal: a first cell mentioning "Disease", or
/// "disease" (any case) next to a "count" cell.
fn is_header_row(c1: &str, c2: &str) -> bool {
    c1.contains("Disease")
        || (c1.to_lowercase().contains("disease") && c2.to_lowercase().contains("count"))
}

/// Digits only once thousands separators are removed ("3,363" → true).
fn is_count(s: &str) -> bool {
    let digits = s.replace(',', "");
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Walk extracted rows in order and emit raw (disease, frequency, symptom)
/// triples.
pub fn interpret(rows: &[Vec<String>]) -> Interpretation {
    let out = rows
        .iter()
        .fold(Interpretation::default(), |acc, row| acc.step(row));

    let st = &out.stats;
    logf!(
        "Interpret: {} rows → {} pairs (disease rows {}, continuations {}, headers {}, short {}, discarded {})",
        st.rows, out.triples.len(), st.disease_rows, st.continuations, st.headers, st.short, st.discarded
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn combined_row_then_continuation() {
        let rows = vec![
            row(&["UMLS:D1", "10", "UMLS:S1"]),
            row(&["", "", "UMLS:S2"]),
        ];
        let out = interpret(&rows);
        assert_eq!(
            out.triples,
            vec![
                RawTriple::new("UMLS:D1", "10", "UMLS:S1"),
                RawTriple::new("UMLS:D1", "10", "UMLS:S2"),
            ]
        );
        assert_eq!(out.stats.disease_rows, 1);
        assert_eq!(out.stats.continuations, 1);
    }

    #[test]
    fn disease_row_without_symptom_only_sets_carry() {
        let rows = vec![
            row(&["UMLS:D1_flu", "1,204", ""]),
            row(&["", "", "UMLS:S1_fever"]),
        ];
        let out = interpret(&rows);
        assert_eq!(out.triples, vec![RawTriple::new("UMLS:D1_flu", "1204", "UMLS:S1_fever")]);
        assert_eq!(out.carry.frequency, "1204");
    }

    #[test]
    fn continuation_before_any_disease_is_dropped() {
        let rows = vec![
            row(&["", "", "UMLS:S0"]),
            row(&["UMLS:D1", "5", "UMLS:S1"]),
        ];
        let out = interpret(&rows);
        assert_eq!(out.triples.len(), 1);
        assert_eq!(out.stats.discarded, 1);
    }

    #[test]
    fn carry_switches_to_new_disease() {
        let rows = vec![
            row(&["UMLS:D1", "10", "UMLS:S1"]),
            row(&["UMLS:D2", "7", "UMLS:S2"]),
            row(&["", "", "UMLS:S3"]),
        ];
        let out = interpret(&rows);
        assert_eq!(out.triples[2], RawTriple::new("UMLS:D2", "7", "UMLS:S3"));
    }

    #[test]
    fn header_and_short_rows_skipped() {
        let rows = vec![
            row(&["Disease", "Count of Disease Occurrence", "Symptom"]),
            row(&["disease", "count", "symptom"]),
            row(&["UMLS:D1", "10"]),
            row(&["UMLS:D1", "10", "UMLS:S1"]),
        ];
        let out = interpret(&rows);
        assert_eq!(out.stats.headers, 2);
        assert_eq!(out.stats.short, 1);
        assert_eq!(out.triples.len(), 1);
    }

    #[test]
    fn header_rule_is_literal() {
        // Capital "Disease" anywhere in cell 1 skips the row, even for real data.
        let rows = vec![row(&["UMLS:C0001_Alzheimer's Disease", "50", "UMLS:S1"])];
        assert!(interpret(&rows).triples.is_empty());

        // Lower-case "disease" alone is not a header.
        let rows = vec![row(&["UMLS:C0002_heart disease", "50", "UMLS:S1"])];
        assert_eq!(interpret(&rows).triples.len(), 1);
    }

    #[test]
    fn non_numeric_count_does_not_start_a_disease() {
        let rows = vec![
            row(&["UMLS:D1", "n/a", "UMLS:S1"]),
            row(&["", "", "UMLS:S2"]),
        ];
        let out = interpret(&rows);
        assert!(out.triples.is_empty());
        assert_eq!(out.carry, CarryState::default());
    }

    #[test]
    fn coded_row_with_bad_count_credits_carried_disease() {
        let rows = vec![
            row(&["UMLS:D1_flu", "10", "UMLS:S1_fever"]),
            row(&["UMLS:D2_cold", "n/a", "UMLS:S9_sneeze"]),
        ];
        let out = interpret(&rows);
        assert_eq!(out.triples[1], RawTriple::new("UMLS:D1_flu", "10", "UMLS:S9_sneeze"));
        assert_eq!(out.carry.disease.as_deref(), Some("UMLS:D1_flu"));
        assert_eq!(out.stats.continuations, 1);
    }

    #[test]
    fn rows_without_symptom_code_are_discarded() {
        let rows = vec![
            row(&["UMLS:D1", "10", "UMLS:S1"]),
            row(&["", "", "see also"]),
        ];
        let out = interpret(&rows);
        assert_eq!(out.triples.len(), 1);
        assert_eq!(out.stats.discarded, 1);
    }

    #[test]
    fn counts() {
        assert!(is_count("0"));
        assert!(is_count("3,363"));
        assert!(!is_count(""));
        assert!(!is_count(","));
        assert!(!is_count("-5"));
        assert!(!is_count("12a"));
    }
}
