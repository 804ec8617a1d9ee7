// src/index.rs
//
// Read side: one loaded snapshot plus the lookups derived from it.
//
// A `Snapshot` is an explicit handle the caller owns (and may share behind an
// `Arc`). Relations are read eagerly when it is opened; the lookup index is
// derived on first use and then reused for the handle's lifetime. Nothing
// mutates either after construction.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::OnceLock;

use crate::config::consts::{CONFIDENCE_RANK_SCALE, TOP_N};
use crate::error::SnapshotError;
use crate::model::{Mapping, Relations, Symptom};
use crate::store::{self, SnapshotFiles, SnapshotId};

/// Bidirectional lookups over one snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupIndex {
    /// Distinct symptom names from the symptoms relation.
    pub symptoms: BTreeSet<String>,
    /// Disease → symptoms, ascending by rank.
    pub disease_to_symptoms: HashMap<String, Vec<String>>,
    /// Symptom → diseases, in mapping-file row order.
    pub symptom_to_diseases: HashMap<String, Vec<String>>,
    // sorted name lists, filled once by `build`
    symptom_list: Vec<String>,
    disease_list: Vec<String>,
}

impl LookupIndex {
    pub fn build(symptoms: &[Symptom], mappings: &[Mapping]) -> Self {
        let symptom_set: BTreeSet<String> = symptoms.iter().map(|s| s.name.clone()).collect();

        let mut ranked: HashMap<&str, Vec<(u32, &str)>> = HashMap::new();
        let mut s2d: HashMap<String, Vec<String>> = HashMap::new();
        for m in mappings {
            ranked
                .entry(m.disease_name.as_str())
                .or_default()
                .push((m.symptom_rank, m.symptom_name.as_str()));
            s2d.entry(m.symptom_name.clone())
                .or_default()
                .push(m.disease_name.clone());
        }

        let d2s: HashMap<String, Vec<String>> = ranked
            .into_iter()
            .map(|(disease, mut syms)| {
                syms.sort();
                (s!(disease), syms.into_iter().map(|(_, s)| s!(s)).collect::<Vec<_>>())
            })
            .collect();

        let symptom_list: Vec<String> = symptom_set.iter().cloned().collect();
        let mut disease_list: Vec<String> = d2s.keys().cloned().collect();
        disease_list.sort();

        Self {
            symptoms: symptom_set,
            disease_to_symptoms: d2s,
            symptom_to_diseases: s2d,
            symptom_list,
            disease_list,
        }
    }

    /// Sorted, de-duplicated symptom names.
    pub fn symptom_names(&self) -> &[String] {
        &self.symptom_list
    }

    /// Sorted disease names that have at least one mapping.
    pub fn disease_names(&self) -> &[String] {
        &self.disease_list
    }

    pub fn symptoms_for(&self, disease: &str) -> &[String] {
        self.disease_to_symptoms.get(disease).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn diseases_for(&self, symptom: &str) -> &[String] {
        self.symptom_to_diseases.get(symptom).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn stats(&self) -> Stats {
        let mut top_symptoms: Vec<(String, usize)> = self
            .symptoms
            .iter()
            .map(|s| (s.clone(), self.diseases_for(s).len()))
            .collect();
        top_symptoms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_symptoms.truncate(TOP_N);

        let mut top_diseases: Vec<(String, usize)> = self
            .disease_to_symptoms
            .iter()
            .map(|(d, s)| (d.clone(), s.len()))
            .collect();
        top_diseases.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_diseases.truncate(TOP_N);

        Stats {
            total_diseases: self.disease_to_symptoms.len(),
            total_symptoms: self.symptoms.len(),
            total_associations: self.disease_to_symptoms.values().map(Vec::len).sum(),
            top_symptoms,
            top_diseases,
        }
    }
}

/// Summary numbers for the statistics view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_diseases: usize,
    pub total_symptoms: usize,
    pub total_associations: usize,
    /// (symptom, number of diseases), most common first
    pub top_symptoms: Vec<(String, usize)>,
    /// (disease, number of symptoms), most symptoms first
    pub top_diseases: Vec<(String, usize)>,
}

/// `max(0, 1 - rank/100)`: a heuristic, not a probability.
pub fn confidence_for_rank(rank: u32) -> f64 {
    (1.0 - f64::from(rank) / CONFIDENCE_RANK_SCALE).max(0.0)
}

pub struct Snapshot {
    files: SnapshotFiles,
    relations: Relations,
    index: OnceLock<LookupIndex>,
}

impl Snapshot {
    /// Open the most recent snapshot in `dir`.
    pub fn open_latest(dir: &Path) -> Result<Self, SnapshotError> {
        Self::open(store::locate_latest(dir)?)
    }

    pub fn open(files: SnapshotFiles) -> Result<Self, SnapshotError> {
        let relations = store::read_relations(&files)?;
        logf!(
            "Load: snapshot {} ({} diseases, {} symptoms, {} mappings)",
            files.id,
            relations.diseases.len(),
            relations.symptoms.len(),
            relations.mappings.len()
        );
        Ok(Self { files, relations, index: OnceLock::new() })
    }

    pub fn id(&self) -> &SnapshotId {
        &self.files.id
    }

    pub fn files(&self) -> &SnapshotFiles {
        &self.files
    }

    pub fn relations(&self) -> &Relations {
        &self.relations
    }

    /// Derived lookups, built on first call.
    pub fn index(&self) -> &LookupIndex {
        self.index.get_or_init(|| {
            let ix = LookupIndex::build(&self.relations.symptoms, &self.relations.mappings);
            logd!(
                "Load: index built ({} symptoms, {} diseases)",
                ix.symptoms.len(),
                ix.disease_to_symptoms.len()
            );
            ix
        })
    }

    pub fn symptom_names(&self) -> &[String] {
        self.index().symptom_names()
    }

    pub fn disease_names(&self) -> &[String] {
        self.index().disease_names()
    }

    pub fn disease_to_symptoms(&self) -> &HashMap<String, Vec<String>> {
        &self.index().disease_to_symptoms
    }

    pub fn symptom_to_diseases(&self) -> &HashMap<String, Vec<String>> {
        &self.index().symptom_to_diseases
    }

    pub fn stats(&self) -> Stats {
        self.index().stats()
    }

    /// Confidence for a (disease, symptom) pair, 0.0 if the pair is unknown.
    pub fn confidence(&self, disease: &str, symptom: &str) -> f64 {
        self.relations
            .mappings
            .iter()
            .find(|m| m.disease_name == disease && m.symptom_name == symptom)
            .map_or(0.0, |m| confidence_for_rank(m.symptom_rank))
    }
}
