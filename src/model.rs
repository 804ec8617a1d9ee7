// src/model.rs
//
// Plain records passed between pipeline stages.

/// One disease/symptom pairing as read off the table. Frequency is still text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTriple {
    pub disease_code: String,
    pub frequency: String,
    pub symptom_code: String,
}

impl RawTriple {
    pub fn new(disease_code: &str, frequency: &str, symptom_code: &str) -> Self {
        Self {
            disease_code: s!(disease_code),
            frequency: s!(frequency),
            symptom_code: s!(symptom_code),
        }
    }
}

/// A triple that passed validation. Names are the normalized codes and are
/// never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedTriple {
    pub disease_code: String,
    pub symptom_code: String,
    pub frequency: u32,
    pub disease_name: String,
    pub symptom_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disease {
    pub code: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symptom {
    pub code: String,
    pub name: String,
}

/// Ranked disease → symptom association. Rank is first-appearance order
/// within the disease, starting at 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mapping {
    pub disease_name: String,
    pub symptom_name: String,
    pub frequency_count: u32,
    pub symptom_rank: u32,
}

/// The three relations of one snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Relations {
    pub diseases: Vec<Disease>,
    pub symptoms: Vec<Symptom>,
    pub mappings: Vec<Mapping>,
}
