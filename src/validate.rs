// src/validate.rs
use crate::model::{RawTriple, ValidatedTriple};
use crate::specs::umls::normalize;

/// Why triples were dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RejectCounts {
    pub blank_code: usize,
    pub empty_name: usize,
    pub missing_frequency: usize,
    pub malformed_frequency: usize,
    pub negative_frequency: usize,
}

impl RejectCounts {
    pub fn total(&self) -> usize {
        self.blank_code
            + self.empty_name
            + self.missing_frequency
            + self.malformed_frequency
            + self.negative_frequency
    }
}

#[derive(Debug, Default)]
pub struct Validated {
    pub triples: Vec<ValidatedTriple>,
    pub rejected: RejectCounts,
}

enum Reject {
    BlankCode,
    EmptyName,
    MissingFrequency,
    MalformedFrequency,
    NegativeFrequency,
}

fn parse_frequency(raw: &str) -> Result<u32, Reject> {
    let t = raw.trim();
    if t.is_empty() {
        return Err(Reject::MissingFrequency);
    }
    // Signed first so "-5" reads as negative, not as garbage.
    match t.parse::<i64>() {
        Ok(n) if n < 0 => Err(Reject::NegativeFrequency),
        Ok(n) => u32::try_from(n).map_err(|_| Reject::MalformedFrequency),
        Err(_) => Err(Reject::MalformedFrequency),
    }
}

fn check(t: &RawTriple) -> Result<ValidatedTriple, Reject> {
    if t.disease_code.trim().is_empty() || t.symptom_code.trim().is_empty() {
        return Err(Reject::BlankCode);
    }
    let disease_name = normalize(&t.disease_code);
    let symptom_name = normalize(&t.symptom_code);
    if disease_name.trim().is_empty() || symptom_name.trim().is_empty() {
        return Err(Reject::EmptyName);
    }
    let frequency = parse_frequency(&t.frequency)?;

    Ok(ValidatedTriple {
        disease_code: t.disease_code.clone(),
        symptom_code: t.symptom_code.clone(),
        frequency,
        disease_name,
        symptom_name,
    })
}

/// Keep well-formed triples, in order. Never fails; rejects are counted.
pub fn validate(triples: &[RawTriple]) -> Validated {
    let mut out = Validated::default();
    for t in triples {
        match check(t) {
            Ok(v) => out.triples.push(v),
            Err(reason) => {
                let r = &mut out.rejected;
                match reason {
                    Reject::BlankCode => r.blank_code += 1,
                    Reject::EmptyName => r.empty_name += 1,
                    Reject::MissingFrequency => r.missing_frequency += 1,
                    Reject::MalformedFrequency => r.malformed_frequency += 1,
                    Reject::NegativeFrequency => r.negative_frequency += 1,
                }
                logd!("Validate: dropped {:?}", t);
            }
        }
    }

    logf!("Validate: valid {}, invalid {}", out.triples.len(), out.rejected.total());
    if out.rejected.total() > 0 {
        logd!("Validate: reject breakdown {:?}", out.rejected);
    }
    out
}
