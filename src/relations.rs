// src/relations.rs
//
// Validated triples → the three snapshot relations. All derivations keep
// first-seen order; nothing here sorts by frequency.

use std::collections::{HashMap, HashSet};

use crate::model::{Disease, Mapping, Relations, Symptom, ValidatedTriple};

/// One entry per distinct disease code, first occurrence wins.
pub fn diseases(triples: &[ValidatedTriple]) -> Vec<Disease> {
    let mut seen: HashSet<&str> = HashSet::new();
    let out: Vec<Disease> = triples
        .iter()
        .filter(|t| seen.insert(t.disease_code.as_str()))
        .map(|t| Disease { code: t.disease_code.clone(), name: t.disease_name.clone() })
        .collect();
    logf!("Relations: {} unique diseases", out.len());
    out
}

/// One entry per distinct symptom code, first occurrence wins.
pub fn symptoms(triples: &[ValidatedTriple]) -> Vec<Symptom> {
    let mut seen: HashSet<&str> = HashSet::new();
    let out: Vec<Symptom> = triples
        .iter()
        .filter(|t| seen.insert(t.symptom_code.as_str()))
        .map(|t| Symptom { code: t.symptom_code.clone(), name: t.symptom_name.clone() })
        .collect();
    logf!("Relations: {} unique symptoms", out.len());
    out
}

/// Ranked disease → symptom rows.
///
/// Groups by disease name in order of first appearance. Inside a group a
/// symptom name that repeats is folded into its first occurrence (keeping
/// that occurrence's frequency), so ranks run 1..=k without gaps.
pub fn mappings(triples: &[ValidatedTriple]) -> Vec<Mapping> {
    struct Group<'a> {
        disease: &'a str,
        seen: HashSet<&'a str>,
        symptoms: Vec<(&'a str, u32)>,
    }

    let mut slot: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for t in triples {
        let ix = *slot.entry(t.disease_name.as_str()).or_insert_with(|| {
            groups.push(Group { disease: &t.disease_name, seen: HashSet::new(), symptoms: Vec::new() });
            groups.len() - 1
        });
        let g = &mut groups[ix];
        if g.seen.insert(t.symptom_name.as_str()) {
            g.symptoms.push((&t.symptom_name, t.frequency));
        }
    }

    let mut out = Vec::with_capacity(groups.iter().map(|g| g.symptoms.len()).sum());
    for g in &groups {
        for (rank, (symptom, frequency)) in (1u32..).zip(&g.symptoms) {
            out.push(Mapping {
                disease_name: s!(g.disease),
                symptom_name: s!(*symptom),
                frequency_count: *frequency,
                symptom_rank: rank,
            });
        }
    }

    let folded = triples.len() - out.len();
    logf!("Relations: created {} mappings across {} diseases", out.len(), groups.len());
    if folded > 0 {
        logd!("Relations: folded {} repeated disease-symptom pairs", folded);
    }
    out
}

pub fn build(triples: &[ValidatedTriple]) -> Relations {
    Relations {
        diseases: diseases(triples),
        symptoms: symptoms(triples),
        mappings: mappings(triples),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn vt(d: &str, s: &str, f: u32) -> ValidatedTriple {
        ValidatedTriple {
            disease_code: format!("UMLS:{}", d),
            symptom_code: format!("UMLS:{}", s),
            frequency: f,
            disease_name: s!(d),
            symptom_name: s!(s),
        }
    }

    #[test]
    fn first_seen_dedup_for_entities() {
        let t = vec![vt("flu", "fever", 5), vt("cold", "fever", 3), vt("flu", "cough", 5)];
        let d = diseases(&t);
        assert_eq!(d.iter().map(|x| x.name.as_str()).collect::<Vec<_>>(), ["flu", "cold"]);
        let s = symptoms(&t);
        assert_eq!(s.iter().map(|x| x.name.as_str()).collect::<Vec<_>>(), ["fever", "cough"]);
        assert_eq!(s[0].code, "UMLS:fever");
    }

    #[test]
    fn ranks_follow_appearance_not_frequency() {
        let t = vec![vt("flu", "fever", 1), vt("flu", "cough", 1), vt("flu", "ache", 1)];
        let m = mappings(&t);
        let got: Vec<_> = m.iter().map(|x| (x.symptom_name.as_str(), x.symptom_rank)).collect();
        assert_eq!(got, [("fever", 1), ("cough", 2), ("ache", 3)]);
    }

    #[test]
    fn interleaved_diseases_group_by_first_appearance() {
        let t = vec![
            vt("flu", "fever", 9),
            vt("cold", "sneeze", 4),
            vt("flu", "cough", 9),
            vt("cold", "fever", 4),
        ];
        let m = mappings(&t);
        let got: Vec<_> = m
            .iter()
            .map(|x| (x.disease_name.as_str(), x.symptom_name.as_str(), x.symptom_rank))
            .collect();
        assert_eq!(
            got,
            [
                ("flu", "fever", 1),
                ("flu", "cough", 2),
                ("cold", "sneeze", 1),
                ("cold", "fever", 2),
            ]
        );
    }

    #[test]
    fn repeated_pairs_fold_into_first_with_its_frequency() {
        let t = vec![vt("flu", "fever", 5), vt("flu", "cough", 6), vt("flu", "fever", 99)];
        let m = mappings(&t);
        assert_eq!(m.len(), 2);
        assert_eq!(m[0].frequency_count, 5);
        assert_eq!(m[1].symptom_rank, 2);
    }

    #[test]
    fn ranks_are_contiguous_per_disease() {
        let names = ["a", "b", "c", "a", "d", "b", "e"];
        let mut t = Vec::new();
        for (i, s) in names.iter().enumerate() {
            t.push(vt(if i % 2 == 0 { "x" } else { "y" }, s, i as u32));
        }
        let m = mappings(&t);
        let mut by_disease: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
        for row in &m {
            by_disease.entry(row.disease_name.as_str()).or_default().push(row.symptom_rank);
        }
        for ranks in by_disease.values() {
            let expected: Vec<u32> = (1..=ranks.len() as u32).collect();
            assert_eq!(ranks, &expected);
        }
    }

    #[test]
    fn same_name_from_different_codes_groups_together() {
        let mut a = vt("flu", "fever", 2);
        a.disease_code = s!("UMLS:C1_flu");
        let mut b = vt("flu", "cough", 3);
        b.disease_code = s!("C1_flu");
        let r = build(&[a, b]);
        assert_eq!(r.diseases.len(), 2);
        assert_eq!(r.mappings.len(), 2);
        assert_eq!(r.mappings[1].symptom_rank, 2);
    }
}
