// tests/snapshot_lookups.rs
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use symptopedia::cli::{self, CliArgs};
use symptopedia::config::options::PipelineOptions;
use symptopedia::error::{CliError, SnapshotError};
use symptopedia::index::Snapshot;
use symptopedia::model::RawTriple;
use symptopedia::store::{SnapshotFiles, SnapshotId, SnapshotWriter};
use symptopedia::{relations, validate};

fn tmp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

fn id(s: &str) -> SnapshotId {
    SnapshotId::parse(s).unwrap()
}

fn triples() -> Vec<RawTriple> {
    vec![
        RawTriple::new("UMLS:C0020538_hypertensive disease", "3363", "UMLS:C0008031_pain chest"),
        RawTriple::new("UMLS:C0020538_hypertensive disease", "3363", "UMLS:C0392680_shortness of breath"),
        RawTriple::new("UMLS:C0011847_diabetes", "1421", "UMLS:C0032617_polyuria"),
        RawTriple::new("UMLS:C0011847_diabetes", "1421", "UMLS:C0392680_shortness of breath"),
        RawTriple::new("UMLS:C0011847_diabetes", "1421", "UMLS:C0008031_pain chest"),
        RawTriple::new("UMLS:C0011847_diabetes", "n/a", "UMLS:C0012833_dizziness"),
        RawTriple::new("UMLS:C0027051_myocardial infarction", "759", "UMLS:C0008031_pain chest"),
    ]
}

fn write_sample(dir: &std::path::Path, stamp: &str) -> SnapshotFiles {
    let valid = validate::validate(&triples());
    let rel = relations::build(&valid.triples);
    SnapshotWriter::new(dir).write_at(&rel, &id(stamp)).unwrap()
}

#[test]
fn loaded_lookups_match_validated_pairs() {
    let dir = tmp_dir();
    write_sample(dir.path(), "20250101_120000");

    let valid = validate::validate(&triples());
    assert_eq!(valid.rejected.malformed_frequency, 1);

    // Expected lookups straight from the validated pairs
    let mut d2s: HashMap<String, Vec<String>> = HashMap::new();
    let mut s2d: HashMap<String, Vec<String>> = HashMap::new();
    for t in &valid.triples {
        d2s.entry(t.disease_name.clone()).or_default().push(t.symptom_name.clone());
        s2d.entry(t.symptom_name.clone()).or_default().push(t.disease_name.clone());
    }
    // Mappings group by disease, so symptom lists come back in disease-first-seen order
    let order = ["hypertensive disease", "diabetes", "myocardial infarction"];
    for v in s2d.values_mut() {
        v.sort_by_key(|d| order.iter().position(|o| *o == d.as_str()));
    }

    let snap = Snapshot::open_latest(dir.path()).unwrap();
    assert_eq!(snap.disease_to_symptoms(), &d2s);
    assert_eq!(snap.symptom_to_diseases(), &s2d);
    assert_eq!(
        snap.symptom_to_diseases()["pain chest"],
        ["hypertensive disease", "diabetes", "myocardial infarction"]
    );
    // dizziness only appeared on the rejected row
    assert_eq!(snap.symptom_names(), ["pain chest", "polyuria", "shortness of breath"]);
    assert_eq!(snap.disease_names(), ["diabetes", "hypertensive disease", "myocardial infarction"]);
}

#[test]
fn confidence_follows_rank() {
    let dir = tmp_dir();
    write_sample(dir.path(), "20250101_120000");
    let snap = Snapshot::open_latest(dir.path()).unwrap();

    assert!((snap.confidence("diabetes", "polyuria") - 0.99).abs() < 1e-9);
    assert!((snap.confidence("diabetes", "pain chest") - 0.97).abs() < 1e-9);
    assert_eq!(snap.confidence("diabetes", "dizziness"), 0.0);
    assert_eq!(snap.confidence("no such disease", "polyuria"), 0.0);
}

#[test]
fn stats_over_loaded_snapshot() {
    let dir = tmp_dir();
    write_sample(dir.path(), "20250101_120000");
    let st = Snapshot::open_latest(dir.path()).unwrap().stats();

    assert_eq!(st.total_diseases, 3);
    assert_eq!(st.total_symptoms, 3);
    assert_eq!(st.total_associations, 6);
    assert_eq!(st.top_symptoms[0], ("pain chest".to_string(), 3));
    assert_eq!(st.top_diseases[0], ("diabetes".to_string(), 3));
}

#[test]
fn newest_snapshot_wins() {
    let dir = tmp_dir();
    write_sample(dir.path(), "20240101_000000");
    let newer = write_sample(dir.path(), "20250301_080000");
    write_sample(dir.path(), "20241231_235959");

    let snap = Snapshot::open_latest(dir.path()).unwrap();
    assert_eq!(snap.id().as_str(), "20250301_080000");
    assert_eq!(snap.files(), &newer);
    assert_eq!(snap.id().display_spaced(), "20250301 080000");
}

#[test]
fn missing_artifacts_are_explicit() {
    let dir = tmp_dir();
    let gone = dir.path().join("nope");
    assert!(matches!(Snapshot::open_latest(&gone), Err(SnapshotError::MissingDirectory(p)) if p == gone));
    assert!(matches!(Snapshot::open_latest(dir.path()), Err(SnapshotError::NoMappings(_))));

    let files = write_sample(dir.path(), "20250101_120000");
    fs::remove_file(&files.symptoms).unwrap();
    match Snapshot::open_latest(dir.path()) {
        Err(SnapshotError::MissingArtifact(p)) => assert_eq!(p, files.symptoms),
        other => panic!("expected missing artifact, got {:?}", other.err()),
    }
}

#[test]
fn load_only_cli_reads_existing_snapshot() {
    let dir = tmp_dir();
    write_sample(dir.path(), "20250101_120000");

    let args = CliArgs {
        options: PipelineOptions::default().with_out_dir(dir.path()),
        load_only: true,
    };
    cli::execute(&args).unwrap();

    let empty = CliArgs {
        options: PipelineOptions::default().with_out_dir(PathBuf::from(dir.path()).join("empty")),
        load_only: true,
    };
    assert!(matches!(cli::execute(&empty), Err(CliError::Snapshot(SnapshotError::MissingDirectory(_)))));
}
