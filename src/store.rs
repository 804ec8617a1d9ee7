// src/store.rs
//
// Snapshot files on disk.
//
// A snapshot is three CSV files sharing one timestamp:
//   diseases_<ts>.csv                  disease_code,disease_name
//   symptoms_<ts>.csv                  symptom_code,symptom_name
//   disease_symptom_mappings_<ts>.csv  disease_name,symptom_name,frequency_count,symptom_rank
// <ts> is YYYYMMDD_HHMMSS, so name order is time order. Files are never
// rewritten; a new run adds a new, later snapshot.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::config::consts::*;
use crate::csv::parse_rows;
use crate::error::SnapshotError;
use crate::file::{self, ensure_directory, file_name_str};
use crate::model::{Disease, Mapping, Relations, Symptom};

pub const DISEASE_HEADERS: [&str; 2] = ["disease_code", "disease_name"];
pub const SYMPTOM_HEADERS: [&str; 2] = ["symptom_code", "symptom_name"];
pub const MAPPING_HEADERS: [&str; 4] =
    ["disease_name", "symptom_name", "frequency_count", "symptom_rank"];

/// Timestamp identifying a snapshot, e.g. `20250214_093012`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnapshotId(String);

impl SnapshotId {
    pub fn now() -> Self {
        Self(chrono::Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    /// Accepts exactly `YYYYMMDD_HHMMSS`.
    pub fn parse(s: &str) -> Option<Self> {
        chrono::NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()?;
        (s.len() == 15).then(|| Self(s!(s)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// "20250214 093012", for display.
    pub fn display_spaced(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Paths of one snapshot's three artifacts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotFiles {
    pub id: SnapshotId,
    pub diseases: PathBuf,
    pub symptoms: PathBuf,
    pub mappings: PathBuf,
}

impl SnapshotFiles {
    pub fn in_dir(dir: &Path, id: &SnapshotId) -> Self {
        let name = |prefix: &str| join!(prefix, id.as_str(), SNAPSHOT_EXT);
        Self {
            id: id.clone(),
            diseases: dir.join(name(DISEASES_PREFIX)),
            symptoms: dir.join(name(SYMPTOMS_PREFIX)),
            mappings: dir.join(name(MAPPINGS_PREFIX)),
        }
    }

    fn all(&self) -> [&Path; 3] {
        [&self.diseases, &self.symptoms, &self.mappings]
    }
}

/* ---------------- Writing ---------------- */

pub struct SnapshotWriter {
    dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `rel` under a fresh wall-clock timestamp.
    pub fn write(&self, rel: &Relations) -> Result<SnapshotFiles, SnapshotError> {
        self.write_at(rel, &SnapshotId::now())
    }

    /// Write `rel` as snapshot `id`. All three files are staged first and
    /// published mappings-last, so readers never see a partial snapshot. A
    /// failed publish removes the files this call already placed.
    pub fn write_at(&self, rel: &Relations, id: &SnapshotId) -> Result<SnapshotFiles, SnapshotError> {
        ensure_directory(&self.dir)?;
        let files = SnapshotFiles::in_dir(&self.dir, id);

        if let Some(taken) = files.all().into_iter().find(|p| p.exists()) {
            return Err(SnapshotError::Exists(taken.to_path_buf()));
        }

        let diseases = file::stage_table(
            &files.diseases,
            &DISEASE_HEADERS,
            rel.diseases.iter().map(|d| vec![d.code.as_str(), d.name.as_str()]),
            SNAPSHOT_SEP,
        )?;
        let symptoms = file::stage_table(
            &files.symptoms,
            &SYMPTOM_HEADERS,
            rel.symptoms.iter().map(|s| vec![s.code.as_str(), s.name.as_str()]),
            SNAPSHOT_SEP,
        )?;
        let mappings = file::stage_table(
            &files.mappings,
            &MAPPING_HEADERS,
            rel.mappings.iter().map(|m| {
                vec![
                    m.disease_name.clone(),
                    m.symptom_name.clone(),
                    m.frequency_count.to_string(),
                    m.symptom_rank.to_string(),
                ]
            }),
            SNAPSHOT_SEP,
        )?;

        file::publish_all(vec![
            (diseases, files.diseases.as_path()),
            (symptoms, files.symptoms.as_path()),
            (mappings, files.mappings.as_path()),
        ])?;
        logf!("Store: wrote {} diseases to {}", rel.diseases.len(), files.diseases.display());
        logf!("Store: wrote {} symptoms to {}", rel.symptoms.len(), files.symptoms.display());
        logf!("Store: wrote {} mappings to {}", rel.mappings.len(), files.mappings.display());

        Ok(files)
    }
}

/* ---------------- Locating ---------------- */

/// Every snapshot id with a mappings file in `dir`, oldest first.
pub fn list_snapshots(dir: &Path) -> Result<Vec<SnapshotId>, SnapshotError> {
    if !dir.is_dir() {
        return Err(SnapshotError::MissingDirectory(dir.to_path_buf()));
    }
    let mut ids = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }
        let Some(name) = file_name_str(&path) else { continue };
        let stamp = name
            .strip_prefix(MAPPINGS_PREFIX)
            .and_then(|rest| rest.strip_suffix(SNAPSHOT_EXT));
        match stamp.and_then(SnapshotId::parse) {
            Some(id) => ids.push(id),
            None if stamp.is_some() => logd!("Store: ignoring oddly named {}", name),
            None => {}
        }
    }
    ids.sort();
    Ok(ids)
}

/// The most recent complete snapshot in `dir`.
///
/// Picks the greatest mappings timestamp, then insists its diseases and
/// symptoms siblings exist; a missing one is reported by path.
pub fn locate_latest(dir: &Path) -> Result<SnapshotFiles, SnapshotError> {
    let latest = list_snapshots(dir)?
        .pop()
        .ok_or_else(|| SnapshotError::NoMappings(dir.to_path_buf()))?;

    let files = SnapshotFiles::in_dir(dir, &latest);
    for p in [&files.diseases, &files.symptoms] {
        if !p.is_file() {
            return Err(SnapshotError::MissingArtifact(p.clone()));
        }
    }
    logd!("Store: latest snapshot {}", latest);
    Ok(files)
}

/* ---------------- Reading ---------------- */

/// Header-addressed view over one parsed CSV file.
struct Table {
    path: PathBuf,
    cols: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn read(path: &Path, wanted: &[&str]) -> Result<Self, SnapshotError> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SnapshotError::MissingArtifact(path.to_path_buf()),
            _ => SnapshotError::Io(e),
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

        let mut rows = parse_rows(text, SNAPSHOT_SEP).into_iter();
        let header = rows.next().ok_or_else(|| malformed(path, 1, "empty file"))?;

        let cols = wanted
            .iter()
            .map(|w| {
                header
                    .iter()
                    .position(|h| h.trim() == *w)
                    .ok_or_else(|| malformed(path, 1, &format!("missing column {w}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { path: path.to_path_buf(), cols, rows: rows.collect() })
    }

    /// (line number, cells in `wanted` order). Short rows yield empty cells.
    fn records(&self) -> impl Iterator<Item = (usize, Vec<&str>)> + '_ {
        self.rows.iter().enumerate().map(|(i, r)| {
            let cells = self.cols.iter().map(|&c| r.get(c).map_or("", String::as_str)).collect();
            (i + 2, cells)
        })
    }

    fn number(&self, line: usize, field: &str, raw: &str) -> Result<u32, SnapshotError> {
        raw.trim()
            .parse::<u32>()
            .map_err(|_| malformed(&self.path, line, &format!("bad {field} {raw:?}")))
    }
}

fn malformed(path: &Path, line: usize, reason: &str) -> SnapshotError {
    SnapshotError::Malformed { path: path.to_path_buf(), line, reason: s!(reason) }
}

pub fn read_diseases(path: &Path) -> Result<Vec<Disease>, SnapshotError> {
    let t = Table::read(path, &DISEASE_HEADERS)?;
    Ok(t.records()
        .map(|(_, c)| Disease { code: s!(c[0]), name: s!(c[1]) })
        .collect())
}

pub fn read_symptoms(path: &Path) -> Result<Vec<Symptom>, SnapshotError> {
    let t = Table::read(path, &SYMPTOM_HEADERS)?;
    Ok(t.records()
        .map(|(_, c)| Symptom { code: s!(c[0]), name: s!(c[1]) })
        .collect())
}

pub fn read_mappings(path: &Path) -> Result<Vec<Mapping>, SnapshotError> {
    let t = Table::read(path, &MAPPING_HEADERS)?;
    t.records()
        .map(|(line, c)| -> Result<Mapping, SnapshotError> {
            Ok(Mapping {
                disease_name: s!(c[0]),
                symptom_name: s!(c[1]),
                frequency_count: t.number(line, "frequency_count", c[2])?,
                symptom_rank: t.number(line, "symptom_rank", c[3])?,
            })
        })
        .collect()
}

/// Read all three relations of a located snapshot. All or nothing.
pub fn read_relations(files: &SnapshotFiles) -> Result<Relations, SnapshotError> {
    Ok(Relations {
        diseases: read_diseases(&files.diseases)?,
        symptoms: read_symptoms(&files.symptoms)?,
        mappings: read_mappings(&files.mappings)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> SnapshotId {
        SnapshotId::parse(s).unwrap()
    }

    fn sample() -> Relations {
        Relations {
            diseases: vec![Disease { code: s!("UMLS:C1_flu, seasonal"), name: s!("flu, seasonal") }],
            symptoms: vec![Symptom { code: s!("UMLS:C2_fever"), name: s!("fever") }],
            mappings: vec![Mapping {
                disease_name: s!("flu, seasonal"),
                symptom_name: s!("fever"),
                frequency_count: 120,
                symptom_rank: 1,
            }],
        }
    }

    #[test]
    fn snapshot_id_shape() {
        assert!(SnapshotId::parse("20250214_093012").is_some());
        assert!(SnapshotId::parse("2025-02-14").is_none());
        assert!(SnapshotId::parse("20251314_093012").is_none());
        assert_eq!(SnapshotId::now().as_str().len(), 15);
        assert_eq!(id("20250214_093012").display_spaced(), "20250214 093012");
    }

    #[test]
    fn file_names_follow_convention() {
        let f = SnapshotFiles::in_dir(Path::new("data"), &id("20250101_000000"));
        assert_eq!(f.diseases, Path::new("data/diseases_20250101_000000.csv"));
        assert_eq!(f.symptoms, Path::new("data/symptoms_20250101_000000.csv"));
        assert_eq!(f.mappings, Path::new("data/disease_symptom_mappings_20250101_000000.csv"));
    }

    #[test]
    fn write_creates_dir_and_headers() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested/out");
        let files = SnapshotWriter::new(&dir).write_at(&sample(), &id("20250101_000000")).unwrap();

        let text = fs::read_to_string(&files.mappings).unwrap();
        assert_eq!(
            text,
            "disease_name,symptom_name,frequency_count,symptom_rank\n\"flu, seasonal\",fever,120,1\n"
        );
        let text = fs::read_to_string(&files.diseases).unwrap();
        assert!(text.starts_with("disease_code,disease_name\n"));
        assert_eq!(read_relations(&files).unwrap(), sample());
    }

    #[test]
    fn never_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let w = SnapshotWriter::new(tmp.path());
        w.write_at(&sample(), &id("20250101_000000")).unwrap();
        let err = w.write_at(&Relations::default(), &id("20250101_000000")).unwrap_err();
        assert!(matches!(err, SnapshotError::Exists(_)));
        // Existing content is untouched.
        let files = locate_latest(tmp.path()).unwrap();
        assert_eq!(read_mappings(&files.mappings).unwrap().len(), 1);
    }

    #[test]
    fn latest_is_lexicographic_max() {
        let tmp = tempfile::tempdir().unwrap();
        let w = SnapshotWriter::new(tmp.path());
        for s in ["20240101_120000", "20250301_080000", "20250101_235959"] {
            w.write_at(&sample(), &id(s)).unwrap();
        }
        fs::write(tmp.path().join("disease_symptom_mappings_latest.csv"), "x").unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let ids = list_snapshots(tmp.path()).unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(locate_latest(tmp.path()).unwrap().id, id("20250301_080000"));
    }

    #[test]
    fn missing_pieces_are_named() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            locate_latest(&tmp.path().join("nope")),
            Err(SnapshotError::MissingDirectory(_))
        ));
        assert!(matches!(locate_latest(tmp.path()), Err(SnapshotError::NoMappings(_))));

        let files = SnapshotWriter::new(tmp.path()).write_at(&sample(), &id("20250101_000000")).unwrap();
        fs::remove_file(&files.symptoms).unwrap();
        match locate_latest(tmp.path()) {
            Err(SnapshotError::MissingArtifact(p)) => assert_eq!(p, files.symptoms),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn malformed_rank_reports_line() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("m.csv");
        fs::write(&p, "disease_name,symptom_name,frequency_count,symptom_rank\nflu,fever,3,1\nflu,cough,3,two\n").unwrap();
        match read_mappings(&p) {
            Err(SnapshotError::Malformed { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn columns_found_by_name() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("s.csv");
        fs::write(&p, "symptom_name,symptom_code\r\nfever,UMLS:C2_fever\r\n").unwrap();
        let s = read_symptoms(&p).unwrap();
        assert_eq!(s, vec![Symptom { code: s!("UMLS:C2_fever"), name: s!("fever") }]);

        fs::write(&p, "code,name\n").unwrap();
        assert!(matches!(read_symptoms(&p), Err(SnapshotError::Malformed { .. })));
    }
}
