// src/runner.rs
//
// One batch run: fetch → extract → interpret → validate → build → write.
// Strictly sequential; the only blocking step is the fetch.

use crate::{
    config::options::PipelineOptions,
    core::{
        html,
        net::{Fetcher, Transport},
    },
    error::PipelineError,
    index::Snapshot,
    model::Relations,
    progress::{Progress, Stage},
    relations,
    specs::kb,
    store::{SnapshotFiles, SnapshotWriter},
    validate::{self, RejectCounts},
};

/// Counts from the parse half of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseSummary {
    pub rows: usize,
    pub raw_pairs: usize,
    pub valid_pairs: usize,
    pub rejected: RejectCounts,
}

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub parse: ParseSummary,
    pub diseases: usize,
    pub symptoms: usize,
    pub mappings: usize,
    pub snapshot: SnapshotFiles,
}

fn step(progress: &mut Option<&mut dyn Progress>, stage: Stage) {
    logf!("=== {} ===", stage.label());
    if let Some(p) = progress.as_deref_mut() {
        p.log(stage.label());
    }
}

/// Short reborrow of the optional sink, so it can be handed on and used again.
fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    match progress {
        Some(p) => Some(&mut **p),
        None => None,
    }
}

fn done(progress: &mut Option<&mut dyn Progress>, stage: Stage) {
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(stage);
    }
}

/// Markup → relations, no I/O. Fails only when nothing usable was found.
pub fn process_markup(
    markup: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(Relations, ParseSummary), PipelineError> {
    step(&mut progress, Stage::Extract);
    let rows = html::extract(markup);
    if rows.is_empty() {
        loge!("Extract: no table rows found");
        return Err(PipelineError::NoRows);
    }
    done(&mut progress, Stage::Extract);

    step(&mut progress, Stage::Interpret);
    let parsed = kb::interpret(&rows);
    if parsed.triples.is_empty() {
        loge!("Interpret: no data extracted");
        return Err(PipelineError::NoTriples { rows: rows.len() });
    }
    done(&mut progress, Stage::Interpret);

    step(&mut progress, Stage::Validate);
    let valid = validate::validate(&parsed.triples);
    if valid.triples.is_empty() {
        logw!("Validate: every extracted pair was rejected; snapshot will be empty");
    }
    done(&mut progress, Stage::Validate);

    step(&mut progress, Stage::Build);
    let rel = relations::build(&valid.triples);
    done(&mut progress, Stage::Build);

    let summary = ParseSummary {
        rows: rows.len(),
        raw_pairs: parsed.triples.len(),
        valid_pairs: valid.triples.len(),
        rejected: valid.rejected,
    };
    Ok((rel, summary))
}

/// Full run against a given fetcher and writer.
pub fn run_with<T: Transport>(
    fetcher: &Fetcher<T>,
    writer: &SnapshotWriter,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, PipelineError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Stage::ALL.len());
    }

    let result = (|| -> Result<RunSummary, PipelineError> {
        step(&mut progress, Stage::Fetch);
        let markup = fetcher.fetch()?;
        done(&mut progress, Stage::Fetch);

        let (rel, parse) = process_markup(&markup, reborrow(&mut progress))?;

        step(&mut progress, Stage::Write);
        let snapshot = writer.write(&rel)?;
        done(&mut progress, Stage::Write);

        Ok(RunSummary {
            parse,
            diseases: rel.diseases.len(),
            symptoms: rel.symptoms.len(),
            mappings: rel.mappings.len(),
            snapshot,
        })
    })();

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

/// Top-level runner over the network source.
pub fn run(
    opts: &PipelineOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, PipelineError> {
    let fetcher = Fetcher::http(&opts.url, &opts.fetch)?;
    let writer = SnapshotWriter::new(&opts.out_dir);
    let summary = run_with(&fetcher, &writer, progress)?;
    logf!(
        "Run: {} diseases, {} symptoms, {} mappings → {}",
        summary.diseases,
        summary.symptoms,
        summary.mappings,
        writer.dir().display()
    );
    Ok(summary)
}

/// Log a short sample of a loaded snapshot (post-write sanity check).
pub fn report_snapshot(snap: &Snapshot) {
    let symptoms = snap.symptom_names();
    logf!("Check: unique symptoms {}", symptoms.len());
    logf!("Check: sample {:?}", &symptoms[..symptoms.len().min(5)]);

    let diseases = snap.disease_names();
    logf!("Check: total diseases {}", diseases.len());
    if let Some(first) = diseases.first() {
        let syms = snap.index().symptoms_for(first);
        logf!("Check: {} -> {:?}", first, &syms[..syms.len().min(3)]);
    }
    if let Some(first) = symptoms.iter().find(|s| !snap.index().diseases_for(s).is_empty()) {
        let ds = snap.index().diseases_for(first);
        logf!("Check: {} -> {:?}", first, &ds[..ds.len().min(3)]);
    }
}
