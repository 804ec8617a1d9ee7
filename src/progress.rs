// src/progress.rs
/// Lightweight progress reporting for a pipeline run.
/// Frontends (viewer/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Extract,
    Interpret,
    Validate,
    Build,
    Write,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Fetch,
        Stage::Extract,
        Stage::Interpret,
        Stage::Validate,
        Stage::Build,
        Stage::Write,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Fetch => "Fetching source page",
            Stage::Extract => "Extracting table rows",
            Stage::Interpret => "Reading disease/symptom rows",
            Stage::Validate => "Validating pairs",
            Stage::Build => "Building relations",
            Stage::Write => "Writing snapshot",
        }
    }
}
