// src/cli.rs
use std::{env, path::PathBuf, time::Duration};

use crate::{
    config::options::PipelineOptions,
    error::CliError,
    index::Snapshot,
    runner,
};

const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub options: PipelineOptions,
    /// Skip the pipeline and only load the latest snapshot.
    pub load_only: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(CliArgs),
    Help,
}

pub fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", HELP);
            Ok(())
        }
        Command::Run(args) => execute(&args),
    }
}

/// Run (or skip) the pipeline, then load the snapshot and log a sample.
pub fn execute(args: &CliArgs) -> Result<(), CliError> {
    let snap = if args.load_only {
        logf!("Load-only: reading latest snapshot in {}", args.options.out_dir.display());
        Snapshot::open_latest(&args.options.out_dir)?
    } else {
        let summary = runner::run(&args.options, None)?;
        logf!(
            "Parse: rows {}, pairs {}, kept {}, rejected {}",
            summary.parse.rows,
            summary.parse.raw_pairs,
            summary.parse.valid_pairs,
            summary.parse.rejected.total()
        );
        Snapshot::open(summary.snapshot)?
    };

    runner::report_snapshot(&snap);
    let st = snap.stats();
    logf!(
        "Stats: {} diseases, {} symptoms, {} associations",
        st.total_diseases,
        st.total_symptoms,
        st.total_associations
    );
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = PipelineOptions::default();
    let mut load_only = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => options.url = value(&mut args, "--url")?,
            "-o" | "--out" => options.out_dir = PathBuf::from(value(&mut args, "--out")?),
            "--retries" => {
                let v = value(&mut args, "--retries")?;
                let n: u32 = v.parse().map_err(|_| usage(format!("Invalid --retries: {}", v)))?;
                if n == 0 {
                    return Err(usage("--retries must be at least 1"));
                }
                options.fetch.attempts = n;
            }
            "--timeout" => {
                let v = value(&mut args, "--timeout")?;
                let secs: u64 = v.parse().map_err(|_| usage(format!("Invalid --timeout: {}", v)))?;
                options.fetch.timeout = Duration::from_secs(secs);
            }
            "--load-only" => load_only = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(usage(format!("Unknown arg: {}", a))),
        }
    }

    Ok(Command::Run(CliArgs { options, load_only }))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    args.next().ok_or_else(|| usage(format!("Missing value for {}", flag)))
}

fn usage(msg: impl Into<String>) -> CliError {
    CliError::Usage(msg.into())
}
