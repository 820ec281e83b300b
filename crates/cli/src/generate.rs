use crate::pass::ProjectPass;
use anyhow::Context;
use routegen_core::GenerationOutcome;
use routegen_core::emit::routes_file_id;
use routegen_java::JavaRoutesEmitter;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

pub struct GenerateArgs {
    pub path: PathBuf,
    pub out: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub dry_run: bool,
}

pub struct GenerateReport {
    pub pass: ProjectPass,
    /// Files written, or that would have been written on a dry run.
    pub written: Vec<PathBuf>,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<ExitCode> {
    let report = execute(&args)?;
    report.pass.print_diagnostics();

    match &report.pass.outcome {
        GenerationOutcome::NotConfigured => {
            eprintln!(
                "No configuration marker found in {}; nothing generated",
                args.path.display()
            );
        }
        GenerationOutcome::Generated(_) if args.dry_run => {
            for file in &report.pass.output.files {
                println!("{}", file.text);
            }
            for path in &report.written {
                eprintln!("Would write {}", path.display());
            }
        }
        GenerationOutcome::Generated(generated) => {
            for path in &report.written {
                eprintln!(
                    "Wrote {} ({} routes)",
                    path.display(),
                    generated.table.len()
                );
            }
        }
        GenerationOutcome::MissingSuffix
        | GenerationOutcome::Degraded
        | GenerationOutcome::Cancelled => {}
    }

    Ok(if report.pass.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Runs the pass and writes its output unless `dry_run` is set.
pub fn execute(args: &GenerateArgs) -> anyhow::Result<GenerateReport> {
    let pass = ProjectPass::execute(&args.path, args.config.as_deref())?;

    let mut written = Vec::new();
    let dir = pass.output_dir(args.out.as_deref());
    if pass.outcome.generated().is_none() {
        if !args.dry_run {
            remove_stale_output(&dir)?;
        }
    } else {
        for file in &pass.output.files {
            let target = dir.join(&file.file_id);
            if !args.dry_run {
                fs::create_dir_all(&dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
                fs::write(&target, &file.text)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                info!("Wrote {}", target.display());
            }
            written.push(target);
        }
    }

    Ok(GenerateReport { pass, written })
}

/// A pass that produced nothing must not leave an earlier registry behind.
fn remove_stale_output(dir: &Path) -> anyhow::Result<()> {
    let stale = dir.join(routes_file_id(&JavaRoutesEmitter::new()));
    if stale.is_file() {
        fs::remove_file(&stale)
            .with_context(|| format!("failed to remove {}", stale.display()))?;
        info!("Removed stale {}", stale.display());
    }
    Ok(())
}
