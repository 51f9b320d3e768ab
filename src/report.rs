use crate::cli::OutputFormat;
use crate::dispatch::build_from_package;
use crate::dlog;
use crate::error::WorkoutError;
use crate::summary::WorkoutSummary;
use crate::types::Package;
use anyhow::{Context, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    pub printed: usize,
    pub failed: usize,
}

/// Dispatch one package and compute its summary.
pub fn summarize(pkg: &Package) -> Result<WorkoutSummary, WorkoutError> {
    let workout = build_from_package(pkg)?;
    Ok(workout.summary())
}

/// Process packages in order, writing one line per successful package.
///
/// Without `keep_going` the first failure is returned. With it, failures are
/// logged and counted, and the remaining packages still run.
pub fn run<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    keep_going: bool,
    out: &mut W,
) -> Result<RunStats> {
    let mut stats = RunStats::default();

    for (i, pkg) in packages.iter().enumerate() {
        let summary = match summarize(pkg) {
            Ok(s) => s,
            Err(e) if keep_going => {
                tracing::error!(index = i, code = %pkg.code, err = %e, "skipping package");
                stats.failed += 1;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("package #{i} ({})", pkg.code));
            }
        };

        dlog!(
            "package={i} workout={} distance_km={} speed_kmh={} kcal={}",
            summary.label,
            summary.distance_km,
            summary.speed_kmh,
            summary.calories_kcal
        );

        match format {
            OutputFormat::Text => writeln!(out, "{summary}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &summary).context("writing JSON summary")?;
                writeln!(out)?;
            }
        }
        stats.printed += 1;
    }

    Ok(stats)
}
