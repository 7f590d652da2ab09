use std::{fmt::Write as _, fs::OpenOptions, io::Write, path::Path};

use log::info;

use crate::{error::Result, Algorithm, BenchReport, PassTiming};

pub fn header() -> String {
    format!(
        "{:<6} {:<16} {:<16} {:<16}",
        "Sr", "Binary", "Quaternary", "Interpolation"
    )
}

/// One row of the per-pass table, times in seconds.
pub fn pass_line(pass: usize, timing: &PassTiming) -> String {
    let [b, q, i] = timing.times.map(|t| t.as_secs_f64());
    format!("{pass:<6} {b:<16.6} {q:<16.6} {i:<16.6}")
}

pub fn summary(report: &BenchReport) -> String {
    let s = &report.summary;
    let t = &s.time_deltas;
    let it = &s.iteration_deltas;
    let mut out = String::new();

    // Writing into a String can not fail.
    let _ = writeln!(out, "Average times");
    let _ = writeln!(out, "{:<14} {:.6}s", "Binary", s.avg(Algorithm::Binary));
    let _ = writeln!(
        out,
        "{:<14} {:.6}s ({:.2}% faster than Binary)",
        "Quaternary",
        s.avg(Algorithm::Quaternary),
        t.quaternary_vs_binary
    );
    let _ = writeln!(
        out,
        "{:<14} {:.6}s ({:.2}% faster than Binary) ({:.2}% faster than Quaternary)",
        "Interpolation",
        s.avg(Algorithm::Interpolation),
        t.interpolation_vs_binary,
        t.interpolation_vs_quaternary
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Total iterations");
    let _ = writeln!(
        out,
        "{:<14} {}",
        "Binary",
        report.iterations(Algorithm::Binary)
    );
    let _ = writeln!(
        out,
        "{:<14} {} ({:.2}% less iterations than Binary)",
        "Quaternary",
        report.iterations(Algorithm::Quaternary),
        it.quaternary_vs_binary
    );
    let _ = writeln!(
        out,
        "{:<14} {} ({:.2}% less iterations than Binary) ({:.2}% less iterations than Quaternary)",
        "Interpolation",
        report.iterations(Algorithm::Interpolation),
        it.interpolation_vs_binary,
        it.interpolation_vs_quaternary
    );
    if report.total_anomalies() > 0 {
        let _ = writeln!(
            out,
            "\nWARNING: {} keys were not found, results are suspect",
            report.total_anomalies()
        );
    }
    out
}

/// The line appended to the results file:
/// size, average binary time, average quaternary time, quaternary delta.
pub fn result_line(report: &BenchReport) -> String {
    let s = &report.summary;
    format!(
        "{}, {:.6}, {:.6}, {:.6}\n",
        report.size,
        s.avg(Algorithm::Binary),
        s.avg(Algorithm::Quaternary),
        s.time_deltas.quaternary_vs_binary
    )
}

/// Append the summary line to `path`, creating the file if needed.
pub fn append_result(path: &Path, report: &BenchReport) -> Result<()> {
    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    f.write_all(result_line(report).as_bytes())?;
    info!("Appended results to {path:?}");
    Ok(())
}

pub fn save_json(path: &Path, report: &BenchReport) -> Result<()> {
    let f = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(f, report)?;
    info!("Saved report to {path:?}");
    Ok(())
}
