use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use dirview_fs::ScanReport;
use log::error;

use crate::commands::{EXIT_FATAL, ScanArgs, report_diagnostics};

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub scan: ScanArgs,
}

pub fn run(args: StatsArgs) -> ExitCode {
    match execute(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("[stats] {e}");
            eprintln!("[stats] {e}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn execute(args: &StatsArgs) -> Result<ExitCode> {
    let options = args.scan.options();
    let report = args.scan.report()?;

    write_stats(&mut io::stdout(), &report, options.lists_directories())?;

    Ok(report_diagnostics(&report.diagnostics))
}

/// Directories are not rows in files-only mode, so their count is omitted.
pub fn write_stats<W: Write>(out: &mut W, report: &ScanReport, with_dirs: bool) -> io::Result<()> {
    writeln!(out, "[stats] root:     {}", report.root.display())?;
    writeln!(out, "[stats] files:    {}", report.file_count())?;
    if with_dirs {
        writeln!(out, "[stats] dirs:     {}", report.dir_count())?;
    }
    writeln!(out, "[stats] size:     {} bytes", report.total_size())?;
    writeln!(out, "[stats] failures: {}", report.diagnostics.len())
}
