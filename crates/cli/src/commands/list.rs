use std::io::{Stderr, Stdout};
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use dirview_listing::ListingStore;
use log::error;

use crate::commands::{EXIT_FATAL, ScanArgs, SortKey, report_diagnostics};
use crate::printer::{
    ColorChoice, HumanPrinter, JsonPrinter, ListingPrintContext, ListingPrinter, OutputFormat,
    PrinterConfig,
};

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Row order
    #[arg(long, short = 's', value_enum, default_value = "name")]
    pub sort: SortKey,

    /// Show full paths instead of bare names
    #[arg(long)]
    pub full_path: bool,

    /// Maximum number of rows to display (0 = all)
    #[arg(long, short = 'n', default_value = "0")]
    pub limit: usize,

    /// Output rows as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,
}

impl ListArgs {
    fn make_printer(&self) -> Box<dyn ListingPrinter> {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        let color = match self.color.as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };

        let cfg = PrinterConfig {
            color,
            limit: self.limit,
        };

        match format {
            OutputFormat::Human => Box::new(HumanPrinter::<Stdout, Stderr>::stdout(cfg)),
            OutputFormat::Json => Box::new(JsonPrinter::<Stdout, Stderr>::stdout(cfg)),
        }
    }
}

pub fn run(args: ListArgs) -> ExitCode {
    match execute(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("[list] {e}");
            eprintln!("[list] {e}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn execute(args: &ListArgs) -> Result<ExitCode> {
    let mut store = args.scan.load()?;
    store.sort(args.sort.into());
    store.set_show_full_path(args.full_path);

    let mut printer = args.make_printer();
    print_store(&store, printer.as_mut(), args.limit)?;

    Ok(report_diagnostics(store.diagnostics()))
}

pub fn print_store(
    store: &ListingStore,
    printer: &mut dyn ListingPrinter,
    limit: usize,
) -> std::io::Result<()> {
    let total = store.row_count();
    let shown = if limit == 0 { total } else { limit.min(total) };

    let ctx = ListingPrintContext {
        root: store.root(),
        total,
        truncated: shown < total,
        failures: store.diagnostics().len(),
    };

    printer.begin(&ctx)?;
    for row in store.rows().take(shown) {
        printer.print_row(&row, &ctx)?;
    }
    printer.finish(&ctx)
}
