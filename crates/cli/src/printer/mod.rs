use std::io::{self, Write};
use std::path::Path;

use dirview_listing::{Role, RowView};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable columns with optional colors.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Automatically detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub color: ColorChoice,
    /// Maximum number of rows to print; 0 prints everything.
    pub limit: usize,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            limit: 0,
        }
    }
}

/// Static context about a print run.
#[derive(Debug)]
pub struct ListingPrintContext<'a> {
    pub root: Option<&'a Path>,
    /// Row count before the limit.
    pub total: usize,
    pub truncated: bool,
    /// Number of scan diagnostics.
    pub failures: usize,
}

pub trait ListingPrinter {
    /// Called once before any rows are printed.
    fn begin(&mut self, ctx: &ListingPrintContext) -> io::Result<()>;

    fn print_row(&mut self, row: &RowView<'_>, ctx: &ListingPrintContext) -> io::Result<()>;

    /// Called once after all rows are printed. Summaries go here.
    fn finish(&mut self, ctx: &ListingPrintContext) -> io::Result<()>;
}

/// Column printer: kind, size, display name.
pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
    use_color: bool,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        // Generic writers cannot be probed for a TTY, so Auto means no color.
        let use_color = cfg.color == ColorChoice::Always;
        Self {
            out,
            err,
            cfg,
            use_color,
        }
    }

    /// Create a printer that writes to stdout and stderr with TTY detection.
    pub fn stdout(cfg: PrinterConfig) -> HumanPrinter<io::Stdout, io::Stderr> {
        use std::io::IsTerminal;

        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        HumanPrinter {
            out: io::stdout(),
            err: io::stderr(),
            cfg,
            use_color,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    #[inline]
    fn format_name(&self, name: &str, is_directory: bool) -> String {
        if self.use_color && is_directory {
            format!("\x1b[34m{}/\x1b[0m", name)
        } else if is_directory {
            format!("{}/", name)
        } else {
            name.to_owned()
        }
    }
}

impl<W: Write, E: Write> ListingPrinter for HumanPrinter<W, E> {
    fn begin(&mut self, ctx: &ListingPrintContext) -> io::Result<()> {
        if let Some(root) = ctx.root {
            writeln!(self.err, "[list] {}", root.display())?;
        }
        Ok(())
    }

    fn print_row(&mut self, row: &RowView<'_>, _ctx: &ListingPrintContext) -> io::Result<()> {
        let size = if row.is_directory() {
            "-".to_owned()
        } else {
            row.size().to_string()
        };
        let name = self.format_name(&row.display_name(), row.is_directory());
        writeln!(self.out, "{:<12} {:>12}  {}", row.kind_label(), size, name)
    }

    fn finish(&mut self, ctx: &ListingPrintContext) -> io::Result<()> {
        if ctx.truncated {
            let remaining = ctx.total.saturating_sub(self.cfg.limit);
            writeln!(self.out, "... and {} more rows", remaining)?;
        }
        writeln!(self.err, "[list] {} rows", ctx.total)
    }
}

/// One JSON object per row, keyed by role name.
pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self { out, err, cfg }
    }

    /// Create a printer that writes to stdout and stderr.
    pub fn stdout(cfg: PrinterConfig) -> JsonPrinter<io::Stdout, io::Stderr> {
        JsonPrinter {
            out: io::stdout(),
            err: io::stderr(),
            cfg,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

fn row_to_json(row: &RowView<'_>) -> serde_json::Value {
    let obj: serde_json::Map<String, serde_json::Value> = Role::ALL
        .into_iter()
        .map(|role| {
            let value = serde_json::to_value(row.value(role)).unwrap_or(serde_json::Value::Null);
            (role.name().to_owned(), value)
        })
        .collect();
    serde_json::Value::Object(obj)
}

impl<W: Write, E: Write> ListingPrinter for JsonPrinter<W, E> {
    fn begin(&mut self, _ctx: &ListingPrintContext) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, row: &RowView<'_>, _ctx: &ListingPrintContext) -> io::Result<()> {
        writeln!(self.out, "{}", row_to_json(row))
    }

    fn finish(&mut self, ctx: &ListingPrintContext) -> io::Result<()> {
        let obj = serde_json::json!({
            "type": "summary",
            "root": ctx.root.map(|p| p.display().to_string()),
            "total": ctx.total,
            "limit": self.cfg.limit,
            "truncated": ctx.truncated,
            "failures": ctx.failures,
        });
        writeln!(self.err, "{}", obj)
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
