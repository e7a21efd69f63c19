//! Console rendering of scan progress

use owo_colors::OwoColorize;
use repair::{RepairError, RepairSummary, Reporter};
use std::io::{self, Write};
use std::path::Path;

/// Writes human-readable progress lines for each scan
///
/// Output errors (e.g. a closed pipe) are ignored so that reporting can
/// never interrupt a repair.
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter on stdout, colored when stdout is a terminal
    pub fn stdout() -> Self {
        use std::io::IsTerminal;

        let out = io::stdout();
        let color = out.is_terminal();
        Self { out, color }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Print a line outside of the reporter callbacks
    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn scan_started(&mut self, root: &Path) {
        let _ = writeln!(
            self.out,
            "Finding invalid modified date files in {}",
            root.display()
        );
    }

    fn invalid_found(&mut self, count: usize) {
        let _ = if count == 0 {
            writeln!(self.out, "No invalid files found.")
        } else if self.color {
            writeln!(
                self.out,
                "{} invalid modified date file(s) found.",
                count.yellow().bold()
            )
        } else {
            writeln!(self.out, "{} invalid modified date file(s) found.", count)
        };
    }

    fn progress(&mut self, index: usize, total: usize, path: &Path) {
        let _ = writeln!(self.out, "{} / {} | {}", index, total, path.display());
    }

    fn repair_failed(&mut self, path: &Path, error: &RepairError) {
        let message = match error {
            RepairError::SetModified { source, .. } => {
                format!("Cannot set date for {}! Error: {}", path.display(), source)
            }
            other => format!("Cannot set date for {}! Error: {}", path.display(), other),
        };
        let _ = if self.color {
            writeln!(self.out, "{}", message.red())
        } else {
            writeln!(self.out, "{}", message)
        };
    }

    fn completed(&mut self, summary: &RepairSummary) {
        if summary.invalid == 0 {
            return;
        }
        if summary.failed > 0 {
            let message = format!("{} file(s) could not be updated.", summary.failed);
            let _ = if self.color {
                writeln!(self.out, "{}", message.yellow())
            } else {
                writeln!(self.out, "{}", message)
            };
        }
        let _ = if self.color {
            writeln!(self.out, "{}", "Completed.".green())
        } else {
            writeln!(self.out, "Completed.")
        };
    }
}
