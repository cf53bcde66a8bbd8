//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! With a source attached, labels show `path:line:col`, the source line
//! and a caret underline; without one they fall back to byte ranges.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

struct SourceContext {
    path: String,
    text: String,
    table: LineOffsetTable,
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Resolve spans against `text`, reported as coming from `path`.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(SourceContext {
            path: path.into(),
            table: LineOffsetTable::build(&text),
            text,
        });
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn write_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };

        let Some(source) = &self.source else {
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            return;
        };

        let pos = source.table.position(&source.text, label.span.start);
        let line_text = source
            .table
            .line_text(&source.text, pos.line)
            .unwrap_or("")
            .to_owned();
        let gutter = pos.line.to_string();
        let pad = " ".repeat(gutter.len());
        let underline_len = label
            .span
            .slice(&source.text)
            .lines()
            .next()
            .map_or(0, |first| first.chars().count())
            .max(1);
        let caret = if label.is_primary { "^" } else { "-" };
        let path = source.path.clone();

        let _ = writeln!(self.writer, "{pad}{marker} {path}:{pos}");
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{gutter} | {line_text}");
        let _ = write!(
            self.writer,
            "{pad} | {}",
            " ".repeat(pos.column.saturating_sub(1) as usize)
        );
        self.write_colored(&caret.repeat(underline_len), color);
        let _ = write!(self.writer, " ");
        self.write_colored(&label.message, color);
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        if let Some(expected) = diagnostic.expected_summary() {
            let _ = write!(self.writer, "  = ");
            self.write_colored("expected", colors::BOLD);
            let _ = writeln!(self.writer, ": {expected}");
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_severity(Severity::Error);
            let _ = writeln!(
                self.writer,
                ": aborting due to {error_count} previous error{}",
                plural_s(error_count)
            );
        }
        if warning_count > 0 {
            self.write_severity(Severity::Warning);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
