//! Diagnostic rendering.
//!
//! Text lines look like `file(line,col): error RBZ5001: message`. Line and
//! column come from the source file when it is readable, otherwise the raw
//! byte offset is printed.

use anyhow::{Context, Result};
use colored::Colorize;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

use crate::common::diagnostics::DiagnosticRelatedInformation;
use crate::common::{Diagnostic, DiagnosticCategory, LineMap};

pub struct Reporter {
    color: bool,
    base_dir: Option<PathBuf>,
    /// `None` caches a file that could not be read.
    line_maps: FxHashMap<String, Option<LineMap>>,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            base_dir: None,
            line_maps: FxHashMap::default(),
        }
    }

    /// Resolve relative diagnostic file names against `dir`.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Register source text for `file` instead of reading it from disk.
    pub fn add_source(&mut self, file: impl Into<String>, text: &str) {
        self.line_maps.insert(file.into(), Some(LineMap::build(text)));
    }

    /// One diagnostic per line (related information indented below), with a
    /// trailing summary line.
    pub fn render(&mut self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for diagnostic in diagnostics {
            out.push_str(&self.format_diagnostic(diagnostic));
            out.push('\n');
        }
        if !diagnostics.is_empty() {
            out.push('\n');
            out.push_str(&self.format_summary(diagnostics.len()));
            out.push('\n');
        }
        out
    }

    pub fn render_json(diagnostics: &[Diagnostic]) -> Result<String> {
        serde_json::to_string_pretty(diagnostics).context("failed to serialize diagnostics")
    }

    pub fn format_diagnostic(&mut self, diagnostic: &Diagnostic) -> String {
        let location = self.format_location(&diagnostic.file, diagnostic.start);
        let category = self.format_category(diagnostic.category);
        let code = self.format_code(diagnostic.code);

        let mut output = format!("{location}: {category}");
        if !code.is_empty() {
            output.push(' ');
            output.push_str(&code);
        }
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        for related in &diagnostic.related_information {
            output.push('\n');
            output.push_str(&self.format_related(related));
        }
        output
    }

    fn format_related(&mut self, related: &DiagnosticRelatedInformation) -> String {
        let location = self.format_location(&related.file, related.start);
        let prefix = if self.color {
            "  Related".dimmed().to_string()
        } else {
            "  Related".to_string()
        };
        format!("{prefix}: {location} - {}", related.message_text)
    }

    fn format_location(&mut self, file: &str, offset: u32) -> String {
        if file.is_empty() {
            return "<unknown>".to_string();
        }
        let position = match self.line_map(file) {
            Some(map) => {
                let position = map.offset_to_position(offset);
                format!("{file}({},{})", position.line + 1, position.character + 1)
            }
            None => format!("{file}@{offset}"),
        };
        if self.color {
            position.cyan().to_string()
        } else {
            position
        }
    }

    fn line_map(&mut self, file: &str) -> Option<&LineMap> {
        if !self.line_maps.contains_key(file) {
            let path = match &self.base_dir {
                Some(dir) => dir.join(file),
                None => Path::new(file).to_path_buf(),
            };
            let map = std::fs::read_to_string(path)
                .ok()
                .map(|text| LineMap::build(&text));
            self.line_maps.insert(file.to_string(), map);
        }
        self.line_maps.get(file)?.as_ref()
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = match category {
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Suggestion => "suggestion",
            DiagnosticCategory::Message => "message",
        };

        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Suggestion => label.blue().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        if code == 0 {
            return String::new();
        }
        let label = format!("RBZ{code}");
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }

    fn format_summary(&self, count: usize) -> String {
        let summary = if count == 1 {
            "Found 1 error.".to_string()
        } else {
            format!("Found {count} errors.")
        };
        if self.color {
            summary.red().bold().to_string()
        } else {
            summary
        }
    }
}
