//! Extraction of hand-written regions from previously generated files.
//!
//! A region is the text between a `<start> <label>` line and the
//! matching `<end> <label>` line. The scan is purely line-oriented; it
//! never parses the target syntax, only looks for literal marker
//! prefixes. Regions may nest or overlap: while several labels are
//! open, every line is accumulated into all of them.

use std::path::Path;

use indexmap::IndexMap;

/// A non-fatal problem found while scanning a file for marker regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeDiagnostic {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for MergeDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// The marker regions extracted from one existing output file, keyed by
/// label in order of first appearance.
#[derive(Debug, Default)]
pub struct MergeRegions {
    regions: IndexMap<String, String>,
    pub diagnostics: Vec<MergeDiagnostic>,
}

impl MergeRegions {
    /// Scan a file on disk. An unopenable file yields an empty result:
    /// first-time generation and regeneration share one code path.
    pub fn from_file(path: &Path, start_marker: &str, end_marker: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(src) => Self::from_str(&src, start_marker, end_marker),
            Err(_) => Self::default(),
        }
    }

    /// Scan in-memory text for marker regions.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(src: &str, start_marker: &str, end_marker: &str) -> Self {
        let mut result = Self::default();
        // Labels currently open, in opening order
        let mut open: Vec<String> = Vec::new();

        for (index, line) in src.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();

            if let Some(rest) = trimmed.strip_prefix(end_marker) {
                let label = rest.trim();
                if let Some(position) = open.iter().position(|entry| entry == label) {
                    open.remove(position);
                } else {
                    result.diagnostics.push(MergeDiagnostic {
                        line: line_number,
                        message: "got an end marker without start marker".to_string(),
                    });
                }
            }

            // Every line read while a label is open belongs to it,
            // including marker lines of other labels
            for label in &open {
                let text = result.regions.get_mut(label).expect("open label has entry");
                text.push_str(line);
                text.push('\n');
            }

            if let Some(rest) = trimmed.strip_prefix(start_marker) {
                let label = rest.trim();
                if open.iter().any(|entry| entry == label) {
                    result.diagnostics.push(MergeDiagnostic {
                        line: line_number,
                        message: format!("the entry {} is already being written", label),
                    });
                } else {
                    open.push(label.to_string());
                    result.regions.insert(label.to_string(), String::new());
                }
            }
        }

        // End of file with labels still open is accepted silently;
        // whatever accumulated so far is kept
        result
    }

    /// Labels in order of first appearance.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.regions.get(label).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.regions.contains_key(label)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Append a marker-delimited slot to `out`: the previously
    /// extracted text for `label` if present, the placeholder line
    /// otherwise. This is the round-trip guarantee; extracted text is
    /// spliced back byte-for-byte.
    pub fn splice_into(&self, out: &mut String, label: &str, placeholder: &str) {
        out.push_str(crate::START_MARKER);
        out.push(' ');
        out.push_str(label);
        out.push('\n');
        match self.get(label) {
            Some(text) => out.push_str(text),
            None => {
                out.push_str(placeholder);
                out.push('\n');
            }
        }
        out.push_str(crate::END_MARKER);
        out.push(' ');
        out.push_str(label);
        out.push('\n');
    }
}
