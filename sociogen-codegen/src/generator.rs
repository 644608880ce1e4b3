//! Orchestration of one generation run: scan whatever output files
//! already exist, render, write.
//!
//! A write failure for one file is collected and reported; it never
//! aborts emission of the remaining files. The outputs are regenerable
//! build artifacts, so there is no rollback either.

use std::path::{Path, PathBuf};

use sociogen_schema::Structure;

use crate::{
    END_MARKER, MergeRegions, Network, START_MARKER,
    files::{InterfaceHeader, InterfaceSource, OntologyHeader, PrivateHeader},
};

/// One rendered output file, not yet written to disk.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// A file that could not be written.
#[derive(Debug)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub message: String,
}

impl std::fmt::Display for WriteFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to write '{}': {}", self.path.display(), self.message)
    }
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub written: Vec<PathBuf>,
    pub failures: Vec<WriteFailure>,
    /// Marker-scan diagnostics from the pre-existing output files,
    /// prefixed with the file they came from.
    pub diagnostics: Vec<String>,
}

pub struct Generator<'a> {
    structure: &'a Structure,
    network: Network,
}

impl<'a> Generator<'a> {
    pub fn new(structure: &'a Structure, network: Network) -> Self {
        Self { structure, network }
    }

    /// Render the class files against whatever already exists in
    /// `output_dir`, without writing anything.
    pub fn preview_interface(&self, output_dir: &Path) -> (Vec<PreviewFile>, Vec<String>) {
        let mut files = Vec::new();
        let mut diagnostics = Vec::new();

        let header = InterfaceHeader::new(self.structure, self.network);
        files.push(PreviewFile {
            path: output_dir.join(header.file_name()),
            content: header.render(),
        });

        if self.structure.identifiable {
            let private = PrivateHeader::new(self.structure, self.network);
            let path = output_dir.join(private.file_name());
            let regions = self.scan(&path, &mut diagnostics);
            files.push(PreviewFile {
                path,
                content: private.render(&regions),
            });
        }

        let source = InterfaceSource::new(self.structure, self.network);
        let path = output_dir.join(source.file_name());
        let regions = self.scan(&path, &mut diagnostics);
        files.push(PreviewFile {
            path,
            content: source.render(&regions),
        });

        (files, diagnostics)
    }

    /// Render and overwrite the class files in `output_dir`.
    pub fn generate_interface(&self, output_dir: &Path) -> GenerateResult {
        let (files, diagnostics) = self.preview_interface(output_dir);
        let mut result = GenerateResult {
            diagnostics,
            ..Default::default()
        };
        for file in files {
            write_file(file, &mut result);
        }
        result
    }

    /// Render the shared ontology-constants file against its current
    /// content, without writing it.
    pub fn preview_ontology(&self, ontology_file: &Path) -> (PreviewFile, Vec<String>) {
        let mut diagnostics = Vec::new();
        let regions = self.scan(ontology_file, &mut diagnostics);
        let ontology = OntologyHeader::new(self.structure, self.network);
        (
            PreviewFile {
                path: ontology_file.to_path_buf(),
                content: ontology.render(&regions),
            },
            diagnostics,
        )
    }

    /// Render and overwrite the shared ontology-constants file,
    /// replacing this structure's region and passing every other
    /// region through unchanged.
    pub fn generate_ontology(&self, ontology_file: &Path) -> GenerateResult {
        let (file, diagnostics) = self.preview_ontology(ontology_file);
        let mut result = GenerateResult {
            diagnostics,
            ..Default::default()
        };
        write_file(file, &mut result);
        result
    }

    fn scan(&self, path: &Path, diagnostics: &mut Vec<String>) -> MergeRegions {
        let regions = MergeRegions::from_file(path, START_MARKER, END_MARKER);
        for diagnostic in &regions.diagnostics {
            diagnostics.push(format!("{}: {}", path.display(), diagnostic));
        }
        regions
    }
}

fn write_file(file: PreviewFile, result: &mut GenerateResult) {
    match std::fs::write(&file.path, &file.content) {
        Ok(()) => result.written.push(file.path),
        Err(e) => result.failures.push(WriteFailure {
            path: file.path,
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use sociogen_schema::{Property, Structure};

    use super::*;

    fn structure(identifiable: bool) -> Structure {
        Structure {
            name: "photo".into(),
            doc: String::new(),
            identifiable,
            properties: vec![Property {
                name: "source".into(),
                key: "source".into(),
                ty: "QUrl".into(),
                doc: String::new(),
                is_const: false,
                is_pointer: false,
                is_reference: false,
                is_list: false,
                custom: false,
                is_ontology: true,
            }],
            methods: vec![],
            extra: Default::default(),
        }
    }

    #[test]
    fn test_identifiable_previews_three_files() {
        let s = structure(true);
        let (files, diagnostics) =
            Generator::new(&s, Network::Facebook).preview_interface(Path::new("out"));
        let names: Vec<String> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "facebookphotointerface.h",
                "facebookphotointerface_p.h",
                "facebookphotointerface.cpp"
            ]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_embedded_previews_two_files() {
        let s = structure(false);
        let (files, _) = Generator::new(&s, Network::Facebook).preview_interface(Path::new("out"));
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_generate_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let s = structure(true);
        let result = Generator::new(&s, Network::Facebook).generate_interface(dir.path());
        assert_eq!(result.written.len(), 3);
        assert!(result.failures.is_empty());
        for path in &result.written {
            assert!(path.exists());
        }
    }

    #[test]
    fn test_write_failure_does_not_abort_remaining_files() {
        let dir = tempfile::tempdir().unwrap();
        let s = structure(true);
        // Occupy the public header's path with a directory so writing
        // it fails while the other two files still go through
        std::fs::create_dir(dir.path().join("facebookphotointerface.h")).unwrap();

        let result = Generator::new(&s, Network::Facebook).generate_interface(dir.path());
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.written.len(), 2);
        assert!(
            result.failures[0]
                .to_string()
                .contains("facebookphotointerface.h")
        );
    }

    #[test]
    fn test_scan_diagnostics_carry_the_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facebookphotointerface.cpp");
        std::fs::write(&path, "// >>> orphan\n").unwrap();

        let s = structure(true);
        let (_, diagnostics) =
            Generator::new(&s, Network::Facebook).preview_interface(dir.path());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].contains("facebookphotointerface.cpp"));
        assert!(diagnostics[0].contains("line 1"));
    }

    #[test]
    fn test_generate_ontology_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facebookontology_p.h");
        let s = structure(true);
        let result = Generator::new(&s, Network::Facebook).generate_ontology(&path);
        assert_eq!(result.written.len(), 1);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("// <<< photo"));
    }
}
