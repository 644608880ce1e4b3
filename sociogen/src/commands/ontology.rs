use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sociogen_codegen::Generator;
use sociogen_schema::Structure;

use super::{NetworkArg, UnwrapOrExit};

#[derive(Args)]
pub struct OntologyCommand {
    /// Path to the ontology-constants file to update
    pub ontology_file: PathBuf,

    /// Path to the structure file
    pub structure_file: PathBuf,

    /// Social network the constants belong to
    #[arg(value_enum)]
    pub network: NetworkArg,

    /// Preview the updated file without writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl OntologyCommand {
    pub fn run(&self) -> Result<()> {
        let loaded = Structure::open(&self.structure_file).unwrap_or_exit();
        for warning in &loaded.warnings {
            eprintln!("warning: {}", warning);
        }

        let generator = Generator::new(&loaded.structure, self.network.into());
        if self.dry_run {
            let (file, diagnostics) = generator.preview_ontology(&self.ontology_file);
            for diagnostic in &diagnostics {
                eprintln!("warning: {}", diagnostic);
            }
            println!("── {} ──", file.path.display());
            println!("{}", file.content);
            return Ok(());
        }

        let result = generator.generate_ontology(&self.ontology_file);
        for diagnostic in &result.diagnostics {
            eprintln!("warning: {}", diagnostic);
        }
        for failure in &result.failures {
            eprintln!("error: {}", failure);
        }
        for path in &result.written {
            println!("Updated: {}", path.display());
        }
        Ok(())
    }
}
