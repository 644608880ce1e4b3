use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sociogen_codegen::Generator;
use sociogen_schema::Structure;

use super::{NetworkArg, UnwrapOrExit};

#[derive(Args)]
pub struct InterfaceCommand {
    /// Path to the structure file
    pub structure_file: PathBuf,

    /// Social network the generated classes belong to
    #[arg(value_enum)]
    pub network: NetworkArg,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl InterfaceCommand {
    pub fn run(&self) -> Result<()> {
        let loaded = Structure::open(&self.structure_file).unwrap_or_exit();
        for warning in &loaded.warnings {
            eprintln!("warning: {}", warning);
        }

        let generator = Generator::new(&loaded.structure, self.network.into());
        if self.dry_run {
            let (files, diagnostics) = generator.preview_interface(&self.output);
            for diagnostic in &diagnostics {
                eprintln!("warning: {}", diagnostic);
            }
            for file in &files {
                println!("── {} ──", file.path.display());
                println!("{}", file.content);
            }
            println!("── Summary ──");
            println!("{} files would be generated", files.len());
            return Ok(());
        }

        let result = generator.generate_interface(&self.output);
        for diagnostic in &result.diagnostics {
            eprintln!("warning: {}", diagnostic);
        }
        for failure in &result.failures {
            eprintln!("error: {}", failure);
        }
        for path in &result.written {
            println!("Generated: {}", path.display());
        }
        Ok(())
    }
}
