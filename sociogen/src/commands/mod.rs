mod interface;
mod ontology;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use interface::InterfaceCommand;
use ontology::OntologyCommand;
use sociogen_codegen::Network;

/// Extension trait for exiting on structure-file errors with pretty
/// formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sociogen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sociogen")]
#[command(version)]
#[command(about = "Generate social network binding-layer classes from JSON structure files")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Interface(cmd) => cmd.run(),
            Commands::Ontology(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the binding-layer class files for one structure
    Interface(InterfaceCommand),

    /// Update the shared ontology-constants file for one structure
    Ontology(OntologyCommand),
}

/// Social network selecting the class and constant prefixes
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum NetworkArg {
    Facebook,
    Twitter,
}

impl From<NetworkArg> for Network {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Facebook => Network::Facebook,
            NetworkArg::Twitter => Network::Twitter,
        }
    }
}
