//! The shared ontology-constants file (`<network>ontology_p.h`).
//!
//! One file holds one marker region per object. Regeneration for a
//! given object rewrites only that object's region; every other region
//! passes through untouched, in its original order.

use sociogen_schema::Structure;

use super::{ClassNames, LICENSE};
use crate::{END_MARKER, MergeRegions, Network, START_MARKER, naming};

/// Column the constant values are aligned to.
const VALUE_COLUMN: usize = 58;

pub struct OntologyHeader<'a> {
    structure: &'a Structure,
    network: Network,
}

impl<'a> OntologyHeader<'a> {
    pub fn new(structure: &'a Structure, network: Network) -> Self {
        Self { structure, network }
    }

    pub fn file_name(&self) -> String {
        format!("{}ontology_p.h", self.network.lower())
    }

    fn guard(&self) -> String {
        format!("{}ONTOLOGY_P_H", self.network.upper())
    }

    /// The region label owned by this structure.
    pub fn label(&self) -> String {
        self.structure.name.to_lowercase()
    }

    /// The freshly derived constant block: the object's own bare key
    /// first, then one constant per ontology property in schema order.
    fn constants(&self, names: &ClassNames) -> String {
        let mut keys = Vec::new();
        let default_key = format!(
            "#define {}",
            naming::ontology_key(&[], self.network, &names.ontology_prefix)
        );
        keys.push(format!(
            "{} QLatin1String(\"{}\")",
            naming::pad(&default_key, VALUE_COLUMN),
            self.label()
        ));
        for property in self.structure.properties.iter().filter(|p| p.is_ontology) {
            let define = format!("#define {}", names.property_key(property));
            keys.push(format!(
                "{} QLatin1String(\"{}\")",
                naming::pad(&define, VALUE_COLUMN),
                property.key
            ));
        }
        keys.join("\n")
    }

    pub fn render(&self, regions: &MergeRegions) -> String {
        let names = ClassNames::derive(self.structure, self.network);
        let label = self.label();
        let entry = self.constants(&names);

        let mut out = String::new();
        out.push_str(LICENSE);
        out.push_str(&format!("#ifndef {}\n", self.guard()));
        out.push_str(&format!("#define {}\n", self.guard()));
        out.push('\n');
        for marker in regions.labels() {
            out.push_str(&format!("{} {}\n", START_MARKER, marker));
            if marker == label {
                out.push_str(&entry);
                out.push('\n');
            } else {
                out.push_str(regions.get(marker).unwrap_or_default());
            }
            out.push_str(&format!("{} {}\n", END_MARKER, marker));
            out.push('\n');
        }
        if !regions.contains(&label) {
            out.push_str(&format!("{} {}\n", START_MARKER, label));
            out.push_str(&entry);
            out.push('\n');
            out.push_str(&format!("{} {}\n", END_MARKER, label));
            out.push('\n');
        }
        out.push_str(&format!("#endif // {}\n", self.guard()));
        out
    }
}
