use std::{fs, path::Path};

use crate::{Result, error::Error, raw};

/// One social network object kind, as described by a structure file.
///
/// Property and method order is significant: it is the order in which
/// accessors, signals and method bodies are emitted.
#[derive(Debug, Clone)]
pub struct Structure {
    pub name: String,
    pub doc: String,
    pub identifiable: bool,
    pub properties: Vec<Property>,
    pub methods: Vec<Method>,
    pub extra: ExtraFragments,
}

/// Free-form code fragments copied verbatim into fixed slots of the
/// generated files.
#[derive(Debug, Clone, Default)]
pub struct ExtraFragments {
    pub header_public: String,
    pub header_protected: String,
    pub header_private: String,
    pub private_header_public: String,
    pub private_header_protected: String,
    pub private_header_private: String,
    pub source: String,
}

#[derive(Debug, Clone)]
pub struct Property {
    /// Logical identifier; may differ from `key` after normalization.
    pub name: String,
    /// Literal wire-protocol field name.
    pub key: String,
    pub ty: String,
    pub doc: String,
    pub is_const: bool,
    pub is_pointer: bool,
    pub is_reference: bool,
    pub is_list: bool,
    /// Stored as dedicated private state instead of being derived from
    /// the generic wire-value snapshot.
    pub custom: bool,
    /// Included in the ontology constants block.
    pub is_ontology: bool,
}

impl Property {
    /// The type without any trailing pointer sigil.
    pub fn base_type(&self) -> &str {
        self.ty.trim_end_matches('*').trim_end()
    }
}

#[derive(Debug, Clone)]
pub struct Method {
    pub name: String,
    pub doc: String,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
    /// Literal text used when the parameter is omitted at the call site.
    pub default: Option<String>,
    pub is_const: bool,
    pub is_pointer: bool,
    pub is_reference: bool,
}

/// A structure together with the warnings its normalization produced.
#[derive(Debug)]
pub struct Loaded {
    pub structure: Structure,
    pub warnings: Vec<String>,
}

impl Structure {
    /// Read and parse a structure file.
    pub fn open(path: impl AsRef<Path>) -> Result<Loaded> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::parse(&src, &filename)
    }

    /// Parse a structure document from a string.
    pub fn parse(src: &str, filename: &str) -> Result<Loaded> {
        let raw: raw::RawStructure =
            serde_json::from_str(src).map_err(|e| Error::parse(e, src, filename))?;
        Ok(normalize(raw))
    }
}

fn normalize(raw: raw::RawStructure) -> Loaded {
    let mut warnings = Vec::new();

    let properties = raw
        .properties
        .into_iter()
        .map(|p| normalize_property(&raw.name, p, &mut warnings))
        .collect();

    let methods = raw
        .methods
        .into_iter()
        .map(|m| Method {
            name: m.name,
            doc: m.doc,
            parameters: m
                .parameters
                .into_iter()
                .map(|p| Parameter {
                    name: p.name,
                    ty: p.ty,
                    default: p.default,
                    is_const: p.is_const,
                    is_pointer: p.is_pointer,
                    is_reference: p.is_reference,
                })
                .collect(),
        })
        .collect();

    Loaded {
        structure: Structure {
            name: raw.name,
            doc: raw.doc,
            identifiable: raw.identifiable,
            properties,
            methods,
            extra: ExtraFragments {
                header_public: raw.extra_public,
                header_protected: raw.extra_protected,
                header_private: raw.extra_private,
                private_header_public: raw.extra_public_p,
                private_header_protected: raw.extra_protected_p,
                private_header_private: raw.extra_private_p,
                source: raw.extra_source,
            },
        },
        warnings,
    }
}

fn normalize_property(
    object_name: &str,
    raw: raw::RawProperty,
    warnings: &mut Vec<String>,
) -> Property {
    let (name, key) = normalize_name(object_name, &raw.name);

    let mut property = Property {
        name,
        key,
        ty: raw.ty,
        doc: raw.doc,
        is_const: raw.is_const,
        is_pointer: raw.is_pointer,
        is_reference: raw.is_reference,
        is_list: raw.is_list,
        custom: raw.custom,
        is_ontology: raw.is_ontology,
    };

    // Pointers are stored in a dedicated attribute
    if property.is_pointer {
        property.custom = true;
    }

    // So are lists, and a list carries no other storage qualifier
    if property.is_list {
        property.custom = true;
        if property.is_pointer || property.is_reference || property.is_const {
            warnings.push(format!(
                "property '{}': a list cannot be a pointer, a reference or a constant; \
                 qualifiers cleared",
                property.name
            ));
            property.is_pointer = false;
            property.is_reference = false;
            property.is_const = false;
        }
    }

    property
}

/// Derive the logical name and the preserved wire key for a property.
///
/// A property literally named `type` collides with the generated type
/// discriminator and is renamed to `<object>_type`. Any `id` word
/// fragment collides with the generic identifier field and becomes
/// `identifier`; the original wire key survives in `key`.
fn normalize_name(object_name: &str, name: &str) -> (String, String) {
    if name == "type" {
        return (format!("{}_type", object_name), name.to_string());
    }
    if name.split('_').any(|word| word == "id") {
        let renamed = name
            .split('_')
            .map(|word| if word == "id" { "identifier" } else { word })
            .collect::<Vec<_>>()
            .join("_");
        return (renamed, name.to_string());
    }
    (name.to_string(), name.to_string())
}
