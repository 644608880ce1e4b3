//! Serde representation of the structure-file JSON, before
//! normalization.

use serde::Deserialize;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStructure {
    pub name: String,
    pub doc: String,
    pub identifiable: bool,
    pub properties: Vec<RawProperty>,
    #[serde(default)]
    pub methods: Vec<RawMethod>,
    #[serde(default)]
    pub extra_public: String,
    #[serde(default)]
    pub extra_protected: String,
    #[serde(default)]
    pub extra_private: String,
    #[serde(default)]
    pub extra_public_p: String,
    #[serde(default)]
    pub extra_protected_p: String,
    #[serde(default)]
    pub extra_private_p: String,
    #[serde(default)]
    pub extra_source: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub doc: String,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_pointer: bool,
    #[serde(default)]
    pub is_reference: bool,
    #[serde(default, alias = "is_custom")]
    pub custom: bool,
    #[serde(default = "default_true")]
    pub is_ontology: bool,
    #[serde(default)]
    pub is_list: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMethod {
    pub name: String,
    pub doc: String,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_pointer: bool,
    #[serde(default)]
    pub is_reference: bool,
}
