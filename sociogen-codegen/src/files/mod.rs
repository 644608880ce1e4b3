//! One module per generated output kind. Each file model is a pure
//! renderer: schema in, text out, with previously extracted marker
//! regions spliced back into their slots.

mod header;
mod ontology;
mod private_header;
mod source;

pub use header::InterfaceHeader;
pub use ontology::OntologyHeader;
pub use private_header::PrivateHeader;
pub use source::InterfaceSource;

use sociogen_schema::{Method, Parameter, Property, Structure};

use crate::{Network, naming};

/// License block carried at the top of every generated file, matching
/// the hand-written sources of the tree the output lands in.
pub(crate) const LICENSE: &str = "\
/*
 * Copyright (C) 2013 Jolla Ltd. <chris.adams@jollamobile.com>
 *
 * You may use this file under the terms of the BSD license as follows:
 *
 * \"Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are
 * met:
 *   * Redistributions of source code must retain the above copyright
 *     notice, this list of conditions and the following disclaimer.
 *   * Redistributions in binary form must reproduce the above copyright
 *     notice, this list of conditions and the following disclaimer in
 *     the documentation and/or other materials provided with the
 *     distribution.
 *   * Neither the name of Nemo Mobile nor the names of its contributors
 *     may be used to endorse or promote products derived from this
 *     software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
 * \"AS IS\" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
 * LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR
 * A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT
 * OWNER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
 * SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
 * LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE,
 * DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY
 * THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT
 * (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.\"
 */
";

/// All identifiers derived from the structure's source name. Derived
/// once per render; never specified independently.
pub(crate) struct ClassNames {
    /// e.g. `Post` for `post`
    pub type_name: String,
    /// e.g. `FacebookPostInterface`
    pub class_name: String,
    /// e.g. `POST`; keeps underscores (`USER_COVER`)
    pub ontology_prefix: String,
    pub network: Network,
}

impl ClassNames {
    pub fn derive(structure: &Structure, network: Network) -> Self {
        let type_name = naming::upper_camel_case(&naming::split(&structure.name));
        let class_name = format!("{}{}Interface", network.prefix(), type_name);
        Self {
            type_name,
            class_name,
            ontology_prefix: structure.name.to_uppercase(),
            network,
        }
    }

    /// Lowercased class name, used as the output file stem.
    pub fn file_stem(&self) -> String {
        self.class_name.to_lowercase()
    }

    /// Include guard symbol, e.g. `FACEBOOKPOSTINTERFACE_P_H`.
    pub fn guard(&self, suffix: &str) -> String {
        format!("{}{}_H", self.class_name.to_uppercase(), suffix)
    }

    /// QML-facing type name, e.g. `FacebookPost`.
    pub fn qml_name(&self) -> String {
        format!("{}{}", self.network.prefix(), self.type_name)
    }

    pub fn base_class(&self, identifiable: bool) -> &'static str {
        if identifiable {
            "IdentifiableContentItemInterface"
        } else {
            "ContentItemInterface"
        }
    }

    /// Ontology constant for a property, keyed by its logical name.
    pub fn property_key(&self, property: &Property) -> String {
        naming::ontology_key(
            &naming::split(&property.name),
            self.network,
            &self.ontology_prefix,
        )
    }
}

/// The C++ type a property is exposed as.
pub(crate) fn property_type(property: &Property) -> String {
    if property.is_list {
        format!("QDeclarativeListProperty<{}>", property.base_type())
    } else if property.is_pointer {
        format!("{} *", property.base_type())
    } else {
        property.ty.clone()
    }
}

pub(crate) fn accessor_name(property: &Property) -> String {
    naming::camel_case(&naming::split(&property.name))
}

pub(crate) fn method_name(method: &Method) -> String {
    naming::camel_case(&naming::split(&method.name))
}

/// Render one method parameter declaration. Defaults are rendered in
/// declarations only, never in definitions.
pub(crate) fn parameter_decl(parameter: &Parameter, with_default: bool) -> String {
    let name = naming::camel_case(&naming::split(&parameter.name));
    let mut decl = if parameter.is_pointer {
        format!("{} *{}", parameter.ty.trim_end_matches('*').trim_end(), name)
    } else if parameter.is_reference {
        if parameter.is_const {
            format!("const {} &{}", parameter.ty, name)
        } else {
            format!("{} &{}", parameter.ty, name)
        }
    } else if parameter.is_const {
        format!("const {} {}", parameter.ty, name)
    } else {
        format!("{} {}", parameter.ty, name)
    };
    if with_default {
        if let Some(default) = &parameter.default {
            decl.push_str(" = ");
            decl.push_str(default);
        }
    }
    decl
}

pub(crate) fn parameter_list(parameters: &[Parameter], with_defaults: bool) -> String {
    parameters
        .iter()
        .map(|p| parameter_decl(p, with_defaults))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Append free-form schema text, guaranteeing a trailing newline.
pub(crate) fn push_verbatim(out: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
}

/// Indent every line of a documentation block.
pub(crate) fn indent_doc(doc: &str, indent: &str) -> String {
    doc.lines()
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Declaration of the dedicated storage field for a custom property.
pub(crate) fn custom_field_decl(property: &Property) -> String {
    let field = accessor_name(property);
    if property.is_list {
        format!("QList<{} *> {};", property.base_type(), field)
    } else if property.is_pointer {
        format!("{} *{};", property.base_type(), field)
    } else {
        format!("{} {};", property.ty, field)
    }
}

/// The four static callbacks backing the generic ordered-collection
/// access pattern of a list property. Callback names keep the
/// snake_case property name; the backing field is camelCase.
pub(crate) fn list_callback_decls(property: &Property) -> String {
    let base = property.base_type();
    let key = &property.name;
    format!(
        "    static void {key}_append(QDeclarativeListProperty<{base}> *list, {base} *data);\n\
         \x20   static {base} * {key}_at(QDeclarativeListProperty<{base}> *list, int index);\n\
         \x20   static void {key}_clear(QDeclarativeListProperty<{base}> *list);\n\
         \x20   static int {key}_count(QDeclarativeListProperty<{base}> *list);\n"
    )
}

/// Distinct type includes needed by the structure's properties, in
/// order of first occurrence.
pub(crate) fn include_list(structure: &Structure) -> Vec<String> {
    let mut includes = Vec::new();
    for property in &structure.properties {
        if let Some(include) = crate::type_mapper::include(property) {
            if !includes.contains(&include) {
                includes.push(include);
            }
        }
    }
    includes
}
