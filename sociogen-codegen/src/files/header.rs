//! The public declaration file (`<class>.h`).

use sociogen_schema::Structure;

use super::{
    ClassNames, LICENSE, accessor_name, include_list, method_name, parameter_list, property_type,
    push_verbatim,
};
use crate::Network;

/// QML list-property compatibility shim, emitted whenever the object
/// exposes at least one list property.
const LIST_PROPERTY_PRELUDE: &str = "\
#if QT_VERSION_5
#include <QtQml/QQmlListProperty>
#define QDeclarativeListProperty QQmlListProperty
#else
#include <QtDeclarative/QDeclarativeListProperty>
#endif
";

const CONSTRUCTION_NOTE: &str = "\
/*
 * NOTE: if you construct one of these in C++ directly,
 * you MUST call classBegin() and componentCompleted()
 * directly after construction.
 */
";

pub struct InterfaceHeader<'a> {
    structure: &'a Structure,
    network: Network,
}

impl<'a> InterfaceHeader<'a> {
    pub fn new(structure: &'a Structure, network: Network) -> Self {
        Self { structure, network }
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}.h",
            ClassNames::derive(self.structure, self.network).file_stem()
        )
    }

    pub fn render(&self) -> String {
        let s = self.structure;
        let names = ClassNames::derive(s, self.network);
        let base = names.base_class(s.identifiable);
        let has_list = s.properties.iter().any(|p| p.is_list);

        let mut out = String::new();
        out.push_str(LICENSE);
        out.push('\n');
        out.push_str(&format!("#ifndef {}\n", names.guard("")));
        out.push_str(&format!("#define {}\n", names.guard("")));
        out.push('\n');
        if s.identifiable {
            out.push_str("#include \"identifiablecontentiteminterface.h\"\n");
        } else {
            out.push_str("#include \"contentiteminterface.h\"\n");
        }
        out.push('\n');
        if has_list {
            out.push_str(LIST_PROPERTY_PRELUDE);
        }
        for include in include_list(s) {
            out.push_str(&format!("#include {}\n", include));
        }
        out.push('\n');
        out.push_str(CONSTRUCTION_NOTE);
        out.push('\n');
        if !s.identifiable {
            out.push_str("/*\n");
            out.push_str(" * NOTE: this is an unidentifiable content item which\n");
            out.push_str(" * is read only and only creatable by the top level\n");
            out.push_str(&format!(" * {}Interface.\n", self.network.prefix()));
            out.push_str(" */\n");
            out.push('\n');
        }

        out.push_str(&format!("class {}Private;\n", names.class_name));
        out.push_str(&format!("class {}: public {}\n", names.class_name, base));
        out.push_str("{\n");
        out.push_str("    Q_OBJECT\n");
        for property in &s.properties {
            let accessor = accessor_name(property);
            out.push_str(&format!(
                "    Q_PROPERTY({} {} READ {} NOTIFY {}Changed)\n",
                property_type(property),
                accessor,
                accessor,
                accessor
            ));
        }
        out.push_str("public:\n");
        out.push_str(&format!(
            "    explicit {}(QObject *parent = 0);\n",
            names.class_name
        ));
        out.push('\n');
        out.push_str("    // Overrides.\n");
        out.push_str("    int type() const;\n");
        if s.identifiable {
            out.push_str("    Q_INVOKABLE bool remove();\n");
            out.push_str(
                "    Q_INVOKABLE bool reload(const QStringList &whichFields = QStringList());\n",
            );
            if !s.methods.is_empty() {
                out.push('\n');
                out.push_str("    // Invokable API.\n");
                for method in &s.methods {
                    out.push_str(&format!(
                        "    Q_INVOKABLE bool {}({});\n",
                        method_name(method),
                        parameter_list(&method.parameters, true)
                    ));
                }
            }
        }
        out.push('\n');
        out.push_str("    // Accessors\n");
        for property in &s.properties {
            if property.is_list {
                out.push_str(&format!(
                    "    {} {}();\n",
                    property_type(property),
                    accessor_name(property)
                ));
            } else {
                out.push_str(&format!(
                    "    {} {}() const;\n",
                    property_type(property),
                    accessor_name(property)
                ));
            }
        }
        push_verbatim(&mut out, &s.extra.header_public);
        out.push_str("Q_SIGNALS:\n");
        for property in &s.properties {
            out.push_str(&format!("    void {}Changed();\n", accessor_name(property)));
        }
        if !s.extra.header_protected.is_empty() {
            out.push_str("protected:\n");
            push_verbatim(&mut out, &s.extra.header_protected);
        }
        out.push_str("private:\n");
        out.push_str(&format!("    Q_DECLARE_PRIVATE({})\n", names.class_name));
        push_verbatim(&mut out, &s.extra.header_private);
        out.push_str("};\n");
        out.push('\n');
        out.push_str(&format!("#endif // {}\n", names.guard("")));
        out
    }
}
