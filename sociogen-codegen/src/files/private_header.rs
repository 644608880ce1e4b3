//! The private-state declaration file (`<class>_p.h`), emitted for
//! independently addressable objects only: their private state must be
//! visible to the translation unit building the action machinery.

use sociogen_schema::Structure;

use super::{ClassNames, LICENSE, custom_field_decl, list_callback_decls, push_verbatim};
use crate::{MergeRegions, Network};

const CUSTOM_PLACEHOLDER: &str = "    // Custom members go here";

pub struct PrivateHeader<'a> {
    structure: &'a Structure,
    network: Network,
}

impl<'a> PrivateHeader<'a> {
    pub fn new(structure: &'a Structure, network: Network) -> Self {
        Self { structure, network }
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}_p.h",
            ClassNames::derive(self.structure, self.network).file_stem()
        )
    }

    pub fn render(&self, regions: &MergeRegions) -> String {
        let s = self.structure;
        let names = ClassNames::derive(s, self.network);
        let network = self.network;
        let has_list = s.properties.iter().any(|p| p.is_list);

        let mut out = String::new();
        out.push_str(LICENSE);
        out.push('\n');
        out.push_str(&format!("#ifndef {}\n", names.guard("_P")));
        out.push_str(&format!("#define {}\n", names.guard("_P")));
        out.push('\n');
        out.push_str(&format!("#include \"{}.h\"\n", names.file_stem()));
        out.push_str(&format!("#include \"{}interface_p.h\"\n", network.lower()));
        out.push_str("#include \"identifiablecontentiteminterface_p.h\"\n");
        if has_list {
            out.push_str("#include <QtCore/QList>\n");
        }
        out.push('\n');

        out.push_str(&format!(
            "class {}Private: public IdentifiableContentItemInterfacePrivate\n",
            names.class_name
        ));
        out.push_str("{\n");
        out.push_str("public:\n");
        out.push_str(&format!(
            "    explicit {}Private({} *q);\n",
            names.class_name, names.class_name
        ));
        out.push_str("    void finishedHandler();\n");
        out.push_str(
            "    void emitPropertyChangeSignals(const QVariantMap &oldData, \
             const QVariantMap &newData);\n",
        );
        out.push_str(&format!(
            "    {}InterfacePrivate::{}Action action;\n",
            network.prefix(),
            network.prefix()
        ));
        for property in s.properties.iter().filter(|p| p.custom) {
            out.push_str("    ");
            out.push_str(&custom_field_decl(property));
            out.push('\n');
        }
        push_verbatim(&mut out, &s.extra.private_header_public);
        regions.splice_into(&mut out, "custom", CUSTOM_PLACEHOLDER);
        if !s.extra.private_header_protected.is_empty() {
            out.push_str("protected:\n");
            push_verbatim(&mut out, &s.extra.private_header_protected);
        }
        out.push_str("private:\n");
        out.push_str(&format!("    Q_DECLARE_PUBLIC({})\n", names.class_name));
        for property in s.properties.iter().filter(|p| p.is_list) {
            out.push_str(&list_callback_decls(property));
        }
        push_verbatim(&mut out, &s.extra.private_header_private);
        out.push_str("};\n");
        out.push('\n');
        out.push_str(&format!("#endif // {}\n", names.guard("_P")));
        out
    }
}

#[cfg(test)]
mod tests {
    use sociogen_schema::{Property, Structure};

    use super::*;

    fn structure() -> Structure {
        Structure {
            name: "post".into(),
            doc: String::new(),
            identifiable: true,
            properties: vec![
                Property {
                    name: "from".into(),
                    key: "from".into(),
                    ty: "FacebookObjectReferenceInterface".into(),
                    doc: String::new(),
                    is_const: false,
                    is_pointer: true,
                    is_reference: false,
                    is_list: false,
                    custom: true,
                    is_ontology: true,
                },
                Property {
                    name: "message_tags".into(),
                    key: "message_tags".into(),
                    ty: "FacebookNameTagInterface".into(),
                    doc: String::new(),
                    is_const: false,
                    is_pointer: false,
                    is_reference: false,
                    is_list: true,
                    custom: true,
                    is_ontology: true,
                },
                Property {
                    name: "message".into(),
                    key: "message".into(),
                    ty: "QString".into(),
                    doc: String::new(),
                    is_const: false,
                    is_pointer: false,
                    is_reference: false,
                    is_list: false,
                    custom: false,
                    is_ontology: true,
                },
            ],
            methods: vec![],
            extra: Default::default(),
        }
    }

    #[test]
    fn test_private_header_shape() {
        let s = structure();
        let file = PrivateHeader::new(&s, Network::Facebook);
        assert_eq!(file.file_name(), "facebookpostinterface_p.h");

        let text = file.render(&MergeRegions::default());
        assert!(text.contains("#ifndef FACEBOOKPOSTINTERFACE_P_H"));
        assert!(text.contains("#include \"facebookinterface_p.h\""));
        assert!(text.contains("#include <QtCore/QList>"));
        assert!(text.contains("    FacebookInterfacePrivate::FacebookAction action;"));
        assert!(text.contains("    void finishedHandler();"));
        assert!(text.contains("    FacebookObjectReferenceInterface *from;"));
        assert!(text.contains("    QList<FacebookNameTagInterface *> messageTags;"));
        // non-custom properties get no storage field
        assert!(!text.contains("QString message;"));
        assert!(text.contains(
            "    static void message_tags_append(\
             QDeclarativeListProperty<FacebookNameTagInterface> *list, \
             FacebookNameTagInterface *data);"
        ));
        assert!(text.contains("// <<< custom\n    // Custom members go here\n// >>> custom"));
    }

    #[test]
    fn test_custom_region_is_preserved() {
        let s = structure();
        let regions = MergeRegions::from_str(
            "// <<< custom\n    int handWritten;\n// >>> custom\n",
            crate::START_MARKER,
            crate::END_MARKER,
        );
        let text = PrivateHeader::new(&s, Network::Facebook).render(&regions);
        assert!(text.contains("// <<< custom\n    int handWritten;\n// >>> custom"));
        assert!(!text.contains("Custom members go here"));
    }
}
