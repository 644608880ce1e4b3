//! The implementation file (`<class>.cpp`).
//!
//! Everything schema-derived is regenerated on every run; everything
//! hand-written lives between marker pairs and is spliced back from
//! the previous generation.

use sociogen_schema::{Property, Structure};

use super::{
    ClassNames, LICENSE, accessor_name, custom_field_decl, indent_doc, list_callback_decls,
    method_name, parameter_list, property_type, push_verbatim,
};
use crate::{MergeRegions, Network, naming, type_mapper};

const INCLUDE_PLACEHOLDER: &str = "// Includes goes here";
const CUSTOM_INIT_PLACEHOLDER: &str = "    // Custom initialization goes here";
const FINISHED_PLACEHOLDER: &str = "    // Reply handling goes here";
const EMIT_SIGNALS_PLACEHOLDER: &str = "    // Emit changed signals for custom properties here";
const CONSTRUCTOR_PLACEHOLDER: &str = "    // Custom constructor code goes here";
const METHOD_PLACEHOLDER: &str = "    return false;";

pub struct InterfaceSource<'a> {
    structure: &'a Structure,
    network: Network,
}

impl<'a> InterfaceSource<'a> {
    pub fn new(structure: &'a Structure, network: Network) -> Self {
        Self { structure, network }
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}.cpp",
            ClassNames::derive(self.structure, self.network).file_stem()
        )
    }

    pub fn render(&self, regions: &MergeRegions) -> String {
        let s = self.structure;
        let names = ClassNames::derive(s, self.network);

        let mut out = String::new();
        out.push_str(LICENSE);
        out.push('\n');
        self.render_includes(&mut out, &names, regions);
        out.push('\n');
        if !s.identifiable {
            self.render_embedded_private_class(&mut out, &names);
        }
        self.render_private_constructor(&mut out, &names, regions);
        if s.identifiable {
            out.push('\n');
            self.render_finished_handler(&mut out, &names, regions);
        }
        out.push('\n');
        self.render_change_detection(&mut out, &names, regions);
        self.render_list_callbacks(&mut out, &names);
        out.push('\n');
        out.push_str("//-------------------------------\n");
        out.push('\n');
        self.render_constructor(&mut out, &names, regions);
        out.push('\n');
        self.render_type_override(&mut out, &names);
        if s.identifiable {
            self.render_invokables(&mut out, &names, regions);
        }
        self.render_accessors(&mut out, &names);
        push_verbatim(&mut out, &s.extra.source);
        out
    }

    fn render_includes(&self, out: &mut String, names: &ClassNames, regions: &MergeRegions) {
        let network = self.network;
        if self.structure.identifiable {
            out.push_str(&format!("#include \"{}_p.h\"\n", names.file_stem()));
        } else {
            out.push_str(&format!("#include \"{}.h\"\n", names.file_stem()));
        }
        out.push_str(&format!("#include \"{}interface.h\"\n", network.lower()));
        out.push_str(&format!("#include \"{}ontology_p.h\"\n", network.lower()));
        if !self.structure.identifiable {
            out.push_str("#include \"contentiteminterface_p.h\"\n");
        }
        regions.splice_into(out, "include", INCLUDE_PLACEHOLDER);
    }

    /// Embedded objects keep their private class local to the
    /// translation unit; there is no second consumer of their state.
    fn render_embedded_private_class(&self, out: &mut String, names: &ClassNames) {
        let s = self.structure;
        out.push_str(&format!(
            "class {}Private: public ContentItemInterfacePrivate\n",
            names.class_name
        ));
        out.push_str("{\n");
        out.push_str("public:\n");
        out.push_str(&format!(
            "    explicit {}Private({} *q);\n",
            names.class_name, names.class_name
        ));
        out.push_str(
            "    void emitPropertyChangeSignals(const QVariantMap &oldData, \
             const QVariantMap &newData);\n",
        );
        for property in s.properties.iter().filter(|p| p.custom) {
            out.push_str("    ");
            out.push_str(&custom_field_decl(property));
            out.push('\n');
        }
        push_verbatim(out, &s.extra.private_header_public);
        if !s.extra.private_header_protected.is_empty() {
            out.push_str("protected:\n");
            push_verbatim(out, &s.extra.private_header_protected);
        }
        out.push_str("private:\n");
        out.push_str(&format!("    Q_DECLARE_PUBLIC({})\n", names.class_name));
        for property in s.properties.iter().filter(|p| p.is_list) {
            out.push_str(&list_callback_decls(property));
        }
        push_verbatim(out, &s.extra.private_header_private);
        out.push_str("};\n");
        out.push('\n');
    }

    fn render_private_constructor(
        &self,
        out: &mut String,
        names: &ClassNames,
        regions: &MergeRegions,
    ) {
        let base = names.base_class(self.structure.identifiable);
        out.push_str(&format!(
            "{}Private::{}Private({} *q)\n",
            names.class_name, names.class_name, names.class_name
        ));
        out.push_str(&format!("    : {}Private(q)\n", base));
        if self.structure.identifiable {
            out.push_str(&format!(
                "    , action({}InterfacePrivate::NoAction)\n",
                self.network.prefix()
            ));
        }
        regions.splice_into(out, "custom", CUSTOM_INIT_PLACEHOLDER);
        out.push_str("{\n");
        out.push_str("}\n");
    }

    fn render_finished_handler(
        &self,
        out: &mut String,
        names: &ClassNames,
        regions: &MergeRegions,
    ) {
        out.push_str(&format!(
            "void {}Private::finishedHandler()\n",
            names.class_name
        ));
        out.push_str("{\n");
        regions.splice_into(out, "finishedHandler", FINISHED_PLACEHOLDER);
        out.push_str("}\n");
    }

    fn render_change_detection(
        &self,
        out: &mut String,
        names: &ClassNames,
        regions: &MergeRegions,
    ) {
        let s = self.structure;
        out.push_str(&format!(
            "void {}Private::emitPropertyChangeSignals(const QVariantMap &oldData,\n",
            names.class_name
        ));
        // Continuation aligned under the opening parenthesis
        out.push_str(&" ".repeat(40 + names.class_name.len()));
        out.push_str("const QVariantMap &newData)\n");
        out.push_str("{\n");
        out.push_str(&format!("    Q_Q({});\n", names.class_name));

        let mut automatic = Vec::new();
        let mut unhandled: Vec<&Property> = Vec::new();
        for property in s.properties.iter().filter(|p| !p.custom) {
            match type_mapper::comparison(&property.ty) {
                Some(extraction) => automatic.push((property, extraction)),
                None => unhandled.push(property),
            }
        }

        for &(property, (decl, getter)) in &automatic {
            let upper = naming::upper_camel_case(&naming::split(&property.name));
            let key = names.property_key(property);
            out.push_str(&format!(
                "    {} old{} = oldData.value({}){};\n",
                decl, upper, key, getter
            ));
            out.push_str(&format!(
                "    {} new{} = newData.value({}){};\n",
                decl, upper, key, getter
            ));
        }
        out.push('\n');
        for &(property, _) in &automatic {
            let upper = naming::upper_camel_case(&naming::split(&property.name));
            out.push_str(&format!("    if (new{} != old{})\n", upper, upper));
            out.push_str(&format!(
                "        emit q->{}Changed();\n",
                accessor_name(property)
            ));
        }
        out.push('\n');
        if !unhandled.is_empty() {
            out.push_str("    // The following properties are not handled automatically:\n");
            for property in &unhandled {
                out.push_str(&format!("    // - {}\n", property.name));
            }
            out.push('\n');
        }
        regions.splice_into(out, "emitPropertyChangeSignals", EMIT_SIGNALS_PLACEHOLDER);
        out.push('\n');
        out.push_str("    // Call super class implementation\n");
        if s.identifiable {
            let metadata_id = format!("{}_ONTOLOGY_METADATA_ID", self.network.upper());
            out.push_str("    QVariantMap oldDataWithId = oldData;\n");
            out.push_str("    oldDataWithId.insert(NEMOQMLPLUGINS_SOCIAL_CONTENTITEMID,\n");
            out.push_str(&format!(
                "                         oldData.value({}));\n",
                metadata_id
            ));
            out.push_str("    QVariantMap newDataWithId = newData;\n");
            out.push_str("    newDataWithId.insert(NEMOQMLPLUGINS_SOCIAL_CONTENTITEMID,\n");
            out.push_str(&format!(
                "                         newData.value({}));\n",
                metadata_id
            ));
            out.push_str(
                "    IdentifiableContentItemInterfacePrivate::emitPropertyChangeSignals(\
                 oldDataWithId, newDataWithId);\n",
            );
        } else {
            out.push_str(
                "    ContentItemInterfacePrivate::emitPropertyChangeSignals(oldData, newData);\n",
            );
        }
        out.push_str("}\n");
    }

    fn render_list_callbacks(&self, out: &mut String, names: &ClassNames) {
        let class = &names.class_name;
        for property in self.structure.properties.iter().filter(|p| p.is_list) {
            let base = property.base_type();
            let key = &property.name;
            let field = accessor_name(property);

            out.push('\n');
            out.push_str(&format!(
                "void {class}Private::{key}_append(QDeclarativeListProperty<{base}> *list, \
                 {base} *data)\n"
            ));
            out.push_str("{\n");
            out.push_str(&format!(
                "    {class} *interface = qobject_cast<{class} *>(list->object);\n"
            ));
            out.push_str("    if (interface) {\n");
            out.push_str("        data->setParent(interface);\n");
            out.push_str(&format!(
                "        interface->d_func()->{field}.append(data);\n"
            ));
            out.push_str("    }\n");
            out.push_str("}\n");
            out.push('\n');

            out.push_str(&format!(
                "{base} * {class}Private::{key}_at(QDeclarativeListProperty<{base}> *list, \
                 int index)\n"
            ));
            out.push_str("{\n");
            out.push_str(&format!(
                "    {class} *interface = qobject_cast<{class} *>(list->object);\n"
            ));
            out.push_str("    if (interface\n");
            out.push_str(&format!(
                "        && index < interface->d_func()->{field}.count()\n"
            ));
            out.push_str("        && index >= 0) {\n");
            out.push_str(&format!(
                "        return interface->d_func()->{field}.at(index);\n"
            ));
            out.push_str("    }\n");
            out.push_str("    return 0;\n");
            out.push_str("}\n");
            out.push('\n');

            out.push_str(&format!(
                "void {class}Private::{key}_clear(QDeclarativeListProperty<{base}> *list)\n"
            ));
            out.push_str("{\n");
            out.push_str(&format!(
                "    {class} *interface = qobject_cast<{class} *>(list->object);\n"
            ));
            out.push_str("    if (interface) {\n");
            out.push_str(&format!(
                "        foreach ({base} *entry, interface->d_func()->{field}) {{\n"
            ));
            out.push_str("            entry->deleteLater();\n");
            out.push_str("        }\n");
            out.push_str(&format!("        interface->d_func()->{field}.clear();\n"));
            out.push_str("    }\n");
            out.push_str("}\n");
            out.push('\n');

            out.push_str(&format!(
                "int {class}Private::{key}_count(QDeclarativeListProperty<{base}> *list)\n"
            ));
            out.push_str("{\n");
            out.push_str(&format!(
                "    {class} *interface = qobject_cast<{class} *>(list->object);\n"
            ));
            out.push_str("    if (interface) {\n");
            out.push_str(&format!(
                "        return interface->d_func()->{field}.count();\n"
            ));
            out.push_str("    }\n");
            out.push_str("    return 0;\n");
            out.push_str("}\n");
        }
    }

    fn render_constructor(&self, out: &mut String, names: &ClassNames, regions: &MergeRegions) {
        let base = names.base_class(self.structure.identifiable);
        out.push_str("/*!\n");
        out.push_str(&format!("    \\qmltype {}\n", names.qml_name()));
        out.push_str(&format!("    \\instantiates {}\n", names.class_name));
        if !self.structure.doc.is_empty() {
            out.push_str(&indent_doc(&self.structure.doc, "    "));
            out.push('\n');
        }
        out.push_str("*/\n");
        out.push_str(&format!(
            "{}::{}(QObject *parent)\n",
            names.class_name, names.class_name
        ));
        out.push_str(&format!(
            "    : {}(*(new {}Private(this)), parent)\n",
            base, names.class_name
        ));
        out.push_str("{\n");
        regions.splice_into(out, "constructor", CONSTRUCTOR_PLACEHOLDER);
        out.push_str("}\n");
    }

    fn render_type_override(&self, out: &mut String, names: &ClassNames) {
        out.push_str("/*! \\reimp */\n");
        out.push_str(&format!("int {}::type() const\n", names.class_name));
        out.push_str("{\n");
        out.push_str(&format!(
            "    return {}Interface::{};\n",
            self.network.prefix(),
            names.type_name
        ));
        out.push_str("}\n");
    }

    fn render_invokables(&self, out: &mut String, names: &ClassNames, regions: &MergeRegions) {
        out.push('\n');
        out.push_str("/*! \\reimp */\n");
        out.push_str(&format!("bool {}::remove()\n", names.class_name));
        out.push_str("{\n");
        regions.splice_into(
            out,
            "remove",
            "    return IdentifiableContentItemInterface::remove();",
        );
        out.push_str("}\n");
        out.push('\n');
        out.push_str("/*! \\reimp */\n");
        out.push_str(&format!(
            "bool {}::reload(const QStringList &whichFields)\n",
            names.class_name
        ));
        out.push_str("{\n");
        regions.splice_into(
            out,
            "reload",
            "    return IdentifiableContentItemInterface::reload(whichFields);",
        );
        out.push_str("}\n");

        for method in &self.structure.methods {
            let name = method_name(method);
            let signature = parameter_list(&method.parameters, false);
            out.push('\n');
            out.push_str("/*!\n");
            out.push_str(&format!(
                "    \\qmlmethod bool {}::{}({})\n",
                names.qml_name(),
                name,
                signature
            ));
            if !method.doc.is_empty() {
                out.push_str(&indent_doc(&method.doc, "    "));
                out.push('\n');
            }
            out.push_str("*/\n");
            out.push_str(&format!(
                "bool {}::{}({})\n",
                names.class_name, name, signature
            ));
            out.push_str("{\n");
            regions.splice_into(out, &name, METHOD_PLACEHOLDER);
            out.push_str("}\n");
        }
    }

    fn render_accessors(&self, out: &mut String, names: &ClassNames) {
        let class = &names.class_name;
        for property in &self.structure.properties {
            let accessor = accessor_name(property);
            out.push('\n');
            out.push_str("/*!\n");
            out.push_str(&format!(
                "    \\qmlproperty {} {}::{}\n",
                property_type(property),
                names.qml_name(),
                accessor
            ));
            if !property.doc.is_empty() {
                out.push_str(&indent_doc(&property.doc, "    "));
                out.push('\n');
            }
            out.push_str("*/\n");

            if property.is_list {
                let base = property.base_type();
                let key = &property.name;
                out.push_str(&format!(
                    "QDeclarativeListProperty<{base}> {class}::{accessor}()\n"
                ));
                out.push_str("{\n");
                out.push_str(&format!("    return QDeclarativeListProperty<{base}>(\n"));
                out.push_str("                this, 0,\n");
                out.push_str(&format!("                &{class}Private::{key}_append,\n"));
                out.push_str(&format!("                &{class}Private::{key}_count,\n"));
                out.push_str(&format!("                &{class}Private::{key}_at,\n"));
                out.push_str(&format!("                &{class}Private::{key}_clear);\n"));
                out.push_str("}\n");
            } else if property.custom {
                out.push_str(&format!(
                    "{} {}::{}() const\n",
                    property_type(property),
                    class,
                    accessor
                ));
                out.push_str("{\n");
                out.push_str(&format!("    Q_D(const {});\n", class));
                out.push_str(&format!("    return d->{};\n", accessor));
                out.push_str("}\n");
            } else {
                let cell = format!("d->data().value({})", names.property_key(property));
                let body = type_mapper::convert(&property.ty, &cell);
                out.push_str(&format!(
                    "{} {}::{}() const\n",
                    property_type(property),
                    class,
                    accessor
                ));
                out.push_str("{\n");
                out.push_str(&format!("    Q_D(const {});\n", class));
                if body.is_empty() {
                    // Degraded output for unmapped types; flagged in the
                    // change-detection comment block
                    out.push_str(&format!("    return {};\n", cell));
                } else {
                    for line in body.lines() {
                        out.push_str("    ");
                        out.push_str(line);
                        out.push('\n');
                    }
                }
                out.push_str("}\n");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sociogen_schema::{Method, Parameter, Property, Structure};

    use super::*;
    use crate::{END_MARKER, START_MARKER};

    fn property(name: &str, ty: &str) -> Property {
        Property {
            name: name.into(),
            key: name.into(),
            ty: ty.into(),
            doc: "Holds a value".into(),
            is_const: false,
            is_pointer: false,
            is_reference: false,
            is_list: false,
            custom: false,
            is_ontology: true,
        }
    }

    fn post_structure() -> Structure {
        let mut from = property("from", "FacebookObjectReferenceInterface");
        from.is_pointer = true;
        from.custom = true;
        let mut to = property("to", "FacebookObjectReferenceInterface");
        to.is_list = true;
        to.custom = true;
        Structure {
            name: "post".into(),
            doc: "A post object".into(),
            identifiable: true,
            properties: vec![
                from,
                to,
                property("message", "QString"),
                property("shares", "int"),
                property("created_time", "QDateTime"),
            ],
            methods: vec![Method {
                name: "upload_comment".into(),
                doc: "Uploads a comment".into(),
                parameters: vec![Parameter {
                    name: "message".into(),
                    ty: "QString".into(),
                    default: None,
                    is_const: true,
                    is_pointer: false,
                    is_reference: true,
                }],
            }],
            extra: Default::default(),
        }
    }

    fn render_fresh(structure: &Structure) -> String {
        InterfaceSource::new(structure, Network::Facebook).render(&MergeRegions::default())
    }

    #[test]
    fn test_identifiable_source_shape() {
        let structure = post_structure();
        let source = InterfaceSource::new(&structure, Network::Facebook);
        assert_eq!(source.file_name(), "facebookpostinterface.cpp");

        let text = source.render(&MergeRegions::default());
        assert!(text.contains("#include \"facebookpostinterface_p.h\""));
        assert!(text.contains("#include \"facebookontology_p.h\""));
        assert!(text.contains(", action(FacebookInterfacePrivate::NoAction)"));
        assert!(text.contains("void FacebookPostInterfacePrivate::finishedHandler()"));
        assert!(text.contains("return FacebookInterface::Post;"));
        assert!(text.contains("bool FacebookPostInterface::uploadComment(const QString &message)"));
        assert!(text.contains("// <<< uploadComment"));
    }

    #[test]
    fn test_change_detection_uses_ontology_keys() {
        let text = render_fresh(&post_structure());
        assert!(text.contains(
            "    QString oldMessage = oldData.value(FACEBOOK_ONTOLOGY_POST_MESSAGE).toString();"
        ));
        assert!(text.contains("    int newShares = newData.value(FACEBOOK_ONTOLOGY_POST_SHARES).toInt();"));
        assert!(text.contains("    if (newMessage != oldMessage)\n        emit q->messageChanged();"));
    }

    #[test]
    fn test_custom_properties_are_not_auto_compared() {
        let text = render_fresh(&post_structure());
        assert!(!text.contains("oldFrom"));
        assert!(!text.contains("oldTo ="));
    }

    #[test]
    fn test_unmapped_type_listed_exactly_once() {
        let text = render_fresh(&post_structure());
        assert!(text.contains("not handled automatically"));
        let occurrences = text.matches("    // - created_time").count();
        assert_eq!(occurrences, 1);
        // and no comparison was generated for it
        assert!(!text.contains("oldCreatedTime"));
    }

    #[test]
    fn test_identifiable_super_call_reinserts_metadata_id() {
        let text = render_fresh(&post_structure());
        assert!(text.contains("oldData.value(FACEBOOK_ONTOLOGY_METADATA_ID)"));
        assert!(text.contains(
            "IdentifiableContentItemInterfacePrivate::emitPropertyChangeSignals(oldDataWithId, \
             newDataWithId);"
        ));
    }

    #[test]
    fn test_list_property_emits_four_callbacks_and_accessor() {
        let text = render_fresh(&post_structure());
        for callback in ["to_append", "to_at", "to_clear", "to_count"] {
            assert!(
                text.contains(&format!("FacebookPostInterfacePrivate::{}", callback)),
                "missing callback {}",
                callback
            );
        }
        assert!(text.contains(
            "QDeclarativeListProperty<FacebookObjectReferenceInterface> \
             FacebookPostInterface::to()"
        ));
    }

    #[test]
    fn test_custom_accessor_reads_stored_state() {
        let text = render_fresh(&post_structure());
        assert!(text.contains(
            "FacebookObjectReferenceInterface * FacebookPostInterface::from() const\n{\n    \
             Q_D(const FacebookPostInterface);\n    return d->from;\n}"
        ));
    }

    #[test]
    fn test_embedded_source_shape() {
        let structure = Structure {
            name: "user_cover".into(),
            doc: String::new(),
            identifiable: false,
            properties: vec![property("source", "QString"), property("offset_y", "int")],
            methods: vec![],
            extra: Default::default(),
        };
        let text = render_fresh(&structure);
        assert!(text.contains("#include \"facebookusercoverinterface.h\""));
        assert!(text.contains("#include \"contentiteminterface_p.h\""));
        assert!(text.contains(
            "class FacebookUserCoverInterfacePrivate: public ContentItemInterfacePrivate"
        ));
        assert!(!text.contains("finishedHandler"));
        assert!(!text.contains("remove()"));
        assert!(text.contains(
            "    ContentItemInterfacePrivate::emitPropertyChangeSignals(oldData, newData);"
        ));
        assert!(text.contains("FACEBOOK_ONTOLOGY_USER_COVER_OFFSETY"));
    }

    #[test]
    fn test_regions_are_spliced_back() {
        let structure = post_structure();
        let regions = MergeRegions::from_str(
            "// <<< constructor\n    d->from = new FacebookObjectReferenceInterface(this);\n\
             // >>> constructor\n",
            START_MARKER,
            END_MARKER,
        );
        let text = InterfaceSource::new(&structure, Network::Facebook).render(&regions);
        assert!(text.contains(
            "// <<< constructor\n    d->from = new FacebookObjectReferenceInterface(this);\n\
             // >>> constructor"
        ));
        assert!(!text.contains(CONSTRUCTOR_PLACEHOLDER));
    }

    #[test]
    fn test_unknown_type_accessor_degrades_to_raw_value() {
        let text = render_fresh(&post_structure());
        assert!(text.contains(
            "QDateTime FacebookPostInterface::createdTime() const\n{\n    \
             Q_D(const FacebookPostInterface);\n    \
             return d->data().value(FACEBOOK_ONTOLOGY_POST_CREATEDTIME);\n}"
        ));
    }
}
