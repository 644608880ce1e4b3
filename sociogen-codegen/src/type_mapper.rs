//! Mapping from property types to the includes and value-conversion
//! expressions the generated code needs.
//!
//! A type absent from this table is not an error: its conversion text
//! is empty and the property is listed in a "not handled
//! automatically" comment in the generated output, surfaced to the
//! human reviewer rather than the build.

use sociogen_schema::Property;

const QT_CORE_TYPES: &[&str] = &["QString", "QVariant", "QUrl", "QVariantMap", "QDateTime"];
const QT_GUI_TYPES: &[&str] = &["QColor"];
const NUMERIC_TYPES: &[&str] = &["int", "float", "double"];

/// The include directive a generated file needs to use a property's
/// type, or `None` for built-in types.
pub fn include(property: &Property) -> Option<String> {
    let ty = property.base_type();
    if NUMERIC_TYPES.contains(&ty) {
        return None;
    }
    if QT_CORE_TYPES.contains(&ty) {
        return Some(format!("<QtCore/{}>", ty));
    }
    if QT_GUI_TYPES.contains(&ty) {
        return Some(format!("<QtGui/{}>", ty));
    }
    if property.is_pointer || property.is_list {
        return Some(format!("\"{}.h\"", ty.to_lowercase()));
    }
    None
}

/// The declared type and QVariant getter used by the change-detection
/// routine to extract a comparable typed value out of a wire-value
/// cell. `None` for unmapped types.
pub fn comparison(ty: &str) -> Option<(&'static str, &'static str)> {
    match ty {
        "int" => Some(("int", ".toInt()")),
        "float" => Some(("float", ".toFloat()")),
        "double" => Some(("double", ".toDouble()")),
        "bool" => Some(("bool", ".toBool()")),
        "QString" => Some(("QString", ".toString()")),
        "QUrl" => Some(("QUrl", ".toUrl()")),
        "QVariantMap" => Some(("QVariantMap", ".toMap()")),
        "QColor" => Some(("QColor", ".value<QColor>()")),
        _ => None,
    }
}

/// The accessor body converting a wire-value cell expression into the
/// property's type. Empty for unmapped types.
pub fn convert(ty: &str, cell: &str) -> String {
    match ty {
        "int" | "float" | "double" => {
            let getter = {
                let mut chars = ty.chars();
                let first = chars.next().expect("non-empty type");
                format!("to{}{}", first.to_uppercase(), chars.as_str())
            };
            let fallback = if ty == "int" { "-1" } else { "0." };
            format!(
                "QString numberString = {cell}.toString();\n\
                 bool ok;\n\
                 {ty} number = numberString.{getter}(&ok);\n\
                 if (ok) {{\n    return number;\n}}\n\
                 return {fallback};"
            )
        }
        "bool" => format!("return {cell}.toString() == QLatin1String(\"true\");"),
        "QString" => format!("return {cell}.toString();"),
        "QUrl" => format!("return QUrl::fromEncoded({cell}.toString().toLocal8Bit());"),
        "QVariantMap" => format!("return {cell}.toMap();"),
        "QColor" => format!(
            "QString color = {cell}.toString();\n\
             if (color.startsWith(\"#\")) {{\n    return QColor(color);\n}} else {{\n    \
             color.prepend(\"#\");\n    return QColor(color);\n}}"
        ),
        _ => String::new(),
    }
}
