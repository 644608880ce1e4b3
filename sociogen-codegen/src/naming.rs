//! Identifier-derivation utilities.
//!
//! Every symbol in the generated output is a deterministic function of
//! the structure's snake_case source name and the rules in this
//! module; no name is ever specified independently.

use crate::Network;

/// Split an identifier on its underscore word boundaries.
///
/// Delimiter-only: no camelCase input support, no Unicode-aware
/// tokenization.
pub fn split(name: &str) -> Vec<&str> {
    name.split('_').collect()
}

/// Join word fragments to camelCase (e.g. `["cover", "photo"]` ->
/// `"coverPhoto"`).
pub fn camel_case(fragments: &[&str]) -> String {
    let mut joined: String = fragments
        .iter()
        .map(|fragment| {
            let lowered = fragment.to_lowercase();
            let mut chars = lowered.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect();
    if let Some(first) = joined.get(..1) {
        let lowered = first.to_lowercase();
        joined.replace_range(..1, &lowered);
    }
    joined
}

/// Join word fragments to UpperCamelCase (e.g. `["cover", "photo"]` ->
/// `"CoverPhoto"`).
pub fn upper_camel_case(fragments: &[&str]) -> String {
    let mut joined = camel_case(fragments);
    if let Some(first) = joined.get(..1) {
        let uppered = first.to_uppercase();
        joined.replace_range(..1, &uppered);
    }
    joined
}

/// Build the ontology constant name for a property.
///
/// With no fragments this is the object's own default key,
/// `<NETWORK>_ONTOLOGY_<PREFIX>`. Otherwise the uppercased fragments
/// are concatenated with no separator after the prefix; hand-written
/// companion tables rely on that exact shape.
pub fn ontology_key(fragments: &[&str], network: Network, prefix: &str) -> String {
    let mut key = format!("{}_ONTOLOGY_", network.upper());
    if fragments.is_empty() {
        key.push_str(prefix);
        return key;
    }
    key.push_str(prefix);
    key.push('_');
    for fragment in fragments {
        key.push_str(&fragment.to_uppercase());
    }
    key
}

/// Right-pad with spaces to `width`; never truncates. Used for column
/// alignment in the ontology constant table.
pub fn pad(s: &str, width: usize) -> String {
    let mut padded = s.to_string();
    while padded.len() < width {
        padded.push(' ');
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_underscores() {
        assert_eq!(split("cover_photo"), vec!["cover", "photo"]);
        assert_eq!(split("name"), vec!["name"]);
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case(&split("cover_photo")), "coverPhoto");
        assert_eq!(camel_case(&split("to")), "to");
        assert_eq!(camel_case(&split("message_tags")), "messageTags");
    }

    #[test]
    fn test_camel_case_lowercases_fragments_first() {
        assert_eq!(camel_case(&["COVER", "PHOTO"]), "coverPhoto");
    }

    #[test]
    fn test_upper_camel_case() {
        assert_eq!(upper_camel_case(&split("cover_photo")), "CoverPhoto");
        assert_eq!(upper_camel_case(&split("user")), "User");
    }

    #[test]
    fn test_ontology_key_concatenates_without_separator() {
        assert_eq!(
            ontology_key(&split("cover_photo"), Network::Facebook, "PHOTO"),
            "FACEBOOK_ONTOLOGY_PHOTO_COVERPHOTO"
        );
    }

    #[test]
    fn test_ontology_key_default() {
        assert_eq!(
            ontology_key(&[], Network::Facebook, "PHOTO"),
            "FACEBOOK_ONTOLOGY_PHOTO"
        );
    }

    #[test]
    fn test_ontology_key_network_namespace() {
        assert_eq!(
            ontology_key(&split("screen_name"), Network::Twitter, "USER"),
            "TWITTER_ONTOLOGY_USER_SCREENNAME"
        );
    }

    #[test]
    fn test_ontology_key_underscored_prefix() {
        assert_eq!(
            ontology_key(&split("source"), Network::Facebook, "USER_COVER"),
            "FACEBOOK_ONTOLOGY_USER_COVER_SOURCE"
        );
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("abc", 6), "abc   ");
        assert_eq!(pad("abcdef", 3), "abcdef");
        assert_eq!(pad("", 2), "  ");
    }
}
