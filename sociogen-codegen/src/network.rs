use std::{fmt, str::FromStr};

/// The social network a generated class binds to.
///
/// Selects the class-name prefix and the ontology constant namespace.
/// Always passed explicitly to the emitters; there is no process-wide
/// "current network".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Facebook,
    Twitter,
}

impl Network {
    /// Class-name prefix, e.g. `Facebook` in `FacebookPhotoInterface`.
    pub fn prefix(self) -> &'static str {
        match self {
            Network::Facebook => "Facebook",
            Network::Twitter => "Twitter",
        }
    }

    /// Ontology constant namespace, e.g. `FACEBOOK` in
    /// `FACEBOOK_ONTOLOGY_PHOTO`.
    pub fn upper(self) -> &'static str {
        match self {
            Network::Facebook => "FACEBOOK",
            Network::Twitter => "TWITTER",
        }
    }

    /// File-name prefix, e.g. `facebook` in `facebookinterface.h`.
    pub fn lower(self) -> &'static str {
        match self {
            Network::Facebook => "facebook",
            Network::Twitter => "twitter",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "facebook" => Ok(Network::Facebook),
            "twitter" => Ok(Network::Twitter),
            other => Err(format!(
                "unknown social network '{}', expected 'facebook' or 'twitter'",
                other
            )),
        }
    }
}
