use crate::error::OpaqueError;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// A single `Name/Version (c1; c2; ...)` fragment of a User-Agent header,
/// as produced by a User-Agent tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    /// Name of the product, e.g. `Mozilla` or `CFNetwork`.
    pub name: String,
    /// Version of the product, empty if absent.
    #[serde(default)]
    pub version: String,
    /// The `;`-separated tokens found between the parentheses.
    #[serde(default)]
    pub comment: Vec<String>,
}

impl Section {
    /// Create a new [`Section`] without a comment.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            comment: Vec::new(),
        }
    }

    /// Set the comment tokens of this [`Section`].
    #[must_use]
    pub fn with_comment<I, S>(mut self, comment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_comment(comment);
        self
    }

    /// Set the comment tokens of this [`Section`].
    pub fn set_comment<I, S>(&mut self, comment: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment = comment.into_iter().map(Into::into).collect();
        self
    }
}

/// The rendering engine of the browser, as detected prior to OS inference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Engine {
    /// No engine could be detected.
    #[default]
    Unknown,
    /// Mozilla's Gecko engine.
    Gecko,
    /// WebKit and its descendants (Blink included).
    AppleWebKit,
    /// Internet Explorer's Trident engine.
    Trident,
}

impl Engine {
    /// Map an engine tag to an [`Engine`], with the empty tag being [`Engine::Unknown`].
    ///
    /// Returns `None` for tags outside of the supported set.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            Some(Self::Unknown)
        } else if tag.eq_ignore_ascii_case("Gecko") {
            Some(Self::Gecko)
        } else if tag.eq_ignore_ascii_case("AppleWebKit") {
            Some(Self::AppleWebKit)
        } else if tag.eq_ignore_ascii_case("Trident") {
            Some(Self::Trident)
        } else {
            None
        }
    }

    /// The tag of this engine, empty for [`Engine::Unknown`].
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Gecko => "Gecko",
            Self::AppleWebKit => "AppleWebKit",
            Self::Trident => "Trident",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
            .ok_or_else(|| OpaqueError::from_display(format!("invalid engine: {s}")))
    }
}

impl Serialize for Engine {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Engine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// The browser as detected prior to OS inference.
///
/// Some heuristics relabel the browser [`name`](Self::name),
/// e.g. a stock Android browser that advertises itself as Safari.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Browser {
    /// Name of the browser, e.g. `Safari` or `Firefox`.
    #[serde(default)]
    pub name: String,
    /// Version of the browser, not used for os detection.
    #[serde(default)]
    pub version: String,
    /// Rendering engine, deciding the heuristic for `Mozilla` sections.
    #[serde(default)]
    pub engine: Engine,
}

impl Browser {
    /// Create a new [`Browser`].
    pub fn new(name: impl Into<String>, version: impl Into<String>, engine: Engine) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            engine,
        }
    }
}

/// Operating system information inferred from the comment of a User-Agent.
///
/// Empty strings mean the value could not be inferred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OsInfo {
    pub(super) platform: String,
    pub(super) os: String,
    pub(super) localization: String,
    pub(super) mobile: bool,
    pub(super) undecided: bool,
}

impl OsInfo {
    /// returns the platform, e.g. `Windows`, `Linux` or `iPhone`.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// returns the name of the operating system, e.g. `Windows 7` or `Android 4.4`.
    #[must_use]
    pub fn os(&self) -> &str {
        &self.os
    }

    /// returns the localization, e.g. `en-US`.
    #[must_use]
    pub fn localization(&self) -> &str {
        &self.localization
    }

    /// returns true if the User-Agent comes from a mobile device.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// returns true if no heuristic could classify the User-Agent,
    /// e.g. for bots or unknown formats.
    #[must_use]
    pub fn is_undecided(&self) -> bool {
        self.undecided
    }
}

impl fmt::Display for OsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.undecided {
            return f.write_str("undecided");
        }
        if self.os.is_empty() {
            f.write_str("unknown os")?;
        } else {
            f.write_str(&self.os)?;
        }
        if !self.platform.is_empty() {
            write!(f, " ({})", self.platform)?;
        }
        if !self.localization.is_empty() {
            write!(f, " [{}]", self.localization)?;
        }
        if self.mobile {
            f.write_str(" mobile")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_from_str() {
        for (tag, expected) in [
            ("", Some(Engine::Unknown)),
            ("Gecko", Some(Engine::Gecko)),
            ("gecko", Some(Engine::Gecko)),
            ("AppleWebKit", Some(Engine::AppleWebKit)),
            (" Trident ", Some(Engine::Trident)),
            ("Presto", None),
            ("Blink", None),
        ] {
            assert_eq!(tag.parse::<Engine>().ok(), expected, "tag: '{tag}'");
        }
    }

    #[test]
    fn test_engine_serde_roundtrip_via_str() {
        let json = serde_json::to_string(&Engine::AppleWebKit).unwrap();
        assert_eq!(json, r#""AppleWebKit""#);
        let engine: Engine = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(engine, Engine::Unknown);
        assert!(serde_json::from_str::<Engine>(r#""KHTML""#).is_err());
    }

    #[test]
    fn test_section_deserialize_defaults() {
        let section: Section = serde_json::from_str(r#"{"name":"Mozilla"}"#).unwrap();
        assert_eq!(section, Section::new("Mozilla", ""));

        let section: Section = serde_json::from_str(
            r#"{"name":"Mozilla","version":"5.0","comment":["X11","Linux x86_64"]}"#,
        )
        .unwrap();
        assert_eq!(
            section,
            Section::new("Mozilla", "5.0").with_comment(["X11", "Linux x86_64"])
        );
    }

    #[test]
    fn test_os_info_display() {
        assert_eq!(OsInfo::default().to_string(), "unknown os");

        let info = OsInfo {
            platform: "Linux".to_owned(),
            os: "Android 4.4".to_owned(),
            localization: "en-us".to_owned(),
            mobile: true,
            undecided: false,
        };
        assert_eq!(info.to_string(), "Android 4.4 (Linux) [en-us] mobile");

        let info = OsInfo {
            undecided: true,
            ..Default::default()
        };
        assert_eq!(info.to_string(), "undecided");
    }
}
