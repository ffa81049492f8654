//! Role words used to prefix generated step titles.
//!
//! German is the default language; English is available for mixed teams and
//! for comparing output with the host framework's own reports.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language of the role words placed in front of humanised step titles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Language {
    /// German role words (`Gegeben sei`, `Wenn`, `Dann`, `Und`, `Aber`).
    #[default]
    #[serde(rename = "de", alias = "deutsch", alias = "german")]
    #[value(name = "de")]
    German,
    /// English role words (`Given`, `When`, `Then`, `And`, `But`).
    #[serde(rename = "en", alias = "english")]
    #[value(name = "en")]
    English,
}

impl Language {
    /// Every supported language, in the order shown in error messages.
    pub const ALL: [Self; 2] = [Self::German, Self::English];

    /// Short code used in configuration files and environment variables.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::German => "de",
            Self::English => "en",
        }
    }

    /// Word that introduces a step of the given role.
    ///
    /// [`Role::TearDown`] has no word: tear-down steps are not reported.
    #[must_use]
    pub const fn role_word(self, role: Role) -> &'static str {
        match (self, role) {
            (Self::German, Role::Given) => "Gegeben sei",
            (Self::German, Role::When) => "Wenn",
            (Self::German, Role::Then) => "Dann",
            (Self::German, Role::And) => "Und",
            (Self::German, Role::But) => "Aber",
            (Self::English, Role::Given) => "Given",
            (Self::English, Role::When) => "When",
            (Self::English, Role::Then) => "Then",
            (Self::English, Role::And) => "And",
            (Self::English, Role::But) => "But",
            (_, Role::TearDown) => "",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a language code is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Language::ALL.iter().map(|lang| lang.code()).collect();
        write!(f, "expected one of {}, got '{}'", known.join(", "), self.0)
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "de" | "deutsch" | "german" => Ok(Self::German),
            "en" | "english" => Ok(Self::English),
            _ => Err(UnknownLanguage(value.to_owned())),
        }
    }
}

/// Grammatical role of a step in a Given/When/Then chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Context set-up.
    Given,
    /// The transition under test.
    When,
    /// An expected outcome.
    Then,
    /// Continuation of the previous step.
    And,
    /// Contrasting continuation of the previous step.
    But,
    /// Clean-up, never reported.
    TearDown,
}
