use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display locale for one projection or export.
///
/// Threaded as an explicit parameter through projection and export rather
/// than held as ambient state, so each call site decides independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// English (United States); dictionary keys are in this language.
    #[default]
    EnUs,
    /// Brazilian Portuguese; headers and enumerable values are translated.
    PtBr,
}

impl Locale {
    /// IETF tag used in export filenames.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::PtBr => "pt-BR",
        }
    }

    /// True when dictionary translation applies.
    pub fn is_translated(self) -> bool {
        matches!(self, Locale::PtBr)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Locale::EnUs),
            "pt" | "pt-br" => Ok(Locale::PtBr),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("pt_BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("pt".parse::<Locale>().unwrap(), Locale::PtBr);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn tags_match_export_suffixes() {
        assert_eq!(Locale::EnUs.tag(), "en-US");
        assert_eq!(Locale::PtBr.tag(), "pt-BR");
    }
}
