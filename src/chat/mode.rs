//! Assistant modes.
//!
//! A mode is a cosmetic persona label. It is attached to assistant replies
//! and shown in the input placeholder; it never changes what is sent to the
//! reply service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One of the fixed assistant modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    /// Default general model.
    #[default]
    Pro,
    /// Short answers.
    Fast,
    Scholar,
    Teacher,
    Brother,
    Tafsir,
}

impl Mode {
    /// Every mode, in menu order.
    pub const ALL: [Mode; 6] = [
        Self::Pro,
        Self::Fast,
        Self::Scholar,
        Self::Teacher,
        Self::Brother,
        Self::Tafsir,
    ];

    /// Model picker entries shown in the chat top bar.
    pub const MODELS: [Mode; 2] = [Self::Pro, Self::Fast];

    /// Persona entries shown in the sidebar and mobile sheet.
    pub const PERSONAS: [Mode; 4] = [Self::Scholar, Self::Teacher, Self::Brother, Self::Tafsir];

    /// Display label, also used as the label on assistant messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pro => "IlmAI Pro 1.0",
            Self::Fast => "IlmAI Fast",
            Self::Scholar => "Scholar Mode",
            Self::Teacher => "Teacher Mode",
            Self::Brother => "Brother Mode",
            Self::Tafsir => "Tafsir Mode",
        }
    }

    /// Stable form value.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Pro => "pro",
            Self::Fast => "fast",
            Self::Scholar => "scholar",
            Self::Teacher => "teacher",
            Self::Brother => "brother",
            Self::Tafsir => "tafsir",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Pro => "Best for complex reasoning",
            Self::Fast => "Quick, concise answers",
            Self::Scholar => "Detailed, referenced answers",
            Self::Teacher => "Step-by-step explanations",
            Self::Brother => "Friendly, conversational guidance",
            Self::Tafsir => "Quranic exegesis",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    /// Accepts either the slug or the display label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| {
                mode.slug().eq_ignore_ascii_case(needle) || mode.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseError::UnknownMode(needle.to_string()))
    }
}

impl TryFrom<String> for Mode {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slug_and_label() {
        assert_eq!("fast".parse::<Mode>().unwrap(), Mode::Fast);
        assert_eq!("IlmAI Fast".parse::<Mode>().unwrap(), Mode::Fast);
        assert_eq!("  tafsir mode ".parse::<Mode>().unwrap(), Mode::Tafsir);
        assert_eq!("ilmai pro 1.0".parse::<Mode>().unwrap(), Mode::Pro);
    }

    #[test]
    fn rejects_unknown() {
        let err = "Mufti Mode".parse::<Mode>().unwrap_err();
        assert_eq!(err, ParseError::UnknownMode("Mufti Mode".into()));
    }

    #[test]
    fn menus_partition_all_modes() {
        let mut listed: Vec<Mode> = Mode::MODELS.into_iter().chain(Mode::PERSONAS).collect();
        listed.sort_by_key(|m| m.slug());
        let mut all = Mode::ALL.to_vec();
        all.sort_by_key(|m| m.slug());
        assert_eq!(listed, all);
    }

    #[test]
    fn serde_uses_label() {
        let json = serde_json::to_string(&Mode::Scholar).unwrap();
        assert_eq!(json, r#""Scholar Mode""#);
        let back: Mode = serde_json::from_str(r#""scholar""#).unwrap();
        assert_eq!(back, Mode::Scholar);
    }
}
