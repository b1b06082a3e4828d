//! Data models for chapters, questions and incidences

use serde::{Deserialize, Serialize};

use crate::magnitude::Magnitude;

/// Chapter front matter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterMeta {
    /// Chapter title
    pub title: String,
    /// One-paragraph chapter description
    pub description: String,
    /// Longer background text
    pub background: String,
}

/// A single assessment point
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    /// Question key in the chapter document
    pub id: String,
    /// Full question text
    pub question: String,
    /// Why the question is asked (required for Word export)
    pub rationale: Option<String>,
    /// Key into the answer label table
    pub answer: String,
    /// Key into the audience label table
    pub applies: String,
    /// Ids of incidences this question cites
    pub incidences: Vec<String>,
    /// Further reading
    pub links: Vec<String>,
}

impl Question {
    /// Whether this question cites the given incidence id (case-insensitive)
    pub fn cites(&self, incidence_id: &str) -> bool {
        self.incidences
            .iter()
            .any(|cited| cited.eq_ignore_ascii_case(incidence_id))
    }
}

/// A chapter of the questionnaire, questions in declaration order
#[derive(Debug, Clone, Serialize)]
pub struct Chapter {
    pub id: String,
    pub meta: ChapterMeta,
    pub questions: Vec<Question>,
}

/// Cross-reference from an incidence back to a question citing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// Chapter id the question lives in
    pub chapter: String,
    /// Question id
    pub question: String,
    /// Full question text
    pub text: String,
}

/// A documented security incidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incidence {
    /// Record key in the incidence document
    #[serde(skip_deserializing)]
    pub id: String,
    /// Display title, also the presentation sort key
    pub title: String,
    /// What happened
    pub description: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Value of assets lost, e.g. "180M" or a bare number
    #[serde(default, rename(deserialize = "assets-stolen"))]
    pub assets_stolen: Option<Magnitude>,
    /// Number of user accounts compromised
    #[serde(default, rename(deserialize = "compromised-users"))]
    pub compromised_users: Option<Magnitude>,
    /// Questions citing this incidence, filled by the cross-reference pass
    #[serde(skip_deserializing)]
    pub references: Vec<Reference>,
}

impl Incidence {
    /// Assets lost as a number, 0.0 when not disclosed
    pub fn assets_stolen_value(&self) -> f64 {
        self.assets_stolen.as_ref().map_or(0.0, Magnitude::value)
    }

    /// Compromised accounts as a number, 0.0 when not disclosed
    pub fn compromised_users_value(&self) -> f64 {
        self.compromised_users.as_ref().map_or(0.0, Magnitude::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_with_incidences(ids: &[&str]) -> Question {
        Question {
            id: "hot-wallet-limits".to_string(),
            question: "Do you enforce hot wallet balance limits?".to_string(),
            rationale: None,
            answer: "default".to_string(),
            applies: "everyone".to_string(),
            incidences: ids.iter().map(|s| s.to_string()).collect(),
            links: Vec::new(),
        }
    }

    #[test]
    fn test_cites_is_case_insensitive() {
        let question = question_with_incidences(&["MtGox", "coincheck"]);
        assert!(question.cites("mtgox"));
        assert!(question.cites("Coincheck"));
        assert!(!question.cites("bitfinex"));
    }

    #[test]
    fn test_cites_empty_list() {
        let question = question_with_incidences(&[]);
        assert!(!question.cites("mtgox"));
    }

    #[test]
    fn test_incidence_magnitude_values() {
        let incidence: Incidence = serde_yaml::from_str(
            r#"
title: Mt. Gox
description: Exchange collapse after years of undetected theft.
assets-stolen: "450M"
compromised-users: 24000
"#,
        )
        .unwrap();
        assert_eq!(incidence.assets_stolen_value(), 450_000_000.0);
        assert_eq!(incidence.compromised_users_value(), 24_000.0);
    }

    #[test]
    fn test_incidence_defaults() {
        let incidence: Incidence = serde_yaml::from_str(
            r#"
title: Small breach
description: Nothing disclosed.
"#,
        )
        .unwrap();
        assert_eq!(incidence.assets_stolen_value(), 0.0);
        assert_eq!(incidence.compromised_users_value(), 0.0);
        assert!(incidence.references.is_empty());
    }
}
