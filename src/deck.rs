// Deck module - question decks loaded from JSON
//
// A deck is an ordered list of questions; each question carries its
// variants and the set of correct indices used to seed that question's
// quiz model. The widget itself never sees the correct set directly -
// it only queries the model.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Sample deck compiled into the binary, used when no deck path is given
const BUNDLED_DECK: &str = include_str!("../decks/sample.json");

/// One selectable answer option. Opaque to the widget beyond its text;
/// identity is the position in the question's variant list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Variant {
    pub text: String,
}

/// A single quiz question
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    /// Question text rendered in the heading
    pub text: String,

    /// Ordered answer variants, indexed 0..n-1
    #[serde(default)]
    pub variants: Vec<Variant>,

    /// Indices of the correct variants
    #[serde(default)]
    pub correct: Vec<usize>,
}

/// An ordered set of questions with a display title
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    pub title: String,

    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Deck {
    /// Load a deck from a JSON file
    pub fn load(path: &Path) -> Result<Deck> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck file {}", path.display()))?;
        let deck: Deck = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse deck file {}", path.display()))?;
        deck.warn_on_suspect_questions();
        Ok(deck)
    }

    /// The bundled sample deck
    pub fn bundled() -> Deck {
        // Parsed from a compile-time string; a failure here is a build defect
        let deck: Deck = serde_json::from_str(BUNDLED_DECK).expect("bundled deck is valid JSON");
        deck
    }

    /// Log questions that will confuse players (no variants, or correct
    /// indices pointing outside the variant list). Suspect questions still
    /// load - the widget renders an empty list and the model tolerates
    /// out-of-range indices - but the deck author probably wants to know.
    fn warn_on_suspect_questions(&self) {
        for (n, question) in self.questions.iter().enumerate() {
            if question.variants.is_empty() {
                tracing::warn!("Question {} has no variants", n + 1);
            }
            for &c in &question.correct {
                if c >= question.variants.len() {
                    tracing::warn!(
                        "Question {} marks variant {} correct, but only {} variants exist",
                        n + 1,
                        c,
                        question.variants.len()
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_deck() {
        let deck: Deck = serde_json::from_str(
            r#"{
                "title": "Тест",
                "questions": [
                    {
                        "text": "2 + 2?",
                        "variants": [{"text": "3"}, {"text": "4"}],
                        "correct": [1]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(deck.title, "Тест");
        assert_eq!(deck.questions.len(), 1);
        assert_eq!(deck.questions[0].variants[1].text, "4");
        assert_eq!(deck.questions[0].correct, vec![1]);
    }

    #[test]
    fn variants_and_correct_default_to_empty() {
        let deck: Deck =
            serde_json::from_str(r#"{"title": "x", "questions": [{"text": "q"}]}"#).unwrap();
        assert!(deck.questions[0].variants.is_empty());
        assert!(deck.questions[0].correct.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let result: std::result::Result<Deck, _> = serde_json::from_str("{\"title\": 42}");
        assert!(result.is_err());
    }

    #[test]
    fn bundled_deck_has_questions_with_variants() {
        let deck = Deck::bundled();
        assert!(!deck.questions.is_empty());
        for question in &deck.questions {
            assert!(!question.variants.is_empty());
            for &c in &question.correct {
                assert!(c < question.variants.len());
            }
        }
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let err = Deck::load(Path::new("/nonexistent/deck.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/deck.json"));
    }
}
