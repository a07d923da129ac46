// src/domain/summary.rs
use crate::domain::DomainError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Maximum number of sentences carried into a summary
pub const MAX_KEY_POINTS: usize = 3;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

/// Placeholder "AI" summary: the first few sentences of a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub sentence_count: usize,
    pub key_points: Vec<String>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.sentence_count == 0
    }

    /// "This note contains N sentence(s)."
    pub fn headline(&self) -> String {
        let noun = if self.sentence_count == 1 {
            "sentence"
        } else {
            "sentences"
        };
        format!("This note contains {} {}.", self.sentence_count, noun)
    }
}

/// Split `content` on sentence-terminating punctuation and keep the first
/// three non-empty sentences.
pub fn summarize(content: &str) -> Result<Summary, DomainError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(DomainError::EmptyContent);
    }

    let sentences: Vec<&str> = SENTENCE_END
        .split(content)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    Ok(Summary {
        sentence_count: sentences.len(),
        key_points: sentences
            .iter()
            .take(MAX_KEY_POINTS)
            .map(|s| s.to_string())
            .collect(),
    })
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No content to summarize.");
        }
        writeln!(f, "Summary: {}", self.headline())?;
        writeln!(f, "Key Points:")?;
        for point in &self.key_points {
            writeln!(f, "  • {}", point)?;
        }
        write!(
            f,
            "Note: This is a simulated summary, no AI service was contacted."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_four_sentences_when_summarizing_then_keeps_three_points() {
        let summary = summarize("A. B. C. D.").unwrap();

        assert_eq!(summary.sentence_count, 4);
        assert_eq!(summary.key_points, vec!["A", "B", "C"]);
        assert_eq!(summary.to_string().matches('•').count(), 3);
    }

    #[rstest]
    #[case("Hello world", 1)]
    #[case("Really?! Yes... Great!", 3)]
    #[case("One.\n\nTwo!", 2)]
    fn given_punctuation_runs_when_summarizing_then_counts_sentences(
        #[case] input: &str,
        #[case] expected: usize,
    ) {
        assert_eq!(summarize(input).unwrap().sentence_count, expected);
    }

    #[test]
    fn given_blank_content_when_summarizing_then_returns_empty_content_error() {
        assert!(matches!(summarize("   \n"), Err(DomainError::EmptyContent)));
    }

    #[test]
    fn given_only_punctuation_when_summarizing_then_reports_nothing_to_summarize() {
        let summary = summarize("...!?").unwrap();

        assert!(summary.is_empty());
        assert_eq!(summary.to_string().trim(), "No content to summarize.");
    }

    #[test]
    fn given_sentences_with_padding_when_summarizing_then_trims_points() {
        let summary = summarize("  first one .   second one!").unwrap();

        assert_eq!(summary.key_points, vec!["first one", "second one"]);
        assert!(summary
            .to_string()
            .starts_with("Summary: This note contains 2 sentences."));
    }
}
