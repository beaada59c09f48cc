use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column order of the question file. Loading rejects any other header.
pub const QUESTION_HEADERS: [&str; 6] = [
    "id",
    "question",
    "category",
    "difficulty",
    "used",
    "correct_answer",
];

/// One row of the question file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(with = "trimmed")]
    pub id: u32,
    pub question: String,
    #[serde(with = "trimmed")]
    pub category: u32,
    #[serde(with = "trimmed")]
    pub difficulty: u8,
    #[serde(with = "title_bool")]
    pub used: bool,
    #[serde(with = "yes_no")]
    pub correct_answer: Option<bool>,
}

impl Question {
    pub fn new(id: u32, question: impl Into<String>, category: u32, difficulty: u8) -> Self {
        Self {
            id,
            question: question.into(),
            category,
            difficulty,
            used: false,
            correct_answer: None,
        }
    }

    pub fn with_answer(mut self, correct_answer: bool) -> Self {
        self.correct_answer = Some(correct_answer);
        self
    }
}

/// Linear predicate over questions. The default matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub category: Option<u32>,
    pub difficulty: Option<u8>,
    pub unused_only: bool,
}

impl QuestionFilter {
    /// Filter used when drawing a question for a round
    pub fn unused() -> Self {
        Self {
            unused_only: true,
            ..Self::default()
        }
    }

    pub fn category(mut self, category: u32) -> Self {
        self.category = Some(category);
        self
    }

    pub fn difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn matches(&self, question: &Question) -> bool {
        if self.unused_only && question.used {
            return false;
        }
        if self.category.is_some_and(|c| c != question.category) {
            return false;
        }
        if self.difficulty.is_some_and(|d| d != question.difficulty) {
            return false;
        }
        true
    }
}

/// Aggregate counts over the loaded questions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub total: usize,
    pub used: usize,
    pub unused: usize,
    pub per_category: BTreeMap<u32, usize>,
}

/// Numeric cells tolerate surrounding spaces. Question text is left as written.
mod trimmed {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn serialize<T: Serialize, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.trim().parse().map_err(de::Error::custom)
    }
}

/// `True`/`False` literals, read case-insensitively
mod title_bool {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "True" } else { "False" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(de::Error::custom(format!("invalid boolean: {other:?}"))),
        }
    }
}

/// `Yes`/`No` literals; an empty cell means the question carries no answer key
mod yes_no {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match value {
            Some(true) => "Yes",
            Some(false) => "No",
            None => "",
        })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<bool>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "yes" | "true" => Ok(Some(true)),
            "no" | "false" => Ok(Some(false)),
            other => Err(de::Error::custom(format!("invalid answer: {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Question {
        Question::new(7, "Have you ever sung karaoke?", 2, 3).with_answer(true)
    }

    #[rstest]
    #[case(QuestionFilter::default(), true)]
    #[case(QuestionFilter::default().category(2), true)]
    #[case(QuestionFilter::default().category(1), false)]
    #[case(QuestionFilter::default().difficulty(3), true)]
    #[case(QuestionFilter::default().difficulty(1), false)]
    #[case(QuestionFilter::unused().category(2).difficulty(3), true)]
    fn filter_matches_fresh_question(#[case] filter: QuestionFilter, #[case] expected: bool) {
        assert_eq!(filter.matches(&sample()), expected);
    }

    #[test]
    fn unused_filter_rejects_used_question() {
        let mut question = sample();
        question.used = true;

        assert!(!QuestionFilter::unused().matches(&question));
        assert!(QuestionFilter::default().matches(&question));
    }

    #[test]
    fn new_question_starts_unused_without_answer() {
        let question = Question::new(1, "Q?", 1, 1);
        assert!(!question.used);
        assert_eq!(question.correct_answer, None);
    }
}
