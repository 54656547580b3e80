//! Quiz topics, questions and answer judging

use serde::{Deserialize, Serialize};

use crate::utils::helpers::normalize_answer;

/// Minimum length of a partial answer accepted by [`judge_answer`]
const MIN_PARTIAL_ANSWER_CHARS: usize = 3;

/// Words that never make an answer right on their own
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "of", "and", "or", "in", "on", "at", "to", "for", "by", "de", "la", "le",
];

/// Topics offered in the quiz picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizTopic {
    Programming,
    History,
    Science,
    Geography,
    Literature,
}

impl QuizTopic {
    pub const ALL: [QuizTopic; 5] = [
        QuizTopic::Programming,
        QuizTopic::History,
        QuizTopic::Science,
        QuizTopic::Geography,
        QuizTopic::Literature,
    ];

    pub fn key(self) -> &'static str {
        match self {
            QuizTopic::Programming => "programming",
            QuizTopic::History => "history",
            QuizTopic::Science => "science",
            QuizTopic::Geography => "geography",
            QuizTopic::Literature => "literature",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            QuizTopic::Programming => "💻 Programming",
            QuizTopic::History => "🏛 History",
            QuizTopic::Science => "🔬 Science",
            QuizTopic::Geography => "🌍 Geography",
            QuizTopic::Literature => "📚 Literature",
        }
    }

    /// Topic name as used in the generation prompt
    pub fn subject(self) -> &'static str {
        match self {
            QuizTopic::Programming => "programming and computer science",
            QuizTopic::History => "world history",
            QuizTopic::Science => "natural science",
            QuizTopic::Geography => "world geography",
            QuizTopic::Literature => "classic literature",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.key() == key)
    }
}

/// Running correct-answer tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizTally {
    pub correct: u32,
    pub answered: u32,
}

impl QuizTally {
    pub fn record(self, correct: bool) -> Self {
        Self {
            correct: self.correct + u32::from(correct),
            answered: self.answered + 1,
        }
    }
}

impl std::fmt::Display for QuizTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.answered)
    }
}

/// A generated question with the answer the gateway expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub answer: String,
}

impl QuizQuestion {
    /// Parse a gateway reply of the form
    ///
    /// ```text
    /// QUESTION: <question>
    /// ANSWER: <answer>
    /// ```
    ///
    /// Labels are matched case-insensitively; other lines are ignored.
    pub fn parse(reply: &str) -> Option<Self> {
        let mut question = None;
        let mut answer = None;

        for line in reply.lines() {
            let line = line.trim().trim_start_matches(&['*', '#', ' '][..]);
            if let Some(value) = strip_label(line, "question:") {
                question = Some(value);
            } else if let Some(value) = strip_label(line, "answer:") {
                answer = Some(value);
            }
        }

        match (question, answer) {
            (Some(question), Some(answer)) if !question.is_empty() && !answer.is_empty() => {
                Some(Self { question, answer })
            }
            _ => None,
        }
    }
}

fn strip_label(line: &str, label: &str) -> Option<String> {
    let head = line.get(..label.len())?;
    if head.eq_ignore_ascii_case(label) {
        Some(line[label.len()..].trim().trim_matches('*').trim().to_string())
    } else {
        None
    }
}

/// Judge a user's answer against the expected one
///
/// Correct when the normalized answers are equal or differ only in
/// stopwords ("Beatles" for "The Beatles"). A shorter answer is accepted
/// only when it is the trailing part of the expected one and at least three
/// characters long, so a surname passes ("Shakespeare" for "William
/// Shakespeare") while a leading word such as "new" for "New Delhi" does not.
pub fn judge_answer(expected: &str, given: &str) -> bool {
    let expected = normalize_answer(expected);
    let given = normalize_answer(given);

    if given.is_empty() {
        return false;
    }
    if expected == given {
        return true;
    }

    let expected = significant_words(&expected);
    let given = significant_words(&given);
    if given.is_empty() {
        return false;
    }
    if expected == given {
        return true;
    }

    let given_chars: usize = given.iter().map(|word| word.chars().count()).sum();
    given_chars >= MIN_PARTIAL_ANSWER_CHARS && expected.ends_with(&given)
}

fn significant_words(normalized: &str) -> Vec<&str> {
    normalized
        .split(' ')
        .filter(|word| !word.is_empty() && !STOPWORDS.contains(word))
        .collect()
}
