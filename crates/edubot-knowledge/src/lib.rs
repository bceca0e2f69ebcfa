//! Offline keyword knowledge base for EduBot.
//!
//! The knowledge base is the answer source of last resort: the server uses it
//! when no live provider answered and the session client uses it when the
//! server is unreachable. Matching is deliberately simple. The lowercased
//! question is tested against an ordered table of topic entries and the
//! **first** entry with any keyword occurring as a substring wins. When no
//! entry matches, the shape of the question selects one of four canned
//! fallback messages.
//!
//! # Main types
//!
//! - [`KnowledgeBase`] — An ordered topic table with a precompiled matcher.
//! - [`Entry`] — One `{ topic, keywords, answer }` row.
//! - [`Lookup`] — How a question was answered.

mod table;

use regex::{Regex, RegexSet};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// One row of the topic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Stable topic name, used for logging and tests.
    pub topic: &'static str,
    /// Lowercase substrings that select this entry.
    pub keywords: &'static [&'static str],
    /// The canned answer text.
    pub answer: &'static str,
}

/// Which question-shape fallback answered an unmatched question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// Looks like a question but no topic matched.
    Question,
    /// Asks how to do something.
    HowTo,
    /// Asks to solve or compute something.
    Problem,
    /// Anything else.
    General,
}

/// Result of a knowledge base lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// A table entry matched.
    Topic(&'static Entry),
    /// No entry matched; a shape fallback applies.
    Fallback(Fallback),
}

const GREAT_QUESTION: &str = "That's a great question! While I can help with many topics, I don't have a specific answer prepared for \"{question}\".\n\nI'm best at explaining:\n• Math (algebra, calculus, geometry, statistics)\n• Science (physics, chemistry, biology, earth science)\n• Programming (Python, JavaScript, algorithms, data structures)\n• History, English, and general academics\n\nTry rephrasing your question or asking about a different topic!";

const HOW_TO: &str = "I can show you how to do many things! Try these:\n\n• \"How to solve quadratic equations\"\n• \"How to write a Python function\"\n• \"How to balance chemical equations\"\n• \"How to write an essay\"\n• \"How to study effectively\"\n\nOr ask about specific topics in math, science, programming, or history!";

const PROBLEM_SOLVING: &str = "I can help solve problems! Try:\n\n• Math: \"Solve x² - 5x + 6 = 0\" or \"Find derivative of 3x²\"\n• Science: \"Calculate force if mass is 5kg and acceleration is 2m/s²\"\n• Programming: \"How to find largest number in array\"\n\nProvide the specific problem and I'll walk through the solution!";

/// The final fallback: an overview of what EduBot can help with.
pub const GENERAL_OVERVIEW: &str = "I'm EduBot, ready to help you learn! I excel at:\n\n📐 **Math**: Algebra, calculus, geometry, statistics\n🔬 **Science**: Physics, chemistry, biology\n💻 **Programming**: Python, JavaScript, algorithms\n📚 **History**: Major events, revolutions, civilizations\n✍️ **Writing**: Grammar, essays, literary analysis\n\n**Ask me something specific like:**\n• \"Explain Newton's laws of motion\"\n• \"How to solve quadratic equations\"\n• \"What is photosynthesis\"\n• \"Write a Python loop\"\n• \"What caused World War 2\"\n\nThe more specific your question, the better I can help!";

/// Words that mark a question even without a trailing `?`.
const INTERROGATIVES: &[&str] = &[
    "what", "how", "why", "who", "when", "where", "which", "explain", "define", "describe",
];

impl Fallback {
    /// Renders the canned message for `question`.
    pub fn render(self, question: &str) -> String {
        match self {
            Self::Question => GREAT_QUESTION.replace("{question}", question),
            Self::HowTo => HOW_TO.to_string(),
            Self::Problem => PROBLEM_SOLVING.to_string(),
            Self::General => GENERAL_OVERVIEW.to_string(),
        }
    }

    fn classify(lower: &str) -> Self {
        let trimmed = lower.trim_start();
        if lower.contains('?') || INTERROGATIVES.iter().any(|w| trimmed.starts_with(w)) {
            Self::Question
        } else if how_to_pattern().is_match(lower) {
            Self::HowTo
        } else if problem_pattern().is_match(lower) {
            Self::Problem
        } else {
            Self::General
        }
    }
}

#[allow(clippy::expect_used)]
fn how_to_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(how to|how do|how can)\b").expect("literal pattern"))
}

#[allow(clippy::expect_used)]
fn problem_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(solve|calculate|compute|find)\b").expect("literal pattern")
    })
}

/// An ordered topic table.
///
/// Lookups run one pass of a [`RegexSet`] built from every keyword in table
/// order. The lowest matching pattern index identifies the first entry that
/// a linear scan would have picked, so first-match semantics hold.
pub struct KnowledgeBase {
    entries: Vec<&'static Entry>,
    matcher: Option<RegexSet>,
    pattern_entry: Vec<usize>,
    keyword_index: HashMap<&'static str, usize>,
}

impl KnowledgeBase {
    /// Builds a knowledge base over `entries`, keeping their order.
    pub fn new(entries: impl IntoIterator<Item = &'static Entry>) -> Self {
        let entries: Vec<&'static Entry> = entries.into_iter().collect();

        let mut patterns = Vec::new();
        let mut pattern_entry = Vec::new();
        let mut keyword_index = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            for keyword in entry.keywords {
                patterns.push(regex::escape(keyword));
                pattern_entry.push(idx);
                keyword_index.entry(*keyword).or_insert(idx);
            }
        }

        // Falls back to a linear scan if the set cannot be compiled.
        let matcher = match RegexSet::new(&patterns) {
            Ok(set) => Some(set),
            Err(e) => {
                debug!(error = %e, "keyword matcher unavailable, using linear scan");
                None
            }
        };

        Self {
            entries,
            matcher,
            pattern_entry,
            keyword_index,
        }
    }

    /// The built-in EduBot topic table.
    pub fn builtin() -> &'static KnowledgeBase {
        static KB: OnceLock<KnowledgeBase> = OnceLock::new();
        KB.get_or_init(|| KnowledgeBase::new(table::BUILTIN))
    }

    /// Entries in priority order.
    pub fn entries(&self) -> impl Iterator<Item = &'static Entry> + '_ {
        self.entries.iter().copied()
    }

    /// The entry that first registered `keyword`, if any.
    pub fn entry_for_keyword(&self, keyword: &str) -> Option<&'static Entry> {
        self.keyword_index
            .get(keyword)
            .map(|&idx| self.entries[idx])
    }

    /// Classifies `question` without rendering an answer.
    pub fn lookup(&self, question: &str) -> Lookup {
        let lower = question.to_lowercase();
        let padded = format!(" {lower} ");

        let hit = match &self.matcher {
            Some(set) => set
                .matches(&padded)
                .iter()
                .next()
                .map(|pattern| self.pattern_entry[pattern]),
            None => self.linear_scan(&padded),
        };

        match hit {
            Some(idx) => {
                let entry = self.entries[idx];
                debug!(topic = entry.topic, "knowledge base topic matched");
                Lookup::Topic(entry)
            }
            None => Lookup::Fallback(Fallback::classify(&lower)),
        }
    }

    /// Answers `question` from the table or a shape fallback.
    pub fn answer(&self, question: &str) -> String {
        match self.lookup(question) {
            Lookup::Topic(entry) => entry.answer.to_string(),
            Lookup::Fallback(fallback) => fallback.render(question),
        }
    }

    fn linear_scan(&self, padded: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.keywords.iter().any(|k| padded.contains(k)))
    }
}

impl std::fmt::Debug for KnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeBase")
            .field("entries", &self.entries.len())
            .field("keywords", &self.keyword_index.len())
            .finish()
    }
}

/// Answers `question` from the built-in table.
pub fn answer(question: &str) -> String {
    KnowledgeBase::builtin().answer(question)
}
