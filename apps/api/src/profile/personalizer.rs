//! Pronoun/Narrative Personalizer.
//!
//! Employer-voice templates are written in generic third-person plural
//! ("They bring... Their approach... makes them..."). This module rewrites
//! them for a named subject with a specific pronoun set.
//!
//! The template is split into word and gap tokens, and every word token is
//! rewritten at most once. A replacement can never be matched
//! again by a later rule, which is what made ordered substring replacement
//! fragile.
//!
//! Neutral (`they`) subjects get the template back verbatim.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Pronouns
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectGender {
    She,
    He,
    #[default]
    They,
}

/// Lowercase pronoun forms for one gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pronouns {
    pub subject: &'static str,
    pub object: &'static str,
    pub possessive: &'static str,
    pub possessive_pronoun: &'static str,
    pub reflexive: &'static str,
}

impl SubjectGender {
    /// Reads a free-text pronoun phrase such as `"she/her"` or `"He, him"`.
    ///
    /// A `she` token wins over a `he` token; anything else is neutral.
    pub fn from_phrase(phrase: &str) -> Self {
        let tokens: Vec<String> = phrase
            .split(|c: char| !c.is_alphabetic())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();

        if tokens.iter().any(|t| t == "she") {
            SubjectGender::She
        } else if tokens.iter().any(|t| t == "he") {
            SubjectGender::He
        } else {
            SubjectGender::They
        }
    }

    pub fn pronouns(&self) -> Pronouns {
        match self {
            SubjectGender::She => Pronouns {
                subject: "she",
                object: "her",
                possessive: "her",
                possessive_pronoun: "hers",
                reflexive: "herself",
            },
            SubjectGender::He => Pronouns {
                subject: "he",
                object: "him",
                possessive: "his",
                possessive_pronoun: "his",
                reflexive: "himself",
            },
            SubjectGender::They => Pronouns {
                subject: "they",
                object: "them",
                possessive: "their",
                possessive_pronoun: "theirs",
                reflexive: "themselves",
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public API
// ────────────────────────────────────────────────────────────────────────────

/// Rewrites a they/their/them template for `subject_full_name`.
///
/// `pronoun_phrase` is free text; a missing or unrecognised phrase is neutral.
pub fn personalize(template: &str, subject_full_name: &str, pronoun_phrase: Option<&str>) -> String {
    let gender = pronoun_phrase
        .map(SubjectGender::from_phrase)
        .unwrap_or_default();
    personalize_for(template, subject_full_name, gender)
}

/// Same as [`personalize`] with the gender already resolved.
pub fn personalize_for(template: &str, subject_full_name: &str, gender: SubjectGender) -> String {
    if gender == SubjectGender::They || template.trim().is_empty() {
        return template.to_string();
    }

    let subject = Subject {
        first_name: first_name(subject_full_name),
        pronouns: gender.pronouns(),
    };

    let mut out = String::with_capacity(template.len() + 16);
    rewrite(&tokenize(template), &subject, &mut out);
    out
}

/// First whitespace-separated token of a full name.
pub fn first_name(full_name: &str) -> Option<&str> {
    full_name.split_whitespace().next()
}

// ────────────────────────────────────────────────────────────────────────────
// Tokenizer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Gap(&'a str),
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Splits text into alternating word and gap runs. Concatenating the tokens
/// reproduces the input exactly.
fn tokenize(text: &str) -> Vec<Token<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        // Apostrophes only count as word characters between two letters.
        let is_word = c.is_alphabetic()
            || (is_apostrophe(c)
                && i > 0
                && chars[i - 1].1.is_alphabetic()
                && chars.get(i + 1).is_some_and(|&(_, next)| next.is_alphabetic()));

        if let Some(prev) = current {
            if prev != is_word {
                tokens.push(token(&text[start..offset], prev));
                start = offset;
            }
        }
        current = Some(is_word);
    }

    if let Some(prev) = current {
        tokens.push(token(&text[start..], prev));
    }
    tokens
}

fn token(text: &str, is_word: bool) -> Token<'_> {
    if is_word {
        Token::Word(text)
    } else {
        Token::Gap(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rewriting
// ────────────────────────────────────────────────────────────────────────────

struct Subject<'a> {
    first_name: Option<&'a str>,
    pronouns: Pronouns,
}

/// Verbs that take the subject's first name after a capitalized "They".
const NAMED_OPENERS: [&str; 2] = ["bring", "excel"];

const IRREGULAR_VERBS: [(&str, &str); 9] = [
    ("are", "is"),
    ("were", "was"),
    ("have", "has"),
    ("do", "does"),
    ("go", "goes"),
    ("aren't", "isn't"),
    ("weren't", "wasn't"),
    ("haven't", "hasn't"),
    ("don't", "doesn't"),
];

/// Present-tense verbs agreed with a singular subject. Anything else after
/// the pronoun is left as written.
const KNOWN_VERBS: &[&str] = &[
    "act", "adapt", "adjust", "analyze", "anticipate", "apply", "approach", "ask", "balance",
    "base", "become", "believe", "bring", "build", "care", "carry", "catch", "challenge",
    "champion", "check", "choose", "coach", "come", "commit", "communicate", "connect",
    "coordinate", "create", "decide", "deliver", "drive", "ease", "embrace", "encourage",
    "energize", "enjoy", "excel", "explain", "feel", "find", "fix", "focus", "follow",
    "generate", "get", "give", "grow", "guide", "handle", "help", "hold", "inspire", "keep",
    "know", "lead", "learn", "like", "listen", "look", "love", "make", "manage", "mean",
    "motivate", "move", "navigate", "need", "notice", "offer", "organize", "own", "plan",
    "prefer", "present", "prioritize", "protect", "push", "put", "question", "raise", "rally",
    "reach", "read", "reason", "relish", "rely", "remain", "resolve", "respect", "respond",
    "run", "say", "see", "seek", "seem", "set", "share", "shine", "show", "solve", "speak",
    "spot", "start", "stay", "steer", "stick", "study", "support", "take", "tend", "test",
    "think", "thrive", "touch", "trust", "try", "turn", "understand", "use", "value", "want",
    "weigh", "welcome", "win", "work", "worry", "write",
];

/// Adverbs allowed between the pronoun and its verb.
const SKIPPABLE_ADVERBS: &[&str] = &[
    "also", "always", "often", "usually", "generally", "naturally", "quickly", "readily",
    "consistently", "genuinely", "instinctively", "carefully", "calmly", "quietly", "really",
    "truly", "actively", "openly", "rarely", "never", "still", "sometimes",
];

const MAX_SKIPPED_ADVERBS: usize = 2;

fn is_plural_pronoun(lower: &str) -> bool {
    matches!(lower, "they" | "their" | "theirs" | "them" | "themselves")
        || contraction_suffix(lower).is_some()
}

fn rewrite(tokens: &[Token<'_>], subject: &Subject<'_>, out: &mut String) {
    let p = subject.pronouns;

    let mut i = 0;
    while i < tokens.len() {
        let word = match tokens[i] {
            Token::Gap(gap) => {
                out.push_str(gap);
                i += 1;
                continue;
            }
            Token::Word(word) => word,
        };
        let lower = word.to_lowercase();

        match lower.as_str() {
            "they" => match following_verb(tokens, i) {
                Some((j, verb)) => {
                    let named = word == "They" && j == i + 2 && NAMED_OPENERS.contains(&verb);
                    match subject.first_name {
                        Some(name) if named => out.push_str(name),
                        _ => out.push_str(&match_case(word, p.subject)),
                    }
                    for between in &tokens[i + 1..j] {
                        let (Token::Gap(text) | Token::Word(text)) = between;
                        out.push_str(text);
                    }
                    out.push_str(&third_person(verb));
                    i = j + 1;
                    continue;
                }
                None => out.push_str(&match_case(word, p.subject)),
            },
            "their" => out.push_str(&match_case(word, p.possessive)),
            "theirs" => out.push_str(&match_case(word, p.possessive_pronoun)),
            "them" => out.push_str(&match_case(word, p.object)),
            "themselves" => out.push_str(&match_case(word, p.reflexive)),
            other => match contraction_suffix(other) {
                Some((apostrophe, suffix)) => {
                    // they're / they've -> she's; they'll, they'd keep their suffix
                    let suffix = if matches!(suffix, "re" | "ve") { "s" } else { suffix };
                    out.push_str(&match_case(word, p.subject));
                    out.push(apostrophe);
                    out.push_str(suffix);
                }
                None => out.push_str(word),
            },
        }
        i += 1;
    }
}

/// `they're` → `('\'', "re")`.
fn contraction_suffix(lower: &str) -> Option<(char, &str)> {
    let rest = lower.strip_prefix("they")?;
    let mut chars = rest.chars();
    let apostrophe = chars.next().filter(|&c| is_apostrophe(c))?;
    let suffix = chars.as_str();
    matches!(suffix, "re" | "ve" | "ll" | "d").then_some((apostrophe, suffix))
}

/// Index and text of the known verb governed by the pronoun at `tokens[i]`.
///
/// Words are separated by plain whitespace, with at most
/// [`MAX_SKIPPED_ADVERBS`] adverbs in between.
fn following_verb<'a>(tokens: &[Token<'a>], i: usize) -> Option<(usize, &'a str)> {
    let mut j = i + 1;
    let mut skipped = 0;
    loop {
        let (Token::Gap(gap), Token::Word(next)) = (tokens.get(j)?, tokens.get(j + 1)?) else {
            return None;
        };
        if !gap.chars().all(char::is_whitespace) {
            return None;
        }
        if KNOWN_VERBS.contains(next) || IRREGULAR_VERBS.iter().any(|(plural, _)| plural == next) {
            return Some((j + 1, *next));
        }
        if skipped == MAX_SKIPPED_ADVERBS || !SKIPPABLE_ADVERBS.contains(next) {
            return None;
        }
        skipped += 1;
        j += 2;
    }
}

fn third_person(verb: &str) -> String {
    if let Some((_, singular)) = IRREGULAR_VERBS.iter().find(|(plural, _)| *plural == verb) {
        return (*singular).to_string();
    }

    let sibilant = ["s", "sh", "ch", "x", "z", "o"]
        .iter()
        .any(|ending| verb.ends_with(ending));
    if sibilant {
        return format!("{verb}es");
    }

    if let Some(stem) = verb.strip_suffix('y') {
        let vowel_before = stem.ends_with(['a', 'e', 'i', 'o', 'u']);
        if !vowel_before && !stem.is_empty() {
            return format!("{stem}ies");
        }
    }

    format!("{verb}s")
}

/// Capitalizes `replacement` when `original` starts with an uppercase letter.
fn match_case(original: &str, replacement: &str) -> String {
    if !original.chars().next().is_some_and(char::is_uppercase) {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
