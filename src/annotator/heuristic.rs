//! Rule-based annotator: tokenizer, sentence splitter, lemmatizer and tagger.
//!
//! Lemmas are only normalized for words the crate's vocabularies know about
//! (action verbs, common verbs, skill keywords); any other word keeps its
//! lowercased surface form. That is all the checks need.

use super::{is_like_num, AnnotatedDocument, Annotator, PartOfSpeech, Sentence, Token};
use crate::lexicon::{is_verb_lemma, ACTION_VERBS, COMMON_VERBS, TECH_SKILL_WORDS};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

static IRREGULAR_FORMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
        ("been", "be"), ("being", "be"), ("has", "have"), ("had", "have"), ("did", "do"),
        ("does", "do"), ("done", "do"), ("began", "begin"), ("begun", "begin"),
        ("became", "become"), ("brought", "bring"), ("built", "build"), ("bought", "buy"),
        ("chose", "choose"), ("chosen", "choose"), ("came", "come"), ("dealt", "deal"),
        ("drove", "drive"), ("driven", "drive"), ("fell", "fall"), ("felt", "feel"),
        ("found", "find"), ("flew", "fly"), ("flown", "fly"), ("got", "get"),
        ("gotten", "get"), ("gave", "give"), ("given", "give"), ("went", "go"), ("gone", "go"),
        ("grew", "grow"), ("grown", "grow"), ("heard", "hear"), ("held", "hold"),
        ("kept", "keep"), ("knew", "know"), ("known", "know"), ("led", "lead"), ("left", "leave"),
        ("lost", "lose"), ("made", "make"), ("meant", "mean"), ("met", "meet"),
        ("overcame", "overcome"), ("oversaw", "oversee"), ("overseen", "oversee"),
        ("paid", "pay"), ("ran", "run"), ("rebuilt", "rebuild"), ("rose", "rise"),
        ("risen", "rise"), ("said", "say"), ("saw", "see"), ("seen", "see"), ("sent", "send"),
        ("shrank", "shrink"), ("shrunk", "shrink"), ("sold", "sell"), ("sought", "seek"),
        ("spent", "spend"), ("spoke", "speak"), ("spoken", "speak"), ("stood", "stand"),
        ("took", "take"), ("taken", "take"), ("taught", "teach"), ("told", "tell"),
        ("thought", "think"), ("troubleshot", "troubleshoot"), ("understood", "understand"),
        ("undertook", "undertake"), ("undertaken", "undertake"), ("underwrote", "underwrite"),
        ("underwritten", "underwrite"), ("upheld", "uphold"), ("won", "win"),
        ("wrote", "write"), ("written", "write"),
    ]
    .into_iter()
    .collect()
});

static PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
        "which", "what", "mine", "yours", "ours", "theirs",
    ]
    .into_iter()
    .collect()
});

/// Words after which a verb form is a finite verb: "he manages", "teams that ship"
static SUBJECTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["i", "we", "you", "he", "she", "it", "they", "who", "that", "which"]
        .into_iter()
        .collect()
});

static DETERMINERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "its", "our",
        "their", "each", "every", "some", "any", "no", "all", "both", "another", "such",
    ]
    .into_iter()
    .collect()
});

static ADPOSITIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "onto", "over",
        "under", "about", "across", "after", "before", "between", "through", "during",
        "within", "without", "via", "per", "among", "around", "against", "toward", "towards",
        "upon", "since", "until",
    ]
    .into_iter()
    .collect()
});

static CONJUNCTIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["and", "or", "but", "nor", "yet", "so", "&"].into_iter().collect());

static AUXILIARIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
        "must",
    ]
    .into_iter()
    .collect()
});

const SYMBOLS: &[&str] = &["$", "€", "£", "%", "+", "#", "&", "@", "/"];

/// Built-in [`Annotator`] based on word lists and suffix rules
#[derive(Debug, Clone, Default)]
pub struct HeuristicAnnotator;

impl HeuristicAnnotator {
    pub fn new() -> Self {
        Self
    }

    /// Dictionary form of a single word (lowercased)
    pub fn lemmatize(word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some(base) = IRREGULAR_FORMS.get(lower.as_str()) {
            return (*base).to_string();
        }
        if is_known(&lower) {
            return lower;
        }
        inflection_candidates(&lower)
            .into_iter()
            .find(|candidate| is_known(candidate))
            .unwrap_or(lower)
    }
}

impl Annotator for HeuristicAnnotator {
    fn annotate(&self, text: &str) -> AnnotatedDocument {
        let raw = tokenize(text);
        let sentences = split_sentences(&raw);
        let mut tokens = Vec::with_capacity(raw.len());

        for sentence in &sentences {
            for i in sentence.range() {
                let previous = (i > sentence.start).then(|| raw[i - 1].text.to_lowercase());
                let next = (i + 1 < sentence.end).then(|| raw[i + 1].text.as_str());
                let context = Context {
                    previous: previous.as_deref(),
                    next,
                };
                let lemma = Self::lemmatize(&raw[i].text);
                let pos = tag(&raw[i].text, &lemma, &context);
                tokens.push(Token::new(raw[i].text.clone(), pos, lemma));
            }
        }

        AnnotatedDocument::new(tokens, sentences)
    }
}

/// Sentences end at terminal punctuation and at line breaks
fn split_sentences(raw: &[RawToken]) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (i, token) in raw.iter().enumerate() {
        if token.starts_line && i > start {
            sentences.push(Sentence { start, end: i });
            start = i;
        }
        if matches!(token.text.as_str(), "." | "!" | "?" | "…") {
            sentences.push(Sentence { start, end: i + 1 });
            start = i + 1;
        }
    }
    if start < raw.len() {
        sentences.push(Sentence {
            start,
            end: raw.len(),
        });
    }
    sentences
}

/// Words already in dictionary form
fn is_known(word: &str) -> bool {
    ACTION_VERBS.contains(word) || COMMON_VERBS.contains(word) || TECH_SKILL_WORDS.contains(word)
}

/// Candidate base forms for an inflected word, most likely first
fn inflection_candidates(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(stem) = word.strip_suffix("ied") {
        out.push(format!("{}y", stem));
    }
    if let Some(stem) = word.strip_suffix("ed") {
        out.push(format!("{}e", stem));
        out.push(stem.to_string());
        if let Some(single) = undouble(stem) {
            out.push(single);
        }
    }
    if let Some(stem) = word.strip_suffix("ing") {
        out.push(stem.to_string());
        out.push(format!("{}e", stem));
        if let Some(single) = undouble(stem) {
            out.push(single);
        }
    }
    if let Some(stem) = word.strip_suffix("ies") {
        out.push(format!("{}y", stem));
    }
    if let Some(stem) = word.strip_suffix("es") {
        out.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        if !stem.ends_with('s') {
            out.push(stem.to_string());
        }
    }
    out.retain(|c| c.chars().count() >= 2);
    out
}

/// "plann" -> "plan", "debugg" -> "debug"
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let prev = chars.next()?;
    if last == prev && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 'l' | 's') {
        let mut single = stem.to_string();
        single.pop();
        Some(single)
    } else {
        None
    }
}

/// Neighbouring tokens within the same sentence
struct Context<'a> {
    /// Lowercased
    previous: Option<&'a str>,
    next: Option<&'a str>,
}

impl Context<'_> {
    /// First word of a sentence, or the first after a bullet, comma, colon or bar
    fn clause_start(&self) -> bool {
        self.previous.map(is_punctuation).unwrap_or(true)
    }

    /// The next token can begin an object: "the", "3", "pipelines"; not "," or "Lead"
    fn object_follows(&self) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        let lower = next.to_lowercase();
        if CONJUNCTIONS.contains(lower.as_str()) {
            return false;
        }
        DETERMINERS.contains(lower.as_str())
            || PRONOUNS.contains(lower.as_str())
            || is_like_num(next)
            || next.chars().next().map(char::is_lowercase).unwrap_or(false)
    }
}

fn is_punctuation(text: &str) -> bool {
    text.chars().all(|c| !c.is_alphanumeric())
}

fn follows(previous: Option<&str>, set: &HashSet<&'static str>) -> bool {
    previous.map(|p| set.contains(p)).unwrap_or(false)
}

/// Part of speech for a word whose lemma is a known verb.
///
/// The bare lemma alone is not enough: "Design", "Projects" and "Testing"
/// are headings and skills as often as they are verbs.
fn tag_verb_lemma(lower: &str, lemma: &str, context: &Context<'_>) -> PartOfSpeech {
    let previous = context.previous;

    if follows(previous, &SUBJECTS) {
        return PartOfSpeech::Verb;
    }
    if follows(previous, &DETERMINERS) {
        return if lower.ends_with("ed") {
            PartOfSpeech::Adj
        } else {
            PartOfSpeech::Noun
        };
    }
    if previous == Some("to") || follows(previous, &AUXILIARIES) {
        return PartOfSpeech::Verb;
    }
    if follows(previous, &ADPOSITIONS) {
        return PartOfSpeech::Noun;
    }

    let inflected = lower != lemma;
    if inflected && (lower.ends_with("ed") || IRREGULAR_FORMS.contains_key(lower)) {
        return PartOfSpeech::Verb;
    }
    if inflected && lower.ends_with("ing") {
        return if context.object_follows() {
            PartOfSpeech::Verb
        } else {
            PartOfSpeech::Noun
        };
    }
    if inflected {
        // Plural nouns: "Projects", "awards"
        return PartOfSpeech::Noun;
    }
    if context.clause_start() && context.object_follows() {
        return PartOfSpeech::Verb;
    }
    PartOfSpeech::Noun
}

fn tag(text: &str, lemma: &str, context: &Context<'_>) -> PartOfSpeech {
    if SYMBOLS.contains(&text) {
        return PartOfSpeech::Sym;
    }
    if text.chars().all(|c| !c.is_alphanumeric()) {
        return PartOfSpeech::Punct;
    }
    if is_like_num(text) {
        return PartOfSpeech::Num;
    }
    let lower = text.to_lowercase();
    let lower = lower.as_str();
    if AUXILIARIES.contains(lower) {
        return PartOfSpeech::Aux;
    }
    if DETERMINERS.contains(lower) {
        return PartOfSpeech::Det;
    }
    if PRONOUNS.contains(lower) {
        return PartOfSpeech::Pron;
    }
    if ADPOSITIONS.contains(lower) {
        return PartOfSpeech::Adp;
    }
    if CONJUNCTIONS.contains(lower) {
        return PartOfSpeech::Cconj;
    }

    // "5 engineers", "three reports"
    let counted_plural = lower.ends_with('s')
        && lower != lemma
        && context.previous.map(is_like_num).unwrap_or(false);
    if counted_plural {
        return PartOfSpeech::Noun;
    }
    // Titles, employers and headings inside a line: "Senior Software Engineer"
    if !context.clause_start() && text.chars().next().map(char::is_uppercase).unwrap_or(false) {
        return PartOfSpeech::Propn;
    }
    if is_verb_lemma(lemma) {
        return tag_verb_lemma(lower, lemma, context);
    }
    if lower.len() > 4 && lower.ends_with("ly") {
        return PartOfSpeech::Adv;
    }
    let after_determiner = follows(context.previous, &DETERMINERS);
    if !after_determiner && (lower.ends_with("ed") || lower.ends_with("ing")) && lower.len() > 5 {
        return PartOfSpeech::Verb;
    }
    PartOfSpeech::Noun
}

#[derive(Debug)]
struct RawToken {
    text: String,
    /// First token after a line break
    starts_line: bool,
}

/// Split text into word, number and single-character punctuation tokens.
///
/// Apostrophes, hyphens and periods stay inside a word when both neighbours
/// are alphanumeric ("I'm", "full-stack", "node.js", "3.5"); commas only
/// between digits ("1,200").
fn tokenize(text: &str) -> Vec<RawToken> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut starts_line = false;
    let mut pending_line_break = false;

    let flush = |current: &mut String, tokens: &mut Vec<RawToken>, starts_line: &mut bool| {
        if !current.is_empty() {
            tokens.push(RawToken {
                text: std::mem::take(current),
                starts_line: *starts_line,
            });
            *starts_line = false;
        }
    };

    for (i, &c) in chars.iter().enumerate() {
        if c.is_whitespace() {
            flush(&mut current, &mut tokens, &mut starts_line);
            if c == '\n' {
                pending_line_break = true;
            }
            continue;
        }
        if current.is_empty() && pending_line_break {
            starts_line = !tokens.is_empty();
            pending_line_break = false;
        }
        if c.is_alphanumeric() {
            current.push(c);
            continue;
        }
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let joins = match c {
            '\'' | '’' | '-' | '.' => {
                !current.is_empty()
                    && prev.map(char::is_alphanumeric).unwrap_or(false)
                    && next.map(char::is_alphanumeric).unwrap_or(false)
            }
            ',' => {
                !current.is_empty()
                    && prev.map(|p| p.is_ascii_digit()).unwrap_or(false)
                    && next.map(|n| n.is_ascii_digit()).unwrap_or(false)
            }
            _ => false,
        };
        if joins {
            current.push(c);
            continue;
        }
        flush(&mut current, &mut tokens, &mut starts_line);
        current.push(c);
        flush(&mut current, &mut tokens, &mut starts_line);
    }
    flush(&mut current, &mut tokens, &mut starts_line);
    tokens
}
