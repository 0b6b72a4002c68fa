//! Lexical tables for vocabulary-sheet headings.
//!
//! Language-learning vocabulary sheets set their headwords at body size with
//! no bold or capitalization signal. These lines are recognized purely by
//! lexical shape: part-of-speech markers, known verbs, article phrases,
//! compound suffixes and so on. The tables are plain data so that another
//! language can be added by defining another [`VocabularyLexicon`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::language::Language;

/// Word lists and character classes describing one vocabulary language.
#[derive(Debug, Clone)]
pub struct VocabularyLexicon {
    /// Regex character-class body for lowercase letters of the language
    pub letters: &'static str,
    /// Literal part-of-speech markers, matched case-sensitively
    pub pos_markers: &'static [&'static str],
    /// Initials of part-of-speech markers following a single word
    pub pos_initials: &'static str,
    /// Verbs whose presence in a short phrase marks a headword
    pub verbs: &'static [&'static str],
    /// Articles and reflexives opening a headword phrase
    pub articles: &'static [&'static str],
    /// Separable prefixes allowed on the phrase's last word
    pub particles: &'static [&'static str],
    /// Compound-noun endings
    pub compound_suffixes: &'static [&'static str],
    /// Infinitive ending for `<verb> (v)` entries
    pub infinitive_suffix: &'static str,
    /// Characters specific to the language's orthography
    pub special_chars: &'static str,
    /// Short words that disqualify the special-character rule
    pub function_words: &'static [&'static str],
    /// Exact headwords and glosses seen on vocabulary sheets
    pub known_phrases: &'static [&'static str],
    /// English gloss fragments, only trusted for `gloss_languages`
    pub gloss_fragments: &'static [&'static str],
    /// Primary languages for which gloss fragments are trusted
    pub gloss_languages: &'static [Language],
}

/// German vocabulary sheets (clothing and textile vocabulary).
pub static GERMAN_LEXICON: VocabularyLexicon = VocabularyLexicon {
    letters: "a-zäöüß",
    pos_markers: &["(v)", "(n)", "(adj)", "(fem)", "(masc)"],
    pos_initials: "vna",
    verbs: &[
        "ausziehen",
        "anprobieren",
        "anziehen",
        "nähen",
        "stricken",
        "färben",
        "flicken",
        "zusammenpassen",
        "abstimmen",
        "waschen",
        "anpassen",
        "tragen",
        "kaufen",
        "verkaufen",
        "probieren",
        "passen",
        "stricknadel",
    ],
    articles: &["einen", "eine", "ein", "sich", "das", "die", "der"],
    particles: &["an", "zu", "mit"],
    compound_suffixes: &[
        "anzug", "kleid", "mütze", "haar", "socken", "schuhe", "hose", "nadel",
    ],
    infinitive_suffix: "en",
    special_chars: "äöüß",
    function_words: &["der", "die", "das", "ist", "sind", "hat", "haben"],
    known_phrases: &[
        "stricknadel",
        "knitting needle",
        "match your socks",
        "knit a hat",
        "put on clothes",
        "wash clothes",
        "sewing clothes",
        "dye one's hair",
        "take off",
        "match",
        "go with",
        "mend",
    ],
    gloss_fragments: &[
        "knitting needle",
        "match your",
        "knit a",
        "put on",
        "wash clothes",
        "sewing clothes",
        "dye one",
        "take off",
        "go with",
    ],
    gloss_languages: &[Language::German, Language::French],
};

const VERB_PHRASE_MAX_WORDS: usize = 4;
const SPECIAL_CHAR_MAX_WORDS: usize = 2;
const GLOSS_MAX_WORDS: usize = 3;

static GERMAN_MATCHER: Lazy<VocabularyMatcher> = Lazy::new(|| {
    VocabularyMatcher::new(&GERMAN_LEXICON).expect("German lexicon patterns are valid")
});

/// A lexicon with its patterns compiled.
#[derive(Debug, Clone)]
pub struct VocabularyMatcher {
    lexicon: &'static VocabularyLexicon,
    pos_word: Regex,
    article_phrase: Regex,
    compound: Regex,
    infinitive: Regex,
}

impl VocabularyMatcher {
    /// Compile the patterns of a lexicon.
    pub fn new(lexicon: &'static VocabularyLexicon) -> Result<Self> {
        let letters = lexicon.letters;
        let alternation = |words: &[&str]| {
            words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|")
        };

        let pos_word = Regex::new(&format!(
            r"^[{letters}]+ \([{}]",
            regex::escape(lexicon.pos_initials)
        ))?;
        let article_phrase = Regex::new(&format!(
            r"^(?:{}) [{letters}]+ (?:{})?[{letters}]*$",
            alternation(lexicon.articles),
            alternation(lexicon.particles)
        ))?;
        let compound = Regex::new(&format!(
            r"^[{letters}]+(?:{})",
            alternation(lexicon.compound_suffixes)
        ))?;
        let infinitive = Regex::new(&format!(
            r"^[{letters}]+{} \(v\)$",
            regex::escape(lexicon.infinitive_suffix)
        ))?;

        Ok(Self {
            lexicon,
            pos_word,
            article_phrase,
            compound,
            infinitive,
        })
    }

    /// The built-in German matcher.
    pub fn german() -> Self {
        GERMAN_MATCHER.clone()
    }

    /// Check if a line has the lexical shape of a vocabulary headword.
    ///
    /// Length and font-size gating is the caller's concern.
    pub fn matches(&self, text: &str, primary: Language) -> bool {
        let lex = self.lexicon;
        let lowered = text.to_lowercase();
        let words = text.split_whitespace().count();

        lex.pos_markers.iter().any(|m| text.contains(m))
            || self.pos_word.is_match(&lowered)
            || (words <= VERB_PHRASE_MAX_WORDS
                && lex.verbs.iter().any(|v| lowered.contains(v)))
            || self.article_phrase.is_match(&lowered)
            || self.compound.is_match(&lowered)
            || self.infinitive.is_match(&lowered)
            || (words <= SPECIAL_CHAR_MAX_WORDS
                && lowered.chars().any(|c| lex.special_chars.contains(c))
                && !lex.function_words.iter().any(|w| lowered.contains(w)))
            || lex.known_phrases.contains(&lowered.as_str())
            || (lex.gloss_languages.contains(&primary)
                && words <= GLOSS_MAX_WORDS
                && lex.gloss_fragments.iter().any(|g| lowered.contains(g)))
    }
}
