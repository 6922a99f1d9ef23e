pub mod casing;
pub mod comparison;
pub mod similarity;
pub mod validator;

pub use casing::*;
pub use comparison::*;
pub use similarity::*;
pub use validator::*;

/// Locale policy for what may appear inside a person name
#[derive(Debug, Clone)]
pub struct NameRules {
    /// Lowercase words allowed between name fragments without breaking a merge
    pub linking_words: Vec<String>,
    /// Lowercase honorific titles, stripped for comparison and rejected stand-alone
    pub titles: Vec<String>,
    /// Maximum whitespace-separated tokens in a plausible name
    pub max_tokens: usize,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            linking_words: vec![
                "de".to_string(),
                "da".to_string(),
                "do".to_string(),
                "dos".to_string(),
                "das".to_string(),
                "e".to_string(),
            ],
            titles: vec![
                "sr".to_string(),
                "sra".to_string(),
                "srs".to_string(),
                "sras".to_string(),
                "dr".to_string(),
                "dra".to_string(),
                "presidente".to_string(),
                "deputado".to_string(),
                "deputada".to_string(),
                "senador".to_string(),
                "senadora".to_string(),
                "relator".to_string(),
                "relatora".to_string(),
                "ministro".to_string(),
                "ministra".to_string(),
            ],
            max_tokens: 7,
        }
    }
}

impl NameRules {
    /// Whether a lowercase word is a linking word ("de", "da", ...)
    pub fn is_linking_word(&self, word: &str) -> bool {
        self.linking_words.iter().any(|w| w == word)
    }

    /// Whether a lowercase word is an honorific title.
    ///
    /// A trailing period is tolerated so "sr." and "sr" both match.
    pub fn is_title(&self, word: &str) -> bool {
        let bare = word.trim_end_matches('.');
        !bare.is_empty() && self.titles.iter().any(|t| t == bare)
    }
}
