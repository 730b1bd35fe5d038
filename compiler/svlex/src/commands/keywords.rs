//! The `keywords` command: list the reserved words of a language revision.

use sv_lexer::{Keyword, KeywordVersion};

/// Reserved words of `version`, sorted.
pub fn keyword_listing(version: KeywordVersion) -> Vec<&'static str> {
    let mut words: Vec<_> = Keyword::ALL
        .iter()
        .filter(|kw| Keyword::lookup(kw.as_str(), version) == Some(**kw))
        .map(|kw| kw.as_str())
        .collect();
    words.sort_unstable();
    words
}

/// Print the reserved words of `version`, one per line.
pub fn list_keywords(version: KeywordVersion) {
    let words = keyword_listing(version);
    println!("{} keywords in {version}:", words.len());
    for word in words {
        println!("  {word}");
    }
}
