//! C-like lexer
//!
//! One ordered regex scan. Alternatives are tried left to right, so
//! multi-character operators are listed before their single-character
//! prefixes (`+=` never splits into `+` `=`). Characters outside the pattern
//! are dropped silently, and comments are matched and then discarded.

use once_cell::sync::Lazy;
use regex::Regex;

static C_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"//[^\n]*",
        r"|/\*(?s:.*?)\*/",
        r"|[A-Za-z_][A-Za-z0-9_]*",
        r"|\d+",
        r"|==|!=|<=|>=|\+\+|--|\+=|-=|\*=|/=",
        r"|[-+*/=<>(){};,]",
    ))
    .expect("C token pattern is valid")
});

/// Split C-like source into lexemes borrowed from `source`.
///
/// Never fails; unknown characters are skipped.
pub fn tokenize(source: &str) -> Vec<&str> {
    C_TOKEN_RE
        .find_iter(source)
        .map(|m| m.as_str())
        .filter(|lexeme| !is_comment(lexeme))
        .collect()
}

fn is_comment(lexeme: &str) -> bool {
    lexeme.starts_with("//") || lexeme.starts_with("/*")
}
