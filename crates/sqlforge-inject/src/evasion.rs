//! Keyword-obfuscation evasion.
//!
//! An [`InjectionStyle`] renders keywords like any other style, except that
//! either of two toggles can mutate the emitted token: swap-casing a random
//! contiguous run of characters, or splicing an inline `/**/` comment at a
//! random internal position. Both preserve SQL-parser validity while breaking
//! naive substring matching. Output under an enabled toggle is intentionally
//! nondeterministic.

use rand::RngExt;

use sqlforge_core::dialect::Dialect;
use sqlforge_core::style::{CommonStyle, Style};

/// The inline comment marker spliced into keywords.
const COMMENT: &str = "/**/";

/// A style variant carrying the two keyword evasion toggles.
#[derive(Debug, Clone, Default)]
pub struct InjectionStyle {
    inner: CommonStyle,
    comment_evasion: bool,
    swapcase_evasion: bool,
}

impl InjectionStyle {
    /// Creates an injection style over the default common style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an injection style over an existing style.
    #[must_use]
    pub fn over(inner: CommonStyle) -> Self {
        Self {
            inner,
            comment_evasion: false,
            swapcase_evasion: false,
        }
    }

    /// Enables or disables comment splicing.
    #[must_use]
    pub const fn with_comment_evasion(mut self, enabled: bool) -> Self {
        self.comment_evasion = enabled;
        self
    }

    /// Enables or disables case randomization.
    #[must_use]
    pub const fn with_swapcase_evasion(mut self, enabled: bool) -> Self {
        self.swapcase_evasion = enabled;
        self
    }
}

impl Style for InjectionStyle {
    fn dialect(&self) -> &dyn Dialect {
        self.inner.dialect()
    }

    fn multiline(&self) -> bool {
        Style::multiline(&self.inner)
    }

    fn lowercase(&self) -> bool {
        Style::lowercase(&self.inner)
    }

    fn keyword(&self, word: &str) -> String {
        let mut word = self.inner.keyword(word);
        let mut rng = rand::rng();
        if self.swapcase_evasion {
            word = swap_case_run(&word, &mut rng);
        }
        if self.comment_evasion {
            word = splice_comment(&word, &mut rng);
        }
        word
    }
}

/// Swap-cases a randomly chosen contiguous run of characters.
fn swap_case_run<R: RngExt>(word: &str, rng: &mut R) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let start = rng.random_range(0..chars.len());
    let end = rng.random_range(start..chars.len()) + 1;
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i >= start && i < end {
                flip_case(*c)
            } else {
                *c
            }
        })
        .collect()
}

/// Splices `/**/` at a random internal position, never at the start and never
/// after the last character.
fn splice_comment<R: RngExt>(word: &str, rng: &mut R) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return word.into();
    }
    let pos = rng.random_range(1..chars.len());
    let mut out = String::with_capacity(word.len() + COMMENT.len());
    out.extend(&chars[..pos]);
    out.push_str(COMMENT);
    out.extend(&chars[pos..]);
    out
}

const fn flip_case(c: char) -> char {
    if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else {
        c.to_ascii_uppercase()
    }
}
