//! Character policies a trie can enforce on inserted words

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which characters a trie accepts in inserted words
///
/// Matching is always case-sensitive and `char`-exact; no normalization is
/// applied under any policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// Any Unicode scalar value
    #[default]
    Unrestricted,
    /// `a-z` and `A-Z`
    AsciiAlphabetic,
    /// `a-z` only
    AsciiLowercase,
}

impl Alphabet {
    /// Check whether `ch` belongs to this alphabet
    pub fn allows(&self, ch: char) -> bool {
        match self {
            Alphabet::Unrestricted => true,
            Alphabet::AsciiAlphabetic => ch.is_ascii_alphabetic(),
            Alphabet::AsciiLowercase => ch.is_ascii_lowercase(),
        }
    }

    /// True if every word `other` accepts is also accepted by `self`
    pub fn covers(&self, other: Alphabet) -> bool {
        match (self, other) {
            (Alphabet::Unrestricted, _) => true,
            (Alphabet::AsciiAlphabetic, Alphabet::Unrestricted) => false,
            (Alphabet::AsciiAlphabetic, _) => true,
            (Alphabet::AsciiLowercase, narrower) => narrower == Alphabet::AsciiLowercase,
        }
    }

    /// Validate a whole word, reporting the first offending character
    pub fn check(&self, word: &str) -> Result<()> {
        if let Some((pos, ch)) = word.char_indices().find(|(_, ch)| !self.allows(*ch)) {
            return Err(Error::MalformedInput {
                word: word.to_string(),
                reason: format!("character {:?} at byte {} is outside {}", ch, pos, self),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Alphabet::Unrestricted => "unrestricted",
            Alphabet::AsciiAlphabetic => "ascii_alphabetic",
            Alphabet::AsciiLowercase => "ascii_lowercase",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unrestricted" => Ok(Alphabet::Unrestricted),
            "ascii_alphabetic" => Ok(Alphabet::AsciiAlphabetic),
            "ascii_lowercase" => Ok(Alphabet::AsciiLowercase),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown alphabet '{}'",
                other
            ))),
        }
    }
}
