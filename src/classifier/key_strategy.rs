use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::rules::names::collapse_separators;

/// Trailing key token that stands alone as a word.
static SEPARATED_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:(?:^|[_\s])(id|sk))$").expect("valid key regex"));

/// Trailing key letters, wherever the word boundary falls.
static LOOSE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:(id|sk))$").expect("valid key regex"));

/// The trailing token that marks a key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySuffix {
    /// `ID`: natural or surrogate identifier.
    Id,
    /// `SK`: surrogate key.
    Sk,
}

impl KeySuffix {
    /// Canonical uppercase spelling of the token.
    pub fn as_str(self) -> &'static str {
        match self {
            KeySuffix::Id => "ID",
            KeySuffix::Sk => "SK",
        }
    }

    /// Parse a two-letter token, ignoring ASCII case.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("id") {
            Some(KeySuffix::Id)
        } else if token.eq_ignore_ascii_case("sk") {
            Some(KeySuffix::Sk)
        } else {
            None
        }
    }
}

impl fmt::Display for KeySuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a column name is matched against the trailing `ID`/`SK` convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyMatchStrategy {
    /// Token must be a whole word: the entire name, or preceded by `_` or
    /// whitespace. `order_id` and `ID` match; `paid` and `CustomerID` do not.
    #[default]
    SeparatorAware,
    /// Any name whose uppercased form ends with `ID` or `SK`.
    /// `paid`, `risk`, and `CustomerID` all match.
    LooseSuffix,
}

impl KeyMatchStrategy {
    /// Detect the key token of a column name under this strategy.
    ///
    /// Matching runs on the separator-collapsed, lowercased name, so leading
    /// or trailing underscores and case mappings that fold to ASCII (the
    /// Kelvin sign `K`) give the same answer before and after normalization.
    pub fn detect(self, name: &str) -> Option<KeySuffix> {
        let collapsed = collapse_separators(name).to_lowercase();
        let re = match self {
            KeyMatchStrategy::SeparatorAware => &*SEPARATED_KEY_RE,
            KeyMatchStrategy::LooseSuffix => &*LOOSE_KEY_RE,
        };
        re.captures(&collapsed)
            .and_then(|caps| caps.get(1))
            .and_then(|token| KeySuffix::from_token(token.as_str()))
    }
}

impl fmt::Display for KeyMatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMatchStrategy::SeparatorAware => write!(f, "separator-aware"),
            KeyMatchStrategy::LooseSuffix => write!(f, "loose-suffix"),
        }
    }
}

impl std::str::FromStr for KeyMatchStrategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "separator-aware" | "separator" => Ok(KeyMatchStrategy::SeparatorAware),
            "loose-suffix" | "loose" => Ok(KeyMatchStrategy::LooseSuffix),
            _ => Err(format!("Invalid key strategy: {s}")),
        }
    }
}
