use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Strips the '0x' prefix off of hex string so it can be deserialized.
///
/// # Arguments
///
/// * `s` - The hex str
pub fn strip_0x_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

/// A Hex String of length `N` representing bytes of length `N / 2`
#[derive(Clone)]
pub struct HexString<const N: usize>(String);

/// An hex string parsing error
#[derive(Error, Debug)]
pub enum HexStringError {
    /// String was expected to be of a different length
    #[error("Expected string of length {expected}, got {actual}")]
    InvalidStringLength {
        /// expected string length
        expected: usize,
        /// actual string length
        actual: usize,
    },
    /// Provided string was not hex
    #[error("The provided string is not hex")]
    NotHex,
}

impl<const N: usize> AsRef<str> for HexString<N> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Keys end up in here; never print the contents.
impl<const N: usize> std::fmt::Debug for HexString<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HexString<{N}>(..)")
    }
}

impl<const N: usize> HexString<N> {
    /// Instantiate a new HexString from any `AsRef<str>`. Tolerates 0x
    /// prefixing. A succesful instantiation will create an owned copy of the
    /// string.
    pub fn from_string<S: AsRef<str>>(candidate: S) -> Result<Self, HexStringError> {
        let s = strip_0x_prefix(candidate.as_ref());

        if s.len() != N {
            return Err(HexStringError::InvalidStringLength {
                actual: s.len(),
                expected: N,
            });
        }

        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexStringError::NotHex);
        }
        Ok(Self(s.to_owned()))
    }
}

impl<'de, const N: usize> Deserialize<'de> for HexString<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_string(s).map_err(serde::de::Error::custom)
    }
}
