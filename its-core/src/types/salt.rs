use std::fmt::{Debug, Display, Formatter};

use rand::RngCore;
use serde::{Serialize, Serializer};

use crate::H256;

/// 32 bytes seeding the deterministic address of a token manager. A fresh
/// salt must be drawn for every deployment; reusing one collides with the
/// registration made by the previous run.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Salt([u8; Salt::LEN]);

impl Salt {
    /// Size of a salt in bytes
    pub const LEN: usize = 32;

    /// Draw a salt from the thread-local CSPRNG.
    pub fn random() -> Self {
        let mut bytes = [0u8; Self::LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Wrap raw bytes
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Raw bytes, as passed to the `bytes32 salt` contract arguments
    pub fn to_fixed_bytes(self) -> [u8; Self::LEN] {
        self.0
    }
}

impl From<Salt> for H256 {
    fn from(salt: Salt) -> Self {
        H256(salt.0)
    }
}

impl From<H256> for Salt {
    fn from(h: H256) -> Self {
        Self(h.0)
    }
}

impl Display for Salt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Debug for Salt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Salt({self})")
    }
}

impl Serialize for Salt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn random_salts_are_distinct() {
        let salts: HashSet<Salt> = (0..256).map(|_| Salt::random()).collect();
        assert_eq!(salts.len(), 256);
    }

    #[test]
    fn displays_as_prefixed_hex() {
        let salt = Salt::from_bytes([0x01; 32]);
        let shown = salt.to_string();
        assert_eq!(shown.len(), 2 + 64);
        assert_eq!(shown, format!("0x{}", "01".repeat(32)));
        assert_eq!(
            serde_json::to_string(&salt).unwrap(),
            format!("\"{shown}\"")
        );
    }

    #[test]
    fn converts_to_bytes32() {
        let salt = Salt::from_bytes([0x5a; 32]);
        assert_eq!(H256::from(salt), H256::repeat_byte(0x5a));
        assert_eq!(Salt::from(H256::from(salt)), salt);
        assert_eq!(salt.to_fixed_bytes().len(), Salt::LEN);
    }
}
