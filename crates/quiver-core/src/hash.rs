//! Structural digests of values, used for de-duplication.

use blake3::Hasher;

use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    pub fn to_hex(&self) -> String {
        // blake3 hex(32b) is 64 hex chars
        let mut s = String::with_capacity(64);
        for b in &self.0 {
            use std::fmt::Write as _;
            let _ = write!(&mut s, "{:02x}", b);
        }
        s
    }
}

impl std::fmt::Display for Hash256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Digest of a value's canonical encoding.
///
/// Values that are `==` digest identically; in particular `Int(1)` and
/// `Float(1.0)` share a digest, and every NaN shares one.
pub fn hash_value(v: &Value) -> Hash256 {
    let mut h = Hasher::new();
    hash_into(v, &mut h);
    Hash256(h.finalize().into())
}

fn hash_into(v: &Value, hasher: &mut Hasher) {
    use Value::*;

    match v {
        Absent => {
            hasher.update(&[0]);
        }
        Null => {
            hasher.update(&[1]);
        }
        Bool(b) => {
            hasher.update(&[2, *b as u8]);
        }
        Int(i) => {
            hasher.update(&[3]);
            hasher.update(&i.to_le_bytes());
        }
        Float(f) => match Value::number(*f) {
            Int(i) => {
                hasher.update(&[3]);
                hasher.update(&i.to_le_bytes());
            }
            _ => {
                let bits = if f.is_nan() { f64::NAN.to_bits() } else { f.to_bits() };
                hasher.update(&[4]);
                hasher.update(&bits.to_le_bytes());
            }
        },
        Str(s) => {
            hasher.update(&[5]);
            update_len_prefixed(hasher, s.as_bytes());
        }
        List(items) => {
            hasher.update(&[6]);
            hasher.update(&(items.len() as u64).to_le_bytes());
            for item in items {
                hash_into(item, hasher);
            }
        }
        Map(m) => {
            hasher.update(&[7]);
            hasher.update(&(m.len() as u64).to_le_bytes());
            // Mapping equality ignores insertion order, so the digest must too.
            let mut entries: Vec<_> = m.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            for (k, item) in entries {
                update_len_prefixed(hasher, k.as_bytes());
                hash_into(item, hasher);
            }
        }
    }
}

fn update_len_prefixed(hasher: &mut Hasher, bytes: &[u8]) {
    hasher.update(&(bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
