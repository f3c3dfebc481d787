//! Reversible public identifier codec.
//!
//! Maps store-assigned numeric row ids to short, opaque, URL-safe strings so
//! sequential ids are never exposed to clients. The mapping is a salted
//! obfuscation, not a cryptographic one: it hides row ordering, it does not
//! authenticate anything.
//!
//! The scheme is fully determined by the configured salt and minimum length,
//! so encodings are stable across process restarts. Decoding verifies the
//! candidate id by re-encoding it; anything that does not round-trip exactly
//! (malformed input, an identifier minted under a different salt, overflow)
//! is rejected.

use thiserror::Error;

/// Characters used for identifiers. Guard characters for padding are carved
/// out of this set per salt, the rest form the digit alphabet.
const BASE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters reserved as padding guards.
const GUARD_COUNT: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The input string does not decode to any id under the configured salt.
    #[error("invalid public identifier")]
    InvalidIdentifier,
}

/// Salted, reversible integer-to-string codec.
///
/// Cheap to clone; handlers and services hold it by value.
#[derive(Debug, Clone)]
pub struct IdCodec {
    salt: Vec<u8>,
    min_length: usize,
    /// Digit alphabet, already shuffled by the salt.
    alphabet: Vec<u8>,
    /// Padding characters, disjoint from the digit alphabet.
    guards: Vec<u8>,
}

impl IdCodec {
    /// Creates a codec from the configured salt and minimum output length.
    pub fn new(salt: &str, min_length: usize) -> Self {
        let shuffled = consistent_shuffle(BASE_ALPHABET.to_vec(), salt.as_bytes());
        let (guards, alphabet) = shuffled.split_at(GUARD_COUNT);

        Self {
            salt: salt.as_bytes().to_vec(),
            min_length,
            alphabet: alphabet.to_vec(),
            guards: guards.to_vec(),
        }
    }

    /// Encodes a store-assigned (positive) row id into its public identifier.
    ///
    /// Encoding is deterministic: the same id always yields the same string.
    pub fn encode(&self, id: i64) -> String {
        let n = id.unsigned_abs();
        let base = self.alphabet.len() as u64;

        let lottery = self.alphabet[(n % base) as usize];
        let enc = self.keyed_alphabet(lottery);

        let mut out = vec![lottery];
        let digit_start = out.len();
        let mut m = n;
        loop {
            out.insert(digit_start, enc[(m % base) as usize]);
            m /= base;
            if m == 0 {
                break;
            }
        }

        if out.len() < self.min_length {
            let g = self.guards[(n as usize).wrapping_add(out[0] as usize) % self.guards.len()];
            out.insert(0, g);

            if out.len() < self.min_length {
                let last = out[out.len() - 1];
                let g = self.guards[(n as usize).wrapping_add(last as usize) % self.guards.len()];
                out.push(g);
            }
        }

        // Wrap with shuffled alphabet halves until long enough, keeping the
        // guarded core centered so the excess can be trimmed symmetrically.
        let half = enc.len() / 2;
        let mut alpha = enc;
        while out.len() < self.min_length {
            let key = alpha.clone();
            alpha = consistent_shuffle(alpha, &key);

            let mut padded = Vec::with_capacity(alpha.len() + out.len());
            padded.extend_from_slice(&alpha[half..]);
            padded.extend_from_slice(&out);
            padded.extend_from_slice(&alpha[..half]);
            out = padded;

            if out.len() > self.min_length {
                let start = (out.len() - self.min_length) / 2;
                out = out[start..start + self.min_length].to_vec();
            }
        }

        String::from_utf8(out).expect("alphabet is ASCII")
    }

    /// Decodes a public identifier back to its numeric row id.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidIdentifier`] when the string was not
    /// produced by [`encode`](Self::encode) under this codec's salt.
    pub fn decode(&self, public_id: &str) -> Result<i64, CodecError> {
        let bytes = public_id.as_bytes();

        let segments: Vec<&[u8]> = bytes
            .split(|b| self.guards.contains(b))
            .collect();
        let core = match segments.len() {
            1 => segments[0],
            2 | 3 => segments[1],
            _ => return Err(CodecError::InvalidIdentifier),
        };

        let (&lottery, digits) = core.split_first().ok_or(CodecError::InvalidIdentifier)?;
        if digits.is_empty() {
            return Err(CodecError::InvalidIdentifier);
        }

        let enc = self.keyed_alphabet(lottery);
        let base = enc.len() as u128;

        let mut n: u128 = 0;
        for &d in digits {
            let pos = enc
                .iter()
                .position(|&c| c == d)
                .ok_or(CodecError::InvalidIdentifier)? as u128;
            n = n
                .checked_mul(base)
                .and_then(|v| v.checked_add(pos))
                .ok_or(CodecError::InvalidIdentifier)?;
        }

        let id = i64::try_from(n).map_err(|_| CodecError::InvalidIdentifier)?;
        if id < 1 || self.encode(id) != public_id {
            return Err(CodecError::InvalidIdentifier);
        }

        Ok(id)
    }

    /// Derives the per-identifier digit alphabet from the lottery character
    /// and the salt.
    fn keyed_alphabet(&self, lottery: u8) -> Vec<u8> {
        let mut key = Vec::with_capacity(self.alphabet.len());
        key.push(lottery);
        key.extend_from_slice(&self.salt);
        key.extend_from_slice(&self.alphabet);
        key.truncate(self.alphabet.len());

        consistent_shuffle(self.alphabet.clone(), &key)
    }
}

/// Deterministic salt-driven shuffle. The same buffer and salt always produce
/// the same permutation.
fn consistent_shuffle(mut buf: Vec<u8>, salt: &[u8]) -> Vec<u8> {
    if salt.is_empty() {
        return buf;
    }

    let mut v = 0usize;
    let mut p = 0usize;
    for i in (1..buf.len()).rev() {
        v %= salt.len();
        let t = salt[v] as usize;
        p += t;
        let j = (t + v + p) % i;
        buf.swap(i, j);
        v += 1;
    }

    buf
}
