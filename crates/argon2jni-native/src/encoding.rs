//! `$argon2<type>$v=<version>$m=<m>,t=<t>,p=<p>$<salt>$<hash>`
//!
//! Salt and hash are unpadded standard base64. Decoding accepts a missing
//! `$v=` segment, which denotes version 0x10.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use thiserror::Error;

use argon2jni_core::identity::{resolve_version, AlgorithmIdentity, Variant, Version};
use argon2jni_core::params::SecurityParameters;
use argon2jni_core::primitive::Status;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum DecodeError {
    #[error("expected `{0}`")]
    Expected(&'static str),
    #[error("malformed decimal field")]
    Decimal,
    #[error("malformed base64 field")]
    Base64,
    #[error("unsupported version {0}")]
    Version(u32),
    #[error("trailing bytes after hash")]
    Trailing,
}

impl DecodeError {
    pub(crate) fn status(&self) -> Status {
        match self {
            DecodeError::Version(_) => Status::INCORRECT_TYPE,
            _ => Status::DECODING_FAIL,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Decoded {
    pub identity: AlgorithmIdentity,
    pub costs: SecurityParameters,
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

pub(crate) fn encode(identity: AlgorithmIdentity, costs: &SecurityParameters, salt: &[u8], hash: &[u8]) -> String {
    format!(
        "${}$v={}$m={},t={},p={}${}${}",
        identity.variant.name(),
        identity.version.number(),
        costs.m_cost,
        costs.t_cost,
        costs.parallelism,
        STANDARD_NO_PAD.encode(salt),
        STANDARD_NO_PAD.encode(hash),
    )
}

/// Parses an encoded hash that must carry `variant`'s prefix.
pub(crate) fn decode(encoded: &str, variant: Variant) -> Result<Decoded, DecodeError> {
    let mut cursor = Cursor { rest: encoded };

    cursor.literal("$")?;
    cursor.literal(variant.name())?;

    let version = if cursor.optional("$v=") {
        let number = cursor.decimal()?;
        let id = i32::try_from(number).map_err(|_| DecodeError::Version(number))?;
        resolve_version(id).ok_or(DecodeError::Version(number))?
    } else {
        Version::V10
    };

    cursor.literal("$m=")?;
    let m_cost = cursor.decimal()?;
    cursor.literal(",t=")?;
    let t_cost = cursor.decimal()?;
    cursor.literal(",p=")?;
    let parallelism = cursor.decimal()?;

    cursor.literal("$")?;
    let salt = cursor.base64()?;
    cursor.literal("$")?;
    let hash = cursor.base64()?;

    if !cursor.rest.is_empty() {
        return Err(DecodeError::Trailing);
    }

    Ok(Decoded {
        identity: AlgorithmIdentity::new(variant, version),
        costs: SecurityParameters::new(t_cost, m_cost, parallelism),
        salt,
        hash,
    })
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn literal(&mut self, expected: &'static str) -> Result<(), DecodeError> {
        if self.optional(expected) {
            Ok(())
        } else {
            Err(DecodeError::Expected(expected))
        }
    }

    fn optional(&mut self, expected: &str) -> bool {
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn take_while(&mut self, accept: impl Fn(u8) -> bool) -> &'a str {
        let end = self.rest.bytes().position(|b| !accept(b)).unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        head
    }

    /// Unsigned 32-bit decimal; no sign, no leading zeros.
    fn decimal(&mut self) -> Result<u32, DecodeError> {
        let digits = self.take_while(|b| b.is_ascii_digit());
        if digits.is_empty() || (digits.len() > 1 && digits.starts_with('0')) {
            return Err(DecodeError::Decimal);
        }
        digits.parse().map_err(|_| DecodeError::Decimal)
    }

    fn base64(&mut self) -> Result<Vec<u8>, DecodeError> {
        let text = self.take_while(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/');
        STANDARD_NO_PAD.decode(text).map_err(|_| DecodeError::Base64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID_13: AlgorithmIdentity = AlgorithmIdentity::new(Variant::Id, Version::V13);

    #[test]
    fn encodes_fields_in_order() {
        let costs = SecurityParameters::new(2, 65536, 1);
        let text = encode(ID_13, &costs, b"somesalt", &[0u8; 4]);
        assert_eq!(text, "$argon2id$v=19$m=65536,t=2,p=1$c29tZXNhbHQ$AAAAAA");
    }

    #[test]
    fn decodes_what_it_encodes() {
        let costs = SecurityParameters::new(3, 4096, 2);
        let text = encode(ID_13, &costs, b"0123456789abcdef", &[7u8; 16]);
        let decoded = decode(&text, Variant::Id).unwrap();
        assert_eq!(decoded.identity, ID_13);
        assert_eq!(decoded.costs, costs);
        assert_eq!(decoded.salt, b"0123456789abcdef");
        assert_eq!(decoded.hash, [7u8; 16]);
    }

    #[test]
    fn missing_version_means_0x10() {
        let decoded = decode("$argon2i$m=8,t=1,p=1$c29tZXNhbHQ$AAAAAA", Variant::I).unwrap();
        assert_eq!(decoded.identity.version, Version::V10);
    }

    #[test]
    fn prefix_must_match_requested_variant() {
        let text = "$argon2id$v=19$m=8,t=1,p=1$c29tZXNhbHQ$AAAAAA";
        let err = decode(text, Variant::I).unwrap_err();
        assert_eq!(err.status(), Status::DECODING_FAIL);
        assert!(decode(text, Variant::D).is_err());
    }

    #[test]
    fn unknown_version_is_incorrect_type() {
        let err = decode("$argon2id$v=20$m=8,t=1,p=1$c29tZXNhbHQ$AAAAAA", Variant::Id).unwrap_err();
        assert_eq!(err, DecodeError::Version(20));
        assert_eq!(err.status(), Status::INCORRECT_TYPE);
    }

    #[test]
    fn rejects_malformed_decimals() {
        for text in [
            "$argon2id$v=19$m=08,t=1,p=1$c29tZXNhbHQ$AAAAAA",
            "$argon2id$v=19$m=,t=1,p=1$c29tZXNhbHQ$AAAAAA",
            "$argon2id$v=19$m=-8,t=1,p=1$c29tZXNhbHQ$AAAAAA",
            "$argon2id$v=19$m=4294967296,t=1,p=1$c29tZXNhbHQ$AAAAAA",
        ] {
            assert_eq!(decode(text, Variant::Id).unwrap_err(), DecodeError::Decimal, "{text}");
        }
    }

    #[test]
    fn rejects_padding_and_trailing_bytes() {
        assert_eq!(
            decode("$argon2id$v=19$m=8,t=1,p=1$c29tZXNhbHQ=$AAAAAA", Variant::Id).unwrap_err(),
            DecodeError::Expected("$")
        );
        assert_eq!(
            decode("$argon2id$v=19$m=8,t=1,p=1$c29tZXNhbHQ$AAAAAA$", Variant::Id).unwrap_err(),
            DecodeError::Trailing
        );
    }

    #[test]
    fn empty_fields_decode_to_empty_buffers() {
        let decoded = decode("$argon2d$v=16$m=8,t=1,p=1$$", Variant::D).unwrap();
        assert!(decoded.salt.is_empty());
        assert!(decoded.hash.is_empty());
        assert_eq!(decoded.identity.version, Version::V10);
    }
}
