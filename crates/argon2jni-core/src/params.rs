use std::num::NonZeroUsize;

use crate::error::BoundaryError;
use crate::identity::{Variant, Version};

pub(crate) const NON_POSITIVE_INPUT: &str =
    "Factors and values given to Argon2 must be positive and have a positive length (encodedlen may be 0)";

pub const DEFAULT_HASH_LEN: usize = 16;
pub const DEFAULT_SALT_LEN: usize = 16;
pub const DEFAULT_VARIANT: Variant = Variant::I;
pub const DEFAULT_VERSION: Version = Version::V13;

/// Cost triple handed to the primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityParameters {
    pub t_cost: u32,
    pub m_cost: u32,
    pub parallelism: u32,
}

impl SecurityParameters {
    pub const OFFICIAL_DEFAULT: SecurityParameters = SecurityParameters {
        t_cost: 3,
        m_cost: 1 << 12,
        parallelism: 1,
    };

    pub const fn new(t_cost: u32, m_cost: u32, parallelism: u32) -> Self {
        Self { t_cost, m_cost, parallelism }
    }
}

impl Default for SecurityParameters {
    fn default() -> Self {
        Self::OFFICIAL_DEFAULT
    }
}

/// Raw arguments of a hash call, exactly as the managed caller passed them.
///
/// `B` is the host's managed byte-array type; lengths are read from the host,
/// never trusted from the caller.
pub struct HashArgs<'a, B: ?Sized> {
    pub t_cost: i32,
    pub m_cost: i32,
    pub parallelism: i32,
    pub password: &'a B,
    pub salt: &'a B,
    pub hash_len: i32,
    pub encoded_len: i32,
    pub variant_id: i32,
    pub version_id: i32,
}

/// Raw arguments of a verify call.
pub struct VerifyArgs<'a, T: ?Sized, B: ?Sized> {
    pub encoded: &'a T,
    pub password: &'a B,
    pub variant_id: i32,
}

/// Scalars of a hash call after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    pub costs: SecurityParameters,
    pub hash_len: usize,
    /// `None` when no encoded form was requested.
    pub encoded_len: Option<NonZeroUsize>,
}

impl HashParams {
    /// Checks every scalar of a hash call. Input buffers whose length could
    /// not be read count as empty.
    pub fn validate<B: ?Sized>(
        args: &HashArgs<'_, B>,
        password_len: Option<usize>,
        salt_len: Option<usize>,
    ) -> Result<Self, BoundaryError> {
        let invalid = BoundaryError::InvalidArgument(NON_POSITIVE_INPUT);

        let positive = |v: i32| u32::try_from(v).ok().filter(|v| *v > 0);

        let t_cost = positive(args.t_cost).ok_or_else(|| invalid.clone())?;
        let m_cost = positive(args.m_cost).ok_or_else(|| invalid.clone())?;
        let parallelism = positive(args.parallelism).ok_or_else(|| invalid.clone())?;
        let hash_len = positive(args.hash_len).ok_or_else(|| invalid.clone())?;

        if password_len.unwrap_or(0) == 0 || salt_len.unwrap_or(0) == 0 {
            return Err(invalid);
        }

        let encoded_len = u32::try_from(args.encoded_len).map_err(|_| invalid)?;

        Ok(Self {
            costs: SecurityParameters::new(t_cost, m_cost, parallelism),
            hash_len: hash_len as usize,
            encoded_len: NonZeroUsize::new(encoded_len as usize),
        })
    }
}

/// Encoded-buffer length large enough for the encoded form of a hash with
/// these parameters.
///
/// `$argon2xx$v=..$m=..,t=..,p=..$<salt>$<hash>` takes 23 fixed bytes plus two
/// spare, the decimal digits of each number, and the padded base64 length of
/// salt and hash.
pub fn recommended_encoded_len(
    params: &SecurityParameters,
    hash_len: usize,
    version_id: i32,
    salt_len: usize,
) -> usize {
    25 + decimal_digits(i64::from(version_id))
        + decimal_digits(i64::from(params.m_cost))
        + decimal_digits(i64::from(params.t_cost))
        + decimal_digits(i64::from(params.parallelism))
        + padded_base64_len(salt_len)
        + padded_base64_len(hash_len)
}

fn decimal_digits(n: i64) -> usize {
    let sign = usize::from(n < 0);
    let mut n = n.unsigned_abs();
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    sign + digits
}

fn padded_base64_len(n: usize) -> usize {
    4 * n.div_ceil(3)
}
