use crate::identity::AlgorithmIdentity;
use crate::params::SecurityParameters;

/// Status code returned by the primitive, numbered as in the reference
/// Argon2 library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(pub i32);

impl Status {
    pub const OK: Status = Status(0);

    pub const OUTPUT_PTR_NULL: Status = Status(-1);
    pub const OUTPUT_TOO_SHORT: Status = Status(-2);
    pub const OUTPUT_TOO_LONG: Status = Status(-3);
    pub const PWD_TOO_SHORT: Status = Status(-4);
    pub const PWD_TOO_LONG: Status = Status(-5);
    pub const SALT_TOO_SHORT: Status = Status(-6);
    pub const SALT_TOO_LONG: Status = Status(-7);
    pub const AD_TOO_SHORT: Status = Status(-8);
    pub const AD_TOO_LONG: Status = Status(-9);
    pub const SECRET_TOO_SHORT: Status = Status(-10);
    pub const SECRET_TOO_LONG: Status = Status(-11);
    pub const TIME_TOO_SMALL: Status = Status(-12);
    pub const TIME_TOO_LARGE: Status = Status(-13);
    pub const MEMORY_TOO_LITTLE: Status = Status(-14);
    pub const MEMORY_TOO_MUCH: Status = Status(-15);
    pub const LANES_TOO_FEW: Status = Status(-16);
    pub const LANES_TOO_MANY: Status = Status(-17);
    pub const PWD_PTR_MISMATCH: Status = Status(-18);
    pub const SALT_PTR_MISMATCH: Status = Status(-19);
    pub const SECRET_PTR_MISMATCH: Status = Status(-20);
    pub const AD_PTR_MISMATCH: Status = Status(-21);
    pub const MEMORY_ALLOCATION_ERROR: Status = Status(-22);
    pub const FREE_MEMORY_CBK_NULL: Status = Status(-23);
    pub const ALLOCATE_MEMORY_CBK_NULL: Status = Status(-24);
    pub const INCORRECT_PARAMETER: Status = Status(-25);
    pub const INCORRECT_TYPE: Status = Status(-26);
    pub const OUT_PTR_MISMATCH: Status = Status(-27);
    pub const THREADS_TOO_FEW: Status = Status(-28);
    pub const THREADS_TOO_MANY: Status = Status(-29);
    pub const MISSING_ARGS: Status = Status(-30);
    pub const ENCODING_FAIL: Status = Status(-31);
    pub const DECODING_FAIL: Status = Status(-32);
    pub const THREAD_FAIL: Status = Status(-33);
    pub const DECODING_LENGTH_FAIL: Status = Status(-34);
    pub const VERIFY_MISMATCH: Status = Status(-35);

    pub const fn code(self) -> i32 {
        self.0
    }

    pub const fn outcome(self) -> Outcome {
        match self.0 {
            0 => Outcome::Ok,
            -35 => Outcome::Mismatch,
            _ => Outcome::Error(self),
        }
    }
}

/// The three ways a primitive call can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Mismatch,
    Error(Status),
}

/// Everything the primitive needs for one hash besides the output buffers.
#[derive(Clone, Copy)]
pub struct HashRequest<'a> {
    pub identity: AlgorithmIdentity,
    pub costs: SecurityParameters,
    pub password: &'a [u8],
    pub salt: &'a [u8],
}
