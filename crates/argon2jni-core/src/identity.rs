//! Translation of the managed-side integer identifiers into the algorithm
//! variant and version the primitive expects.

use crate::error::BoundaryError;

pub const ARGON2D_ID: i32 = 0;
pub const ARGON2I_ID: i32 = 1;
pub const ARGON2ID_ID: i32 = 2;

pub const VERSION_10_ID: i32 = 0x10;
pub const VERSION_13_ID: i32 = 0x13;

pub(crate) const INVALID_VARIANT: &str = "Argon2 target type must be a valid algorithm ID";
pub(crate) const INVALID_VERSION: &str = "Argon2 target version must be a valid algorithm version ID";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Data-dependent.
    D,
    /// Data-independent.
    I,
    /// Hybrid.
    Id,
}

impl Variant {
    pub const fn id(self) -> i32 {
        match self {
            Variant::D => ARGON2D_ID,
            Variant::I => ARGON2I_ID,
            Variant::Id => ARGON2ID_ID,
        }
    }

    /// Name used as the prefix of the encoded form, e.g. `$argon2id$`.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::D => "argon2d",
            Variant::I => "argon2i",
            Variant::Id => "argon2id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    V10,
    V13,
}

impl Version {
    pub const fn id(self) -> i32 {
        match self {
            Version::V10 => VERSION_10_ID,
            Version::V13 => VERSION_13_ID,
        }
    }

    /// Numeric revision as written into `v=` of the encoded form.
    pub const fn number(self) -> u32 {
        match self {
            Version::V10 => 0x10,
            Version::V13 => 0x13,
        }
    }
}

pub fn resolve_variant(id: i32) -> Option<Variant> {
    match id {
        ARGON2D_ID => Some(Variant::D),
        ARGON2I_ID => Some(Variant::I),
        ARGON2ID_ID => Some(Variant::Id),
        _ => None,
    }
}

pub fn resolve_version(id: i32) -> Option<Version> {
    match id {
        VERSION_10_ID => Some(Version::V10),
        VERSION_13_ID => Some(Version::V13),
        _ => None,
    }
}

// Resolved (variant, version) pair for one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgorithmIdentity {
    pub variant: Variant,
    pub version: Version,
}

impl AlgorithmIdentity {
    pub const fn new(variant: Variant, version: Version) -> Self {
        Self { variant, version }
    }

    /// Resolves both identifiers; the variant is checked first.
    pub fn resolve(variant_id: i32, version_id: i32) -> Result<Self, BoundaryError> {
        let variant = resolve_variant(variant_id).ok_or(BoundaryError::InvalidArgument(INVALID_VARIANT))?;
        let version = resolve_version(version_id).ok_or(BoundaryError::InvalidArgument(INVALID_VERSION))?;
        Ok(Self { variant, version })
    }
}
