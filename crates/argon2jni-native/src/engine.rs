use argon2::{Algorithm, Argon2, Block, Params, Version as EngineVersion};

use argon2jni_core::identity::{AlgorithmIdentity, Variant, Version};
use argon2jni_core::params::SecurityParameters;
use argon2jni_core::primitive::Status;

use crate::status::from_engine_error;

/// Computes the raw tag into `out`. The tag length is `out.len()`.
///
/// Working memory is reserved fallibly so an oversized `m_cost` reports
/// `MEMORY_ALLOCATION_ERROR` instead of aborting the host process.
pub(crate) fn compute(
    identity: AlgorithmIdentity,
    costs: &SecurityParameters,
    password: &[u8],
    salt: &[u8],
    out: &mut [u8],
) -> Result<(), Status> {
    let params = Params::new(costs.m_cost, costs.t_cost, costs.parallelism, None).map_err(from_engine_error)?;
    let hasher = Argon2::new(algorithm(identity.variant), version(identity.version), params);

    let block_count = hasher.params().block_count();
    let mut blocks: Vec<Block> = Vec::new();
    blocks
        .try_reserve_exact(block_count)
        .map_err(|_| Status::MEMORY_ALLOCATION_ERROR)?;
    blocks.resize(block_count, Block::default());

    hasher
        .hash_password_into_with_memory(password, salt, out, &mut blocks)
        .map_err(from_engine_error)
}

fn algorithm(variant: Variant) -> Algorithm {
    match variant {
        Variant::D => Algorithm::Argon2d,
        Variant::I => Algorithm::Argon2i,
        Variant::Id => Algorithm::Argon2id,
    }
}

fn version(version: Version) -> EngineVersion {
    match version {
        Version::V10 => EngineVersion::V0x10,
        Version::V13 => EngineVersion::V0x13,
    }
}
