use std::ops::{Deref, DerefMut};

use zeroize::Zeroize;

/// Source of native scratch buffers for a transaction.
///
/// Buffers are released by dropping them. A `None` is an allocation failure,
/// never a panic or abort.
pub trait NativeAllocator {
    type Buffer: DerefMut<Target = [u8]>;

    fn allocate(&self, len: usize) -> Option<Self::Buffer>;
}

/// Heap allocator with fallible reservation.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapAllocator;

impl NativeAllocator for HeapAllocator {
    type Buffer = NativeBuffer;

    fn allocate(&self, len: usize) -> Option<NativeBuffer> {
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(len).ok()?;
        bytes.resize(len, 0);
        Some(NativeBuffer { bytes })
    }
}

/// Zero-initialized heap buffer, wiped on release.
pub struct NativeBuffer {
    bytes: Vec<u8>,
}

impl Deref for NativeBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for NativeBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl Drop for NativeBuffer {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
