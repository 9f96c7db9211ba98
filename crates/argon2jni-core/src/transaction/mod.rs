pub mod hash;
pub mod verify;

#[cfg(test)]
pub(crate) mod test_doubles;

use crate::host::{HeapAllocator, NativeAllocator};
use crate::primitive::Argon2Primitive;

/// A native primitive paired with the allocator its output buffers come from.
///
/// Holds no per-call state; one value can serve any number of transactions.
#[derive(Debug, Default, Clone)]
pub struct Boundary<P, A = HeapAllocator> {
    primitive: P,
    allocator: A,
}

impl<P: Argon2Primitive> Boundary<P> {
    pub fn new(primitive: P) -> Self {
        Self {
            primitive,
            allocator: HeapAllocator,
        }
    }
}

impl<P: Argon2Primitive, A: NativeAllocator> Boundary<P, A> {
    pub fn with_allocator(primitive: P, allocator: A) -> Self {
        Self { primitive, allocator }
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }
}
