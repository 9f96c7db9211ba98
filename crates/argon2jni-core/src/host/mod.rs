pub mod traits;
pub mod alloc;

pub use traits::*;
pub use alloc::*;
