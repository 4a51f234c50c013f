#![forbid(unsafe_op_in_unsafe_fn)]

pub use anyhow;

pub mod result {
    pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;
}

pub mod buffer;
pub mod kernel;
pub mod pool;
pub mod scalar;
