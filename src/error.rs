use alloc::collections::TryReserveError;

/// Errors returned by the fallible operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The allocator could not provide room for another node.
    #[error("failed to allocate a list node: {0}")]
    Alloc(#[from] TryReserveError),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
