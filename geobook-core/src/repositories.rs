// Low-level database access traits.
// The repository is specified as a contract so that the storage
// engine can be replaced (or substituted with a test double)
// without touching the use cases.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait AddressRepo {
    /// Persists the draft and returns the identifier assigned by
    /// the storage engine.
    fn insert_address(&self, draft: &AddressDraft) -> Result<Id>;

    /// Replaces the whole record.
    ///
    /// Fails with `Error::NotFound` if the id is absent.
    fn update_address(&self, id: &Id, draft: &AddressDraft) -> Result<()>;

    /// Idempotent: deleting an absent id succeeds.
    fn delete_address(&self, id: &Id) -> Result<()>;

    /// All records in deterministic (insertion) order.
    fn all_addresses(&self) -> Result<Vec<AddressEntry>>;

    /// Number of stored records.
    ///
    /// Cheaper than materializing `all_addresses()` when only the
    /// count matters, e.g. for consistency checks.
    fn count_addresses(&self) -> Result<usize>;
}
