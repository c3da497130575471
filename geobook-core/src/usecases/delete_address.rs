use super::prelude::*;

/// Deleting an absent id is not an error (idempotent delete).
pub fn delete_address<R: AddressRepo>(repo: &R, id: &Id) -> Result<()> {
    Ok(repo.delete_address(id)?)
}
