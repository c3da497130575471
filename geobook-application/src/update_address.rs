use super::*;

/// Replaces an existing record without re-resolving its coordinates.
pub fn update_address(
    connections: &sqlite::Connections,
    id: Id,
    update: usecases::UpdateAddress,
) -> Result<()> {
    let draft = usecases::prepare_address_update(update)?;
    connections
        .exclusive()?
        .transaction(|conn| usecases::update_address(conn, &id, &draft))?;
    info!("Updated address {id}");
    Ok(())
}
