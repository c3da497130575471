use super::*;

/// Creates a new address record: validate, resolve, persist.
///
/// The position is always resolver-derived; see
/// `usecases::prepare_new_address` for the caller-supplied coordinate
/// policy. Resolution happens before any database connection is
/// acquired so that backoff waits never block other flows.
pub fn create_address<G, S>(
    connections: &sqlite::Connections,
    resolver: &Resolver<G, S>,
    new_address: usecases::NewAddress,
    cancel: &CancellationFlag,
) -> Result<AddressEntry>
where
    G: GeoCodingGateway,
    S: Sleep,
{
    let address = usecases::prepare_new_address(new_address)?;
    let pos = resolver
        .resolve(&address, cancel)
        .map_err(usecases::Error::from)?;
    let draft = AddressDraft { address, pos };
    let entry = connections
        .exclusive()?
        .transaction(|conn| usecases::store_new_address(conn, draft))?;
    info!("Created address {} at {}", entry.id, entry.pos);
    Ok(entry)
}
