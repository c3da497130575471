use super::*;

/// Returns all records within `radius` of `center`.
pub fn find_nearby(
    connections: &sqlite::Connections,
    center: MapPoint,
    radius: Distance,
) -> Result<Vec<AddressEntry>> {
    let connection = connections.shared()?;
    Ok(usecases::find_nearby(&connection, center, radius)?)
}
