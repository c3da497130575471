use super::prelude::*;

/// Inbound payload for replacing a record.
///
/// Updates never re-resolve coordinates: the caller has to supply the
/// full record including its position.
#[derive(Debug, Clone)]
pub struct UpdateAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

pub fn prepare_address_update(update: UpdateAddress) -> Result<AddressDraft> {
    let UpdateAddress {
        street,
        city,
        state,
        country,
        lat,
        lng,
    } = update;
    let address = Address {
        street,
        city,
        state,
        country,
    };
    if !address.is_complete() {
        return Err(Error::IncompleteAddress);
    }
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)?;
    Ok(AddressDraft { address, pos })
}

pub fn update_address<R: AddressRepo>(repo: &R, id: &Id, draft: &AddressDraft) -> Result<()> {
    Ok(repo.update_address(id, draft)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_update() -> UpdateAddress {
        UpdateAddress {
            street: "Main St 1".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            country: "USA".into(),
            lat: 39.7817,
            lng: -89.6501,
        }
    }

    #[test]
    fn accept_valid_update() {
        let draft = prepare_address_update(sample_update()).unwrap();
        assert_eq!(MapPoint::from_lat_lng_deg(39.7817, -89.6501), draft.pos);
    }

    #[test]
    fn reject_out_of_range_position() {
        let update = UpdateAddress {
            lat: 91.0,
            ..sample_update()
        };
        assert!(matches!(
            prepare_address_update(update),
            Err(Error::InvalidPosition)
        ));
    }
}
