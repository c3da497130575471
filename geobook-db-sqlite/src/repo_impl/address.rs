use super::*;
use geobook_core::repositories::AddressRepo;

impl AddressRepo for DbReadWrite<'_> {
    fn insert_address(&self, draft: &AddressDraft) -> Result<Id> {
        insert_address(&mut self.conn.borrow_mut(), draft)
    }
    fn update_address(&self, id: &Id, draft: &AddressDraft) -> Result<()> {
        update_address(&mut self.conn.borrow_mut(), id, draft)
    }
    fn delete_address(&self, id: &Id) -> Result<()> {
        delete_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<AddressEntry>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }
}

impl AddressRepo for DbReadOnly<'_> {
    fn insert_address(&self, _draft: &AddressDraft) -> Result<Id> {
        unreachable!();
    }
    fn update_address(&self, _id: &Id, _draft: &AddressDraft) -> Result<()> {
        unreachable!();
    }
    fn delete_address(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }
    fn all_addresses(&self) -> Result<Vec<AddressEntry>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }
}

impl AddressRepo for DbConnection<'_> {
    fn insert_address(&self, draft: &AddressDraft) -> Result<Id> {
        insert_address(&mut self.conn.borrow_mut(), draft)
    }
    fn update_address(&self, id: &Id, draft: &AddressDraft) -> Result<()> {
        update_address(&mut self.conn.borrow_mut(), id, draft)
    }
    fn delete_address(&self, id: &Id) -> Result<()> {
        delete_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<AddressEntry>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }
}

fn insert_address(conn: &mut SqliteConnection, draft: &AddressDraft) -> Result<Id> {
    let _count = diesel::insert_into(schema::addresses::table)
        .values(&to_insertable(draft))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    let id = diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(Id::from(id))
}

fn update_address(conn: &mut SqliteConnection, id: &Id, draft: &AddressDraft) -> Result<()> {
    use schema::addresses::dsl;
    let count = diesel::update(dsl::addresses.find(id.to_inner()))
        .set(&to_insertable(draft))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn delete_address(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::addresses::dsl;
    // Deleting an absent id is a no-op by design.
    let _count = diesel::delete(dsl::addresses.find(id.to_inner()))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn all_addresses(conn: &mut SqliteConnection) -> Result<Vec<AddressEntry>> {
    use schema::addresses::dsl;
    Ok(dsl::addresses
        .order(dsl::id.asc())
        .load::<models::Address>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(from_row)
        .collect())
}

fn count_addresses(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::addresses::dsl;
    Ok(dsl::addresses
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
