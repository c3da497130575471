mod create_address;
mod delete_address;
mod error;
mod filter_address;
mod find_nearby;
mod update_address;

pub use self::{
    create_address::*, delete_address::*, error::Error, filter_address::*, find_nearby::*,
    update_address::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
