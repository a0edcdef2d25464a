use crate::{
    entities::*,
    gateways::mosque::{MosqueGateway, SearchQuery},
    util::{parse, validate},
};

mod error;
mod get_mosque_details;
mod search_mosques;


type Result<T> = std::result::Result<T, Error>;

pub use self::{error::Error, get_mosque_details::*, search_mosques::*};
