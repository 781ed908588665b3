mod flush;
mod rent;
mod types;

pub use rent::RentDelta;
pub(crate) use types::storage_byte_cost;
pub use types::StorageKey;
