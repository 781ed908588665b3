mod types;

pub use types::{MarketplaceConfig, MarketplaceConfigUpdate};
