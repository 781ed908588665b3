use near_sdk::NearToken;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

// NEP-145 registration cost charged to the sponsor of a new asset.
pub const DEFAULT_ASSET_REGISTRATION_COST: u128 = 1_250_000_000_000_000_000_000; // 0.00125 NEAR

pub const DEFAULT_FT_CALL_GAS_TGAS: u64 = 15;
pub const DEFAULT_CALLBACK_GAS_TGAS: u64 = 10;
pub const MIN_GAS_TGAS: u64 = 5;
pub const MAX_GAS_TGAS: u64 = 100;

// storage_deposit returns a StorageBalance; ft_transfer returns nothing.
pub const MAX_CALLBACK_RESULT_LEN: usize = 256;

// Bytes one new stranded payout can add: record overhead, key, and a vec holding
// a single entry with maximal account ids.
pub const STRANDED_PAYOUT_RESERVE_BYTES: u64 = 320;

pub const PAYOUT_MEMO: &str = "digital-marketplace payout";

pub const MAX_VIEW_LIMIT: u32 = 100;
