use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum MarketplaceError {
    DifferentSender,
    WrongReceiver,
    SaleAlreadyExists,
    AlreadyOptedIn,
    ClawbackAsset,
    AssetNotSponsored,
    SellerCantBeBuyer,
    SellerCantBeBidder,
    WorseBid,
    NoBid,
    SaleNotFound,
    ReceiptBookNotFound,
    AccountNotFound,
    StrandedPayoutNotFound,
    Overflow,
    InvalidInput(String),
    InsufficientBalance(String),
    InsufficientDeposit(String),
    Unauthorized(String),
    InternalError(String),
}

/// Coarse classification of failures, independent of the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AuthorizationMismatch,
    PreconditionViolation,
    InsufficientFunds,
    NotFound,
    InternalInvariantViolation,
}

impl MarketplaceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DifferentSender | Self::WrongReceiver | Self::Unauthorized(_) => {
                ErrorKind::AuthorizationMismatch
            }
            Self::SaleAlreadyExists
            | Self::AlreadyOptedIn
            | Self::ClawbackAsset
            | Self::AssetNotSponsored
            | Self::SellerCantBeBuyer
            | Self::SellerCantBeBidder
            | Self::WorseBid
            | Self::NoBid
            | Self::InvalidInput(_)
            | Self::InsufficientDeposit(_) => ErrorKind::PreconditionViolation,
            Self::InsufficientBalance(_) => ErrorKind::InsufficientFunds,
            Self::SaleNotFound
            | Self::ReceiptBookNotFound
            | Self::AccountNotFound
            | Self::StrandedPayoutNotFound => ErrorKind::NotFound,
            Self::Overflow | Self::InternalError(_) => ErrorKind::InternalInvariantViolation,
        }
    }

    pub(crate) fn insufficient_balance(account_id: &near_sdk::AccountId, needed: u128, available: u128) -> Self {
        Self::InsufficientBalance(format!(
            "{account_id} needs {needed} yoctoNEAR but has {available} escrowed"
        ))
    }
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DifferentSender => write!(f, "Asset sender must be the caller"),
            Self::WrongReceiver => write!(f, "Asset must be transferred to the marketplace"),
            Self::SaleAlreadyExists => write!(f, "Sale already exists for this seller and asset"),
            Self::AlreadyOptedIn => write!(f, "Marketplace is already registered with this asset"),
            Self::ClawbackAsset => write!(f, "Assets with a clawback authority cannot be sponsored"),
            Self::AssetNotSponsored => write!(f, "Asset has not been sponsored"),
            Self::SellerCantBeBuyer => write!(f, "Seller cannot buy their own sale"),
            Self::SellerCantBeBidder => write!(f, "Seller cannot bid on their own sale"),
            Self::WorseBid => write!(f, "Bid must be strictly greater than the current bid"),
            Self::NoBid => write!(f, "Sale has no bid to accept"),
            Self::SaleNotFound => write!(f, "Not found: sale"),
            Self::ReceiptBookNotFound => write!(f, "Not found: receipt book"),
            Self::AccountNotFound => write!(f, "Not found: escrow account"),
            Self::StrandedPayoutNotFound => write!(f, "Not found: stranded payout"),
            Self::Overflow => write!(f, "Arithmetic overflow"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InsufficientBalance(msg) => write!(f, "Insufficient balance: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}
