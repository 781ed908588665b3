use crate::*;

/// Asset units owed to an account after an outgoing `ft_transfer` failed.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrandedPayout {
    pub asset_id: AccountId,
    pub amount: U128,
    /// Escrow account that paid for this record and gets its rent back on retry.
    pub rent_payer: AccountId,
}
