use crate::storage::storage_byte_cost;
use crate::*;

/// Rent owed or released by a single state mutation, priced at the current byte cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentDelta {
    Grew(u128),
    Shrank(u128),
    Unchanged,
}

impl RentDelta {
    pub fn between(before_bytes: u64, after_bytes: u64) -> Self {
        let cost = storage_byte_cost();
        if after_bytes > before_bytes {
            Self::Grew(u128::from(after_bytes - before_bytes) * cost)
        } else if after_bytes < before_bytes {
            Self::Shrank(u128::from(before_bytes - after_bytes) * cost)
        } else {
            Self::Unchanged
        }
    }

    /// Amount released back to the payer; zero unless storage shrank.
    pub fn refund(self) -> u128 {
        match self {
            Self::Shrank(amount) => amount,
            Self::Grew(_) | Self::Unchanged => 0,
        }
    }
}

impl Contract {
    /// Runs `mutate` between two flushed storage snapshots.
    pub(crate) fn measure_rent<R>(&mut self, mutate: impl FnOnce(&mut Self) -> R) -> (R, RentDelta) {
        let before = self.storage_usage_flushed();
        let result = mutate(self);
        let after = self.storage_usage_flushed();
        (result, RentDelta::between(before, after))
    }

    pub(crate) fn settle_rent(
        &mut self,
        account_id: &AccountId,
        delta: RentDelta,
    ) -> Result<(), MarketplaceError> {
        match delta {
            RentDelta::Grew(amount) => self.debit(account_id, amount).map(|_| ()),
            RentDelta::Shrank(amount) => self.credit(account_id, amount).map(|_| ()),
            RentDelta::Unchanged => Ok(()),
        }
    }

    /// Applies `mutate` and charges (or refunds) the resulting rent to `payer`.
    pub(crate) fn with_rent<R>(
        &mut self,
        payer: &AccountId,
        mutate: impl FnOnce(&mut Self) -> R,
    ) -> Result<R, MarketplaceError> {
        let (result, delta) = self.measure_rent(mutate);
        self.settle_rent(payer, delta)?;
        Ok(result)
    }
}
