use crate::*;

impl Contract {
    pub(crate) fn escrow_balance(&self, account_id: &AccountId) -> u128 {
        self.deposited.get(account_id).map_or(0, |balance| balance.0)
    }

    pub(crate) fn check_escrow_covers(
        &self,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        let available = self.escrow_balance(account_id);
        if available < amount {
            return Err(MarketplaceError::insufficient_balance(account_id, amount, available));
        }
        Ok(())
    }

    /// Adds to an existing escrow entry. Crediting an account that never deposited is a bug.
    pub(crate) fn credit(
        &mut self,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<u128, MarketplaceError> {
        if amount == 0 {
            return Ok(self.escrow_balance(account_id));
        }
        let balance = self
            .deposited
            .get_mut(account_id)
            .ok_or(MarketplaceError::AccountNotFound)?;
        balance.0 = balance
            .0
            .checked_add(amount)
            .ok_or(MarketplaceError::Overflow)?;
        Ok(balance.0)
    }

    pub(crate) fn debit(
        &mut self,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<u128, MarketplaceError> {
        if amount == 0 {
            return Ok(self.escrow_balance(account_id));
        }
        self.check_escrow_covers(account_id, amount)?;
        let balance = self
            .deposited
            .get_mut(account_id)
            .ok_or(MarketplaceError::AccountNotFound)?;
        balance.0 -= amount;
        Ok(balance.0)
    }

    pub(crate) fn internal_deposit(
        &mut self,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<u128, MarketplaceError> {
        let credited = self
            .escrow_balance(account_id)
            .checked_add(amount)
            .ok_or(MarketplaceError::Overflow)?;
        // The first deposit creates the entry; its rent comes out of the same deposit.
        self.with_rent(account_id, |contract| {
            contract.deposited.insert(account_id.clone(), U128(credited));
        })?;
        let balance = self.escrow_balance(account_id);

        MarketplaceEvent::Deposited {
            account_id: account_id.clone(),
            amount: U128(amount),
            balance: U128(balance),
        }
        .emit();
        Ok(balance)
    }

    pub(crate) fn internal_withdraw(
        &mut self,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<u128, MarketplaceError> {
        let balance = self.debit(account_id, amount)?;
        if amount > 0 {
            let _ = Promise::new(account_id.clone()).transfer(NearToken::from_yoctonear(amount));
        }

        MarketplaceEvent::Withdrawn {
            account_id: account_id.clone(),
            amount: U128(amount),
            balance: U128(balance),
        }
        .emit();
        Ok(balance)
    }
}

#[near]
impl Contract {
    /// Escrows the attached NEAR for the caller, net of the rent for a new escrow entry.
    #[payable]
    #[handle_result]
    pub fn deposit(&mut self) -> Result<U128, MarketplaceError> {
        let account_id = env::predecessor_account_id();
        let amount = env::attached_deposit().as_yoctonear();
        self.internal_deposit(&account_id, amount).map(U128)
    }

    #[handle_result]
    pub fn withdraw(&mut self, amount: U128) -> Result<U128, MarketplaceError> {
        let account_id = env::predecessor_account_id();
        self.internal_withdraw(&account_id, amount.0).map(U128)
    }
}
