use crate::*;

impl Contract {
    pub(crate) fn internal_open_sale(
        &mut self,
        seller_id: &AccountId,
        deposit: &AssetDeposit,
        price: u128,
    ) -> Result<SaleKey, MarketplaceError> {
        if &deposit.sender_id != seller_id {
            return Err(MarketplaceError::DifferentSender);
        }
        if deposit.receiver_id != env::current_account_id() {
            return Err(MarketplaceError::WrongReceiver);
        }
        if !self.sponsored_assets.contains(&deposit.asset_id) {
            return Err(MarketplaceError::AssetNotSponsored);
        }
        if deposit.amount == 0 {
            return Err(MarketplaceError::InvalidInput(
                "Sale must hold a positive asset amount".into(),
            ));
        }

        let sale_key = SaleKey::new(seller_id.clone(), deposit.asset_id.clone());
        if self.sales.contains_key(&sale_key) {
            return Err(MarketplaceError::SaleAlreadyExists);
        }

        let sale = Sale {
            amount: U128(deposit.amount),
            price: U128(price),
            bid: CurrentBid::NoBid,
        };
        self.with_rent(seller_id, |contract| {
            contract.sales.insert(sale_key.clone(), sale);
        })?;

        MarketplaceEvent::SaleOpened {
            sale: sale_key.clone(),
            amount: U128(deposit.amount),
            price: U128(price),
        }
        .emit();
        Ok(sale_key)
    }

    pub(crate) fn internal_close_sale(
        &mut self,
        seller_id: &AccountId,
        asset_id: &AccountId,
    ) -> Result<Sale, MarketplaceError> {
        let sale_key = SaleKey::new(seller_id.clone(), asset_id.clone());
        let (sale, record_refund) = self.take_sale(&sale_key)?;
        self.credit(seller_id, record_refund)?;
        self.pay_out_asset(asset_id, seller_id, sale.amount.0, seller_id)?;

        MarketplaceEvent::SaleClosed {
            sale: sale_key,
            amount: sale.amount,
        }
        .emit();
        Ok(sale)
    }

    /// Resets the bid slot of a sale, refunding the slot's rent to whoever held it.
    /// Returns the sale as it was before the reset.
    pub(crate) fn release_bid_slot(&mut self, sale_key: &SaleKey) -> Result<Sale, MarketplaceError> {
        let sale = self
            .sales
            .get(sale_key)
            .cloned()
            .ok_or(MarketplaceError::SaleNotFound)?;
        if let CurrentBid::Bid { bidder_id, .. } = &sale.bid {
            let cleared = Sale {
                bid: CurrentBid::NoBid,
                ..sale.clone()
            };
            self.with_rent(bidder_id, |contract| {
                contract.sales.insert(sale_key.clone(), cleared);
            })?;
        }
        Ok(sale)
    }

    /// Removes a sale. Returns it with the rent released by deleting the record,
    /// which belongs to the seller.
    pub(crate) fn take_sale(&mut self, sale_key: &SaleKey) -> Result<(Sale, u128), MarketplaceError> {
        let sale = self.release_bid_slot(sale_key)?;
        let (_, delta) = self.measure_rent(|contract| {
            contract.sales.remove(sale_key);
        });
        Ok((sale, delta.refund()))
    }
}

#[near]
impl Contract {
    /// Cancels the caller's sale of `asset_id` and returns the escrowed units.
    #[handle_result]
    pub fn close_sale(&mut self, asset_id: AccountId) -> Result<(), MarketplaceError> {
        let seller_id = env::predecessor_account_id();
        self.internal_close_sale(&seller_id, &asset_id).map(|_| ())
    }
}
