use crate::*;

impl Contract {
    pub(crate) fn internal_bid(
        &mut self,
        bidder_id: &AccountId,
        sale_key: &SaleKey,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        if bidder_id == &sale_key.seller_id {
            return Err(MarketplaceError::SellerCantBeBidder);
        }
        let standing = self
            .sales
            .get(sale_key)
            .map(|sale| sale.bid.clone())
            .ok_or(MarketplaceError::SaleNotFound)?;
        if !standing.is_beaten_by(amount) {
            return Err(MarketplaceError::WorseBid);
        }
        let available = self
            .escrow_balance(bidder_id)
            .saturating_add(self.receipt_amount(bidder_id, sale_key));
        if available < amount {
            return Err(MarketplaceError::insufficient_balance(bidder_id, amount, available));
        }

        // The displaced bidder keeps their escrow in the receipt book until they claim it.
        let mut sale = self.release_bid_slot(sale_key)?;
        sale.bid = CurrentBid::Bid {
            bidder_id: bidder_id.clone(),
            amount: U128(amount),
        };
        self.with_rent(bidder_id, |contract| {
            contract.sales.insert(sale_key.clone(), sale);
        })?;

        self.record_bid_receipt(
            bidder_id,
            BidReceipt {
                sale_key: sale_key.clone(),
                amount: U128(amount),
            },
        )?;
        self.debit(bidder_id, amount)?;

        MarketplaceEvent::BidPlaced {
            sale: sale_key.clone(),
            bidder_id: bidder_id.clone(),
            amount: U128(amount),
        }
        .emit();
        Ok(())
    }

    pub(crate) fn internal_accept_bid(
        &mut self,
        seller_id: &AccountId,
        asset_id: &AccountId,
    ) -> Result<(AccountId, u128), MarketplaceError> {
        let sale_key = SaleKey::new(seller_id.clone(), asset_id.clone());
        let (bidder_id, amount) = match self.sales.get(&sale_key).map(|sale| &sale.bid) {
            None => return Err(MarketplaceError::SaleNotFound),
            Some(CurrentBid::NoBid) => return Err(MarketplaceError::NoBid),
            Some(CurrentBid::Bid { bidder_id, amount }) => (bidder_id.clone(), amount.0),
        };

        let (sale, record_refund) = self.take_sale(&sale_key)?;
        let proceeds = amount
            .checked_add(record_refund)
            .ok_or(MarketplaceError::Overflow)?;
        self.credit(seller_id, proceeds)?;
        // The seller triggered the payout, so the seller reserves its rent.
        self.pay_out_asset(asset_id, &bidder_id, sale.amount.0, seller_id)?;
        self.remove_settled_receipt(&bidder_id, &sale_key)?;

        MarketplaceEvent::BidAccepted {
            sale: sale_key,
            bidder_id: bidder_id.clone(),
            amount: U128(amount),
        }
        .emit();
        Ok((bidder_id, amount))
    }
}

#[near]
impl Contract {
    /// Places a bid of `amount` escrowed yoctoNEAR on a sale.
    #[handle_result]
    pub fn bid(
        &mut self,
        seller_id: AccountId,
        asset_id: AccountId,
        amount: U128,
    ) -> Result<(), MarketplaceError> {
        let bidder_id = env::predecessor_account_id();
        self.internal_bid(&bidder_id, &SaleKey::new(seller_id, asset_id), amount.0)
    }

    #[handle_result]
    pub fn accept_bid(&mut self, asset_id: AccountId) -> Result<(), MarketplaceError> {
        let seller_id = env::predecessor_account_id();
        self.internal_accept_bid(&seller_id, &asset_id).map(|_| ())
    }
}
