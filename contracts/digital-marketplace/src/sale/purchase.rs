use crate::*;

impl Contract {
    pub(crate) fn internal_buy(
        &mut self,
        buyer_id: &AccountId,
        sale_key: &SaleKey,
    ) -> Result<Sale, MarketplaceError> {
        if buyer_id == &sale_key.seller_id {
            return Err(MarketplaceError::SellerCantBeBuyer);
        }
        let price = self
            .sales
            .get(sale_key)
            .map(|sale| sale.price.0)
            .ok_or(MarketplaceError::SaleNotFound)?;
        self.check_escrow_covers(buyer_id, price)?;

        // A standing bid is discarded; its receipt is released on the next claim.
        let (sale, record_refund) = self.take_sale(sale_key)?;
        self.debit(buyer_id, price)?;
        let proceeds = price
            .checked_add(record_refund)
            .ok_or(MarketplaceError::Overflow)?;
        self.credit(&sale_key.seller_id, proceeds)?;
        self.pay_out_asset(&sale_key.asset_id, buyer_id, sale.amount.0, buyer_id)?;

        MarketplaceEvent::SaleBought {
            sale: sale_key.clone(),
            buyer_id: buyer_id.clone(),
            amount: sale.amount,
            price: sale.price,
        }
        .emit();
        Ok(sale)
    }
}

#[near]
impl Contract {
    #[handle_result]
    pub fn buy(&mut self, seller_id: AccountId, asset_id: AccountId) -> Result<(), MarketplaceError> {
        let buyer_id = env::predecessor_account_id();
        self.internal_buy(&buyer_id, &SaleKey::new(seller_id, asset_id))
            .map(|_| ())
    }
}
