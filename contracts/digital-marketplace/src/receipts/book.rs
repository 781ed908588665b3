use crate::*;

pub(crate) fn find_receipt(receipts: &[BidReceipt], sale_key: &SaleKey) -> Option<usize> {
    receipts
        .iter()
        .position(|receipt| &receipt.sale_key == sale_key)
}

impl Contract {
    pub(crate) fn is_encumbered(&self, bidder_id: &AccountId, receipt: &BidReceipt) -> bool {
        self.sales
            .get(&receipt.sale_key)
            .is_some_and(|sale| sale.bid.is_held_by(bidder_id))
    }

    pub(crate) fn receipt_amount(&self, bidder_id: &AccountId, sale_key: &SaleKey) -> u128 {
        self.receipt_book
            .get(bidder_id)
            .and_then(|book| book.iter().find(|receipt| &receipt.sale_key == sale_key))
            .map_or(0, |receipt| receipt.amount.0)
    }

    /// Stores `receipt`, replacing any receipt the bidder already holds for the same sale.
    /// A replaced receipt's amount goes back to the bidder's escrow.
    pub(crate) fn record_bid_receipt(
        &mut self,
        bidder_id: &AccountId,
        receipt: BidReceipt,
    ) -> Result<(), MarketplaceError> {
        let mut book = self
            .receipt_book
            .get(bidder_id)
            .cloned()
            .unwrap_or_default();
        let replaced = match find_receipt(&book, &receipt.sale_key) {
            Some(index) => Some(std::mem::replace(&mut book[index], receipt)),
            None => {
                book.push(receipt);
                None
            }
        };
        if let Some(old) = replaced {
            self.credit(bidder_id, old.amount.0)?;
        }
        self.with_rent(bidder_id, |contract| {
            contract.receipt_book.insert(bidder_id.clone(), book);
        })
    }

    /// Drops the receipt that backed an accepted bid. The funds already went to the seller.
    pub(crate) fn remove_settled_receipt(
        &mut self,
        bidder_id: &AccountId,
        sale_key: &SaleKey,
    ) -> Result<(), MarketplaceError> {
        let mut book = self.receipt_book.get(bidder_id).cloned().ok_or_else(|| {
            MarketplaceError::InternalError(format!("winning bidder {bidder_id} has no receipt book"))
        })?;
        let index = find_receipt(&book, sale_key).ok_or_else(|| {
            MarketplaceError::InternalError(format!("winning bidder {bidder_id} has no receipt for the sale"))
        })?;
        book.remove(index);
        self.store_receipt_book(bidder_id, book)
    }

    fn store_receipt_book(
        &mut self,
        bidder_id: &AccountId,
        book: Vec<BidReceipt>,
    ) -> Result<(), MarketplaceError> {
        self.with_rent(bidder_id, |contract| {
            if book.is_empty() {
                contract.receipt_book.remove(bidder_id);
            } else {
                contract.receipt_book.insert(bidder_id.clone(), book);
            }
        })
    }

    pub(crate) fn internal_claim_unencumbered_bids(
        &mut self,
        bidder_id: &AccountId,
    ) -> Result<u128, MarketplaceError> {
        let book = self
            .receipt_book
            .get(bidder_id)
            .cloned()
            .ok_or(MarketplaceError::ReceiptBookNotFound)?;
        let (kept, released): (Vec<BidReceipt>, Vec<BidReceipt>) = book
            .into_iter()
            .partition(|receipt| self.is_encumbered(bidder_id, receipt));
        let claimed = released
            .iter()
            .try_fold(0u128, |total, receipt| total.checked_add(receipt.amount.0))
            .ok_or(MarketplaceError::Overflow)?;
        let remaining_receipts = kept.len() as u32;

        self.store_receipt_book(bidder_id, kept)?;
        self.credit(bidder_id, claimed)?;

        MarketplaceEvent::BidsClaimed {
            bidder_id: bidder_id.clone(),
            amount: U128(claimed),
            remaining_receipts,
        }
        .emit();
        Ok(claimed)
    }

    pub(crate) fn total_and_unencumbered(&self, bidder_id: &AccountId) -> TotalAndUnencumbered {
        let Some(book) = self.receipt_book.get(bidder_id) else {
            return TotalAndUnencumbered::default();
        };
        let (total, unencumbered) = book.iter().fold((0u128, 0u128), |(total, free), receipt| {
            let amount = receipt.amount.0;
            let released = if self.is_encumbered(bidder_id, receipt) { 0 } else { amount };
            (total.saturating_add(amount), free.saturating_add(released))
        });
        TotalAndUnencumbered {
            total: U128(total),
            unencumbered: U128(unencumbered),
        }
    }
}

#[near]
impl Contract {
    /// Returns every receipt whose bid has been outbid or whose sale has ended to the
    /// caller's escrow. Receipts backing a standing bid are kept.
    #[handle_result]
    pub fn claim_unencumbered_bids(&mut self) -> Result<U128, MarketplaceError> {
        let bidder_id = env::predecessor_account_id();
        self.internal_claim_unencumbered_bids(&bidder_id).map(U128)
    }
}
