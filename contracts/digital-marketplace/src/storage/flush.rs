use crate::*;

impl Contract {
    // Storage accounting invariant: flush deferred writes before measuring usage.
    pub(crate) fn flush_state(&mut self) {
        self.deposited.flush();
        self.sales.flush();
        self.receipt_book.flush();
        self.sponsored_assets.flush();
        self.clawback_assets.flush();
        self.stranded_payouts.flush();
    }

    #[inline]
    pub(crate) fn storage_usage_flushed(&mut self) -> u64 {
        self.flush_state();
        env::storage_usage()
    }
}
