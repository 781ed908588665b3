
// --- Unit Tests ---
pub mod unit {
    pub mod accept_bid_test;
    pub mod admin_test;
    pub mod bid_test;
    pub mod escrow_test;
    pub mod payout_test;
    pub mod receipt_test;
    pub mod sale_test;
    pub mod scenario_test;
    pub mod sponsor_test;
}
