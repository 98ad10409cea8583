mod claim_ledger;

pub use claim_ledger::ClaimLedgerClient;
