use soroban_sdk::{contractclient, Address, Env};

/// Interface of the external claim ledger that tracks, prices and removes
/// the individual claims against each collateral asset. The auction house
/// only ever talks to it through this client.
#[contractclient(name = "ClaimLedgerClient")]
pub trait ClaimLedgerInterface {
    /// Apply `amount` against a single outstanding claim and return the
    /// amount still outstanding on that claim afterwards.
    fn apply_payment(env: Env, collateral_id: u128, claim_id: u64, amount: i128) -> i128;

    /// Remove every claim still tied to the collateral. Amounts the
    /// winning bid did not cover are absorbed by the claim holders.
    fn flush_claims(env: Env, collateral_id: u128);

    /// Current legal owner of the collateral, entitled to whatever is left
    /// once all claims are satisfied.
    fn residual_owner(env: Env, collateral_id: u128) -> Address;
}
