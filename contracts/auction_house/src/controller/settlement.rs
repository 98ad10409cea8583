use cascade::math::safe_math::SafeMath;
use cascade::validate;
use soroban_sdk::{Address, Env};

use crate::errors::ErrorCode;
use crate::interfaces::ClaimLedgerClient;
use crate::storage::{utils, Auction, Config};

/// Distribute an incoming payment across the initiator fee, the claim
/// stack (senior claims first) and the residual owner of the collateral.
///
/// The fee is skimmed before any claim is touched. Every non-zero payment
/// against a claim is forwarded to the claim ledger immediately and the
/// ledger's residual balance is persisted back onto the auction record.
/// Whatever is left once the stack is exhausted goes to the residual
/// owner. Returns the amount consumed by the fee and the claims.
pub fn handle_incoming_payment(
    env: &Env,
    config: &Config,
    collateral_id: u128,
    auction: &mut Auction,
    payer: &Address,
    amount: i128,
) -> Result<i128, ErrorCode> {
    validate!(
        env,
        amount > 0,
        ErrorCode::ZeroPayment,
        "cannot route a payment of {} into the waterfall",
        amount
    )?;

    let fee = amount
        .safe_mul(i128::from(auction.initiator_fee_numerator), env)?
        .safe_div(i128::from(auction.initiator_fee_denominator), env)?;
    utils::transfer_token(env, &config.bid_token, payer, &auction.initiator, fee);

    let ledger = ClaimLedgerClient::new(env, &config.claim_ledger);
    let mut remaining = amount.safe_sub(fee, env)?;
    let mut consumed = fee;

    while remaining > 0 {
        let claim = match auction.claims.first() {
            Some(claim) => claim,
            None => break,
        };
        if claim.amount <= 0 {
            auction.claims.pop_front();
            continue;
        }

        let payment = remaining.min(claim.amount);
        utils::transfer_token(env, &config.bid_token, payer, &config.claim_ledger, payment);
        let outstanding = ledger.apply_payment(&collateral_id, &claim.claim_id, &payment);

        remaining = remaining.safe_sub(payment, env)?;
        consumed = consumed.safe_add(payment, env)?;

        if outstanding == 0 {
            auction.claims.pop_front();
        } else {
            let mut updated = claim;
            updated.amount = outstanding;
            auction.claims.set(0, updated);
        }
    }

    if remaining > 0 {
        let owner = ledger.residual_owner(&collateral_id);
        utils::transfer_token(env, &config.bid_token, payer, &owner, remaining);
    }

    Ok(consumed)
}

#[cfg(test)]
mod test {
    extern crate std;

    use soroban_sdk::{testutils::Address as _, vec, Address, Env};

    use super::*;
    use crate::storage::Claim;

    #[test]
    fn zero_payment_is_rejected_before_any_transfer() {
        let env = Env::default();
        let config = Config {
            admin: Address::generate(&env),
            bid_token: Address::generate(&env),
            claim_ledger: Address::generate(&env),
            liquidator_accounts: vec![&env, Address::generate(&env)],
            time_buffer: 900,
            min_increment_numerator: 5,
            min_increment_denominator: 100,
            grace_period: 86400,
            end_requires_reserve: false,
        };
        let mut auction = Auction {
            created_ts: 1_000,
            first_bid_ts: 0,
            duration: 600,
            max_duration: 87_000,
            reserve_price: 100,
            current_bid: 0,
            bidder: None,
            initiator: Address::generate(&env),
            initiator_fee_numerator: 0,
            initiator_fee_denominator: 100,
            claims: vec![
                &env,
                Claim {
                    claim_id: 1,
                    amount: 60,
                },
            ],
        };
        let payer = Address::generate(&env);

        assert_eq!(
            handle_incoming_payment(&env, &config, 1, &mut auction, &payer, 0),
            Err(ErrorCode::ZeroPayment)
        );
        assert_eq!(
            handle_incoming_payment(&env, &config, 1, &mut auction, &payer, -5),
            Err(ErrorCode::ZeroPayment)
        );
        // the stack is untouched
        assert_eq!(auction.claims.len(), 1);
    }
}
