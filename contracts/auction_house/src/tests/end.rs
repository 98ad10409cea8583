extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};

use super::setup::{claim_stack, deploy_testbed, seed_claims, ONE_DAY};

const COLLATERAL: u128 = 11;
const START: u64 = 100_000;

#[test]
fn ended_auction_settles_to_the_highest_bidder() {
    let env = Env::default();
    env.ledger().with_mut(|li| li.timestamp = START);
    let t = deploy_testbed(&env, COLLATERAL);

    let bidder = Address::generate(&env);
    t.token_admin.mint(&bidder, &1_000);

    let claims = seed_claims(&env, &t.ledger, &[(1, 500)]);
    t.house.create_auction(
        &t.liquidator,
        &COLLATERAL,
        &600,
        &t.initiator,
        &0,
        &100,
        &100,
        &claims,
    );
    t.house.create_bid(&bidder, &COLLATERAL, &120);

    env.ledger().with_mut(|li| li.timestamp = START + ONE_DAY);
    let winner = t.house.end_auction(&t.liquidator, &COLLATERAL);

    assert_eq!(winner, bidder);
    assert!(!t.house.auction_exists(&COLLATERAL));
    // the uncovered remainder of the stack is written off by the ledger
    assert!(t.ledger.was_flushed(&COLLATERAL));
}

#[test]
fn auction_with_no_bids_reverts_to_the_initiator() {
    let env = Env::default();
    env.ledger().with_mut(|li| li.timestamp = START);
    let t = deploy_testbed(&env, COLLATERAL);

    t.house.create_auction(
        &t.liquidator,
        &COLLATERAL,
        &600,
        &t.initiator,
        &0,
        &100,
        &100,
        &claim_stack(&env, &[]),
    );

    // no bid ever landed: the clock ran from creation
    env.ledger().with_mut(|li| li.timestamp = START + 601);
    let winner = t.house.end_auction(&t.liquidator, &COLLATERAL);

    assert_eq!(winner, t.initiator);
    assert!(!t.house.auction_exists(&COLLATERAL));
}

#[test]
#[should_panic(expected = "Error(Contract, #7)")]
fn ending_before_the_deadline_fails() {
    let env = Env::default();
    env.ledger().with_mut(|li| li.timestamp = START);
    let t = deploy_testbed(&env, COLLATERAL);

    let bidder = Address::generate(&env);
    t.token_admin.mint(&bidder, &1_000);

    t.house.create_auction(
        &t.liquidator,
        &COLLATERAL,
        &600,
        &t.initiator,
        &0,
        &100,
        &100,
        &claim_stack(&env, &[]),
    );
    t.house.create_bid(&bidder, &COLLATERAL, &120);

    t.house.end_auction(&t.liquidator, &COLLATERAL);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn ending_twice_fails() {
    let env = Env::default();
    env.ledger().with_mut(|li| li.timestamp = START);
    let t = deploy_testbed(&env, COLLATERAL);

    t.house.create_auction(
        &t.liquidator,
        &COLLATERAL,
        &600,
        &t.initiator,
        &0,
        &100,
        &100,
        &claim_stack(&env, &[]),
    );

    env.ledger().with_mut(|li| li.timestamp = START + 601);
    t.house.end_auction(&t.liquidator, &COLLATERAL);
    t.house.end_auction(&t.liquidator, &COLLATERAL);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn unauthorized_caller_cannot_end() {
    let env = Env::default();
    env.ledger().with_mut(|li| li.timestamp = START);
    let t = deploy_testbed(&env, COLLATERAL);

    let rando = Address::generate(&env);

    t.house.create_auction(
        &t.liquidator,
        &COLLATERAL,
        &600,
        &t.initiator,
        &0,
        &100,
        &100,
        &claim_stack(&env, &[]),
    );

    env.ledger().with_mut(|li| li.timestamp = START + 601);
    t.house.end_auction(&rando, &COLLATERAL);
}

#[test]
fn collateral_id_is_reusable_after_the_auction_ends() {
    let env = Env::default();
    env.ledger().with_mut(|li| li.timestamp = START);
    let t = deploy_testbed(&env, COLLATERAL);

    t.house.create_auction(
        &t.liquidator,
        &COLLATERAL,
        &600,
        &t.initiator,
        &0,
        &100,
        &100,
        &claim_stack(&env, &[]),
    );

    env.ledger().with_mut(|li| li.timestamp = START + 601);
    t.house.end_auction(&t.liquidator, &COLLATERAL);

    t.house.create_auction(
        &t.liquidator,
        &COLLATERAL,
        &900,
        &t.initiator,
        &0,
        &100,
        &200,
        &claim_stack(&env, &[]),
    );
    assert_eq!(t.house.get_auction_data(&COLLATERAL).reserve_price, 200);
}

#[test]
#[should_panic(expected = "Error(Contract, #9)")]
fn reserve_gated_policy_blocks_under_reserve_settlement() {
    let env = Env::default();
    env.ledger().with_mut(|li| li.timestamp = START);
    let t = deploy_testbed(&env, COLLATERAL);

    let bidder = Address::generate(&env);
    t.token_admin.mint(&bidder, &1_000);

    t.house.update_config(
        &t.admin,
        &None,
        &None,
        &None,
        &None,
        &None,
        &None,
        &Some(true),
    );
    t.house.create_auction(
        &t.liquidator,
        &COLLATERAL,
        &600,
        &t.initiator,
        &0,
        &100,
        &100,
        &claim_stack(&env, &[]),
    );
    t.house.create_bid(&bidder, &COLLATERAL, &50);

    env.ledger().with_mut(|li| li.timestamp = START + ONE_DAY);
    t.house.end_auction(&t.liquidator, &COLLATERAL);
}

#[test]
fn reserve_gated_policy_allows_settlement_at_or_above_reserve() {
    let env = Env::default();
    env.ledger().with_mut(|li| li.timestamp = START);
    let t = deploy_testbed(&env, COLLATERAL);

    let bidder = Address::generate(&env);
    t.token_admin.mint(&bidder, &1_000);

    t.house.update_config(
        &t.admin,
        &None,
        &None,
        &None,
        &None,
        &None,
        &None,
        &Some(true),
    );
    t.house.create_auction(
        &t.liquidator,
        &COLLATERAL,
        &600,
        &t.initiator,
        &0,
        &100,
        &100,
        &claim_stack(&env, &[]),
    );
    t.house.create_bid(&bidder, &COLLATERAL, &150);

    env.ledger().with_mut(|li| li.timestamp = START + ONE_DAY);
    assert_eq!(t.house.end_auction(&t.liquidator, &COLLATERAL), bidder);
}
