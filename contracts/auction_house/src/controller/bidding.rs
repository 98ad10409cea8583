use cascade::math::safe_math::SafeMath;
use soroban_sdk::Env;

use crate::errors::ErrorCode;
use crate::storage::{Auction, Config};

/// End of the bidding window.
pub fn deadline(env: &Env, auction: &Auction) -> Result<u64, ErrorCode> {
    Ok(auction.start_ts().safe_add(auction.duration, env)?)
}

/// Extension cap for a fresh auction.
pub fn max_duration(env: &Env, config: &Config, duration: u64) -> Result<u64, ErrorCode> {
    Ok(duration.safe_add(config.grace_period, env)?)
}

/// Smallest acceptable next bid under the configured minimum increment.
/// A first bid has no floor beyond being positive; the reserve price is
/// only enforced at cancellation.
pub fn min_next_bid(env: &Env, config: &Config, current_bid: i128) -> Result<i128, ErrorCode> {
    if current_bid == 0 {
        return Ok(1);
    }
    let raise = current_bid
        .safe_mul(i128::from(config.min_increment_numerator), env)?
        .safe_div(i128::from(config.min_increment_denominator), env)?;
    Ok(current_bid.safe_add(raise, env)?)
}

/// Soft-close extension: when the bid at `now` landed inside the time
/// buffer, returns the duration that makes the auction end exactly
/// `time_buffer` after `now`, clamped to `max_duration`. `None` when no
/// change is needed. The buffer is added to `now` before the start is
/// subtracted; the clamp arithmetic relies on that order.
pub fn extend_duration(
    env: &Env,
    config: &Config,
    auction: &Auction,
    now: u64,
) -> Result<Option<u64>, ErrorCode> {
    let deadline = deadline(env, auction)?;
    let remaining = deadline.safe_sub(now, env)?;
    if remaining >= config.time_buffer {
        return Ok(None);
    }

    let target = now
        .safe_add(config.time_buffer, env)?
        .safe_sub(auction.start_ts(), env)?;
    let new_duration = target.min(auction.max_duration);
    if new_duration == auction.duration {
        return Ok(None);
    }
    Ok(Some(new_duration))
}
