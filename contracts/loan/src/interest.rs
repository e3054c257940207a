//! Interest accrual over loan positions.
//!
//! Simple (non-compounding) interest, accrued per second against an annual
//! rate in basis points. Two regimes: the contractual rate up to the due
//! date, and a penalty rate for every second past it. All divisions
//! truncate toward zero; multiplication happens before division so the
//! only precision loss is the final truncation.

use crate::error::LoanError;
use crate::storage_types::{BPS_SCALE, SECONDS_PER_YEAR};

/// Interest owed on `principal` at `rate_bps` APR over `seconds`.
fn accrued(principal: i128, rate_bps: u32, seconds: u64) -> Result<i128, LoanError> {
    if principal <= 0 || rate_bps == 0 || seconds == 0 {
        return Ok(0);
    }
    let num = (principal as u128)
        .checked_mul(rate_bps as u128)
        .ok_or(LoanError::Overflow)?
        .checked_mul(seconds as u128)
        .ok_or(LoanError::Overflow)?;
    let den = (SECONDS_PER_YEAR as u128) * (BPS_SCALE as u128);
    Ok((num / den) as i128)
}

/// Principal plus interest accrued between `start_ts` and `now_ts`.
pub fn debt(principal: i128, apr_bps: u32, start_ts: u64, now_ts: u64) -> Result<i128, LoanError> {
    if principal <= 0 || now_ts <= start_ts {
        return Ok(principal);
    }
    principal
        .checked_add(accrued(principal, apr_bps, now_ts - start_ts)?)
        .ok_or(LoanError::Overflow)
}

/// Principal plus interest, with the penalty rate applied to every second
/// past the due date. The due date is clamped to `start_ts` so a
/// misconfigured `due_ts < start_ts` cannot produce a negative interval.
pub fn debt_with_penalty(
    principal: i128,
    apr_bps: u32,
    penalty_apr_bps: u32,
    start_ts: u64,
    due_ts: u64,
    now_ts: u64,
) -> Result<i128, LoanError> {
    if principal <= 0 || now_ts <= start_ts {
        return Ok(principal);
    }

    let effective_due = due_ts.max(start_ts);
    if now_ts <= effective_due {
        return debt(principal, apr_bps, start_ts, now_ts);
    }

    let base = accrued(principal, apr_bps, effective_due - start_ts)?;
    let late = accrued(principal, penalty_apr_bps, now_ts - effective_due)?;
    principal
        .checked_add(base)
        .ok_or(LoanError::Overflow)?
        .checked_add(late)
        .ok_or(LoanError::Overflow)
}
