//! Reputation score and default-badge ledger.
//!
//! Scores only ever rise through the loan-ledger hook on fully repaid
//! loans; a default mints a permanent badge. The registered ledger is the
//! only caller the hook surface accepts.

use crate::admin::{
    has_administrator, read_administrator, read_ledger, read_repay_reward, write_administrator,
    write_ledger, write_repay_reward,
};
use crate::error::ReputationError;
use crate::score::{read_badge, read_score, write_badge, write_score};
use crate::storage_types::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env};

#[contract]
pub struct Reputation;

#[contractimpl]
impl Reputation {
    pub fn initialize(
        e: Env,
        admin: Address,
        ledger: Address,
        repay_reward: u32,
    ) -> Result<(), ReputationError> {
        if has_administrator(&e) {
            return Err(ReputationError::AlreadyInitialized);
        }
        write_administrator(&e, &admin);
        write_ledger(&e, &ledger);
        write_repay_reward(&e, repay_reward);
        Ok(())
    }

    pub fn set_admin(e: Env, new_admin: Address) -> Result<(), ReputationError> {
        let admin = Self::require_admin(&e)?;

        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_administrator(&e, &new_admin);
        e.events()
            .publish((symbol_short!("adm_set"),), (admin, new_admin));
        Ok(())
    }

    pub fn set_ledger(e: Env, ledger: Address) -> Result<(), ReputationError> {
        Self::require_admin(&e)?;
        write_ledger(&e, &ledger);
        Ok(())
    }

    pub fn set_repay_reward(e: Env, repay_reward: u32) -> Result<(), ReputationError> {
        Self::require_admin(&e)?;
        write_repay_reward(&e, repay_reward);
        Ok(())
    }

    // ========================================================================
    // Store
    // ========================================================================

    pub fn score_of(e: Env, addr: Address) -> u32 {
        read_score(&e, &addr)
    }

    pub fn has_badge(e: Env, addr: Address) -> bool {
        read_badge(&e, &addr)
    }

    pub fn set_score(e: Env, addr: Address, score: u32) -> Result<(), ReputationError> {
        Self::require_admin(&e)?;
        write_score(&e, &addr, score);
        e.events()
            .publish((symbol_short!("score"), addr), score);
        Ok(())
    }

    pub fn mint_badge(e: Env, addr: Address) -> Result<(), ReputationError> {
        Self::require_admin(&e)?;
        write_badge(&e, &addr);
        e.events().publish((symbol_short!("badge"), addr), ());
        Ok(())
    }

    // ========================================================================
    // Loan-ledger hook
    // ========================================================================

    pub fn on_loan_opened(e: Env, _loan_id: u64, _borrower: Address) -> Result<(), ReputationError> {
        Self::require_ledger(&e)?;
        Ok(())
    }

    pub fn on_loan_repaid(
        e: Env,
        _loan_id: u64,
        borrower: Address,
        _paid: i128,
        _total_repaid: i128,
        _total_debt: i128,
        fully_repaid: bool,
    ) -> Result<(), ReputationError> {
        Self::require_ledger(&e)?;
        if fully_repaid {
            let score = read_score(&e, &borrower)
                .checked_add(read_repay_reward(&e))
                .ok_or(ReputationError::Overflow)?;
            write_score(&e, &borrower, score);
            e.events()
                .publish((symbol_short!("score"), borrower), score);
        }
        Ok(())
    }

    pub fn on_loan_defaulted(
        e: Env,
        _loan_id: u64,
        borrower: Address,
    ) -> Result<(), ReputationError> {
        Self::require_ledger(&e)?;
        write_badge(&e, &borrower);
        e.events().publish((symbol_short!("badge"), borrower), ());
        Ok(())
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn require_admin(e: &Env) -> Result<Address, ReputationError> {
        if !has_administrator(e) {
            return Err(ReputationError::NotInitialized);
        }
        let admin = read_administrator(e);
        admin.require_auth();
        Ok(admin)
    }

    fn require_ledger(e: &Env) -> Result<Address, ReputationError> {
        let ledger = read_ledger(e).ok_or(ReputationError::NotInitialized)?;
        ledger.require_auth();
        Ok(ledger)
    }
}
