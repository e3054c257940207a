//! Reputation-gated loan ledger.
//!
//! One open position per borrower. Collateral requirements come from the
//! risk policy ladder over the borrower's reputation score; a missed
//! deadline lets anyone mark the loan defaulted for a bounty.

use crate::admin::{
    guard_enter, guard_exit, has_administrator, next_loan_id, read_administrator, read_config,
    read_locked_collateral, read_paused, write_administrator, write_config,
    write_locked_collateral, write_paused, Config,
};
use crate::error::LoanError;
use crate::event;
use crate::interest;
use crate::loan_info::{
    read_active_loan_of, read_loan, remove_active_loan_of, write_active_loan_of, write_loan,
};
use crate::reputation;
use crate::risk::{self, RiskResult};
use crate::storage_types::{
    BorrowRequest, Loan, LoanStatus, BPS_SCALE, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
};
use crate::token_interaction::{custody_balance, transfer_in, transfer_out};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[contract]
pub struct LoanLedger;

#[contractimpl]
impl LoanLedger {
    pub fn initialize(e: Env, admin: Address, config: Config) -> Result<(), LoanError> {
        if has_administrator(&e) {
            return Err(LoanError::AlreadyInitialized);
        }
        write_administrator(&e, &admin);
        write_config(&e, &config);
        write_locked_collateral(&e, 0);
        Ok(())
    }

    pub fn set_admin(e: Env, new_admin: Address) -> Result<(), LoanError> {
        let admin = read_administrator(&e);
        admin.require_auth();

        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_administrator(&e, &new_admin);
        event::emit_admin_updated(&e, &admin, &new_admin);
        Ok(())
    }

    // ========================================================================
    // Loan lifecycle
    // ========================================================================

    pub fn open(e: Env, borrower: Address, request: BorrowRequest) -> Result<u64, LoanError> {
        borrower.require_auth();
        Self::require_not_paused(&e)?;
        guard_enter(&e)?;
        let config = Self::require_config(&e)?;

        if request.amount <= 0 || request.collateral_amount < 0 {
            return Err(LoanError::ZeroAmount);
        }
        if !config.assets.contains(&request.asset) {
            return Err(LoanError::InvalidAsset);
        }
        if request.duration < config.min_duration || request.duration > config.max_duration {
            return Err(LoanError::InvalidDuration);
        }
        if read_active_loan_of(&e, &borrower).is_some() {
            return Err(LoanError::LoanAlreadyActive);
        }

        let assessment = risk::assess_borrow(&e, &config, &borrower, &request);
        if !assessment.allowed || request.amount > assessment.max_borrow {
            return Err(LoanError::BorrowNotAllowed);
        }

        if request.collateral_amount > 0 {
            transfer_in(&e, &request.collateral_asset, &borrower, request.collateral_amount);
            let locked = read_locked_collateral(&e)
                .checked_add(request.collateral_amount)
                .ok_or(LoanError::Overflow)?;
            write_locked_collateral(&e, locked);
        }

        // Escrowed collateral is already in custody here, so same-asset
        // collateral cancels out of the free-liquidity figure.
        let free = custody_balance(&e, &request.asset) - read_locked_collateral(&e);
        if free < request.amount {
            return Err(LoanError::InsufficientLiquidity);
        }

        let fee = mul_bps(request.amount, config.origination_fee_bps)?;
        transfer_out(&e, &request.asset, &borrower, request.amount - fee);
        transfer_out(&e, &request.asset, &config.treasury, fee);

        let loan_id = next_loan_id(&e);
        let now = e.ledger().timestamp();
        let loan = Loan {
            borrower: borrower.clone(),
            asset: request.asset.clone(),
            collateral_asset: request.collateral_asset.clone(),
            principal: request.amount,
            principal_repaid: 0,
            collateral_amount: request.collateral_amount,
            start_ts: now,
            due_ts: now + request.duration,
            status: LoanStatus::Active,
        };
        write_loan(&e, loan_id, &loan);
        write_active_loan_of(&e, &borrower, loan_id);

        if let Some(hook) = &config.reputation_hook {
            reputation::notify_loan_opened(&e, hook, loan_id, &borrower);
        }
        event::emit_loan_opened(
            &e,
            loan_id,
            &borrower,
            request.amount,
            request.collateral_amount,
            loan.due_ts,
        );

        guard_exit(&e);
        Ok(loan_id)
    }

    pub fn repay(
        e: Env,
        borrower: Address,
        loan_id: u64,
        amount: i128,
    ) -> Result<(i128, i128, bool), LoanError> {
        borrower.require_auth();
        Self::require_not_paused(&e)?;
        guard_enter(&e)?;
        let config = Self::require_config(&e)?;

        if amount <= 0 {
            return Err(LoanError::ZeroAmount);
        }
        let mut loan = read_loan(&e, loan_id).ok_or(LoanError::LoanNotFound)?;
        if loan.status != LoanStatus::Active {
            return Err(LoanError::LoanNotActive);
        }
        if loan.borrower != borrower {
            return Err(LoanError::NotBorrower);
        }

        transfer_in(&e, &loan.asset, &borrower, amount);
        loan.principal_repaid = loan
            .principal_repaid
            .checked_add(amount)
            .ok_or(LoanError::Overflow)?;

        let now = e.ledger().timestamp();
        let total_debt = interest::debt_with_penalty(
            loan.principal,
            config.apr_bps,
            config.penalty_apr_bps,
            loan.start_ts,
            loan.due_ts,
            now,
        )?;

        let mut paid_net = amount;
        let fully_repaid = loan.principal_repaid >= total_debt;
        if fully_repaid {
            let overpay = loan.principal_repaid - total_debt;
            if overpay > 0 {
                transfer_out(&e, &loan.asset, &borrower, overpay);
                paid_net = amount - overpay;
            }
            loan.principal_repaid = total_debt;
            loan.status = LoanStatus::Repaid;
            remove_active_loan_of(&e, &borrower);

            let locked = read_locked_collateral(&e)
                .checked_sub(loan.collateral_amount)
                .ok_or(LoanError::Overflow)?;
            write_locked_collateral(&e, locked);
            transfer_out(&e, &loan.collateral_asset, &borrower, loan.collateral_amount);
            event::emit_collateral_released(&e, loan_id, &borrower, loan.collateral_amount);

            let protocol_fee = mul_bps(total_debt - loan.principal, config.protocol_fee_bps)?;
            transfer_out(&e, &loan.asset, &config.treasury, protocol_fee);
        }
        write_loan(&e, loan_id, &loan);

        if let Some(hook) = &config.reputation_hook {
            reputation::notify_loan_repaid(
                &e,
                hook,
                loan_id,
                &borrower,
                paid_net,
                loan.principal_repaid,
                total_debt,
                fully_repaid,
            );
        }
        event::emit_loan_repaid(
            &e,
            loan_id,
            &borrower,
            paid_net,
            loan.principal_repaid,
            fully_repaid,
        );

        guard_exit(&e);
        Ok((paid_net, loan.principal_repaid, fully_repaid))
    }

    /// Permissionless: any keeper may flag a loan past its deadline. The
    /// bounty comes out of the escrowed collateral; the remainder stays in
    /// custody.
    pub fn mark_default(e: Env, keeper: Address, loan_id: u64) -> Result<(), LoanError> {
        keeper.require_auth();
        Self::require_not_paused(&e)?;
        guard_enter(&e)?;
        let config = Self::require_config(&e)?;

        let mut loan = read_loan(&e, loan_id).ok_or(LoanError::LoanNotFound)?;
        if loan.status != LoanStatus::Active {
            return Err(LoanError::LoanNotActive);
        }
        let now = e.ledger().timestamp();
        if now <= loan.due_ts + config.grace_period {
            return Err(LoanError::NotPastDue);
        }

        loan.status = LoanStatus::Defaulted;
        remove_active_loan_of(&e, &loan.borrower);
        let locked = read_locked_collateral(&e)
            .checked_sub(loan.collateral_amount)
            .ok_or(LoanError::Overflow)?;
        write_locked_collateral(&e, locked);

        let bounty = mul_bps(loan.collateral_amount, config.bounty_bps)?;
        transfer_out(&e, &loan.collateral_asset, &keeper, bounty);
        write_loan(&e, loan_id, &loan);

        if let Some(hook) = &config.reputation_hook {
            reputation::notify_loan_defaulted(&e, hook, loan_id, &loan.borrower);
        }
        event::emit_loan_defaulted(&e, loan_id, &loan.borrower, &keeper, bounty);

        guard_exit(&e);
        Ok(())
    }

    // ========================================================================
    // Views
    // ========================================================================

    pub fn get_loan(e: Env, loan_id: u64) -> Result<Loan, LoanError> {
        read_loan(&e, loan_id).ok_or(LoanError::LoanNotFound)
    }

    pub fn active_loan_of(e: Env, borrower: Address) -> Option<u64> {
        read_active_loan_of(&e, &borrower)
    }

    /// Outstanding debt right now. Zero for any loan that is no longer
    /// `Active`; nothing accrues after closure.
    pub fn get_debt(e: Env, loan_id: u64) -> Result<i128, LoanError> {
        let config = Self::require_config(&e)?;
        let loan = read_loan(&e, loan_id).ok_or(LoanError::LoanNotFound)?;
        if loan.status != LoanStatus::Active {
            return Ok(0);
        }
        let total = interest::debt_with_penalty(
            loan.principal,
            config.apr_bps,
            config.penalty_apr_bps,
            loan.start_ts,
            loan.due_ts,
            e.ledger().timestamp(),
        )?;
        Ok((total - loan.principal_repaid).max(0))
    }

    pub fn assess_borrow(
        e: Env,
        borrower: Address,
        request: BorrowRequest,
    ) -> Result<RiskResult, LoanError> {
        let config = Self::require_config(&e)?;
        Ok(risk::assess_borrow(&e, &config, &borrower, &request))
    }

    pub fn collateral_ratio_of(e: Env, borrower: Address) -> Result<u32, LoanError> {
        let config = Self::require_config(&e)?;
        let score = risk::borrower_score(&e, &config, &borrower);
        Ok(risk::collateral_ratio_bps(&config, score))
    }

    pub fn is_defaulter(e: Env, borrower: Address) -> Result<bool, LoanError> {
        let config = Self::require_config(&e)?;
        Ok(risk::is_defaulter(&e, &config, &borrower))
    }

    pub fn locked_collateral(e: Env) -> i128 {
        read_locked_collateral(&e)
    }

    pub fn free_liquidity(e: Env, asset: Address) -> i128 {
        custody_balance(&e, &asset) - read_locked_collateral(&e)
    }

    pub fn get_config(e: Env) -> Result<Config, LoanError> {
        Self::require_config(&e)
    }

    pub fn is_paused(e: Env) -> bool {
        read_paused(&e)
    }

    // ========================================================================
    // Admin
    // ========================================================================

    pub fn pause(e: Env) -> Result<(), LoanError> {
        Self::require_admin(&e)?;
        write_paused(&e, true);
        event::emit_paused(&e, true);
        Ok(())
    }

    pub fn unpause(e: Env) -> Result<(), LoanError> {
        Self::require_admin(&e)?;
        write_paused(&e, false);
        event::emit_paused(&e, false);
        Ok(())
    }

    pub fn set_oracle(e: Env, oracle: Option<Address>) -> Result<(), LoanError> {
        update_config(&e, |config| config.oracle = oracle)
    }

    pub fn set_reputation(
        e: Env,
        store: Option<Address>,
        hook: Option<Address>,
    ) -> Result<(), LoanError> {
        update_config(&e, |config| {
            config.reputation = store;
            config.reputation_hook = hook;
        })
    }

    pub fn set_verifier(
        e: Env,
        verifier: Option<Address>,
        require_proof: bool,
    ) -> Result<(), LoanError> {
        update_config(&e, |config| {
            config.verifier = verifier;
            config.require_proof = require_proof;
        })
    }

    pub fn set_rates(e: Env, apr_bps: u32, penalty_apr_bps: u32) -> Result<(), LoanError> {
        update_config(&e, |config| {
            config.apr_bps = apr_bps;
            config.penalty_apr_bps = penalty_apr_bps;
        })
    }

    pub fn set_fees(
        e: Env,
        origination_fee_bps: u32,
        protocol_fee_bps: u32,
        bounty_bps: u32,
    ) -> Result<(), LoanError> {
        update_config(&e, |config| {
            config.origination_fee_bps = origination_fee_bps;
            config.protocol_fee_bps = protocol_fee_bps;
            config.bounty_bps = bounty_bps;
        })
    }

    pub fn set_risk_params(
        e: Env,
        max_ratio_bps: u32,
        score_free: u32,
        no_collateral_ceiling: i128,
    ) -> Result<(), LoanError> {
        update_config(&e, |config| {
            config.max_ratio_bps = max_ratio_bps;
            config.score_free = score_free;
            config.no_collateral_ceiling = no_collateral_ceiling;
        })
    }

    pub fn set_duration_bounds(
        e: Env,
        min_duration: u64,
        max_duration: u64,
        grace_period: u64,
    ) -> Result<(), LoanError> {
        update_config(&e, |config| {
            config.min_duration = min_duration;
            config.max_duration = max_duration;
            config.grace_period = grace_period;
        })
    }

    pub fn set_assets(
        e: Env,
        assets: Vec<Address>,
        collateral_assets: Vec<Address>,
    ) -> Result<(), LoanError> {
        update_config(&e, |config| {
            config.assets = assets;
            config.collateral_assets = collateral_assets;
        })
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn require_admin(e: &Env) -> Result<Address, LoanError> {
        if !has_administrator(e) {
            return Err(LoanError::NotInitialized);
        }
        let admin = read_administrator(e);
        admin.require_auth();
        Ok(admin)
    }

    fn require_config(e: &Env) -> Result<Config, LoanError> {
        read_config(e).ok_or(LoanError::NotInitialized)
    }

    fn require_not_paused(e: &Env) -> Result<(), LoanError> {
        if read_paused(e) {
            return Err(LoanError::ContractPaused);
        }
        Ok(())
    }
}

fn update_config(e: &Env, apply: impl FnOnce(&mut Config)) -> Result<(), LoanError> {
    LoanLedger::require_admin(e)?;
    let mut config = LoanLedger::require_config(e)?;
    apply(&mut config);
    write_config(e, &config);
    event::emit_config_updated(e);
    Ok(())
}

fn mul_bps(amount: i128, bps: u32) -> Result<i128, LoanError> {
    if amount < 0 {
        return Err(LoanError::Overflow);
    }
    Ok(((amount as u128)
        .checked_mul(bps as u128)
        .ok_or(LoanError::Overflow)?
        / (BPS_SCALE as u128)) as i128)
}
