use soroban_sdk::{symbol_short, Address, Env};

// Event Emission
/// Emits an event when a loan is opened.
pub fn emit_loan_opened(
    env: &Env,
    loan_id: u64,
    borrower: &Address,
    amount: i128,
    collateral_amount: i128,
    due_ts: u64,
) {
    env.events().publish(
        (symbol_short!("open"), loan_id),
        (borrower.clone(), amount, collateral_amount, due_ts),
    );
}

/// Emits an event when a payment is credited toward a loan.
pub fn emit_loan_repaid(
    env: &Env,
    loan_id: u64,
    borrower: &Address,
    paid: i128,
    total_repaid: i128,
    fully_repaid: bool,
) {
    env.events().publish(
        (symbol_short!("repay"), loan_id),
        (borrower.clone(), paid, total_repaid, fully_repaid),
    );
}

/// Emits an event when escrowed collateral is returned to the borrower.
pub fn emit_collateral_released(env: &Env, loan_id: u64, borrower: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("col_rel"), loan_id),
        (borrower.clone(), amount),
    );
}

/// Emits an event when a loan is marked defaulted.
pub fn emit_loan_defaulted(
    env: &Env,
    loan_id: u64,
    borrower: &Address,
    keeper: &Address,
    bounty: i128,
) {
    env.events().publish(
        (symbol_short!("default"), loan_id),
        (borrower.clone(), keeper.clone(), bounty),
    );
}

/// Emits an event when the ledger is paused or unpaused.
pub fn emit_paused(env: &Env, paused: bool) {
    env.events().publish((symbol_short!("paused"),), paused);
}

/// Emits an event when the configuration is replaced or a setter runs.
pub fn emit_config_updated(env: &Env) {
    env.events().publish((symbol_short!("cfg_set"),), ());
}

/// Emits an event when the administrator is replaced.
pub fn emit_admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (symbol_short!("adm_set"),),
        (old_admin.clone(), new_admin.clone()),
    );
}
