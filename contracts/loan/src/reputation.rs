use soroban_sdk::{Address, Env, IntoVal, Symbol};

/// Reads the borrower's reputation score from the store.
pub fn score_of(env: &Env, store: &Address, addr: &Address) -> u32 {
    let fn_name = Symbol::new(env, "score_of");
    let args = (addr.clone(),).into_val(env);
    env.invoke_contract(store, &fn_name, args)
}

/// True iff the store reports a default badge for `addr`.
pub fn has_badge(env: &Env, store: &Address, addr: &Address) -> bool {
    let fn_name = Symbol::new(env, "has_badge");
    let args = (addr.clone(),).into_val(env);
    env.invoke_contract(store, &fn_name, args)
}

// Hook notifications are strict: the hook rejecting traps the invocation
// and the host rolls the triggering ledger operation back with it.

pub fn notify_loan_opened(env: &Env, hook: &Address, loan_id: u64, borrower: &Address) {
    let fn_name = Symbol::new(env, "on_loan_opened");
    let args = (loan_id, borrower.clone()).into_val(env);
    let _: () = env.invoke_contract(hook, &fn_name, args);
}

pub fn notify_loan_repaid(
    env: &Env,
    hook: &Address,
    loan_id: u64,
    borrower: &Address,
    paid: i128,
    total_repaid: i128,
    total_debt: i128,
    fully_repaid: bool,
) {
    let fn_name = Symbol::new(env, "on_loan_repaid");
    let args = (
        loan_id,
        borrower.clone(),
        paid,
        total_repaid,
        total_debt,
        fully_repaid,
    )
        .into_val(env);
    let _: () = env.invoke_contract(hook, &fn_name, args);
}

pub fn notify_loan_defaulted(env: &Env, hook: &Address, loan_id: u64, borrower: &Address) {
    let fn_name = Symbol::new(env, "on_loan_defaulted");
    let args = (loan_id, borrower.clone()).into_val(env);
    let _: () = env.invoke_contract(hook, &fn_name, args);
}
