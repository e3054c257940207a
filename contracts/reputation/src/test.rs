#![cfg(test)]
extern crate std;

use crate::contract::Reputation;
use crate::error::ReputationError;
use crate::ReputationClient;
use soroban_sdk::{testutils::Address as _, Address, Env};

fn create_reputation<'a>(e: &Env, admin: &Address, ledger: &Address) -> ReputationClient<'a> {
    let client = ReputationClient::new(e, &e.register_contract(None, Reputation {}));
    client.initialize(admin, ledger, &100);
    client
}

#[test]
fn test_initialize() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let ledger = Address::generate(&e);
    let reputation = create_reputation(&e, &admin, &ledger);

    assert_eq!(
        reputation.try_initialize(&admin, &ledger, &100),
        Err(Ok(ReputationError::AlreadyInitialized))
    );
}

#[test]
fn test_score_and_badge_defaults() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let ledger = Address::generate(&e);
    let user = Address::generate(&e);
    let reputation = create_reputation(&e, &admin, &ledger);

    assert_eq!(reputation.score_of(&user), 0);
    assert!(!reputation.has_badge(&user));
}

#[test]
fn test_admin_writes() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let ledger = Address::generate(&e);
    let user = Address::generate(&e);
    let reputation = create_reputation(&e, &admin, &ledger);

    reputation.set_score(&user, &250);
    assert_eq!(reputation.score_of(&user), 250);

    reputation.mint_badge(&user);
    assert!(reputation.has_badge(&user));
}

#[test]
fn test_full_repayment_raises_score() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let ledger = Address::generate(&e);
    let borrower = Address::generate(&e);
    let reputation = create_reputation(&e, &admin, &ledger);

    // Partial repayment leaves the score untouched.
    reputation.on_loan_repaid(&1, &borrower, &500, &500, &1000, &false);
    assert_eq!(reputation.score_of(&borrower), 0);

    reputation.on_loan_repaid(&1, &borrower, &500, &1000, &1000, &true);
    assert_eq!(reputation.score_of(&borrower), 100);

    reputation.on_loan_repaid(&2, &borrower, &1000, &1000, &1000, &true);
    assert_eq!(reputation.score_of(&borrower), 200);
}

#[test]
fn test_default_mints_badge() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let ledger = Address::generate(&e);
    let borrower = Address::generate(&e);
    let reputation = create_reputation(&e, &admin, &ledger);

    reputation.on_loan_opened(&1, &borrower);
    assert!(!reputation.has_badge(&borrower));

    reputation.on_loan_defaulted(&1, &borrower);
    assert!(reputation.has_badge(&borrower));
}

#[test]
#[should_panic]
fn test_hook_rejects_unregistered_caller() {
    let e = Env::default();

    let admin = Address::generate(&e);
    let ledger = Address::generate(&e);
    let borrower = Address::generate(&e);

    // No auth mocking: the hook requires the registered ledger's
    // authorization, which nobody provides here.
    let reputation = ReputationClient::new(&e, &e.register_contract(None, Reputation {}));
    e.mock_all_auths();
    reputation.initialize(&admin, &ledger, &100);
    e.set_auths(&[]);

    reputation.on_loan_defaulted(&1, &borrower);
}
