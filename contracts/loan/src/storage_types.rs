use soroban_sdk::{contracttype, Address, Bytes};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const LOAN_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const LOAN_LIFETIME_THRESHOLD: u32 = LOAN_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const SECONDS_PER_YEAR: u64 = 365 * 86_400;
pub(crate) const BPS_SCALE: u32 = 10_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum LoanStatus {
    None = 0,
    Active = 1,
    Repaid = 2,
    Defaulted = 3,
    // Reserved for collateral seizure; no current transition produces it.
    Liquidated = 4,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Loan {
    pub borrower: Address,
    pub asset: Address,
    pub collateral_asset: Address,
    pub principal: i128,
    pub principal_repaid: i128,
    pub collateral_amount: i128,
    pub start_ts: u64,
    pub due_ts: u64,
    pub status: LoanStatus,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BorrowRequest {
    pub asset: Address,
    pub amount: i128,
    pub collateral_asset: Address,
    pub collateral_amount: i128,
    pub duration: u64,
    pub proof: Option<Bytes>,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    Paused,
    Guard,
    NextLoanId,
    LockedCollateral,
    Loan(u64),
    ActiveLoanOf(Address),
}
