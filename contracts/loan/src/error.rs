use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LoanError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    ContractPaused = 3,
    Reentrancy = 4,
    ZeroAmount = 10,
    InvalidDuration = 11,
    InvalidAsset = 12,
    LoanAlreadyActive = 20,
    LoanNotFound = 21,
    LoanNotActive = 22,
    NotBorrower = 23,
    NotPastDue = 24,
    BorrowNotAllowed = 30,
    InsufficientLiquidity = 40,
    Overflow = 50,
}
