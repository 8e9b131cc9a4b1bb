use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid date: {input}, must be YYYYMMDD")]
    InvalidDate {
        input: String,
    },

    #[error("invalid transaction type: {input}, must be D or W")]
    InvalidType {
        input: String,
    },

    #[error("invalid amount: {input}, must be a number")]
    InvalidAmount {
        input: String,
    },

    #[error("amount must be greater than zero: {amount}")]
    NonPositiveAmount {
        amount: Money,
    },

    #[error("first transaction for an account cannot be a withdrawal")]
    FirstTransactionWithdrawal,

    #[error("insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Money,
        requested: Money,
    },

    #[error("invalid interest rate: {input}, must be between 0 and 100")]
    InvalidRate {
        input: String,
    },

    #[error("account not found: {account_id}")]
    AccountNotFound {
        account_id: String,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
