use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};

/// identifier for an account, assigned by the caller
pub type AccountId = String;

/// posted transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxnKind {
    Deposit,
    Withdrawal,
}

impl TxnKind {
    /// parse a caller-supplied type code, case-insensitive
    pub fn parse(input: &str) -> Result<Self> {
        match input.to_ascii_uppercase().as_str() {
            "D" => Ok(TxnKind::Deposit),
            "W" => Ok(TxnKind::Withdrawal),
            _ => Err(LedgerError::InvalidType {
                input: input.to_string(),
            }),
        }
    }

    /// single-letter statement code
    pub fn code(&self) -> &'static str {
        match self {
            TxnKind::Deposit => "D",
            TxnKind::Withdrawal => "W",
        }
    }
}

/// immutable record of one posted ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub account_id: AccountId,
    pub date: NaiveDate,
    pub txn_id: String,
    pub kind: TxnKind,
    pub amount: Money,
}

impl Transaction {
    /// balance after applying this entry
    pub fn apply(&self, balance: Money) -> Money {
        match self.kind {
            TxnKind::Deposit => balance + self.amount,
            TxnKind::Withdrawal => balance - self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!(TxnKind::parse("D").unwrap(), TxnKind::Deposit);
        assert_eq!(TxnKind::parse("d").unwrap(), TxnKind::Deposit);
        assert_eq!(TxnKind::parse("w").unwrap(), TxnKind::Withdrawal);
    }

    #[test]
    fn test_kind_parse_rejects_unknown_codes() {
        assert!(matches!(
            TxnKind::parse("X"),
            Err(LedgerError::InvalidType { .. })
        ));
        assert!(TxnKind::parse("DW").is_err());
        assert!(TxnKind::parse("").is_err());
    }

    #[test]
    fn test_apply_moves_balance_by_signed_amount() {
        let deposit = Transaction {
            account_id: "AC001".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            txn_id: "20230601-01".to_string(),
            kind: TxnKind::Deposit,
            amount: Money::from_major(150),
        };
        let balance = deposit.apply(Money::from_major(100));
        assert_eq!(balance, Money::from_major(250));

        let withdrawal = Transaction {
            kind: TxnKind::Withdrawal,
            amount: Money::from_major(20),
            ..deposit
        };
        assert_eq!(withdrawal.apply(balance), Money::from_major(230));
    }
}
