use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::interest::AccrualEngine;
use crate::rules::InterestRuleSet;
use crate::statement::{EntryKind, Statement, StatementLine};
use crate::types::{AccountId, Transaction, TxnKind};

/// single-account transaction log, kept ordered by date with stable
/// same-date order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    account_id: AccountId,
    transactions: Vec<Transaction>,
    date_sequences: HashMap<NaiveDate, u32>,
}

impl Account {
    pub fn new(account_id: impl Into<AccountId>) -> Self {
        Self {
            account_id: account_id.into(),
            transactions: Vec::new(),
            date_sequences: HashMap::new(),
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// posted entries in statement order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// validate and post one entry; the log is untouched on failure
    pub fn post_transaction(
        &mut self,
        date_str: &str,
        type_str: &str,
        amount_str: &str,
    ) -> Result<Transaction> {
        let date = calendar::parse_date(date_str)?;
        let kind = TxnKind::parse(type_str)?;
        let amount = Money::parse(amount_str)?;
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount { amount });
        }
        if self.transactions.is_empty() && kind == TxnKind::Withdrawal {
            return Err(LedgerError::FirstTransactionWithdrawal);
        }
        if kind == TxnKind::Withdrawal {
            // reconstructed balance as of the entry's date; entries posted
            // later but dated earlier count, so backdating is allowed as
            // long as the historical balance covers it
            let available = self.balance_on(date);
            if available < amount {
                return Err(LedgerError::InsufficientFunds {
                    available,
                    requested: amount,
                });
            }
        }

        let sequence = self.date_sequences.entry(date).or_insert(0);
        *sequence += 1;
        let txn_id = format!("{}-{:02}", calendar::format_date(date), sequence);

        let transaction = Transaction {
            account_id: self.account_id.clone(),
            date,
            txn_id,
            kind,
            amount,
        };
        // insertion point after every entry dated on or before the new
        // date keeps the list sorted without re-sorting the whole log
        let position = self.transactions.partition_point(|t| t.date <= date);
        self.transactions.insert(position, transaction.clone());
        Ok(transaction)
    }

    /// balance after every entry dated on or before `date`
    pub fn balance_on(&self, date: NaiveDate) -> Money {
        let upto = self.transactions.partition_point(|t| t.date <= date);
        self.fold_balance(upto)
    }

    /// balance immediately before `date`
    pub fn balance_before(&self, date: NaiveDate) -> Money {
        let upto = self.transactions.partition_point(|t| t.date < date);
        self.fold_balance(upto)
    }

    fn fold_balance(&self, upto: usize) -> Money {
        self.transactions[..upto]
            .iter()
            .fold(Money::ZERO, |balance, txn| txn.apply(balance))
    }

    /// full transaction history with running balances
    pub fn full_statement(&self) -> Statement {
        let mut balance = Money::ZERO;
        let lines = self
            .transactions
            .iter()
            .map(|txn| {
                balance = txn.apply(balance);
                StatementLine {
                    date: txn.date,
                    txn_id: Some(txn.txn_id.clone()),
                    kind: txn.kind.into(),
                    amount: txn.amount,
                    balance,
                }
            })
            .collect();
        Statement {
            account_id: self.account_id.clone(),
            lines,
        }
    }

    /// one calendar month with running balances and the accrued-interest
    /// line dated the last day of the month
    pub fn monthly_statement(
        &self,
        year: i32,
        month: u32,
        rules: &InterestRuleSet,
    ) -> Result<Statement> {
        let first = calendar::first_day(year, month)?;
        let last = calendar::last_day(year, month)?;
        let lo = self.transactions.partition_point(|t| t.date < first);
        let hi = self.transactions.partition_point(|t| t.date <= last);
        let month_txns = &self.transactions[lo..hi];

        let opening = self.balance_before(first);
        let mut balance = opening;
        let mut lines: Vec<StatementLine> = month_txns
            .iter()
            .map(|txn| {
                balance = txn.apply(balance);
                StatementLine {
                    date: txn.date,
                    txn_id: Some(txn.txn_id.clone()),
                    kind: txn.kind.into(),
                    amount: txn.amount,
                    balance,
                }
            })
            .collect();

        let accrual = AccrualEngine::new().accrue_month(opening, month_txns, year, month, rules)?;
        lines.push(StatementLine {
            date: last,
            txn_id: None,
            kind: EntryKind::Interest,
            amount: accrual.interest,
            balance: balance + accrual.interest,
        });

        Ok(Statement {
            account_id: self.account_id.clone(),
            lines,
        })
    }
}
