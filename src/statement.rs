use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::decimal::Money;
use crate::types::{AccountId, TxnKind};

const DATE_HEADER: &str = "Date";
const TXN_HEADER: &str = "Txn Id";
const TYPE_HEADER: &str = "Type";
const AMOUNT_HEADER: &str = "Amount";
const BALANCE_HEADER: &str = "Balance";

/// statement entry kind; `Interest` marks the synthetic accrual line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
    Interest,
}

impl EntryKind {
    /// single-letter statement code
    pub fn code(&self) -> &'static str {
        match self {
            EntryKind::Deposit => "D",
            EntryKind::Withdrawal => "W",
            EntryKind::Interest => "I",
        }
    }
}

impl From<TxnKind> for EntryKind {
    fn from(kind: TxnKind) -> Self {
        match kind {
            TxnKind::Deposit => EntryKind::Deposit,
            TxnKind::Withdrawal => EntryKind::Withdrawal,
        }
    }
}

/// one row of a rendered statement; the interest line carries no txn id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementLine {
    pub date: NaiveDate,
    pub txn_id: Option<String>,
    pub kind: EntryKind,
    pub amount: Money,
    pub balance: Money,
}

/// structured statement returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub account_id: AccountId,
    pub lines: Vec<StatementLine>,
}

impl Statement {
    /// fixed-width pipe-delimited rendering consumed by the caller's
    /// presentation layer
    pub fn render(&self) -> String {
        let txn_w = self
            .lines
            .iter()
            .filter_map(|line| line.txn_id.as_ref().map(String::len))
            .fold(TXN_HEADER.len(), usize::max);
        let amount_w = self
            .lines
            .iter()
            .map(|line| line.amount.to_string().len())
            .fold(AMOUNT_HEADER.len(), usize::max);
        let balance_w = self
            .lines
            .iter()
            .map(|line| line.balance.to_string().len())
            .fold(BALANCE_HEADER.len(), usize::max);

        let mut out = String::new();
        out.push_str(&format!("Account: {}\n", self.account_id));
        out.push_str(&format!(
            "| {:<8} | {:<txn_w$} | {:<4} | {:>amount_w$} | {:>balance_w$} |\n",
            DATE_HEADER, TXN_HEADER, TYPE_HEADER, AMOUNT_HEADER, BALANCE_HEADER,
        ));
        for line in &self.lines {
            out.push_str(&format!(
                "| {} | {:<txn_w$} | {:<4} | {:>amount_w$} | {:>balance_w$} |\n",
                calendar::format_date(line.date),
                line.txn_id.as_deref().unwrap_or(""),
                line.kind.code(),
                line.amount.to_string(),
                line.balance.to_string(),
            ));
        }
        out
    }

    /// serialize to pretty json
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
