use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::rules::InterestRuleSet;
use crate::types::Transaction;

/// days in the accrual year; fixed basis, leap years included
const YEAR_BASIS: Decimal = dec!(365);

/// maximal consecutive span of days sharing one (balance, rate) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccrualRun {
    pub days: u32,
    pub balance: Money,
    pub rate: Rate,
}

impl AccrualRun {
    /// annualized contribution: days * balance * rate
    pub fn contribution(&self) -> Decimal {
        Decimal::from(self.days) * self.balance.as_decimal() * self.rate.as_decimal()
    }
}

/// result of accruing one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAccrual {
    pub period_end: NaiveDate,
    pub runs: Vec<AccrualRun>,
    pub annualized: Decimal,
    pub interest: Money,
}

/// engine for the run-length interest integration
#[derive(Debug, Clone, Copy, Default)]
pub struct AccrualEngine;

impl AccrualEngine {
    pub fn new() -> Self {
        Self
    }

    /// accrue interest for one month given the opening balance and the
    /// month's transactions in statement order
    pub fn accrue_month(
        &self,
        opening: Money,
        transactions: &[Transaction],
        year: i32,
        month: u32,
        rules: &InterestRuleSet,
    ) -> Result<MonthlyAccrual> {
        let period_end = calendar::last_day(year, month)?;

        let mut runs: Vec<AccrualRun> = Vec::new();
        let mut balance = opening;
        let mut next_txn = 0;
        for day in calendar::month_days(year, month)? {
            // end-of-day balance: all same-day entries applied in order,
            // carried forward over days without entries
            while next_txn < transactions.len() && transactions[next_txn].date == day {
                balance = transactions[next_txn].apply(balance);
                next_txn += 1;
            }
            let rate = rules.rate_on(day);
            match runs.last_mut() {
                Some(run) if run.balance == balance && run.rate == rate => run.days += 1,
                _ => runs.push(AccrualRun {
                    days: 1,
                    balance,
                    rate,
                }),
            }
        }

        let annualized: Decimal = runs.iter().map(AccrualRun::contribution).sum();
        let interest = Money::from_decimal(annualized / YEAR_BASIS);

        Ok(MonthlyAccrual {
            period_end,
            runs,
            annualized,
            interest,
        })
    }
}
