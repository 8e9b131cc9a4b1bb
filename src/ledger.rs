use std::collections::HashMap;

use crate::account::Account;
use crate::errors::{LedgerError, Result};
use crate::events::{Event, EventStore};
use crate::rules::{InterestRule, InterestRuleSet};
use crate::statement::Statement;
use crate::types::{AccountId, Transaction};

/// aggregate owning every account, the shared rate schedule, and the
/// event trail; callers hold a handle to this struct, there is no
/// process-wide state
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountId, Account>,
    rules: InterestRuleSet,
    events: EventStore,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// validate and post a transaction, creating the account on its
    /// first successful post
    pub fn post_transaction(
        &mut self,
        account_id: &str,
        date_str: &str,
        type_str: &str,
        amount_str: &str,
    ) -> Result<Transaction> {
        let transaction = match self.accounts.get_mut(account_id) {
            Some(account) => account.post_transaction(date_str, type_str, amount_str)?,
            None => {
                // a rejected first transaction must leave no account behind
                let mut account = Account::new(account_id);
                let transaction = account.post_transaction(date_str, type_str, amount_str)?;
                self.events.emit(Event::AccountOpened {
                    account_id: account_id.to_string(),
                    first_transaction_date: transaction.date,
                });
                self.accounts.insert(account_id.to_string(), account);
                transaction
            }
        };
        self.events.emit(Event::TransactionPosted {
            account_id: transaction.account_id.clone(),
            txn_id: transaction.txn_id.clone(),
            date: transaction.date,
            kind: transaction.kind,
            amount: transaction.amount,
        });
        Ok(transaction)
    }

    /// define or replace the interest rule effective on a date
    pub fn upsert_interest_rule(
        &mut self,
        date_str: &str,
        rule_id: &str,
        rate_str: &str,
    ) -> Result<InterestRule> {
        let rule = self.rules.upsert(date_str, rule_id, rate_str)?;
        self.events.emit(Event::InterestRuleUpserted {
            effective_date: rule.effective_date,
            rule_id: rule.rule_id.clone(),
            rate: rule.rate,
        });
        Ok(rule)
    }

    /// full transaction history for an account
    pub fn full_statement(&self, account_id: &str) -> Result<Statement> {
        Ok(self.account_or_err(account_id)?.full_statement())
    }

    /// monthly statement with the accrued-interest line, computed
    /// against the shared rate schedule
    pub fn monthly_statement(&self, account_id: &str, year: i32, month: u32) -> Result<Statement> {
        self.account_or_err(account_id)?
            .monthly_statement(year, month, &self.rules)
    }

    pub fn account(&self, account_id: &str) -> Option<&Account> {
        self.accounts.get(account_id)
    }

    pub fn accounts(&self) -> &HashMap<AccountId, Account> {
        &self.accounts
    }

    pub fn rules(&self) -> &InterestRuleSet {
        &self.rules
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    fn account_or_err(&self, account_id: &str) -> Result<&Account> {
        self.accounts
            .get(account_id)
            .ok_or_else(|| LedgerError::AccountNotFound {
                account_id: account_id.to_string(),
            })
    }
}
