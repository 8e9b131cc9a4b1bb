use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{AccountId, TxnKind};

/// all events emitted by mutating ledger operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    AccountOpened {
        account_id: AccountId,
        first_transaction_date: NaiveDate,
    },
    TransactionPosted {
        account_id: AccountId,
        txn_id: String,
        date: NaiveDate,
        kind: TxnKind,
        amount: Money,
    },
    InterestRuleUpserted {
        effective_date: NaiveDate,
        rule_id: String,
        rate: Rate,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
