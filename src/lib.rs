pub mod account;
pub mod calendar;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod ledger;
pub mod rules;
pub mod statement;
pub mod types;

// re-export key types
pub use account::Account;
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use events::{Event, EventStore};
pub use interest::{AccrualEngine, AccrualRun, MonthlyAccrual};
pub use ledger::Ledger;
pub use rules::{InterestRule, InterestRuleSet};
pub use statement::{EntryKind, Statement, StatementLine};
pub use types::{AccountId, Transaction, TxnKind};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
