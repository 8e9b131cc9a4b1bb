pub mod accrual;

pub use accrual::{AccrualEngine, AccrualRun, MonthlyAccrual};
