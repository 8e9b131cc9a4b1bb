/// json state - serialize a statement for downstream consumers
use deposit_ledger_rs::Ledger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = Ledger::new();

    ledger.upsert_interest_rule("20250101", "RULE01", "2.50")?;
    ledger.post_transaction("AC001", "20250110", "D", "500.00")?;
    ledger.post_transaction("AC001", "20250120", "W", "120.00")?;

    let statement = ledger.monthly_statement("AC001", 2025, 1)?;
    println!("{}", statement.json());

    Ok(())
}
