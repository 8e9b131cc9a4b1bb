/// monthly statement - rate schedule plus the accrued-interest line
use deposit_ledger_rs::Ledger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = Ledger::new();

    // time-varying rate schedule shared by every account
    ledger.upsert_interest_rule("20230101", "RULE01", "1.95")?;
    ledger.upsert_interest_rule("20230520", "RULE02", "1.90")?;
    ledger.upsert_interest_rule("20230615", "RULE03", "2.20")?;

    ledger.post_transaction("AC001", "20230505", "D", "100.00")?;
    ledger.post_transaction("AC001", "20230601", "D", "150.00")?;
    ledger.post_transaction("AC001", "20230626", "W", "20.00")?;
    ledger.post_transaction("AC001", "20230626", "W", "100.00")?;

    // june carries an opening balance from may and crosses a rate change
    println!("{}", ledger.monthly_statement("AC001", 2023, 6)?);

    Ok(())
}
