/// quick start - post transactions and print the account history
use deposit_ledger_rs::Ledger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = Ledger::new();

    // open an account with a deposit, then move money around
    ledger.post_transaction("AC001", "20230505", "D", "100.00")?;
    ledger.post_transaction("AC001", "20230601", "D", "150.00")?;
    ledger.post_transaction("AC001", "20230626", "W", "20.00")?;

    // full history with running balances
    println!("{}", ledger.full_statement("AC001")?);

    Ok(())
}
