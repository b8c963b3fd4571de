//! Finance demo: transactions, payment-channel processors, and accounts.

pub mod account;
pub mod processor;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use processor::{
    BankTransferProcessor, CryptoWalletProcessor, MobileMoneyProcessor, TransactionProcessor,
};
pub use transaction::{Transaction, TransactionId, format_amount};

use chrono::Utc;
use miniops_core::Repository;

/// Run the finance demonstration sequence, printing outcomes to stdout.
pub fn run_demo() {
    println!("\n--- Finance demo ---");

    let mut account = Account::savings("SA-1001", 1_000_00);
    let mut log: Repository<Transaction> = Repository::new();

    let t1 = Transaction::new(TransactionId(1), Utc::now(), 120_50, "Groceries");
    let t2 = Transaction::new(TransactionId(2), Utc::now(), 250_00, "Utilities");
    let t3 = Transaction::new(TransactionId(3), Utc::now(), 900_00, "Entertainment");

    let processors: [(&dyn TransactionProcessor, &Transaction); 3] = [
        (&MobileMoneyProcessor, &t1),
        (&BankTransferProcessor, &t2),
        (&CryptoWalletProcessor, &t3),
    ];
    for (processor, tx) in processors {
        processor.process(tx);
    }

    for tx in [t1, t2, t3] {
        match account.apply(&tx) {
            Ok(balance) => println!(
                "Account {}: applied {}. New balance: {}",
                account.number(),
                format_amount(tx.amount),
                format_amount(balance),
            ),
            // Expected for the overdrawing transaction; caught and printed.
            Err(err) => println!("Account {}: {err}", account.number()),
        }
        if let Err(err) = log.add(tx) {
            println!("Transaction log: {err}");
        }
    }

    println!("Transactions recorded: {}", log.len());
    println!("--- Finance demo end ---");
}
