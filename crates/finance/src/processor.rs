//! Payment-channel processors.
//!
//! Each processor represents a channel a transaction can be pushed through.
//! In the demo they only announce the work; the channel tag is the only
//! difference between them.

use crate::transaction::{Transaction, format_amount};

/// Seam for payment channels.
pub trait TransactionProcessor {
    /// Channel tag printed in front of every processed transaction.
    fn channel(&self) -> &'static str;

    fn process(&self, tx: &Transaction) {
        println!(
            "[{}] Processing {}: amount = {}",
            self.channel(),
            tx.category,
            format_amount(tx.amount),
        );
    }
}

pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn channel(&self) -> &'static str {
        "BankTransfer"
    }
}

pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn channel(&self) -> &'static str {
        "MobileMoney"
    }
}

pub struct CryptoWalletProcessor;

impl TransactionProcessor for CryptoWalletProcessor {
    fn channel(&self) -> &'static str {
        "CryptoWallet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_processor_reports_its_channel() {
        assert_eq!(BankTransferProcessor.channel(), "BankTransfer");
        assert_eq!(MobileMoneyProcessor.channel(), "MobileMoney");
        assert_eq!(CryptoWalletProcessor.channel(), "CryptoWallet");
    }
}
