pub mod clock;
pub mod notifications;
pub mod transaction_table;
pub mod transfer_form;

pub use clock::Clock;
pub use notifications::NotificationHost;
pub use transaction_table::TransactionTable;
pub use transfer_form::TransferForm;
