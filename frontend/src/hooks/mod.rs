pub mod use_clock;
pub mod use_notifier;

pub use use_clock::use_clock;
pub use use_notifier::{use_notifier, Banner};
