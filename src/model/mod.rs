//! Pure data structures for a ticket purchase: the request side, the account and the receipt.

pub mod account;
pub mod receipt;
pub mod ticket;

pub use account::*;
pub use receipt::*;
pub use ticket::*;
