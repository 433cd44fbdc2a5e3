//! facil-domain
//!
//! Pure domain models (Transaction, Category, the category catalog).
//! No I/O, no storage. Only data types and core enums.

pub mod category;
pub mod transaction;

pub use category::*;
pub use transaction::*;
