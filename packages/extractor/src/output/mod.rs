//! JSON dataset output.
//!
//! Every file is compact JSON written atomically: a failed run never leaves
//! a truncated dataset behind.

mod aggregate;
mod writer;

pub use aggregate::{save_aggregates, save_all_sets, strip_set, VersionStamp};
pub use writer::{save_card_backs, save_sets, write_json_atomic};
