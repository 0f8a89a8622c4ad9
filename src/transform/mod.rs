//! Pure string transforms over a resolved rule set.
//!
//! Everything here is a read-only computation: transforms never mutate the
//! rule set they were resolved against, and they are total over well-formed
//! string input — a word no rule matches comes back unchanged.

pub mod cases;
pub mod humanize;
pub mod inflect;
pub mod naming;
pub mod ordinal;

pub use cases::{dasherize, upcase_first};
pub use humanize::HumanizeOptions;
pub use naming::{deconstantize, demodulize};
pub use ordinal::{ordinal, ordinalize};
