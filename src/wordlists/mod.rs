//! Word banks for descrambling
//!
//! Provides the embedded dictionaries compiled into the binary, plus loading
//! of replacement dictionaries from disk.

mod bank;
mod embedded;
pub mod loader;

pub use bank::WordBank;
pub use embedded::{
    FIVE_LETTER, FIVE_LETTER_COUNT, FOUR_LETTER, FOUR_LETTER_COUNT, SEVEN_LETTER,
    SEVEN_LETTER_COUNT, SIX_LETTER, SIX_LETTER_COUNT, THREE_LETTER, THREE_LETTER_COUNT, list_for,
};
pub use loader::BankError;
