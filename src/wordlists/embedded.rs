//! Embedded word banks
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/3_letter.rs"));
include!(concat!(env!("OUT_DIR"), "/4_letter.rs"));
include!(concat!(env!("OUT_DIR"), "/5_letter.rs"));
include!(concat!(env!("OUT_DIR"), "/6_letter.rs"));
include!(concat!(env!("OUT_DIR"), "/7_letter.rs"));

/// Embedded list for a supported word length, `None` outside 3..=7
#[must_use]
pub const fn list_for(len: usize) -> Option<&'static [&'static str]> {
    match len {
        3 => Some(THREE_LETTER),
        4 => Some(FOUR_LETTER),
        5 => Some(FIVE_LETTER),
        6 => Some(SIX_LETTER),
        7 => Some(SEVEN_LETTER),
        _ => None,
    }
}
