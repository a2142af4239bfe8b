//! Shared startup helpers for the `wordclock` binaries.

pub mod fonts;
