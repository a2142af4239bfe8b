//! Phrase selection for the radial **word clock**.
//!
//! This crate has no window or GPU dependencies. It answers one question per
//! refresh: given a wall-clock time, which dial phrases are lit and what does
//! the center of the face say.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`sample`] | `TimeSample` (hour, minute) and 12-hour derivations |
//! | [`bucket`] | `MinuteBucket`, the twelve five-minute windows |
//! | [`selector`] | `select`, `Selection` |
//! | [`phrase`] | phrase vocabulary and the `DIAL` layout |
//! | [`face`] | `ClockFace` lit masks |
//! | [`meridiem`] | `Meridiem`, `format_clock` |
//! | [`zone`] | `ZoneSpec`, `Zone`, `WORLD_ZONES` |
//! | [`clock`] | `TimeSource` implementations |
//!
//! # Quick start
//!
//! ```rust
//! use wordclock_core::select_hm;
//!
//! let s = select_hm(3, 7).unwrap();
//! assert_eq!(s.tokens, ["IT'S", "FIVE", "PAST", "3"]);
//! assert_eq!(s.center, "3");
//! ```

pub mod bucket;
pub mod clock;
pub mod face;
pub mod meridiem;
pub mod phrase;
pub mod sample;
pub mod selector;
pub mod zone;

pub use bucket::MinuteBucket;
pub use clock::{FixedClock, SystemClock, TimeSource};
pub use face::{ClockFace, LitMask};
pub use meridiem::{format_clock, Meridiem};
pub use phrase::{Phrase, DIAL};
pub use sample::TimeSample;
pub use selector::{select, select_hm, Selection};
pub use zone::{Zone, ZoneError, ZoneReading, ZoneSpec, WORLD_ZONES};
