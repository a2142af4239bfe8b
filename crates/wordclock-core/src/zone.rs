use std::fmt;

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

use crate::meridiem::Meridiem;
use crate::sample::TimeSample;
use crate::selector::{select, Selection};

/// Error returned by [`Zone::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// The name is not in the bundled IANA time-zone database.
    UnknownZone { name: String, title: String },
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneError::UnknownZone { name, title } => {
                write!(f, "unknown time zone '{name}' for clock '{title}'")
            }
        }
    }
}

impl std::error::Error for ZoneError {}

/// Static description of one clock face's zone.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ZoneSpec {
    /// Caption under the face, e.g. "Pacific Time (PT)".
    pub title: &'static str,
    /// Secondary caption, e.g. "Los Angeles".
    pub city: &'static str,
    /// IANA name. `None` follows the system's local zone.
    pub tz_name: Option<&'static str>,
    /// Swap AM/PM when labelling this zone.
    pub invert_meridiem: bool,
}

impl ZoneSpec {
    /// The machine's local time with the standard AM/PM convention.
    pub const LOCAL: ZoneSpec = ZoneSpec {
        title: "Local Time",
        city: "",
        tz_name: None,
        invert_meridiem: false,
    };

    #[inline]
    pub const fn named(title: &'static str, city: &'static str, tz_name: &'static str) -> Self {
        Self { title, city, tz_name: Some(tz_name), invert_meridiem: false }
    }

    #[inline]
    pub const fn inverted(mut self) -> Self {
        self.invert_meridiem = true;
        self
    }
}

/// The three faces of the multi-zone clock, left to right.
///
/// IST deliberately reports the opposite AM/PM label.
pub const WORLD_ZONES: [ZoneSpec; 3] = [
    ZoneSpec::named("Pacific Time (PT)", "Los Angeles", "US/Pacific"),
    ZoneSpec::named("Greenwich Mean Time (GMT)", "London", "GMT"),
    ZoneSpec::named("Indian Standard Time (IST)", "Mumbai", "Asia/Kolkata").inverted(),
];

/// Everything a face needs for one refresh.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ZoneReading {
    pub sample: TimeSample,
    pub selection: Selection,
    pub meridiem: Meridiem,
}

/// A [`ZoneSpec`] whose database entry has been looked up.
#[derive(Debug, Clone)]
pub struct Zone {
    spec: ZoneSpec,
    tz: Option<Tz>,
}

impl Zone {
    /// Looks up the spec's zone name.
    pub fn resolve(spec: ZoneSpec) -> Result<Self, ZoneError> {
        let tz = match spec.tz_name {
            None => None,
            Some(name) => Some(name.parse::<Tz>().map_err(|_| ZoneError::UnknownZone {
                name: name.to_string(),
                title: spec.title.to_string(),
            })?),
        };
        Ok(Self { spec, tz })
    }

    /// Resolves every spec, stopping at the first unknown zone.
    pub fn resolve_all(specs: &[ZoneSpec]) -> Result<Vec<Self>, ZoneError> {
        specs.iter().copied().map(Self::resolve).collect()
    }

    #[inline]
    pub fn spec(&self) -> &ZoneSpec {
        &self.spec
    }

    /// Local wall-clock time of this zone at `instant`.
    pub fn sample(&self, instant: DateTime<Utc>) -> TimeSample {
        match self.tz {
            Some(tz) => TimeSample::from_time(&instant.with_timezone(&tz)),
            None => TimeSample::from_time(&instant.with_timezone(&Local)),
        }
    }

    /// Samples the zone and runs the phrase selector on the result.
    pub fn read(&self, instant: DateTime<Utc>) -> ZoneReading {
        let sample = self.sample(instant);
        ZoneReading {
            sample,
            selection: select(sample),
            meridiem: Meridiem::of(sample.hour(), self.spec.invert_meridiem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn world() -> Vec<Zone> { Zone::resolve_all(&WORLD_ZONES).unwrap() }

    #[test]
    fn world_zones_resolve() {
        assert_eq!(world().len(), 3);
    }

    #[test]
    fn unknown_zone_fails() {
        let spec = ZoneSpec::named("Nowhere", "", "Mars/Olympus_Mons");
        let err = Zone::resolve(spec).unwrap_err();
        assert_eq!(
            err,
            ZoneError::UnknownZone { name: "Mars/Olympus_Mons".into(), title: "Nowhere".into() }
        );
        assert!(err.to_string().contains("Mars/Olympus_Mons"));
    }

    #[test]
    fn resolve_all_stops_at_first_failure() {
        let specs = [WORLD_ZONES[0], ZoneSpec::named("Bad", "", "Not/AZone")];
        assert!(Zone::resolve_all(&specs).is_err());
    }

    #[test]
    fn winter_offsets() {
        // 2024-01-15 12:00 UTC: PST is UTC-8, IST is UTC+5:30.
        let zones = world();
        let at = utc(2024, 1, 15, 12, 0);
        assert_eq!(zones[0].sample(at), TimeSample::new(4, 0).unwrap());
        assert_eq!(zones[1].sample(at), TimeSample::new(12, 0).unwrap());
        assert_eq!(zones[2].sample(at), TimeSample::new(17, 30).unwrap());
    }

    #[test]
    fn pacific_observes_dst() {
        let zones = world();
        let at = utc(2024, 7, 15, 12, 0);
        assert_eq!(zones[0].sample(at), TimeSample::new(5, 0).unwrap());
    }

    #[test]
    fn ist_meridiem_is_inverted() {
        let zones = world();
        // 18:30 UTC is 00:00 in Kolkata and 18:30 in London.
        let at = utc(2024, 1, 15, 18, 30);
        let gmt = zones[1].read(at);
        let ist = zones[2].read(at);
        assert_eq!(ist.sample.hour(), 0);
        assert_eq!(ist.meridiem, Meridiem::Pm);
        assert_eq!(gmt.meridiem, Meridiem::Pm);
        assert_eq!(Meridiem::of(ist.sample.hour(), false), Meridiem::Am);
    }

    #[test]
    fn reading_carries_selection() {
        let zones = world();
        let r = zones[1].read(utc(2024, 3, 1, 3, 7));
        assert_eq!(r.selection.tokens, ["IT'S", "FIVE", "PAST", "3"]);
        assert_eq!(r.meridiem, Meridiem::Am);
    }

    #[test]
    fn local_zone_resolves_without_database() {
        let z = Zone::resolve(ZoneSpec::LOCAL).unwrap();
        assert!(z.sample(utc(2024, 1, 1, 0, 0)).hour() < 24);
    }
}
