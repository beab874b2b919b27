use std::fmt;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use gloo_timers::callback::Interval;
use log::{debug, warn};
use yew::prelude::*;

use crate::content::ContentError;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

const TICK_MS: u32 = 1_000;

/// Time left until a deadline, broken into calendar-free units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Both arguments are epoch milliseconds. Past deadlines yield all zeros.
    pub fn between(target_ms: i64, now_ms: i64) -> Self {
        let mut diff = (target_ms - now_ms).max(0);
        let days = diff / MS_PER_DAY;
        diff -= days * MS_PER_DAY;
        let hours = diff / MS_PER_HOUR;
        diff -= hours * MS_PER_HOUR;
        let minutes = diff / MS_PER_MINUTE;
        diff -= minutes * MS_PER_MINUTE;
        let seconds = diff / MS_PER_SECOND;
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub fn total_ms(&self) -> i64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d:{:02}h:{:02}m:{:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn parse_with_offset(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Some(at.with_timezone(&Utc));
    }
    if let Some(naive) = value
        .strip_suffix('Z')
        .or_else(|| value.strip_suffix('z'))
        .and_then(parse_naive)
    {
        return Some(Utc.from_utc_datetime(&naive));
    }
    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
        .map(|at| at.with_timezone(&Utc))
}

/// Wall-clock time in `tz`. A time skipped by a spring-forward transition is
/// moved one hour later, as browsers do.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(naive).earliest().or_else(|| {
        tz.from_local_datetime(&(*naive + Duration::hours(1)))
            .earliest()
    })
}

/// Parses a deadline the way a browser `Date` would: an explicit offset or `Z`
/// is honoured, a bare date-time is local, a bare date is UTC midnight.
pub fn parse_target(iso: &str) -> Result<DateTime<Utc>, ContentError> {
    let iso = iso.trim();
    if let Some(at) = parse_with_offset(iso) {
        return Ok(at);
    }

    if let Some(naive) = parse_naive(iso) {
        return Ok(match resolve_local(&Local, &naive) {
            Some(local) => local.with_timezone(&Utc),
            None => Utc.from_utc_datetime(&naive),
        });
    }

    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|date| Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default()))
        .map_err(|source| ContentError::InvalidDeadline {
            value: iso.to_string(),
            source,
        })
}

/// Epoch milliseconds of the deadline, or `None` when there is nothing to count to.
pub fn target_millis(target: Option<&str>) -> Option<i64> {
    match parse_target(target?) {
        Ok(at) => Some(at.timestamp_millis()),
        Err(err) => {
            warn!("Countdown disabled: {}", err);
            None
        }
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Ticking countdown to `target`. `None` when there is no usable target, so the
/// caller can skip rendering entirely.
#[hook]
pub fn use_countdown(target: Option<String>) -> Option<Remaining> {
    let target_ms = use_memo(|target| target_millis(target.as_deref()), target);
    let now = use_state(now_ms);

    {
        let now = now.clone();
        use_effect_with_deps(
            move |target_ms| {
                let interval = target_ms.map(|at| {
                    debug!("Countdown ticking towards {}", at);
                    now.set(now_ms());
                    Interval::new(TICK_MS, move || now.set(now_ms()))
                });
                move || drop(interval)
            },
            *target_ms,
        );
    }

    target_ms.map(|at| Remaining::between(at, *now))
}
