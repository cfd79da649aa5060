// SPDX-License-Identifier: MIT

//! Codec for the 14-digit `YYYYMMDDHHMMSS` record timestamps.
//!
//! The on-disk form carries no timezone; it maps to a plain calendar
//! [`PrimitiveDateTime`] both ways.

use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

use crate::{constant::TIMESTAMP_LEN, errors::*};

fn digits(raw: &[u8], field: &'static str) -> FsFormatResult<u32> {
    let mut v = 0u32;
    for &b in raw {
        if !b.is_ascii_digit() {
            return Err(FsFormatError::BadTimestamp(field));
        }
        v = v * 10 + (b - b'0') as u32;
    }
    Ok(v)
}

/// Decodes a raw timestamp field into a calendar timestamp.
pub fn decode_timestamp(
    raw: &[u8; TIMESTAMP_LEN],
    field: &'static str,
) -> FsFormatResult<PrimitiveDateTime> {
    let year = digits(&raw[0..4], field)?;
    let month = digits(&raw[4..6], field)?;
    let day = digits(&raw[6..8], field)?;
    let hour = digits(&raw[8..10], field)?;
    let minute = digits(&raw[10..12], field)?;
    let second = digits(&raw[12..14], field)?;

    let month = Month::try_from(month as u8).map_err(|_| FsFormatError::BadTimestamp(field))?;
    let date = Date::from_calendar_date(year as i32, month, day as u8)
        .map_err(|_| FsFormatError::BadTimestamp(field))?;
    let time = Time::from_hms(hour as u8, minute as u8, second as u8)
        .map_err(|_| FsFormatError::BadTimestamp(field))?;

    Ok(PrimitiveDateTime::new(date, time))
}

/// Encodes a calendar timestamp into the raw 14-digit field.
pub fn encode_timestamp(ts: PrimitiveDateTime) -> [u8; TIMESTAMP_LEN] {
    let year = ts.year().clamp(0, 9999);
    let rendered = format!(
        "{:04}{:02}{:02}{:02}{:02}{:02}",
        year,
        ts.month() as u8,
        ts.day(),
        ts.hour(),
        ts.minute(),
        ts.second()
    );

    let mut out = [0u8; TIMESTAMP_LEN];
    out.copy_from_slice(rendered.as_bytes());
    out
}

/// Current wall-clock time as a record timestamp.
pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

/// Renders a record timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(ts: PrimitiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        ts.year(),
        ts.month() as u8,
        ts.day(),
        ts.hour(),
        ts.minute(),
        ts.second()
    )
}
