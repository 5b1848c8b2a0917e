//! Module: normalize::time
//! Responsibility: GeneralizedTime grammar and its ordered millisecond encoding.
//! Does not own: syntax diagnostics (syntax::time maps errors to messages).
//! Boundary: returns UTC epoch milliseconds; callers pick the encoding.

use crate::error::DecodeError;
use time::{Date, Month};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Days from 0000-01-01 to 1970-01-01 in the proleptic Gregorian calendar.
const DAYS_FROM_YEAR_ZERO_TO_EPOCH: i64 = 719_528;

/// Epoch milliseconds of 0000-01-01T00:00:00Z, the smallest encodable time.
pub const MIN_GENERALIZED_TIME_MILLIS: i64 = -DAYS_FROM_YEAR_ZERO_TO_EPOCH * MILLIS_PER_DAY;

const MIN_LENGTH: usize = 11;
const MAX_FRACTION_DIGITS: usize = 9;

///
/// GeneralizedTime
///
/// A decoded GeneralizedTime instant in UTC milliseconds since the Unix
/// epoch.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GeneralizedTime {
    epoch_millis: i64,
}

impl GeneralizedTime {
    #[must_use]
    pub const fn epoch_millis(self) -> i64 {
        self.epoch_millis
    }

    /// Big-endian offset from [`MIN_GENERALIZED_TIME_MILLIS`].
    pub fn to_ordered_bytes(self) -> Result<[u8; 8], DecodeError> {
        let offset = self
            .epoch_millis
            .checked_sub(MIN_GENERALIZED_TIME_MILLIS)
            .and_then(|offset| u64::try_from(offset).ok())
            .ok_or_else(|| {
                DecodeError::out_of_range("generalized time is before 0000-01-01T00:00:00Z")
            })?;

        Ok(offset.to_be_bytes())
    }

    /// Parse `YYYYMMDDHH[MM[SS]][(.|,)fraction](Z|(+|-)HH[MM])`.
    pub fn parse(value: &str) -> Result<Self, DecodeError> {
        let bytes = value.as_bytes();
        if bytes.len() < MIN_LENGTH {
            return Err(DecodeError::grammar(format!(
                "generalized time '{value}' is too short"
            )));
        }

        let mut cursor = Cursor { bytes, pos: 0 };
        let year = cursor.digits(4, "year")?;
        let month = cursor.digits(2, "month")?;
        let day = cursor.digits(2, "day")?;
        let hour = cursor.digits(2, "hour")?;

        let month = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(|| DecodeError::invalid_value(format!("invalid month {month:02}")))?;
        let date = i32::try_from(year)
            .ok()
            .zip(u8::try_from(day).ok())
            .and_then(|(year, day)| Date::from_calendar_date(year, month, day).ok())
            .ok_or_else(|| {
                DecodeError::invalid_value(format!("invalid day {day:02} for {month} {year}"))
            })?;
        if hour > 23 {
            return Err(DecodeError::invalid_value(format!("invalid hour {hour:02}")));
        }

        let mut millis = i64::from(hour) * MILLIS_PER_HOUR;
        let mut last_unit = MILLIS_PER_HOUR;

        if cursor.peek_digit() {
            let minute = cursor.digits(2, "minute")?;
            if minute > 59 {
                return Err(DecodeError::invalid_value(format!(
                    "invalid minute {minute:02}"
                )));
            }
            millis += i64::from(minute) * MILLIS_PER_MINUTE;
            last_unit = MILLIS_PER_MINUTE;

            if cursor.peek_digit() {
                let second = cursor.digits(2, "second")?;
                // 60 is a leap second
                if second > 60 {
                    return Err(DecodeError::invalid_value(format!(
                        "invalid second {second:02}"
                    )));
                }
                millis += i64::from(second) * MILLIS_PER_SECOND;
                last_unit = MILLIS_PER_SECOND;
            }
        }

        if matches!(cursor.peek(), Some(b'.' | b',')) {
            cursor.pos += 1;
            millis += cursor.fraction(last_unit)?;
        }

        let offset = cursor.time_zone()?;
        let days = i64::from(date.to_julian_day()) - i64::from(epoch_julian_day());
        let epoch_millis = days * MILLIS_PER_DAY + millis - offset;

        Ok(Self { epoch_millis })
    }
}

fn epoch_julian_day() -> i32 {
    Date::from_calendar_date(1970, Month::January, 1).map_or(2_440_588, Date::to_julian_day)
}

///
/// Cursor
///

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_digit(&self) -> bool {
        self.peek().is_some_and(|b| b.is_ascii_digit())
    }

    fn digits(&mut self, count: usize, field: &str) -> Result<u32, DecodeError> {
        let mut value = 0u32;
        for _ in 0..count {
            match self.peek() {
                Some(b) if b.is_ascii_digit() => {
                    value = value * 10 + u32::from(b - b'0');
                    self.pos += 1;
                }
                Some(_) => {
                    return Err(DecodeError::at_position(
                        format!("illegal character in {field}"),
                        self.pos,
                    ));
                }
                None => {
                    return Err(DecodeError::grammar(format!(
                        "generalized time ends inside the {field}"
                    )));
                }
            }
        }

        Ok(value)
    }

    /// Fraction of `unit` milliseconds; digits beyond nanosecond precision
    /// are read but ignored.
    fn fraction(&mut self, unit: i64) -> Result<i64, DecodeError> {
        let start = self.pos;
        let mut numerator = 0i64;
        let mut denominator = 1i64;
        while self.peek_digit() {
            if self.pos - start < MAX_FRACTION_DIGITS {
                numerator = numerator * 10 + i64::from(self.bytes[self.pos] - b'0');
                denominator *= 10;
            }
            self.pos += 1;
        }
        if self.pos == start {
            return Err(DecodeError::at_position(
                "fraction contains no digits",
                self.pos,
            ));
        }

        Ok(numerator * unit / denominator)
    }

    /// Offset from UTC in milliseconds; the zone must end the value.
    fn time_zone(&mut self) -> Result<i64, DecodeError> {
        let sign = match self.peek() {
            Some(b'Z') => {
                self.pos += 1;
                self.expect_end()?;
                return Ok(0);
            }
            Some(b'+') => 1,
            Some(b'-') => -1,
            Some(_) => {
                return Err(DecodeError::at_position(
                    "illegal character in time zone",
                    self.pos,
                ));
            }
            None => return Err(DecodeError::grammar("generalized time has no time zone")),
        };
        self.pos += 1;

        let hours = self.digits(2, "time zone hour")?;
        if hours > 23 {
            return Err(DecodeError::invalid_value(format!(
                "invalid time zone hour {hours:02}"
            )));
        }
        let minutes = if self.peek().is_some() {
            self.digits(2, "time zone minute")?
        } else {
            0
        };
        if minutes > 59 {
            return Err(DecodeError::invalid_value(format!(
                "invalid time zone minute {minutes:02}"
            )));
        }
        self.expect_end()?;

        Ok(sign * (i64::from(hours) * MILLIS_PER_HOUR + i64::from(minutes) * MILLIS_PER_MINUTE))
    }

    fn expect_end(&self) -> Result<(), DecodeError> {
        if self.pos == self.bytes.len() {
            Ok(())
        } else {
            Err(DecodeError::at_position(
                "unexpected trailing characters",
                self.pos,
            ))
        }
    }
}
