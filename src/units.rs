use std::str::FromStr;

use thiserror::Error;

/// Time units accepted on measurement lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("invalid unit: {0}")]
    Invalid(String),
}

impl FromStr for TimeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" => Ok(TimeUnit::Nanoseconds),
            "µs" => Ok(TimeUnit::Microseconds),
            "ms" => Ok(TimeUnit::Milliseconds),
            "s" => Ok(TimeUnit::Seconds),
            _ => Err(UnitError::Invalid(s.to_string())),
        }
    }
}

/// Convert a measured amount to whole microseconds, rounding up to the next
/// full microsecond.
///
/// Nanosecond measurements contribute a flat single microsecond no matter
/// the amount.
pub fn to_micros(amount: f64, unit: TimeUnit) -> u64 {
    match unit {
        TimeUnit::Nanoseconds => 1,
        TimeUnit::Microseconds => amount.ceil() as u64,
        TimeUnit::Milliseconds => (amount * 1_000.0).ceil() as u64,
        TimeUnit::Seconds => (amount * 1_000_000.0).ceil() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_units() {
        assert_eq!("ns".parse(), Ok(TimeUnit::Nanoseconds));
        assert_eq!("µs".parse(), Ok(TimeUnit::Microseconds));
        assert_eq!("ms".parse(), Ok(TimeUnit::Milliseconds));
        assert_eq!("s".parse(), Ok(TimeUnit::Seconds));
    }

    #[test]
    fn test_parse_unknown_unit() {
        let err = "foo".parse::<TimeUnit>().unwrap_err();
        assert_eq!(err, UnitError::Invalid("foo".to_string()));
        assert_eq!(err.to_string(), "invalid unit: foo");
    }

    #[test]
    fn test_microseconds_pass_through() {
        assert_eq!(to_micros(500.0, TimeUnit::Microseconds), 500);
    }

    #[test]
    fn test_milliseconds_scale() {
        assert_eq!(to_micros(2.0, TimeUnit::Milliseconds), 2_000);
    }

    #[test]
    fn test_seconds_scale() {
        assert_eq!(to_micros(1.5, TimeUnit::Seconds), 1_500_000);
    }

    #[test]
    fn test_fractional_amounts_round_up() {
        assert_eq!(to_micros(0.1, TimeUnit::Microseconds), 1);
        assert_eq!(to_micros(1.0001, TimeUnit::Milliseconds), 1_001);
        assert_eq!(to_micros(0.0000001, TimeUnit::Seconds), 1);
    }

    #[test]
    fn test_nanoseconds_always_one() {
        assert_eq!(to_micros(3.0, TimeUnit::Nanoseconds), 1);
        assert_eq!(to_micros(0.0, TimeUnit::Nanoseconds), 1);
        assert_eq!(to_micros(1_000_000.0, TimeUnit::Nanoseconds), 1);
    }

    #[test]
    fn test_monotonic_in_amount() {
        for unit in [
            TimeUnit::Microseconds,
            TimeUnit::Milliseconds,
            TimeUnit::Seconds,
        ] {
            let mut last = 0;
            for amount in [0.0, 0.5, 1.0, 1.5, 10.0, 123.456] {
                let micros = to_micros(amount, unit);
                assert!(micros >= last, "{micros} < {last} for {amount} {unit:?}");
                last = micros;
            }
        }
    }
}
