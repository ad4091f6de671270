//! Time interval value object.

/// Closed time interval: epoch-seconds start plus a duration in seconds.
///
/// The schema does not constrain `duration` to be non-negative and neither
/// do we; readings are stored as delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeInterval {
    /// Start of the interval, seconds since the Unix epoch.
    pub start: i64,
    /// Length of the interval in seconds.
    pub duration: i64,
}

impl DateTimeInterval {
    pub fn new(start: i64, duration: i64) -> Self {
        Self { start, duration }
    }

    /// Exclusive end of the interval.
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }

    /// Overall interval covering every interval in `intervals`.
    ///
    /// The result starts at the minimum start and ends at the maximum
    /// `start + duration`; an empty input yields `None`, never a zeroed
    /// interval. Ties are value-based, so which element achieves the
    /// extreme is irrelevant.
    pub fn spanning<I>(intervals: I) -> Option<Self>
    where
        I: IntoIterator<Item = DateTimeInterval>,
    {
        let mut iter = intervals.into_iter();
        let first = iter.next()?;
        let (start, end) = iter.fold((first.start, first.end()), |(start, end), iv| {
            (start.min(iv.start), end.max(iv.end()))
        });
        Some(Self {
            start,
            duration: end - start,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanning_reduces_min_start_max_end() {
        let overall = DateTimeInterval::spanning([
            DateTimeInterval::new(100, 50),
            DateTimeInterval::new(200, 10),
        ])
        .unwrap();
        assert_eq!(overall.start, 100);
        assert_eq!(overall.duration, 110);
    }

    #[test]
    fn spanning_empty_is_absent() {
        assert_eq!(DateTimeInterval::spanning([]), None);
    }

    #[test]
    fn spanning_single_is_identity() {
        let iv = DateTimeInterval::new(3600, 900);
        assert_eq!(DateTimeInterval::spanning([iv]), Some(iv));
    }

    #[test]
    fn spanning_is_order_insensitive() {
        let a = [
            DateTimeInterval::new(200, 10),
            DateTimeInterval::new(100, 50),
            DateTimeInterval::new(150, 20),
        ];
        let mut b = a;
        b.reverse();
        assert_eq!(
            DateTimeInterval::spanning(a),
            DateTimeInterval::spanning(b)
        );
    }
}
