use std::time::{Duration, Instant};

/// Cancellable per-question countdown.
///
/// Owned by the app: started on every question entry and dropped on
/// every exit (answer, expiry, finish), so a stale deadline can never
/// bleed into a later question. All queries take an explicit `now` so
/// tests can drive time deterministically.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    deadline: Instant,
}

impl Countdown {
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            deadline: now + duration,
        }
    }

    /// Whole seconds left, rounded up so a freshly started 30s
    /// countdown reads 30 and only hits 0 at the deadline.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let left = self.deadline.saturating_duration_since(now);
        left.as_secs_f64().ceil() as u64
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_countdown_reads_full_duration() {
        let now = Instant::now();
        let countdown = Countdown::start(now, Duration::from_secs(30));
        assert_eq!(countdown.remaining_secs(now), 30);
        assert!(!countdown.is_expired(now));
    }

    #[test]
    fn test_partial_seconds_round_up() {
        let now = Instant::now();
        let countdown = Countdown::start(now, Duration::from_secs(30));
        let later = now + Duration::from_millis(500);
        assert_eq!(countdown.remaining_secs(later), 30);
        assert_eq!(countdown.remaining_secs(now + Duration::from_millis(29_500)), 1);
    }

    #[test]
    fn test_expiry() {
        let now = Instant::now();
        let countdown = Countdown::start(now, Duration::from_secs(30));
        let at_deadline = now + Duration::from_secs(30);
        assert!(countdown.is_expired(at_deadline));
        assert_eq!(countdown.remaining_secs(at_deadline), 0);

        let past = now + Duration::from_secs(45);
        assert!(countdown.is_expired(past));
        assert_eq!(countdown.remaining_secs(past), 0);
    }
}
