use rand::Rng;
use std::time::Duration;

/// Exponential backoff with a cap and jitter.
///
/// Every delay is half fixed and half random, so two peers failing at the
/// same moment do not hammer the servers in lockstep.
#[derive(Debug, Clone)]
pub struct Backoff {
    base: Duration,
    cap: Duration,
    attempt: u32,
}

impl Backoff {
    pub fn new(base: Duration, cap: Duration) -> Self {
        Self {
            base,
            cap,
            attempt: 0,
        }
    }

    pub fn next_delay(&mut self) -> Duration {
        let exp = self
            .base
            .saturating_mul(1 << self.attempt.min(16))
            .min(self.cap);
        self.attempt = self.attempt.saturating_add(1);

        let half = exp / 2;
        half + half.mul_f64(rand::thread_rng().gen::<f64>())
    }

    pub fn reset(&mut self) {
        self.attempt = 0;
    }

    /// delays handed out since the last reset
    pub fn attempt(&self) -> u32 {
        self.attempt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_and_cap() {
        let base = Duration::from_millis(100);
        let cap = Duration::from_secs(1);
        let mut b = Backoff::new(base, cap);

        for i in 0..12u32 {
            let exp = (base * 2u32.pow(i)).min(cap);
            let d = b.next_delay();
            assert!(d >= exp / 2 && d <= exp, "attempt {} gave {:?}", i, d);
        }
        assert_eq!(b.attempt(), 12);
    }

    #[test]
    fn test_reset() {
        let mut b = Backoff::new(Duration::from_millis(10), Duration::from_secs(10));
        for _ in 0..5 {
            b.next_delay();
        }
        b.reset();
        assert_eq!(b.attempt(), 0);
        assert!(b.next_delay() <= Duration::from_millis(10));
    }

    #[test]
    fn test_zero_base() {
        let mut b = Backoff::new(Duration::ZERO, Duration::from_secs(1));
        for _ in 0..40 {
            assert_eq!(b.next_delay(), Duration::ZERO);
        }
    }
}
