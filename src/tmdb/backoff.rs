use rand::Rng;
use std::time::Duration;

/// Wait before retry number `retry` (1-based): `base` doubled for every
/// earlier retry, capped at `max`, plus up to a tenth of that as jitter.
pub fn retry_delay(retry: u32, base: Duration, max: Duration) -> Duration {
    if retry == 0 {
        return Duration::ZERO;
    }

    let factor = 1u32.checked_shl(retry - 1).unwrap_or(u32::MAX);
    let delay = base.saturating_mul(factor).min(max);

    let jitter_ms = (delay.as_millis() / 10) as u64;
    if jitter_ms == 0 {
        return delay;
    }
    delay + Duration::from_millis(rand::thread_rng().gen_range(0..jitter_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Duration = Duration::from_millis(100);
    const MAX: Duration = Duration::from_millis(1000);

    #[test]
    fn test_no_wait_before_first_attempt() {
        assert_eq!(retry_delay(0, BASE, MAX), Duration::ZERO);
    }

    #[test]
    fn test_delay_doubles() {
        let first = retry_delay(1, BASE, MAX).as_millis();
        assert!((100..110).contains(&first), "got {first}");

        let third = retry_delay(3, BASE, MAX).as_millis();
        assert!((400..440).contains(&third), "got {third}");
    }

    #[test]
    fn test_delay_is_capped() {
        for retry in [5, 31, 32, 200] {
            let delay = retry_delay(retry, BASE, MAX).as_millis();
            assert!((1000..1100).contains(&delay), "retry {retry}: got {delay}");
        }
    }

    #[test]
    fn test_small_base_has_no_jitter() {
        let base = Duration::from_millis(5);
        assert_eq!(retry_delay(1, base, MAX), base);
    }
}
