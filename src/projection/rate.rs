//! Flat per-source rates and the seasonal crest multiplier.
//!
//! # Algorithm
//!
//! ```text
//! rate(s)     = min(budget / cpa, cap)        if enabled ∧ cpa > 0 ∧ budget > 0
//!             = 0                             otherwise        (cap = 0: unlimited)
//!
//! crest(i,N,k) = clamp(0.85 + 0.35·sin(π·t) + 0.05·sin(2π·(t + 0.17·k)), 0.70, 1.35)
//!               t = i / (N - 1), or 0 when N ≤ 1
//! ```
//!
//! The crest is a single hump over the window: low at both ends, peaking
//! mid-window. `k` only phase-shifts the small wobble term so that sources
//! do not move in lockstep. It is fixed per source key, so a source projects
//! the same curve whichever other sources share the campaign.

use std::f64::consts::PI;

use crate::models::Source;

/// Lower bound of the crest multiplier.
pub const CREST_MIN: f64 = 0.70;

/// Upper bound of the crest multiplier.
pub const CREST_MAX: f64 = 1.35;

/// Phase offset per source index in the wobble term.
const PHASE_STEP: f64 = 0.17;

/// Known source keys in crest phase order (`k = 0..5`).
pub const DEFAULT_SOURCE_PHASES: [&str; 5] =
    ["indeed", "facebook", "craigslist", "referrals", "qr_posters"];

/// Crest phase of a source: the key's index in `phases`, or its list
/// `position` when the key is not listed.
pub fn source_phase<S: AsRef<str>>(key: &str, position: usize, phases: &[S]) -> usize {
    phases
        .iter()
        .position(|p| p.as_ref() == key)
        .unwrap_or(position)
}

/// Expected applicants per day from one source before seasonal modulation.
///
/// Negative or non-finite amounts are treated as zero.
pub fn applicants_per_day(source: &Source) -> f64 {
    let s = source.sanitized();
    if !s.is_productive() {
        return 0.0;
    }
    let rate = s.daily_budget / s.cpa;
    if s.daily_cap > 0.0 {
        rate.min(s.daily_cap)
    } else {
        rate
    }
}

/// Seasonal multiplier for day `day` of a `days`-long window, for the
/// source at index `phase` in the source list.
pub fn crest(day: usize, days: usize, phase: usize) -> f64 {
    let t = if days <= 1 {
        0.0
    } else {
        day as f64 / (days - 1) as f64
    };
    let k = phase as f64 * PHASE_STEP;
    let raw = 0.85 + 0.35 * (PI * t).sin() + 0.05 * (2.0 * PI * (t + k)).sin();
    raw.clamp(CREST_MIN, CREST_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_uncapped() {
        let s = Source::new("indeed", 300.0, 20.0);
        assert!((applicants_per_day(&s) - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_rate_capped() {
        let s = Source::new("craigslist", 65.0, 12.40).with_cap(4.0);
        assert!((applicants_per_day(&s) - 4.0).abs() < 1e-10);
        // Cap above the rate is not binding
        let s = Source::new("craigslist", 65.0, 12.40).with_cap(14.0);
        assert!((applicants_per_day(&s) - 65.0 / 12.40).abs() < 1e-10);
    }

    #[test]
    fn test_rate_zero_cases() {
        let disabled = Source::new("facebook", 250.0, 23.12).with_enabled(false);
        let free = Source::new("referrals", 55.0, 0.0);
        let unfunded = Source::new("qr_posters", 0.0, 5.0);
        let negative = Source::new("indeed", -300.0, 18.43);
        for s in [&disabled, &free, &unfunded, &negative] {
            assert_eq!(applicants_per_day(s), 0.0, "{}", s.key);
        }
    }

    #[test]
    fn test_negative_cap_means_unlimited() {
        let s = Source::new("indeed", 100.0, 10.0).with_cap(-5.0);
        assert!((applicants_per_day(&s) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_crest_single_day() {
        // t = 0: 0.85 + 0.05·sin(2π·0.17k)
        assert!((crest(0, 1, 0) - 0.85).abs() < 1e-10);
        assert!((crest(0, 0, 0) - 0.85).abs() < 1e-10);
    }

    #[test]
    fn test_crest_hump() {
        let n = 29;
        let ends = crest(0, n, 0);
        let mid = crest(14, n, 0);
        let last = crest(n - 1, n, 0);
        assert!(mid > ends);
        assert!(mid > last);
        // 0.85 + 0.35 + 0.05·sin(π) = 1.2
        assert!((mid - 1.2).abs() < 1e-10);
    }

    #[test]
    fn test_crest_bounds() {
        for n in [1, 2, 7, 28, 366] {
            for k in 0..5 {
                for i in 0..n {
                    let c = crest(i, n, k);
                    assert!((CREST_MIN..=CREST_MAX).contains(&c));
                }
            }
        }
    }

    #[test]
    fn test_source_phase_by_key() {
        assert_eq!(source_phase("indeed", 3, &DEFAULT_SOURCE_PHASES), 0);
        assert_eq!(source_phase("facebook", 0, &DEFAULT_SOURCE_PHASES), 1);
        assert_eq!(source_phase("qr_posters", 0, &DEFAULT_SOURCE_PHASES), 4);
        // Unknown keys keep their list position
        assert_eq!(source_phase("job_fair", 2, &DEFAULT_SOURCE_PHASES), 2);
        assert_eq!(source_phase("indeed", 1, &[] as &[&str]), 1);
    }

    #[test]
    fn test_crest_phase_differs_per_source() {
        let a = crest(3, 10, 0);
        let b = crest(3, 10, 1);
        assert!((a - b).abs() > 1e-6);
    }
}
