//! Rate-limited failure tracking.
//!
//! Forecast fetches run on a schedule, so a broken upstream would otherwise
//! repeat the same failure line every attempt. This tracker answers "should
//! this failure be logged right now?" with a per-key cooldown and a bounded
//! key set. It is plain shared state to be injected wherever fetching
//! happens — never a module-level global — so tests can drive its clock.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

const FAILURE_LOG_COOLDOWN_MS: i64 = 60_000;
const MAX_TRACKED_FAILURE_KEYS: usize = 16;

/// Bounded, insertion-ordered map of failure keys to their last logged time.
pub struct FailureLog {
    entries: Mutex<Vec<(String, DateTime<Utc>)>>,
}

impl FailureLog {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Whether a failure for `key` should be logged now.
    ///
    /// True on the first failure for a key and again once the cooldown has
    /// elapsed; the key's timestamp is refreshed only when true is returned,
    /// so suppressed failures do not extend the cooldown.
    pub fn should_log(&self, key: &str) -> bool {
        self.should_log_at(key, Utc::now())
    }

    /// Clock-injected variant of [`should_log`](Self::should_log); all the
    /// decision logic lives here.
    pub fn should_log_at(&self, key: &str, now: DateTime<Utc>) -> bool {
        let mut entries = self.entries.lock();

        if let Some((_, last)) = entries.iter().find(|(k, _)| k == key) {
            if (now - *last).num_milliseconds() < FAILURE_LOG_COOLDOWN_MS {
                return false;
            }
        }

        // Evict the oldest inserted key when full, then stamp
        if entries.len() >= MAX_TRACKED_FAILURE_KEYS {
            entries.remove(0);
        }
        match entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = now,
            None => entries.push((key.to_string(), now)),
        }
        true
    }

    /// Forget one key. Call after a success so the next failure for that key
    /// logs immediately.
    pub fn clear(&self, key: &str) {
        self.entries.lock().retain(|(k, _)| k != key);
    }

    /// Forget everything.
    pub fn clear_all(&self) {
        self.entries.lock().clear();
    }
}

impl Default for FailureLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        "2024-01-15T20:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_first_failure_logs() {
        let log = FailureLog::new();
        assert!(log.should_log_at("forecast", t0()));
    }

    #[test]
    fn test_repeat_within_cooldown_suppressed() {
        let log = FailureLog::new();
        assert!(log.should_log_at("forecast", t0()));
        assert!(!log.should_log_at("forecast", t0() + Duration::seconds(30)));
        assert!(!log.should_log_at("forecast", t0() + Duration::seconds(59)));
    }

    #[test]
    fn test_logs_again_after_cooldown() {
        let log = FailureLog::new();
        assert!(log.should_log_at("forecast", t0()));
        assert!(log.should_log_at("forecast", t0() + Duration::seconds(60)));
    }

    #[test]
    fn test_suppressed_failures_do_not_extend_cooldown() {
        let log = FailureLog::new();
        assert!(log.should_log_at("forecast", t0()));
        // This suppressed call must not refresh the stamp...
        assert!(!log.should_log_at("forecast", t0() + Duration::seconds(45)));
        // ...so the original cooldown still ends at t0 + 60s
        assert!(log.should_log_at("forecast", t0() + Duration::seconds(61)));
    }

    #[test]
    fn test_keys_are_independent() {
        let log = FailureLog::new();
        assert!(log.should_log_at("forecast", t0()));
        assert!(log.should_log_at("telegram", t0()));
        assert!(!log.should_log_at("forecast", t0() + Duration::seconds(10)));
        assert!(!log.should_log_at("telegram", t0() + Duration::seconds(10)));
    }

    #[test]
    fn test_clear_resets_key() {
        let log = FailureLog::new();
        assert!(log.should_log_at("forecast", t0()));
        log.clear("forecast");
        assert!(log.should_log_at("forecast", t0() + Duration::seconds(1)));
    }

    #[test]
    fn test_clear_all() {
        let log = FailureLog::new();
        assert!(log.should_log_at("a", t0()));
        assert!(log.should_log_at("b", t0()));
        log.clear_all();
        assert!(log.should_log_at("a", t0() + Duration::seconds(1)));
        assert!(log.should_log_at("b", t0() + Duration::seconds(1)));
    }

    #[test]
    fn test_capacity_evicts_oldest_key() {
        let log = FailureLog::new();
        for i in 0..16 {
            assert!(log.should_log_at(&format!("key-{}", i), t0()));
        }
        // 17th key evicts key-0
        assert!(log.should_log_at("key-16", t0() + Duration::seconds(1)));

        // key-0 was forgotten, so it logs again despite the cooldown window
        // (and its re-insertion evicts key-1 in turn)
        assert!(log.should_log_at("key-0", t0() + Duration::seconds(2)));
        // key-15 is still tracked and still cooling down
        assert!(!log.should_log_at("key-15", t0() + Duration::seconds(2)));
    }
}
