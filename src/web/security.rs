use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Sliding-window in-memory rate limiter, keyed by caller-chosen strings
/// such as `login:<ip>`.
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<SystemTime>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Returns false once `max_requests` have been seen for `key` within
    /// `window`.
    pub fn check_rate_limit(
        &self,
        key: &str,
        max_requests: usize,
        window: Duration,
    ) -> bool {
        let now = SystemTime::now();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = requests.entry(key.to_string()).or_default();

        entry.retain(|&time| {
            now.duration_since(time).unwrap_or(Duration::ZERO) < window
        });

        if entry.len() >= max_requests {
            return false;
        }

        entry.push(now);

        // Drop empty keys so the map cannot grow without bound.
        requests.retain(|_, times| !times.is_empty());

        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Syntactic email check: one `@`, a non-empty local part, a dotted domain.
/// Anything subtler is the mail server's problem.
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_plain_addresses() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("traveler+tag@mail.example.org"));
        assert!(validate_email("  padded@example.com  "));
    }

    #[test]
    fn test_validate_email_rejects_malformed_addresses() {
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("user@nodot"));
        assert!(!validate_email("user@.com"));
        assert!(!validate_email("two@@example.com"));
    }

    #[test]
    fn test_rate_limiter_blocks_after_max_requests() {
        let limiter = RateLimiter::new();
        let window = Duration::from_secs(60);

        for _ in 0..5 {
            assert!(limiter.check_rate_limit("login:1.2.3.4", 5, window));
        }
        assert!(!limiter.check_rate_limit("login:1.2.3.4", 5, window));
        // Other keys are unaffected.
        assert!(limiter.check_rate_limit("login:5.6.7.8", 5, window));
    }
}
