//! Property-test run profile shared by the forest and connectivity suites.
//!
//! CI raises case counts through the environment; local runs fall back to the
//! defaults each suite passes in.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const PROXIMA_PBT_FORK_ENV_KEY: &str = "PROXIMA_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Load a profile from `PROPTEST_CASES` and `PROXIMA_PBT_FORK`, keeping
    /// the supplied defaults for unset or unparsable values.
    ///
    /// # Examples
    ///
    /// ```
    /// use proxima_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        let cases = read_env_or_default(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases);
        let fork = read_env_or_default(PROXIMA_PBT_FORK_ENV_KEY, default_fork, parse_bool);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    T: Copy,
    F: Fn(&str) -> Result<T, String>,
{
    match env::var(key) {
        Ok(raw) => match parser(&raw) {
            Ok(value) => value,
            Err(reason) => {
                tracing::warn!(
                    env = key,
                    raw = %raw,
                    reason = %reason,
                    "invalid property-test profile override; using default",
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    let normalized = raw.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
