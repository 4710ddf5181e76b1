//! Calculator settings.
//!
//! Read once at startup and passed by reference into the paginator.

use serde::Serialize;

/// Environment variable overriding [`CalcConfig::items_per_page`].
pub const ENV_ITEMS_PER_PAGE: &str = "SUBNET_CALC_ITEMS_PER_PAGE";
/// Environment variable overriding [`CalcConfig::pages_before_after`].
pub const ENV_PAGES_BEFORE_AFTER: &str = "SUBNET_CALC_PAGES_BEFORE_AFTER";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcConfig {
    /// Sibling subnets listed per page.
    pub items_per_page: usize,
    /// Pages materialised on each side of the centre page.
    pub pages_before_after: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            items_per_page: 20,
            pages_before_after: 10,
        }
    }
}

impl CalcConfig {
    /// Defaults, overridden by the process environment or a `.env` file.
    pub fn from_env() -> CalcConfig {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> CalcConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CalcConfig::default();
        if let Some(n) = read_count(&lookup, ENV_ITEMS_PER_PAGE, 1) {
            config.items_per_page = n;
        }
        if let Some(n) = read_count(&lookup, ENV_PAGES_BEFORE_AFTER, 0) {
            config.pages_before_after = n;
        }
        log::debug!("Using {:?}", config);
        config
    }
}

fn read_count<F>(lookup: &F, key: &str, min: usize) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= min => Some(n),
        _ => {
            log::warn!("Ignoring {key}={raw:?}, expected a whole number >= {min}");
            None
        }
    }
}
