use anyhow::{anyhow, Result};
use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::info;

use crate::ui::NumberPolicy;

pub struct Config {
    pub port: u16,
    pub catalog_path: PathBuf,
    pub number_policy: NumberPolicy,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            port: try_load(&lookup, "TABLE_ORDER_PORT", "5000")?,
            catalog_path: try_load(&lookup, "CATALOG_PATH", "catalog.json")?,
            number_policy: try_load(&lookup, "NUMBER_POLICY", "lenient")?,
        })
    }
}

fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| anyhow!("Invalid {key} value '{raw}': {e}"))
}
