use std::env;
use std::str::FromStr;

use anyhow::bail;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" => Ok(LogFormat::Text),
            other => bail!("unknown HEAPSEARCH_LOG_FORMAT {other:?} (expected json or text)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// `EnvFilter` directive, e.g. `info` or `heapsearch_core=trace`.
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("HEAPSEARCH_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());
        let log_format = match lookup("HEAPSEARCH_LOG_FORMAT") {
            Some(s) => s.parse()?,
            None => LogFormat::Json,
        };

        Ok(Self { log_filter, log_format })
    }
}
