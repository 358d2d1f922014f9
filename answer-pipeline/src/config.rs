//! Pipeline config: queue capacity, dispatcher concurrency, reply markup. Loaded from env.

use anyhow::{Context, Result};
use answer_core::Markup;
use std::env;

/// Default number of items the ingestion queue holds before producers wait.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Pipeline config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// QUEUE_CAPACITY; `None` means unbounded ("0" or "unbounded" in env)
    pub queue_capacity: Option<usize>,
    /// RESOLVER_CONCURRENCY; 1 handles updates one at a time
    pub max_concurrency: usize,
    /// REPLY_MARKUP: markdownv2 | html
    pub markup: Markup,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            queue_capacity: Some(DEFAULT_QUEUE_CAPACITY),
            max_concurrency: 1,
            markup: Markup::MarkdownV2,
        }
    }
}

impl PipelineConfig {
    /// Load from environment variables; unset variables take the defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let queue_capacity = match env::var("QUEUE_CAPACITY") {
            Ok(s) => parse_capacity(&s)?,
            Err(_) => defaults.queue_capacity,
        };
        let max_concurrency = match env::var("RESOLVER_CONCURRENCY") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("RESOLVER_CONCURRENCY is not a number: {}", s))?,
            Err(_) => defaults.max_concurrency,
        };
        let markup = match env::var("REPLY_MARKUP") {
            Ok(s) => s.parse::<Markup>()?,
            Err(_) => defaults.markup,
        };

        Ok(Self {
            queue_capacity,
            max_concurrency,
            markup,
        })
    }

    /// Validate config (concurrency must be at least 1).
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrency == 0 {
            anyhow::bail!("RESOLVER_CONCURRENCY must be at least 1");
        }
        Ok(())
    }
}

fn parse_capacity(s: &str) -> Result<Option<usize>> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("unbounded") {
        return Ok(None);
    }
    let n: usize = s
        .parse()
        .with_context(|| format!("QUEUE_CAPACITY is neither a number nor 'unbounded': {}", s))?;
    Ok(if n == 0 { None } else { Some(n) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("QUEUE_CAPACITY");
        env::remove_var("RESOLVER_CONCURRENCY");
        env::remove_var("REPLY_MARKUP");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = PipelineConfig::from_env().unwrap();

        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.queue_capacity, Some(256));
        assert_eq!(config.max_concurrency, 1);
        assert_eq!(config.markup, Markup::MarkdownV2);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        env::set_var("QUEUE_CAPACITY", "8");
        env::set_var("RESOLVER_CONCURRENCY", "4");
        env::set_var("REPLY_MARKUP", "html");

        let config = PipelineConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.queue_capacity, Some(8));
        assert_eq!(config.max_concurrency, 4);
        assert_eq!(config.markup, Markup::Html);
    }

    #[test]
    #[serial]
    fn test_from_env_unbounded_queue() {
        clear_env();
        env::set_var("QUEUE_CAPACITY", "unbounded");
        assert_eq!(PipelineConfig::from_env().unwrap().queue_capacity, None);

        env::set_var("QUEUE_CAPACITY", "0");
        assert_eq!(PipelineConfig::from_env().unwrap().queue_capacity, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_values() {
        clear_env();
        env::set_var("QUEUE_CAPACITY", "lots");
        assert!(PipelineConfig::from_env().is_err());
        clear_env();

        env::set_var("REPLY_MARKUP", "bbcode");
        assert!(PipelineConfig::from_env().is_err());
        clear_env();

        env::set_var("RESOLVER_CONCURRENCY", "0");
        let config = PipelineConfig::from_env().unwrap();
        clear_env();
        assert!(config.validate().is_err());
    }
}
