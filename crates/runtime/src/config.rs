//! Environment configuration.
//!
//! - `MEMORY_DIFFICULTY`: `easy`, `medium` or `hard` (default: easy)
//! - `MEMORY_RESOLVE_DELAY_MS`: face-up time before a pair resolves (default: 1000)
//! - `MEMORY_TICK_MS`: runtime tick interval (default: 50)
//! - `MEMORY_SEED`: fixed shuffle seed (default: random)
//! - `MEMORY_CATALOG_PATH`: JSON catalog file (default: built-in animals)
//! - `MEMORY_SOUND_DISABLED`: set to "1" or "true" to silence sound cues
//! - `MEMORY_LOG_PATH`: write logs to this file (default: no logging)
//! - `MEMORY_MAX_PENDING`: intent queue capacity (default: 16)

use std::env;
use std::path::PathBuf;

use crate::types::{Difficulty, MATCH_RESOLVE_DELAY_MS, RUNTIME_TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub difficulty: Difficulty,
    pub resolve_delay_ms: u32,
    pub tick_ms: u32,
    pub seed: Option<u64>,
    pub catalog_path: Option<PathBuf>,
    pub sound_enabled: bool,
    pub log_path: Option<PathBuf>,
    pub max_pending_intents: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            resolve_delay_ms: MATCH_RESOLVE_DELAY_MS,
            tick_ms: RUNTIME_TICK_MS,
            seed: None,
            catalog_path: None,
            sound_enabled: true,
            log_path: None,
            max_pending_intents: 16,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; missing or unparsable values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let difficulty = lookup("MEMORY_DIFFICULTY")
            .and_then(|s| Difficulty::from_str(&s))
            .unwrap_or(defaults.difficulty);

        let resolve_delay_ms = lookup("MEMORY_RESOLVE_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.resolve_delay_ms);

        let tick_ms = lookup("MEMORY_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let seed = lookup("MEMORY_SEED").and_then(|s| s.trim().parse().ok());

        let sound_enabled = !lookup("MEMORY_SOUND_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let max_pending_intents = lookup("MEMORY_MAX_PENDING")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_pending_intents)
            .max(1);

        Self {
            difficulty,
            resolve_delay_ms,
            tick_ms,
            seed,
            catalog_path: non_empty_path(lookup("MEMORY_CATALOG_PATH")),
            sound_enabled,
            log_path: non_empty_path(lookup("MEMORY_LOG_PATH")),
            max_pending_intents,
        }
    }
}

fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> RuntimeConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.resolve_delay_ms, 1000);
        assert!(config.sound_enabled);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("MEMORY_DIFFICULTY", "Hard"),
            ("MEMORY_RESOLVE_DELAY_MS", "250"),
            ("MEMORY_TICK_MS", "20"),
            ("MEMORY_SEED", "99"),
            ("MEMORY_CATALOG_PATH", "/tmp/animals.json"),
            ("MEMORY_SOUND_DISABLED", "TRUE"),
            ("MEMORY_LOG_PATH", "memory.log"),
            ("MEMORY_MAX_PENDING", "4"),
        ]);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.resolve_delay_ms, 250);
        assert_eq!(config.tick_ms, 20);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/animals.json")));
        assert!(!config.sound_enabled);
        assert_eq!(config.log_path, Some(PathBuf::from("memory.log")));
        assert_eq!(config.max_pending_intents, 4);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("MEMORY_DIFFICULTY", "nightmare"),
            ("MEMORY_RESOLVE_DELAY_MS", "soon"),
            ("MEMORY_TICK_MS", "0"),
            ("MEMORY_SEED", "-1"),
            ("MEMORY_CATALOG_PATH", "   "),
            ("MEMORY_MAX_PENDING", "0"),
        ]);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.resolve_delay_ms, 1000);
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.seed, None);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.max_pending_intents, 1);
    }
}
