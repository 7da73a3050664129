use blackjack_engine::participant::HOUSE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "BLACKJACK_CONFIG";
pub const SEED_ENV: &str = "BLACKJACK_SEED";
pub const HOUSE_NAME_ENV: &str = "BLACKJACK_HOUSE_NAME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub house_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub house_name: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            house_name: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            house_name: HOUSE_NAME.into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves defaults, then the file named by `BLACKJACK_CONFIG`, then env overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.house_name {
            cfg.house_name = v;
            sources.house_name = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(name) = std::env::var(HOUSE_NAME_ENV)
        && !name.is_empty()
    {
        cfg.house_name = name;
        sources.house_name = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    house_name: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.house_name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "house_name must not be blank".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    struct EnvGuard {
        restores: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn apply(pairs: &[(&'static str, Option<&str>)]) -> Self {
            let mut restores = Vec::new();
            for (key, value) in pairs {
                restores.push((*key, std::env::var(key).ok()));
                // SAFETY: tests touching the environment are serialized
                unsafe {
                    match value {
                        Some(v) => std::env::set_var(key, v),
                        None => std::env::remove_var(key),
                    }
                }
            }
            EnvGuard { restores }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, previous) in self.restores.iter().rev() {
                // SAFETY: see EnvGuard::apply
                unsafe {
                    match previous {
                        Some(val) => std::env::set_var(key, val),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    fn clean_env() -> EnvGuard {
        EnvGuard::apply(&[(CONFIG_ENV, None), (SEED_ENV, None), (HOUSE_NAME_ENV, None)])
    }

    #[test]
    #[serial]
    fn defaults_without_file_or_env() {
        let _env = clean_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.seed, ValueSource::Default);
        assert_eq!(resolved.sources.house_name, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn file_values_then_env_overrides() {
        let _env = clean_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7\nhouse_name = \"Dealer\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let _file_env = EnvGuard::apply(&[(CONFIG_ENV, Some(path.as_str()))]);
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config.seed, Some(7));
        assert_eq!(resolved.config.house_name, "Dealer");
        assert_eq!(resolved.sources.seed, ValueSource::File);

        let _seed_env = EnvGuard::apply(&[(SEED_ENV, Some("99"))]);
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.sources.house_name, ValueSource::File);
    }

    #[test]
    #[serial]
    fn bad_seed_is_rejected() {
        let _env = clean_env();
        let _seed = EnvGuard::apply(&[(SEED_ENV, Some("lots"))]);
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn blank_house_name_is_rejected() {
        let _env = clean_env();
        let _name = EnvGuard::apply(&[(HOUSE_NAME_ENV, Some("   "))]);
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn unknown_file_keys_are_a_parse_error() {
        let _env = clean_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "decks = 6").unwrap();
        let path = file.path().to_string_lossy().to_string();
        let _file_env = EnvGuard::apply(&[(CONFIG_ENV, Some(path.as_str()))]);
        assert!(matches!(load(), Err(ConfigError::Parse(_))));
    }
}
