use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::flags_config::FlagsConfig;
use crate::config::structs::local_cache_config::LocalCacheConfig;
use crate::topology::structs::server_topology::ServerTopology;

pub const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            cache: CacheConfig {
                server_topology: Some(String::from("127.0.0.1:11211")),
                ..CacheConfig::default()
            },
            flags: FlagsConfig::default(),
            local_cache: LocalCacheConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &Path) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &Path, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    /// Loads and validates `path`. With `create`, a missing or broken file is
    /// replaced by the defaults and [`ConfigurationError::Created`] is returned
    /// so the operator edits it before serving.
    pub fn load_from_file(path: &Path, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own config file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())?;
                Configuration::save_file(path, config_toml)?;
                return Err(ConfigurationError::Created(path.display().to_string()));
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::InvalidLogLevel(self.log_level.clone()));
        }
        self.topology()?;
        Ok(())
    }

    pub fn topology(&self) -> Result<ServerTopology, ConfigurationError> {
        ServerTopology::parse(self.cache.server_topology.as_deref().unwrap_or_default())
    }
}
