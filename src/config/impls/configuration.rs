use std::fs::File;
use std::io::Write;
use log::warn;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::core_config::CoreConfig;
use crate::config::structs::persistence_config::PersistenceConfig;
use crate::config::structs::seed_generation_config::SeedGenerationConfig;
use crate::security::security::{generate_secure_passkey, validate_passkey_strength};
use crate::seeds::generator::generate_seeds;

pub const DEFAULT_SEED_LENGTH: usize = 32;
pub const DEFAULT_SEED_COUNT: usize = 4;
pub const MAX_SEED_LENGTH: usize = 256;
pub const MAX_SEED_COUNT: usize = 64;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            core: CoreConfig {
                hidden_passkey: generate_secure_passkey(),
            },
            seeds: SeedGenerationConfig {
                seed_length: DEFAULT_SEED_LENGTH,
                seed_count: DEFAULT_SEED_COUNT,
                default_seeds: generate_seeds(DEFAULT_SEED_COUNT, DEFAULT_SEED_LENGTH),
            },
            persistence: PersistenceConfig {
                enabled: true,
                path: String::from("./data"),
                interval: 60,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create config file automatically"));
                }
                eprintln!("Creating config file..");

                let config_toml = Configuration::init()
                    .to_toml()
                    .map_err(|e| CustomError::new(&format!("could not serialize default config: {e}")))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("A random hidden passkey was written to {path}, review the file and restart...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        Self::validate_value("log_level", &self.log_level, r"^(off|trace|debug|info|warn|error)$")?;
        for (index, seed) in self.seeds.default_seeds.iter().enumerate() {
            Self::validate_value(&format!("[seeds] default_seeds[{index}]"), seed, r"^\S+$")?;
        }

        if self.seeds.seed_length == 0 || self.seeds.seed_length > MAX_SEED_LENGTH {
            return Err(CustomError::new(&format!(
                "[VALIDATE CONFIG] [seeds] seed_length must be between 1 and {MAX_SEED_LENGTH}, got {}",
                self.seeds.seed_length
            )));
        }
        if self.seeds.seed_count > MAX_SEED_COUNT {
            return Err(CustomError::new(&format!(
                "[VALIDATE CONFIG] [seeds] seed_count must be at most {MAX_SEED_COUNT}, got {}",
                self.seeds.seed_count
            )));
        }

        if self.persistence.enabled {
            if self.persistence.path.trim().is_empty() {
                return Err(CustomError::new("[VALIDATE CONFIG] [persistence] path is required when persistence is enabled"));
            }
            if self.persistence.interval == 0 {
                return Err(CustomError::new("[VALIDATE CONFIG] [persistence] interval must be greater than 0"));
            }
            if self.core.hidden_passkey.is_empty() {
                return Err(CustomError::new("[VALIDATE CONFIG] [core] hidden_passkey is required when persistence is enabled"));
            }
        }

        Ok(())
    }

    /// Warns about an empty or weak hidden passkey. Neither stops the boot.
    pub fn check_passkey(&self) -> bool {
        if self.core.hidden_passkey.is_empty() {
            warn!("[VALIDATE CONFIG] [core] hidden_passkey is empty, hidden items cannot be restored");
            return false;
        }
        if !validate_passkey_strength(&self.core.hidden_passkey) {
            warn!("[VALIDATE CONFIG] [core] hidden_passkey is weak, use at least 12 characters of mixed classes");
            return false;
        }
        true
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), CustomError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|e| CustomError::new(&format!("[VALIDATE CONFIG] Invalid regex {regex}: {e}")))?;
        if !regex_check.is_match(value) {
            return Err(CustomError::new(&format!(
                "[VALIDATE CONFIG] Error checking {name} [:] Value: \"{value}\" [:] Regex: \"{regex_check}\""
            )));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
