use std::{fs, path::Path};

use log::{debug, info, warn};
use noisefield::{
    NoiseField, Seed,
    random::{RandomGenerator, get_seed, legacy_rand::LegacyRand, xoroshiro128::Xoroshiro},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

const MAX_SEED_LENGTH: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't access configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("couldn't parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("couldn't serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Which generator turns the seed into the 256 table draws.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeneratorKind {
    #[default]
    Xoroshiro,
    /// `java.util.Random` compatible LCG
    Legacy,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(default)]
pub struct NoiseConfiguration {
    /// The seed for the noise field. Numbers are used as-is, other text is hashed
    /// and an empty seed picks a fresh one on every start.
    pub seed: String,
    /// The generator fed with the seed.
    pub generator: GeneratorKind,
}

impl Default for NoiseConfiguration {
    fn default() -> Self {
        Self {
            seed: "".to_string(),
            generator: GeneratorKind::default(),
        }
    }
}

impl NoiseConfiguration {
    pub fn seed(&self) -> Seed {
        match self.seed.parse() {
            Ok(seed) => seed,
            Err(_) => {
                let seed = Seed::from(get_seed());
                info!("no seed configured, using {}", seed.0 as i64);
                seed
            }
        }
    }

    pub fn random(&self) -> RandomGenerator {
        let seed = self.seed().0;
        match self.generator {
            GeneratorKind::Xoroshiro => RandomGenerator::Xoroshiro(Xoroshiro::from_seed(seed)),
            GeneratorKind::Legacy => RandomGenerator::Legacy(LegacyRand::from_seed(seed)),
        }
    }

    pub fn build_field(&self) -> NoiseField {
        NoiseField::from_random(&mut self.random())
    }
}

pub trait LoadConfiguration {
    fn load(config_dir: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        if !config_dir.exists() {
            debug!("creating new config folder");
            fs::create_dir_all(config_dir)?;
        }
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path)?;
            toml::from_str(&file_content)?
        } else {
            let content = Self::default();

            if let Err(err) = fs::write(&path, toml::to_string(&content)?) {
                warn!(
                    "Couldn't write default config to {:?}. Reason: {}",
                    &path, err
                );
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadConfiguration for NoiseConfiguration {
    fn get_path() -> &'static Path {
        Path::new("noise.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.seed.chars().count() > MAX_SEED_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "seed must be at most {MAX_SEED_LENGTH} characters"
            )));
        }
        Ok(())
    }
}
