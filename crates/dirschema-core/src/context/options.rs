use crate::DEFAULT_SUBSTRING_KEY_SIZE;
use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// SchemaOptions
///
/// Schema-wide leniency flags consulted by validators and normalizers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
#[expect(clippy::struct_excessive_bools)]
pub struct SchemaOptions {
    /// Accept the empty string as a DirectoryString value.
    pub allow_zero_length_values_directory_string: bool,

    /// Relax descriptor grammar: `_` and leading digits or hyphens.
    pub allow_malformed_names_and_options: bool,

    /// Skip the JFIF/Exif header check for JPEG values.
    pub allow_malformed_jpeg_photos: bool,

    /// Unknown attribute types in DNs are errors rather than lower-cased
    /// fallbacks.
    pub strict_format: bool,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            allow_zero_length_values_directory_string: false,
            allow_malformed_names_and_options: false,
            allow_malformed_jpeg_photos: true,
            strict_format: false,
        }
    }
}

///
/// IndexingOptions
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IndexingOptions {
    pub substring_key_size: usize,
}

impl IndexingOptions {
    #[must_use]
    pub const fn new(substring_key_size: usize) -> Self {
        Self { substring_key_size }
    }
}

impl Default for IndexingOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSTRING_KEY_SIZE)
    }
}

///
/// EngineConfig
///
/// TOML-facing bundle of every option table the engine reads.
///
/// ```toml
/// [schema]
/// allow_malformed_names_and_options = true
///
/// [indexing]
/// substring_key_size = 4
/// ```
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub schema: SchemaOptions,
    pub indexing: IndexingOptions,
}

impl EngineConfig {
    /// Parse a TOML document into a validated configuration.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.indexing.substring_key_size == 0 {
            return Err(ConfigError::ZeroSubstringKeySize);
        }

        Ok(())
    }
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("indexing.substring_key_size must be greater than zero")]
    ZeroSubstringKeySize,
}
