//! Shared configuration loader for the seqgen tools.
//!
//! `defaults/seqgen.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SeqgenConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use seqgen_core::seq::alphabet::{Alphabet, AlphabetError};
use seqgen_core::seq::creator::SequenceCreator;
use seqgen_core::seq::preview::PreviewOptions;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../defaults/seqgen.default.toml");

/// Why a configuration could not be turned into a working [`SequenceCreator`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source was missing, malformed, or did not match [`SeqgenConfig`].
    #[error(transparent)]
    Load(#[from] config::ConfigError),
    #[error("invalid alphabet.letters: {0}")]
    Alphabet(#[from] AlphabetError),
}

/// Top-level configuration consumed by seqgen applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SeqgenConfig {
    pub alphabet: AlphabetConfig,
    pub preview: PreviewOptions,
    pub fill: FillConfig,
}

/// Letters used by alphabetic sequences, in order.
#[derive(Debug, Clone, Deserialize)]
pub struct AlphabetConfig {
    pub letters: String,
}

/// Settings for rewriting files.
#[derive(Debug, Clone, Deserialize)]
pub struct FillConfig {
    pub marker: String,
}

impl SeqgenConfig {
    /// Validate the configured letters.
    pub fn alphabet(&self) -> Result<Alphabet, AlphabetError> {
        self.alphabet.letters.parse()
    }

    /// A creator wired with the configured alphabet and preview shape.
    pub fn creator(&self) -> Result<SequenceCreator, ConfigError> {
        Ok(SequenceCreator::new(self.alphabet()?, self.preview.clone()))
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `alphabet.letters` from `--alphabet`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and deserialize. The alphabet is checked here so a bad `letters` value
    /// is reported at load time rather than on first use.
    pub fn build(self) -> Result<SeqgenConfig, ConfigError> {
        let config: SeqgenConfig = self.builder.build()?.try_deserialize()?;
        config.alphabet()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SeqgenConfig, ConfigError> {
    Loader::new().build()
}
