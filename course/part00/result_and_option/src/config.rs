use std::path::Path;

use config::{
    builder::DefaultState, ConfigBuilder, ConfigError, Environment, File, FileFormat,
    FileSourceFile,
};
use serde::Deserialize;

const ENV_PREFIX: &str = "RESULT_AND_OPTION";

/// Inputs fed to the two producing functions by the demo driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    pub some_input: i32,
    pub result_input: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            some_input: 3,
            result_input: 0,
        }
    }
}

impl DemoConfig {
    /// Defaults, then `result_and_option.{toml,json,...}` in the working directory if present,
    /// then `RESULT_AND_OPTION_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = with_file(File::with_name("result_and_option").required(false))?;
        builder.add_source(env_source()).build()?.try_deserialize()
    }

    /// Like [`DemoConfig::load`], but the named file must exist and parse.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = with_file(File::from(path.as_ref()).required(true))?;
        builder.add_source(env_source()).build()?.try_deserialize()
    }

    /// Defaults overlaid with the named file only. The environment is not consulted.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        with_file(File::from(path.as_ref()).required(true))?
            .build()?
            .try_deserialize()
    }
}

fn with_file(
    file: File<FileSourceFile, FileFormat>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = DemoConfig::default();
    Ok(config::Config::builder()
        .set_default("some_input", defaults.some_input)?
        .set_default("result_input", defaults.result_input)?
        .add_source(file))
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}
