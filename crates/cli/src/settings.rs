use std::path::{Path, PathBuf};

use clap::Parser;
use directories::ProjectDirs;
use seesaw_core::{BalanceConfigError, validate_config};
use seesaw_protocol::{BalanceConfig, SceneStyle};
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "SEESAW";
const CONFIG_FILE_NAME: &str = "seesaw.toml";

#[derive(Parser, Debug, Default)]
#[command(name = "seesaw", version, about, long_about = None)]
pub struct Cli {
    /// Image placed on the right (good) end of the seesaw
    #[arg(long)]
    pub good_image: Option<PathBuf>,

    /// Image placed on the left (low) end of the seesaw
    #[arg(long)]
    pub low_image: Option<PathBuf>,

    /// Where to write the generated HTML page
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of items in the good category
    #[arg(short, long)]
    pub good_count: Option<u64>,

    /// Number of items in the low category
    #[arg(short, long)]
    pub low_count: Option<u64>,

    /// Tilt reached when one side holds every item, in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub max_tilt: Option<f64>,

    /// Scale applied to the dominant side (the other side gets the reciprocal)
    #[arg(long, allow_negative_numbers = true)]
    pub size_ratio: Option<f64>,

    /// Emoji edge length in pixels before scaling
    #[arg(long)]
    pub emoji_size: Option<u32>,

    /// Read settings from this TOML file instead of the user config directory
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the computed balance as JSON on stdout
    #[arg(long)]
    pub print_balance: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub good_image: PathBuf,
    pub low_image: PathBuf,
    pub output: PathBuf,
    pub good_count: u64,
    pub low_count: u64,
    pub balance: BalanceConfig,
    pub style: SceneStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            good_image: PathBuf::from("./img/good_sleep_emoji.png"),
            low_image: PathBuf::from("./img/low_sleep_emoji.png"),
            output: PathBuf::from("animated_seesaw.html"),
            good_count: 4,
            low_count: 6,
            balance: BalanceConfig::default(),
            style: SceneStyle::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_config(&self.balance)?;
        if self.style.emoji_size_px == 0 {
            return Err(SettingsError::ZeroEmojiSize);
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid balance settings: {0}")]
    Balance(#[from] BalanceConfigError),
    #[error("Emoji size must be greater than zero")]
    ZeroEmojiSize,
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "seesaw", "seesaw")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Resolve settings from the config file, `SEESAW_*` environment variables
/// and command line flags, in increasing order of precedence.
pub fn load_settings(cli: &Cli) -> Result<Settings, SettingsError> {
    load_settings_with_env(cli, None)
}

/// Like [`load_settings`], but reads environment overrides from `env` when
/// given instead of the process environment.
pub fn load_settings_with_env(
    cli: &Cli,
    env: Option<config::Map<String, String>>,
) -> Result<Settings, SettingsError> {
    let mut builder = config::Config::builder();

    match &cli.config {
        Some(path) => {
            log::debug!("Loading settings from {}", path.display());
            builder = builder.add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }
        None => {
            if let Some(path) = default_config_path() {
                log::debug!("Looking for settings in {}", path.display());
                builder = builder.add_source(
                    config::File::from(path)
                        .format(config::FileFormat::Toml)
                        .required(false),
                );
            }
        }
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .set_override_option("good_image", cli.good_image.as_deref().map(path_value))?
        .set_override_option("low_image", cli.low_image.as_deref().map(path_value))?
        .set_override_option("output", cli.output.as_deref().map(path_value))?
        .set_override_option("good_count", cli.good_count)?
        .set_override_option("low_count", cli.low_count)?
        .set_override_option("balance.max_tilt_degrees", cli.max_tilt)?
        .set_override_option("balance.size_change_ratio", cli.size_ratio)?
        .set_override_option("style.emoji_size_px", cli.emoji_size.map(u64::from))?
        .build()?
        .try_deserialize::<Settings>()?;

    settings.validate()?;
    Ok(settings)
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
