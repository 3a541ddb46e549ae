use anyhow::{Context, Result};
use authenticator_lib::view::{AccessSchedule, DisplayOptions};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  pub tokens_file: PathBuf,
  pub display_options: DisplayOptions,
  pub schedule: AccessSchedule,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      tokens_file: default_tokens_file(),
      display_options: DisplayOptions::default(),
      schedule: AccessSchedule::default(),
    }
  }
}

fn config_dir() -> PathBuf {
  let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
  dirs::config_dir()
    .map(|configs| configs.join("authenticator"))
    .unwrap_or_else(|| home_dir.join(".authenticator"))
}

pub fn default_tokens_file() -> PathBuf {
  let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
  dirs::data_dir()
    .map(|data| data.join("authenticator"))
    .unwrap_or_else(|| home_dir.join(".authenticator"))
    .join("tokens.json")
}

pub fn config_file() -> PathBuf {
  config_dir().join("config.toml")
}

pub fn read_config(config_file: &Path) -> Result<Config> {
  match File::open(config_file) {
    Ok(mut file) => {
      let mut content = String::new();

      file
        .read_to_string(&mut content)
        .with_context(|| format!("Unable to read '{}'", config_file.to_string_lossy()))?;

      toml::from_str::<Config>(&content).with_context(|| format!("Invalid config file '{}'", config_file.to_string_lossy()))
    }
    Err(ref err) if err.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
    Err(err) => Err(err).with_context(|| format!("Unable to open '{}'", config_file.to_string_lossy())),
  }
}

pub fn write_config(config_file: &Path, config: &Config) -> Result<()> {
  let content = toml::to_string_pretty(config)?;

  if let Some(parent) = config_file.parent() {
    fs::create_dir_all(parent)?;
  }

  let mut file = File::create(config_file)?;

  file.write_all(content.as_bytes())?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::{read_config, write_config, Config};
  use authenticator_lib::view::DisplayOptions;
  use spectral::prelude::*;
  use std::fs;
  use tempfile::TempDir;

  #[test]
  fn test_missing_config_is_default() {
    let tmp_dir = TempDir::new().unwrap();

    assert_that(&read_config(&tmp_dir.path().join("config.toml")).unwrap()).is_equal_to(Config::default());
  }

  #[test]
  fn test_write_and_read_config() {
    let tmp_dir = TempDir::new().unwrap();
    let config_file = tmp_dir.path().join("sub").join("config.toml");
    let config = Config {
      tokens_file: tmp_dir.path().join("tokens.json"),
      display_options: DisplayOptions { digit_group_size: 3 },
      ..Default::default()
    };

    write_config(&config_file, &config).unwrap();

    assert_that(&read_config(&config_file).unwrap()).is_equal_to(config);
  }

  #[test]
  fn test_partial_config() {
    let tmp_dir = TempDir::new().unwrap();
    let config_file = tmp_dir.path().join("config.toml");

    fs::write(
      &config_file,
      "[display_options]\ndigit_group_size = 3\n\n[schedule.first]\nstart = \"08:00:00\"\nend = \"09:00:00\"\n\n[schedule.second]\nstart = \"20:00:00\"\nend = \"21:00:00\"\n",
    )
    .unwrap();

    let config = read_config(&config_file).unwrap();

    assert_that(&config.display_options.digit_group_size).is_equal_to(3);
    assert_that(&config.schedule.first.start.to_string()).is_equal_to("08:00:00".to_string());
    assert_that(&config.tokens_file).is_equal_to(Config::default().tokens_file);
  }
}
