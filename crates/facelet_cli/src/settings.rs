use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

const SETTINGS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_SETTINGS_STR: &str = include_str!("default.yaml");

const SETTINGS_FILE_NAME: &str = "facelet";
const SETTINGS_FILE_EXTENSION: &str = "yaml";
const ENV_PREFIX: &str = "FACELET";

type UserFile = config::File<config::FileSourceFile, config::FileFormat>;

/// How to print a cube.
#[derive(
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Unfolded plain-text net.
    #[default]
    Net,
    /// Structured JSON keyed by face.
    Json,
}

/// User settings for the command-line interface.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Settings {
    pub scramble_length: u32,
    pub output: OutputFormat,
    pub show_solved_check: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scramble_length: facelet::DEFAULT_SCRAMBLE_LENGTH,
            output: OutputFormat::Net,
            show_solved_check: true,
        }
    }
}

impl Settings {
    /// Loads settings from the built-in defaults, then `path` (or the user
    /// settings file if `path` is `None`), then `FACELET_*` environment
    /// variables.
    ///
    /// Returns an error if `path` is given and cannot be loaded. A broken user
    /// settings file or environment variable is skipped with a warning.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`Settings::load()`], but reads environment variables from `env`
    /// instead of the process environment if it is `Some`.
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let user_file = match path {
            Some(path) => {
                log::debug!("Loading settings from {}", path.display());
                let file = settings_file_source(path).required(true);
                Self::build(Some(file.clone()), None)
                    .wrap_err_with(|| format!("error loading settings from {}", path.display()))?;
                Some(file)
            }
            None => user_settings_file().and_then(|path| {
                log::debug!("Loading settings from {}", path.display());
                let file = settings_file_source(&path).required(false);
                match Self::build(Some(file.clone()), None) {
                    Ok(_) => Some(file),
                    Err(e) => {
                        log::warn!("Error loading settings from {}: {e}", path.display());
                        None
                    }
                }
            }),
        };

        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(env);
        match Self::build(user_file.clone(), Some(environment)) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                log::warn!("Ignoring {ENV_PREFIX}_* environment variables: {e}");
                Ok(Self::build(user_file, None)?)
            }
        }
    }

    fn build(
        user_file: Option<UserFile>,
        environment: Option<config::Environment>,
    ) -> Result<Self, config::ConfigError> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_SETTINGS_STR, SETTINGS_FILE_FORMAT));
        if let Some(file) = user_file {
            config = config.add_source(file);
        }
        if let Some(environment) = environment {
            config = config.add_source(environment);
        }
        config.build()?.try_deserialize()
    }
}

fn settings_file_source(path: &Path) -> UserFile {
    config::File::from(path).format(SETTINGS_FILE_FORMAT)
}

fn user_settings_file() -> Option<PathBuf> {
    let Some(dirs) = ProjectDirs::from("", "", "facelet") else {
        log::warn!("Error getting user config directory");
        return None;
    };
    Some(
        dirs.config_dir()
            .join(format!("{SETTINGS_FILE_NAME}.{SETTINGS_FILE_EXTENSION}")),
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn from_yaml(s: &str) -> Result<Settings, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_SETTINGS_STR, SETTINGS_FILE_FORMAT))
            .add_source(config::File::from_str(s, SETTINGS_FILE_FORMAT))
            .build()?
            .try_deserialize()
    }

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn env(vars: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            vars.iter()
                .map(|&(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        )
    }

    const USER_SETTINGS: &str = "output: json\nscramble_length: 7\nshow_solved_check: false\n";

    #[test]
    fn test_default_settings_file() {
        assert_eq!(from_yaml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_user_settings_override_defaults() {
        let settings = from_yaml("output: json\nscramble_length: 7").unwrap();
        assert_eq!(
            settings,
            Settings {
                scramble_length: 7,
                output: OutputFormat::Json,
                show_solved_check: true,
            },
        );
    }

    #[test]
    fn test_invalid_settings() {
        assert!(from_yaml("output: braille").is_err());
        assert!(from_yaml("scramble_length: -3").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let file = settings_file(USER_SETTINGS);
        let settings = Settings::load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(
            settings,
            Settings {
                scramble_length: 7,
                output: OutputFormat::Json,
                show_solved_check: false,
            },
        );
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = settings_file(USER_SETTINGS);
        let vars = env(&[("FACELET_SCRAMBLE_LENGTH", "12"), ("FACELET_OUTPUT", "net")]);
        let settings = Settings::load_with_env(Some(file.path()), vars).unwrap();
        assert_eq!(
            settings,
            Settings {
                scramble_length: 12,
                output: OutputFormat::Net,
                show_solved_check: false,
            },
        );
    }

    #[test]
    fn test_bad_environment_keeps_file() {
        let file = settings_file(USER_SETTINGS);
        let vars = env(&[("FACELET_SCRAMBLE_LENGTH", "abc")]);
        let settings = Settings::load_with_env(Some(file.path()), vars).unwrap();
        assert_eq!(
            settings,
            Settings {
                scramble_length: 7,
                output: OutputFormat::Json,
                show_solved_check: false,
            },
        );
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = Path::new("/nonexistent/facelet.yaml");
        let err = Settings::load_with_env(Some(path), env(&[])).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/facelet.yaml"));
    }

    #[test]
    fn test_broken_explicit_file_is_an_error() {
        let file = settings_file("output: braille\n");
        assert!(Settings::load_with_env(Some(file.path()), env(&[])).is_err());
    }
}
