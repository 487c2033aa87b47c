pub mod diagnostics;

use camino::Utf8Path;
use config::Config;
use config::File;
use config::FileFormat;
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

pub use crate::diagnostics::DiagnosticSeverity;
pub use crate::diagnostics::DiagnosticsConfig;

/// BaseLinker rejects templates longer than this many characters.
pub const DEFAULT_MAX_SIZE: usize = 25_000;
/// Host path every static e-mail image is expected to live under.
pub const DEFAULT_IMAGE_HOST: &str = "jumpsafe.eu/mail-images/";
/// Width of the mobile `@media` breakpoint.
pub const DEFAULT_BREAKPOINT_PX: u32 = 600;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration build/deserialize error")]
    Config(#[from] config::ConfigError),
    #[error("Configuration file not found: {0}")]
    MissingFile(String),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    debug: bool,
    max_size: usize,
    image_host: String,
    breakpoint_px: u32,
    diagnostics: DiagnosticsConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            max_size: DEFAULT_MAX_SIZE,
            image_host: DEFAULT_IMAGE_HOST.to_string(),
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings for a project.
    ///
    /// Sources, lowest priority first: the user config file, `explicit`
    /// (when given, it must exist), the project's `.blmail.toml`, then
    /// `blmail.toml`.
    pub fn new(project_root: &Utf8Path, explicit: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let user_config_file = ProjectDirs::from("eu", "jumpsafe", "blmail")
            .map(|proj_dirs| proj_dirs.config_dir().join("blmail.toml"))
            .and_then(|path| camino::Utf8PathBuf::from_path_buf(path).ok());

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.to_string()));
            }
        }

        Self::load_from_paths(project_root, user_config_file.as_deref(), explicit)
    }

    fn load_from_paths(
        project_root: &Utf8Path,
        user_config_path: Option<&Utf8Path>,
        explicit: Option<&Utf8Path>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = user_config_path {
            tracing::trace!("user config candidate: {path}");
            builder = builder.add_source(
                File::from(path.as_std_path())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.as_std_path()).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            File::from(project_root.join(".blmail.toml").as_std_path())
                .format(FileFormat::Toml)
                .required(false),
        );

        builder = builder.add_source(
            File::from(project_root.join("blmail.toml").as_std_path())
                .format(FileFormat::Toml)
                .required(false),
        );

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;
        tracing::debug!(
            max_size = settings.max_size,
            image_host = %settings.image_host,
            "settings loaded"
        );
        Ok(settings)
    }

    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    #[must_use]
    pub fn image_host(&self) -> &str {
        &self.image_host
    }

    #[must_use]
    pub fn breakpoint_px(&self) -> u32 {
        self.breakpoint_px
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsConfig {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use camino::Utf8PathBuf;
    use tempfile::tempdir;

    use super::*;

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(path.to_path_buf()).unwrap()
    }

    mod defaults {
        use super::*;

        #[test]
        fn test_load_no_files() {
            let dir = tempdir().unwrap();
            let settings = Settings::load_from_paths(&utf8(dir.path()), None, None).unwrap();
            assert_eq!(settings, Settings::default());
            assert_eq!(settings.max_size(), 25_000);
            assert_eq!(settings.image_host(), "jumpsafe.eu/mail-images/");
            assert_eq!(settings.breakpoint_px(), 600);
        }
    }

    mod project_files {
        use super::*;

        #[test]
        fn test_load_blmail_toml_only() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join("blmail.toml"), "debug = true").unwrap();
            let settings = Settings::load_from_paths(&utf8(dir.path()), None, None).unwrap();
            assert!(settings.debug());
        }

        #[test]
        fn test_load_dot_blmail_toml_only() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join(".blmail.toml"), "max_size = 20000").unwrap();
            let settings = Settings::load_from_paths(&utf8(dir.path()), None, None).unwrap();
            assert_eq!(settings.max_size(), 20_000);
            assert!(!settings.debug());
        }

        #[test]
        fn test_load_diagnostics_table() {
            let dir = tempdir().unwrap();
            let content = "[diagnostics.severity]\nH201 = \"off\"\n\"H2\" = \"info\"\n";
            fs::write(dir.path().join("blmail.toml"), content).unwrap();
            let settings = Settings::load_from_paths(&utf8(dir.path()), None, None).unwrap();
            let diagnostics = settings.diagnostics();
            assert_eq!(diagnostics.get_severity("H201"), DiagnosticSeverity::Off);
            assert_eq!(diagnostics.get_severity("H203"), DiagnosticSeverity::Info);
            assert_eq!(diagnostics.get_severity("T100"), DiagnosticSeverity::Error);
        }
    }

    mod priority {
        use super::*;

        #[test]
        fn test_blmail_overrides_dot_blmail() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join(".blmail.toml"), "image_host = \"a.example/img/\"").unwrap();
            fs::write(dir.path().join("blmail.toml"), "image_host = \"b.example/img/\"").unwrap();
            let settings = Settings::load_from_paths(&utf8(dir.path()), None, None).unwrap();
            assert_eq!(settings.image_host(), "b.example/img/");
        }

        #[test]
        fn test_project_overrides_user() {
            let user_dir = tempdir().unwrap();
            let project_dir = tempdir().unwrap();
            let user_conf_path = utf8(&user_dir.path().join("blmail.toml"));
            fs::write(&user_conf_path, "breakpoint_px = 480\ndebug = true").unwrap();
            fs::write(project_dir.path().join(".blmail.toml"), "breakpoint_px = 640").unwrap();

            let settings =
                Settings::load_from_paths(&utf8(project_dir.path()), Some(&user_conf_path), None)
                    .unwrap();
            assert_eq!(settings.breakpoint_px(), 640);
            assert!(settings.debug());
        }

        #[test]
        fn test_project_overrides_explicit() {
            let dir = tempdir().unwrap();
            let explicit = utf8(&dir.path().join("ci.toml"));
            fs::write(&explicit, "max_size = 10000\ndebug = true").unwrap();
            fs::write(dir.path().join("blmail.toml"), "max_size = 12000").unwrap();

            let settings =
                Settings::load_from_paths(&utf8(dir.path()), None, Some(&explicit)).unwrap();
            assert_eq!(settings.max_size(), 12_000);
            assert!(settings.debug());
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_invalid_toml_content() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join("blmail.toml"), "debug = not_a_boolean").unwrap();
            let result = Settings::new(&utf8(dir.path()), None);
            assert!(matches!(result.unwrap_err(), ConfigError::Config(_)));
        }

        #[test]
        fn test_missing_explicit_file() {
            let dir = tempdir().unwrap();
            let missing = utf8(&dir.path().join("nope.toml"));
            let result = Settings::new(&utf8(dir.path()), Some(&missing));
            assert!(matches!(result.unwrap_err(), ConfigError::MissingFile(_)));
        }
    }
}
