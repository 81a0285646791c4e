use std::fs;
use std::path::{Path, PathBuf};

use ct_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "cliptrail";

/// Full override of the config directory.
pub const CONFIG_DIR_ENV: &str = "CLIPTRAIL_CONFIG_DIR";
/// Suffix for isolating parallel profiles under the default location.
pub const PROFILE_ENV: &str = "CLIPTRAIL_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Resolves the config directory and creates it when missing.
///
/// Lookup order: explicit override passed to [`with_config_dir`](Self::with_config_dir),
/// then `CLIPTRAIL_CONFIG_DIR`, then `<platform config dir>/cliptrail`.
pub struct DirsAppDirsAdapter {
    config_dir_override: Option<PathBuf>,
    base_config_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            config_dir_override: None,
            base_config_dir_override: None,
        }
    }

    /// Uses `dir` as the config directory, ignoring the environment.
    pub fn with_config_dir(dir: PathBuf) -> Self {
        Self {
            config_dir_override: Some(dir),
            base_config_dir_override: None,
        }
    }

    #[cfg(test)]
    fn with_base_config_dir(base: PathBuf) -> Self {
        Self {
            config_dir_override: None,
            base_config_dir_override: Some(base),
        }
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_config_dir_override {
            return Some(base.clone());
        }
        dirs::config_dir()
    }

    fn resolve(&self) -> Result<PathBuf, AppDirsError> {
        if let Some(dir) = &self.config_dir_override {
            return Ok(dir.clone());
        }
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let base = self
            .base_config_dir()
            .ok_or(AppDirsError::ConfigDirUnavailable)?;
        Ok(base.join(resolved_app_dir_name()))
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_private_dir(path: &Path) -> Result<(), AppDirsError> {
    let create_failed = |e: std::io::Error| AppDirsError::CreateFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    fs::create_dir_all(path).map_err(create_failed)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700)).map_err(create_failed)?;
    }

    Ok(())
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let config_root = self.resolve()?;
        ensure_private_dir(&config_root)?;
        Ok(AppDirs { config_root })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<T>(config_dir: Option<&Path>, profile: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap();
        let prev_dir = std::env::var_os(CONFIG_DIR_ENV);
        let prev_profile = std::env::var_os(PROFILE_ENV);

        match config_dir {
            Some(dir) => std::env::set_var(CONFIG_DIR_ENV, dir),
            None => std::env::remove_var(CONFIG_DIR_ENV),
        }
        match profile {
            Some(p) => std::env::set_var(PROFILE_ENV, p),
            None => std::env::remove_var(PROFILE_ENV),
        }

        let result = f();

        match prev_dir {
            Some(v) => std::env::set_var(CONFIG_DIR_ENV, v),
            None => std::env::remove_var(CONFIG_DIR_ENV),
        }
        match prev_profile {
            Some(v) => std::env::set_var(PROFILE_ENV, v),
            None => std::env::remove_var(PROFILE_ENV),
        }
        result
    }

    #[test]
    fn env_override_wins_over_platform_default() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("custom");

        let dirs = with_env(Some(&target), None, || {
            DirsAppDirsAdapter::with_base_config_dir(tmp.path().join("ignored"))
                .get_app_dirs()
                .unwrap()
        });

        assert_eq!(dirs.config_root, target);
        assert!(target.is_dir());
    }

    #[test]
    fn default_appends_app_name_and_profile() {
        let tmp = tempfile::tempdir().unwrap();

        let plain = with_env(None, None, || {
            DirsAppDirsAdapter::with_base_config_dir(tmp.path().to_path_buf())
                .get_app_dirs()
                .unwrap()
        });
        let profiled = with_env(None, Some("work"), || {
            DirsAppDirsAdapter::with_base_config_dir(tmp.path().to_path_buf())
                .get_app_dirs()
                .unwrap()
        });

        assert_eq!(plain.config_root, tmp.path().join("cliptrail"));
        assert_eq!(profiled.config_root, tmp.path().join("cliptrail-work"));
    }

    #[test]
    fn explicit_dir_ignores_environment() {
        let tmp = tempfile::tempdir().unwrap();
        let explicit = tmp.path().join("explicit");

        let dirs = with_env(Some(&tmp.path().join("env")), None, || {
            DirsAppDirsAdapter::with_config_dir(explicit.clone())
                .get_app_dirs()
                .unwrap()
        });

        assert_eq!(dirs.config_root, explicit);
    }

    #[cfg(unix)]
    #[test]
    fn created_dir_is_private() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("private");

        DirsAppDirsAdapter::with_config_dir(dir.clone())
            .get_app_dirs()
            .unwrap();

        let mode = fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o700);
    }
}
