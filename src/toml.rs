use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TomlFileError {
    #[error("could not find the home directory")]
    NoHomeDirectory,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ::toml::de::Error),
}

pub fn get_config_dir() -> Result<PathBuf, TomlFileError> {
    let home = home::home_dir().ok_or(TomlFileError::NoHomeDirectory)?;
    Ok(home.join(".config").join("songbook"))
}

/// `~/.config/songbook/<name>`. `name` includes the extension.
pub fn get_config_file_path(name: &str) -> Result<PathBuf, TomlFileError> {
    Ok(get_config_dir()?.join(name))
}

pub fn read_toml_file<T: DeserializeOwned>(path: &Path) -> Result<T, TomlFileError> {
    let string = read_to_string(path)?;
    Ok(::toml::from_str(&string)?)
}

pub fn read_toml_file_or_default<T: DeserializeOwned + Default>(name: &str) -> T {
    let path = match get_config_file_path(&format!("{name}.toml")) {
        Ok(path) => path,
        Err(err) => {
            log::warn!(target: "::toml", "{name}: {err}. Using defaults.");
            return T::default();
        }
    };

    read_toml_file_at_or_default(&path)
}

pub fn read_toml_file_at_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match read_toml_file(path) {
        Ok(t) => t,
        Err(TomlFileError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!(target: "::toml", "{path:?} not found. Using defaults.");
            T::default()
        }
        Err(err) => {
            log::warn!(target: "::toml", "could not read {path:?}: {err}. Using defaults.");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize, Debug, Default, Eq, PartialEq)]
    struct Sample {
        name: String,
        #[serde(default)]
        count: u32,
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.toml");
        write(&path, "name = \"songbook\"\ncount = 3\n").unwrap();

        let sample: Sample = read_toml_file(&path).unwrap();
        assert_eq!(sample, Sample { name: "songbook".to_string(), count: 3 });
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Sample, _> = read_toml_file(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(TomlFileError::Io(_))), "{result:?}");
    }

    #[test]
    fn falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();

        let missing: Sample = read_toml_file_at_or_default(&dir.path().join("nope.toml"));
        assert_eq!(missing, Sample::default());

        let path = dir.path().join("broken.toml");
        write(&path, "name = ").unwrap();
        let result: Result<Sample, _> = read_toml_file(&path);
        assert!(matches!(result, Err(TomlFileError::Parse(_))), "{result:?}");

        let broken: Sample = read_toml_file_at_or_default(&path);
        assert_eq!(broken, Sample::default());
    }
}
