//! Reading configurations and writing sampler output
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// File formats understood by [`save`] and [`load`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerializedType {
    Yaml,
    Json,
}

impl FromStr for SerializedType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownSerializedType(s.to_owned())),
        }
    }
}

impl SerializedType {
    /// Determine the format from the extension of `path`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        path.as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                Error::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Invalid file type",
                ))
            })
            .and_then(Self::from_str)
    }
}

/// Serialize `obj` to `path`, picking the format from the file extension
pub fn save<T, P>(obj: &T, path: P) -> Result<(), Error>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let bytes = match SerializedType::from_path(&path)? {
        SerializedType::Yaml => serde_yaml::to_string(obj)?.into_bytes(),
        SerializedType::Json => serde_json::to_vec_pretty(obj)?,
    };

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path.as_ref())?;
    file.write_all(&bytes)?;

    info!("Wrote {}", path.as_ref().display());
    Ok(())
}

/// Deserialize a `T` from `path`, picking the format from the file extension
pub fn load<T, P>(path: P) -> Result<T, Error>
where
    for<'de> T: Deserialize<'de>,
    P: AsRef<Path>,
{
    let serialized_type = SerializedType::from_path(&path)?;

    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let obj = match serialized_type {
        SerializedType::Yaml => serde_yaml::from_str(&contents)?,
        SerializedType::Json => serde_json::from_str(&contents)?,
    };
    Ok(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MhConfig;

    #[test]
    fn serialized_type_from_extension() {
        assert_eq!(
            SerializedType::from_path("run.yaml").unwrap(),
            SerializedType::Yaml
        );
        assert_eq!(
            SerializedType::from_path("run.yml").unwrap(),
            SerializedType::Yaml
        );
        assert_eq!(
            SerializedType::from_path("out/trace.json").unwrap(),
            SerializedType::Json
        );
    }

    #[test]
    fn unknown_extension_is_an_error() {
        assert!(matches!(
            SerializedType::from_path("trace.bincode"),
            Err(Error::UnknownSerializedType(ext)) if ext == "bincode"
        ));
        assert!(matches!(
            SerializedType::from_path("trace"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn save_then_load_yaml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let config = MhConfig::new().n_iters(12).mu_init(30.0).cand_sd(0.05);

        for name in ["config.yaml", "config.json"] {
            let path = dir.path().join(name);
            save(&config, &path).unwrap();
            let loaded: MhConfig = load(&path).unwrap();
            assert_eq!(loaded, config);
        }
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let res: Result<MhConfig, _> = load(dir.path().join("nope.yaml"));
        assert!(matches!(res, Err(Error::Io(_))));
    }
}
