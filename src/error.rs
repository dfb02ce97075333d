//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a mesh file.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("failed to read mesh {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid OBJ file: {0}")]
    Obj(#[from] tobj::LoadError),
}

/// Failure to read or parse a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level error for the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("mesh contains no triangles")]
    EmptyMesh,

    /// SDL reports its errors as plain strings.
    #[error("window error: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, Error>;
