use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfsyncError {
    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory: {path}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry: {path}")]
    RegistryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to determine data directory; set XDG_DATA_HOME or --data-dir")]
    DataDirNotFound,

    #[error("bundle '{name}' not found")]
    BundleNotFound { name: String },

    #[error("bundle '{name}' is not writable at {path}")]
    TargetNotWritable { name: String, path: PathBuf },

    #[error("one or more values of bundle '{name}' failed to write")]
    PartialWrite { name: String },

    #[error("multi-tenant deployment requires a tenant id; pass --tenant or set tenant_id")]
    TenantRequired,
}
