use std::env;
use std::path::PathBuf;

/// The port is fixed; only the bind address and file locations can be moved.
pub const PORT: u16 = 8080;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_DATABASE: &str = "comments.db";
const DEFAULT_STATIC_DIR: &str = "static";
/// Shared cap for JSON bodies and uploaded dataset files.
const DEFAULT_UPLOAD_LIMIT: usize = 10 * 1024 * 1024; // 10 MB

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub static_dir: PathBuf,
    pub upload_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            upload_limit: DEFAULT_UPLOAD_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Reads `COMMENTS_HOST`, `COMMENTS_DB` and `COMMENTS_STATIC_DIR`, falling
    /// back to the defaults for anything unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        ServerConfig {
            host: var("COMMENTS_HOST").unwrap_or(defaults.host),
            port: defaults.port,
            database_path: var("COMMENTS_DB")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            static_dir: var("COMMENTS_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            upload_limit: defaults.upload_limit,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
