use std::path::PathBuf;

/// Settings handed to each connection worker.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory that request paths are resolved against.
    pub root: PathBuf,
    /// Value of the `Server:` header and the server-identity template tag.
    pub server_name: String,
}

#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub site: SiteConfig,
}

impl Config {
    pub fn load() -> Self {
        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let root =
            std::env::var("WEB_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."));
        let server_name =
            std::env::var("SERVER_NAME")
                .unwrap_or_else(|_| "Tagserve".to_string());
        Self {
            listen_addr,
            site: SiteConfig { root, server_name },
        }
    }
}
