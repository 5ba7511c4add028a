use std::net::SocketAddr;
use std::path::PathBuf;

use timer_server::config::Config;

/// Config bound to an ephemeral port on loopback, serving the workspace's static pages
pub fn test_config(database_url: &str) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        database_url: database_url.to_string(),
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"),
    }
}

pub fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}{}", addr, path)
}
