use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use goalpost_server::config::{ServerConfig, DEFAULT_PORT};

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<ServerConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.data_dir, PathBuf::from("."));
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn reads_port_host_and_data_dir() {
    let config = config_from(&[
        ("PORT", "3000"),
        ("GOALPOST_HOST", "127.0.0.1"),
        ("GOALPOST_DATA_DIR", "/srv/goalpost"),
    ])
    .unwrap();

    assert_eq!(config.bind_addr().to_string(), "127.0.0.1:3000");
    assert_eq!(config.data_dir, PathBuf::from("/srv/goalpost"));
}

#[test]
fn invalid_port_is_an_error() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn invalid_host_is_an_error() {
    let err = config_from(&[("GOALPOST_HOST", "localhost")]).unwrap_err();
    assert!(err.to_string().contains("invalid GOALPOST_HOST"));
}
