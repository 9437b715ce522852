use shoe_store::infra::config::{Config, StoreBackend};
use std::collections::HashMap;

fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_point_at_local_mongo() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
    assert_eq!(config.mongodb_database, "shoeStore");
    assert_eq!(config.mongodb_collection, "shoes");
    assert_eq!(config.store_backend, StoreBackend::Mongo);
}

#[test]
fn overrides_are_honored_and_blank_values_fall_back() {
    let config = config_from(&[
        ("BIND_ADDR", "127.0.0.1:8080"),
        ("MONGODB_URI", "mongodb://db:27017"),
        ("MONGODB_DATABASE", "  "),
        ("MONGODB_COLLECTION", "sneakers"),
        ("SHOE_STORE", "Memory"),
    ])
    .unwrap();
    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.mongodb_uri, "mongodb://db:27017");
    assert_eq!(config.mongodb_database, "shoeStore");
    assert_eq!(config.mongodb_collection, "sneakers");
    assert_eq!(config.store_backend, StoreBackend::Memory);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(config_from(&[("BIND_ADDR", "not-an-address")]).is_err());
    assert!(config_from(&[("SHOE_STORE", "postgres")]).is_err());
}
