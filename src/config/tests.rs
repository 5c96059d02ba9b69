//! Configuration Tests
//!
//! Covers defaults, environment lookups and command-line overrides.

#[cfg(test)]
mod tests {
    use crate::config::{ElasticConfig, ServiceConfig};
    use std::collections::HashMap;
    use std::time::Duration;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_lookup(env(&[]), &[]).unwrap();

        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8001");
        assert_eq!(config.elastic, ElasticConfig::default());
        assert_eq!(config.elastic.url, "http://localhost:9200");
        assert_eq!(config.elastic.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = ServiceConfig::from_lookup(
            env(&[
                ("AUTOCOMPLETE_BIND", "127.0.0.1:9000"),
                ("ELASTICSEARCH_URL", "http://es:9200"),
                ("ELASTICSEARCH_TIMEOUT_SECS", "3"),
            ]),
            &[],
        )
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.elastic.url, "http://es:9200");
        assert_eq!(config.elastic.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_elastic_url_keeps_default() {
        let config = ElasticConfig::from_lookup(env(&[("ELASTICSEARCH_URL", "  ")])).unwrap();
        assert_eq!(config.url, "http://localhost:9200");
    }

    #[test]
    fn test_arguments_override_environment() {
        let config = ServiceConfig::from_lookup(
            env(&[("ELASTICSEARCH_URL", "http://es:9200")]),
            &args(&["--bind", "127.0.0.1:7000", "--elastic", "http://other:9200", "--timeout", "30"]),
        )
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:7000");
        assert_eq!(config.elastic.url, "http://other:9200");
        assert_eq!(config.elastic.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_unknown_arguments_are_skipped() {
        let config =
            ServiceConfig::from_lookup(env(&[]), &args(&["--verbose", "--bind", "127.0.0.1:1"]))
                .unwrap();
        assert_eq!(config.bind_addr.port(), 1);
    }

    #[test]
    fn test_flag_without_value_is_error() {
        let result = ServiceConfig::from_lookup(env(&[]), &args(&["--bind"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_bind_address_is_error() {
        let result = ServiceConfig::from_lookup(env(&[("AUTOCOMPLETE_BIND", "not-an-addr")]), &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = ElasticConfig::from_lookup(env(&[("ELASTICSEARCH_TIMEOUT_SECS", "0")]));
        assert!(result.is_err());
    }
}
