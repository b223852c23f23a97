mod server_topology_tests {
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::topology::enums::topology_layout::TopologyLayout;
    use crate::topology::structs::server_topology::ServerTopology;

    #[test]
    fn test_single_pool_without_backup() {
        let topology = ServerTopology::parse("10.0.0.1:11211").unwrap();
        assert_eq!(topology.layout, TopologyLayout::shared_pool);
        assert_eq!(topology.read_endpoints, vec!["10.0.0.1:11211"]);
        assert_eq!(topology.write_endpoints, vec!["10.0.0.1:11211"]);
        assert!(!topology.has_backup());
    }

    #[test]
    fn test_primary_and_backup() {
        let topology = ServerTopology::parse("10.0.0.1:11211|10.0.0.2:11211").unwrap();
        assert_eq!(topology.layout, TopologyLayout::shared_pool);
        assert_eq!(topology.write_endpoints, vec!["10.0.0.1:11211"]);
        assert_eq!(topology.backup_endpoints, Some(vec!["10.0.0.2:11211".to_string()]));
    }

    #[test]
    fn test_read_write_split() {
        let topology = ServerTopology::parse("10.0.0.1:11211,10.0.0.2:11211 10.0.0.3:11211").unwrap();
        assert_eq!(topology.layout, TopologyLayout::read_write_split);
        assert_eq!(topology.write_endpoints, vec!["10.0.0.1:11211", "10.0.0.2:11211"]);
        assert_eq!(topology.read_endpoints, vec!["10.0.0.3:11211"]);
        assert!(!topology.has_backup());
    }

    #[test]
    fn test_split_without_read_segment_reads_from_write_pool() {
        let topology = ServerTopology::parse("10.0.0.1:11211,10.0.0.2:11211").unwrap();
        assert_eq!(topology.layout, TopologyLayout::read_write_split);
        assert_eq!(topology.read_endpoints, topology.write_endpoints);
    }

    #[test]
    fn test_split_with_blank_read_segment_is_rejected() {
        let result = ServerTopology::parse("10.0.0.1:11211,10.0.0.2:11211  10.0.0.3:11211");
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidAddress { ref reason, .. }) if reason == "read pool segment is empty"
        ));
    }

    #[test]
    fn test_comma_wins_over_pipe() {
        let topology = ServerTopology::parse("10.0.0.1:11211,10.0.0.2:11211 10.0.0.3:11211").unwrap();
        assert!(topology.backup_endpoints.is_none());
        let result = ServerTopology::parse("10.0.0.1:11211,10.0.0.2:11211|10.0.0.3:11211");
        assert!(matches!(result, Err(ConfigurationError::InvalidAddress { .. })));
    }

    #[test]
    fn test_space_separated_pool_without_comma() {
        let topology = ServerTopology::parse("10.0.0.1:11211 10.0.0.2:11211|10.0.0.3:11211").unwrap();
        assert_eq!(topology.layout, TopologyLayout::shared_pool);
        assert_eq!(topology.write_endpoints.len(), 2);
        assert_eq!(topology.backup_endpoints.unwrap().len(), 1);
    }

    #[test]
    fn test_trailing_pipe_means_no_backup() {
        let topology = ServerTopology::parse("10.0.0.1:11211|").unwrap();
        assert!(!topology.has_backup());
    }

    #[test]
    fn test_empty_topology_is_fatal() {
        assert!(matches!(ServerTopology::parse(""), Err(ConfigurationError::MissingServerTopology)));
        assert!(matches!(ServerTopology::parse("  "), Err(ConfigurationError::MissingServerTopology)));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(ServerTopology::parse("10.0.0.1").is_err());
        assert!(ServerTopology::parse(":11211").is_err());
        assert!(ServerTopology::parse("10.0.0.1:0").is_err());
        assert!(ServerTopology::parse("10.0.0.1:port").is_err());
        assert!(ServerTopology::parse("|10.0.0.1:11211").is_err());
    }

    #[test]
    fn test_ipv6_address() {
        let topology = ServerTopology::parse("[::1]:11211").unwrap();
        assert_eq!(topology.write_endpoints, vec!["[::1]:11211"]);
    }
}

mod topology_clients_tests {
    use crate::cache::enums::cache_engine::CacheEngine;
    use crate::cache::structs::cache_value::CacheValue;
    use crate::config::structs::cache_config::CacheConfig;
    use crate::topology::structs::server_topology::ServerTopology;
    use crate::topology::structs::topology_clients::TopologyClients;

    fn memory_config() -> CacheConfig {
        CacheConfig {
            engine: CacheEngine::memory,
            ..CacheConfig::default()
        }
    }

    #[test]
    fn test_shared_pool_uses_one_client() {
        let topology = ServerTopology::parse("10.0.0.1:11211|10.0.0.2:11211").unwrap();
        let clients = TopologyClients::connect(&topology, &memory_config()).unwrap();
        assert!(clients.shares_read_write());
        assert!(clients.backup.is_some());
    }

    #[test]
    fn test_split_builds_independent_clients() {
        let topology = ServerTopology::parse("10.0.0.1:11211,10.0.0.2:11211 10.0.0.3:11211").unwrap();
        let clients = TopologyClients::connect(&topology, &memory_config()).unwrap();
        assert!(!clients.shares_read_write());
        assert!(clients.backup.is_none());
        assert_eq!(clients.read.describe(), "memory[read]");
        assert_eq!(clients.write.describe(), "memory[write]");
    }

    #[test]
    fn test_memcache_pools_build_without_connecting() {
        let topology = ServerTopology::parse("10.0.0.1:11211 10.0.0.2:11211|10.0.0.3:11211").unwrap();
        let clients = TopologyClients::connect(&topology, &CacheConfig::default()).unwrap();
        assert_eq!(clients.write.describe(), "memcache[10.0.0.1:11211,10.0.0.2:11211]");
    }

    #[tokio::test]
    async fn test_shutdown_without_backup_is_tolerated() {
        let topology = ServerTopology::parse("10.0.0.1:11211").unwrap();
        let clients = TopologyClients::connect(&topology, &memory_config()).unwrap();
        clients.shutdown();
        clients.shutdown();
        assert!(clients.write.set("a", &CacheValue::new(b"1".to_vec(), 0)).await.is_err());
    }
}
