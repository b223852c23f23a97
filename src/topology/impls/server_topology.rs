use crate::config::enums::configuration_error::ConfigurationError;
use crate::topology::enums::topology_layout::TopologyLayout;
use crate::topology::structs::server_topology::ServerTopology;

impl ServerTopology {
    pub fn parse(raw: &str) -> Result<ServerTopology, ConfigurationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigurationError::MissingServerTopology);
        }

        if !raw.contains(',') {
            let mut segments = raw.split('|');
            let main = segments.next().unwrap_or_default().trim();
            let backup = segments.next().map(str::trim).filter(|segment| !segment.is_empty());
            let primary = Self::parse_pool(main)?;
            return Ok(ServerTopology {
                read_endpoints: primary.clone(),
                write_endpoints: primary,
                backup_endpoints: backup.map(Self::parse_pool).transpose()?,
                layout: TopologyLayout::shared_pool,
            });
        }

        let mut segments = raw.split(' ');
        let write = segments.next().unwrap_or_default().trim();
        // No read segment reuses the write pool; a blank one is a typo, not a fallback.
        let read = match segments.next() {
            None => write,
            Some(segment) if segment.trim().is_empty() => {
                return Err(ConfigurationError::InvalidAddress {
                    address: raw.to_string(),
                    reason: "read pool segment is empty".to_string(),
                });
            }
            Some(segment) => segment.trim(),
        };
        Ok(ServerTopology {
            read_endpoints: Self::parse_pool(read)?,
            write_endpoints: Self::parse_pool(write)?,
            backup_endpoints: None,
            layout: TopologyLayout::read_write_split,
        })
    }

    /// Splits a pool on commas and whitespace and validates every `host:port`.
    pub fn parse_pool(pool: &str) -> Result<Vec<String>, ConfigurationError> {
        let addresses = pool
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|address| !address.is_empty())
            .map(Self::parse_address)
            .collect::<Result<Vec<_>, _>>()?;
        if addresses.is_empty() {
            return Err(ConfigurationError::InvalidAddress {
                address: pool.to_string(),
                reason: "pool has no addresses".to_string(),
            });
        }
        Ok(addresses)
    }

    pub fn parse_address(address: &str) -> Result<String, ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidAddress {
            address: address.to_string(),
            reason: reason.to_string(),
        };
        let (host, port) = address.rsplit_once(':').ok_or_else(|| invalid("missing port"))?;
        let host = host.trim_start_matches('[').trim_end_matches(']');
        if host.is_empty() {
            return Err(invalid("missing host"));
        }
        if !host.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':' | '%')) {
            return Err(invalid("host contains invalid characters"));
        }
        match port.parse::<u16>() {
            Ok(0) | Err(_) => Err(invalid("port must be between 1 and 65535")),
            Ok(_) => Ok(address.to_string()),
        }
    }

    pub fn has_backup(&self) -> bool {
        self.backup_endpoints.is_some()
    }
}
