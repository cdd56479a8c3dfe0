//! HTTP server configuration object and helpers.

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) payload_limit: usize,
}

impl ServerConfig {
    /// Construct a configuration listening on `bind_addr` with a 1 MiB body limit.
    #[must_use]
    pub fn new(bind_addr: (String, u16)) -> Self {
        Self {
            bind_addr,
            payload_limit: 1024 * 1024,
        }
    }

    /// Cap accepted request bodies at `limit` bytes.
    #[must_use]
    pub fn with_payload_limit(mut self, limit: usize) -> Self {
        self.payload_limit = limit;
        self
    }
}
