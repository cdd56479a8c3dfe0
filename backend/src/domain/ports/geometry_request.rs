//! Driving port for the geometry endpoint.

use async_trait::async_trait;

use super::PointResult;
use crate::domain::Error;

/// Request method, reduced to what the dispatcher distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMethod {
    /// Proximity and containment queries.
    Get,
    /// Geometry insertion.
    Post,
    /// Any other method; always rejected.
    Other(String),
}

impl From<&str> for RequestMethod {
    fn from(value: &str) -> Self {
        match value {
            "GET" => Self::Get,
            "POST" => Self::Post,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Everything the handler needs from one inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryRequest {
    /// Request method.
    pub method: RequestMethod,
    /// Raw `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Undecoded request body.
    pub body: Vec<u8>,
}

/// Result of a successfully handled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryOutcome {
    /// Points were written to the store.
    Inserted {
        /// Number of points inserted.
        count: usize,
    },
    /// A radius or polygon query matched these points, in storage order.
    Matches(Vec<PointResult>),
}

/// Driving port classifying and executing geometry requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeometryRequestHandler: Send + Sync {
    /// Classify, execute, and summarise one request.
    async fn handle(&self, request: GeometryRequest) -> Result<GeometryOutcome, Error>;
}
