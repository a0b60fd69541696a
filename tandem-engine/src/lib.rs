//! Tandem Engine Library
//!
//! Two-track capital allocation: a pure rule engine plus a small JSON HTTP
//! service that exposes it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   tandem-engine (Rust Service)                      │
//! │                             :4440                                   │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐     │
//! │  │  Input          │  │  Allocation     │  │  JSON           │     │
//! │  │  Validation     │─►│  Engine (pure)  │─►│  Routes         │     │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Concepts
//!
//! ## Track A (tactical, 20%)
//! - Volatility breakout strength decides how much of the sleeve is in equity
//!
//! ## Track B (strategic, 80%)
//! - Sentiment and analyst consensus blend into a risk score
//! - The hotter the market, the larger the cash target
//!
//! ## Holdings
//! - Strategic equity is spread over a fixed, weighted holding table

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod allocation;
pub mod error;
pub mod format;
pub mod routes;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tandem_common::config::Config;
use tower_http::cors::{Any, CorsLayer};

use crate::allocation::HoldingTable;

/// Shared, read-only service state.
pub struct EngineState {
    /// Configuration
    pub config: Config,
    /// Strategic holding table
    pub holdings: HoldingTable,
}

impl EngineState {
    /// Create state from configuration.
    pub fn new(config: Config) -> Self {
        let holdings = HoldingTable::from_config(config.holdings.as_deref());
        Self { config, holdings }
    }
}

/// Allocation HTTP service
pub struct AllocationService {
    state: Arc<EngineState>,
}

impl AllocationService {
    /// Create a new allocation service
    pub fn new(config: Config) -> Self {
        let state = Arc::new(EngineState::new(config));
        Self { state }
    }

    /// Start serving until the listener fails
    pub async fn start(self) -> Result<()> {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = routes::build_router(self.state.clone()).layer(cors);

        let addr: SocketAddr = self.state.config.bind_address().parse()?;
        tracing::info!(
            address = %addr,
            holdings = self.state.holdings.len(),
            "Starting HTTP server"
        );

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
