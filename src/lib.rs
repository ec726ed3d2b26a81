//! # Maps A2A
//!
//! An Agent2Agent (A2A) task endpoint exposing Google Maps lookups as tools.
//!
//! A caller submits a task whose first user message carries a `dataPart` naming a
//! tool and its arguments. The request passes through a Tower validation layer into
//! a dispatcher service, which resolves the tool, calls the maps provider over a
//! pluggable transport and answers synchronously with a `completed` or `failed`
//! task envelope.
//!
//! ## Tools
//!
//! - `maps_geocode`, `maps_reverse_geocode`
//! - `maps_search_places`, `maps_place_details`
//! - `maps_distance_matrix`, `maps_directions`
//! - `maps_elevation`, `maps_get_elevation_by_address`
//!
//! ## Example
//!
//! ```rust,no_run
//! use maps_a2a::prelude::*;
//! use maps_a2a::transport::http::{HttpTransport, DEFAULT_BASE_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpTransport::new(DEFAULT_BASE_URL.parse()?);
//!     let client = MapsClient::new(transport, "api-key");
//!
//!     let place = client.geocode("1600 Amphitheatre Parkway").await?;
//!     println!("{} -> {:?}", place.formatted_address, place.location);
//!
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod config;
pub mod layer;
pub mod maps;
pub mod protocol;
pub mod server;
pub mod service;
pub mod tool;
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        config::ServerConfig,
        maps::MapsClient,
        protocol::error::A2AError,
        protocol::{AgentDescriptor, Message, Part, Role, TaskRequest, TaskResponse, TaskStatus},
        service::TaskDispatcher,
        tool::{Tool, ToolRegistry},
    };
}
