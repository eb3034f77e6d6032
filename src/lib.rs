//! # coinwatch-core
//!
//! Core engine for a desktop widget that tracks the fiat value of a crypto
//! holding: CoinGecko data access on one side, chart-cursor geometry on the
//! other. Window chrome, refresh timers, number formatting and the actual
//! rendering toolkit live in the embedding application.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — shared newtypes, domain models, errors, provider constants
//!    (always available; the hover and value modules are pure)
//! 2. **HTTP API** — `GeckoHttp`, one method per provider endpoint
//! 3. **High-Level Client** — `WidgetClient` with nested sub-clients and the
//!    process-lifetime coin-id resolver
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinwatch_core::prelude::*;
//!
//! let client = WidgetClient::builder()
//!     .api_key("cg_demo_...")
//!     .currency("eur")
//!     .build();
//!
//! let price = client.prices().current().await?;
//! let series = client.prices().history(7).await?;
//! let values = to_value_series(&series_samples, &Holding::new(quantity, fee));
//! ```
//!
//! Nothing is persisted: the resolved id and all state reset with the
//! process.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, logic.
pub mod domain;

/// Unified crate error types.
pub mod error;

/// Provider base URLs and operating modes.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `WidgetClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::CoinId;

    // Domain types — coin resolution
    pub use crate::domain::coin::AssetQuery;

    // Domain types — prices and values
    pub use crate::domain::price::PricePoint;
    pub use crate::domain::value::{to_value_series, Holding, HoldingValue, ValuePoint};

    // Domain types — hover geometry
    pub use crate::domain::hover::{
        place_overlay, AxisRole, AxisTransform, CanvasSize, HoverEngine, HoverFrame,
        HoverState, OverlaySize, PlotFrame, PlotSample, ScreenPoint,
    };

    // Errors
    pub use crate::error::{HttpError, ParseError, WidgetError};

    // Network
    pub use crate::network::ApiMode;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CoinsClient, PricesClient, WidgetClient, WidgetClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::domain::coin::{CoinResolver, CoinSource};
}
