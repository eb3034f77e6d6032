//! HTTP client layer — `GeckoHttp`, one method per provider endpoint.

pub mod client;

pub use client::GeckoHttp;
