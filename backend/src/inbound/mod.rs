//! Inbound adapters translating HTTP requests into repository calls while
//! keeping framework details at the edge.

pub mod http;
