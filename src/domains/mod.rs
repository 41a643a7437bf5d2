//! Domains module containing business logic organized by bounded contexts.
//!
//! - **models**: Typed views of the Ship It Squirrel API payloads
//! - **tools**: MCP tools translating calls into API requests

pub mod models;
pub mod tools;
