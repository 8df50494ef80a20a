//! AI Act and RGPD reference lookup: a static article store, a keyword
//! relevance matcher, an HTML renderer and the MCP server that exposes them.

pub mod config;
pub mod error;
pub mod knowledge;
pub mod matcher;
pub mod model;
pub mod render;
pub mod server;

pub use knowledge::lookup;
pub use matcher::find_relevant;
pub use render::show_relevant_regulations;
