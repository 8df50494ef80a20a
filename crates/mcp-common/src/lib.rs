pub mod mcp_api;
