// Infrastructure layer - Configuration and HTTP adapters
pub mod config;
pub mod http_response;
pub mod static_content;
