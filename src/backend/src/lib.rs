pub mod api;
pub mod config;
pub mod device;
pub mod http_response;
pub mod server;
