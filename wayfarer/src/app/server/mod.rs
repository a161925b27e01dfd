mod route_server;
mod server_config;

pub use route_server::serve;
pub use server_config::ServerConfig;
