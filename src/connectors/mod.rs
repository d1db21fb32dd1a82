pub mod connection;
pub mod http;
