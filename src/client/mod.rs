pub mod debug;
pub mod session;
pub mod simple_client;
pub mod strategy;
