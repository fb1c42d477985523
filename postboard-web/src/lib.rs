pub mod page;
pub mod server;
