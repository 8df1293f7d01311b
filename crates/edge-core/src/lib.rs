pub mod actions;
pub mod catalog;
pub mod check;
pub mod config;
pub mod error;
pub mod hubs;
pub mod io;
pub mod rewrite;
pub mod routing;
pub mod subdomain;
pub mod types;

pub use error::{EdgeError, Result};
