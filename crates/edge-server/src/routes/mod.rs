pub mod catalog;
pub mod context;
pub mod health;
pub mod hubs;
pub mod resolve;
