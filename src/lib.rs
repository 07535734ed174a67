//! Pizzeria Catalog API
//!
//! A CRUD HTTP backend exposing a relational catalog of restaurants,
//! pizzas, and the priced menu offerings linking the two, built with
//! Axum and SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core catalog entities and wire types
//! - **services**: Application use cases
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, routes, and application state
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Load the sample catalog
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Offering, Pizza, Restaurant};
pub use errors::{AppError, AppResult};
