//! HTTP request handlers.

pub mod offering_handler;
pub mod pizza_handler;
pub mod restaurant_handler;

pub use offering_handler::offering_routes;
pub use pizza_handler::pizza_routes;
pub use restaurant_handler::restaurant_routes;
