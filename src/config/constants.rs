//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5555;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (local file-backed database, created
/// on first use)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://pizzeria.db?mode=rwc";

/// Default connection pool size
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
