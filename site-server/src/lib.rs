//! Helios Site Server - backend for the Helios renewable-energy promotional site
//!
//! # Architecture overview
//!
//! - **Catalog** (`catalog`): essential/full product data with progressive
//!   disclosure loading and the pure filter/sort/search pipeline
//! - **HTTP API** (`api`): product listing, comparison and contact endpoints
//! - **Core** (`core`): configuration, server state and startup
//! - **Utils** (`utils`): error types, logging
//!
//! # Module structure
//!
//! ```text
//! site-server/src/
//! ├── core/          # config, state, server, errors
//! ├── catalog/       # loader + filter/sort/search pipeline
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging
//! ├── routes/        # router assembly, oneshot extension
//! └── utils/         # error types, logger
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export public types
pub use catalog::CatalogService;
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Set up the process environment: .env file and logging.
///
/// Must run before any `tracing` call; subsequent calls would fail to
/// install a second global subscriber.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  __     ___
   / / / /__  / (_)___  _____
  / /_/ / _ \/ / / __ \/ ___/
 / __  /  __/ / / /_/ (__  )
/_/ /_/\___/_/_/\____/____/
    "#
    );
}
