//! Landing route.

/// Plain-text greeting served at `/`.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the CRUD application! Use the /items endpoint for CRUD operations.";

/// GET /
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
