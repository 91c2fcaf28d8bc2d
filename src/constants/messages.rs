//! Success message constants used throughout the application.

// Catalog messages
pub const MSG_CATALOG_FETCHED: &str = "Catalog page retrieved";

// Health messages
pub const MSG_HEALTH_OK: &str = "OK";
pub const MSG_SERVER_RUNNING: &str = "Server is running";

// List view messages
pub const MSG_LOADING_MORE: &str = "Loading...";
pub const MSG_ALL_LOADED: &str = "All content loaded";
pub const MSG_EMPTY_LIST: &str = "Nothing here yet";
