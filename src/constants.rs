pub const API_NAME: &str = "[classic-cars-api]";

/// Header carrying the shared secret on every `/api/cars` request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Path the browser client is served under.
pub const STATIC_MOUNT: &str = "/app";
