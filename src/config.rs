/// Backend base URL.
/// Configured at compile time:
/// - Development: http://localhost:8080 (default)
/// - Production: via BACKEND_URL env var (see build.rs / .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};
