pub fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// `User-Agent` sent with every outgoing request.
pub fn user_agent() -> String {
    format!("postalbro/{}", app_version())
}
