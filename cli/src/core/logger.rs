use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "POSTALBRO_LOG";

/// Console facade. Diagnostics go through `tracing`; everything the user is
/// meant to read goes through the helpers below.
pub struct Logger;

impl Logger {
    pub fn init(debug: bool) {
        let filter = if debug {
            EnvFilter::new("postalbro=debug")
        } else {
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }

    pub fn info(message: &str) {
        println!("{message}");
    }

    pub fn success(message: &str) {
        println!("{message}");
    }

    /// Highlighted lines such as section titles and response banners.
    pub fn response(message: &str) {
        println!("{message}");
    }

    pub fn warn(message: &str) {
        eprintln!("{message}");
    }

    pub fn error(message: &str) {
        eprintln!("{message}");
    }
}
