pub mod api_client;
pub mod draft;
pub mod filter;
pub mod http;
pub mod http_method;
pub mod models;
pub mod search;
pub mod unique;

pub use api_client::PostalClient;
pub use filter::{DeleteTarget, ListFilter};
pub use models::ApiDefinition;
