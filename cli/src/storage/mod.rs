pub mod store;

pub use store::{RecentUpdate, Store};
