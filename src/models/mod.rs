pub mod activity;

pub use activity::{seed_catalog, Activity};
