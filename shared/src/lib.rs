pub mod columns;
pub mod constants;
pub mod store;
pub mod types;
pub mod views;
