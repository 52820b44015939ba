pub mod fetch;
pub mod models;
pub mod output;
pub mod scoring;
