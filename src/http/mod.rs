//! HTTP client module with error classification and download progress.

mod client;
mod progress;
mod status;

pub use client::HttpClient;
