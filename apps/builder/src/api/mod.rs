pub mod client;
pub mod oauth;

pub use client::{ApiClient, Backend};
pub use oauth::{ImportedProfile, OAuthClient, OAuthImport, OAuthLogin};
