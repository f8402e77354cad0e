//! # gifs
//!
//! A blocking Rust client for the [gifs.com](https://gifs.com) media API.
//!
//! ## Features
//!
//! - **Import**: register media hosted elsewhere by its URL
//! - **Upload**: send local file content as a multipart form
//! - **Metadata**: title, tags, NSFW flag and attribution on both
//! - **Error Handling**: error codes and categories for every failure
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gifs::api::{ApiClient, AttributionDetails, ImportRequest, MediaClient, UploadRequest};
//! use std::fs::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new("my-api-key")?;
//!
//! let import = ImportRequest::new("https://example.com/cat.gif")
//!     .with_title("Cat")
//!     .with_tags(["cats", "funny"])
//!     .with_attribution(AttributionDetails::new().with_site("example.com"));
//! client.import(&import)?;
//!
//! let upload = UploadRequest::new("dog.mp4").with_nsfw(false);
//! let mut file = File::open("dog.mp4")?;
//! client.upload(&upload, &mut file)?;
//! # Ok(())
//! # }
//! ```

/// API client, request types and client errors
pub mod api;

/// Errors shared by the client and its callers
pub mod errors;
