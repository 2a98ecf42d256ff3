//! Listing, downloading and deleting the shared files.

pub mod delete;
pub mod download;
pub mod list;
