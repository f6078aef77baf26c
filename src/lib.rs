pub mod cli;
pub mod config;
pub mod error;
pub mod resolver;
pub mod composer;
pub mod writer;
pub mod pipeline;

pub use catalog_album_common as common;
