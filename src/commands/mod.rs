//! CLI subcommands

pub mod feed;
pub mod init;
pub mod list;
pub mod render;
