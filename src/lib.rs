//! Plant Doctor CLI
//!
//! 植物の写真を分類サービスに送り、病害の説明・対処・予防を表示する

pub mod cli;
pub mod client;
pub mod config;
pub mod diagnose;
pub mod error;
pub mod image_file;
