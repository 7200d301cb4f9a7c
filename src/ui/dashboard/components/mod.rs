//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod activity;
pub mod alerts;
pub mod devices;
pub mod footer;
pub mod header;
pub mod loading;
pub mod logs;
pub mod network;
pub mod portfolio;
pub mod stats;
