pub mod catalog;
pub mod checkout;
pub mod config;
pub mod consts;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod render;
pub mod session;
pub mod viewer;
