pub mod adapter;
pub mod application;
pub mod domain;
pub mod infra;

mod tests;
