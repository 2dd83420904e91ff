#![cfg(test)]

pub mod helpers;
mod models;
