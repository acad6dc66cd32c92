#![feature(int_roundings)]

pub mod api;
pub mod components;
pub mod models;
pub mod utils;
pub mod views;
