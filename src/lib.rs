#![allow(non_snake_case)]

pub mod cli;
pub mod clients;
pub mod config;
pub mod models;
pub mod screens;
pub mod service;
pub mod session;
