pub mod activity;
pub mod user;
