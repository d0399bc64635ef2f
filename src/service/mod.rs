pub mod account_service;
pub mod calendar_service;
pub mod plan_service;
pub mod validation;
pub mod week_service;
