pub mod roster_service;
pub mod seed_service;
