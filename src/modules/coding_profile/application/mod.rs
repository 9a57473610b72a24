pub mod coding_profile_use_cases;
pub mod domain;
pub mod ports;
pub mod service;
