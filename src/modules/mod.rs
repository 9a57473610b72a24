pub mod auth;
pub mod coding_profile;
pub mod contact;
pub mod experience;
pub mod project;
pub mod seed;
pub mod settings;
pub mod skill;
