mod create_coding_profile;
mod delete_coding_profile;
mod get_coding_profiles;
mod update_coding_profile;

pub use create_coding_profile::{create_coding_profile_handler, CreateCodingProfileRequest};
pub use delete_coding_profile::delete_coding_profile_handler;
pub use get_coding_profiles::{__path_get_coding_profiles_handler, get_coding_profiles_handler};
pub use update_coding_profile::{update_coding_profile_handler, UpdateCodingProfileRequest};
