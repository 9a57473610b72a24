mod create_coding_profile_service;
mod delete_coding_profile_service;
mod get_coding_profiles_service;
mod update_coding_profile_service;

pub use create_coding_profile_service::CreateCodingProfileService;
pub use delete_coding_profile_service::DeleteCodingProfileService;
pub use get_coding_profiles_service::GetCodingProfilesService;
pub use update_coding_profile_service::UpdateCodingProfileService;
