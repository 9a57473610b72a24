mod create_coding_profile;
mod delete_coding_profile;
mod get_coding_profiles;
mod update_coding_profile;

pub use create_coding_profile::{
    CreateCodingProfileCommand, CreateCodingProfileCommandError, CreateCodingProfileError,
    CreateCodingProfileUseCase,
};
pub use delete_coding_profile::{DeleteCodingProfileError, DeleteCodingProfileUseCase};
pub use get_coding_profiles::{GetCodingProfilesError, GetCodingProfilesUseCase};
pub use update_coding_profile::{
    UpdateCodingProfileCommand, UpdateCodingProfileCommandError, UpdateCodingProfileError,
    UpdateCodingProfileUseCase,
};
