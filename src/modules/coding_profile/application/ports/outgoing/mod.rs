pub mod coding_profile_query;
pub mod coding_profile_repository;

pub use coding_profile_query::{CodingProfileQuery, CodingProfileQueryError};
pub use coding_profile_repository::{
    CodingProfileRepository, CodingProfileRepositoryError, CodingProfileResult,
    CreateCodingProfileData, PatchCodingProfileData,
};
