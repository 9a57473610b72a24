mod create_experience;
mod delete_experience;
mod get_experiences;
mod update_experience;

pub use create_experience::{
    CreateExperienceCommand, CreateExperienceCommandError, CreateExperienceError,
    CreateExperienceUseCase,
};
pub use delete_experience::{DeleteExperienceError, DeleteExperienceUseCase};
pub use get_experiences::{GetExperiencesError, GetExperiencesUseCase};
pub use update_experience::{
    UpdateExperienceCommand, UpdateExperienceCommandError, UpdateExperienceError,
    UpdateExperienceUseCase,
};
