use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminResponse, LoginError, LoginRequest,
};
use crate::coding_profile::application::ports::incoming::use_cases::{
    CreateCodingProfileCommand, CreateCodingProfileError, CreateCodingProfileUseCase,
    DeleteCodingProfileError, DeleteCodingProfileUseCase, GetCodingProfilesError,
    GetCodingProfilesUseCase, UpdateCodingProfileCommand, UpdateCodingProfileError,
    UpdateCodingProfileUseCase,
};
use crate::coding_profile::application::ports::outgoing::CodingProfileResult;
use crate::contact::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase, GetMessagesError, GetMessagesUseCase,
    SubmitMessageCommand, SubmitMessageError, SubmitMessageUseCase,
};
use crate::contact::application::ports::outgoing::MessageResult;
use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceCommand, CreateExperienceError, CreateExperienceUseCase,
    DeleteExperienceError, DeleteExperienceUseCase, GetExperiencesError, GetExperiencesUseCase,
    UpdateExperienceCommand, UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::experience::application::ports::outgoing::ExperienceResult;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase, DeleteProjectError,
    DeleteProjectUseCase, GetProjectsError, GetProjectsUseCase, UpdateProjectCommand,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::ProjectResult;
use crate::settings::application::ports::incoming::use_cases::{
    GetSettingsError, GetSettingsUseCase, UpsertSettingsCommand, UpsertSettingsError,
    UpsertSettingsUseCase,
};
use crate::settings::application::ports::outgoing::SettingsResult;
use crate::skill::application::ports::incoming::use_cases::{
    CreateSkillCommand, CreateSkillError, CreateSkillUseCase, DeleteSkillError,
    DeleteSkillUseCase, GetSkillsError, GetSkillsUseCase, UpdateSkillCommand, UpdateSkillError,
    UpdateSkillUseCase,
};
use crate::skill::application::ports::outgoing::SkillResult;

/// Placeholder for use cases a test never reaches. Listing use cases answer
/// with an empty store; everything else panics.
#[derive(Default, Clone)]
pub struct NotUsed;

// ── Auth ────────────────────────────────────────────────

#[async_trait]
impl ILoginAdminUseCase for NotUsed {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

// ── Settings ────────────────────────────────────────────

#[async_trait]
impl GetSettingsUseCase for NotUsed {
    async fn execute(&self) -> Result<Option<SettingsResult>, GetSettingsError> {
        Ok(None)
    }
}

#[async_trait]
impl UpsertSettingsUseCase for NotUsed {
    async fn execute(
        &self,
        _command: UpsertSettingsCommand,
    ) -> Result<SettingsResult, UpsertSettingsError> {
        unimplemented!("Not used in this test")
    }
}

// ── Projects ────────────────────────────────────────────

#[async_trait]
impl GetProjectsUseCase for NotUsed {
    async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl CreateProjectUseCase for NotUsed {
    async fn execute(
        &self,
        _command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateProjectUseCase for NotUsed {
    async fn execute(
        &self,
        _project_id: Uuid,
        _command: UpdateProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteProjectUseCase for NotUsed {
    async fn execute(&self, _project_id: Uuid) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

// ── Skills ──────────────────────────────────────────────

#[async_trait]
impl GetSkillsUseCase for NotUsed {
    async fn execute(&self) -> Result<Vec<SkillResult>, GetSkillsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl CreateSkillUseCase for NotUsed {
    async fn execute(&self, _command: CreateSkillCommand) -> Result<SkillResult, CreateSkillError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateSkillUseCase for NotUsed {
    async fn execute(
        &self,
        _skill_id: Uuid,
        _command: UpdateSkillCommand,
    ) -> Result<SkillResult, UpdateSkillError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteSkillUseCase for NotUsed {
    async fn execute(&self, _skill_id: Uuid) -> Result<(), DeleteSkillError> {
        unimplemented!("Not used in this test")
    }
}

// ── Experience ──────────────────────────────────────────

#[async_trait]
impl GetExperiencesUseCase for NotUsed {
    async fn execute(&self) -> Result<Vec<ExperienceResult>, GetExperiencesError> {
        Ok(vec![])
    }
}

#[async_trait]
impl CreateExperienceUseCase for NotUsed {
    async fn execute(
        &self,
        _command: CreateExperienceCommand,
    ) -> Result<ExperienceResult, CreateExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateExperienceUseCase for NotUsed {
    async fn execute(
        &self,
        _experience_id: Uuid,
        _command: UpdateExperienceCommand,
    ) -> Result<ExperienceResult, UpdateExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteExperienceUseCase for NotUsed {
    async fn execute(&self, _experience_id: Uuid) -> Result<(), DeleteExperienceError> {
        unimplemented!("Not used in this test")
    }
}

// ── Coding profiles ─────────────────────────────────────

#[async_trait]
impl GetCodingProfilesUseCase for NotUsed {
    async fn execute(&self) -> Result<Vec<CodingProfileResult>, GetCodingProfilesError> {
        Ok(vec![])
    }
}

#[async_trait]
impl CreateCodingProfileUseCase for NotUsed {
    async fn execute(
        &self,
        _command: CreateCodingProfileCommand,
    ) -> Result<CodingProfileResult, CreateCodingProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateCodingProfileUseCase for NotUsed {
    async fn execute(
        &self,
        _profile_id: Uuid,
        _command: UpdateCodingProfileCommand,
    ) -> Result<CodingProfileResult, UpdateCodingProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteCodingProfileUseCase for NotUsed {
    async fn execute(&self, _profile_id: Uuid) -> Result<(), DeleteCodingProfileError> {
        unimplemented!("Not used in this test")
    }
}

// ── Contact ─────────────────────────────────────────────

#[async_trait]
impl GetMessagesUseCase for NotUsed {
    async fn execute(&self) -> Result<Vec<MessageResult>, GetMessagesError> {
        Ok(vec![])
    }
}

#[async_trait]
impl SubmitMessageUseCase for NotUsed {
    async fn execute(
        &self,
        _command: SubmitMessageCommand,
    ) -> Result<MessageResult, SubmitMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteMessageUseCase for NotUsed {
    async fn execute(&self, _message_id: Uuid) -> Result<(), DeleteMessageError> {
        unimplemented!("Not used in this test")
    }
}
