use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::settings::application::settings_use_cases::SettingsUseCases;
use crate::settings::application::ports::incoming::use_cases::{
    GetSettingsUseCase, UpsertSettingsUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, UpdateProjectUseCase,
};
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillsUseCase, UpdateSkillUseCase,
};
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase,
    UpdateExperienceUseCase,
};
use crate::coding_profile::application::coding_profile_use_cases::CodingProfileUseCases;
use crate::coding_profile::application::ports::incoming::use_cases::{
    CreateCodingProfileUseCase, DeleteCodingProfileUseCase, GetCodingProfilesUseCase,
    UpdateCodingProfileUseCase,
};
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, GetMessagesUseCase, SubmitMessageUseCase,
};
use crate::tests::support::stubs::NotUsed;
use crate::AppState;

/// Route tests swap in the one use case they exercise; the rest stay on
/// `NotUsed`.
pub struct TestAppStateBuilder {
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    settings: SettingsUseCases,
    project: ProjectUseCases,
    skill: SkillUseCases,
    experience: ExperienceUseCases,
    coding_profile: CodingProfileUseCases,
    contact: ContactUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_admin: Arc::new(NotUsed),
            settings: SettingsUseCases {
                get: Arc::new(NotUsed),
                upsert: Arc::new(NotUsed),
            },
            project: ProjectUseCases {
                list: Arc::new(NotUsed),
                create: Arc::new(NotUsed),
                update: Arc::new(NotUsed),
                delete: Arc::new(NotUsed),
            },
            skill: SkillUseCases {
                list: Arc::new(NotUsed),
                create: Arc::new(NotUsed),
                update: Arc::new(NotUsed),
                delete: Arc::new(NotUsed),
            },
            experience: ExperienceUseCases {
                list: Arc::new(NotUsed),
                create: Arc::new(NotUsed),
                update: Arc::new(NotUsed),
                delete: Arc::new(NotUsed),
            },
            coding_profile: CodingProfileUseCases {
                list: Arc::new(NotUsed),
                create: Arc::new(NotUsed),
                update: Arc::new(NotUsed),
                delete: Arc::new(NotUsed),
            },
            contact: ContactUseCases {
                list: Arc::new(NotUsed),
                submit: Arc::new(NotUsed),
                delete: Arc::new(NotUsed),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(
        mut self,
        uc: impl ILoginAdminUseCase + Send + Sync + 'static,
    ) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_get_settings(
        mut self,
        uc: impl GetSettingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.settings.get = Arc::new(uc);
        self
    }

    pub fn with_upsert_settings(
        mut self,
        uc: impl UpsertSettingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.settings.upsert = Arc::new(uc);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.list = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.skill.list = Arc::new(uc);
        self
    }

    pub fn with_create_skill(
        mut self,
        uc: impl CreateSkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.create = Arc::new(uc);
        self
    }

    pub fn with_update_skill(
        mut self,
        uc: impl UpdateSkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.update = Arc::new(uc);
        self
    }

    pub fn with_delete_skill(
        mut self,
        uc: impl DeleteSkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.delete = Arc::new(uc);
        self
    }

    pub fn with_get_experiences(
        mut self,
        uc: impl GetExperiencesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.list = Arc::new(uc);
        self
    }

    pub fn with_create_experience(
        mut self,
        uc: impl CreateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.create = Arc::new(uc);
        self
    }

    pub fn with_update_experience(
        mut self,
        uc: impl UpdateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.update = Arc::new(uc);
        self
    }

    pub fn with_delete_experience(
        mut self,
        uc: impl DeleteExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.delete = Arc::new(uc);
        self
    }

    pub fn with_get_coding_profiles(
        mut self,
        uc: impl GetCodingProfilesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.coding_profile.list = Arc::new(uc);
        self
    }

    pub fn with_create_coding_profile(
        mut self,
        uc: impl CreateCodingProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.coding_profile.create = Arc::new(uc);
        self
    }

    pub fn with_update_coding_profile(
        mut self,
        uc: impl UpdateCodingProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.coding_profile.update = Arc::new(uc);
        self
    }

    pub fn with_delete_coding_profile(
        mut self,
        uc: impl DeleteCodingProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.coding_profile.delete = Arc::new(uc);
        self
    }

    pub fn with_get_messages(
        mut self,
        uc: impl GetMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.list = Arc::new(uc);
        self
    }

    pub fn with_submit_message(
        mut self,
        uc: impl SubmitMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_delete_message(
        mut self,
        uc: impl DeleteMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_admin_use_case: self.login_admin,
            settings: self.settings,
            project: self.project,
            skill: self.skill,
            experience: self.experience,
            coding_profile: self.coding_profile,
            contact: self.contact,
        })
    }
}
