//! Port implementations over plain vectors, shared between clones so a
//! repository and its query view see the same rows.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::coding_profile::application::ports::outgoing::{
    CodingProfileQuery, CodingProfileQueryError, CodingProfileRepository,
    CodingProfileRepositoryError, CodingProfileResult, CreateCodingProfileData,
    PatchCodingProfileData,
};
use crate::contact::application::ports::outgoing::{
    CreateMessageData, MessageQuery, MessageQueryError, MessageRepository,
    MessageRepositoryError, MessageResult,
};
use crate::experience::application::ports::outgoing::{
    CreateExperienceData, ExperienceQuery, ExperienceQueryError, ExperienceRepository,
    ExperienceRepositoryError, ExperienceResult, PatchExperienceData,
};
use crate::project::application::ports::outgoing::{
    CreateProjectData, PatchProjectData, ProjectQuery, ProjectQueryError, ProjectRepository,
    ProjectRepositoryError, ProjectResult,
};
use crate::settings::application::ports::outgoing::{
    NewSettingsData, PatchSettingsData, SettingsRepository, SettingsRepositoryError,
    SettingsResult,
};
use crate::skill::application::ports::outgoing::{
    CreateSkillData, PatchSkillData, SkillQuery, SkillQueryError, SkillRepository,
    SkillRepositoryError, SkillResult,
};

// ── Skills ──────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemorySkills {
    rows: Arc<Mutex<Vec<SkillResult>>>,
}

#[async_trait]
impl SkillRepository for InMemorySkills {
    async fn create_skill(
        &self,
        data: CreateSkillData,
    ) -> Result<SkillResult, SkillRepositoryError> {
        let skill = SkillResult {
            id: Uuid::new_v4(),
            name: data.name,
            level: data.level,
            category: data.category,
        };
        self.rows.lock().unwrap().push(skill.clone());
        Ok(skill)
    }

    async fn patch_skill(
        &self,
        skill_id: Uuid,
        data: PatchSkillData,
    ) -> Result<SkillResult, SkillRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let skill = rows
            .iter_mut()
            .find(|s| s.id == skill_id)
            .ok_or(SkillRepositoryError::NotFound)?;

        if let Some(name) = data.name {
            skill.name = name;
        }
        if let Some(level) = data.level {
            skill.level = level;
        }
        if let Some(category) = data.category {
            skill.category = category;
        }
        Ok(skill.clone())
    }

    async fn delete_skill(&self, skill_id: Uuid) -> Result<(), SkillRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != skill_id);
        if rows.len() == before {
            return Err(SkillRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl SkillQuery for InMemorySkills {
    async fn list_skills(&self) -> Result<Vec<SkillResult>, SkillQueryError> {
        let mut skills = self.rows.lock().unwrap().clone();
        // stable: insertion order within a category
        skills.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(skills)
    }
}

// ── Experience ──────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryExperiences {
    rows: Arc<Mutex<Vec<ExperienceResult>>>,
}

#[async_trait]
impl ExperienceRepository for InMemoryExperiences {
    async fn create_experience(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        let entry = ExperienceResult {
            id: Uuid::new_v4(),
            title: data.title,
            company: data.company,
            location: data.location,
            period: data.period,
            description: data.description,
            experience_type: data.experience_type,
        };
        self.rows.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn patch_experience(
        &self,
        experience_id: Uuid,
        data: PatchExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let entry = rows
            .iter_mut()
            .find(|e| e.id == experience_id)
            .ok_or(ExperienceRepositoryError::NotFound)?;

        if let Some(title) = data.title {
            entry.title = title;
        }
        if let Some(period) = data.period {
            entry.period = period;
        }
        if let Some(kind) = data.experience_type {
            entry.experience_type = kind;
        }
        entry.company = data.company.resolve(entry.company.take());
        entry.location = data.location.resolve(entry.location.take());
        entry.description = data.description.resolve(entry.description.take());

        Ok(entry.clone())
    }

    async fn delete_experience(
        &self,
        experience_id: Uuid,
    ) -> Result<(), ExperienceRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != experience_id);
        if rows.len() == before {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ExperienceQuery for InMemoryExperiences {
    async fn list_experiences(&self) -> Result<Vec<ExperienceResult>, ExperienceQueryError> {
        let mut entries = self.rows.lock().unwrap().clone();
        // byte-wise, newest period first; stable for equal periods
        entries.sort_by(|a, b| b.period.cmp(&a.period));
        Ok(entries)
    }
}

// ── Coding profiles ─────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryCodingProfiles {
    rows: Arc<Mutex<Vec<CodingProfileResult>>>,
}

#[async_trait]
impl CodingProfileRepository for InMemoryCodingProfiles {
    async fn create_coding_profile(
        &self,
        data: CreateCodingProfileData,
    ) -> Result<CodingProfileResult, CodingProfileRepositoryError> {
        let profile = CodingProfileResult {
            id: Uuid::new_v4(),
            platform: data.platform,
            username: data.username,
            description: data.description,
            icon: data.icon,
            color: data.color,
            link: data.link,
            stats: data.stats,
        };
        self.rows.lock().unwrap().push(profile.clone());
        Ok(profile)
    }

    async fn patch_coding_profile(
        &self,
        profile_id: Uuid,
        data: PatchCodingProfileData,
    ) -> Result<CodingProfileResult, CodingProfileRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let profile = rows
            .iter_mut()
            .find(|p| p.id == profile_id)
            .ok_or(CodingProfileRepositoryError::NotFound)?;

        if let Some(platform) = data.platform {
            profile.platform = platform;
        }
        if let Some(username) = data.username {
            profile.username = username;
        }
        if let Some(stats) = data.stats {
            profile.stats = stats;
        }
        profile.description = data.description.resolve(profile.description.take());
        profile.icon = data.icon.resolve(profile.icon.take());
        profile.color = data.color.resolve(profile.color.take());
        profile.link = data.link.resolve(profile.link.take());

        Ok(profile.clone())
    }

    async fn delete_coding_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<(), CodingProfileRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != profile_id);
        if rows.len() == before {
            return Err(CodingProfileRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CodingProfileQuery for InMemoryCodingProfiles {
    async fn list_coding_profiles(
        &self,
    ) -> Result<Vec<CodingProfileResult>, CodingProfileQueryError> {
        let mut profiles = self.rows.lock().unwrap().clone();
        profiles.sort_by(|a, b| a.platform.cmp(&b.platform));
        Ok(profiles)
    }
}

// ── Projects ────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryProjects {
    rows: Arc<Mutex<Vec<ProjectResult>>>,
}

#[async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let project = ProjectResult {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            tech: data.tech,
            github: data.github,
            live: data.live,
            image: data.image,
            icon: data.icon,
        };
        self.rows.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn patch_project(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let project = rows
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        if let Some(title) = data.title {
            project.title = title;
        }
        if let Some(description) = data.description {
            project.description = description;
        }
        if let Some(tech) = data.tech {
            project.tech = tech;
        }
        project.github = data.github.resolve(project.github.take());
        project.live = data.live.resolve(project.live.take());
        project.image = data.image.resolve(project.image.take());
        project.icon = data.icon.resolve(project.icon.take());

        Ok(project.clone())
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != project_id);
        if rows.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjects {
    async fn list_projects(&self) -> Result<Vec<ProjectResult>, ProjectQueryError> {
        Ok(self.rows.lock().unwrap().iter().rev().cloned().collect())
    }
}

// ── Contact messages ────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryMessages {
    rows: Arc<Mutex<Vec<MessageResult>>>,
}

#[async_trait]
impl MessageRepository for InMemoryMessages {
    async fn create_message(
        &self,
        data: CreateMessageData,
    ) -> Result<MessageResult, MessageRepositoryError> {
        let message = MessageResult {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            date: data.date,
        };
        self.rows.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn delete_message(&self, message_id: Uuid) -> Result<(), MessageRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != message_id);
        if rows.len() == before {
            return Err(MessageRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl MessageQuery for InMemoryMessages {
    async fn list_messages(&self) -> Result<Vec<MessageResult>, MessageQueryError> {
        let mut messages = self.rows.lock().unwrap().clone();
        messages.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(messages)
    }
}

// ── Settings ────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemorySettings {
    row: Arc<Mutex<Option<SettingsResult>>>,
}

#[async_trait]
impl SettingsRepository for InMemorySettings {
    async fn find_settings(&self) -> Result<Option<SettingsResult>, SettingsRepositoryError> {
        Ok(self.row.lock().unwrap().clone())
    }

    async fn insert_settings(
        &self,
        data: NewSettingsData,
    ) -> Result<SettingsResult, SettingsRepositoryError> {
        let settings = SettingsResult {
            id: Uuid::new_v4(),
            name: data.name,
            title: data.title,
            bio: data.bio,
            profile_image: data.profile_image,
            resume_link: data.resume_link,
            linkedin: data.linkedin,
            github: data.github,
            devpost: data.devpost,
            leetcode: data.leetcode,
            email: data.email,
            about_description: data.about_description,
        };
        *self.row.lock().unwrap() = Some(settings.clone());
        Ok(settings)
    }

    async fn patch_settings(
        &self,
        settings_id: Uuid,
        data: PatchSettingsData,
    ) -> Result<SettingsResult, SettingsRepositoryError> {
        let mut row = self.row.lock().unwrap();
        let settings = row
            .as_mut()
            .filter(|s| s.id == settings_id)
            .ok_or(SettingsRepositoryError::NotFound)?;

        if let Some(name) = data.name {
            settings.name = name;
        }
        if let Some(title) = data.title {
            settings.title = title;
        }
        if let Some(bio) = data.bio {
            settings.bio = bio;
        }
        settings.profile_image = data.profile_image.resolve(settings.profile_image.take());
        settings.resume_link = data.resume_link.resolve(settings.resume_link.take());
        settings.linkedin = data.linkedin.resolve(settings.linkedin.take());
        settings.github = data.github.resolve(settings.github.take());
        settings.devpost = data.devpost.resolve(settings.devpost.take());
        settings.leetcode = data.leetcode.resolve(settings.leetcode.take());
        settings.email = data.email.resolve(settings.email.take());
        settings.about_description = data
            .about_description
            .resolve(settings.about_description.take());

        Ok(settings.clone())
    }
}
