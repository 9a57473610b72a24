mod create_skill;
mod delete_skill;
mod get_skills;
mod update_skill;

pub use create_skill::{create_skill_handler, CreateSkillRequest};
pub use delete_skill::delete_skill_handler;
pub use get_skills::{__path_get_skills_handler, get_skills_handler};
pub use update_skill::{update_skill_handler, UpdateSkillRequest};
