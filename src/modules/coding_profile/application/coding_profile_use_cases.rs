use std::sync::Arc;

use crate::modules::coding_profile::application::ports::incoming::use_cases::{
    CreateCodingProfileUseCase, DeleteCodingProfileUseCase, GetCodingProfilesUseCase,
    UpdateCodingProfileUseCase,
};

#[derive(Clone)]
pub struct CodingProfileUseCases {
    pub list: Arc<dyn GetCodingProfilesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCodingProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCodingProfileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCodingProfileUseCase + Send + Sync>,
}
