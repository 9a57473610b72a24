use actix_web::{middleware::Logger, web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portfolio_backend::api::openapi::ApiDoc;
use portfolio_backend::auth::adapter::outgoing::jwt::JwtTokenService;
use portfolio_backend::auth::adapter::outgoing::security::ConfiguredAdminSecret;
use portfolio_backend::auth::application::ports::outgoing::TokenProvider;
use portfolio_backend::auth::application::use_cases::login_admin::LoginAdminUseCase;
use portfolio_backend::coding_profile::{
    adapter::outgoing::{CodingProfileQueryPostgres, CodingProfileRepositoryPostgres},
    application::{
        coding_profile_use_cases::CodingProfileUseCases,
        service::{
            CreateCodingProfileService, DeleteCodingProfileService, GetCodingProfilesService,
            UpdateCodingProfileService,
        },
    },
};
use portfolio_backend::contact::{
    adapter::outgoing::{MessageQueryPostgres, MessageRepositoryPostgres},
    application::{
        contact_use_cases::ContactUseCases,
        service::{DeleteMessageService, GetMessagesService, SubmitMessageService},
    },
};
use portfolio_backend::experience::{
    adapter::outgoing::{ExperienceQueryPostgres, ExperienceRepositoryPostgres},
    application::{
        experience_use_cases::ExperienceUseCases,
        service::{
            CreateExperienceService, DeleteExperienceService, GetExperiencesService,
            UpdateExperienceService,
        },
    },
};
use portfolio_backend::project::{
    adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres},
    application::{
        project_use_cases::ProjectUseCases,
        service::{
            CreateProjectService, DeleteProjectService, GetProjectsService, UpdateProjectService,
        },
    },
};
use portfolio_backend::settings::{
    adapter::outgoing::SettingsRepositoryPostgres,
    application::{
        service::{GetSettingsService, UpsertSettingsService},
        settings_use_cases::SettingsUseCases,
    },
};
use portfolio_backend::shared::api::custom_json_config;
use portfolio_backend::shared::config::{load_env_files, AppConfig};
use portfolio_backend::skill::{
    adapter::outgoing::{SkillQueryPostgres, SkillRepositoryPostgres},
    application::{
        service::{CreateSkillService, DeleteSkillService, GetSkillsService, UpdateSkillService},
        skill_use_cases::SkillUseCases,
    },
};
use portfolio_backend::{init_routes, AppState};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    load_env_files();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!(?config, "Starting portfolio backend");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to connect to database: {e}")))?;

    let db_arc = Arc::new(conn);

    // Auth
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let admin_secret = ConfiguredAdminSecret::new(&config.admin_password);
    let login_admin_use_case =
        LoginAdminUseCase::new(Arc::new(admin_secret), Arc::new(jwt_service.clone()));

    // Portfolio content
    let settings_repo = SettingsRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db_arc));
    let skill_query = SkillQueryPostgres::new(Arc::clone(&db_arc));
    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience_query = ExperienceQueryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = CodingProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_query = CodingProfileQueryPostgres::new(Arc::clone(&db_arc));
    let message_repo = MessageRepositoryPostgres::new(Arc::clone(&db_arc));
    let message_query = MessageQueryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        login_admin_use_case: Arc::new(login_admin_use_case),
        settings: SettingsUseCases {
            get: Arc::new(GetSettingsService::new(settings_repo.clone())),
            upsert: Arc::new(UpsertSettingsService::new(settings_repo)),
        },
        project: ProjectUseCases {
            list: Arc::new(GetProjectsService::new(project_query)),
            create: Arc::new(CreateProjectService::new(project_repo.clone())),
            update: Arc::new(UpdateProjectService::new(project_repo.clone())),
            delete: Arc::new(DeleteProjectService::new(project_repo)),
        },
        skill: SkillUseCases {
            list: Arc::new(GetSkillsService::new(skill_query)),
            create: Arc::new(CreateSkillService::new(skill_repo.clone())),
            update: Arc::new(UpdateSkillService::new(skill_repo.clone())),
            delete: Arc::new(DeleteSkillService::new(skill_repo)),
        },
        experience: ExperienceUseCases {
            list: Arc::new(GetExperiencesService::new(experience_query)),
            create: Arc::new(CreateExperienceService::new(experience_repo.clone())),
            update: Arc::new(UpdateExperienceService::new(experience_repo.clone())),
            delete: Arc::new(DeleteExperienceService::new(experience_repo)),
        },
        coding_profile: CodingProfileUseCases {
            list: Arc::new(GetCodingProfilesService::new(profile_query)),
            create: Arc::new(CreateCodingProfileService::new(profile_repo.clone())),
            update: Arc::new(UpdateCodingProfileService::new(profile_repo.clone())),
            delete: Arc::new(DeleteCodingProfileService::new(profile_repo)),
        },
        contact: ContactUseCases {
            list: Arc::new(GetMessagesService::new(message_query)),
            submit: Arc::new(SubmitMessageService::new(message_repo.clone())),
            delete: Arc::new(DeleteMessageService::new(message_repo)),
        },
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
