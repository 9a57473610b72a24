//! End-to-end request flows: real routes, services and token handling over
//! in-memory stores.

use actix_web::{test, web, App};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::auth::adapter::incoming::web::extractors::auth::AUTH_TOKEN_HEADER;
use crate::auth::adapter::outgoing::security::ConfiguredAdminSecret;
use crate::auth::application::ports::outgoing::TokenClaims;
use crate::auth::application::use_cases::login_admin::LoginAdminUseCase;
use crate::coding_profile::application::service::{
    CreateCodingProfileService, DeleteCodingProfileService, GetCodingProfilesService,
    UpdateCodingProfileService,
};
use crate::contact::application::service::{
    DeleteMessageService, GetMessagesService, SubmitMessageService,
};
use crate::experience::application::service::{
    CreateExperienceService, DeleteExperienceService, GetExperiencesService,
    UpdateExperienceService,
};
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, UpdateProjectService,
};
use crate::settings::application::service::{GetSettingsService, UpsertSettingsService};
use crate::shared::api::custom_json_config;
use crate::skill::application::service::{
    CreateSkillService, DeleteSkillService, GetSkillsService, UpdateSkillService,
};
use crate::tests::support::app_state_builder::TestAppStateBuilder;
use crate::tests::support::auth_helper::{
    create_test_jwt_service, test_token_provider, TEST_ADMIN_PASSWORD, TEST_JWT_SECRET,
};
use crate::tests::support::in_memory::{
    InMemoryCodingProfiles, InMemoryExperiences, InMemoryMessages, InMemoryProjects,
    InMemorySettings, InMemorySkills,
};
use crate::{init_routes, AppState};

#[derive(Default)]
struct Stores {
    skills: InMemorySkills,
    projects: InMemoryProjects,
    experiences: InMemoryExperiences,
    profiles: InMemoryCodingProfiles,
    messages: InMemoryMessages,
    settings: InMemorySettings,
}

impl Stores {
    fn app_state(&self) -> web::Data<AppState> {
        let login = LoginAdminUseCase::new(
            Arc::new(ConfiguredAdminSecret::new(TEST_ADMIN_PASSWORD)),
            Arc::new(create_test_jwt_service()),
        );

        TestAppStateBuilder::default()
            .with_login_admin(login)
            .with_get_skills(GetSkillsService::new(self.skills.clone()))
            .with_create_skill(CreateSkillService::new(self.skills.clone()))
            .with_update_skill(UpdateSkillService::new(self.skills.clone()))
            .with_delete_skill(DeleteSkillService::new(self.skills.clone()))
            .with_get_projects(GetProjectsService::new(self.projects.clone()))
            .with_create_project(CreateProjectService::new(self.projects.clone()))
            .with_update_project(UpdateProjectService::new(self.projects.clone()))
            .with_delete_project(DeleteProjectService::new(self.projects.clone()))
            .with_get_experiences(GetExperiencesService::new(self.experiences.clone()))
            .with_create_experience(CreateExperienceService::new(self.experiences.clone()))
            .with_update_experience(UpdateExperienceService::new(self.experiences.clone()))
            .with_delete_experience(DeleteExperienceService::new(self.experiences.clone()))
            .with_get_coding_profiles(GetCodingProfilesService::new(self.profiles.clone()))
            .with_create_coding_profile(CreateCodingProfileService::new(self.profiles.clone()))
            .with_update_coding_profile(UpdateCodingProfileService::new(self.profiles.clone()))
            .with_delete_coding_profile(DeleteCodingProfileService::new(self.profiles.clone()))
            .with_get_messages(GetMessagesService::new(self.messages.clone()))
            .with_submit_message(SubmitMessageService::new(self.messages.clone()))
            .with_delete_message(DeleteMessageService::new(self.messages.clone()))
            .with_get_settings(GetSettingsService::new(self.settings.clone()))
            .with_upsert_settings(UpsertSettingsService::new(self.settings.clone()))
            .build()
    }
}

macro_rules! portfolio_app {
    ($stores:expr) => {
        test::init_service(
            App::new()
                .app_data($stores.app_state())
                .app_data(web::Data::new(test_token_provider()))
                .app_data(custom_json_config())
                .configure(init_routes),
        )
        .await
    };
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status().as_u16();
        let body = test::read_body(resp).await;
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }};
}

macro_rules! login {
    ($app:expr) => {{
        let (status, body) = send!(
            $app,
            test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({ "password": TEST_ADMIN_PASSWORD }))
        );
        assert_eq!(status, 200, "login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }};
}

fn with_token(req: test::TestRequest, token: &str) -> test::TestRequest {
    req.insert_header((AUTH_TOKEN_HEADER, token.to_string()))
}

fn expired_admin_token() -> String {
    let issued = Utc::now() - Duration::seconds(3601 + 60);
    let claims = TokenClaims {
        role: "admin".to_string(),
        iss: "portfolio".to_string(),
        iat: issued.timestamp(),
        nbf: issued.timestamp(),
        exp: (issued + Duration::seconds(3600)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

#[actix_web::test]
async fn created_skill_is_listed_in_category_order() {
    let stores = Stores::default();
    let app = portfolio_app!(stores);
    let token = login!(app);

    for (name, level, category) in [
        ("CSS", 85, "Web"),
        ("Rust", 70, "Programming"),
        ("Excel", 75, "Tools"),
    ] {
        let (status, body) = send!(
            app,
            with_token(test::TestRequest::post().uri("/api/portfolio/skills"), &token)
                .set_json(json!({ "name": name, "level": level, "category": category }))
        );
        assert_eq!(status, 200);
        assert_eq!(body["name"], name);
        assert_eq!(body["level"], level);
        assert!(body["id"].is_string());
    }

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/portfolio/skills"));
    assert_eq!(status, 200);

    let categories: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["Programming", "Tools", "Web"]);
}

#[actix_web::test]
async fn wrong_secret_is_rejected() {
    let stores = Stores::default();
    let app = portfolio_app!(stores);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "password": "letmein" }))
    );

    assert_eq!(status, 400);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
    assert_eq!(body["msg"], "Invalid Credentials");
}

#[actix_web::test]
async fn unauthenticated_mutations_leave_store_unchanged() {
    let stores = Stores::default();
    let app = portfolio_app!(stores);
    let token = login!(app);

    let (_, created) = send!(
        app,
        with_token(test::TestRequest::post().uri("/api/portfolio/skills"), &token)
            .set_json(json!({ "name": "Rust", "level": 70, "category": "Programming" }))
    );
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/portfolio/skills")
            .set_json(json!({ "name": "Go", "level": 50, "category": "Programming" }))
    );
    assert_eq!(status, 401);

    let (status, _) = send!(
        app,
        with_token(
            test::TestRequest::put().uri(&format!("/api/portfolio/skills/{id}")),
            "not-a-jwt"
        )
        .set_json(json!({ "level": 1 }))
    );
    assert_eq!(status, 401);

    let (status, _) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/portfolio/skills/{id}"))
    );
    assert_eq!(status, 401);

    let (_, body) = send!(app, test::TestRequest::get().uri("/api/portfolio/skills"));
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["level"], 70);
}

#[actix_web::test]
async fn token_older_than_an_hour_is_rejected() {
    let stores = Stores::default();
    let app = portfolio_app!(stores);

    let (status, body) = send!(
        app,
        with_token(
            test::TestRequest::post().uri("/api/portfolio/skills"),
            &expired_admin_token()
        )
        .set_json(json!({ "name": "Rust", "level": 70, "category": "Programming" }))
    );

    assert_eq!(status, 401);
    assert_eq!(body["code"], "INVALID_TOKEN");
}

#[actix_web::test]
async fn message_delete_then_not_found() {
    let stores = Stores::default();
    let app = portfolio_app!(stores);
    let token = login!(app);

    let (status, submitted) = send!(
        app,
        test::TestRequest::post().uri("/api/contact").set_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Collaboration",
            "message": "Would love to work together."
        }))
    );
    assert_eq!(status, 200);
    let id = submitted["id"].as_str().unwrap().to_string();

    let (status, inbox) = send!(
        app,
        with_token(test::TestRequest::get().uri("/api/contact"), &token)
    );
    assert_eq!(status, 200);
    assert_eq!(inbox.as_array().unwrap().len(), 1);

    let (status, body) = send!(
        app,
        with_token(
            test::TestRequest::delete().uri(&format!("/api/contact/{id}")),
            &token
        )
    );
    assert_eq!(status, 200);
    assert_eq!(body["msg"], "Message removed");

    let (_, inbox) = send!(
        app,
        with_token(test::TestRequest::get().uri("/api/contact"), &token)
    );
    assert_eq!(inbox, json!([]));

    let (status, body) = send!(
        app,
        with_token(
            test::TestRequest::delete().uri(&format!("/api/contact/{id}")),
            &token
        )
    );
    assert_eq!(status, 404);
    assert_eq!(body["code"], "MESSAGE_NOT_FOUND");
}

#[actix_web::test]
async fn project_update_merges_and_keeps_tech() {
    let stores = Stores::default();
    let app = portfolio_app!(stores);
    let token = login!(app);

    let (_, created) = send!(
        app,
        with_token(test::TestRequest::post().uri("/api/portfolio/projects"), &token).set_json(
            json!({
                "title": "Nxt Pharma",
                "description": "Pharma analytics",
                "tech": ["Analytics", "Data Science"],
                "github": "https://github.com/x/nxt"
            })
        )
    );
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send!(
        app,
        with_token(
            test::TestRequest::put().uri(&format!("/api/portfolio/projects/{id}")),
            &token
        )
        .set_json(json!({ "title": "Nxt Pharma v2" }))
    );

    assert_eq!(status, 200);
    assert_eq!(body["title"], "Nxt Pharma v2");
    assert_eq!(body["description"], "Pharma analytics");
    assert_eq!(body["tech"], json!(["Analytics", "Data Science"]));
    assert_eq!(body["github"], "https://github.com/x/nxt");
}

#[actix_web::test]
async fn update_of_unknown_record_is_not_found() {
    let stores = Stores::default();
    let app = portfolio_app!(stores);
    let token = login!(app);

    let (status, body) = send!(
        app,
        with_token(
            test::TestRequest::put()
                .uri(&format!("/api/portfolio/skills/{}", uuid::Uuid::new_v4())),
            &token
        )
        .set_json(json!({ "level": 10 }))
    );

    assert_eq!(status, 404);
    assert_eq!(body["code"], "SKILL_NOT_FOUND");
}

#[actix_web::test]
async fn empty_store_reads() {
    let stores = Stores::default();
    let app = portfolio_app!(stores);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/portfolio/settings"));
    assert_eq!(status, 200);
    assert_eq!(body, json!({}));

    for uri in [
        "/api/portfolio/projects",
        "/api/portfolio/skills",
        "/api/portfolio/experience",
        "/api/portfolio/profiles",
    ] {
        let (status, body) = send!(app, test::TestRequest::get().uri(uri));
        assert_eq!(status, 200, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
}

#[actix_web::test]
async fn settings_are_created_then_merged() {
    let stores = Stores::default();
    let app = portfolio_app!(stores);
    let token = login!(app);

    let (status, created) = send!(
        app,
        with_token(test::TestRequest::put().uri("/api/portfolio/settings"), &token).set_json(
            json!({
                "name": "VETRISELVAN V",
                "title": "AI & Data Science Student",
                "bio": "SNS College of Technology",
                "resumeLink": "#"
            })
        )
    );
    assert_eq!(status, 200);

    let (status, merged) = send!(
        app,
        with_token(test::TestRequest::put().uri("/api/portfolio/settings"), &token)
            .set_json(json!({ "title": "Data Engineer" }))
    );
    assert_eq!(status, 200);
    assert_eq!(merged["id"], created["id"]);
    assert_eq!(merged["name"], "VETRISELVAN V");
    assert_eq!(merged["title"], "Data Engineer");
    assert_eq!(merged["resumeLink"], "#");

    let (_, body) = send!(app, test::TestRequest::get().uri("/api/portfolio/settings"));
    assert_eq!(body["title"], "Data Engineer");
}

#[actix_web::test]
async fn bodies_are_plain_json_without_wrapper() {
    let stores = Stores::default();
    let app = portfolio_app!(stores);

    let (status, ok) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "password": TEST_ADMIN_PASSWORD }))
    );
    assert_eq!(status, 200);
    let keys: Vec<&String> = ok.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["token"]);
    let token = ok["token"].as_str().unwrap().to_string();

    let (status, bad) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "password": "nope" }))
    );
    assert_eq!(status, 400);
    assert_eq!(bad["msg"], "Invalid Credentials");

    let (status, list) = send!(app, test::TestRequest::get().uri("/api/portfolio/skills"));
    assert_eq!(status, 200);
    assert!(list.is_array());

    let (_, created) = send!(
        app,
        with_token(test::TestRequest::post().uri("/api/portfolio/skills"), &token)
            .set_json(json!({ "name": "SQL", "level": 80, "category": "Data" }))
    );
    let id = created["id"].as_str().unwrap().to_string();

    let (status, removed) = send!(
        app,
        with_token(
            test::TestRequest::delete().uri(&format!("/api/portfolio/skills/{id}")),
            &token
        )
    );
    assert_eq!(status, 200);
    assert_eq!(removed, json!({ "msg": "Skill removed" }));

    let (status, missing) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/portfolio/skills")
            .set_json(json!({ "name": "Go", "level": 40, "category": "Programming" }))
    );
    assert_eq!(status, 401);
    assert!(missing["msg"].is_string());
    assert_eq!(missing["code"], "MISSING_AUTH_TOKEN");
}

#[actix_web::test]
async fn experience_entries_list_newest_period_first() {
    let stores = Stores::default();
    let app = portfolio_app!(stores);
    let token = login!(app);

    for (title, period, kind) in [
        ("B.Tech AI & DS", "2022 - 2026", "education"),
        ("Smart India Hackathon", "2024-2025", "hackathon"),
        ("Data Intern", "2024 - Present", "work"),
    ] {
        let (status, body) = send!(
            app,
            with_token(test::TestRequest::post().uri("/api/portfolio/experience"), &token)
                .set_json(json!({ "title": title, "period": period, "type": kind }))
        );
        assert_eq!(status, 200);
        assert_eq!(body["type"], kind);
    }

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/portfolio/experience"));
    assert_eq!(status, 200);

    let periods: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["period"].as_str().unwrap())
        .collect();
    // '-' (0x2D) sorts after ' ' (0x20)
    assert_eq!(periods, vec!["2024-2025", "2024 - Present", "2022 - 2026"]);
}

#[actix_web::test]
async fn coding_profiles_list_by_platform_with_stats() {
    let stores = Stores::default();
    let app = portfolio_app!(stores);
    let token = login!(app);

    let (status, created) = send!(
        app,
        with_token(test::TestRequest::post().uri("/api/portfolio/profiles"), &token).set_json(
            json!({
                "platform": "LeetCode",
                "username": "vetri",
                "stats": [
                    { "label": "Solved", "value": "350+" },
                    { "label": "Rating", "value": "1650" }
                ]
            })
        )
    );
    assert_eq!(status, 200);
    assert!(created["id"].is_string());

    let (status, _) = send!(
        app,
        with_token(test::TestRequest::post().uri("/api/portfolio/profiles"), &token)
            .set_json(json!({ "platform": "GitHub", "username": "vetri" }))
    );
    assert_eq!(status, 200);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/portfolio/profiles"));
    assert_eq!(status, 200);

    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["platform"], "GitHub");
    assert_eq!(list[0]["stats"], json!([]));
    assert_eq!(list[1]["platform"], "LeetCode");
    assert_eq!(
        list[1]["stats"],
        json!([
            { "label": "Solved", "value": "350+" },
            { "label": "Rating", "value": "1650" }
        ])
    );
}
