use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use client_core::{AreaService, CursoService};
use serde_json::{json, Value};
use shared::domain::{Area, AreaId, AreaRef, Curso, CursoId};
use tokio::sync::Mutex;

use crate::controller::area_list::AreaListController;
use crate::controller::area_update::AreaUpdateController;
use crate::controller::curso_update::CursoUpdateController;
use crate::controller::{UpdateFlowState, FALLBACK_ERROR_MESSAGE};

use super::{settings_for, spawn_server, RecordingModal, RecordingNavigator};

fn area_controller(
    base_url: &str,
) -> (
    AreaUpdateController,
    Arc<RecordingModal>,
    Arc<RecordingNavigator>,
) {
    let modal = Arc::new(RecordingModal::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let service = Arc::new(AreaService::new(
        reqwest::Client::new(),
        &settings_for(base_url),
    ));
    let controller = AreaUpdateController::new(service, modal.clone(), navigator.clone());
    (controller, modal, navigator)
}

fn curso_controller(
    base_url: &str,
) -> (
    CursoUpdateController,
    Arc<RecordingModal>,
    Arc<RecordingNavigator>,
) {
    let modal = Arc::new(RecordingModal::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let http = reqwest::Client::new();
    let settings = settings_for(base_url);
    let controller = CursoUpdateController::new(
        Arc::new(CursoService::new(http.clone(), &settings)),
        Arc::new(AreaService::new(http, &settings)),
        modal.clone(),
        navigator.clone(),
    );
    (controller, modal, navigator)
}

fn saved_area_body() -> Value {
    json!({
        "id": 1,
        "nome": "Exatas",
        "descricao": null,
        "status": "ATIVO",
        "dataCriacao": "2025-01-25T10:33:00.000Z",
        "dataInatividade": null
    })
}

fn saved_curso_body() -> Value {
    json!({
        "id": 42,
        "nome": "wireless",
        "descricao": null,
        "status": "ATIVO",
        "dataCriacao": "2025-01-25T10:33:00.000Z",
        "dataInatividade": null,
        "area": {"id": 1, "nome": "Exatas"}
    })
}

#[tokio::test]
async fn draft_save_dispatches_create_and_navigates_back() {
    let router = Router::new().route(
        "/api/areas",
        post(|Json(_body): Json<Value>| async {
            (StatusCode::CREATED, Json(saved_area_body()))
        }),
    );
    let base_url = spawn_server(router).await;

    let (mut controller, modal, navigator) = area_controller(&base_url);
    controller.activate(None);
    controller.edit_form.nome.set_value(Some("Exatas".into()));
    assert!(controller.edit_form.is_valid());

    controller.save().await;

    assert_eq!(navigator.back_count(), 1);
    assert!(modal.messages.lock().unwrap().is_empty());
    assert!(!controller.is_saving());
    assert_eq!(controller.state(), UpdateFlowState::Editing);
}

#[tokio::test]
async fn persisted_save_dispatches_update_against_the_entity_path() {
    let hit: Arc<Mutex<Option<i64>>> = Arc::new(Mutex::new(None));
    let router = Router::new()
        .route(
            "/api/cursos/:id",
            put(
                |State(hit): State<Arc<Mutex<Option<i64>>>>,
                 Path(id): Path<i64>,
                 Json(_body): Json<Value>| async move {
                    *hit.lock().await = Some(id);
                    Json(saved_curso_body())
                },
            ),
        )
        .route("/api/areas", get(|| async { Json(json!([])) }))
        .with_state(hit.clone());
    let base_url = spawn_server(router).await;

    let (mut controller, _modal, navigator) = curso_controller(&base_url);
    let existing = Curso {
        id: Some(CursoId(42)),
        nome: Some("wireless".into()),
        ..saved_curso()
    };
    controller.activate(Some(existing)).await;
    controller.save().await;

    assert_eq!(*hit.lock().await, Some(42));
    assert_eq!(navigator.back_count(), 1);
}

fn saved_curso() -> Curso {
    Curso {
        id: Some(CursoId(42)),
        nome: Some("wireless".into()),
        status: Some(shared::domain::StatusCurso::Ativo),
        data_criacao: Some(chrono::Utc::now()),
        area: Some(AreaRef {
            id: Some(AreaId(1)),
            nome: Some("Exatas".into()),
        }),
        ..Curso::default()
    }
}

#[tokio::test]
async fn failing_save_surfaces_the_server_message_verbatim() {
    let router = Router::new().route(
        "/api/areas",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"message": "Nome ja cadastrado"})),
            )
        }),
    );
    let base_url = spawn_server(router).await;

    let (mut controller, modal, navigator) = area_controller(&base_url);
    controller.activate(None);
    controller.edit_form.nome.set_value(Some("Exatas".into()));
    controller.save().await;

    assert_eq!(
        *modal.messages.lock().unwrap(),
        vec!["Nome ja cadastrado".to_string()]
    );
    assert_eq!(navigator.back_count(), 0);
    assert!(!controller.is_saving());
    // The form keeps the user's edits for another attempt.
    assert_eq!(controller.edit_form.nome.value().as_deref(), Some("Exatas"));
}

#[tokio::test]
async fn failing_save_without_message_falls_back_to_the_generic_text() {
    let router = Router::new().route(
        "/api/areas",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = spawn_server(router).await;

    let (mut controller, modal, _navigator) = area_controller(&base_url);
    controller.activate(None);
    controller.edit_form.nome.set_value(Some("Exatas".into()));
    controller.save().await;

    assert_eq!(
        *modal.messages.lock().unwrap(),
        vec![FALLBACK_ERROR_MESSAGE.to_string()]
    );
    assert!(!controller.is_saving());
}

#[tokio::test]
async fn activation_merges_the_selected_area_into_the_options() {
    let router = Router::new().route(
        "/api/areas",
        get(|| async {
            Json(json!([{
                "id": 1,
                "nome": "Exatas",
                "descricao": null,
                "status": "ATIVO",
                "dataCriacao": "2025-01-25T10:33:00.000Z",
                "dataInatividade": null
            }]))
        }),
    );
    let base_url = spawn_server(router).await;

    let (mut controller, _modal, _navigator) = curso_controller(&base_url);
    let curso = Curso {
        area: Some(AreaRef {
            id: Some(AreaId(9)),
            nome: Some("Humanas".into()),
        }),
        ..saved_curso()
    };
    controller.activate(Some(curso)).await;

    let ids: Vec<i64> = controller
        .areas_shared_collection
        .iter()
        .map(|area| area.id.unwrap().0)
        .collect();
    // The selected Area is prepended ahead of the fetched collection.
    assert_eq!(ids, vec![9, 1]);
    assert_eq!(
        controller
            .edit_form
            .area
            .value()
            .as_ref()
            .and_then(|a| a.id),
        Some(AreaId(9))
    );
    assert_eq!(controller.state(), UpdateFlowState::Editing);
}

#[tokio::test]
async fn select_area_only_matches_loaded_options() {
    let router = Router::new().route(
        "/api/areas",
        get(|| async {
            Json(json!([{
                "id": 3,
                "nome": "Saude",
                "descricao": null,
                "status": "ATIVO",
                "dataCriacao": "2025-01-25T10:33:00.000Z",
                "dataInatividade": null
            }]))
        }),
    );
    let base_url = spawn_server(router).await;

    let (mut controller, _modal, _navigator) = curso_controller(&base_url);
    controller.activate(None).await;

    assert!(controller.select_area(AreaId(3)));
    assert_eq!(
        controller
            .edit_form
            .area
            .value()
            .as_ref()
            .and_then(|a| a.nome.clone()),
        Some("Saude".to_string())
    );
    assert!(!controller.select_area(AreaId(99)));
}

#[tokio::test]
async fn failed_relationship_load_keeps_the_screen_usable() {
    // No /api/areas route at all: the options query fails with 404.
    let router = Router::new();
    let base_url = spawn_server(router).await;

    let (mut controller, _modal, _navigator) = curso_controller(&base_url);
    controller.activate(None).await;

    assert!(controller.areas_shared_collection.is_empty());
    assert_eq!(controller.state(), UpdateFlowState::Editing);
}

#[tokio::test]
async fn list_delete_removes_then_reloads() {
    let deleted: Arc<Mutex<Option<i64>>> = Arc::new(Mutex::new(None));
    let router = Router::new()
        .route(
            "/api/areas/:id",
            delete(
                |State(deleted): State<Arc<Mutex<Option<i64>>>>, Path(id): Path<i64>| async move {
                    *deleted.lock().await = Some(id);
                    StatusCode::NO_CONTENT
                },
            ),
        )
        .route("/api/areas", get(|| async { Json(json!([])) }))
        .with_state(deleted.clone());
    let base_url = spawn_server(router).await;

    let service = Arc::new(AreaService::new(
        reqwest::Client::new(),
        &settings_for(&base_url),
    ));
    let mut screen = AreaListController::new(service);
    screen.areas = vec![Area {
        id: Some(AreaId(7)),
        ..Area::default()
    }];
    screen.delete(AreaId(7)).await.unwrap();

    assert_eq!(*deleted.lock().await, Some(7));
    assert!(screen.areas.is_empty());
}
