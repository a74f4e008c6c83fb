//! Member handlers

use crate::error::AppResult;
use crate::extractors::{redirect_with, Flash, FlashMessage, MemberId};
use crate::services::DirectoryError;
use crate::views;
use crate::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use gym_types::{EditMemberForm, MemberChanges, MemberForm, NewMember};
use tracing::{info, warn};

pub const MEMBER_CREATED: &str = "Usuario creado exitosamente.";
pub const DUPLICATE_ID: &str = "Error: El DNI ya está en uso. Por favor, elija otro.";
pub const CREATE_FAILED: &str = "Error al crear el usuario. Por favor, inténtelo nuevamente.";
pub const UPDATE_FAILED: &str = "Error al actualizar el usuario. Por favor, inténtelo nuevamente.";

const LIST_PATH: &str = "/usuarios";
const REGISTRATION_PATH: &str = "/inscripcion";
const NEW_MEMBER_PATH: &str = "/nuevo_usuario";

/// GET /usuarios
pub async fn list(State(state): State<AppState>, flash: Flash) -> AppResult<Response> {
    let members = state.directory.list().await?;
    let html = views::members::list(&members, flash.messages());
    Ok(flash.page(html))
}

/// GET /inscripcion
pub async fn registration_form(flash: Flash) -> Response {
    let html = views::members::create_form("Inscripción", REGISTRATION_PATH, flash.messages());
    flash.page(html)
}

/// POST /inscripcion
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<MemberForm>,
) -> AppResult<Response> {
    create_member(&state, REGISTRATION_PATH, form).await
}

/// GET /nuevo_usuario
pub async fn new_member_form(flash: Flash) -> Response {
    let html = views::members::create_form("Nuevo usuario", NEW_MEMBER_PATH, flash.messages());
    flash.page(html)
}

/// POST /nuevo_usuario
pub async fn create_new_member(
    State(state): State<AppState>,
    Form(form): Form<MemberForm>,
) -> AppResult<Response> {
    create_member(&state, NEW_MEMBER_PATH, form).await
}

/// Shared create flow. Recoverable failures send the user back to `origin`
/// with an error flash; the submitted values are not kept.
async fn create_member(state: &AppState, origin: &str, form: MemberForm) -> AppResult<Response> {
    let result = match NewMember::try_from(form) {
        Ok(new_member) => state.directory.register(new_member).await,
        Err(e) => Err(DirectoryError::from(e)),
    };

    match result {
        Ok(member) => {
            info!("Member {} created via {}", member.id, origin);
            Ok(redirect_with(LIST_PATH, FlashMessage::success(MEMBER_CREATED)))
        }
        Err(DirectoryError::DuplicateId(id)) => {
            warn!("Duplicate member id {} submitted via {}", id, origin);
            Ok(redirect_with(origin, FlashMessage::error(DUPLICATE_ID)))
        }
        Err(e) if e.is_recoverable() => {
            warn!("Member creation failed via {}: {}", origin, e);
            Ok(redirect_with(origin, FlashMessage::error(CREATE_FAILED)))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /editar_usuario/:id
pub async fn edit_form(
    State(state): State<AppState>,
    MemberId(id): MemberId,
    flash: Flash,
) -> AppResult<Response> {
    let member = state.directory.get(id).await?;
    let html = views::members::edit_form(&member, flash.messages());
    Ok(flash.page(html))
}

/// POST /editar_usuario/:id
pub async fn update(
    State(state): State<AppState>,
    MemberId(id): MemberId,
    Form(form): Form<EditMemberForm>,
) -> AppResult<Response> {
    let result = match MemberChanges::try_from(form) {
        Ok(changes) => state.directory.update(id, changes).await,
        Err(e) => {
            // No edit form to return to for a member that is gone
            state.directory.get(id).await?;
            Err(DirectoryError::from(e))
        }
    };

    match result {
        Ok(_) => Ok(Redirect::to(LIST_PATH).into_response()),
        Err(e) if e.is_recoverable() => {
            warn!("Member {} update failed: {}", id, e);
            let edit_path = format!("/editar_usuario/{}", id);
            Ok(redirect_with(&edit_path, FlashMessage::error(UPDATE_FAILED)))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /eliminar_usuario/:id
pub async fn delete(
    State(state): State<AppState>,
    MemberId(id): MemberId,
) -> AppResult<Response> {
    state.directory.delete(id).await?;
    Ok(Redirect::to(LIST_PATH).into_response())
}
