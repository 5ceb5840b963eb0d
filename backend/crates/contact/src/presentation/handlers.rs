//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::id::{ContactId, SubscriberId};

use crate::application::config::ContactConfig;
use crate::application::contacts::{
    DeleteContactUseCase, ListContactsUseCase, SubmitContactUseCase,
};
use crate::application::subscribers::{
    ListSubscribersUseCase, SubscribeUseCase, UnsubscribeUseCase,
};
use crate::domain::entities::NewContactMessage;
use crate::domain::repository::{ContactRepository, SubscriberRepository};
use crate::error::{ContactError, ContactResult};
use crate::presentation::dto::{
    ContactRequest, ContactResponse, MessageResponse, SubscribeRequest, SubscriberResponse,
};

#[derive(Clone)]
pub struct ContactAppState<R>
where
    R: ContactRepository + SubscriberRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ContactConfig>,
}

fn path_id(path: Result<Path<i64>, PathRejection>) -> ContactResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|_| ContactError::Validation("id must be an integer".to_string()))
}

/// POST /api/contacts
pub async fn submit_contact<R>(
    State(state): State<ContactAppState<R>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> ContactResult<Json<MessageResponse>>
where
    R: ContactRepository + SubscriberRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| ContactError::Validation(e.body_text()))?;
    let message =
        NewContactMessage::parse(&req.first_name, &req.last_name, &req.email, &req.message)?;

    SubmitContactUseCase::new(state.repo.clone(), state.config.clone())
        .execute(message)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Message saved successfully",
    }))
}

/// GET /api/contacts
pub async fn list_contacts<R>(
    State(state): State<ContactAppState<R>>,
) -> ContactResult<Json<Vec<ContactResponse>>>
where
    R: ContactRepository + SubscriberRepository + Clone + Send + Sync + 'static,
{
    let contacts = ListContactsUseCase::new(state.repo.clone(), state.config.clone())
        .execute()
        .await?;
    Ok(Json(contacts.into_iter().map(ContactResponse::from).collect()))
}

/// DELETE /api/contacts/{id}
pub async fn delete_contact<R>(
    State(state): State<ContactAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> ContactResult<Json<MessageResponse>>
where
    R: ContactRepository + SubscriberRepository + Clone + Send + Sync + 'static,
{
    let id = ContactId::from_i64(path_id(path)?);
    DeleteContactUseCase::new(state.repo.clone(), state.config.clone())
        .execute(id)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Contact deleted successfully",
    }))
}

/// POST /api/subscribe
pub async fn subscribe<R>(
    State(state): State<ContactAppState<R>>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> ContactResult<(StatusCode, Json<MessageResponse>)>
where
    R: ContactRepository + SubscriberRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| ContactError::Validation(e.body_text()))?;

    SubscribeUseCase::new(state.repo.clone(), state.config.clone())
        .execute(&req.email)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            success: true,
            message: "Subscribed successfully",
        }),
    ))
}

/// GET /api/subscribe
pub async fn list_subscribers<R>(
    State(state): State<ContactAppState<R>>,
) -> ContactResult<Json<Vec<SubscriberResponse>>>
where
    R: ContactRepository + SubscriberRepository + Clone + Send + Sync + 'static,
{
    let subscribers = ListSubscribersUseCase::new(state.repo.clone(), state.config.clone())
        .execute()
        .await?;
    Ok(Json(
        subscribers
            .into_iter()
            .map(SubscriberResponse::from)
            .collect(),
    ))
}

/// DELETE /api/subscribe/{id}
pub async fn unsubscribe<R>(
    State(state): State<ContactAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> ContactResult<Json<MessageResponse>>
where
    R: ContactRepository + SubscriberRepository + Clone + Send + Sync + 'static,
{
    let id = SubscriberId::from_i64(path_id(path)?);
    UnsubscribeUseCase::new(state.repo.clone(), state.config.clone())
        .execute(id)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Subscriber deleted successfully",
    }))
}
