use std::sync::Arc;

use serde::Deserialize;
use timer_persistence::repositories::{
    NewSolve, NewUser, SolveChanges, SolveRepository, UserRepository,
};
use timer_persistence::{StoreError, parse_id};
use uuid::Uuid;
use warp::Reply;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::Response;

use crate::error::ApiError;
use crate::validation::{into_request, parse_object, require_fields, require_matching_id};

const SOLVE_REQUIRED_FIELDS: &[&str] = &["time", "notes", "scrambleAlg"];
const USER_REQUIRED_FIELDS: &[&str] = &["firstName", "lastName", "email", "userName"];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSolveRequest {
    time: f64,
    notes: Option<String>,
    scramble_alg: String,
    solver_id: Option<Uuid>,
}

#[derive(Deserialize)]
struct UpdateSolveRequest {
    notes: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserRequest {
    first_name: String,
    last_name: String,
    email: String,
    user_name: String,
}

/// Logs the store failure with full detail before it is reduced to a status code.
fn store_failure(context: &'static str) -> impl FnOnce(StoreError) -> ApiError {
    move |err| {
        tracing::error!("{}: {}", context, err);
        ApiError::Store(err)
    }
}

fn json_reply<T: serde::Serialize>(body: &T, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

fn no_content() -> Response {
    warp::reply::with_status(warp::reply(), StatusCode::NO_CONTENT).into_response()
}

pub async fn handle_list_solves(
    solve_repository: Arc<SolveRepository>,
) -> Result<Response, warp::Rejection> {
    Ok(list_solves(&solve_repository)
        .await
        .unwrap_or_else(ApiError::into_response))
}

async fn list_solves(solve_repository: &SolveRepository) -> Result<Response, ApiError> {
    let solves = solve_repository
        .find_all()
        .await
        .map_err(store_failure("Failed to fetch solves"))?;

    let serialized: Vec<_> = solves.iter().map(|solve| solve.serialize()).collect();
    Ok(json_reply(&serialized, StatusCode::OK))
}

pub async fn handle_get_solve(
    id: String,
    solve_repository: Arc<SolveRepository>,
) -> Result<Response, warp::Rejection> {
    Ok(get_solve(&id, &solve_repository)
        .await
        .unwrap_or_else(ApiError::into_response))
}

async fn get_solve(id: &str, solve_repository: &SolveRepository) -> Result<Response, ApiError> {
    let id = parse_id(id).map_err(store_failure("Failed to fetch solve"))?;
    let solve = solve_repository
        .find_by_id(id)
        .await
        .map_err(store_failure("Failed to fetch solve"))?;

    Ok(json_reply(&solve.serialize(), StatusCode::OK))
}

pub async fn handle_create_solve(
    body: Bytes,
    solve_repository: Arc<SolveRepository>,
) -> Result<Response, warp::Rejection> {
    Ok(create_solve(&body, &solve_repository)
        .await
        .unwrap_or_else(ApiError::into_response))
}

async fn create_solve(
    body: &[u8],
    solve_repository: &SolveRepository,
) -> Result<Response, ApiError> {
    let body = parse_object(body)?;
    require_fields(&body, SOLVE_REQUIRED_FIELDS)?;
    let request: CreateSolveRequest = into_request(body)?;

    let solve = solve_repository
        .create(NewSolve {
            time: request.time,
            notes: request.notes,
            scramble_alg: request.scramble_alg,
            solver_id: request.solver_id,
        })
        .await
        .map_err(store_failure("Failed to create solve"))?;

    tracing::info!("Recorded solve {} ({}s)", solve.id, solve.time);
    Ok(json_reply(&solve.serialize(), StatusCode::CREATED))
}

pub async fn handle_update_solve(
    id: String,
    body: Bytes,
    solve_repository: Arc<SolveRepository>,
) -> Result<Response, warp::Rejection> {
    Ok(update_solve(&id, &body, &solve_repository)
        .await
        .unwrap_or_else(ApiError::into_response))
}

async fn update_solve(
    id: &str,
    body: &[u8],
    solve_repository: &SolveRepository,
) -> Result<Response, ApiError> {
    let body = parse_object(body)?;
    require_matching_id(&body, id)?;
    let request: UpdateSolveRequest = into_request(body)?;

    let id = parse_id(id).map_err(store_failure("Failed to update solve"))?;
    solve_repository
        .update_by_id(
            id,
            SolveChanges {
                notes: request.notes,
            },
        )
        .await
        .map_err(store_failure("Failed to update solve"))?;

    Ok(no_content())
}

pub async fn handle_delete_solve(
    id: String,
    solve_repository: Arc<SolveRepository>,
) -> Result<Response, warp::Rejection> {
    Ok(delete_solve(&id, &solve_repository)
        .await
        .unwrap_or_else(ApiError::into_response))
}

async fn delete_solve(id: &str, solve_repository: &SolveRepository) -> Result<Response, ApiError> {
    let id = parse_id(id).map_err(store_failure("Failed to delete solve"))?;
    solve_repository
        .delete_by_id(id)
        .await
        .map_err(store_failure("Failed to delete solve"))?;

    Ok(no_content())
}

pub async fn handle_create_user(
    body: Bytes,
    user_repository: Arc<UserRepository>,
) -> Result<Response, warp::Rejection> {
    Ok(create_user(&body, &user_repository)
        .await
        .unwrap_or_else(ApiError::into_response))
}

async fn create_user(body: &[u8], user_repository: &UserRepository) -> Result<Response, ApiError> {
    let body = parse_object(body)?;
    require_fields(&body, USER_REQUIRED_FIELDS)?;
    let request: CreateUserRequest = into_request(body)?;

    let user = user_repository
        .create(NewUser {
            first_name: request.first_name,
            last_name: request.last_name,
            user_name: request.user_name,
            email: request.email,
        })
        .await
        .map_err(store_failure("Failed to create user"))?;

    Ok(json_reply(&user.serialize(), StatusCode::OK))
}
