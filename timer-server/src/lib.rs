use std::path::PathBuf;
use std::sync::Arc;
use warp::Filter;

use timer_persistence::repositories::{SolveRepository, UserRepository};

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod validation;

pub fn create_routes(
    solve_repository: Arc<SolveRepository>,
    user_repository: Arc<UserRepository>,
    static_dir: PathBuf,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // Clone for filters
    let solve_repository_filter = warp::any().map({
        let solve_repository = solve_repository.clone();
        move || solve_repository.clone()
    });

    let user_repository_filter = warp::any().map({
        let user_repository = user_repository.clone();
        move || user_repository.clone()
    });

    // Static pages
    let index = warp::path::end()
        .and(warp::get())
        .and(warp::fs::file(static_dir.join("login.html")));

    let timer = warp::path!("timer")
        .and(warp::get())
        .and(warp::fs::file(static_dir.join("timer.html")));

    let assets = warp::get().and(warp::fs::dir(static_dir));

    // Health check endpoint
    let health = warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", warp::http::StatusCode::OK));

    // Solve endpoints
    let list_solves = warp::path!("solves")
        .and(warp::get())
        .and(solve_repository_filter.clone())
        .and_then(handlers::handle_list_solves);

    let get_solve = warp::path!("solves" / String)
        .and(warp::get())
        .and(solve_repository_filter.clone())
        .and_then(handlers::handle_get_solve);

    let create_solve = warp::path!("solves")
        .and(warp::post())
        .and(warp::body::bytes())
        .and(solve_repository_filter.clone())
        .and_then(handlers::handle_create_solve);

    let update_solve = warp::path!("solves" / String)
        .and(warp::put())
        .and(warp::body::bytes())
        .and(solve_repository_filter.clone())
        .and_then(handlers::handle_update_solve);

    let delete_solve = warp::path!("solves" / String)
        .and(warp::delete())
        .and(solve_repository_filter.clone())
        .and_then(handlers::handle_delete_solve);

    // User endpoints
    let create_user = warp::path!("users")
        .and(warp::post())
        .and(warp::body::bytes())
        .and(user_repository_filter.clone())
        .and_then(handlers::handle_create_user);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE"]);

    index
        .or(timer)
        .or(health)
        .or(list_solves)
        .or(get_solve)
        .or(create_solve)
        .or(update_solve)
        .or(delete_solve)
        .or(create_user)
        .or(assets)
        .with(cors)
        .with(warp::log("cube_timer"))
}
