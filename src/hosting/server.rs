use super::casino::{Casino, GameId};
use crate::dto::{ActionRequestDto, CreateGameRequest};
use crate::error::GameError;
use crate::gameplay::seat::SeatId;
use crate::session::ServerConfig;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use futures::StreamExt;
use serde::Deserialize;
use std::sync::Arc;

pub struct Server;

impl Server {
    pub async fn run(config: ServerConfig) -> std::io::Result<()> {
        let bind_address = config.bind_address.clone();
        let casino = web::Data::new(Arc::new(Casino::new((&config).into(), 0)));
        log::info!("starting hosting server on {bind_address}");
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(casino.clone())
                .route("/games", web::post().to(create_game))
                .route("/games/{game_id}", web::get().to(get_state))
                .route("/games/{game_id}/actions", web::post().to(apply_action))
                .route("/games/{game_id}/next-hand", web::post().to(next_hand))
                .route(
                    "/games/{game_id}/hands/{hand_number}",
                    web::get().to(hand_summary),
                )
                .route("/games/{game_id}/stream", web::get().to(stream))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}

#[derive(Debug, Deserialize)]
struct ViewerQuery {
    seat: Option<SeatId>,
}

fn error_response(error: GameError) -> HttpResponse {
    let view = crate::dto::ErrorView::from(&error);
    let status = match error {
        GameError::GameNotFound => actix_web::http::StatusCode::NOT_FOUND,
        GameError::NotYourTurn { .. }
        | GameError::InvalidAction { .. }
        | GameError::BadAmount { .. }
        | GameError::InsufficientFunds { .. } => actix_web::http::StatusCode::BAD_REQUEST,
        GameError::GameOver => actix_web::http::StatusCode::CONFLICT,
        GameError::InternalConsistency { .. } => {
            log::error!("internal consistency violation: {view:?}");
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    HttpResponse::build(status).json(view)
}

async fn create_game(
    casino: web::Data<Arc<Casino>>,
    body: web::Json<CreateGameRequest>,
) -> impl Responder {
    match casino.create_game(body.into_inner()) {
        Ok((id, state)) => {
            log::info!("created game {id}");
            HttpResponse::Ok().json(serde_json::json!({ "game_id": id, "state": state }))
        }
        Err(e) => error_response(e),
    }
}

async fn get_state(
    casino: web::Data<Arc<Casino>>,
    path: web::Path<GameId>,
    query: web::Query<ViewerQuery>,
) -> impl Responder {
    match casino.get_state(path.into_inner(), query.seat).await {
        Ok(state) => HttpResponse::Ok().json(state),
        Err(e) => error_response(e),
    }
}

async fn apply_action(
    casino: web::Data<Arc<Casino>>,
    path: web::Path<GameId>,
    query: web::Query<ViewerQuery>,
    body: web::Json<ActionRequestDto>,
) -> impl Responder {
    let seat = match query.seat {
        Some(s) => s,
        None => {
            return HttpResponse::BadRequest().body("missing seat query parameter");
        }
    };
    match casino
        .apply_action(path.into_inner(), seat, body.into_inner(), query.seat)
        .await
    {
        Ok(state) => HttpResponse::Ok().json(state),
        Err(e) => error_response(e),
    }
}

async fn next_hand(
    casino: web::Data<Arc<Casino>>,
    path: web::Path<GameId>,
    query: web::Query<ViewerQuery>,
) -> impl Responder {
    match casino.next_hand(path.into_inner(), query.seat).await {
        Ok(state) => HttpResponse::Ok().json(state),
        Err(e) => error_response(e),
    }
}

async fn hand_summary(
    casino: web::Data<Arc<Casino>>,
    path: web::Path<(GameId, u64)>,
) -> impl Responder {
    let (game_id, hand_number) = path.into_inner();
    match casino.get_hand_summary(game_id, hand_number).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => error_response(e),
    }
}

/// Opens a WebSocket that streams `state_update`/`game_over` events for one
/// game, outbound only — actions always arrive over the REST endpoint above,
/// mirroring how the reference server's socket only needs to push decisions
/// and state to a spectator once a human's turn is driven elsewhere.
async fn stream(
    casino: web::Data<Arc<Casino>>,
    path: web::Path<GameId>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    let game_id = path.into_inner();
    let mut receiver = match casino.subscribe(game_id) {
        Ok(rx) => rx,
        Err(e) => return error_response(e),
    };
    let (response, mut session, mut ws_stream) = match actix_ws::handle(&req, body) {
        Ok(parts) => parts,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };

    actix_web::rt::spawn(async move {
        loop {
            tokio::select! {
                event = receiver.recv() => {
                    match event {
                        Ok(text) => {
                            if session.text(text).await.is_err() {
                                break;
                            }
                        }
                        Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                        Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                    }
                }
                msg = ws_stream.next() => {
                    match msg {
                        Some(Ok(actix_ws::Message::Close(_))) | None => break,
                        Some(Ok(actix_ws::Message::Ping(bytes))) => {
                            if session.pong(&bytes).await.is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
        let _ = session.close(None).await;
    });

    response
}
