//! REST API handlers
//!
//! Read-only endpoints serving the cached announcements

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::Utc;
use serde_json::{Value, json};

use shared::StringMessage;
use crate::error::ServerResult;
use crate::server::ConferenceServer;
use crate::traits::{AnnouncementCache, AnnouncementSource, Datastore, Mailer};

/// Featured speaker announcement of a conference, empty when none is cached
pub async fn featured_speaker<D, C, M, A>(
    State(server): State<ConferenceServer<D, C, M, A>>,
    Path(websafe_key): Path<String>,
) -> ServerResult<Json<StringMessage>>
where
    D: Datastore + 'static,
    C: AnnouncementCache + 'static,
    M: Mailer + 'static,
    A: AnnouncementSource + 'static,
{
    let conference = server.datastore().resolve_conference(&websafe_key).await?;
    let cached = server.cache_writer().featured_speakers(&conference).await?;
    Ok(Json(StringMessage::from(cached)))
}

/// Process-wide announcement, empty when none is cached
pub async fn announcement<D, C, M, A>(
    State(server): State<ConferenceServer<D, C, M, A>>,
) -> ServerResult<Json<StringMessage>>
where
    D: Datastore + 'static,
    C: AnnouncementCache + 'static,
    M: Mailer + 'static,
    A: AnnouncementSource + 'static,
{
    let cached = server.cache_writer().global_announcement().await?;
    Ok(Json(StringMessage::from(cached)))
}

/// Health check endpoint
pub async fn health_check<D, C, M, A>(
    State(server): State<ConferenceServer<D, C, M, A>>,
) -> Json<Value>
where
    D: Datastore + 'static,
    C: AnnouncementCache + 'static,
    M: Mailer + 'static,
    A: AnnouncementSource + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptime": server.uptime_seconds(),
    }))
}
