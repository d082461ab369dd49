//! getNowPlaying operation

use crate::error::PayloadError;
use crate::model::Song;
use crate::response::normalize::{int_field, object_field, parse_list, parse_record, string_field};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getNowPlaying operation
pub struct GetNowPlayingOperation;

/// Request for getNowPlaying operation
#[derive(Debug, Clone, Copy, Default)]
pub struct GetNowPlayingRequest;

/// A song currently being played by some user
///
/// On the wire the song fields and the player fields share one object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NowPlayingEntry {
    pub username: String,
    pub minutes_ago: i64,
    pub player_id: i64,
    pub player_name: Option<String>,
    pub song: Song,
}

/// Response for getNowPlaying operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetNowPlayingResponse {
    pub envelope: Envelope,
    pub entries: Vec<NowPlayingEntry>,
}

impl SubsonicOperation for GetNowPlayingOperation {
    type Request = GetNowPlayingRequest;
    type Response = GetNowPlayingResponse;

    const ENDPOINT: &'static str = "getNowPlaying.view";

    fn build_params(_request: &Self::Request) -> RequestParams {
        RequestParams::new()
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let entries = match object_field(body, "nowPlaying") {
            Some(container) => parse_list(container, "entry", |entry| parse_entry(entry).map(Some))?,
            None => Vec::new(),
        };

        Ok(GetNowPlayingResponse {
            envelope: parse_envelope(body),
            entries,
        })
    }
}

fn parse_entry(entry: &JsonObject) -> Result<NowPlayingEntry, PayloadError> {
    Ok(NowPlayingEntry {
        username: string_field(entry, "username").unwrap_or_default(),
        minutes_ago: int_field(entry, "minutesAgo").unwrap_or(0),
        player_id: int_field(entry, "playerId").unwrap_or(0),
        player_name: string_field(entry, "playerName"),
        song: parse_record(entry)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_body;
    use serde_json::json;

    #[test]
    fn test_get_now_playing_response_parsing() {
        let body = test_body(json!({
            "status": "ok",
            "nowPlaying": {
                "entry": [
                    {
                        "id": "s-1",
                        "title": "Avril 14th",
                        "artist": "Aphex Twin",
                        "username": "alice",
                        "minutesAgo": 2,
                        "playerId": 5,
                        "playerName": "Kitchen"
                    },
                    {"id": "s-2", "title": "Xtal", "username": "bob", "minutesAgo": "0", "playerId": 6}
                ]
            }
        }));

        let response = GetNowPlayingOperation::parse_response(&body).unwrap();
        assert_eq!(response.entries.len(), 2);

        let first = &response.entries[0];
        assert_eq!(first.username, "alice");
        assert_eq!(first.minutes_ago, 2);
        assert_eq!(first.player_name.as_deref(), Some("Kitchen"));
        assert_eq!(first.song.title, "Avril 14th");
        assert_eq!(first.song.artist.as_deref(), Some("Aphex Twin"));

        assert_eq!(response.entries[1].minutes_ago, 0);
        assert_eq!(response.entries[1].player_name, None);
    }

    #[test]
    fn test_get_now_playing_nobody_listening() {
        let body = test_body(json!({"status": "ok", "nowPlaying": {}}));
        assert!(GetNowPlayingOperation::parse_response(&body).unwrap().entries.is_empty());
        assert!(GetNowPlayingOperation::build_params(&GetNowPlayingRequest).is_empty());
    }
}
