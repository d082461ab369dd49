//! Playlist operations
//!
//! Listing, fetching, creating, updating and deleting playlists.

mod create_playlist;
mod delete_playlist;
mod get_playlist;
mod get_playlists;
mod update_playlist;

pub use create_playlist::{CreatePlaylistOperation, CreatePlaylistRequest, CreatePlaylistResponse};
pub use delete_playlist::{DeletePlaylistOperation, DeletePlaylistRequest, DeletePlaylistResponse};
pub use get_playlist::{GetPlaylistOperation, GetPlaylistRequest, GetPlaylistResponse};
pub use get_playlists::{GetPlaylistsOperation, GetPlaylistsRequest, GetPlaylistsResponse};
pub use update_playlist::{UpdatePlaylistOperation, UpdatePlaylistRequest, UpdatePlaylistResponse};

use crate::error::PayloadError;
use crate::model::Playlist;
use crate::response::normalize::{bool_field, int_field, parse_list, parse_record, parse_string_list, string_field};
use crate::response::JsonObject;

/// Parse a playlist record, including its `entry` songs when present
pub(crate) fn parse_playlist(playlist: &JsonObject) -> Result<Playlist, PayloadError> {
    Ok(Playlist {
        id: string_field(playlist, "id").unwrap_or_default(),
        name: string_field(playlist, "name").unwrap_or_default(),
        comment: string_field(playlist, "comment"),
        owner: string_field(playlist, "owner"),
        public: bool_field(playlist, "public").unwrap_or(false),
        song_count: int_field(playlist, "songCount").unwrap_or(0),
        duration: int_field(playlist, "duration").unwrap_or(0),
        created: string_field(playlist, "created"),
        changed: string_field(playlist, "changed"),
        cover_art: string_field(playlist, "coverArt"),
        allowed_users: parse_string_list(playlist, "allowedUser")?,
        entries: parse_list(playlist, "entry", |entry| parse_record(entry).map(Some))?,
    })
}
