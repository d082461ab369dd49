//! Subsonic API operations organized by endpoint group
//!
//! Each operation implements [`SubsonicOperation`](crate::SubsonicOperation):
//! an endpoint name, a typed request that renders to query parameters, and a
//! payload extractor for the envelope body. Every response carries the
//! [`Envelope`](crate::Envelope) metadata alongside its payload.

pub mod browsing;
pub mod lists;
pub mod playlists;
pub mod search;
pub mod system;
pub mod video;

// Re-export commonly used operations
pub use browsing::{
    GetAlbumInfoOperation, GetAlbumOperation, GetArtistInfoOperation, GetArtistOperation, GetArtistsOperation,
    GetGenresOperation, GetIndexesOperation, GetMusicDirectoryOperation, GetMusicFoldersOperation,
    GetSimilarSongsOperation, GetSongOperation, GetTopSongsOperation,
};
pub use lists::{
    GetAlbumListOperation, GetNowPlayingOperation, GetRandomSongsOperation, GetSongsByGenreOperation,
    GetStarredOperation,
};
pub use playlists::{
    CreatePlaylistOperation, DeletePlaylistOperation, GetPlaylistOperation, GetPlaylistsOperation,
    UpdatePlaylistOperation,
};
pub use search::SearchOperation;
pub use system::{GetLicenseOperation, PingOperation};
pub use video::{GetVideoInfoOperation, GetVideosOperation};

#[cfg(test)]
pub(crate) fn test_body(value: serde_json::Value) -> crate::response::JsonObject {
    match value {
        serde_json::Value::Object(body) => body,
        other => panic!("test body must be an object, got {other}"),
    }
}
