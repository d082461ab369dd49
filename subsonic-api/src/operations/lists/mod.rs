//! List operations
//!
//! Album lists, random songs, songs by genre, now playing and starred items.

mod get_album_list;
mod get_now_playing;
mod get_random_songs;
mod get_songs_by_genre;
mod get_starred;

pub use get_album_list::{AlbumListType, GetAlbumListOperation, GetAlbumListRequest, GetAlbumListResponse};
pub use get_now_playing::{GetNowPlayingOperation, GetNowPlayingRequest, GetNowPlayingResponse, NowPlayingEntry};
pub use get_random_songs::{GetRandomSongsOperation, GetRandomSongsRequest, GetRandomSongsResponse};
pub use get_songs_by_genre::{GetSongsByGenreOperation, GetSongsByGenreRequest, GetSongsByGenreResponse};
pub use get_starred::{GetStarredOperation, GetStarredRequest, GetStarredResponse};
