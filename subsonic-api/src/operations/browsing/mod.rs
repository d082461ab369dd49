//! Browsing operations
//!
//! Music folders, genres, the file-structure and ID3 catalogue views,
//! individual songs, and artist/album metadata.

mod get_album;
mod get_album_info;
mod get_artist;
mod get_artist_info;
mod get_artists;
mod get_genres;
mod get_indexes;
mod get_music_directory;
mod get_music_folders;
mod get_similar_songs;
mod get_song;
mod get_top_songs;

pub use get_album::{GetAlbumOperation, GetAlbumRequest, GetAlbumResponse};
pub use get_album_info::{AlbumInfo, GetAlbumInfoOperation, GetAlbumInfoRequest, GetAlbumInfoResponse};
pub use get_artist::{GetArtistOperation, GetArtistRequest, GetArtistResponse};
pub use get_artist_info::{ArtistInfo, GetArtistInfoOperation, GetArtistInfoRequest, GetArtistInfoResponse};
pub use get_artists::{ArtistIndex, GetArtistsOperation, GetArtistsRequest, GetArtistsResponse};
pub use get_genres::{GetGenresOperation, GetGenresRequest, GetGenresResponse};
pub use get_indexes::{GetIndexesOperation, GetIndexesRequest, GetIndexesResponse, Index, IndexArtist, Shortcut};
pub use get_music_directory::{
    Directory, GetMusicDirectoryOperation, GetMusicDirectoryRequest, GetMusicDirectoryResponse,
};
pub use get_music_folders::{GetMusicFoldersOperation, GetMusicFoldersRequest, GetMusicFoldersResponse};
pub use get_similar_songs::{GetSimilarSongsOperation, GetSimilarSongsRequest, GetSimilarSongsResponse};
pub use get_song::{GetSongOperation, GetSongRequest, GetSongResponse};
pub use get_top_songs::{GetTopSongsOperation, GetTopSongsRequest, GetTopSongsResponse};
