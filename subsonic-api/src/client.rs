use rest_client::RestClient;

use crate::config::ClientConfig;
use crate::error::Outcome;
use crate::executor::RequestExecutor;
use crate::model::{Album, Genre, License, MusicFolder, Playlist, Song};
use crate::operation::SubsonicOperation;
use crate::operations::browsing::{
    AlbumInfo, ArtistInfo, Directory, GetAlbumInfoRequest, GetAlbumRequest, GetAlbumResponse, GetArtistInfoRequest,
    GetArtistRequest, GetArtistResponse, GetArtistsRequest, GetArtistsResponse, GetGenresRequest, GetIndexesRequest,
    GetIndexesResponse, GetMusicDirectoryRequest, GetMusicFoldersRequest, GetSimilarSongsRequest, GetSongRequest,
    GetTopSongsRequest,
};
use crate::operations::lists::{
    GetAlbumListRequest, GetNowPlayingRequest, GetRandomSongsRequest, GetSongsByGenreRequest, GetStarredRequest,
    GetStarredResponse, NowPlayingEntry,
};
use crate::operations::playlists::{
    CreatePlaylistRequest, CreatePlaylistResponse, DeletePlaylistRequest, GetPlaylistRequest, GetPlaylistsRequest,
    UpdatePlaylistRequest,
};
use crate::operations::search::{SearchRequest, SearchResponse};
use crate::operations::system::{GetLicenseRequest, PingRequest};
use crate::operations::video::{GetVideoInfoRequest, GetVideosRequest, VideoInfo};
use crate::operations::{
    CreatePlaylistOperation, DeletePlaylistOperation, GetAlbumInfoOperation, GetAlbumListOperation,
    GetAlbumOperation, GetArtistInfoOperation, GetArtistOperation, GetArtistsOperation, GetGenresOperation,
    GetIndexesOperation, GetLicenseOperation, GetMusicDirectoryOperation, GetMusicFoldersOperation,
    GetNowPlayingOperation, GetPlaylistOperation, GetPlaylistsOperation, GetRandomSongsOperation,
    GetSimilarSongsOperation, GetSongOperation, GetSongsByGenreOperation, GetStarredOperation,
    GetTopSongsOperation, GetVideoInfoOperation, GetVideosOperation, PingOperation, SearchOperation,
    UpdatePlaylistOperation,
};
use crate::response::Envelope;
use crate::transport::Transport;
use crate::url::UrlBuilder;

/// A client for a Subsonic-compatible music server
///
/// Every method returns an [`Outcome`]: the typed payload, or an
/// [`ApiError`](crate::ApiError) describing which stage failed. Nothing is
/// retried or cached.
///
/// The client is `Send + Sync` and may be shared across threads (for example
/// behind an `Arc`). Credentials can be replaced at any time with
/// [`set_credentials`](Self::set_credentials).
///
/// # Example
/// ```rust,no_run
/// use subsonic_api::SubsonicClient;
///
/// let client = SubsonicClient::new("https://music.example.com");
/// client.set_credentials("alice", "sesame");
///
/// match client.ping() {
///     Ok(envelope) => println!("server speaks API {}", envelope.api_version),
///     Err(e) if e.is_authentication_failure() => eprintln!("bad credentials"),
///     Err(e) => eprintln!("ping failed: {}", e),
/// }
/// ```
#[derive(Debug)]
pub struct SubsonicClient<T: Transport = RestClient> {
    executor: RequestExecutor<T>,
}

impl SubsonicClient<RestClient> {
    /// Create a client for `base_url` with default configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Create a client backed by a [`RestClient`] using the configured timeouts
    pub fn with_config(config: ClientConfig) -> Self {
        let transport = RestClient::with_timeouts(config.connect_timeout, config.read_timeout);
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> SubsonicClient<T> {
    /// Create a client with a custom transport (for tests or alternative HTTP stacks)
    ///
    /// The timeouts in `config` are ignored; the transport owns its own.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let url_builder = UrlBuilder::new(&config.base_url, config.client_name, config.api_version);
        Self {
            executor: RequestExecutor::new(url_builder, transport),
        }
    }

    /// Replace the credentials used to sign subsequent requests
    pub fn set_credentials(&self, username: &str, password: &str) {
        self.executor.url_builder().set_credentials(username, password);
    }

    pub fn has_credentials(&self) -> bool {
        self.executor.url_builder().has_credentials()
    }

    /// Normalized server base URL
    pub fn base_url(&self) -> &str {
        self.executor.url_builder().base_url()
    }

    /// Execute any [`SubsonicOperation`]
    ///
    /// The typed convenience methods below are thin wrappers around this.
    pub fn execute<Op: SubsonicOperation>(&self, request: &Op::Request) -> Outcome<Op::Response> {
        self.executor.execute_operation::<Op>(request)
    }

    // System

    /// Test connectivity and credentials
    pub fn ping(&self) -> Outcome<Envelope> {
        self.execute::<PingOperation>(&PingRequest).map(|r| r.envelope)
    }

    pub fn get_license(&self) -> Outcome<License> {
        self.execute::<GetLicenseOperation>(&GetLicenseRequest).map(|r| r.license)
    }

    // Browsing

    pub fn get_music_folders(&self) -> Outcome<Vec<MusicFolder>> {
        self.execute::<GetMusicFoldersOperation>(&GetMusicFoldersRequest)
            .map(|r| r.music_folders)
    }

    pub fn get_genres(&self) -> Outcome<Vec<Genre>> {
        self.execute::<GetGenresOperation>(&GetGenresRequest).map(|r| r.genres)
    }

    /// Artist index of the file-structure view
    pub fn get_indexes(&self, request: &GetIndexesRequest) -> Outcome<GetIndexesResponse> {
        self.execute::<GetIndexesOperation>(request)
    }

    pub fn get_music_directory(&self, id: &str) -> Outcome<Directory> {
        let request = GetMusicDirectoryRequest { id: id.to_string() };
        self.execute::<GetMusicDirectoryOperation>(&request).map(|r| r.directory)
    }

    /// Artist index of the ID3 view, optionally limited to one music folder
    pub fn get_artists(&self, music_folder_id: Option<&str>) -> Outcome<GetArtistsResponse> {
        let request = GetArtistsRequest {
            music_folder_id: music_folder_id.map(str::to_string),
        };
        self.execute::<GetArtistsOperation>(&request)
    }

    /// An artist with its albums
    pub fn get_artist(&self, id: &str) -> Outcome<GetArtistResponse> {
        let request = GetArtistRequest { id: id.to_string() };
        self.execute::<GetArtistOperation>(&request)
    }

    /// An album with its songs
    pub fn get_album(&self, id: &str) -> Outcome<GetAlbumResponse> {
        let request = GetAlbumRequest { id: id.to_string() };
        self.execute::<GetAlbumOperation>(&request)
    }

    pub fn get_song(&self, id: &str) -> Outcome<Song> {
        let request = GetSongRequest { id: id.to_string() };
        self.execute::<GetSongOperation>(&request).map(|r| r.song)
    }

    pub fn get_artist_info(&self, id: &str) -> Outcome<ArtistInfo> {
        let request = GetArtistInfoRequest { id: id.to_string() };
        self.execute::<GetArtistInfoOperation>(&request).map(|r| r.artist_info)
    }

    pub fn get_album_info(&self, id: &str) -> Outcome<AlbumInfo> {
        let request = GetAlbumInfoRequest { id: id.to_string() };
        self.execute::<GetAlbumInfoOperation>(&request).map(|r| r.album_info)
    }

    /// Songs similar to an artist, album or song
    pub fn get_similar_songs(&self, id: &str, count: Option<u32>) -> Outcome<Vec<Song>> {
        let request = GetSimilarSongsRequest {
            id: id.to_string(),
            count,
        };
        self.execute::<GetSimilarSongsOperation>(&request).map(|r| r.songs)
    }

    /// Most played songs for an artist, looked up by name
    pub fn get_top_songs(&self, artist: &str, count: Option<u32>) -> Outcome<Vec<Song>> {
        let request = GetTopSongsRequest {
            artist: artist.to_string(),
            count,
        };
        self.execute::<GetTopSongsOperation>(&request).map(|r| r.songs)
    }

    // Lists

    pub fn get_album_list(&self, request: &GetAlbumListRequest) -> Outcome<Vec<Album>> {
        self.execute::<GetAlbumListOperation>(request).map(|r| r.albums)
    }

    /// Random songs matching the optional filters in `request`
    pub fn get_random_songs(&self, request: &GetRandomSongsRequest) -> Outcome<Vec<Song>> {
        self.execute::<GetRandomSongsOperation>(request).map(|r| r.songs)
    }

    pub fn get_songs_by_genre(&self, request: &GetSongsByGenreRequest) -> Outcome<Vec<Song>> {
        self.execute::<GetSongsByGenreOperation>(request).map(|r| r.songs)
    }

    /// What every user is listening to right now
    pub fn get_now_playing(&self) -> Outcome<Vec<NowPlayingEntry>> {
        self.execute::<GetNowPlayingOperation>(&GetNowPlayingRequest).map(|r| r.entries)
    }

    /// Starred artists, albums and songs, optionally limited to one music folder
    pub fn get_starred(&self, music_folder_id: Option<&str>) -> Outcome<GetStarredResponse> {
        let request = GetStarredRequest {
            music_folder_id: music_folder_id.map(str::to_string),
        };
        self.execute::<GetStarredOperation>(&request)
    }

    // Searching

    /// Artists, albums and songs matching `request.query`
    pub fn search(&self, request: &SearchRequest) -> Outcome<SearchResponse> {
        self.execute::<SearchOperation>(request)
    }

    // Playlists

    /// Playlists visible to the current user, or to `username` (admin only)
    pub fn get_playlists(&self, username: Option<&str>) -> Outcome<Vec<Playlist>> {
        let request = GetPlaylistsRequest {
            username: username.map(str::to_string),
        };
        self.execute::<GetPlaylistsOperation>(&request).map(|r| r.playlists)
    }

    /// A single playlist with its entries
    pub fn get_playlist(&self, id: &str) -> Outcome<Playlist> {
        let request = GetPlaylistRequest { id: id.to_string() };
        self.execute::<GetPlaylistOperation>(&request).map(|r| r.playlist)
    }

    pub fn create_playlist(&self, request: &CreatePlaylistRequest) -> Outcome<CreatePlaylistResponse> {
        self.execute::<CreatePlaylistOperation>(request)
    }

    pub fn update_playlist(&self, request: &UpdatePlaylistRequest) -> Outcome<Envelope> {
        self.execute::<UpdatePlaylistOperation>(request).map(|r| r.envelope)
    }

    pub fn delete_playlist(&self, id: &str) -> Outcome<Envelope> {
        let request = DeletePlaylistRequest { id: id.to_string() };
        self.execute::<DeletePlaylistOperation>(&request).map(|r| r.envelope)
    }

    // Video

    pub fn get_videos(&self) -> Outcome<Vec<Song>> {
        self.execute::<GetVideosOperation>(&GetVideosRequest).map(|r| r.videos)
    }

    pub fn get_video_info(&self, id: &str) -> Outcome<VideoInfo> {
        let request = GetVideoInfoRequest { id: id.to_string() };
        self.execute::<GetVideoInfoOperation>(&request).map(|r| r.video_info)
    }
}
