//! Records shared by several endpoints
//!
//! Records that arrive as plain JSON objects derive `Deserialize` and are
//! tolerant of the usual server quirks: numeric identifiers, floats where an
//! integer is expected, and list fields sent as a bare element. A scalar of
//! the wrong type (`"isDir": null`, `"trackGain": "-6.2"`) is coerced or
//! dropped; it never fails the record.

use serde::Deserialize;

use crate::response::normalize::{
    lenient_bool, lenient_opt_f64, lenient_opt_int, lenient_opt_record, lenient_opt_string, lenient_string, one_or_many,
};

/// A song or other media file (`child` in protocol terms)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Song {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub parent: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_dir: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub album: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub album_id: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub artist: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub artist_id: Option<String>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub track: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub disc_number: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub year: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub genre: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub cover_art: Option<String>,
    /// Duration in seconds
    #[serde(deserialize_with = "lenient_opt_int")]
    pub duration: Option<i64>,
    /// Size in bytes
    #[serde(deserialize_with = "lenient_opt_int")]
    pub size: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub bit_rate: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub bit_depth: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub sampling_rate: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub channel_count: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub suffix: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub content_type: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub transcoded_suffix: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub transcoded_content_type: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub path: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_video: bool,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub play_count: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub played: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub created: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub starred: Option<String>,
    /// `type` on the wire: "music", "podcast", "audiobook" or "video"
    #[serde(rename = "type", deserialize_with = "lenient_opt_string")]
    pub item_type: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub media_type: Option<String>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub bpm: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub comment: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub sort_name: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub music_brainz_id: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub isrc: Vec<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub explicit_status: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub display_artist: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub display_album_artist: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub display_composer: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub artists: Vec<ArtistRef>,
    #[serde(deserialize_with = "one_or_many")]
    pub album_artists: Vec<ArtistRef>,
    #[serde(deserialize_with = "one_or_many")]
    pub genres: Vec<GenreRef>,
    #[serde(deserialize_with = "one_or_many")]
    pub moods: Vec<String>,
    #[serde(deserialize_with = "lenient_opt_record")]
    pub replay_gain: Option<ReplayGain>,
}

/// Artist reference embedded in a song
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtistRef {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
}

/// Genre reference embedded in a song
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenreRef {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
}

/// ReplayGain metadata, in dB (gain) and linear scale (peak)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplayGain {
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub track_gain: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub album_gain: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub track_peak: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub album_peak: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub base_gain: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub fallback_gain: Option<f64>,
}

/// An album as listed by ID3 browsing endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Album {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub artist: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub artist_id: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub cover_art: Option<String>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub song_count: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub duration: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub play_count: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub created: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub played: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub starred: Option<String>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub year: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub genre: Option<String>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub user_rating: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub music_brainz_id: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_compilation: bool,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub sort_name: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub display_artist: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub explicit_status: Option<String>,
}

/// An artist as listed by ID3 browsing endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Artist {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub album_count: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub starred: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub cover_art: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub artist_image_url: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub music_brainz_id: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub sort_name: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub roles: Vec<String>,
}

/// A top-level music folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MusicFolder {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
}

/// A genre with usage counts
///
/// Servers put the genre name in `value`; some use `name` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Genre {
    pub value: String,
    pub song_count: i64,
    pub album_count: i64,
}

/// A playlist, with its entries when fetched individually
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub comment: Option<String>,
    pub owner: Option<String>,
    pub public: bool,
    pub song_count: i64,
    /// Total duration in seconds
    pub duration: i64,
    pub created: Option<String>,
    pub changed: Option<String>,
    pub cover_art: Option<String>,
    /// Users allowed to edit the playlist (`allowedUser` on the wire)
    pub allowed_users: Vec<String>,
    /// Songs in playlist order (`entry` on the wire)
    pub entries: Vec<Song>,
}

/// Server license state
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct License {
    #[serde(deserialize_with = "lenient_bool")]
    pub valid: bool,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub license_expires: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub trial_expires: Option<String>,
}
