//! Video operations

mod get_video_info;
mod get_videos;

pub use get_video_info::{
    AudioTrack, Caption, Conversion, GetVideoInfoOperation, GetVideoInfoRequest, GetVideoInfoResponse, VideoInfo,
};
pub use get_videos::{GetVideosOperation, GetVideosRequest, GetVideosResponse};
