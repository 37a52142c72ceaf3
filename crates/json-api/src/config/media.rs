//! Media Storage Config

use std::path::PathBuf;

use clap::Args;

/// Menu image storage settings.
#[derive(Debug, Args)]
pub struct MediaConfig {
    /// Directory menu item images are written to
    #[arg(long, env = "MEDIA_ROOT", default_value = "media")]
    pub media_root: PathBuf,

    /// Public base URL the media directory is served from
    #[arg(long, env = "MEDIA_BASE_URL")]
    pub media_base_url: String,
}
