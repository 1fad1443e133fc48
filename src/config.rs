//! Static asset locations. Images, audio and fonts are served as-is from
//! the site root; nothing here is fetched over an API.

pub const BGM_SRC: &str = "/assets/audio/ambient-loop.mp3";
pub const HOVER_BLIP_SRC: &str = "/assets/audio/blip.mp3";

pub fn asset(path: &str) -> String {
    format!("/assets/{}", path)
}
