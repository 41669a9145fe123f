use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose binding logs while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn asset_base() -> &'static str {
    "/assets"  // Trunk serves the copied assets dir from the dev server root
}

#[cfg(not(debug_assertions))]
pub fn asset_base() -> &'static str {
    option_env!("YATU_ASSET_BASE").unwrap_or("/assets")
}

/// URL of a local image file under the asset base.
pub fn asset_url(file: &str) -> String {
    join_asset(asset_base(), file)
}

fn join_asset(base: &str, file: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), file.trim_start_matches('/'))
}

/// Delay before the hero intro plays, so the first paint lands in the hidden state.
pub const INTRO_DELAY_MS: u32 = 60;

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3943.256083328516!2d38.9418685!3d8.7619598!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x164b735b267d4763%3A0xe1cfb0446583a79!2sYatu%20International%20Hotel!5e0!3m2!1sen!2set!4v1763541254850!5m2!1sen!2set";

pub const DIRECTIONS_URL: &str = "https://www.google.com/maps/search/?api=1&query=Yatu+Hotel+Bishoftu";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_urls_join_with_single_slash() {
        assert_eq!(join_asset("/assets", "room1.jpeg"), "/assets/room1.jpeg");
        assert_eq!(join_asset("/assets/", "/room1.jpeg"), "/assets/room1.jpeg");
        assert_eq!(join_asset("https://cdn.example.com/yatu", "view1.jpg"), "https://cdn.example.com/yatu/view1.jpg");
    }

    #[test]
    fn debug_builds_serve_from_assets_dir() {
        if cfg!(debug_assertions) {
            assert_eq!(asset_url("yatuhome.jpg"), "/assets/yatuhome.jpg");
        }
    }
}
