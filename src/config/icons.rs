//! config/icons.rs Currency icon sources.

pub struct IconConfig {
    /// Remote icon location; the currency code and `.svg` are appended
    pub remote_base_url: &'static str,
    /// Bundled placeholder, used once a remote icon fails to load
    pub fallback_uri: &'static str,
    pub fallback_bytes: &'static [u8],
    /// Edge length of the rendered icon (points)
    pub size: f32,
}

pub const ICONS: IconConfig = IconConfig {
    remote_base_url: "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/",
    fallback_uri: "bytes://404.svg",
    fallback_bytes: include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/404.svg")),
    size: 28.0,
};

pub fn remote_icon_url(code: &str) -> String {
    format!("{}{}.svg", ICONS.remote_base_url, code)
}
