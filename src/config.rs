/// Where the contact form is POSTed. The static host picks up any form
/// submission addressed to the site root that carries a `form-name` field.
#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    "http://localhost:8888/"  // netlify dev when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    "/"  // Production URL
}

pub const CONTACT_FORM_NAME: &str = "contact";
pub const HONEYPOT_FIELD: &str = "bot-field";

pub const PALETTE_STORAGE_KEY: &str = "customTheme";
pub const MODE_STORAGE_KEY: &str = "theme";

/// Skeletons are shown this long before the sections render.
pub const LOADING_DELAY_MS: u32 = 1_000;
pub const TOAST_LIFETIME_MS: u32 = 4_000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_DURATION_SECS: f64 = 0.6;
pub const REVEAL_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

/// Header switches to its compact style past this many pixels of scroll.
pub const HEADER_COMPACT_AFTER_PX: f64 = 10.0;
