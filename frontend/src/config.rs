#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production: served from the same origin as the API
}

/// Give up on a contact submission after this long and tell the visitor.
pub const SUBMIT_TIMEOUT_MS: u32 = 10_000;

/// How long a toast stays on screen.
pub const NOTICE_MS: u32 = 5_000;

/// Fraction of a section that must be on screen before it animates in.
pub const ENTRANCE_THRESHOLD: f64 = 0.2;
