//! Site-wide constants: storage keys, scroll thresholds and the simulated
//! submission delay.

/// localStorage key for the chosen theme ("light" / "dark").
pub const THEME_KEY: &str = "vetbq_theme";

/// localStorage key holding the RFC 3339 instant of the last appointment
/// request.
pub const CITA_KEY: &str = "vetbq_ultima_cita";

/// Simulated server round-trip for the appointment form, in milliseconds.
pub const SUBMIT_DELAY_MS: u32 = 900;

/// The back-to-top button appears once the page is scrolled past this.
pub const BACK_TO_TOP_OFFSET_PX: f64 = 400.0;

/// A section has to be at least half visible to take the nav highlight.
pub const SECTION_THRESHOLD: f64 = 0.5;

/// Reveal animations fire once a fifth of the element is visible.
pub const REVEAL_THRESHOLD: f64 = 0.2;
