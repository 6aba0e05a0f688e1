use super::*;
use chrono::{Duration, Local, Utc};

// =============================================================
// same-day detection
// =============================================================

#[test]
fn a_request_stored_just_now_counts_as_today() {
    let ahora = Local::now();
    assert!(solicitada_hoy(&ahora.to_rfc3339(), ahora.date_naive()));
}

#[test]
fn utc_timestamps_are_compared_on_the_local_calendar() {
    // The form stores UTC; the advisory must still fire for it.
    let ahora = Utc::now();
    let hoy = ahora.with_timezone(&Local).date_naive();
    assert!(solicitada_hoy(&ahora.to_rfc3339(), hoy));
}

#[test]
fn yesterday_does_not_count() {
    let ahora = Local::now();
    let ayer = ahora - Duration::days(1);
    assert!(!solicitada_hoy(&ayer.to_rfc3339(), ahora.date_naive()));
}

#[test]
fn tomorrow_does_not_count() {
    let ahora = Local::now();
    let manana = ahora + Duration::days(1);
    assert!(!solicitada_hoy(&manana.to_rfc3339(), ahora.date_naive()));
}

#[test]
fn the_same_instant_agrees_across_offsets() {
    let ahora = Local::now();
    let hoy = ahora.date_naive();
    let en_utc = ahora.with_timezone(&Utc).to_rfc3339();
    assert!(solicitada_hoy(&ahora.to_rfc3339(), hoy));
    assert!(solicitada_hoy(&en_utc, hoy));
}

// =============================================================
// unparseable values
// =============================================================

#[test]
fn garbage_is_treated_as_no_previous_request() {
    let hoy = Local::now().date_naive();
    assert!(!solicitada_hoy("", hoy));
    assert!(!solicitada_hoy("ayer", hoy));
    assert!(!solicitada_hoy("1724600000", hoy));
}

#[test]
fn date_only_strings_are_ignored() {
    let hoy = Local::now().date_naive();
    assert!(!solicitada_hoy(&hoy.to_string(), hoy));
}
