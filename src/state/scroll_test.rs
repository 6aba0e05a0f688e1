use super::*;

// =============================================================
// ActiveSection
// =============================================================

#[test]
fn starts_with_no_current_section() {
    assert_eq!(ActiveSection::new().current(), None);
}

#[test]
fn an_intersecting_entry_becomes_current() {
    let mut secciones = ActiveSection::new();
    let actual = secciones.observe("servicios", true);
    assert_eq!(actual.as_deref(), Some("servicios"));
    assert_eq!(secciones.current(), Some("servicios"));
}

#[test]
fn the_last_intersecting_entry_of_a_batch_wins() {
    let mut secciones = ActiveSection::new();
    secciones.observe("servicios", true);
    secciones.observe("promos", true);
    assert_eq!(secciones.current(), Some("promos"));
}

#[test]
fn leaving_entries_never_clear_the_highlight() {
    let mut secciones = ActiveSection::new();
    secciones.observe("citas", true);
    let resultado = secciones.observe("citas", false);
    assert_eq!(resultado, None);
    assert_eq!(secciones.current(), Some("citas"));
}

#[test]
fn a_non_intersecting_entry_reports_nothing() {
    let mut secciones = ActiveSection::new();
    assert_eq!(secciones.observe("faq", false), None);
    assert_eq!(secciones.current(), None);
}

#[test]
fn repeated_intersections_keep_reporting_the_section() {
    let mut secciones = ActiveSection::new();
    assert_eq!(secciones.observe("top", true).as_deref(), Some("top"));
    assert_eq!(secciones.observe("top", true).as_deref(), Some("top"));
}

// =============================================================
// RevealSet
// =============================================================

#[test]
fn the_first_mark_reveals() {
    let mut revelados = RevealSet::new();
    assert!(revelados.mark(0));
}

#[test]
fn later_marks_of_the_same_element_are_ignored() {
    let mut revelados = RevealSet::new();
    revelados.mark(3);
    assert!(!revelados.mark(3));
    assert!(!revelados.mark(3));
}

#[test]
fn marks_are_tracked_per_element() {
    let mut revelados = RevealSet::new();
    assert!(revelados.mark(0));
    assert!(revelados.mark(1));
    assert!(!revelados.mark(0));
    assert!(revelados.mark(2));
}

// =============================================================
// back_to_top_visible
// =============================================================

#[test]
fn hidden_at_the_top_of_the_page() {
    assert!(!back_to_top_visible(0.0));
}

#[test]
fn hidden_at_exactly_the_offset() {
    assert!(!back_to_top_visible(400.0));
}

#[test]
fn visible_just_past_the_offset() {
    assert!(back_to_top_visible(400.5));
    assert!(back_to_top_visible(2000.0));
}
