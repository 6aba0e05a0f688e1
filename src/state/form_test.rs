use super::*;

fn solicitud_valida() -> SolicitudCita {
    SolicitudCita {
        nombre: "Laura Gómez".to_string(),
        mascota: "Rocky".to_string(),
        telefono: "300 123 4567".to_string(),
        motivo: "vacunacion".to_string(),
        mensaje: String::new(),
    }
}

// =============================================================
// validar: happy path and independence
// =============================================================

#[test]
fn complete_request_is_valid() {
    assert!(solicitud_valida().validar().is_empty());
}

#[test]
fn every_failing_field_is_reported() {
    let solicitud = SolicitudCita {
        nombre: "Jo".to_string(),
        mascota: "R".to_string(),
        telefono: "123".to_string(),
        motivo: String::new(),
        mensaje: String::new(),
    };
    assert_eq!(
        solicitud.validar(),
        vec![Campo::Nombre, Campo::Mascota, Campo::Telefono, Campo::Motivo]
    );
}

#[test]
fn one_bad_field_does_not_drag_the_others() {
    let mut solicitud = solicitud_valida();
    solicitud.telefono = "abc".to_string();
    assert_eq!(solicitud.validar(), vec![Campo::Telefono]);
}

#[test]
fn mensaje_is_never_validated() {
    let mut solicitud = solicitud_valida();
    solicitud.mensaje = "x".repeat(10_000);
    assert!(solicitud.validar().is_empty());
}

// =============================================================
// nombre
// =============================================================

#[test]
fn nombre_under_three_chars_is_invalid() {
    let mut solicitud = solicitud_valida();
    solicitud.nombre = "Jo".to_string();
    assert_eq!(solicitud.validar(), vec![Campo::Nombre]);
}

#[test]
fn nombre_of_three_chars_is_valid() {
    let mut solicitud = solicitud_valida();
    solicitud.nombre = "Ana".to_string();
    assert!(solicitud.validar().is_empty());
}

#[test]
fn nombre_is_trimmed_before_measuring() {
    let mut solicitud = solicitud_valida();
    solicitud.nombre = "  Jo  ".to_string();
    assert_eq!(solicitud.validar(), vec![Campo::Nombre]);
}

#[test]
fn blank_nombre_is_invalid() {
    let mut solicitud = solicitud_valida();
    solicitud.nombre = "   ".to_string();
    assert_eq!(solicitud.validar(), vec![Campo::Nombre]);
}

// =============================================================
// mascota
// =============================================================

#[test]
fn mascota_of_one_char_is_invalid() {
    let mut solicitud = solicitud_valida();
    solicitud.mascota = "R".to_string();
    assert_eq!(solicitud.validar(), vec![Campo::Mascota]);
}

#[test]
fn mascota_of_two_chars_is_valid() {
    let mut solicitud = solicitud_valida();
    solicitud.mascota = "Bo".to_string();
    assert!(solicitud.validar().is_empty());
}

// =============================================================
// telefono
// =============================================================

#[test]
fn telefono_accepts_digits_spaces_and_symbols() {
    assert!(telefono_valido("+57 (300) 123-4567"));
}

#[test]
fn telefono_under_seven_chars_is_invalid() {
    assert!(!telefono_valido("123456"));
}

#[test]
fn telefono_of_exactly_seven_chars_is_valid() {
    assert!(telefono_valido("1234567"));
}

#[test]
fn telefono_with_letters_is_invalid() {
    assert!(!telefono_valido("300abc4567"));
}

#[test]
fn telefono_is_trimmed_first() {
    assert!(telefono_valido("  3001234567  "));
}

#[test]
fn empty_telefono_is_invalid() {
    assert!(!telefono_valido(""));
    assert!(!telefono_valido("      "));
}

#[test]
fn the_rule_is_purely_lexical() {
    // Seven allowed symbols with no digit at all still pass.
    assert!(telefono_valido("+()-()-"));
}

// =============================================================
// motivo
// =============================================================

#[test]
fn unselected_motivo_is_invalid() {
    let mut solicitud = solicitud_valida();
    solicitud.motivo = String::new();
    assert_eq!(solicitud.validar(), vec![Campo::Motivo]);
}

// =============================================================
// al_editar
// =============================================================

#[test]
fn editing_a_field_withdraws_its_error_mark() {
    let invalidos = vec![Campo::Nombre, Campo::Telefono];
    let (restantes, _) = al_editar(&invalidos, None, Campo::Nombre);
    assert_eq!(restantes, vec![Campo::Telefono]);
}

#[test]
fn editing_leaves_other_marks_alone() {
    let (restantes, _) = al_editar(&[Campo::Mascota], None, Campo::Telefono);
    assert_eq!(restantes, vec![Campo::Mascota]);
}

#[test]
fn editing_dismisses_an_error_message() {
    let (_, estado) = al_editar(&[], Some((Tono::Error, MSG_REVISA)), Campo::Nombre);
    assert_eq!(estado, None);
}

#[test]
fn editing_keeps_a_success_message_visible() {
    let (restantes, estado) = al_editar(
        &[Campo::Nombre],
        Some((Tono::Exito, MSG_GRACIAS)),
        Campo::Nombre,
    );
    assert!(restantes.is_empty());
    assert_eq!(estado, Some((Tono::Exito, MSG_GRACIAS)));
}

#[test]
fn editing_with_nothing_shown_changes_nothing() {
    let (restantes, estado) = al_editar(&[], None, Campo::Motivo);
    assert!(restantes.is_empty());
    assert_eq!(estado, None);
}

#[test]
fn message_tones_map_to_their_css_classes() {
    assert_eq!(Tono::Error.class(), "error");
    assert_eq!(Tono::Exito.class(), "success");
}

// =============================================================
// serialization
// =============================================================

#[test]
fn request_serializes_with_form_field_names() {
    let json = serde_json::to_value(solicitud_valida()).unwrap();
    for key in ["nombre", "mascota", "telefono", "motivo", "mensaje"] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
}
