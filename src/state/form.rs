#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::Serialize;

pub const MSG_REVISA: &str = "Por favor revisa los campos marcados en rojo.";
pub const MSG_ENVIANDO: &str = "Enviando tu solicitud...";
pub const MSG_GRACIAS: &str =
    "¡Gracias! Hemos recibido tu solicitud, te contactaremos por WhatsApp.";

/// Tone of the status line under the form, mirrored as its CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tono {
    Error,
    Exito,
}

impl Tono {
    pub fn class(self) -> &'static str {
        match self {
            Tono::Error => "error",
            Tono::Exito => "success",
        }
    }
}

/// Fields of the appointment form that carry validation rules. `mensaje`
/// is free text and never validated, so it has no variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Campo {
    Nombre,
    Mascota,
    Telefono,
    Motivo,
}

/// What the form would send to the clinic. Serialized as the simulated
/// request body.
#[derive(Clone, Debug, Serialize)]
pub struct SolicitudCita {
    pub nombre: String,
    pub mascota: String,
    pub telefono: String,
    pub motivo: String,
    pub mensaje: String,
}

impl SolicitudCita {
    /// Checks every rule and reports all failing fields at once, so the
    /// form can mark each one instead of stopping at the first.
    pub fn validar(&self) -> Vec<Campo> {
        let mut invalidos = Vec::new();

        if self.nombre.trim().chars().count() < 3 {
            invalidos.push(Campo::Nombre);
        }
        if self.mascota.trim().chars().count() < 2 {
            invalidos.push(Campo::Mascota);
        }
        if !telefono_valido(&self.telefono) {
            invalidos.push(Campo::Telefono);
        }
        if self.motivo.is_empty() {
            invalidos.push(Campo::Motivo);
        }

        invalidos
    }
}

/// Reaction to the user editing `campo`: its error mark is withdrawn, and an
/// error-toned status message is dismissed. A success message stays visible.
pub fn al_editar(
    invalidos: &[Campo],
    estado: Option<(Tono, &'static str)>,
    campo: Campo,
) -> (Vec<Campo>, Option<(Tono, &'static str)>) {
    let restantes = invalidos.iter().copied().filter(|c| *c != campo).collect();
    let estado = match estado {
        Some((Tono::Error, _)) => None,
        otro => otro,
    };
    (restantes, estado)
}

/// A phone number is valid when, after trimming, it has at least seven
/// characters drawn only from digits, whitespace and `+` `(` `)` `-`.
/// Purely lexical: no prefix or length ceiling is enforced.
pub fn telefono_valido(valor: &str) -> bool {
    let recortado = valor.trim();
    recortado.chars().count() >= 7 && recortado.chars().all(es_caracter_de_telefono)
}

fn es_caracter_de_telefono(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '(' | ')' | '-')
}
