#[cfg(test)]
#[path = "citas_test.rs"]
mod citas_test;

use chrono::{DateTime, Local, NaiveDate};

pub const MSG_CITA_HOY: &str = "Ya recibimos una solicitud tuya hoy. Si necesitas otra cita, \
     por favor indícalo en el mensaje.";

/// Whether the stored timestamp of the last request falls on `hoy`, the
/// local calendar day. The comparison is done in local time regardless of
/// the offset the value was stored with. Values that do not parse as
/// RFC 3339 are treated as no previous request.
pub fn solicitada_hoy(guardado: &str, hoy: NaiveDate) -> bool {
    match DateTime::parse_from_rfc3339(guardado) {
        Ok(instante) => instante.with_timezone(&Local).date_naive() == hoy,
        Err(_) => false,
    }
}
