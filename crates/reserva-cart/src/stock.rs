//! Stock Lookup
//!
//! Query encoding and response decoding for the real-time stock endpoint.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use thiserror::Error;

use crate::cart::ResourceId;

/// Characters left unescaped in query values (RFC 3986 unreserved set)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockQuery {
    pub resource_id: ResourceId,
    pub fecha: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    /// Set when editing, so the backend excludes this reservation's own usage
    pub reserva_id: Option<String>,
}

impl StockQuery {
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![
            ("recurso_id", self.resource_id.as_str()),
            ("fecha", self.fecha.as_str()),
            ("hora_inicio", self.hora_inicio.as_str()),
            ("hora_fin", self.hora_fin.as_str()),
        ];
        if let Some(reserva_id) = self.reserva_id.as_deref() {
            pairs.push(("reserva_id", reserva_id));
        }

        pairs
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full request URL, appending to any query the base already carries
    pub fn url(&self, base: &str) -> String {
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{}{}{}", base, separator, self.to_query_string())
    }
}

/// Body of the stock endpoint: `{stock_real}` or `{error}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StockResponse {
    Error { error: String },
    Available { stock_real: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("No se pudo verificar el stock ({0}).")]
    Transport(String),
    #[error("No se pudo verificar el stock (HTTP {0}).")]
    Status(u16),
    #[error("{0}")]
    Backend(String),
    #[error("No se pudo verificar el stock (respuesta inválida: {0}).")]
    Malformed(String),
}

impl StockResponse {
    /// Resolve a decoded body plus its HTTP status into an available quantity.
    /// An error payload wins over the status code; negative stock clamps to 0.
    pub fn into_available(self, status: u16) -> Result<u32, StockError> {
        match self {
            StockResponse::Error { error } => Err(StockError::Backend(error)),
            StockResponse::Available { .. } if !(200..300).contains(&status) => {
                Err(StockError::Status(status))
            }
            StockResponse::Available { stock_real } => {
                Ok(stock_real.clamp(0, u32::MAX as i64) as u32)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(reserva_id: Option<&str>) -> StockQuery {
        StockQuery {
            resource_id: ResourceId::new("12"),
            fecha: "2026-10-20".to_string(),
            hora_inicio: "10:00".to_string(),
            hora_fin: "11:30".to_string(),
            reserva_id: reserva_id.map(str::to_string),
        }
    }

    #[test]
    fn test_query_string_without_reservation() {
        assert_eq!(
            query(None).to_query_string(),
            "recurso_id=12&fecha=2026-10-20&hora_inicio=10%3A00&hora_fin=11%3A30"
        );
    }

    #[test]
    fn test_query_string_with_reservation() {
        let qs = query(Some("44")).to_query_string();
        assert!(qs.ends_with("&reserva_id=44"));
    }

    #[test]
    fn test_url_appends_to_existing_query() {
        assert!(query(None).url("/api/stock/").starts_with("/api/stock/?recurso_id=12"));
        assert!(query(None).url("/api/stock/?v=2").starts_with("/api/stock/?v=2&recurso_id=12"));
    }

    #[test]
    fn test_decode_available() {
        let body: StockResponse = serde_json::from_str(r#"{"stock_real": 5}"#).unwrap();
        assert_eq!(body.into_available(200), Ok(5));
    }

    #[test]
    fn test_negative_stock_clamps_to_zero() {
        let body: StockResponse = serde_json::from_str(r#"{"stock_real": -3}"#).unwrap();
        assert_eq!(body.into_available(200), Ok(0));
    }

    #[test]
    fn test_error_payload_wins_over_status() {
        let body: StockResponse =
            serde_json::from_str(r#"{"error": "Recurso no encontrado"}"#).unwrap();
        let err = body.into_available(404).unwrap_err();
        assert_eq!(err, StockError::Backend("Recurso no encontrado".to_string()));
        assert_eq!(err.to_string(), "Recurso no encontrado");
    }

    #[test]
    fn test_non_success_status_without_error_body() {
        let body = StockResponse::Available { stock_real: 3 };
        assert_eq!(body.into_available(500), Err(StockError::Status(500)));
    }

    #[test]
    fn test_unknown_body_fails_to_decode() {
        assert!(serde_json::from_str::<StockResponse>(r#"{"ok": true}"#).is_err());
    }
}
