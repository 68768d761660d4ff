//! Attachment Checks
//!
//! Synchronous pre-checks for the attachment input. A non-empty file still
//! needs the 1-byte read done by the browser side.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttachmentLimits {
    pub max_bytes: u64,
    /// Lowercase extensions without the dot
    pub allowed_extensions: Vec<String>,
}

impl Default for AttachmentLimits {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            allowed_extensions: vec!["pdf".into(), "xls".into(), "xlsx".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("El archivo \"{0}\" está vacío (0 bytes). Si está en la nube (OneDrive/iCloud/Drive), descárgalo primero.")]
    Empty(String),
    #[error("El archivo es muy pesado. El límite es {limit_mb} MB.")]
    TooLarge { limit_mb: u64 },
    #[error("Solo se permiten archivos: {0}.")]
    ExtensionNotAllowed(String),
    #[error("No se pudo leer \"{0}\". Probablemente el archivo no está sincronizado localmente; ábrelo o descárgalo e intenta de nuevo.")]
    Unreadable(String),
}

impl AttachmentError {
    pub fn title(&self) -> &'static str {
        match self {
            AttachmentError::Empty(_) | AttachmentError::Unreadable(_) => "Archivo no disponible",
            AttachmentError::TooLarge { .. } | AttachmentError::ExtensionNotAllowed(_) => "Archivo inválido",
        }
    }
}

/// Zero-byte files are rejected first: they are the usual signature of a
/// cloud placeholder that was never downloaded.
pub fn precheck_attachment(name: &str, size: u64, limits: &AttachmentLimits) -> Result<(), AttachmentError> {
    if size == 0 {
        return Err(AttachmentError::Empty(name.to_string()));
    }
    if size > limits.max_bytes {
        return Err(AttachmentError::TooLarge {
            limit_mb: limits.max_bytes.div_ceil(1024 * 1024),
        });
    }
    if !limits.allowed_extensions.is_empty() {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if !limits.allowed_extensions.iter().any(|allowed| *allowed == extension) {
            return Err(AttachmentError::ExtensionNotAllowed(
                limits.allowed_extensions.join(", "),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes_rejected() {
        let err = precheck_attachment("informe.pdf", 0, &AttachmentLimits::default()).unwrap_err();
        assert_eq!(err, AttachmentError::Empty("informe.pdf".to_string()));
    }

    #[test]
    fn test_non_empty_allowed_file_passes() {
        assert!(precheck_attachment("Informe.PDF", 2048, &AttachmentLimits::default()).is_ok());
    }

    #[test]
    fn test_too_large() {
        let err = precheck_attachment("plan.xlsx", 6 * 1024 * 1024, &AttachmentLimits::default())
            .unwrap_err();
        assert_eq!(err, AttachmentError::TooLarge { limit_mb: 5 });
    }

    #[test]
    fn test_extension_checked() {
        let err = precheck_attachment("foto.png", 10, &AttachmentLimits::default()).unwrap_err();
        assert!(matches!(err, AttachmentError::ExtensionNotAllowed(_)));
        assert!(precheck_attachment("sin_extension", 10, &AttachmentLimits::default()).is_err());
    }

    #[test]
    fn test_empty_allow_list_accepts_any_extension() {
        let limits = AttachmentLimits {
            allowed_extensions: Vec::new(),
            ..Default::default()
        };
        assert!(precheck_attachment("foto.png", 10, &limits).is_ok());
    }
}
