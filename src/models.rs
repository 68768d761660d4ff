//! Frontend Models
//!
//! Data structures embedded by the server template.

use reserva_cart::ResourceId;
use serde::Deserialize;

/// One selectable resource (from `#data-catalogo`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceOption {
    pub id: ResourceId,
    pub nombre: String,
    #[serde(default)]
    pub stock: Option<u32>,
}

impl ResourceOption {
    pub fn label(&self) -> String {
        match self.stock {
            Some(stock) => format!("{} (Stock: {})", self.nombre, stock),
            None => self.nombre.clone(),
        }
    }
}

/// Display name for a cart line; falls back to the raw id
pub fn display_name(catalog: &[ResourceOption], id: &ResourceId) -> String {
    catalog
        .iter()
        .find(|option| &option.id == id)
        .map(|option| option.nombre.trim().to_string())
        .unwrap_or_else(|| format!("Recurso #{}", id))
}
