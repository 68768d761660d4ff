//! Add Requests
//!
//! Synchronous validation of the "add resource" controls, run before any
//! network call.

use thiserror::Error;

use crate::cart::ResourceId;
use crate::stock::StockQuery;

/// Date and clock times currently entered in the reservation form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub fecha: String,
    pub hora_inicio: String,
    pub hora_fin: String,
}

impl Schedule {
    pub fn is_complete(&self) -> bool {
        [&self.fecha, &self.hora_inicio, &self.hora_fin]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Seleccione un recurso.")]
    MissingResource,
    #[error("Seleccione fecha y horas primero.")]
    MissingSchedule,
    #[error("Ingrese una cantidad mayor a 0.")]
    InvalidQuantity,
}

impl InputError {
    pub fn title(&self) -> &'static str {
        match self {
            InputError::MissingResource => "Falta info",
            InputError::MissingSchedule => "Horario requerido",
            InputError::InvalidQuantity => "Cantidad inválida",
        }
    }
}

/// Raw values of the add controls, as typed by the user
#[derive(Debug, Clone)]
pub struct AddDraft {
    pub resource_id: String,
    pub quantity: String,
    pub schedule: Schedule,
}

/// A validated add, ready for the stock check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    pub resource_id: ResourceId,
    pub quantity: u32,
    pub schedule: Schedule,
}

impl AddDraft {
    /// Checks run in form order: resource, then schedule, then quantity.
    pub fn validate(&self) -> Result<AddRequest, InputError> {
        let resource_id = ResourceId::new(self.resource_id.as_str());
        if resource_id.is_empty() {
            return Err(InputError::MissingResource);
        }
        if !self.schedule.is_complete() {
            return Err(InputError::MissingSchedule);
        }
        let quantity = match self.quantity.trim().parse::<u32>() {
            Ok(q) if q > 0 => q,
            _ => return Err(InputError::InvalidQuantity),
        };

        Ok(AddRequest {
            resource_id,
            quantity,
            schedule: self.schedule.clone(),
        })
    }
}

impl AddRequest {
    pub fn stock_query(&self, reserva_id: Option<String>) -> StockQuery {
        StockQuery {
            resource_id: self.resource_id.clone(),
            fecha: self.schedule.fecha.trim().to_string(),
            hora_inicio: self.schedule.hora_inicio.trim().to_string(),
            hora_fin: self.schedule.hora_fin.trim().to_string(),
            reserva_id,
        }
    }
}
