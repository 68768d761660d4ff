//! Reserva Cart
//!
//! Browser-independent core of the reservation form: the resource cart,
//! stock query encoding, add-request validation and form-field rules.

mod attachment;
mod cart;
mod request;
mod schedule;
mod stock;

pub use attachment::{precheck_attachment, AttachmentError, AttachmentLimits};
pub use cart::{Cart, CartLine, CartRendering, CartRow, ResourceId, Shortfall};
pub use request::{AddDraft, AddRequest, InputError, Schedule};
pub use schedule::{check_time_range, OperatingWindow, TimeRangeIssue};
pub use stock::{StockError, StockQuery, StockResponse};
