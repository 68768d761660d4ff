//! Resource Cart
//!
//! Ordered resource line-items held by the reservation form. Insertion order
//! is display order and serialization order.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque resource identifier. The server may emit ids as JSON strings or
/// integers; both normalize to the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawResourceId", into = "String")]
pub struct ResourceId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawResourceId {
    Text(String),
    Number(i64),
}

impl From<RawResourceId> for ResourceId {
    fn from(raw: RawResourceId) -> Self {
        match raw {
            RawResourceId::Text(text) => ResourceId::new(text),
            RawResourceId::Number(n) => ResourceId(n.to_string()),
        }
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One resource line. Wire names match the form payload (`id`, `nombre`,
/// `cantidad`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "id")]
    pub resource_id: ResourceId,
    #[serde(rename = "nombre")]
    pub display_name: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// Capacity error: the requested total does not fit the available stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Stock insuficiente. Disponible: {available}. (Ya tienes {held})")]
pub struct Shortfall {
    pub available: u32,
    pub held: u32,
    pub requested: u32,
}

/// One table row of the rendered cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub index: usize,
    pub name: String,
    pub quantity: u32,
}

/// Deterministic projection of a cart onto the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRendering {
    pub rows: Vec<CartRow>,
    /// JSON array written into the hidden `recursos` field
    pub hidden_value: String,
    /// `(name, value)` pairs for the per-line `recurso_<id>` inputs
    pub form_fields: Vec<(String, String)>,
}

/// Deserializing goes through `from_lines`, so the merge rules always hold
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        Self::from_lines(lines)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from a server snapshot. Duplicate ids are merged in
    /// first-seen order and zero-quantity lines are dropped; stock is not
    /// re-checked.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 || line.resource_id.is_empty() {
                continue;
            }
            match cart.position(&line.resource_id) {
                Some(pos) => {
                    let existing = &mut cart.lines[pos];
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Parse the embedded edit-mode payload (a JSON array of lines)
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity already held for a resource (0 when absent)
    pub fn held(&self, resource_id: &ResourceId) -> u32 {
        self.position(resource_id)
            .map(|pos| self.lines[pos].quantity)
            .unwrap_or(0)
    }

    /// Add `quantity` units of a resource if `held + quantity` fits in
    /// `available`. On a shortfall the cart is left untouched.
    pub fn try_add(
        &mut self,
        resource_id: ResourceId,
        display_name: impl Into<String>,
        quantity: u32,
        available: u32,
    ) -> Result<(), Shortfall> {
        let held = self.held(&resource_id);
        if held.saturating_add(quantity) > available {
            return Err(Shortfall {
                available,
                held,
                requested: quantity,
            });
        }

        match self.position(&resource_id) {
            Some(pos) => self.lines[pos].quantity += quantity,
            None => self.lines.push(CartLine {
                resource_id,
                display_name: display_name.into(),
                quantity,
            }),
        }
        Ok(())
    }

    /// Remove the line at `index`; out-of-range indices are a no-op
    pub fn remove(&mut self, index: usize) -> Option<CartLine> {
        (index < self.lines.len()).then(|| self.lines.remove(index))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.lines)
    }

    pub fn render(&self) -> serde_json::Result<CartRendering> {
        let rows = self
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| CartRow {
                index,
                name: line.display_name.clone(),
                quantity: line.quantity,
            })
            .collect();
        let form_fields = self
            .lines
            .iter()
            .map(|line| (format!("recurso_{}", line.resource_id), line.quantity.to_string()))
            .collect();

        Ok(CartRendering {
            rows,
            hidden_value: self.to_json()?,
            form_fields,
        })
    }

    fn position(&self, resource_id: &ResourceId) -> Option<usize> {
        self.lines.iter().position(|line| &line.resource_id == resource_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ResourceId {
        ResourceId::new(raw)
    }

    fn line(raw_id: &str, name: &str, quantity: u32) -> CartLine {
        CartLine {
            resource_id: id(raw_id),
            display_name: name.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_distinct_adds_make_one_row_each() {
        let mut cart = Cart::new();
        cart.try_add(id("1"), "Proyector", 1, 10).unwrap();
        cart.try_add(id("2"), "Notebook", 2, 10).unwrap();
        cart.try_add(id("3"), "Parlante", 3, 10).unwrap();

        let rendering = cart.render().unwrap();
        assert_eq!(rendering.rows.len(), 3);
        assert_eq!(rendering.rows[1].name, "Notebook");
        assert_eq!(rendering.rows[1].index, 1);
    }

    #[test]
    fn test_repeated_add_accumulates() {
        let mut cart = Cart::new();
        cart.try_add(id("7"), "Proyector", 2, 5).unwrap();
        cart.try_add(id("7"), "Proyector", 3, 5).unwrap();

        assert_eq!(cart.lines(), &[line("7", "Proyector", 5)]);
    }

    #[test]
    fn test_shortfall_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.try_add(id("7"), "Proyector", 4, 5).unwrap();
        let before = cart.clone();

        let err = cart.try_add(id("7"), "Proyector", 3, 5).unwrap_err();

        assert_eq!(cart, before);
        assert_eq!(err, Shortfall { available: 5, held: 4, requested: 3 });
        let message = err.to_string();
        assert!(message.contains("Disponible: 5"));
        assert!(message.contains("Ya tienes 4"));
    }

    #[test]
    fn test_projector_walkthrough() {
        let mut cart = Cart::new();
        cart.try_add(id("p"), "Projector", 2, 5).unwrap();
        assert_eq!(cart.lines(), &[line("p", "Projector", 2)]);

        cart.try_add(id("p"), "Projector", 2, 5).unwrap();
        assert_eq!(cart.lines(), &[line("p", "Projector", 4)]);

        assert!(cart.try_add(id("p"), "Projector", 3, 5).is_err());
        assert_eq!(cart.lines(), &[line("p", "Projector", 4)]);
    }

    #[test]
    fn test_zero_available_rejects_first_add() {
        let mut cart = Cart::new();
        let err = cart.try_add(id("9"), "Micrófono", 1, 0).unwrap_err();
        assert_eq!(err.held, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut cart = Cart::from_lines(vec![
            line("1", "A", 1),
            line("2", "B", 1),
            line("3", "C", 1),
            line("4", "D", 1),
        ]);

        let removed = cart.remove(1).unwrap();

        assert_eq!(removed.display_name, "B");
        let names: Vec<_> = cart.lines().iter().map(|l| l.display_name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::from_lines(vec![line("1", "A", 1)]);
        assert!(cart.remove(1).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_hidden_value_parses_back_to_cart() {
        let mut cart = Cart::new();
        cart.try_add(id("12"), "Extensión \"larga\"", 2, 9).unwrap();
        cart.try_add(id("3"), "Mesa", 1, 9).unwrap();
        cart.remove(0);
        cart.try_add(id("12"), "Extensión \"larga\"", 1, 9).unwrap();

        let rendering = cart.render().unwrap();
        let parsed = Cart::from_json(&rendering.hidden_value).unwrap();
        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_render_is_idempotent() {
        let cart = Cart::from_lines(vec![line("1", "A", 2), line("2", "B", 3)]);
        assert_eq!(cart.render().unwrap(), cart.render().unwrap());
    }

    #[test]
    fn test_render_form_fields_per_line() {
        let cart = Cart::from_lines(vec![line("4", "A", 2), line("9", "B", 3)]);
        let rendering = cart.render().unwrap();
        assert_eq!(
            rendering.form_fields,
            vec![
                ("recurso_4".to_string(), "2".to_string()),
                ("recurso_9".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_wire_format_field_names() {
        let cart = Cart::from_lines(vec![line("5", "Proyector", 2)]);
        assert_eq!(
            cart.to_json().unwrap(),
            r#"[{"id":"5","nombre":"Proyector","cantidad":2}]"#
        );
    }

    #[test]
    fn test_from_json_accepts_numeric_ids_and_merges() {
        let cart = Cart::from_json(
            r#"[{"id": 5, "nombre": "Proyector", "cantidad": 1},
                {"id": "5", "nombre": "Proyector", "cantidad": 2},
                {"id": 6, "nombre": "Mesa", "cantidad": 0}]"#,
        )
        .unwrap();

        assert_eq!(cart.lines(), &[line("5", "Proyector", 3)]);
        assert_eq!(cart.held(&id("5")), 3);
    }

    #[test]
    fn test_deserialize_applies_merge_rules() {
        let cart: Cart = serde_json::from_str(
            r#"[{"id": "1", "nombre": "A", "cantidad": 1},
                {"id": "1", "nombre": "A", "cantidad": 0}]"#,
        )
        .unwrap();
        assert_eq!(cart.lines(), &[line("1", "A", 1)]);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(Cart::from_json(r#"{"id": 1}"#).is_err());
    }
}
