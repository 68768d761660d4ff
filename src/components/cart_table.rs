//! Cart Table Component
//!
//! Table rows plus the hidden form fields, both projected from the cart on
//! every change.

use leptos::prelude::*;

use crate::store::{store_remove_line, CartStateStoreFields, CartStore};

#[component]
pub fn CartTable(cart: CartStore) -> impl IntoView {
    let rendering = Memo::new(move |_| {
        cart.cart().with(|c| c.render()).map_err(|err| {
            web_sys::console::error_1(&format!("[CART] No se pudo serializar: {}", err).into());
        }).ok()
    });

    let rows = move || rendering.with(|r| r.as_ref().map(|r| r.rows.clone()).unwrap_or_default());
    let hidden_value = move || {
        rendering.with(|r| r.as_ref().map(|r| r.hidden_value.clone()).unwrap_or_else(|| "[]".to_string()))
    };
    let form_fields = move || rendering.with(|r| r.as_ref().map(|r| r.form_fields.clone()).unwrap_or_default());

    view! {
        <table id="tabla_recursos" class="table table-sm align-middle">
            <thead>
                <tr>
                    <th>"Recurso"</th>
                    <th class="text-center">"Cantidad"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || rows().into_iter().map(|row| {
                    // Index is fixed when the row is rendered
                    let index = row.index;
                    view! {
                        <tr>
                            <td>{row.name}</td>
                            <td class="text-center">{row.quantity}</td>
                            <td class="text-end">
                                <button
                                    type="button"
                                    class="btn btn-sm btn-outline-danger"
                                    title="Quitar"
                                    on:click=move |_| store_remove_line(&cart, index)
                                >
                                    <i class="bi bi-trash"></i>
                                </button>
                            </td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>

        <input type="hidden" id="recursos_input" name="recursos" prop:value=hidden_value />
        {move || form_fields().into_iter().map(|(name, value)| view! {
            <input type="hidden" name=name value=value />
        }).collect_view()}
    }
}
