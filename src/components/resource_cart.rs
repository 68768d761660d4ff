//! Resource Cart Component
//!
//! Resource selector, quantity input and add button, the stock alert, and
//! the cart table. Every add is checked against live stock first.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reserva_cart::{AddDraft, Schedule};

use crate::api;
use crate::components::CartTable;
use crate::dom::{self, ids};
use crate::models::{self, ResourceOption};
use crate::notify;
use crate::store::{store_add_line, BusyGuard, CartStateStoreFields, CartStore};

fn read_schedule() -> Schedule {
    Schedule {
        fecha: dom::input_value(ids::DATE),
        hora_inicio: dom::input_value(ids::START_TIME),
        hora_fin: dom::input_value(ids::END_TIME),
    }
}

/// Cart editor bound to the page's cart store
#[component]
pub fn ResourceCart(
    cart: CartStore,
    catalog: Vec<ResourceOption>,
    #[prop(into)] stock_url: String,
    reserva_id: Option<String>,
) -> impl IntoView {
    let (selected, set_selected) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());

    let catalog = StoredValue::new(catalog);
    let stock_url = StoredValue::new(stock_url);
    let reserva_id = StoredValue::new(reserva_id);

    let add_line = move |_| {
        let draft = AddDraft {
            resource_id: selected.get_untracked(),
            quantity: quantity.get_untracked(),
            schedule: read_schedule(),
        };
        let request = match draft.validate() {
            Ok(request) => request,
            Err(err) => {
                web_sys::console::warn_1(&format!("[CART] Entrada inválida: {}", err).into());
                notify::input_error(&err);
                return;
            }
        };
        let Some(busy) = BusyGuard::acquire(cart) else {
            return;
        };
        cart.shortfall().set(None);

        let display_name = catalog.with_value(|c| models::display_name(c, &request.resource_id));
        let query = request.stock_query(reserva_id.get_value());
        let url = stock_url.get_value();

        spawn_local(async move {
            let _busy = busy;
            match api::check_availability(&url, &query).await {
                Ok(available) => match store_add_line(&cart, &request, &display_name, available) {
                    Ok(()) => {
                        web_sys::console::log_1(
                            &format!("[CART] +{} {}", request.quantity, display_name).into(),
                        );
                        set_selected.set(String::new());
                        set_quantity.set(String::new());
                    }
                    Err(shortfall) => {
                        web_sys::console::warn_1(&format!("[CART] {}", shortfall).into());
                        cart.shortfall().set(Some(shortfall));
                    }
                },
                Err(err) => {
                    web_sys::console::error_1(&format!("[STOCK] {:?}", err).into());
                    notify::stock_error(&err);
                }
            }
        });
    };

    view! {
        <div class="resource-cart">
            <div class="resource-cart-controls">
                <select
                    id="recurso_selector"
                    class="form-select"
                    prop:value=move || selected.get()
                    on:change=move |ev| set_selected.set(event_target_value(&ev))
                >
                    <option value="">"Seleccione un recurso..."</option>
                    {catalog.with_value(|c| {
                        c.iter()
                            .map(|option| view! {
                                <option value=option.id.to_string()>{option.label()}</option>
                            })
                            .collect_view()
                    })}
                </select>
                <input
                    id="recurso_cantidad"
                    class="form-control"
                    type="number"
                    min="1"
                    placeholder="Cant."
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                />
                <button
                    id="btnAgregarRecurso"
                    type="button"
                    class="btn btn-outline-primary"
                    disabled=move || cart.busy().get()
                    on:click=add_line
                >
                    {move || if cart.busy().get() {
                        view! { <span class="spinner-border spinner-border-sm"></span>" Verificando..." }.into_any()
                    } else {
                        view! { "Agregar" }.into_any()
                    }}
                </button>
            </div>

            {move || cart.shortfall().get().map(|shortfall| view! {
                <div id="stock-alert" class="alert alert-warning mt-2" role="alert">
                    <i class="bi bi-exclamation-triangle-fill"></i>
                    " "
                    {shortfall.to_string()}
                </div>
            })}

            <CartTable cart=cart />
        </div>
    }
}
