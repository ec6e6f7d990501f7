//! Numeric input form shared by the prediction pages.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::NumericField;
use crate::utils::format::label_with_unit;

stylance::import_crate_style!(css, "src/components/form/form.module.css");

/// One numeric input per field and a submit button.
///
/// Raw input text is handed to `on_submit` in field order; parsing and
/// validation belong to the caller. Submission is ignored while `pending`.
#[component]
pub fn NumericForm(
    fields: &'static [NumericField],
    submit_label: &'static str,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<Vec<String>>,
) -> impl IntoView {
    let values = StoredValue::new(
        fields
            .iter()
            .map(|_| RwSignal::new(String::new()))
            .collect::<Vec<_>>(),
    );

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let inputs = values.with_value(|values| {
            values
                .iter()
                .map(|value| value.get_untracked())
                .collect::<Vec<_>>()
        });
        on_submit.run(inputs);
    };

    let inputs = fields
        .iter()
        .zip(values.get_value())
        .map(|(field, value)| {
            let id = format!("field-{}", field.key);
            let input_id = id.clone();
            view! {
                <label class=css::field for=id>
                    <span class=css::label>{label_with_unit(field.label, field.unit)}</span>
                    <input
                        id=input_id
                        class=css::input
                        type="number"
                        step="any"
                        name=field.key
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    />
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <form class=css::form on:submit=handle_submit novalidate=true>
            <div class=css::grid>{inputs}</div>
            <button class=css::submit type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Working..." } else { submit_label }}
            </button>
        </form>
    }
}

/// Inline error message.
#[component]
pub fn ErrorNotice(message: String) -> impl IntoView {
    view! {
        <div class=css::notice role="alert">
            <Icon icon=ic::ALERT />
            <span>{message}</span>
        </div>
    }
}

/// Placeholder shown while a request is in flight.
#[component]
pub fn PendingNotice(message: &'static str) -> impl IntoView {
    view! { <p class=css::pending>{message}</p> }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::models::WEATHER_FEATURES;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(pending: RwSignal<bool>, submitted: RwSignal<usize>) -> web_sys::HtmlElement {
        let document = document();
        let container = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&container).unwrap();
        mount_to(container.clone(), move || {
            view! {
                <NumericForm
                    fields=&WEATHER_FEATURES
                    submit_label="Predict"
                    pending=pending
                    on_submit=Callback::new(move |_| submitted.update(|n| *n += 1))
                />
            }
        })
        .forget();
        container
    }

    #[wasm_bindgen_test]
    fn submit_is_ignored_while_pending() {
        let pending = RwSignal::new(true);
        let submitted = RwSignal::new(0usize);
        let container = mount(pending, submitted);

        let button = container.query_selector("button").unwrap().unwrap();
        assert!(button.has_attribute("disabled"));

        let form = container
            .query_selector("form")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlFormElement>();
        form.request_submit().unwrap();
        form.request_submit().unwrap();
        assert_eq!(submitted.get_untracked(), 0);

        pending.set(false);
        form.request_submit().unwrap();
        assert_eq!(submitted.get_untracked(), 1);
    }

    #[wasm_bindgen_test]
    fn labels_point_at_their_inputs() {
        let container = mount(RwSignal::new(false), RwSignal::new(0));
        let labels = container.query_selector_all("label").unwrap();
        assert_eq!(labels.length() as usize, WEATHER_FEATURES.len());

        for i in 0..labels.length() {
            let label = labels
                .item(i)
                .unwrap()
                .unchecked_into::<web_sys::Element>();
            let input = label.query_selector("input").unwrap().unwrap();
            let target = label.get_attribute("for").unwrap();
            assert_eq!(Some(target.clone()), input.get_attribute("id"));
            assert!(target.starts_with("field-"));
        }
    }
}
