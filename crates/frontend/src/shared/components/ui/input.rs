use super::field::Field;
use leptos::prelude::*;

/// Text-like input bound to a string signal.
///
/// `input_type` is passed through to the element, so `"date"` and `"number"`
/// inputs report their raw value (`YYYY-MM-DD` for dates).
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "number", "date", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <Field label=label control_id=id required=required>
            <input
                id=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </Field>
    }
}
