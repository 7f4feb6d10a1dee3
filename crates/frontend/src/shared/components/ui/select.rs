use super::field::Field;
use leptos::prelude::*;

/// Drop-down over `(value, label)` pairs.
///
/// The option whose value equals `value` is rendered selected; a value with no
/// matching option leaves the browser default (first option) selected.
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <Field label=label control_id=id required=required>
            <select
                id=select_id
                class="form__select"
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == current>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </Field>
    }
}
