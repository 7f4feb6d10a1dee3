use leptos::prelude::*;

/// `form__group` wrapper: optional label above a single control.
#[component]
pub fn Field(
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Id of the wrapped control, used by the label's `for`
    #[prop(optional, into)]
    control_id: MaybeProp<String>,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    let for_id = move || control_id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=for_id>
                    {l}
                    {required.then_some(view! { <span class="form__required">"*"</span> })}
                </label>
            })}
            {children()}
        </div>
    }
}
