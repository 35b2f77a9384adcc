//! Deploy form page.
//!
//! # Design
//! - The page owns form state; child editors receive clones and emit updates.
//! - The `app` label row mirrors the workload name through a derived accessor.
//! - Submission serializes a [`DeployRequest`]; failures surface on the form.

use crate::features::labels::state::{LabelListForm, LabelRow};
use crate::features::labels::view::LabelListEditor;
use crate::models::DeployRequest;
use gloo::console;
use yew::prelude::*;

#[function_component(DeployPage)]
pub(crate) fn deploy_page() -> Html {
    let name = use_state(String::new);
    let form = use_state({
        let name = name.clone();
        move || LabelListForm::seeded(vec![LabelRow::derived("app", move || (*name).clone())])
    });
    let error = use_state(|| None::<String>);

    let on_name = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_form_change = {
        let form = form.clone();
        Callback::from(move |next: LabelListForm| form.set(next))
    };

    let on_submit = {
        let name = name.clone();
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |_| match form.to_request_labels() {
            Ok(labels) => {
                error.set(None);
                let request = DeployRequest {
                    name: (*name).clone(),
                    labels,
                };
                match serde_json::to_string(&request) {
                    Ok(payload) => console::log!("deploy request", payload),
                    Err(err) => console::error!("deploy request failed to serialize", err.to_string()),
                }
            }
            Err(message) => error.set(Some(message)),
        })
    };

    html! {
        <section class="deploy-page">
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <p class="eyebrow">{"Deploy"}</p>
                        <h3>{"New workload"}</h3>
                        <p class="muted">{"Name the workload and attach resource labels."}</p>
                    </div>
                </div>
                <div class="stacked">
                    <label class="stack">
                        <span>{"Name"}</span>
                        <input
                            type="text"
                            placeholder={"my-workload"}
                            value={(*name).clone()}
                            oninput={on_name}
                        />
                    </label>
                    <LabelListEditor form={(*form).clone()} on_change={on_form_change} />
                </div>
                {if let Some(message) = error.as_ref() {
                    html! { <p class="text-sm text-error">{message.clone()}</p> }
                } else { html! {} }}
                <div class="actions">
                    <button class="btn btn-primary btn-sm" onclick={on_submit}>{"Deploy"}</button>
                </div>
            </div>
        </section>
    }
}
