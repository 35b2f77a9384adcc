//! Label list editor view.
//!
//! # Design
//! - Controlled component: the page owns the form, the editor emits clones.
//! - Run `check` after every edit so the list grows as rows fill in.
//! - Per-row validity lives in view state keyed by row id.

use crate::components::atoms::RuleViolations;
use crate::features::labels::actions::LabelAction;
use crate::features::labels::state::{KeyValidity, LabelListForm};
use std::collections::BTreeMap;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LabelListEditorProps {
    pub form: LabelListForm,
    pub on_change: Callback<LabelListForm>,
}

#[function_component(LabelListEditor)]
pub(crate) fn label_list_editor(props: &LabelListEditorProps) -> Html {
    let validity = use_state(BTreeMap::<Uuid, KeyValidity>::new);

    let dispatch = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        let validity = validity.clone();
        Callback::from(move |action: LabelAction| {
            let mut next = form.clone();
            match action {
                LabelAction::EditKey { id, key } => {
                    next.set_key(id, key);
                    record_validity(&validity, id, next.check(id));
                }
                LabelAction::EditValue { id, value } => {
                    next.set_value(id, value);
                    record_validity(&validity, id, next.check(id));
                }
                LabelAction::Delete { id } => {
                    next.delete(id);
                    let mut map = (*validity).clone();
                    map.remove(&id);
                    validity.set(map);
                }
            }
            on_change.emit(next);
        })
    };

    html! {
        <div class="label-editor">
            <div class="panel-subhead">
                <strong>{"Labels"}</strong>
                <span class="pill subtle">{props.form.rows().len()}</span>
            </div>
            <ul class="label-rows">
                {for props.form.rows().iter().map(|row| {
                    let id = row.id();
                    let locked = !row.is_editable();
                    let on_key = {
                        let dispatch = dispatch.clone();
                        Callback::from(move |event: InputEvent| {
                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                dispatch.emit(LabelAction::EditKey { id, key: input.value() });
                            }
                        })
                    };
                    let on_value = {
                        let dispatch = dispatch.clone();
                        Callback::from(move |event: InputEvent| {
                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                dispatch.emit(LabelAction::EditValue { id, value: input.value() });
                            }
                        })
                    };
                    let on_delete = {
                        let dispatch = dispatch.clone();
                        Callback::from(move |_| dispatch.emit(LabelAction::Delete { id }))
                    };
                    html! {
                        <li class="label-row" key={id.to_string()}>
                            <div class="label-row-fields">
                                <input
                                    type="text"
                                    placeholder={"Key"}
                                    aria-label="Label key"
                                    value={row.key().to_string()}
                                    disabled={locked}
                                    oninput={on_key}
                                />
                                <input
                                    type="text"
                                    placeholder={"Value"}
                                    aria-label="Label value"
                                    value={row.value()}
                                    disabled={locked || row.is_derived()}
                                    oninput={on_value}
                                />
                                {if props.form.is_removable(id) {
                                    html! {
                                        <button class="btn btn-ghost btn-sm" onclick={on_delete}>
                                            {"Remove"}
                                        </button>
                                    }
                                } else { html! {} }}
                            </div>
                            {match validity.get(&id).copied() {
                                Some(checked) if !checked.is_valid() => html! {
                                    <RuleViolations
                                        messages={checked
                                            .violations()
                                            .into_iter()
                                            .map(AttrValue::from)
                                            .collect::<Vec<_>>()}
                                    />
                                },
                                _ => html! {},
                            }}
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

fn record_validity(
    handle: &UseStateHandle<BTreeMap<Uuid, KeyValidity>>,
    id: Uuid,
    validity: Option<KeyValidity>,
) {
    if let Some(validity) = validity {
        let mut map = (**handle).clone();
        map.insert(id, validity);
        handle.set(map);
    }
}
