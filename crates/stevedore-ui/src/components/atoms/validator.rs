use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RuleViolationsProps {
    #[prop_or_default]
    pub messages: Vec<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Per-rule violation readout rendered under an invalid field.
#[function_component(RuleViolations)]
pub(crate) fn rule_violations(props: &RuleViolationsProps) -> Html {
    if props.messages.is_empty() {
        return html! {};
    }
    html! {
        <ul class={classes!("validator", "text-error", props.class.clone())} role="status">
            {for props.messages.iter().map(|message| html! {
                <li class="text-xs">{message.clone()}</li>
            })}
        </ul>
    }
}
