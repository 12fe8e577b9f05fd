use yew::prelude::*;

use crate::models::ProposalStatus;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: ProposalStatus,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={classes!("status-badge", props.status.css_class())}>
            {props.status.as_str()}
        </span>
    }
}
