use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::{Proposal, ProposalId, ProposalStatus, ReviewForm};

#[derive(Properties, PartialEq)]
pub struct ReviewModalProps {
    pub proposal: Proposal,
    pub form: ReviewForm,
    pub on_status: Callback<ProposalStatus>,
    pub on_comments: Callback<String>,
    pub on_save: Callback<ProposalId>,
    pub on_cancel: Callback<()>,
}

#[function_component(ReviewModal)]
pub fn review_modal(props: &ReviewModalProps) -> Html {
    let id = props.proposal.id;

    let on_status = props.on_status.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        ProposalStatus::parse(&select.value()).unwrap_or_default()
    });
    let on_comments = props.on_comments.reform(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        area.value()
    });

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <h3>{"Add Review"}</h3>
                <p class="modal-subtitle">
                    {props.proposal.project_title.clone().unwrap_or_default()}
                </p>
                <div class="form-group">
                    <label for="review-status">{"Status:"}</label>
                    <select id="review-status" onchange={on_status}>
                        { for ProposalStatus::ALL.iter().map(|status| html! {
                            <option
                                value={status.as_str()}
                                selected={*status == props.form.status}
                            >
                                {status.as_str()}
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label for="review-comments">{"Comments:"}</label>
                    <textarea
                        id="review-comments"
                        placeholder="Enter review comments..."
                        value={props.form.review_comments.clone()}
                        oninput={on_comments}
                    />
                </div>
                <div class="modal-actions">
                    <button class="btn-cancel" onclick={props.on_cancel.reform(|_| ())}>{"Cancel"}</button>
                    <button class="btn-save" onclick={props.on_save.reform(move |_| id)}>{"Save Review"}</button>
                </div>
            </div>
        </div>
    }
}
