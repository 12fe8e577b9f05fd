use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::StatusBadge;
use crate::models::{ProposalDraft, ProposalField, ProposalId};
use crate::viewmodels::RowView;

#[derive(Properties, PartialEq)]
pub struct ProposalRowProps {
    pub row: RowView,
    pub can_review: bool,
    pub on_edit: Callback<ProposalId>,
    pub on_field: Callback<(ProposalField, String)>,
    pub on_save: Callback<ProposalId>,
    pub on_cancel: Callback<()>,
    pub on_delete: Callback<ProposalId>,
    pub on_review: Callback<ProposalId>,
}

fn text_input(draft: &ProposalDraft, field: ProposalField, on_field: &Callback<(ProposalField, String)>) -> Html {
    let oninput = on_field.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (field, input.value())
    });
    html! {
        <input
            type="text"
            class="edit-input"
            placeholder={field.label()}
            value={draft.field(field).to_string()}
            {oninput}
        />
    }
}

#[function_component(ProposalRow)]
pub fn proposal_row(props: &ProposalRowProps) -> Html {
    let proposal = props.row.proposal();
    let id = proposal.id;

    let (name_cell, title_cell, description_cell, actions) = match &props.row {
        RowView::Editing { draft, .. } => {
            let on_description = props.on_field.reform(|e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                (ProposalField::Description, area.value())
            });
            (
                html! {
                    <>
                        {text_input(draft, ProposalField::StudentName, &props.on_field)}
                        {text_input(draft, ProposalField::StudentId, &props.on_field)}
                    </>
                },
                text_input(draft, ProposalField::ProjectTitle, &props.on_field),
                html! {
                    <textarea
                        class="edit-textarea"
                        value={draft.description.clone()}
                        oninput={on_description}
                    />
                },
                html! {
                    <>
                        <button class="btn-save" onclick={props.on_save.reform(move |_| id)}>{"Save"}</button>
                        <button class="btn-cancel" onclick={props.on_cancel.reform(|_| ())}>{"Cancel"}</button>
                    </>
                },
            )
        }
        RowView::Display(proposal) => (
            html! { <>{proposal.display_student_name()}</> },
            html! { <>{proposal.project_title.clone().unwrap_or_default()}</> },
            html! { <div class="description-text">{proposal.description.clone().unwrap_or_default()}</div> },
            html! {
                <>
                    <button class="btn-edit" onclick={props.on_edit.reform(move |_| id)}>{"Edit"}</button>
                    <button class="btn-delete" onclick={props.on_delete.reform(move |_| id)}>{"Delete"}</button>
                    if props.can_review {
                        <button class="btn-review" onclick={props.on_review.reform(move |_| id)}>{"Review"}</button>
                    }
                </>
            },
        ),
    };

    html! {
        <tr class={classes!(props.row.is_editing().then_some("editing"))}>
            <td>{name_cell}</td>
            <td>{title_cell}</td>
            <td class="description-cell">{description_cell}</td>
            <td><StatusBadge status={proposal.status} /></td>
            <td class="comments-cell">{proposal.display_comments()}</td>
            <td><div class="row-actions">{actions}</div></td>
        </tr>
    }
}
