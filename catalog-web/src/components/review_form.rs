use crate::i18n::{t, tr};
use catalog_core::{DraftField, ItemId, RatingScale, ReviewDraft, format_rating};
use std::collections::BTreeMap;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item_id: ItemId,
    pub scale: RatingScale,
    pub draft: ReviewDraft,
    pub on_edit: Callback<(DraftField, String)>,
    pub on_submit: Callback<()>,
}

fn input_handler(cb: &Callback<(DraftField, String)>, field: DraftField) -> Callback<InputEvent> {
    let cb = cb.clone();
    Callback::from(move |e: InputEvent| {
        let value = e
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| {
                e.target_dyn_into::<HtmlTextAreaElement>()
                    .map(|area| area.value())
            });
        if let Some(value) = value {
            cb.emit((field, value));
        }
    })
}

/// Controlled review form; every keystroke goes through the store's draft.
#[function_component(ReviewForm)]
pub fn review_form(props: &Props) -> Html {
    let onsubmit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    let min = format_rating(props.scale.min);
    let max = format_rating(props.scale.max);
    let mut range = BTreeMap::new();
    range.insert("min", min.as_str());
    range.insert("max", max.as_str());

    html! {
        <div class="add-review-form">
            <h3>{ t("review.heading") }</h3>
            <form id="reviewForm" data-item-id={props.item_id.to_string()} {onsubmit}>
                <div class="form-group">
                    <label for="author">{ t("review.author") }</label>
                    <input
                        type="text"
                        id="author"
                        name="author"
                        required=true
                        value={props.draft.get(DraftField::Author).to_string()}
                        oninput={input_handler(&props.on_edit, DraftField::Author)}
                    />
                </div>
                <div class="form-group">
                    <label for="rating">{ tr("review.rating", Some(&range)) }</label>
                    <input
                        type="number"
                        id="rating"
                        name="rating"
                        min={min.clone()}
                        max={max.clone()}
                        step={props.scale.step_attr()}
                        required=true
                        value={props.draft.get(DraftField::Rating).to_string()}
                        oninput={input_handler(&props.on_edit, DraftField::Rating)}
                    />
                </div>
                <div class="form-group">
                    <label for="text">{ t("review.text") }</label>
                    <textarea
                        id="text"
                        name="text"
                        required=true
                        value={props.draft.get(DraftField::Text).to_string()}
                        oninput={input_handler(&props.on_edit, DraftField::Text)}
                    />
                </div>
                <button type="submit" class="submit-review-btn">{ t("review.submit") }</button>
            </form>
        </div>
    }
}
