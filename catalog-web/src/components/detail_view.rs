use crate::i18n::{tr, tr1};
use catalog_core::{CatalogItem, format_rating};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: CatalogItem,
    /// Emits the position of the review whose delete control was pressed.
    pub on_delete: Callback<usize>,
    /// A reload is in flight; positions may be about to shift.
    #[prop_or_default]
    pub busy: bool,
}

/// Modal body for one item: record fields and its numbered reviews.
#[function_component(DetailView)]
pub fn detail_view(props: &Props) -> Html {
    let item = &props.item;
    let count = item.reviews.len().to_string();
    let mut count_args = BTreeMap::new();
    count_args.insert("count", count.as_str());

    let reviews = item.reviews.iter().enumerate().map(|(index, review)| {
        let on_delete = {
            let cb = props.on_delete.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                cb.emit(index);
            })
        };
        let number = (index + 1).to_string();
        html! {
            <li class="modal-review" data-review-index={index.to_string()}>
                <div class="modal-review-header">
                    <div>
                        <span class="modal-review-author">{ review.author.clone() }</span>
                        <span class="modal-review-date">{ review.date.clone() }</span>
                    </div>
                    <div class="modal-review-rating">
                        { format!("{}/10", format_rating(review.rating)) }
                        <button
                            type="button"
                            class="delete-review-btn"
                            data-item-id={item.id.to_string()}
                            data-review-index={index.to_string()}
                            aria-label={tr1("detail.delete_review", "number", &number)}
                            disabled={props.busy}
                            onclick={on_delete}
                        >
                            {"×"}
                        </button>
                    </div>
                </div>
                <p class="modal-review-text">{ review.text.clone() }</p>
            </li>
        }
    });

    html! {
        <>
            <h2 class="modal-item-title">{ item.title.clone() }</h2>
            <img src={crate::paths::asset_path(&item.image)} alt={item.title.clone()} class="modal-item-image" />
            <div class="modal-item-info">
                if let Some(creator) = item.creator() {
                    <div class="modal-item-creator">{ tr1("card.creator", "name", creator) }</div>
                }
                <div class="modal-item-genres">
                    { for item.genres.iter().map(|genre| html! { <span class="genre-tag">{ genre.clone() }</span> }) }
                </div>
                <div class="modal-item-rating">
                    { tr1("detail.rating", "rating", &format_rating(item.rating)) }
                </div>
            </div>
            <p class="modal-item-description">{ item.description.clone() }</p>
            <div class="modal-reviews-section">
                <h3>{ tr("detail.reviews", Some(&count_args)) }</h3>
                <ol class="modal-reviews">
                    { for reviews }
                </ol>
            </div>
        </>
    }
}
