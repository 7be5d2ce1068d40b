use crate::i18n::{t, tr, tr1};
use catalog_core::{ItemSummary, ReviewPreview, format_rating};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: ItemSummary,
}

/// Expanded card for the overview layout: the first reviews inline and a
/// toggle for the rest.
#[function_component(ReviewPreviewCard)]
pub fn review_preview_card(props: &Props) -> Html {
    let expanded = use_state(|| false);
    let item = &props.item;
    let preview = ReviewPreview::new(&item.reviews, *expanded);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };
    let count = item.reviews.len().to_string();
    let mut count_args = BTreeMap::new();
    count_args.insert("count", count.as_str());
    let toggle_label = if preview.expanded {
        t("overview.hide")
    } else {
        tr1("overview.show_all", "count", &preview.hidden.to_string())
    };

    html! {
        <article class="overview-card" data-item-id={item.id.to_string()}>
            <h3 class="item-title">{ item.title.clone() }</h3>
            <div class="item-genres">
                { for item.genres.iter().map(|genre| html! { <span class="genre-tag">{ genre.clone() }</span> }) }
            </div>
            if let Some(description) = item.description.as_ref() {
                <p class="item-description">{ description.clone() }</p>
            }
            if let Some(rating) = item.rating {
                <div class="item-rating">{ tr1("detail.rating", "rating", &format_rating(rating)) }</div>
            }
            <div class="review-count">{ tr("overview.reviews", Some(&count_args)) }</div>
            <ul class="review-preview">
                { for preview.visible.iter().map(|review| html! {
                    <li class="preview-review">
                        <strong>{ review.author.clone() }</strong>
                        { format!(" {}/10: ", format_rating(review.rating)) }
                        { review.text.clone() }
                    </li>
                }) }
            </ul>
            if preview.has_toggle() {
                <button type="button" class="toggle-reviews-btn" aria-expanded={preview.expanded.to_string()} onclick={on_toggle}>
                    { toggle_label }
                </button>
            }
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{ItemId, Review};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn summary(reviews: usize) -> ItemSummary {
        ItemSummary {
            id: ItemId::from(1),
            title: "Hollow Knight".into(),
            image: String::new(),
            creator: None,
            genres: vec!["Action".into()],
            rating: Some(9.0),
            description: Some("Bugs.".into()),
            reviews: (0..reviews)
                .map(|i| Review {
                    author: format!("author{i}"),
                    date: "01.01.2024".into(),
                    rating: 8.0,
                    text: "good".into(),
                })
                .collect(),
        }
    }

    fn render(reviews: usize) -> String {
        crate::i18n::set_lang("en");
        let props = Props {
            item: summary(reviews),
        };
        block_on(LocalServerRenderer::<ReviewPreviewCard>::with_props(props).render())
    }

    #[test]
    fn collapsed_card_shows_two_reviews_and_toggle() {
        let html = render(5);
        assert_eq!(html.matches("preview-review").count(), 2);
        assert!(html.contains("Show all reviews (3 more)"));
        assert!(html.contains("5 reviews"));
        assert!(!html.contains("author2"));
    }

    #[test]
    fn short_review_lists_have_no_toggle() {
        let html = render(1);
        assert!(!html.contains("toggle-reviews-btn"));
        assert!(html.contains("1 review"));
        assert!(render(0).contains("No reviews yet"));
    }
}
