use catalog_core::{
    ApiError, CatalogItem, CatalogKind, CatalogRuntime, CatalogStore, DraftField, ItemId,
    ListState, MemoryCatalog, Notice, RecordingPrompter, Review,
};
use futures::executor::block_on;

type Runtime = CatalogRuntime<MemoryCatalog, RecordingPrompter>;

fn movie(id: u64, title: &str, genres: &[&str], authors: &[&str]) -> CatalogItem {
    let mut item = CatalogItem {
        id: ItemId::from(id),
        title: title.to_string(),
        image: format!("/static/images/{id}.jpg"),
        creator: Some("Director".to_string()),
        genres: genres.iter().map(|g| (*g).to_string()).collect(),
        rating: 0.0,
        description: format!("About {title}"),
        reviews: authors
            .iter()
            .map(|author| Review {
                author: (*author).to_string(),
                date: "01.01.2024".to_string(),
                rating: 7.0,
                text: format!("{author} liked it"),
            })
            .collect(),
    };
    item.rating = item.average_rating();
    item
}

fn runtime() -> Runtime {
    let catalog = MemoryCatalog::new()
        .with_items(
            CatalogKind::Movies,
            vec![
                movie(7, "X", &["drama"], &["a", "b", "c"]),
                movie(8, "Y", &["comedy"], &[]),
                movie(9, "Z", &["comedy", "drama"], &["d"]),
            ],
        )
        .with_clock(|| "02.02.2024".to_string());
    CatalogRuntime::new(
        CatalogStore::new(CatalogKind::Movies),
        catalog,
        RecordingPrompter::approving(),
    )
}

fn listed_ids(rt: &Runtime) -> Vec<String> {
    rt.store()
        .list()
        .items()
        .iter()
        .map(|item| item.id.to_string())
        .collect()
}

fn authors(rt: &Runtime) -> Vec<String> {
    rt.store()
        .modal()
        .item()
        .map(|item| item.reviews.iter().map(|r| r.author.clone()).collect())
        .unwrap_or_default()
}

fn fill_draft(rt: &mut Runtime, author: &str, text: &str, rating: &str) {
    for (field, value) in [
        (DraftField::Author, author),
        (DraftField::Text, text),
        (DraftField::Rating, rating),
    ] {
        block_on(rt.dispatch(catalog_core::Action::EditDraft {
            field,
            value: value.to_string(),
        }));
    }
}

#[test]
fn initial_load_lists_every_item() {
    let mut rt = runtime();
    block_on(rt.load());
    assert_eq!(listed_ids(&rt), vec!["7", "8", "9"]);
    assert_eq!(rt.api().requests(), vec!["GET /api/movies".to_string()]);
}

#[test]
fn genre_filter_sends_query_and_narrows_list() {
    let mut rt = runtime();
    block_on(rt.load());
    block_on(rt.toggle_filter("genre", "drama"));
    assert_eq!(listed_ids(&rt), vec!["7", "9"]);

    let card = rt.store().list().items()[0].clone();
    assert_eq!(card.title, "X");
    assert_eq!(card.genres, vec!["drama".to_string()]);

    block_on(rt.show_item_details(card.id));
    let requests = rt.api().requests();
    assert_eq!(requests[1], "GET /api/movies?genre=drama");
    assert_eq!(requests[2], "GET /api/movies/7");
    assert_eq!(rt.store().modal().item().map(|i| i.title.as_str()), Some("X"));
}

#[test]
fn toggling_active_value_and_reset_clear_the_selection() {
    let mut rt = runtime();
    block_on(rt.toggle_filter("genre", "comedy"));
    block_on(rt.toggle_filter("genre", "drama"));
    assert_eq!(rt.store().filters().get("genre"), Some("drama"));
    assert_eq!(rt.store().filters().len(), 1);

    block_on(rt.toggle_filter("genre", "drama"));
    assert!(rt.store().filters().is_empty());

    block_on(rt.toggle_filter("min_reviews", "1"));
    block_on(rt.toggle_filter("genre", "comedy"));
    assert_eq!(listed_ids(&rt), vec!["9"]);

    block_on(rt.reset_filters());
    assert!(rt.store().filters().is_empty());
    assert_eq!(listed_ids(&rt), vec!["7", "8", "9"]);
}

#[test]
fn empty_result_maps_to_empty_state() {
    let mut rt = runtime();
    block_on(rt.toggle_filter("genre", "western"));
    assert_eq!(rt.store().list(), &ListState::Empty);
}

#[test]
fn valid_review_clears_form_and_reloads_detail() {
    let mut rt = runtime();
    let id = ItemId::from(8);
    block_on(rt.show_item_details(id.clone()));
    fill_draft(&mut rt, "Ann", "Funny", "6.5");
    block_on(rt.submit_review(id.clone()));

    assert!(rt.prompter().alerts().is_empty());
    assert!(rt.store().draft().is_blank());
    let item = rt.store().modal().item().expect("modal open");
    assert_eq!(item.reviews.len(), 1);
    assert_eq!(item.reviews[0].date, "02.02.2024");
    assert!((item.rating - 6.5).abs() < 1e-9);
    assert_eq!(
        rt.api().requests().last().map(String::as_str),
        Some("GET /api/movies/8")
    );
}

#[test]
fn invalid_draft_alerts_and_sends_nothing() {
    let mut rt = runtime();
    let id = ItemId::from(8);
    block_on(rt.show_item_details(id.clone()));
    fill_draft(&mut rt, "Ann", "", "6");
    let before = rt.api().requests().len();
    block_on(rt.submit_review(id));

    assert_eq!(rt.api().requests().len(), before);
    assert!(matches!(
        rt.prompter().alerts().as_slice(),
        [Notice::InvalidReview(_)]
    ));
    assert_eq!(rt.store().draft().get(DraftField::Author), "Ann");
}

#[test]
fn confirmed_delete_shifts_later_reviews_down() {
    let mut rt = runtime();
    let id = ItemId::from(7);
    block_on(rt.show_item_details(id.clone()));
    assert_eq!(authors(&rt), vec!["a", "b", "c"]);

    block_on(rt.delete_review(id, 1));
    assert_eq!(rt.prompter().confirmations(), 1);
    assert_eq!(authors(&rt), vec!["a", "c"]);
    assert!(
        rt.api()
            .requests()
            .contains(&"DELETE /api/movies/7/reviews/1".to_string())
    );
}

#[test]
fn declined_delete_sends_nothing() {
    let mut rt = runtime();
    rt.prompter().set_approve(false);
    let id = ItemId::from(7);
    block_on(rt.show_item_details(id.clone()));
    let before = rt.api().requests().len();

    block_on(rt.delete_review(id, 0));
    assert_eq!(rt.prompter().confirmations(), 1);
    assert_eq!(rt.api().requests().len(), before);
    assert_eq!(authors(&rt), vec!["a", "b", "c"]);
}

#[test]
fn server_errors_alert_without_mutating_rendered_state() {
    let mut rt = runtime();
    block_on(rt.load());
    let id = ItemId::from(7);
    block_on(rt.show_item_details(id.clone()));

    rt.api().fail_next(ApiError::Status {
        status: 500,
        message: "boom".to_string(),
    });
    fill_draft(&mut rt, "Ann", "Nice", "7");
    block_on(rt.submit_review(id.clone()));
    assert_eq!(authors(&rt), vec!["a", "b", "c"]);
    assert_eq!(rt.store().draft().get(DraftField::Text), "Nice");

    block_on(rt.delete_review(id.clone(), 5));
    assert_eq!(authors(&rt), vec!["a", "b", "c"]);

    rt.api().fail_next(ApiError::Network("offline".to_string()));
    block_on(rt.show_item_details(id));
    assert_eq!(authors(&rt), vec!["a", "b", "c"]);

    assert_eq!(
        rt.prompter().take_alerts(),
        vec![
            Notice::ReviewNotAdded {
                reason: "boom".to_string()
            },
            Notice::ReviewNotDeleted {
                reason: "Review not found".to_string()
            },
            Notice::DetailUnavailable,
        ]
    );
}

#[test]
fn failed_list_load_reports_reason() {
    let mut rt = runtime();
    rt.api().fail_next(ApiError::Network("offline".to_string()));
    block_on(rt.load());
    assert_eq!(
        rt.store().list(),
        &ListState::Failed {
            reason: "network error: offline".to_string()
        }
    );
}

#[test]
fn closing_the_modal_hides_the_detail() {
    let mut rt = runtime();
    block_on(rt.show_item_details(ItemId::from(9)));
    assert!(rt.store().modal().is_visible());
    block_on(rt.close_modal());
    assert!(!rt.store().modal().is_visible());
}
