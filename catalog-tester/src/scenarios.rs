//! QA scenarios driven through the same store and runtime the web front end uses.
use anyhow::{Context, Result, bail, ensure};
use async_trait::async_trait;
use catalog_core::{
    Action, ApiError, CatalogRuntime, DraftField, ItemId, ItemSummary, ListState, Notice,
    RecordingPrompter, ReviewError,
};

use crate::backend::Backend;

pub type Runtime = CatalogRuntime<Backend, RecordingPrompter>;

const QA_AUTHOR: &str = "QA Tester";

#[async_trait(?Send)]
pub trait Scenario {
    async fn run(&self, rt: &mut Runtime) -> Result<()>;
}

/// Registry of `(key, description)` pairs, in run order for `all`.
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Load the list and open the first item's details"),
        ("filters", "Toggle a genre filter, verify narrowing, then reset"),
        ("review-roundtrip", "Add a review, verify it, then delete it again"),
        ("declined-delete", "Decline a delete confirmation; nothing changes"),
        ("validation", "Invalid drafts are rejected locally and kept"),
        ("error-paths", "Missing items and bad indices raise alerts"),
    ]
}

pub fn get_scenario(name: &str) -> Option<Box<dyn Scenario>> {
    match name {
        "smoke" => Some(Box::new(Smoke)),
        "filters" => Some(Box::new(Filters)),
        "review-roundtrip" => Some(Box::new(ReviewRoundtrip)),
        "declined-delete" => Some(Box::new(DeclinedDelete)),
        "validation" => Some(Box::new(Validation)),
        "error-paths" => Some(Box::new(ErrorPaths)),
        _ => None,
    }
}

fn loaded_items(rt: &Runtime) -> Result<Vec<ItemSummary>> {
    match rt.store().list() {
        ListState::Loaded(items) => Ok(items.clone()),
        ListState::Empty => bail!("{} list is empty", rt.store().kind()),
        ListState::Failed { reason } => bail!("{} list failed: {reason}", rt.store().kind()),
        ListState::Loading => bail!("{} list never finished loading", rt.store().kind()),
    }
}

async fn open_first_item(rt: &mut Runtime) -> Result<ItemId> {
    rt.load().await;
    let first = loaded_items(rt)?
        .into_iter()
        .next()
        .context("no items listed")?;
    rt.show_item_details(first.id.clone()).await;
    let opened = rt
        .store()
        .modal()
        .item()
        .context("detail modal did not open")?;
    ensure!(
        opened.id == first.id,
        "opened item {} instead of {}",
        opened.id,
        first.id
    );
    Ok(first.id)
}

fn review_authors(rt: &Runtime) -> Result<Vec<String>> {
    let item = rt.store().modal().item().context("detail modal is closed")?;
    Ok(item.reviews.iter().map(|r| r.author.clone()).collect())
}

async fn fill_draft(rt: &mut Runtime, author: &str, text: &str, rating: &str) {
    for (field, value) in [
        (DraftField::Author, author),
        (DraftField::Text, text),
        (DraftField::Rating, rating),
    ] {
        rt.dispatch(Action::EditDraft {
            field,
            value: value.to_string(),
        })
        .await;
    }
}

fn expect_no_alerts(rt: &Runtime) -> Result<()> {
    let alerts = rt.prompter().take_alerts();
    if let Some(first) = alerts.first() {
        bail!("unexpected alert: {first}");
    }
    Ok(())
}

struct Smoke;

#[async_trait(?Send)]
impl Scenario for Smoke {
    async fn run(&self, rt: &mut Runtime) -> Result<()> {
        let id = open_first_item(rt).await?;
        let summary = rt
            .store()
            .list()
            .find(&id)
            .cloned()
            .context("opened item vanished from the list")?;
        let item = rt.store().modal().item().context("detail modal is closed")?;
        ensure!(
            item.title == summary.title,
            "detail title {:?} differs from card title {:?}",
            item.title,
            summary.title
        );
        expect_no_alerts(rt)?;
        rt.close_modal().await;
        ensure!(!rt.store().modal().is_visible(), "modal stayed open");
        Ok(())
    }
}

struct Filters;

#[async_trait(?Send)]
impl Scenario for Filters {
    async fn run(&self, rt: &mut Runtime) -> Result<()> {
        rt.load().await;
        let all = loaded_items(rt)?;
        let genre = all
            .iter()
            .flat_map(|item| item.genres.iter())
            .next()
            .cloned()
            .context("no listed item carries a genre")?;

        rt.toggle_filter("genre", &genre).await;
        ensure!(
            rt.store().filters().is_active("genre", &genre),
            "genre {genre} not marked active"
        );
        let narrowed = loaded_items(rt)?;
        ensure!(narrowed.len() <= all.len(), "filtering grew the list");
        for item in &narrowed {
            ensure!(
                item.genres.iter().any(|g| g.eq_ignore_ascii_case(&genre)),
                "{} listed without genre {genre}",
                item.title
            );
        }

        rt.toggle_filter("genre", &genre).await;
        ensure!(
            rt.store().filters().is_empty(),
            "second toggle did not clear the genre"
        );

        rt.toggle_filter("genre", &genre).await;
        rt.reset_filters().await;
        ensure!(rt.store().filters().is_empty(), "reset kept a filter");
        let restored = loaded_items(rt)?;
        ensure!(
            restored.len() == all.len(),
            "reset listed {} items, expected {}",
            restored.len(),
            all.len()
        );
        expect_no_alerts(rt)
    }
}

struct ReviewRoundtrip;

#[async_trait(?Send)]
impl Scenario for ReviewRoundtrip {
    async fn run(&self, rt: &mut Runtime) -> Result<()> {
        let id = open_first_item(rt).await?;
        let before = review_authors(rt)?;

        fill_draft(rt, QA_AUTHOR, "Automated review", "7").await;
        rt.submit_review(id.clone()).await;
        expect_no_alerts(rt)?;
        ensure!(rt.store().draft().is_blank(), "draft kept after success");
        let after = review_authors(rt)?;
        ensure!(
            after.len() == before.len() + 1,
            "expected {} reviews, found {}",
            before.len() + 1,
            after.len()
        );
        ensure!(
            after.last().map(String::as_str) == Some(QA_AUTHOR),
            "new review is not last"
        );

        rt.delete_review(id, before.len()).await;
        expect_no_alerts(rt)?;
        ensure!(rt.prompter().confirmations() == 1, "delete was not confirmed");
        ensure!(
            review_authors(rt)? == before,
            "reviews differ after deleting the added one"
        );
        Ok(())
    }
}

struct DeclinedDelete;

#[async_trait(?Send)]
impl Scenario for DeclinedDelete {
    async fn run(&self, rt: &mut Runtime) -> Result<()> {
        rt.prompter().set_approve(false);
        let id = open_first_item(rt).await?;
        let before = review_authors(rt)?;

        rt.delete_review(id, 0).await;
        ensure!(
            rt.prompter().confirmations() == 1,
            "confirmation was not requested"
        );
        ensure!(review_authors(rt)? == before, "declined delete changed reviews");
        expect_no_alerts(rt)
    }
}

struct Validation;

#[async_trait(?Send)]
impl Scenario for Validation {
    async fn run(&self, rt: &mut Runtime) -> Result<()> {
        let id = open_first_item(rt).await?;
        let before = review_authors(rt)?;

        fill_draft(rt, "", "No author", "5").await;
        rt.submit_review(id.clone()).await;
        let alerts = rt.prompter().take_alerts();
        ensure!(
            matches!(
                alerts.as_slice(),
                [Notice::InvalidReview(ReviewError::MissingField(
                    DraftField::Author
                ))]
            ),
            "blank author raised {alerts:?}"
        );
        ensure!(
            rt.store().draft().get(DraftField::Text) == "No author",
            "rejected draft was cleared"
        );

        fill_draft(rt, QA_AUTHOR, "Too high", "11").await;
        rt.submit_review(id).await;
        let alerts = rt.prompter().take_alerts();
        ensure!(
            matches!(
                alerts.as_slice(),
                [Notice::InvalidReview(ReviewError::OutOfRange { .. })]
            ),
            "out-of-range rating raised {alerts:?}"
        );
        ensure!(review_authors(rt)? == before, "invalid draft reached the server");
        Ok(())
    }
}

struct ErrorPaths;

#[async_trait(?Send)]
impl Scenario for ErrorPaths {
    async fn run(&self, rt: &mut Runtime) -> Result<()> {
        let id = open_first_item(rt).await?;
        let before = review_authors(rt)?;

        rt.delete_review(id.clone(), before.len() + 100).await;
        let alerts = rt.prompter().take_alerts();
        ensure!(
            matches!(alerts.as_slice(), [Notice::ReviewNotDeleted { .. }]),
            "bad index raised {alerts:?}"
        );
        ensure!(review_authors(rt)? == before, "failed delete changed reviews");

        rt.close_modal().await;
        rt.show_item_details(ItemId::new("qa-missing-item")).await;
        let alerts = rt.prompter().take_alerts();
        ensure!(
            alerts == [Notice::DetailUnavailable],
            "missing item raised {alerts:?}"
        );
        ensure!(
            !rt.store().modal().is_visible(),
            "modal opened for a missing item"
        );

        if let Some(memory) = rt.api().memory() {
            memory.fail_next(ApiError::Network("injected".to_string()));
            rt.load().await;
            ensure!(
                matches!(rt.store().list(), ListState::Failed { .. }),
                "injected network failure did not surface"
            );
        } else {
            log::info!("skipping injected list failure against a live API");
        }
        Ok(())
    }
}
