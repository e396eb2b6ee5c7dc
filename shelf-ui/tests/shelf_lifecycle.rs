//! Drives `use_shelf_status` through a real VirtualDom: loading, settling,
//! re-rendering and teardown.

use dioxus::prelude::*;
use dioxus_core::{NoOpMutations, ScopeId, VirtualDom};
use shelf_common::{fixtures, BookCollections, ShelfError};
use shelf_ui::{use_shelf_status, BookshelfView, UNAVAILABLE_MESSAGE};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Fetch outcome a harness should produce. `None` never resolves.
type Outcome = Option<Result<BookCollections, ShelfError>>;

#[derive(Props, Clone)]
struct HarnessProps {
    calls: Rc<Cell<usize>>,
    outcome: Outcome,
}

impl PartialEq for HarnessProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.calls, &other.calls) && self.outcome == other.outcome
    }
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    let HarnessProps { calls, outcome } = props;
    let status = use_shelf_status(move || {
        let calls = calls.clone();
        let outcome = outcome.clone();
        async move {
            calls.set(calls.get() + 1);
            match outcome {
                Some(result) => result,
                None => std::future::pending().await,
            }
        }
    });

    rsx! {
        BookshelfView { status, year: 2023 }
    }
}

fn mount(outcome: Outcome) -> (VirtualDom, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            calls: calls.clone(),
            outcome,
        },
    );
    dom.rebuild_in_place();
    (dom, calls)
}

/// Drive the dom until the loading indicator is gone.
async fn settle(dom: &mut VirtualDom) {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            dom.wait_for_work().await;
            dom.render_immediate(&mut NoOpMutations);
            if !dioxus::ssr::render(dom).contains(r#"role="status""#) {
                break;
            }
        }
    })
    .await
    .expect("fetch never settled");
}

fn tile_count(html: &str) -> usize {
    html.matches(r#"data-testid="book-tile""#).count()
}

#[tokio::test]
async fn loading_until_fetch_resolves() {
    let (dom, _calls) = mount(None);
    let html = dioxus::ssr::render(&dom);
    assert!(html.contains("Loading"));
    assert_eq!(tile_count(&html), 0);
}

#[tokio::test]
async fn successful_fetch_renders_shelves() {
    let (mut dom, calls) = mount(Some(Ok(fixtures::collections(1, 2, 0))));
    settle(&mut dom).await;

    let html = dioxus::ssr::render(&dom);
    assert!(html.contains("Currently reading (1)"));
    assert!(html.contains("Read so far in 2023 (2)"));
    assert!(html.contains("All time favorites (0)"));
    assert_eq!(tile_count(&html), 3);
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn network_failure_ends_in_error() {
    let (mut dom, _calls) = mount(Some(Err(ShelfError::Network(
        "connection refused".to_string(),
    ))));
    settle(&mut dom).await;

    let html = dioxus::ssr::render(&dom);
    assert!(html.contains(UNAVAILABLE_MESSAGE));
    assert_eq!(tile_count(&html), 0);
}

#[tokio::test]
async fn invalid_json_ends_in_error() {
    let outcome = BookCollections::from_json(b"not json at all");
    assert!(outcome.is_err());

    let (mut dom, _calls) = mount(Some(outcome));
    settle(&mut dom).await;

    let html = dioxus::ssr::render(&dom);
    assert!(html.contains(UNAVAILABLE_MESSAGE));
    assert!(!html.contains("<h2"));
}

#[tokio::test]
async fn fetch_runs_once_across_rerenders() {
    let (mut dom, calls) = mount(Some(Ok(fixtures::collections(1, 0, 0))));
    settle(&mut dom).await;
    assert_eq!(calls.get(), 1);

    for _ in 0..3 {
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
    }

    let html = dioxus::ssr::render(&dom);
    assert!(html.contains("Currently reading (1)"));
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn teardown_before_resolution_is_quiet() {
    let (mut dom, calls) = mount(None);

    // Give the task a chance to start; it never resolves.
    let _ = tokio::time::timeout(Duration::from_millis(50), async {
        loop {
            dom.wait_for_work().await;
            dom.render_immediate(&mut NoOpMutations);
        }
    })
    .await;
    assert_eq!(calls.get(), 1);

    let html = dioxus::ssr::render(&dom);
    assert_eq!(tile_count(&html), 0);

    drop(dom);
    assert_eq!(calls.get(), 1);
}
