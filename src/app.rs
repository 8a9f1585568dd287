use std::cell::Cell;
use std::rc::Rc;

use gloo::console::{error, log};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{default_skips_url, fetch_skips, LoadError, LOAD_ERROR_MESSAGE};
use crate::components::{ErrorBanner, NavBar, ProgressBar, SelectionSummary, SkipGrid};
use crate::model::Skip;
use crate::state::{PageAction, PageState};

fn default_skips_attr() -> AttrValue {
    AttrValue::from(default_skips_url())
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_else(default_skips_attr)]
    pub skips_url: AttrValue,
    /// Next wizard step. Without one, Continue only logs the pick.
    #[prop_or_default]
    pub on_continue: Option<Callback<Skip>>,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

impl Default for AppProps {
    fn default() -> Self {
        Self {
            skips_url: default_skips_attr(),
            on_continue: None,
            on_back: None,
        }
    }
}

/// Maps the outcome of the one load per mount onto the page state. Every
/// failure ends in the built-in list with the same banner text.
pub fn load_action(result: Result<Vec<Skip>, LoadError>) -> PageAction {
    match result {
        Ok(skips) => PageAction::Loaded(skips),
        Err(_) => PageAction::Failed(LOAD_ERROR_MESSAGE.to_string()),
    }
}

/// Shared between a mount effect and the future it spawned; cleared on
/// teardown so late results go nowhere.
#[derive(Clone)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn teardown(&self) {
        self.0.set(false);
    }

    /// Hands `action` to `dispatch` only while still mounted.
    pub fn deliver<A>(&self, action: A, dispatch: impl FnOnce(A)) {
        if self.is_alive() {
            dispatch(action);
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_reducer(PageState::default);

    // Load once per mount. A response that lands after teardown is dropped.
    {
        let dispatcher = state.dispatcher();
        let url = props.skips_url.to_string();
        use_effect_with((), move |_| {
            let guard = MountGuard::new();
            {
                let guard = guard.clone();
                spawn_local(async move {
                    let result = fetch_skips(&url).await;
                    if let Err(e) = &result {
                        error!(format!("Error fetching skips: {e}"));
                    }
                    guard.deliver(load_action(result), |action| dispatcher.dispatch(action));
                });
            }
            move || guard.teardown()
        });
    }

    let on_select = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: String| dispatcher.dispatch(PageAction::Select(id)))
    };

    let on_continue = {
        let selected = state.selected_skip().cloned();
        let next = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(skip) = selected.clone() else { return };
            match &next {
                Some(next) => next.emit(skip),
                None => log!(format!("Continuing with skip: {}", skip.id)),
            }
        })
    };

    let on_back = {
        let back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(back) = &back {
                back.emit(());
            }
        })
    };

    html! {
      <PageView state={(*state).clone()} {on_select} {on_back} {on_continue} />
    }
}

#[derive(Properties, PartialEq)]
pub struct PageViewProps {
    pub state: PageState,
    pub on_select: Callback<String>,
    pub on_back: Callback<MouseEvent>,
    pub on_continue: Callback<MouseEvent>,
}

/// The whole page for a given state; [`App`] owns the state and effects.
#[function_component(PageView)]
pub fn page_view(props: &PageViewProps) -> Html {
    let state = &props.state;
    let skips = Rc::new(state.skips().to_vec());
    let selected = state.selected_id().map(|id| AttrValue::from(id.to_string()));

    html! {
      <div class="page">
        <ProgressBar />
        <main>
          <div class="hero">
            <h1>{ "Choose Your Skip Size" }</h1>
            <p>{ "Select the skip size that best suits your needs." }</p>
          </div>

          if let Some(message) = state.error() {
            <ErrorBanner message={message.to_string()} />
          }

          <SkipGrid
            loading={state.is_loading()}
            {skips}
            {selected}
            on_select={props.on_select.clone()}
          />

          if let Some(skip) = state.selected_skip() {
            <SelectionSummary skip={skip.clone()} />
          }

          <NavBar
            continue_enabled={state.continue_enabled()}
            on_back={props.on_back.clone()}
            on_continue={props.on_continue.clone()}
          />
        </main>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::raw_record_to_offering;
    use serde_json::json;
    use yew::ServerRenderer;

    async fn render_page(actions: Vec<PageAction>) -> String {
        ServerRenderer::<PageView>::with_props(move || {
            let state = actions
                .into_iter()
                .fold(Rc::new(PageState::default()), |s, a| s.reduce(a));
            PageViewProps {
                state: (*state).clone(),
                on_select: Callback::noop(),
                on_back: Callback::noop(),
                on_continue: Callback::noop(),
            }
        })
        .hydratable(false)
        .render()
        .await
    }

    fn live_skips() -> Vec<Skip> {
        vec![
            raw_record_to_offering(&json!({ "id": "a", "size": 4, "price": 211, "hire_period": 14 }), 0),
            raw_record_to_offering(&json!({ "id": "b", "size": 8, "price": 333, "hire_period": 7 }), 1),
        ]
    }

    #[test]
    fn successful_fetch_becomes_loaded() {
        match load_action(Ok(live_skips())) {
            PageAction::Loaded(skips) => {
                let ids: Vec<&str> = skips.iter().map(|s| s.id.as_str()).collect();
                assert_eq!(ids, vec!["a", "b"]);
            }
            _ => panic!("expected a loaded list"),
        }
    }

    #[test]
    fn http_error_becomes_failed_with_banner_text() {
        match load_action(Err(LoadError::Status(500))) {
            PageAction::Failed(message) => assert_eq!(message, LOAD_ERROR_MESSAGE),
            _ => panic!("expected a failure"),
        }
    }

    #[test]
    fn malformed_body_becomes_failed_with_fallback_list() {
        let parse_err = crate::api::parse_skips("{not json").unwrap_err();
        assert!(matches!(parse_err, LoadError::Parse(_)));
        let state = Rc::new(PageState::default()).reduce(load_action(Err(parse_err)));
        assert_eq!(state.error(), Some(LOAD_ERROR_MESSAGE));
        assert_eq!(state.skips().len(), 6);
        assert!(!state.is_loading());
    }

    #[test]
    fn mounted_guard_delivers_once() {
        let guard = MountGuard::new();
        let mut delivered = Vec::new();
        guard.deliver(load_action(Ok(vec![])), |a| delivered.push(a));
        assert_eq!(delivered.len(), 1);
    }

    #[test]
    fn response_after_teardown_is_dropped() {
        let guard = MountGuard::new();
        let in_flight = guard.clone();
        guard.teardown();
        assert!(!in_flight.is_alive());

        let mut delivered = Vec::new();
        in_flight.deliver(load_action(Err(LoadError::Status(503))), |a| delivered.push(a));
        assert!(delivered.is_empty());
    }

    #[tokio::test]
    async fn app_mounts_into_loading_state() {
        let out = ServerRenderer::<App>::new().hydratable(false).render().await;
        assert!(out.contains("Choose Your Skip Size"));
        assert_eq!(out.matches("skeleton-card").count(), 6);
        assert!(!out.contains("class=\"summary\""));
        assert!(!out.contains("class=\"banner\""));
        assert!(out.contains("disabled"));
    }

    #[tokio::test]
    async fn loaded_page_without_selection() {
        let out = render_page(vec![PageAction::Loaded(live_skips())]).await;
        assert!(out.contains("£211"));
        assert!(out.contains("£333"));
        assert!(!out.contains("class=\"summary\""));
        assert!(!out.contains("class=\"banner\""));
        assert!(out.contains("disabled"));
    }

    #[tokio::test]
    async fn summary_tracks_the_selected_skip() {
        let out = render_page(vec![
            PageAction::Loaded(live_skips()),
            PageAction::Select("a".into()),
            PageAction::Select("b".into()),
        ])
        .await;
        assert!(out.contains("Selected: 8 Yard Skip"));
        assert!(out.contains("£333 for 7 days"));
        assert!(!out.contains("Selected: 4 Yard Skip"));
        assert!(!out.contains("disabled"));
    }

    #[tokio::test]
    async fn failed_load_shows_banner_and_fallback() {
        let out = render_page(vec![PageAction::Failed(LOAD_ERROR_MESSAGE.to_string())]).await;
        assert!(out.contains(LOAD_ERROR_MESSAGE));
        for price in ["£227", "£300", "£325", "£350", "£375", "£400"] {
            assert!(out.contains(price), "missing {price}");
        }
    }

    #[tokio::test]
    async fn empty_list_keeps_continue_disabled() {
        let out = render_page(vec![PageAction::Loaded(vec![])]).await;
        assert!(!out.contains("class=\"card"));
        assert!(out.contains("disabled"));
    }
}
