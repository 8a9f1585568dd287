use std::rc::Rc;

use yew::prelude::*;

use crate::model::{fallback_skips, Skip};

/// Where the page is in loading its offerings.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Rc<Vec<Skip>>),
    Failed { skips: Rc<Vec<Skip>>, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Selected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub load: LoadState,
    pub selection: Selection,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            load: LoadState::Loading,
            selection: Selection::Empty,
        }
    }
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Offerings on screen; empty while loading.
    pub fn skips(&self) -> &[Skip] {
        match &self.load {
            LoadState::Loading => &[],
            LoadState::Loaded(skips) | LoadState::Failed { skips, .. } => skips.as_slice(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        match &self.selection {
            Selection::Empty => None,
            Selection::Selected(id) => Some(id.as_str()),
        }
    }

    pub fn selected_skip(&self) -> Option<&Skip> {
        let id = self.selected_id()?;
        self.skips().iter().find(|s| s.id == id)
    }

    pub fn continue_enabled(&self) -> bool {
        self.selected_skip().is_some()
    }
}

pub enum PageAction {
    Loaded(Vec<Skip>),
    /// Load failed; the built-in list is shown with this message.
    Failed(String),
    Select(String),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: PageAction) -> Rc<Self> {
        match action {
            // The list is fixed once the first response lands.
            PageAction::Loaded(_) | PageAction::Failed(_) if !self.is_loading() => self,
            PageAction::Loaded(skips) => Rc::new(PageState {
                load: LoadState::Loaded(Rc::new(skips)),
                selection: Selection::Empty,
            }),
            PageAction::Failed(message) => Rc::new(PageState {
                load: LoadState::Failed {
                    skips: Rc::new(fallback_skips()),
                    message,
                },
                selection: Selection::Empty,
            }),
            PageAction::Select(id) => {
                if self.selected_id() == Some(id.as_str())
                    || !self.skips().iter().any(|s| s.id == id)
                {
                    return self;
                }
                Rc::new(PageState {
                    load: self.load.clone(),
                    selection: Selection::Selected(id),
                })
            }
        }
    }
}
