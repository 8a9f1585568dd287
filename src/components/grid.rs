use std::rc::Rc;

use yew::prelude::*;

use super::{SkeletonCard, SkipCard};
use crate::model::Skip;

pub const SKELETON_COUNT: usize = 6;

#[derive(Properties, PartialEq)]
pub struct SkipGridProps {
    pub loading: bool,
    pub skips: Rc<Vec<Skip>>,
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    pub on_select: Callback<String>,
}

#[function_component(SkipGrid)]
pub fn skip_grid(props: &SkipGridProps) -> Html {
    if props.loading {
        return html! {
          <div class="grid">
            { for (0..SKELETON_COUNT).map(|i| html! { <SkeletonCard key={i.to_string()} /> }) }
          </div>
        };
    }

    html! {
      <div class="grid">
        { for props.skips.iter().map(|skip| {
            let selected = props.selected.as_deref() == Some(skip.id.as_str());
            html! {
              <SkipCard
                key={skip.id.clone()}
                skip={skip.clone()}
                {selected}
                on_select={props.on_select.clone()}
              />
            }
        }) }
      </div>
    }
}
