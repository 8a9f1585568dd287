use yew::prelude::*;

use super::{CHECK, CLOCK, TRUCK};
use crate::model::{format_price, Skip};

#[derive(Properties, PartialEq)]
pub struct SkipCardProps {
    pub skip: Skip,
    pub selected: bool,
    /// Receives the skip id.
    pub on_select: Callback<String>,
}

#[function_component(SkipCard)]
pub fn skip_card(props: &SkipCardProps) -> Html {
    let skip = &props.skip;

    let on_card_click = {
        let on_select = props.on_select.clone();
        let id = skip.id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    // The card itself also selects, so keep the click from bubbling twice.
    let on_button_click = {
        let on_select = props.on_select.clone();
        let id = skip.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_select.emit(id.clone());
        })
    };

    let media = match &skip.image_url {
        Some(url) => html! { <img src={url.clone()} alt={skip.name.clone()} /> },
        None => html! {
          <div class="truck">
            <div>{ TRUCK }</div>
            <span class="badge secondary">{ skip.size.clone() }</span>
          </div>
        },
    };

    html! {
      <div class={classes!("card", props.selected.then_some("selected"))} onclick={on_card_click}>
        <div class="media">
          { media }
          if props.selected {
            <div class="check">{ CHECK }</div>
          }
        </div>
        <div class="body">
          <div class="row">
            <h3>{ skip.name.clone() }</h3>
            <span class="badge outline">{ skip.size.clone() }</span>
          </div>
          <div class="hire">
            { CLOCK }{ " " }{ format!("{} day hire period", skip.hire_period) }
          </div>
          <div class="price">{ format_price(skip.price) }</div>
          <button
            class={classes!("select", props.selected.then_some("on"))}
            onclick={on_button_click}
          >
            if props.selected {
              <>{ CHECK }{ " Selected" }</>
            } else {
              { "Select This Skip" }
            }
          </button>
        </div>
      </div>
    }
}

/// Placeholder with the same footprint as a [`SkipCard`].
#[function_component(SkeletonCard)]
pub fn skeleton_card() -> Html {
    html! {
      <div class="card skeleton-card">
        <div class="skeleton media"></div>
        <div class="body">
          <div class="skeleton" style="height:24px;width:96px;margin-bottom:8px;"></div>
          <div class="skeleton" style="height:16px;width:128px;margin-bottom:16px;"></div>
          <div class="skeleton" style="height:32px;width:80px;margin-bottom:16px;"></div>
          <div class="skeleton" style="height:40px;width:100%;"></div>
        </div>
      </div>
    }
}
