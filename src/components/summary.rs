use yew::prelude::*;

use super::CHECK;
use crate::model::{format_price, Skip};

#[derive(Properties, PartialEq)]
pub struct SelectionSummaryProps {
    pub skip: Skip,
}

#[function_component(SelectionSummary)]
pub fn selection_summary(props: &SelectionSummaryProps) -> Html {
    let skip = &props.skip;
    html! {
      <div class="summary">
        <div>
          <h3>{ format!("Selected: {}", skip.name) }</h3>
          <p>{ format!("{} for {} days", format_price(skip.price), skip.hire_period) }</p>
        </div>
        <span>{ CHECK }</span>
      </div>
    }
}
