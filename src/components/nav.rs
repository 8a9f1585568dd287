use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub continue_enabled: bool,
    pub on_back: Callback<MouseEvent>,
    pub on_continue: Callback<MouseEvent>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
      <div class="nav">
        <button class="outline" onclick={props.on_back.clone()}>{ "← Back" }</button>
        <button
          class="primary"
          disabled={!props.continue_enabled}
          onclick={props.on_continue.clone()}
        >
          { "Continue →" }
        </button>
      </div>
    }
}
