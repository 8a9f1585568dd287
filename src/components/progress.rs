use yew::prelude::*;

use super::CHECK;
use crate::model::{StepStatus, PROGRESS_STEPS};

fn status_class(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Completed => "step completed",
        StepStatus::Active => "step active",
        StepStatus::Pending => "step",
    }
}

/// Wizard header. Static: this page is always step 3.
#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    let last = PROGRESS_STEPS.len() - 1;
    html! {
      <div class="progress">
        <div class="steps">
          { for PROGRESS_STEPS.iter().enumerate().map(|(i, step)| html! {
              <div key={step.name} class={status_class(step.status)}>
                <div class="dot">
                  if step.status == StepStatus::Completed {
                    { CHECK }
                  } else {
                    { step.number.to_string() }
                  }
                </div>
                <span class="label">{ step.name }</span>
                if i < last {
                  <div class="connector"></div>
                }
              </div>
          }) }
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn renders_all_steps_with_select_skip_active() {
        let out = ServerRenderer::<ProgressBar>::new()
            .hydratable(false)
            .render()
            .await;
        for name in ["Postcode", "Waste Type", "Select Skip", "Permit Check", "Choose Date", "Payment"] {
            assert!(out.contains(name), "missing step {name}");
        }
        assert_eq!(out.matches("step completed").count(), 2);
        assert_eq!(out.matches("step active").count(), 1);
        assert_eq!(out.matches("class=\"connector\"").count(), 5);
    }
}
