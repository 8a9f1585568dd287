use skip_selector::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
