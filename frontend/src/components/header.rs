use yew::prelude::*;

/// Renders the application header
pub fn render_header(title: &str) -> Html {
    html! {
        <header class="app-header">
            <h1 class="title">{ title }</h1>
        </header>
    }
}
