use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="container">
                <h1>{"Pro Cab Services"}</h1>
                <p class="hero-tagline">{"Safe, Reliable, and Comfortable Transportation in Rwanda"}</p>
            </div>
        </header>
    }
}
