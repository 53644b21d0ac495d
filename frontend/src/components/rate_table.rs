use shared::ServiceTier;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RateTableProps {
    pub selected: ServiceTier,
    pub on_select: Callback<ServiceTier>,
}

#[function_component(RateTable)]
pub fn rate_table(props: &RateTableProps) -> Html {
    html! {
        <section class="card rates-section">
            <h2 class="section-title">{"🕒 Our Services & Rates"}</h2>
            <div class="rates-grid">
                {for ServiceTier::ALL.into_iter().map(|tier| {
                    let on_select = props.on_select.clone();
                    html! {
                        <div
                            key={tier.name()}
                            class={tile_class(tier == props.selected)}
                            onclick={Callback::from(move |_: MouseEvent| on_select.emit(tier))}
                        >
                            <h3 class="rate-name">{tier.name()}</h3>
                            <p class="rate-price">{tier.price_label()}</p>
                            <p class="rate-description">{tier.description()}</p>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}

fn tile_class(selected: bool) -> Classes {
    classes!("rate-tile", selected.then_some("selected"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_tile_is_highlighted() {
        assert!(tile_class(true).contains("selected"));
        assert!(!tile_class(false).contains("selected"));
    }
}
