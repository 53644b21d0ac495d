use shared::{BookingField, LocationField, LocationMethod, MapSelection};
use yew::prelude::*;

use super::form_field::FormField;

#[derive(Properties, PartialEq)]
pub struct LocationInputProps {
    pub location: LocationField,
    pub method: LocationMethod,
    pub value: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub oninput: Callback<InputEvent>,
    pub on_method_change: Callback<(LocationField, LocationMethod)>,
    pub on_confirm_map: Callback<LocationField>,
}

/// Pickup or destination input with a text / map mode switch.
///
/// Map mode is a placeholder: it shows an embedded map of Kigali and the
/// confirm button fills a fixed label rather than real coordinates.
#[function_component(LocationInput)]
pub fn location_input(props: &LocationInputProps) -> Html {
    let location = props.location;
    let field: BookingField = location.field();

    let mode_option = |method: LocationMethod, label: &'static str| {
        let on_method_change = props.on_method_change.clone();
        let id = format!("{}-{}", location.name(), method_id(method));
        html! {
            <label class="location-mode" for={id.clone()}>
                <input
                    type="radio"
                    id={id}
                    name={format!("{}-method", location.name())}
                    checked={props.method == method}
                    onchange={Callback::from(move |_: Event| on_method_change.emit((location, method)))}
                />
                {label}
            </label>
        }
    };

    html! {
        <div class="location-input">
            <span class="location-label">{format!("{} Location", location.label())}</span>
            <div class="location-modes">
                {mode_option(LocationMethod::Text, "Text Input")}
                {mode_option(LocationMethod::Map, "Map Selection")}
            </div>

            {match props.method {
                LocationMethod::Text => html! {
                    <FormField
                        field={field}
                        input_type="text"
                        placeholder={AttrValue::from(location.label())}
                        value={props.value.clone()}
                        error={props.error.clone()}
                        oninput={props.oninput.clone()}
                    />
                },
                LocationMethod::Map => {
                    let on_confirm_map = props.on_confirm_map.clone();
                    html! {
                        <div class="map-selection">
                            <iframe
                                class="map-embed"
                                title={format!("{} map", location.label())}
                                src={MapSelection::embed_url(location)}
                            />
                            <button
                                type="button"
                                class="btn btn-outline"
                                onclick={Callback::from(move |_: MouseEvent| on_confirm_map.emit(location))}
                            >
                                {"Confirm Location"}
                            </button>
                            {if !props.value.is_empty() {
                                html! { <p class="map-selected">{props.value.to_string()}</p> }
                            } else { html! {} }}
                            {if let Some(error) = props.error.as_ref() {
                                html! { <p class="field-error">{error.to_string()}</p> }
                            } else { html! {} }}
                        </div>
                    }
                }
            }}
        </div>
    }
}

fn method_id(method: LocationMethod) -> &'static str {
    match method {
        LocationMethod::Text => "text",
        LocationMethod::Map => "map",
    }
}
