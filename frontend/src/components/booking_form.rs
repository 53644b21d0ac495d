use shared::{BookingField, BookingFormState, LocationField};
use tracing::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::form_field::FormField;
use super::location_input::LocationInput;
use crate::hooks::use_booking_form::UseBookingFormActions;

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub state: BookingFormState,
    /// Shown while any field fails validation
    #[prop_or_default]
    pub banner: Option<AttrValue>,
    /// Earliest selectable date (UI hint only)
    pub min_date: AttrValue,
    pub actions: UseBookingFormActions,
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let draft = props.state.draft();
    let validation = props.state.validation();
    let is_valid = props.state.is_valid();

    // Every input is routed by its `name` attribute
    let on_input = {
        let update_field = props.actions.update_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match BookingField::from_name(&input.name()) {
                Ok(field) => update_field.emit((field, input.value())),
                Err(e) => warn!("{}", e),
            }
        })
    };

    let error_for = |field: BookingField| validation.message(field).map(AttrValue::from);
    let value_of = |field: BookingField| AttrValue::from(draft.value(field).to_string());

    let location_input = |location: LocationField| {
        html! {
            <LocationInput
                location={location}
                method={draft.location_method(location)}
                value={value_of(location.field())}
                error={error_for(location.field())}
                oninput={on_input.clone()}
                on_method_change={props.actions.set_location_method.clone()}
                on_confirm_map={props.actions.confirm_map_selection.clone()}
            />
        }
    };

    let on_book = {
        let submit = props.actions.submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    html! {
        <section class="card booking-section">
            <h2 class="section-title">{"📍 Book a Ride"}</h2>
            <form class="booking-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <div class="form-row two-columns">
                    <FormField
                        field={BookingField::Name}
                        input_type="text"
                        placeholder="Your Name"
                        value={value_of(BookingField::Name)}
                        error={error_for(BookingField::Name)}
                        oninput={on_input.clone()}
                    />
                    <FormField
                        field={BookingField::Phone}
                        input_type="tel"
                        placeholder="Phone Number"
                        value={value_of(BookingField::Phone)}
                        error={error_for(BookingField::Phone)}
                        oninput={on_input.clone()}
                    />
                </div>

                {location_input(LocationField::Pickup)}
                {location_input(LocationField::Destination)}

                <div class="form-row three-columns">
                    <FormField
                        field={BookingField::Date}
                        input_type="date"
                        value={value_of(BookingField::Date)}
                        error={error_for(BookingField::Date)}
                        min={props.min_date.clone()}
                        oninput={on_input.clone()}
                    />
                    <FormField
                        field={BookingField::Time}
                        input_type="time"
                        value={value_of(BookingField::Time)}
                        error={error_for(BookingField::Time)}
                        oninput={on_input.clone()}
                    />
                    <FormField
                        field={BookingField::Passengers}
                        input_type="number"
                        placeholder="Number of Passengers"
                        value={value_of(BookingField::Passengers)}
                        error={error_for(BookingField::Passengers)}
                        min="1"
                        oninput={on_input.clone()}
                    />
                </div>

                {if let Some(banner) = props.banner.as_ref() {
                    html! {
                        <div class="form-message error" role="alert">
                            {format!("⚠️ {}", banner)}
                        </div>
                    }
                } else { html! {} }}

                <button
                    type="button"
                    class={classes!("btn", "book-btn", if is_valid { "btn-whatsapp" } else { "btn-disabled" })}
                    onclick={on_book}
                    disabled={!is_valid}
                >
                    {"💬 Book via WhatsApp"}
                </button>
            </form>
        </section>
    }
}
