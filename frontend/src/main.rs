use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::booking_form::BookingForm;
use components::contact_section::ContactSection;
use components::hero::Hero;
use components::rate_table::RateTable;
use hooks::use_booking_form::use_booking_form;
use services::date_utils;

#[function_component(App)]
fn app() -> Html {
    let booking = use_booking_form();
    let min_date = use_memo((), |_| date_utils::today_iso());

    let banner = booking
        .service
        .banner_message(booking.state.validation())
        .map(|message| AttrValue::from(message.to_string()));

    html! {
        <>
            <Hero />

            <main class="main">
                <div class="container">
                    <RateTable
                        selected={booking.state.draft().service}
                        on_select={booking.actions.select_service.clone()}
                    />

                    <BookingForm
                        state={booking.state.clone()}
                        banner={banner}
                        min_date={AttrValue::from((*min_date).clone())}
                        actions={booking.actions.clone()}
                    />

                    <ContactSection links={booking.service.links().clone()} />
                </div>
            </main>
        </>
    }
}

fn main() {
    services::logging::init();
    yew::Renderer::<App>::new().render();
}
