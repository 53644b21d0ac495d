use std::rc::Rc;

use shared::{
    BookingAction, BookingField, BookingFormService, BookingFormState, LocationField, LocationMethod,
    ServiceTier, SubmitOutcome,
};
use tracing::{debug, warn};
use yew::prelude::*;

use crate::services::navigation;

/// Booking state held by `use_reducer`; every dispatch goes through the shared service
#[derive(Clone, PartialEq)]
pub struct BookingFormStore {
    service: BookingFormService,
    state: BookingFormState,
}

impl BookingFormStore {
    fn new(service: BookingFormService) -> Self {
        let state = service.create_form_state();
        Self { service, state }
    }
}

impl Reducible for BookingFormStore {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let store = Rc::unwrap_or_clone(self);
        let state = store.service.apply(store.state, action);
        Rc::new(Self {
            service: store.service,
            state,
        })
    }
}

pub struct UseBookingFormResult {
    pub service: BookingFormService,
    pub state: BookingFormState,
    pub actions: UseBookingFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseBookingFormActions {
    pub update_field: Callback<(BookingField, String)>,
    pub select_service: Callback<ServiceTier>,
    pub set_location_method: Callback<(LocationField, LocationMethod)>,
    pub confirm_map_selection: Callback<LocationField>,
    pub submit: Callback<()>,
}

/// Hook owning the booking draft for the lifetime of the page
#[hook]
pub fn use_booking_form() -> UseBookingFormResult {
    let store = use_reducer(|| BookingFormStore::new(BookingFormService::new()));

    let update_field = {
        let store = store.clone();
        Callback::from(move |(field, value): (BookingField, String)| {
            store.dispatch(BookingAction::UpdateField(field, value));
        })
    };

    let select_service = {
        let store = store.clone();
        Callback::from(move |tier: ServiceTier| {
            store.dispatch(BookingAction::SelectService(tier));
        })
    };

    let set_location_method = {
        let store = store.clone();
        Callback::from(move |(location, method): (LocationField, LocationMethod)| {
            store.dispatch(BookingAction::SetLocationMethod(location, method));
        })
    };

    let confirm_map_selection = {
        let store = store.clone();
        Callback::from(move |location: LocationField| {
            store.dispatch(BookingAction::ConfirmMapSelection(location));
        })
    };

    let submit = {
        let store = store.clone();
        Callback::from(move |_: ()| match store.service.submit(&store.state) {
            SubmitOutcome::Opened(url) => {
                if let Err(e) = navigation::open_in_new_context(&url) {
                    warn!("Could not open booking link: {:#}", e);
                }
            }
            SubmitOutcome::Rejected => {
                debug!("Ignoring booking submit while the form is invalid");
            }
        })
    };

    UseBookingFormResult {
        service: store.service.clone(),
        state: store.state.clone(),
        actions: UseBookingFormActions {
            update_field,
            select_service,
            set_location_method,
            confirm_map_selection,
            submit,
        },
    }
}
