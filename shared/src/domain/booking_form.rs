//! Booking form controller.
//!
//! Owns the rules for the ride request form: field transitions, validation and
//! the hand-off to the messaging deep link. Transitions are pure reductions
//! (old state + action -> new state) and validation is recomputed on every one
//! of them, so a `BookingFormState` never carries a stale `ValidationResult`.

use tracing::{debug, info};

use super::deep_links::DeepLinkBuilder;
use super::map_selection::MapSelection;
use crate::{
    BookingDraft, BookingField, BookingFormConfig, BookingValidationError, LocationField,
    LocationMethod, ServiceTier, SubmitOutcome, ValidationResult,
};

/// A single change requested by the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingAction {
    UpdateField(BookingField, String),
    SelectService(ServiceTier),
    SetLocationMethod(LocationField, LocationMethod),
    ConfirmMapSelection(LocationField),
}

/// Current draft together with the validation derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingFormState {
    draft: BookingDraft,
    validation: ValidationResult,
}

impl BookingFormState {
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }
}

/// Booking form service that handles all booking-related business logic
#[derive(Debug, Clone, PartialEq)]
pub struct BookingFormService {
    config: BookingFormConfig,
    links: DeepLinkBuilder,
}

impl BookingFormService {
    pub fn new() -> Self {
        Self::with_config(BookingFormConfig::default())
    }

    pub fn with_config(config: BookingFormConfig) -> Self {
        let links = DeepLinkBuilder::new(&config);
        Self { config, links }
    }

    /// Fresh form state: empty fields, default service, text location inputs
    pub fn create_form_state(&self) -> BookingFormState {
        self.with_validation(BookingDraft::default())
    }

    /// Apply one action and recompute validation
    pub fn apply(&self, state: BookingFormState, action: BookingAction) -> BookingFormState {
        debug!("Applying booking action: {:?}", action);

        let draft = match action {
            BookingAction::UpdateField(field, value) => self.update_field(state.draft, field, value),
            BookingAction::SelectService(tier) => self.select_service(state.draft, tier),
            BookingAction::SetLocationMethod(location, method) => {
                self.set_location_method(state.draft, location, method)
            }
            BookingAction::ConfirmMapSelection(location) => {
                self.confirm_map_selection(state.draft, location)
            }
        };

        self.with_validation(draft)
    }

    /// Replace a single field, leaving the rest of the draft untouched
    pub fn update_field(&self, mut draft: BookingDraft, field: BookingField, value: String) -> BookingDraft {
        *draft.value_mut(field) = value;
        draft
    }

    /// Select a rate table tier
    pub fn select_service(&self, mut draft: BookingDraft, tier: ServiceTier) -> BookingDraft {
        draft.service = tier;
        draft
    }

    /// Switch how a location is entered. Changing the method clears that location.
    pub fn set_location_method(
        &self,
        mut draft: BookingDraft,
        location: LocationField,
        method: LocationMethod,
    ) -> BookingDraft {
        if draft.location_method(location) != method {
            *draft.location_method_mut(location) = method;
            draft.value_mut(location.field()).clear();
        }
        draft
    }

    /// Fill a location from the map placeholder
    pub fn confirm_map_selection(&self, mut draft: BookingDraft, location: LocationField) -> BookingDraft {
        *draft.value_mut(location.field()) = MapSelection::placeholder_label(location);
        draft
    }

    /// Check every required field. All rules run; nothing short-circuits.
    pub fn validate(&self, draft: &BookingDraft) -> ValidationResult {
        let mut errors = Vec::new();

        if draft.name.trim().is_empty() {
            errors.push(BookingValidationError::MissingName);
        }
        if draft.phone.trim().is_empty() {
            errors.push(BookingValidationError::MissingPhone);
        }
        if draft.pickup.trim().is_empty() {
            errors.push(BookingValidationError::MissingPickup);
        }
        if draft.destination.trim().is_empty() {
            errors.push(BookingValidationError::MissingDestination);
        }
        if draft.date.is_empty() {
            errors.push(BookingValidationError::MissingDate);
        }
        if draft.time.is_empty() {
            errors.push(BookingValidationError::MissingTime);
        }
        if self.parse_passengers(&draft.passengers).is_none() {
            errors.push(BookingValidationError::InvalidPassengers);
        }

        ValidationResult::from_errors(errors)
    }

    /// Passenger count, if the input is a whole number at or above the minimum
    pub fn parse_passengers(&self, input: &str) -> Option<u32> {
        input
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|count| *count >= i64::from(self.config.min_passengers))
            .and_then(|count| u32::try_from(count).ok())
    }

    /// Human-readable booking request sent to the business
    pub fn compose_message(&self, draft: &BookingDraft) -> String {
        format!(
            "Hello! I'd like to book a cab:\n\
             Service: {}\n\
             Name: {}\n\
             Phone: {}\n\
             Pickup: {}\n\
             Destination: {}\n\
             Date: {}\n\
             Time: {}\n\
             Passengers: {}",
            draft.service,
            draft.name,
            draft.phone,
            draft.pickup,
            draft.destination,
            draft.date,
            draft.time,
            draft.passengers,
        )
    }

    /// Build the booking deep link. Invalid drafts are rejected without side effects.
    pub fn submit(&self, state: &BookingFormState) -> SubmitOutcome {
        if !state.is_valid() {
            debug!(
                "Booking submit rejected with {} invalid field(s)",
                state.validation.errors.len()
            );
            return SubmitOutcome::Rejected;
        }

        let message = self.compose_message(&state.draft);
        info!("Booking request ready for {}", state.draft.service);
        SubmitOutcome::Opened(self.links.booking_link(&message))
    }

    /// Banner shown above the submit button while anything is invalid
    pub fn banner_message(&self, validation: &ValidationResult) -> Option<&str> {
        (!validation.is_valid).then_some(self.config.banner_message.as_str())
    }

    pub fn links(&self) -> &DeepLinkBuilder {
        &self.links
    }

    pub fn get_config(&self) -> &BookingFormConfig {
        &self.config
    }

    fn with_validation(&self, draft: BookingDraft) -> BookingFormState {
        let validation = self.validate(&draft);
        BookingFormState { draft, validation }
    }
}

impl Default for BookingFormService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> BookingFormService {
        BookingFormService::new()
    }

    fn fill(service: &BookingFormService, values: &[(BookingField, &str)]) -> BookingFormState {
        values.iter().fold(service.create_form_state(), |state, (field, value)| {
            service.apply(state, BookingAction::UpdateField(*field, value.to_string()))
        })
    }

    fn complete_values() -> Vec<(BookingField, &'static str)> {
        vec![
            (BookingField::Name, "Jean"),
            (BookingField::Phone, "0788123456"),
            (BookingField::Pickup, "Kigali Heights"),
            (BookingField::Destination, "Kigali Airport"),
            (BookingField::Date, "2024-06-01"),
            (BookingField::Time, "14:30"),
            (BookingField::Passengers, "2"),
        ]
    }

    #[test]
    fn test_initial_state_is_invalid_for_every_field() {
        let service = create_test_service();

        let state = service.create_form_state();

        assert!(!state.is_valid());
        assert_eq!(state.validation().errors.len(), 7);
        for field in BookingField::ALL {
            assert!(state.validation().error(field).is_some(), "missing error for {:?}", field);
        }
    }

    #[test]
    fn test_complete_draft_is_valid() {
        let service = create_test_service();

        let state = fill(&service, &complete_values());

        assert!(state.is_valid());
        assert!(state.validation().errors.is_empty());
        assert_eq!(service.banner_message(state.validation()), None);
    }

    #[test]
    fn test_errors_cover_exactly_the_missing_fields() {
        let service = create_test_service();
        let values: Vec<_> = complete_values()
            .into_iter()
            .filter(|(field, _)| !matches!(field, BookingField::Phone | BookingField::Time))
            .collect();

        let state = fill(&service, &values);

        assert!(!state.is_valid());
        let failing: Vec<_> = state.validation().errors.keys().copied().collect();
        assert_eq!(failing, vec![BookingField::Phone, BookingField::Time]);
        assert_eq!(
            state.validation().message(BookingField::Time),
            Some("Time is required".to_string())
        );
    }

    #[test]
    fn test_whitespace_only_text_fields_are_missing() {
        let service = create_test_service();
        let mut values = complete_values();
        values[0] = (BookingField::Name, "   ");
        values[3] = (BookingField::Destination, "\t");

        let state = fill(&service, &values);

        let failing: Vec<_> = state.validation().errors.keys().copied().collect();
        assert_eq!(failing, vec![BookingField::Name, BookingField::Destination]);
    }

    #[test]
    fn test_passenger_rules() {
        let service = create_test_service();

        for bad in ["0", "-1", "", "  ", "abc", "1.5"] {
            let mut values = complete_values();
            values[6] = (BookingField::Passengers, bad);
            let state = fill(&service, &values);
            assert_eq!(
                state.validation().error(BookingField::Passengers),
                Some(&BookingValidationError::InvalidPassengers),
                "passengers = {:?}",
                bad
            );
        }

        let mut values = complete_values();
        values[6] = (BookingField::Passengers, "1");
        assert!(fill(&service, &values).is_valid());

        assert_eq!(service.parse_passengers(" 4 "), Some(4));
        assert_eq!(service.parse_passengers("0"), None);
    }

    #[test]
    fn test_min_passengers_is_configurable() {
        let service = BookingFormService::with_config(BookingFormConfig {
            min_passengers: 2,
            ..BookingFormConfig::default()
        });

        assert_eq!(service.parse_passengers("1"), None);
        assert_eq!(service.parse_passengers("2"), Some(2));
    }

    #[test]
    fn test_validation_does_not_depend_on_history() {
        let service = create_test_service();
        let state = fill(&service, &complete_values());
        assert!(state.is_valid());

        let state = service.apply(state, BookingAction::UpdateField(BookingField::Name, String::new()));
        assert!(!state.is_valid());
        assert_eq!(state.validation().errors.len(), 1);

        let state = service.apply(state, BookingAction::UpdateField(BookingField::Name, "Jean".to_string()));
        assert!(state.is_valid());
        assert_eq!(state.validation(), &service.validate(state.draft()));
    }

    #[test]
    fn test_update_field_leaves_other_fields() {
        let service = create_test_service();
        let before = fill(&service, &complete_values());

        let after = service.apply(
            before.clone(),
            BookingAction::UpdateField(BookingField::Pickup, "Nyamirambo".to_string()),
        );

        let mut expected = before.draft().clone();
        expected.pickup = "Nyamirambo".to_string();
        assert_eq!(after.draft(), &expected);
    }

    #[test]
    fn test_select_service_changes_only_service() {
        let service = create_test_service();
        let before = fill(&service, &complete_values());

        let after = service.apply(before.clone(), BookingAction::SelectService(ServiceTier::Outstation));

        assert_eq!(after.draft().service, ServiceTier::Outstation);
        let mut expected = before.draft().clone();
        expected.service = ServiceTier::Outstation;
        assert_eq!(after.draft(), &expected);
        assert_eq!(after.validation(), before.validation());
    }

    #[test]
    fn test_switching_location_method_clears_only_that_location() {
        let service = create_test_service();
        let before = fill(&service, &complete_values());

        let after = service.apply(
            before.clone(),
            BookingAction::SetLocationMethod(LocationField::Pickup, LocationMethod::Map),
        );

        assert_eq!(after.draft().pickup_method, LocationMethod::Map);
        assert_eq!(after.draft().pickup, "");
        assert_eq!(after.draft().destination, "Kigali Airport");
        assert_eq!(after.draft().destination_method, LocationMethod::Text);
        assert!(!after.is_valid());
        assert!(after.validation().error(BookingField::Pickup).is_some());
    }

    #[test]
    fn test_reselecting_same_location_method_keeps_value() {
        let service = create_test_service();
        let before = fill(&service, &complete_values());

        let after = service.apply(
            before.clone(),
            BookingAction::SetLocationMethod(LocationField::Destination, LocationMethod::Text),
        );

        assert_eq!(after, before);
    }

    #[test]
    fn test_confirm_map_selection_fills_placeholder() {
        let service = create_test_service();
        let state = service.apply(
            service.create_form_state(),
            BookingAction::SetLocationMethod(LocationField::Destination, LocationMethod::Map),
        );

        let state = service.apply(state, BookingAction::ConfirmMapSelection(LocationField::Destination));

        assert_eq!(state.draft().destination, "Selected location from map (destination)");
        assert_eq!(state.draft().pickup, "");
        assert!(state.validation().error(BookingField::Destination).is_none());
    }

    #[test]
    fn test_compose_message() {
        let service = create_test_service();
        let state = service.apply(
            fill(&service, &complete_values()),
            BookingAction::SelectService(ServiceTier::AirportTransfer),
        );

        let message = service.compose_message(state.draft());

        assert_eq!(
            message,
            "Hello! I'd like to book a cab:\n\
             Service: Airport Transfer\n\
             Name: Jean\n\
             Phone: 0788123456\n\
             Pickup: Kigali Heights\n\
             Destination: Kigali Airport\n\
             Date: 2024-06-01\n\
             Time: 14:30\n\
             Passengers: 2"
        );
    }

    #[test]
    fn test_compose_message_keeps_values_verbatim() {
        let service = create_test_service();
        let mut values = complete_values();
        values[0] = (BookingField::Name, "  Jean & Marie ");

        let message = service.compose_message(fill(&service, &values).draft());

        assert!(message.contains("\nName:   Jean & Marie \n"));
    }

    #[test]
    fn test_submit_invalid_draft_is_rejected() {
        let service = create_test_service();
        let mut values = complete_values();
        values.pop();

        let outcome = service.submit(&fill(&service, &values));

        assert_eq!(outcome, SubmitOutcome::Rejected);
    }

    #[test]
    fn test_submit_valid_draft_opens_booking_link() {
        let service = create_test_service();
        let state = service.apply(
            fill(&service, &complete_values()),
            BookingAction::SelectService(ServiceTier::AirportTransfer),
        );

        let url = match service.submit(&state) {
            SubmitOutcome::Opened(url) => url,
            SubmitOutcome::Rejected => panic!("valid draft was rejected"),
        };

        let encoded = url
            .strip_prefix("https://wa.me/250787721374?text=")
            .expect("booking link prefix");
        let decoded = urlencoding::decode(encoded).unwrap();
        assert_eq!(
            decoded,
            "Hello! I'd like to book a cab:\n\
             Service: Airport Transfer\n\
             Name: Jean\n\
             Phone: 0788123456\n\
             Pickup: Kigali Heights\n\
             Destination: Kigali Airport\n\
             Date: 2024-06-01\n\
             Time: 14:30\n\
             Passengers: 2"
        );
    }

    #[test]
    fn test_banner_message() {
        let service = create_test_service();
        let state = service.create_form_state();

        assert_eq!(
            service.banner_message(state.validation()),
            Some("Please fill in all required fields correctly before proceeding.")
        );
    }
}
