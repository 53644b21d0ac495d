use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub mod domain;

pub use domain::booking_form::{BookingAction, BookingFormService, BookingFormState};
pub use domain::deep_links::DeepLinkBuilder;
pub use domain::map_selection::MapSelection;

/// One of the four fixed service offerings shown in the rate table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ServiceTier {
    #[default]
    #[serde(rename = "City Ride (Kigali)")]
    CityRide,
    #[serde(rename = "Airport Transfer")]
    AirportTransfer,
    #[serde(rename = "Hourly Rental")]
    HourlyRental,
    #[serde(rename = "Outstation")]
    Outstation,
}

impl ServiceTier {
    /// Rate table order
    pub const ALL: [ServiceTier; 4] = [
        ServiceTier::CityRide,
        ServiceTier::AirportTransfer,
        ServiceTier::HourlyRental,
        ServiceTier::Outstation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ServiceTier::CityRide => "City Ride (Kigali)",
            ServiceTier::AirportTransfer => "Airport Transfer",
            ServiceTier::HourlyRental => "Hourly Rental",
            ServiceTier::Outstation => "Outstation",
        }
    }

    pub fn price_label(&self) -> &'static str {
        match self {
            ServiceTier::CityRide => "RWF 80,000/Day",
            ServiceTier::AirportTransfer => "RWF 30,000",
            ServiceTier::HourlyRental => "RWF 20,000/hour",
            ServiceTier::Outstation => "RWF 150,000/Day",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ServiceTier::CityRide => "Perfect for getting around Kigali city with unlimited stops",
            ServiceTier::AirportTransfer => "Direct transfer to/from Kigali International Airport",
            ServiceTier::HourlyRental => "Flexible hourly booking for your convenience",
            ServiceTier::Outstation => "Long-distance travel outside Kigali city limits",
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServiceTier {
    type Err = UnknownServiceTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceTier::ALL
            .into_iter()
            .find(|tier| tier.name() == s)
            .ok_or_else(|| UnknownServiceTierError(s.to_string()))
    }
}

/// The seven user-editable booking fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingField {
    Name,
    Phone,
    Pickup,
    Destination,
    Date,
    Time,
    Passengers,
}

impl BookingField {
    pub const ALL: [BookingField; 7] = [
        BookingField::Name,
        BookingField::Phone,
        BookingField::Pickup,
        BookingField::Destination,
        BookingField::Date,
        BookingField::Time,
        BookingField::Passengers,
    ];

    /// Value of the `name` attribute on the matching form input
    pub fn name(&self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Phone => "phone",
            BookingField::Pickup => "pickup",
            BookingField::Destination => "destination",
            BookingField::Date => "date",
            BookingField::Time => "time",
            BookingField::Passengers => "passengers",
        }
    }

    /// Map an input `name` attribute back to its field
    pub fn from_name(name: &str) -> Result<Self, UnknownFieldError> {
        BookingField::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| UnknownFieldError(name.to_string()))
    }
}

/// A location field that can be entered as text or picked on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationField {
    Pickup,
    Destination,
}

impl LocationField {
    pub fn field(&self) -> BookingField {
        match self {
            LocationField::Pickup => BookingField::Pickup,
            LocationField::Destination => BookingField::Destination,
        }
    }

    pub fn name(&self) -> &'static str {
        self.field().name()
    }

    /// Capitalised label used in headings ("Pickup Location")
    pub fn label(&self) -> &'static str {
        match self {
            LocationField::Pickup => "Pickup",
            LocationField::Destination => "Destination",
        }
    }
}

/// How a location is being entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LocationMethod {
    #[default]
    Text,
    Map,
}

/// In-progress booking form values.
///
/// Every value is kept as the raw text the input produced; parsing happens
/// only during validation so that the outgoing message repeats exactly what
/// the customer typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub pickup: String,
    pub destination: String,
    /// ISO 8601 date (YYYY-MM-DD) as produced by a date input
    pub date: String,
    /// 24h time (HH:MM) as produced by a time input
    pub time: String,
    pub passengers: String,
    pub service: ServiceTier,
    pub pickup_method: LocationMethod,
    pub destination_method: LocationMethod,
}

impl BookingDraft {
    pub fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Phone => &self.phone,
            BookingField::Pickup => &self.pickup,
            BookingField::Destination => &self.destination,
            BookingField::Date => &self.date,
            BookingField::Time => &self.time,
            BookingField::Passengers => &self.passengers,
        }
    }

    pub fn value_mut(&mut self, field: BookingField) -> &mut String {
        match field {
            BookingField::Name => &mut self.name,
            BookingField::Phone => &mut self.phone,
            BookingField::Pickup => &mut self.pickup,
            BookingField::Destination => &mut self.destination,
            BookingField::Date => &mut self.date,
            BookingField::Time => &mut self.time,
            BookingField::Passengers => &mut self.passengers,
        }
    }

    pub fn location_method(&self, location: LocationField) -> LocationMethod {
        match location {
            LocationField::Pickup => self.pickup_method,
            LocationField::Destination => self.destination_method,
        }
    }

    pub fn location_method_mut(&mut self, location: LocationField) -> &mut LocationMethod {
        match location {
            LocationField::Pickup => &mut self.pickup_method,
            LocationField::Destination => &mut self.destination_method,
        }
    }
}

/// A single failed booking rule. The display text is the inline message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum BookingValidationError {
    #[error("Name is required")]
    MissingName,
    #[error("Phone number is required")]
    MissingPhone,
    #[error("Pickup location is required")]
    MissingPickup,
    #[error("Destination is required")]
    MissingDestination,
    #[error("Date is required")]
    MissingDate,
    #[error("Time is required")]
    MissingTime,
    #[error("Valid number of passengers required")]
    InvalidPassengers,
}

impl BookingValidationError {
    pub fn field(&self) -> BookingField {
        match self {
            BookingValidationError::MissingName => BookingField::Name,
            BookingValidationError::MissingPhone => BookingField::Phone,
            BookingValidationError::MissingPickup => BookingField::Pickup,
            BookingValidationError::MissingDestination => BookingField::Destination,
            BookingValidationError::MissingDate => BookingField::Date,
            BookingValidationError::MissingTime => BookingField::Time,
            BookingValidationError::InvalidPassengers => BookingField::Passengers,
        }
    }
}

/// Validation outcome for a booking draft. `is_valid` holds iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<BookingField, BookingValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: impl IntoIterator<Item = BookingValidationError>) -> Self {
        let errors: BTreeMap<_, _> = errors.into_iter().map(|e| (e.field(), e)).collect();
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error(&self, field: BookingField) -> Option<&BookingValidationError> {
        self.errors.get(&field)
    }

    pub fn message(&self, field: BookingField) -> Option<String> {
        self.error(field).map(ToString::to_string)
    }
}

/// What happened when the customer pressed "Book via WhatsApp"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Deep link to open in a new browsing context
    Opened(String),
    /// Draft was invalid; nothing happened
    Rejected,
}

/// Configuration for the booking form and its outbound links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingFormConfig {
    /// Business number in international format without the leading `+`
    pub business_phone: String,
    /// Human-friendly rendering of the business number
    pub display_phone: String,
    pub messaging_base_url: String,
    pub min_passengers: u32,
    pub banner_message: String,
}

impl Default for BookingFormConfig {
    fn default() -> Self {
        Self {
            business_phone: "250787721374".to_string(),
            display_phone: "+250 787 721 374".to_string(),
            messaging_base_url: "https://wa.me".to_string(),
            min_passengers: 1,
            banner_message: "Please fill in all required fields correctly before proceeding.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError(pub String);

impl fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown booking field: {}", self.0)
    }
}

impl std::error::Error for UnknownFieldError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownServiceTierError(pub String);

impl fmt::Display for UnknownServiceTierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown service tier: {}", self.0)
    }
}

impl std::error::Error for UnknownServiceTierError {}
