pub mod domain;
pub mod duration;
pub mod ports;
pub mod search;

pub use domain::{
    AutocompleteMatch, CatalogEntry, MatchField, Medication, NewMedication, DEFAULT_USER_ID,
};
pub use duration::{parse_duration, DurationError, DurationRange};
pub use ports::{DatabaseService, PortError, PortResult};
pub use search::{expand_matches, AUTOCOMPLETE_CANDIDATE_LIMIT};
