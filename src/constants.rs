//! Application constants for the flight analytics tool
//!
//! Default report arguments, file locations and logging names used
//! throughout the crate.

// =============================================================================
// Data File
// =============================================================================

/// Flight data file read when no path is given
pub const DEFAULT_DATA_FILE: &str = "flights.json";

// =============================================================================
// Report Defaults
// =============================================================================

/// Airline used for the single-airline total and average tasks
pub const DEFAULT_AIRLINE: &str = "IndiGo";

/// First airport of the airport-pair query
pub const DEFAULT_AIRPORT_A: &str = "Fukuoka";

/// Second airport of the airport-pair query
pub const DEFAULT_AIRPORT_B: &str = "Haneda Airport";

/// Cutoff for the departure time-of-day query (hour, minute)
pub const DEFAULT_CUTOFF_TIME: (u32, u32) = (1, 0);

/// Accepted textual forms for a time-of-day argument
pub const TIME_OF_DAY_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

// =============================================================================
// Configuration Files
// =============================================================================

/// Directory under the user config dir holding the config file
pub const CONFIG_DIR_NAME: &str = "flight-analytics";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

// =============================================================================
// Logging
// =============================================================================

/// Crate target used in the default log filter
pub const LOG_TARGET: &str = "flight_analytics";
