use crate::models::DriverProfile;
use std::env;

/// Builds the driver profile from the environment, falling back to the
/// demo profile for any variable that is not set.
pub fn driver_from_env() -> DriverProfile {
    DriverProfile {
        id: env_or("DRIVER_ID", "driver-001"),
        name: env_or("DRIVER_NAME", "Chauffeur Test"),
        phone: env_or("DRIVER_PHONE", "+221 70 000 00 00"),
        vehicle: env_or("DRIVER_VEHICLE", "Taxi / VTC"),
        plate: env_or("DRIVER_PLATE", "DK-0000-A"),
        zone: env_or("DRIVER_ZONE", "Saly — Dakar"),
        icon: env_or("DRIVER_ICON", "🚗"),
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
