//! Built-in airport rosters.

use aeri_core::config::AirportSpec;

/// Ten airports of the US Pacific Northwest.
pub fn pacific_northwest() -> Vec<AirportSpec> {
    vec![
        AirportSpec::new("KSEA", 47.4489, -122.3094),
        AirportSpec::new("KPDX", 45.5887, -122.5975),
        AirportSpec::new("KGEG", 47.619, -117.533),
        AirportSpec::new("KBOI", 43.5644, -116.2228),
        AirportSpec::new("KPAE", 47.9063, -122.2816),
        AirportSpec::new("KRNT", 47.4931, -122.215),
        AirportSpec::new("KOLM", 46.9694, -122.903),
        AirportSpec::new("KEUG", 44.1246, -123.2119),
        AirportSpec::new("KBFI", 47.53, -122.301),
        AirportSpec::new("KTTD", 45.5494, -122.401),
    ]
}
