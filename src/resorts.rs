//! Static resort catalog and gridpoint lookup.
//!
//! Gridpoints are the forecast office and grid cell the NWS uses for a
//! location. Resorts whose terrain falls outside NWS grid coverage are kept
//! in the catalog with no gridpoint so they can be reported as unsupported
//! rather than unknown.

use std::fmt;

use crate::error::ForecastError;

/// Forecast office plus grid cell, rendered as `OFFICE/x,y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gridpoint {
    pub office: &'static str,
    pub x: u32,
    pub y: u32,
}

impl fmt::Display for Gridpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{},{}", self.office, self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resort {
    pub id: &'static str,
    pub name: &'static str,
    pub gridpoint: Option<Gridpoint>,
}

const fn covered(id: &'static str, name: &'static str, office: &'static str, x: u32, y: u32) -> Resort {
    Resort {
        id,
        name,
        gridpoint: Some(Gridpoint { office, x, y }),
    }
}

pub const RESORTS: &[Resort] = &[
    covered("Stevens_Pass", "Stevens Pass", "SEW", 164, 66),
    covered("Snoqualmie_Pass", "Snoqualmie Pass", "SEW", 151, 53),
    covered("Crystal_Mountain", "Crystal Mountain", "SEW", 144, 30),
    covered("Mount_Baker", "Mount Baker", "SEW", 156, 122),
    covered("Mission_Ridge", "Mission Ridge", "OTX", 42, 89),
    covered("Mount_Hood_Meadows", "Mount Hood Meadows", "PQR", 143, 88),
    covered("Mount_Hood_Skibowl", "Mount Hood Skibowl", "PQR", 139, 87),
    covered("Timberline_Lodge", "Timberline Lodge", "PQR", 135, 95),
    covered("Mount_Bachelor", "Mount Bachelor", "PDT", 22, 39),
    covered("Schweitzer", "Schweitzer", "OTX", 171, 120),
    covered("Sun_Valley", "Sun Valley", "PIH", 38, 93),
    covered("Mammoth_Mountain", "Mammoth Mountain", "REV", 56, 16),
    covered("Big_Bear_Mountain", "Big Bear Mountain", "SGX", 76, 78),
    covered("Breckenridge", "Breckenridge", "BOU", 24, 52),
    covered("Alta", "Alta", "SLC", 107, 166),
    covered("Brighton", "Brighton", "SLC", 109, 166),
    covered("Snowbird", "Snowbird", "SLC", 107, 165),
    covered("Solitude", "Solitude", "SLC", 109, 167),
    covered("Deer_Valley", "Deer Valley", "SLC", 113, 167),
    covered("Park_City", "Park City", "SLC", 112, 168),
    covered("Sundance", "Sundance", "SLC", 108, 157),
    covered("Powder_Mountain", "Powder Mountain", "SLC", 107, 202),
    covered("Snowbasin", "Snowbasin", "SLC", 103, 195),
    covered("Brian_Head_Resort", "Brian Head Resort", "SLC", 48, 41),
    covered("Eagle_Point", "Eagle Point", "SLC", 68, 67),
    covered("Beaver_Mountain", "Beaver Mountain", "SLC", 118, 228),
    Resort {
        id: "Mount_Washington",
        name: "Mount Washington",
        gridpoint: None,
    },
];

/// Lowercase and fold spaces and hyphens into underscores
fn normalize_key(input: &str) -> String {
    input
        .trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Resolve a spoken resort name or identifier to its catalog entry
pub fn resolve_resort(spoken: &str) -> Option<&'static Resort> {
    let key = normalize_key(spoken);
    if key.is_empty() {
        return None;
    }
    RESORTS
        .iter()
        .find(|resort| normalize_key(resort.id) == key || normalize_key(resort.name) == key)
}

/// Look up the forecast gridpoint for a resort identifier.
///
/// # Errors
///
/// `UnknownResort` when the identifier is not in the catalog and
/// `Unsupported` when the resort has no gridpoint.
pub fn gridpoint_for(resort_id: &str) -> Result<Gridpoint, ForecastError> {
    let resort = RESORTS
        .iter()
        .find(|resort| resort.id == resort_id)
        .ok_or_else(|| ForecastError::UnknownResort(resort_id.to_string()))?;

    resort
        .gridpoint
        .ok_or_else(|| ForecastError::Unsupported(resort.id.to_string()))
}
