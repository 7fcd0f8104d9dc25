//! Closed field schema.
//!
//! Every form input is one of the [`FieldName`] variants. The declaration
//! order of the enum is the display order, the preview order and the order
//! in which required fields are reported.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field category, used to group inputs for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Meteorological,
    Hydrological,
    Topographical,
    RemoteSensing,
    Iot,
    Historical,
}

impl Category {
    /// Get all categories in display order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Meteorological,
            Self::Hydrological,
            Self::Topographical,
            Self::RemoteSensing,
            Self::Iot,
            Self::Historical,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Meteorological => "Meteorological",
            Self::Hydrological => "Hydrological",
            Self::Topographical => "Topographical",
            Self::RemoteSensing => "Remote Sensing",
            Self::Iot => "IoT Sensors",
            Self::Historical => "Historical",
        }
    }

    /// Fields belonging to this category, in declaration order.
    pub fn fields(self) -> impl Iterator<Item = &'static FieldDescriptor> {
        FIELDS.iter().filter(move |field| field.category == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    // Meteorological
    RainfallIntensity,
    RainfallDuration,
    Temperature,
    Humidity,
    WindSpeed,
    // Hydrological
    RiverLevel,
    RiverDischarge,
    SoilMoisture,
    GroundwaterLevel,
    // Topographical
    Elevation,
    Slope,
    LandUse,
    DrainageDensity,
    // Remote sensing
    Ndvi,
    Ndwi,
    SurfaceWaterExtent,
    // IoT
    WaterLevelSensor,
    FlowRateSensor,
    RainGauge,
    SensorStatus,
    // Historical
    PastFlood,
    FloodFrequency,
    LastFloodYear,
}

impl FieldName {
    /// Number of schema fields.
    pub const COUNT: usize = 23;

    /// All fields in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::RainfallIntensity,
        Self::RainfallDuration,
        Self::Temperature,
        Self::Humidity,
        Self::WindSpeed,
        Self::RiverLevel,
        Self::RiverDischarge,
        Self::SoilMoisture,
        Self::GroundwaterLevel,
        Self::Elevation,
        Self::Slope,
        Self::LandUse,
        Self::DrainageDensity,
        Self::Ndvi,
        Self::Ndwi,
        Self::SurfaceWaterExtent,
        Self::WaterLevelSensor,
        Self::FlowRateSensor,
        Self::RainGauge,
        Self::SensorStatus,
        Self::PastFlood,
        Self::FloodFrequency,
        Self::LastFloodYear,
    ];

    /// Schema name as it appears in import files and the preview.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RainfallIntensity => "rainfall_intensity",
            Self::RainfallDuration => "rainfall_duration",
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::WindSpeed => "wind_speed",
            Self::RiverLevel => "river_level",
            Self::RiverDischarge => "river_discharge",
            Self::SoilMoisture => "soil_moisture",
            Self::GroundwaterLevel => "groundwater_level",
            Self::Elevation => "elevation",
            Self::Slope => "slope",
            Self::LandUse => "land_use",
            Self::DrainageDensity => "drainage_density",
            Self::Ndvi => "ndvi",
            Self::Ndwi => "ndwi",
            Self::SurfaceWaterExtent => "surface_water_extent",
            Self::WaterLevelSensor => "water_level_sensor",
            Self::FlowRateSensor => "flow_rate_sensor",
            Self::RainGauge => "rain_gauge",
            Self::SensorStatus => "sensor_status",
            Self::PastFlood => "past_flood",
            Self::FloodFrequency => "flood_frequency",
            Self::LastFloodYear => "last_flood_year",
        }
    }

    /// Look up a field by its exact schema name.
    ///
    /// Matching is case-sensitive: `River_Level` is not a schema field.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.as_str() == name)
    }

    /// Position of this field in declaration order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Static descriptor for this field.
    pub fn descriptor(self) -> &'static FieldDescriptor {
        &FIELDS[self.index()]
    }

    /// Value a fresh form starts with.
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::PastFlood => "no",
            _ => "",
        }
    }

    /// Schema name with underscores replaced by spaces.
    pub fn display_name(self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not part of the schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field: {name}")]
pub struct UnknownFieldError {
    pub name: String,
}

impl FromStr for FieldName {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownFieldError {
            name: s.to_string(),
        })
    }
}

/// Static description of one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: FieldName,
    pub category: Category,
    /// Label shown next to the input.
    pub label: &'static str,
    /// Measurement unit, if the field has one.
    pub unit: Option<&'static str>,
    /// Whether the field must be non-empty to submit.
    pub required: bool,
}

const fn field(
    name: FieldName,
    category: Category,
    label: &'static str,
    unit: Option<&'static str>,
    required: bool,
) -> FieldDescriptor {
    FieldDescriptor {
        name,
        category,
        label,
        unit,
        required,
    }
}

/// Descriptor table, indexed by [`FieldName::index`].
pub static FIELDS: [FieldDescriptor; FieldName::COUNT] = [
    field(FieldName::RainfallIntensity, Category::Meteorological, "Rainfall Intensity", Some("mm/h"), true),
    field(FieldName::RainfallDuration, Category::Meteorological, "Rainfall Duration", Some("h"), false),
    field(FieldName::Temperature, Category::Meteorological, "Temperature", Some("°C"), true),
    field(FieldName::Humidity, Category::Meteorological, "Humidity", Some("%"), false),
    field(FieldName::WindSpeed, Category::Meteorological, "Wind Speed", Some("km/h"), false),
    field(FieldName::RiverLevel, Category::Hydrological, "River Level", Some("m"), true),
    field(FieldName::RiverDischarge, Category::Hydrological, "River Discharge", Some("m³/s"), false),
    field(FieldName::SoilMoisture, Category::Hydrological, "Soil Moisture", Some("%"), false),
    field(FieldName::GroundwaterLevel, Category::Hydrological, "Groundwater Level", Some("m"), false),
    field(FieldName::Elevation, Category::Topographical, "Elevation", Some("m"), true),
    field(FieldName::Slope, Category::Topographical, "Slope", Some("°"), false),
    field(FieldName::LandUse, Category::Topographical, "Land Use", None, true),
    field(FieldName::DrainageDensity, Category::Topographical, "Drainage Density", Some("km/km²"), false),
    field(FieldName::Ndvi, Category::RemoteSensing, "NDVI", None, false),
    field(FieldName::Ndwi, Category::RemoteSensing, "NDWI", None, false),
    field(FieldName::SurfaceWaterExtent, Category::RemoteSensing, "Surface Water Extent", Some("km²"), false),
    field(FieldName::WaterLevelSensor, Category::Iot, "Water Level Sensor", Some("m"), false),
    field(FieldName::FlowRateSensor, Category::Iot, "Flow Rate Sensor", Some("m³/s"), false),
    field(FieldName::RainGauge, Category::Iot, "Rain Gauge", Some("mm"), false),
    field(FieldName::SensorStatus, Category::Iot, "Sensor Status", None, false),
    field(FieldName::PastFlood, Category::Historical, "Past Flood", None, false),
    field(FieldName::FloodFrequency, Category::Historical, "Flood Frequency", Some("events/decade"), false),
    field(FieldName::LastFloodYear, Category::Historical, "Last Flood Year", None, false),
];

/// Required fields in the order their errors are reported.
pub const REQUIRED_FIELDS: [FieldName; 5] = [
    FieldName::RainfallIntensity,
    FieldName::Temperature,
    FieldName::RiverLevel,
    FieldName::Elevation,
    FieldName::LandUse,
];
