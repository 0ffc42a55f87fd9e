//! # Map Coordinates
//!
//! Pin positions for the regulation map. The coordinate table and the
//! hierarchy overlap but neither contains the other: a few territories
//! are drawn as pins without a hierarchy entry, and a few hierarchy
//! countries have no pin.
//!
//! Each entry carries its own [`PlaceLevel`] so the pin renderer can
//! tell state pins from country pins without consulting the hierarchy.

use std::collections::HashMap;
use std::sync::OnceLock;

use regmap_core::{Coordinate, PlaceId, PlaceLevel};
use serde::Serialize;

use crate::alias::resolve_place;

/// A map pin position for one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateEntry {
    pub place: PlaceId,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub display_name: &'static str,
    pub level: PlaceLevel,
}

impl CoordinateEntry {
    const fn new(
        place: PlaceId,
        lat: f64,
        lng: f64,
        display_name: &'static str,
        level: PlaceLevel,
    ) -> Self {
        Self {
            place,
            coordinate: Coordinate::new(lat, lng),
            display_name,
            level,
        }
    }
}

/// Pin positions (approximate geographic centres).
pub const COORDINATES: &[CoordinateEntry] = &[
    CoordinateEntry::new(PlaceId::UnitedStates, 39.8283, -98.5795, "United States", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Canada, 56.1304, -106.3468, "Canada", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Mexico, 23.6345, -102.5528, "Mexico", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::PuertoRico, 18.2208, -66.5901, "Puerto Rico", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Greenland, 71.7069, -42.6043, "Greenland", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Brazil, -14.2350, -51.9253, "Brazil", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Argentina, -38.4161, -63.6167, "Argentina", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Chile, -35.6751, -71.5430, "Chile", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Colombia, 4.5709, -74.2973, "Colombia", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Peru, -9.1900, -75.0152, "Peru", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Austria, 47.5162, 14.5501, "Austria", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Belgium, 50.5039, 4.4699, "Belgium", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Bulgaria, 42.7339, 25.4858, "Bulgaria", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Croatia, 45.1000, 15.2000, "Croatia", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Cyprus, 35.1264, 33.4299, "Cyprus", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::CzechRepublic, 49.8175, 15.4730, "Czech Republic", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Denmark, 56.2639, 9.5018, "Denmark", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Estonia, 58.5953, 25.0136, "Estonia", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Finland, 61.9241, 25.7482, "Finland", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::France, 46.2276, 2.2137, "France", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Germany, 51.1657, 10.4515, "Germany", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Greece, 39.0742, 21.8243, "Greece", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Hungary, 47.1625, 19.5033, "Hungary", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Ireland, 53.4129, -8.2439, "Ireland", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Italy, 41.8719, 12.5674, "Italy", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Latvia, 56.8796, 24.6032, "Latvia", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Lithuania, 55.1694, 23.8813, "Lithuania", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Luxembourg, 49.8153, 6.1296, "Luxembourg", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Malta, 35.9375, 14.3754, "Malta", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Netherlands, 52.1326, 5.2913, "Netherlands", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Poland, 51.9194, 19.1451, "Poland", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Portugal, 39.3999, -8.2245, "Portugal", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Romania, 45.9432, 24.9668, "Romania", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Slovakia, 48.6690, 19.6990, "Slovakia", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Slovenia, 46.1512, 14.9955, "Slovenia", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Spain, 40.4637, -3.7492, "Spain", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Sweden, 60.1282, 18.6435, "Sweden", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::UnitedKingdom, 55.3781, -3.4360, "United Kingdom", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Switzerland, 46.8182, 8.2275, "Switzerland", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Norway, 60.4720, 8.4689, "Norway", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Turkey, 38.9637, 35.2433, "Türkiye", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Ukraine, 48.3794, 31.1656, "Ukraine", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::China, 35.8617, 104.1954, "China", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Japan, 36.2048, 138.2529, "Japan", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::SouthKorea, 35.9078, 127.7669, "South Korea", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::India, 20.5937, 78.9629, "India", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Singapore, 1.3521, 103.8198, "Singapore", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::HongKong, 22.3193, 114.1694, "Hong Kong SAR", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Taiwan, 23.6978, 120.9605, "Taiwan", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Indonesia, -0.7893, 113.9213, "Indonesia", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Malaysia, 4.2105, 101.9758, "Malaysia", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Thailand, 15.8700, 100.9925, "Thailand", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Vietnam, 14.0583, 108.2772, "Vietnam", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Philippines, 12.8797, 121.7740, "Philippines", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Pakistan, 30.3753, 69.3451, "Pakistan", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Bangladesh, 23.6850, 90.3563, "Bangladesh", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::SriLanka, 7.8731, 80.7718, "Sri Lanka", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Australia, -25.2744, 133.7751, "Australia", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::NewZealand, -40.9006, 174.8860, "New Zealand", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::UnitedArabEmirates, 23.4241, 53.8478, "United Arab Emirates", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::SaudiArabia, 23.8859, 45.0792, "Saudi Arabia", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Israel, 31.0461, 34.8516, "Israel", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Qatar, 25.3548, 51.1839, "Qatar", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::SouthAfrica, -30.5595, 22.9375, "South Africa", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Nigeria, 9.0820, 8.6753, "Nigeria", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Kenya, -0.0236, 37.9062, "Kenya", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Egypt, 26.8206, 30.8025, "Egypt", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::Morocco, 31.7917, -7.0926, "Morocco", PlaceLevel::Country),
    CoordinateEntry::new(PlaceId::California, 36.7783, -119.4179, "California", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::NewYork, 42.1657, -74.9481, "New York", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::Texas, 31.9686, -99.9018, "Texas", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::Washington, 47.7511, -120.7401, "Washington", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::Massachusetts, 42.4072, -71.3824, "Massachusetts", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::Illinois, 40.6331, -89.3985, "Illinois", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::Colorado, 39.5501, -105.7821, "Colorado", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::NewJersey, 40.0583, -74.4057, "New Jersey", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::Ontario, 51.2538, -85.3232, "Ontario", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::Quebec, 52.9399, -73.5491, "Québec", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::BritishColumbia, 53.7267, -127.6476, "British Columbia", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::Alberta, 53.9333, -116.5765, "Alberta", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::Bavaria, 48.7904, 11.4979, "Bavaria", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::Berlin, 52.5200, 13.4050, "Berlin", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::BadenWurttemberg, 48.6616, 9.3501, "Baden-Württemberg", PlaceLevel::State),
    CoordinateEntry::new(PlaceId::NorthRhineWestphalia, 51.4332, 7.6616, "North Rhine-Westphalia", PlaceLevel::State),
];

/// Indexed view over [`COORDINATES`], plus free-text resolution.
#[derive(Debug)]
pub struct CoordinateTable {
    by_place: HashMap<PlaceId, &'static CoordinateEntry>,
}

impl CoordinateTable {
    /// The process-wide table built from [`COORDINATES`].
    pub fn global() -> &'static CoordinateTable {
        static INSTANCE: OnceLock<CoordinateTable> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::from_entries(COORDINATES))
    }

    /// Index a slice of entries. A later entry for the same place
    /// replaces an earlier one.
    pub fn from_entries(entries: &'static [CoordinateEntry]) -> Self {
        let by_place = entries.iter().map(|e| (e.place, e)).collect();
        Self { by_place }
    }

    pub fn coordinates_of(&self, id: PlaceId) -> Option<&'static CoordinateEntry> {
        self.by_place.get(&id).copied()
    }

    /// Coordinates for free text, resolving aliases first.
    pub fn coordinates_of_name(&self, name: &str) -> Option<&'static CoordinateEntry> {
        resolve_place(name).and_then(|id| self.coordinates_of(id))
    }

    pub fn has_coordinates(&self, id: PlaceId) -> bool {
        self.by_place.contains_key(&id)
    }

    /// Resolve free text to a place that has a pin.
    pub fn resolve_pinnable(&self, text: &str) -> Option<PlaceId> {
        resolve_place(text).filter(|id| self.has_coordinates(*id))
    }

    pub fn len(&self) -> usize {
        self.by_place.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_place.is_empty()
    }
}
