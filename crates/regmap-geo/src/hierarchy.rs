//! # Location Hierarchy
//!
//! Maps every known place to its level, region and (for sub-national
//! units) parent country, and answers ancestor and region-membership
//! queries.
//!
//! ## Construction
//!
//! Built once from two source tables:
//!
//! - [`COUNTRY_REGIONS`]: each country with its *geographic* region. EU
//!   member states are listed under `Europe` here and reassigned to
//!   `Eu` during the build according to [`EU_MEMBER_STATES`].
//! - [`SUB_NATIONAL_UNITS`]: each state/province/Land with its parent.
//!   A sub-national unit inherits its parent's region.
//!
//! Each source row produces exactly one [`Place`]. Aliases resolve to
//! a `PlaceId` first, so "Czechia" and "Czech Republic" return the same
//! `&Place`.
//!
//! [`EU_MEMBER_STATES`]: crate::policy::EU_MEMBER_STATES

use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use regmap_core::{PlaceId, PlaceLevel, Region};
use serde::Serialize;

use crate::alias::resolve_place;
use crate::error::GeoError;
use crate::policy::EU_MEMBER_STATES;

/// Countries with their geographic region.
pub const COUNTRY_REGIONS: &[(PlaceId, Region)] = &[
    // North America
    (PlaceId::UnitedStates, Region::NorthAmerica),
    (PlaceId::Canada, Region::NorthAmerica),
    (PlaceId::Mexico, Region::NorthAmerica),
    // South America
    (PlaceId::Brazil, Region::SouthAmerica),
    (PlaceId::Argentina, Region::SouthAmerica),
    (PlaceId::Chile, Region::SouthAmerica),
    (PlaceId::Colombia, Region::SouthAmerica),
    (PlaceId::Peru, Region::SouthAmerica),
    // Europe (EU membership applied at build time)
    (PlaceId::Austria, Region::Europe),
    (PlaceId::Belgium, Region::Europe),
    (PlaceId::Bulgaria, Region::Europe),
    (PlaceId::Croatia, Region::Europe),
    (PlaceId::Cyprus, Region::Europe),
    (PlaceId::CzechRepublic, Region::Europe),
    (PlaceId::Denmark, Region::Europe),
    (PlaceId::Estonia, Region::Europe),
    (PlaceId::Finland, Region::Europe),
    (PlaceId::France, Region::Europe),
    (PlaceId::Germany, Region::Europe),
    (PlaceId::Greece, Region::Europe),
    (PlaceId::Hungary, Region::Europe),
    (PlaceId::Ireland, Region::Europe),
    (PlaceId::Italy, Region::Europe),
    (PlaceId::Latvia, Region::Europe),
    (PlaceId::Lithuania, Region::Europe),
    (PlaceId::Luxembourg, Region::Europe),
    (PlaceId::Malta, Region::Europe),
    (PlaceId::Netherlands, Region::Europe),
    (PlaceId::Poland, Region::Europe),
    (PlaceId::Portugal, Region::Europe),
    (PlaceId::Romania, Region::Europe),
    (PlaceId::Slovakia, Region::Europe),
    (PlaceId::Slovenia, Region::Europe),
    (PlaceId::Spain, Region::Europe),
    (PlaceId::Sweden, Region::Europe),
    (PlaceId::UnitedKingdom, Region::Europe),
    (PlaceId::Switzerland, Region::Europe),
    (PlaceId::Norway, Region::Europe),
    (PlaceId::Iceland, Region::Europe),
    (PlaceId::Turkey, Region::Europe),
    (PlaceId::Ukraine, Region::Europe),
    // Asia-Pacific
    (PlaceId::China, Region::AsiaPacific),
    (PlaceId::Japan, Region::AsiaPacific),
    (PlaceId::SouthKorea, Region::AsiaPacific),
    (PlaceId::India, Region::AsiaPacific),
    (PlaceId::Singapore, Region::AsiaPacific),
    (PlaceId::HongKong, Region::AsiaPacific),
    (PlaceId::Taiwan, Region::AsiaPacific),
    (PlaceId::Indonesia, Region::AsiaPacific),
    (PlaceId::Malaysia, Region::AsiaPacific),
    (PlaceId::Thailand, Region::AsiaPacific),
    (PlaceId::Vietnam, Region::AsiaPacific),
    (PlaceId::Philippines, Region::AsiaPacific),
    // Asia
    (PlaceId::Pakistan, Region::Asia),
    (PlaceId::Bangladesh, Region::Asia),
    (PlaceId::SriLanka, Region::Asia),
    (PlaceId::Kazakhstan, Region::Asia),
    // Oceania
    (PlaceId::Australia, Region::Oceania),
    (PlaceId::NewZealand, Region::Oceania),
    // Middle East
    (PlaceId::UnitedArabEmirates, Region::MiddleEast),
    (PlaceId::SaudiArabia, Region::MiddleEast),
    (PlaceId::Israel, Region::MiddleEast),
    (PlaceId::Qatar, Region::MiddleEast),
    // Africa
    (PlaceId::SouthAfrica, Region::Africa),
    (PlaceId::Nigeria, Region::Africa),
    (PlaceId::Kenya, Region::Africa),
    (PlaceId::Egypt, Region::Africa),
    (PlaceId::Morocco, Region::Africa),
];

/// Sub-national units with their parent country.
pub const SUB_NATIONAL_UNITS: &[(PlaceId, PlaceId)] = &[
    (PlaceId::California, PlaceId::UnitedStates),
    (PlaceId::NewYork, PlaceId::UnitedStates),
    (PlaceId::Texas, PlaceId::UnitedStates),
    (PlaceId::Washington, PlaceId::UnitedStates),
    (PlaceId::Massachusetts, PlaceId::UnitedStates),
    (PlaceId::Illinois, PlaceId::UnitedStates),
    (PlaceId::Colorado, PlaceId::UnitedStates),
    (PlaceId::NewJersey, PlaceId::UnitedStates),
    (PlaceId::Ontario, PlaceId::Canada),
    (PlaceId::Quebec, PlaceId::Canada),
    (PlaceId::BritishColumbia, PlaceId::Canada),
    (PlaceId::Alberta, PlaceId::Canada),
    (PlaceId::Bavaria, PlaceId::Germany),
    (PlaceId::Berlin, PlaceId::Germany),
    (PlaceId::BadenWurttemberg, PlaceId::Germany),
    (PlaceId::NorthRhineWestphalia, PlaceId::Germany),
];

/// A named geographic unit in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Place {
    pub id: PlaceId,
    pub level: PlaceLevel,
    pub region: Region,
    /// Present only for `PlaceLevel::State`.
    pub parent_country: Option<PlaceId>,
}

impl Place {
    pub fn name(&self) -> &'static str {
        self.id.as_str()
    }

    pub fn is_state(&self) -> bool {
        self.level == PlaceLevel::State
    }
}

/// One step of an ancestor chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ancestor {
    Place(PlaceId),
    Region(Region),
    Global,
}

impl Ancestor {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Place(p) => p.as_str(),
            Self::Region(r) => r.as_str(),
            Self::Global => "Global",
        }
    }
}

impl std::fmt::Display for Ancestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Ancestor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Indexed view over the hierarchy source tables.
#[derive(Debug, Default)]
pub struct LocationHierarchy {
    places: HashMap<PlaceId, Place>,
}

impl LocationHierarchy {
    /// The process-wide hierarchy built from the compiled-in tables.
    ///
    /// If the compiled-in tables ever violate an invariant the error is
    /// logged and an empty hierarchy is served, under which every place
    /// degrades to "unknown".
    pub fn global() -> &'static LocationHierarchy {
        static INSTANCE: OnceLock<LocationHierarchy> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            match Self::from_tables(COUNTRY_REGIONS, SUB_NATIONAL_UNITS, &EU_MEMBER_STATES) {
                Ok(hierarchy) => hierarchy,
                Err(e) => {
                    tracing::error!(error = %e, "built-in location hierarchy is inconsistent");
                    Self::default()
                }
            }
        })
    }

    /// Build a hierarchy from source tables.
    ///
    /// # Errors
    ///
    /// - [`GeoError::DuplicatePlace`] if a place appears in more than one row.
    /// - [`GeoError::OrphanState`] if a sub-national unit's parent is not
    ///   a country row.
    pub fn from_tables(
        countries: &[(PlaceId, Region)],
        states: &[(PlaceId, PlaceId)],
        eu_members: &[PlaceId],
    ) -> Result<Self, GeoError> {
        let mut places = HashMap::with_capacity(countries.len() + states.len());

        for &(id, geographic_region) in countries {
            let region = if eu_members.contains(&id) {
                Region::Eu
            } else {
                geographic_region
            };
            let place = Place {
                id,
                level: PlaceLevel::Country,
                region,
                parent_country: None,
            };
            if places.insert(id, place).is_some() {
                return Err(GeoError::DuplicatePlace(id));
            }
        }

        for &(id, parent) in states {
            let region = match places.get(&parent) {
                Some(p) if p.level == PlaceLevel::Country => p.region,
                _ => return Err(GeoError::OrphanState { state: id, parent }),
            };
            let place = Place {
                id,
                level: PlaceLevel::State,
                region,
                parent_country: Some(parent),
            };
            if places.insert(id, place).is_some() {
                return Err(GeoError::DuplicatePlace(id));
            }
        }

        Ok(Self { places })
    }

    pub fn lookup(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(&id)
    }

    /// Look up a place by free text, resolving aliases.
    pub fn lookup_name(&self, name: &str) -> Option<&Place> {
        resolve_place(name).and_then(|id| self.lookup(id))
    }

    pub fn contains(&self, id: PlaceId) -> bool {
        self.places.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// All places, in `PlaceId` order.
    pub fn places(&self) -> Vec<&Place> {
        PlaceId::all()
            .iter()
            .filter_map(|id| self.places.get(id))
            .collect()
    }

    /// Ancestor chain, nearest first, always ending in `Global`.
    ///
    /// A place outside the hierarchy has the chain `[Global]`.
    pub fn ancestors(&self, id: PlaceId) -> Vec<Ancestor> {
        let mut chain = Vec::with_capacity(3);
        if let Some(place) = self.lookup(id) {
            if let Some(parent) = place.parent_country {
                chain.push(Ancestor::Place(parent));
            }
            chain.push(Ancestor::Region(place.region));
        }
        chain.push(Ancestor::Global);
        chain
    }

    /// Ancestor chain for free text. Unresolvable text yields `[Global]`.
    pub fn ancestors_of(&self, name: &str) -> Vec<Ancestor> {
        match resolve_place(name) {
            Some(id) => self.ancestors(id),
            None => {
                tracing::debug!(place = %name, "ancestor query for unknown place");
                vec![Ancestor::Global]
            }
        }
    }

    /// Returns `true` if the place's region, or its parent country's
    /// region, is `region`.
    pub fn is_in_region(&self, id: PlaceId, region: Region) -> bool {
        let Some(place) = self.lookup(id) else {
            return false;
        };
        if place.region == region {
            return true;
        }
        place
            .parent_country
            .and_then(|parent| self.lookup(parent))
            .is_some_and(|parent| parent.region == region)
    }

    /// Every place (countries and sub-national units) in a region.
    pub fn all_places_in_region(&self, region: Region) -> BTreeSet<PlaceId> {
        self.places
            .keys()
            .copied()
            .filter(|id| self.is_in_region(*id, region))
            .collect()
    }

    /// Sub-national units whose parent is `country`, in `PlaceId` order.
    pub fn states_of(&self, country: PlaceId) -> Vec<PlaceId> {
        PlaceId::all()
            .iter()
            .copied()
            .filter(|id| {
                self.lookup(*id)
                    .is_some_and(|p| p.parent_country == Some(country))
            })
            .collect()
    }
}
