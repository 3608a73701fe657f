//! Search and filter predicates behind the list, lost-animal and map views.
//!
//! Text search is a case-insensitive substring match; an empty query matches
//! everything. Filters never reorder, they only drop entries.

use crate::types::{Animal, LostAnimal, Species};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpeciesFilter {
    #[default]
    All,
    Only(Species),
}

impl SpeciesFilter {
    pub fn matches(self, species: Species) -> bool {
        match self {
            SpeciesFilter::All => true,
            SpeciesFilter::Only(wanted) => wanted == species,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VaccinationFilter {
    #[default]
    All,
    Vaccinated,
    NotVaccinated,
}

impl VaccinationFilter {
    pub fn matches(self, vaccinated: bool) -> bool {
        match self {
            VaccinationFilter::All => true,
            VaccinationFilter::Vaccinated => vaccinated,
            VaccinationFilter::NotVaccinated => !vaccinated,
        }
    }
}

/// Lowercased search text, ready to test fields against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Query(String);

impl Query {
    fn new(text: &str) -> Self {
        Self(text.trim().to_lowercase())
    }

    fn hits(&self, fields: &[&str]) -> bool {
        self.0.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&self.0))
    }
}

/// Animal list view: text over name, location and caretaker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalFilter {
    query: Query,
    pub species: SpeciesFilter,
    pub vaccination: VaccinationFilter,
}

impl AnimalFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: Query::new(query),
            ..Default::default()
        }
    }

    pub fn species(mut self, species: SpeciesFilter) -> Self {
        self.species = species;
        self
    }

    pub fn vaccination(mut self, vaccination: VaccinationFilter) -> Self {
        self.vaccination = vaccination;
        self
    }

    pub fn matches(&self, animal: &Animal) -> bool {
        self.query
            .hits(&[animal.name.as_str(), animal.location.as_str(), animal.caretaker.as_str()])
            && self.species.matches(animal.species)
            && self.vaccination.matches(animal.vaccinated)
    }

    pub fn apply<'a>(&self, animals: &'a [Animal]) -> Vec<&'a Animal> {
        animals.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Lost-animal view: text over name and last-seen location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LostAnimalFilter {
    query: Query,
    pub species: SpeciesFilter,
}

impl LostAnimalFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: Query::new(query),
            species: SpeciesFilter::All,
        }
    }

    pub fn species(mut self, species: SpeciesFilter) -> Self {
        self.species = species;
        self
    }

    pub fn matches(&self, animal: &LostAnimal) -> bool {
        self.query
            .hits(&[animal.name.as_str(), animal.last_seen_location.as_str()])
            && self.species.matches(animal.species)
    }

    pub fn apply<'a>(&self, animals: &'a [LostAnimal]) -> Vec<&'a LostAnimal> {
        animals.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Map side list: text over name and location only.
pub fn map_search<'a>(animals: &'a [Animal], query: &str) -> Vec<&'a Animal> {
    let query = Query::new(query);
    animals
        .iter()
        .filter(|a| query.hits(&[a.name.as_str(), a.location.as_str()]))
        .collect()
}
