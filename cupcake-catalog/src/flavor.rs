use serde::{Deserialize, Serialize};

/// Flavors offered when no catalog is configured.
pub const DEFAULT_FLAVORS: [&str; 4] = ["Vanilla", "Strawberry", "Chocolate", "Rainbow"];

/// A single cupcake flavor. The index doubles as the flavor's complexity
/// rating, which feeds the pricing surcharge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flavor {
    pub index: u32,
    pub name: String,
}

/// Ordered, index-addressed list of the shop's flavors. Orders reference a
/// flavor by position, so the catalog order is part of its meaning and never
/// changes at runtime.
#[derive(Debug, Clone)]
pub struct FlavorCatalog {
    flavors: Vec<Flavor>,
}

impl FlavorCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let flavors = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Flavor {
                index: index as u32,
                name: name.into(),
            })
            .collect();
        Self { flavors }
    }

    pub fn get(&self, index: u32) -> Option<&Flavor> {
        self.flavors.get(index as usize)
    }

    pub fn name(&self, index: u32) -> Option<&str> {
        self.get(index).map(|flavor| flavor.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.flavors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flavors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flavor> {
        self.flavors.iter()
    }
}

impl Default for FlavorCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_FLAVORS)
    }
}
