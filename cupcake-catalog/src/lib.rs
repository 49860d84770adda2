pub mod flavor;
pub mod pricing;

pub use flavor::{Flavor, FlavorCatalog, DEFAULT_FLAVORS};
pub use pricing::{PriceBreakdown, PricingConfig, PricingEngine};
