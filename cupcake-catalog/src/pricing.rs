use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Pricing constants applied to every quote. All amounts are exact decimals;
/// currency totals must never pick up binary rounding artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat price charged per cupcake.
    pub price_per_cake: Decimal,

    /// Surcharge per step of flavor complexity (the catalog index).
    pub complexity_step: Decimal,

    /// Per-cake price of the extra-frosting add-on.
    pub frosting_per_cake: Decimal,

    /// Per-cake price of the sprinkles add-on.
    pub sprinkles_per_cake: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            price_per_cake: dec!(2),
            complexity_step: dec!(0.5),
            frosting_per_cake: dec!(1),
            sprinkles_per_cake: dec!(0.5),
        }
    }
}

/// Itemized result of quoting a single order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base: Decimal,
    pub complexity: Decimal,
    pub frosting: Decimal,
    pub sprinkles: Decimal,
    pub total: Decimal,
}

/// Quotes orders against a [`PricingConfig`].
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Quote an order. Add-ons are charged per cake; the complexity
    /// surcharge scales with the flavor index alone.
    pub fn quote(
        &self,
        flavor: u32,
        quantity: u32,
        extra_frosting: bool,
        add_sprinkles: bool,
    ) -> PriceBreakdown {
        let cakes = Decimal::from(quantity);

        let base = cakes * self.config.price_per_cake;
        let complexity = Decimal::from(flavor) * self.config.complexity_step;
        let frosting = if extra_frosting {
            cakes * self.config.frosting_per_cake
        } else {
            Decimal::ZERO
        };
        let sprinkles = if add_sprinkles {
            cakes * self.config.sprinkles_per_cake
        } else {
            Decimal::ZERO
        };

        PriceBreakdown {
            base,
            complexity,
            frosting,
            sprinkles,
            total: base + complexity + frosting + sprinkles,
        }
    }
}
