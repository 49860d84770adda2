use chrono::{DateTime, Utc};
use cupcake_catalog::{FlavorCatalog, PriceBreakdown, PricingEngine};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Advisory quantity bounds surfaced to order forms. Writes outside the
/// range are not rejected.
pub const QUANTITY_MIN: u32 = 3;
pub const QUANTITY_MAX: u32 = 20;

/// A single in-progress cupcake order. One instance exists per checkout
/// flow; it is mutated in place by whichever caller currently owns the flow
/// and discarded when the flow ends.
///
/// The two add-on flags are private: disabling special requests must clear
/// both, so they are only reachable through setters.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Order {
    /// Index into the flavor catalog.
    pub flavor: u32,
    pub quantity: u32,
    special_request_enabled: bool,
    extra_frosting: bool,
    add_sprinkles: bool,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub zip: String,
}

impl Order {
    pub fn new() -> Self {
        Self {
            flavor: 0,
            quantity: QUANTITY_MIN,
            special_request_enabled: false,
            extra_frosting: false,
            add_sprinkles: false,
            name: String::new(),
            street_address: String::new(),
            city: String::new(),
            zip: String::new(),
        }
    }

    pub fn special_request_enabled(&self) -> bool {
        self.special_request_enabled
    }

    pub fn extra_frosting(&self) -> bool {
        self.extra_frosting
    }

    pub fn add_sprinkles(&self) -> bool {
        self.add_sprinkles
    }

    /// Toggle the special-request umbrella. Disabling it resets both add-on
    /// flags; enabling it sets neither.
    pub fn set_special_request_enabled(&mut self, enabled: bool) {
        self.special_request_enabled = enabled;
        if !enabled {
            self.extra_frosting = false;
            self.add_sprinkles = false;
        }
    }

    /// Plain setter. Callers are expected to offer this add-on only while
    /// special requests are enabled.
    pub fn set_extra_frosting(&mut self, extra_frosting: bool) {
        self.extra_frosting = extra_frosting;
    }

    /// Plain setter. Callers are expected to offer this add-on only while
    /// special requests are enabled.
    pub fn set_add_sprinkles(&mut self, add_sprinkles: bool) {
        self.add_sprinkles = add_sprinkles;
    }

    /// True once every delivery field has content. Emptiness is the only
    /// check; length or format validation would reject real addresses.
    pub fn has_valid_address(&self) -> bool {
        !(self.name.is_empty()
            || self.street_address.is_empty()
            || self.city.is_empty()
            || self.zip.is_empty())
    }

    /// Itemized price of the order as it currently stands.
    pub fn quote(&self, pricing: &PricingEngine) -> PriceBreakdown {
        pricing.quote(
            self.flavor,
            self.quantity,
            self.extra_frosting,
            self.add_sprinkles,
        )
    }

    /// Total under the default pricing constants.
    pub fn total_cost(&self) -> Decimal {
        self.quote(&PricingEngine::default()).total
    }

    /// Apply a batch of field writes. The special-request umbrella is
    /// applied last: a single update that disables it always leaves both
    /// add-ons false, even if the same update tried to switch one on.
    pub fn apply(&mut self, update: OrderUpdate) {
        if let Some(flavor) = update.flavor {
            self.flavor = flavor;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(street_address) = update.street_address {
            self.street_address = street_address;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(zip) = update.zip {
            self.zip = zip;
        }
        if let Some(extra_frosting) = update.extra_frosting {
            self.set_extra_frosting(extra_frosting);
        }
        if let Some(add_sprinkles) = update.add_sprinkles {
            self.set_add_sprinkles(add_sprinkles);
        }
        if let Some(enabled) = update.special_request_enabled {
            self.set_special_request_enabled(enabled);
        }
    }

    /// Turn the order into an immutable receipt. Fails when the delivery
    /// address is incomplete or the flavor index resolves to nothing in the
    /// catalog.
    pub fn place(
        &self,
        catalog: &FlavorCatalog,
        pricing: &PricingEngine,
    ) -> Result<PlacedOrder, PlaceError> {
        if !self.has_valid_address() {
            return Err(PlaceError::InvalidAddress);
        }

        let flavor = catalog
            .get(self.flavor)
            .ok_or(PlaceError::UnknownFlavor(self.flavor))?;
        let breakdown = self.quote(pricing);

        Ok(PlacedOrder {
            id: Uuid::new_v4(),
            flavor: flavor.name.clone(),
            quantity: self.quantity,
            extra_frosting: self.extra_frosting,
            add_sprinkles: self.add_sprinkles,
            name: self.name.clone(),
            street_address: self.street_address.clone(),
            city: self.city.clone(),
            zip: self.zip.clone(),
            total: breakdown.total,
            breakdown,
            placed_at: Utc::now(),
        })
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

/// A batch of optional field writes against an [`Order`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub flavor: Option<u32>,
    pub quantity: Option<u32>,
    pub special_request_enabled: Option<bool>,
    pub extra_frosting: Option<bool>,
    pub add_sprinkles: Option<bool>,
    pub name: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
}

/// Immutable receipt minted when an order is placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub id: Uuid,
    pub flavor: String,
    pub quantity: u32,
    pub extra_frosting: bool,
    pub add_sprinkles: bool,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub zip: String,
    pub breakdown: PriceBreakdown,
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlaceError {
    #[error("delivery address is incomplete")]
    InvalidAddress,

    #[error("unknown flavor index: {0}")]
    UnknownFlavor(u32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn order_with_address() -> Order {
        let mut order = Order::new();
        order.name = "Ann".to_string();
        order.street_address = "1 Rd".to_string();
        order.city = "X".to_string();
        order.zip = "90210".to_string();
        order
    }

    #[test]
    fn default_order() {
        let order = Order::new();

        assert_eq!(order.flavor, 0);
        assert_eq!(order.quantity, 3);
        assert!(!order.special_request_enabled());
        assert!(!order.extra_frosting());
        assert!(!order.add_sprinkles());
        assert!(order.name.is_empty());
        assert!(order.street_address.is_empty());
        assert!(order.city.is_empty());
        assert!(order.zip.is_empty());
        assert!(!order.has_valid_address());
    }

    #[test]
    fn disabling_special_requests_clears_both_add_ons() {
        let mut order = Order::new();
        order.set_special_request_enabled(true);
        order.set_extra_frosting(true);
        order.set_add_sprinkles(true);

        order.set_special_request_enabled(false);

        assert!(!order.extra_frosting());
        assert!(!order.add_sprinkles());
    }

    #[test]
    fn enabling_special_requests_sets_neither_add_on() {
        let mut order = Order::new();

        order.set_special_request_enabled(true);

        assert!(!order.extra_frosting());
        assert!(!order.add_sprinkles());
    }

    #[test]
    fn address_is_invalid_while_any_field_is_empty() {
        let mut order = Order::new();
        order.name = "Ann".to_string();
        order.street_address = "1 Rd".to_string();
        order.city = "X".to_string();

        assert!(!order.has_valid_address());

        order.zip = "90210".to_string();
        assert!(order.has_valid_address());
    }

    #[test]
    fn plain_minimum_order_costs_six() {
        let order = Order::new();

        assert_eq!(order.total_cost(), dec!(6.00));
    }

    #[test]
    fn loaded_order_costs_eighteen_fifty() {
        let mut order = Order::new();
        order.flavor = 2;
        order.quantity = 5;
        order.set_special_request_enabled(true);
        order.set_extra_frosting(true);
        order.set_add_sprinkles(true);

        // 2*5 + 2/2 + 5 + 5/2
        assert_eq!(order.total_cost(), dec!(18.50));
    }

    #[test]
    fn total_cost_never_decreases_with_quantity() {
        let mut order = Order::new();
        order.flavor = 1;
        order.set_special_request_enabled(true);
        order.set_extra_frosting(true);

        let mut previous = Decimal::ZERO;
        for quantity in QUANTITY_MIN..=QUANTITY_MAX {
            order.quantity = quantity;
            let total = order.total_cost();
            assert!(total >= previous);
            previous = total;
        }
    }

    #[test]
    fn update_applies_every_field() {
        let mut order = Order::new();

        order.apply(OrderUpdate {
            flavor: Some(3),
            quantity: Some(12),
            special_request_enabled: Some(true),
            extra_frosting: Some(true),
            add_sprinkles: Some(true),
            name: Some("Ann".to_string()),
            street_address: Some("1 Rd".to_string()),
            city: Some("X".to_string()),
            zip: Some("90210".to_string()),
        });

        assert_eq!(order.flavor, 3);
        assert_eq!(order.quantity, 12);
        assert!(order.special_request_enabled());
        assert!(order.extra_frosting());
        assert!(order.add_sprinkles());
        assert!(order.has_valid_address());
    }

    #[test]
    fn update_disabling_special_requests_wins_over_add_ons() {
        let mut order = Order::new();
        order.set_special_request_enabled(true);
        order.set_extra_frosting(true);

        order.apply(OrderUpdate {
            special_request_enabled: Some(false),
            add_sprinkles: Some(true),
            ..Default::default()
        });

        assert!(!order.special_request_enabled());
        assert!(!order.extra_frosting());
        assert!(!order.add_sprinkles());
    }

    #[test]
    fn placing_without_an_address_is_rejected() {
        let order = Order::new();

        let result = order.place(&FlavorCatalog::default(), &PricingEngine::default());

        assert_eq!(result.unwrap_err(), PlaceError::InvalidAddress);
    }

    #[test]
    fn placing_with_an_unresolvable_flavor_is_rejected() {
        let mut order = order_with_address();
        order.flavor = 7;

        let result = order.place(&FlavorCatalog::default(), &PricingEngine::default());

        assert_eq!(result.unwrap_err(), PlaceError::UnknownFlavor(7));
    }

    #[test]
    fn placing_mints_a_receipt_matching_the_order() {
        let mut order = order_with_address();
        order.flavor = 2;
        order.quantity = 5;
        order.set_special_request_enabled(true);
        order.set_extra_frosting(true);
        order.set_add_sprinkles(true);

        let receipt = order
            .place(&FlavorCatalog::default(), &PricingEngine::default())
            .unwrap();

        assert_eq!(receipt.flavor, "Chocolate");
        assert_eq!(receipt.quantity, 5);
        assert!(receipt.extra_frosting);
        assert!(receipt.add_sprinkles);
        assert_eq!(receipt.name, "Ann");
        assert_eq!(receipt.total, dec!(18.50));
        assert_eq!(receipt.total, order.total_cost());
        assert_eq!(receipt.breakdown.total, receipt.total);
    }
}
