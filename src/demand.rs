// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Elastic Demand
//
// adjusted = floor(base / (price / reference) ^ elasticity)
//
// With 0 < elasticity < 1 demand falls slower than price rises, so raising
// the ticket price still raises revenue, only with diminishing returns.

use crate::constants::EconomyConstants;

/// Demand multiplier for `price`, 1.0 at the reference price.
pub fn demand_factor(constants: &EconomyConstants, price: f64) -> f64 {
    let price = constants.sanitize_price(price);
    let ratio = price / constants.reference_ticket_price;
    1.0 / ratio.powf(constants.price_elasticity)
}

/// Visitors remaining after price deters some of `base_visitors`.
pub fn adjusted_visitors(constants: &EconomyConstants, base_visitors: f64, price: f64) -> f64 {
    if !base_visitors.is_finite() || base_visitors <= 0.0 {
        return 0.0;
    }
    (base_visitors * demand_factor(constants, price)).floor()
}
