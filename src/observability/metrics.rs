//! Metrics collection.
//!
//! # Metrics
//! - `gateway_domain_rewrites_total` (counter): URI rewrites by outcome
//! - `gateway_authorization_rules_lookups_total` (counter): rules store
//!   lookups by operation

use metrics::counter;

pub fn record_domain_rewrite(outcome: &'static str) {
    counter!("gateway_domain_rewrites_total", "outcome" => outcome).increment(1);
}

pub fn record_rules_lookup(operation: &'static str) {
    counter!("gateway_authorization_rules_lookups_total", "operation" => operation).increment(1);
}
