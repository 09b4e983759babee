//! Rounding and label helpers shared by the distributions.

/// Round `value` to `decimals` places, halves rounding up (towards +inf).
/// Matches JavaScript's `Math.round` applied to `value * 10^decimals`.
///
/// This is the rounding the storefront UI has always displayed, so `2.345`
/// becomes `2.35` and `-2.345` becomes `-2.34`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    round_half_up(value * factor) / factor
}

/// Share of `count` in `total` as a percentage with one decimal place.
///
/// Computed as `round(count / total * 1000) / 10`. A zero `total` yields `0`.
pub fn share_percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_half_up(count as f64 / total as f64 * 1000.0) / 10.0
}

/// Upper-case only the first character: `"electronics"` -> `"Electronics"`,
/// `"men's clothing"` -> `"Men's clothing"`.
pub fn capitalize_first(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// `value + 0.5` can itself round up in binary, so compare against the floor.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
