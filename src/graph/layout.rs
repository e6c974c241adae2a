use std::f64::consts::TAU;

use super::edge::*;

/// Positions on the unit circle; node `k` sits at angle `2π(k-1)/n`,
/// starting at the top and running clockwise.
pub fn circular_layout(n: NumNodes) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            (angle.sin(), -angle.cos())
        })
        .collect()
}

/// Maps unit-circle positions into a `width` x `height` canvas leaving
/// `margin` pixels on every side.
pub fn to_canvas(positions: &[(f64, f64)], width: u32, height: u32, margin: u32) -> Vec<(i32, i32)> {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    let radius = (width.min(height) as f64 / 2.0 - margin as f64).max(0.0);

    positions
        .iter()
        .map(|&(x, y)| {
            (
                (cx + x * radius).round() as i32,
                (cy + y * radius).round() as i32,
            )
        })
        .collect()
}
