//! Deterministic placement of decorative elements.
//!
//! `Mulberry32` is a tiny seeded generator; the same seed always yields the
//! same stream, so background layouts stay put across reloads without
//! storing anything server-side.

use serde::Serialize;

/// Seeded 32-bit mulberry32 stream of `f64` values in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Position and motion parameters for one floating background heart.
///
/// `left`/`top` are percentages of the viewport, `size` is in pixels,
/// `drift`/`xdrift` in pixels, `duration`/`delay` in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeartPlacement {
    pub id: usize,
    pub left: f64,
    pub top: f64,
    pub size: u32,
    pub opacity: f64,
    pub drift: f64,
    pub xdrift: f64,
    pub duration: f64,
    pub delay: f64,
}

/// Lay out `count` hearts from a fresh generator seeded with `seed`.
pub fn hearts(seed: u32, count: usize) -> Vec<HeartPlacement> {
    let mut rng = Mulberry32::new(seed);
    (0..count)
        .map(|id| HeartPlacement {
            id,
            left: rng.next_f64() * 100.0,
            top: rng.next_f64() * 100.0,
            size: 16 + (rng.next_f64() * 18.0).floor() as u32,
            opacity: 0.25 + rng.next_f64() * 0.55,
            drift: 28.0 + rng.next_f64() * 40.0,
            xdrift: 10.0 + rng.next_f64() * 30.0,
            duration: 6.0 + rng.next_f64() * 6.0,
            delay: rng.next_f64() * 3.0,
        })
        .collect()
}
