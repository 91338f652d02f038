pub(crate) use std::f32::consts::TAU;

/// Differences at or below this are treated as "no animation".
pub(crate) const EPSILON: f32 = 1e-3;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub(crate) fn next_f32_01(&mut self) -> f32 {
        // 24 bits of precision.
        let v = self.next_u64() >> 40;
        (v as f32) * (1.0 / ((1u64 << 24) as f32))
    }
}

/// Hash `(seed, x)` to a stable value in `[0, 1)`.
pub(crate) fn noise01(seed: u64, x: i64) -> f32 {
    let mut rng = Rng64::new(seed ^ (x as u64).wrapping_mul(0xD6E8_FEB8_6659_FD93));
    rng.next_f32_01()
}

/// Smoothly interpolated 1D value noise in `[0, 1)`.
pub(crate) fn value_noise(seed: u64, x: f32) -> f32 {
    let i0 = x.floor();
    let t = x - i0;
    let i0 = i0 as i64;
    let a = noise01(seed, i0);
    let b = noise01(seed, i0 + 1);
    // smoothstep keeps the derivative continuous at lattice points
    let s = t * t * (3.0 - 2.0 * t);
    a + (b - a) * s
}

/// Fractional part wrapped into `[0, 1)`, also for negative inputs.
pub(crate) fn wrap01(x: f32) -> f32 {
    let w = x - x.floor();
    // x.floor() can round so that w == 1.0 for tiny negative x
    if w >= 1.0 { 0.0 } else { w }
}

/// Phase offset in radians spreading `count` rays evenly around a cycle.
pub(crate) fn ray_phase(index: u32, count: u32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    TAU * (index % count) as f32 / count as f32
}
