//! Linear ARGB gradients between anchor colors.
//!
//! Channels are stepped in single precision and truncated toward zero, so
//! step `i` of `n` between `from` and `to` is
//! `trunc(from + i * (to - from) / n)`. The end anchor itself is never
//! emitted; each block stops one step short of it.

use crate::color::Argb;
use crate::error::{Error, Result};

/// Per-channel start value and step, in `[a, r, g, b]` order.
struct Ramp {
    start: [f32; 4],
    step: [f32; 4],
}

impl Ramp {
    fn new(from: Argb, to: Argb, steps: usize) -> Self {
        let start = channels(from);
        let end = channels(to);
        let n = steps as f32;
        let mut step = [0.0; 4];
        for c in 0..4 {
            step[c] = (end[c] - start[c]) / n;
        }
        Self { start, step }
    }

    fn at(&self, i: usize) -> Argb {
        let k = i as f32;
        let v = |c: usize| (self.start[c] + self.step[c] * k) as u8;
        Argb::from_argb(v(0), v(1), v(2), v(3))
    }
}

fn channels(c: Argb) -> [f32; 4] {
    [
        f32::from(c.alpha()),
        f32::from(c.red()),
        f32::from(c.green()),
        f32::from(c.blue()),
    ]
}

/// Interpolate `steps` colors from `from` toward `to`.
///
/// The first element equals `from`. Zero steps yields an empty sequence.
pub fn interpolate_two(from: Argb, to: Argb, steps: usize) -> Vec<Argb> {
    let ramp = Ramp::new(from, to, steps);
    (0..steps).map(|i| ramp.at(i)).collect()
}

/// Interpolate `steps` colors through three or more anchors.
///
/// `steps` is split into `anchors.len() - 1` blocks of `steps / blocks`
/// colors each; the remainder goes to the last block. Each block ramps
/// between its pair of consecutive anchors. Two anchors fall back to
/// [`interpolate_two`].
///
/// # Errors
///
/// [`Error::TooFewAnchors`] for fewer than two anchors and
/// [`Error::TooFewSteps`] when a block would be empty.
pub fn interpolate_multi(anchors: &[Argb], steps: usize) -> Result<Vec<Argb>> {
    if anchors.len() < 2 {
        return Err(Error::TooFewAnchors {
            count: anchors.len(),
        });
    }
    let blocks = anchors.len() - 1;
    let per_block = steps / blocks;
    if per_block == 0 {
        return Err(Error::TooFewSteps {
            steps,
            anchors: anchors.len(),
        });
    }
    if blocks == 1 {
        return Ok(interpolate_two(anchors[0], anchors[1], steps));
    }
    let leftover = steps - per_block * blocks;

    let mut out = Vec::with_capacity(steps);
    for (block, pair) in anchors.windows(2).enumerate() {
        let len = if block == blocks - 1 {
            per_block + leftover
        } else {
            per_block
        };
        let ramp = Ramp::new(pair[0], pair[1], len);
        out.extend((0..len).map(|i| ramp.at(i)));
    }
    Ok(out)
}

/// Route a list of anchors to the two- or multi-anchor generator.
///
/// # Errors
///
/// See [`interpolate_multi`].
pub fn gradient(anchors: &[Argb], steps: usize) -> Result<Vec<Argb>> {
    match anchors {
        [from, to] => Ok(interpolate_two(*from, *to, steps)),
        _ => interpolate_multi(anchors, steps),
    }
}
