//! Catmull-Rom reconstruction of the discrete trace samples.
//!
//! Converts a sequence of scalar y-samples (one per pixel column) into a
//! smooth piecewise-cubic path. Interpolation runs over sliding windows of
//! four consecutive points; each window emits `segments_per_span` samples,
//! so the output size scales linearly with the quality setting.

/// Reconstruct a drawable curve from `ys`.
///
/// The i-th input sample sits at x = `origin_x + i`. With fewer than four
/// input points there is no complete interpolation window and the output
/// is empty; that is the defined degenerate result, not an error.
pub fn reconstruct(ys: &[f32], origin_x: f32, segments_per_span: usize) -> Vec<[f32; 2]> {
    if ys.len() < 4 || segments_per_span == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity((ys.len() - 3) * segments_per_span);
    for i in 1..ys.len() - 2 {
        let x0 = origin_x + (i as f32 - 1.0);
        let x1 = origin_x + i as f32;
        let x2 = origin_x + (i as f32 + 1.0);
        let x3 = origin_x + (i as f32 + 2.0);
        let (y0, y1, y2, y3) = (ys[i - 1], ys[i], ys[i + 1], ys[i + 2]);
        for s in 0..segments_per_span {
            let t = s as f32 / segments_per_span as f32;
            out.push([
                catmull_rom(x0, x1, x2, x3, t),
                catmull_rom(y0, y1, y2, y3, t),
            ]);
        }
    }
    out
}

/// Standard Catmull-Rom cubic blend for one coordinate.
fn catmull_rom(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}
