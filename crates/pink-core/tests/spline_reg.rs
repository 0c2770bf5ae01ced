//! Spline regression test
//!
//! Corresponds to the spline routines of Pink's `mcsplines.c` and the
//! `points2spline` / `drawsplinesorient2` commands.
//! Tests interpolation, continuity and tangent sampling of fitted splines.

use pink_core::{Dim, ListKind, NSAMPLES, PointList, SplineSet, points2spline};
use pink_test::RegParams;

fn spiral(n: usize) -> PointList {
    let mut pl = PointList::new(Dim::Three, ListKind::Binary);
    for i in 0..n {
        let a = i as f64 * 0.7;
        pl.push(&[10.0 * a.cos(), 10.0 * a.sin(), 2.0 * i as f64])
            .unwrap();
    }
    pl
}

#[test]
fn spline_reg() {
    let mut rp = RegParams::new("spline");

    // --- Test 1: interpolation at every control point ---
    let pl = spiral(12);
    let sp = points2spline(&pl).unwrap();
    rp.compare_values(12.0, sp.len() as f64, 0.0);
    rp.compare_values(11.0, sp.segments() as f64, 0.0);
    for (i, p) in pl.iter().enumerate() {
        let q = sp.eval(i as f64);
        for a in 0..3 {
            rp.compare_values(p.coords[a], q[a], 1e-9);
        }
    }

    // --- Test 2: C1 continuity at interior knots ---
    for i in 1..sp.len() - 1 {
        let t = i as f64;
        for axis in sp.axes() {
            let left = &axis.coeffs()[i - 1];
            let right = &axis.coeffs()[i];
            let dl = left[1] + 2.0 * left[2] * t + 3.0 * left[3] * t * t;
            let dr = right[1] + 2.0 * right[2] * t + 3.0 * right[3] * t * t;
            rp.compare_values(dl, dr, 1e-9);
        }
    }

    // --- Test 3: unit tangents ---
    let tangents = sp.sample_tangents(NSAMPLES).unwrap();
    rp.compare_values((11 * NSAMPLES) as f64, tangents.len() as f64, 0.0);
    for v in tangents.vectors() {
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        rp.compare_values(1.0, norm, 1e-12);
    }

    // --- Test 4: orientations of a spline set ---
    let mut set = SplineSet::new(Dim::Three);
    set.push(spiral(4)).unwrap();
    set.push(spiral(7)).unwrap();
    let v = set.orientations(NSAMPLES).unwrap();
    rp.compare_values(((3 + 6) * NSAMPLES) as f64, v.len() as f64, 0.0);

    // --- Test 5: deterministic text output ---
    let bytes1 = sp.write_to_bytes().unwrap();
    let bytes2 = points2spline(&pl).unwrap().write_to_bytes().unwrap();
    rp.compare_strings(&bytes1, &bytes2);

    assert!(rp.cleanup());
}
