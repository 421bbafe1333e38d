//! Geometric properties of the computed paths.

use std::f64::consts::PI;

mod common;

use common::stacked;
use hlpath::render::{ArcSegment, Segment, SegmentGeometry};
use hlpath::{Config, Contour, HighlightRange, LayoutSnapshot, Rect, Sides, compute_paths};

const EPSILON: f64 = 1e-9;

fn single_contour(rects: &[Rect], config: &Config) -> Contour {
    let layout = stacked(rects);
    let mut paths = compute_paths(&[HighlightRange::new(0, 0..rects.len())], &layout, config);
    assert_eq!(paths.len(), 1);
    let mut contours = paths.remove(0).contours;
    assert_eq!(contours.len(), 1);
    contours.remove(0)
}

fn arcs(contour: &Contour) -> Vec<ArcSegment> {
    contour
        .segments()
        .iter()
        .filter_map(|s| match s {
            Segment::Arc(a) => Some(*a),
            Segment::Line(_) => None,
        })
        .collect()
}

/// A few wrapped-paragraph shapes: first line starting mid-way, full middle
/// lines, short last line.
fn shapes() -> Vec<Vec<Rect>> {
    vec![
        vec![Rect::new(12.0, 0.0, 80.0, 18.0)],
        vec![Rect::new(40.0, 0.0, 60.0, 20.0), Rect::new(0.0, 20.0, 35.0, 20.0)],
        vec![
            Rect::new(40.0, 0.0, 60.0, 20.0),
            Rect::new(0.0, 20.0, 100.0, 20.0),
            Rect::new(0.0, 40.0, 70.0, 20.0),
        ],
        vec![
            Rect::new(0.0, 0.0, 30.0, 20.0),
            Rect::new(0.0, 20.0, 90.0, 20.0),
            Rect::new(0.0, 40.0, 90.0, 20.0),
            Rect::new(0.0, 60.0, 10.0, 20.0),
        ],
    ]
}

#[test]
fn single_line_area_matches_rounded_rect() {
    let config = Config::new()
        .with_padding_sides(Sides::new(2.0, 2.0, 1.0, 1.0))
        .with_corner_radius(4.0);
    let contour = single_contour(&[Rect::new(10.0, 10.0, 50.0, 20.0)], &config);
    let expected = 54.0 * 22.0 - (4.0 - PI) * 16.0;
    assert!((contour.area() - expected).abs() < EPSILON);
    assert_eq!(arcs(&contour).len(), 4);
    assert!(arcs(&contour).iter().all(|a| (a.radius - 4.0).abs() < EPSILON));
}

#[test]
fn sharp_contours_cover_the_union_exactly() {
    let config = Config::new().with_padding(3.0).with_corner_radius(0.0);
    for rects in shapes() {
        let contour = single_contour(&rects, &config);
        assert!(contour.is_closed(EPSILON));

        // Padded union: the stack widens by 3 on each side and grows by 3
        // above the first line and below the last
        let n = rects.len();
        let left = rects.iter().map(|r| r.left()).fold(f64::INFINITY, f64::min);
        let right = rects.iter().map(|r| r.right()).fold(f64::NEG_INFINITY, f64::max);
        let expected: f64 = rects
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let (l, rt) = if i > 0 && i + 1 < n {
                    (left, right)
                } else {
                    (r.left(), r.right())
                };
                let mut h = r.height();
                if i == 0 {
                    h += 3.0;
                }
                if i + 1 == n {
                    h += 3.0;
                }
                (rt - l + 6.0) * h
            })
            .sum();
        assert!(
            (contour.area() - expected).abs() < EPSILON,
            "area {} != {} for {:?}",
            contour.area(),
            expected,
            rects
        );
    }
}

#[test]
fn rounding_only_removes_corner_area() {
    let sharp = Config::new().with_padding(3.0).with_corner_radius(0.0);
    let round = sharp.clone().with_corner_radius(5.0);
    for rects in shapes() {
        let a0 = single_contour(&rects, &sharp).area();
        let contour = single_contour(&rects, &round);
        let removed: f64 = arcs(&contour)
            .iter()
            .map(|a| (1.0 - PI / 4.0) * a.radius * a.radius)
            .sum();
        assert!((a0 - removed - contour.area()).abs() < EPSILON);
    }
}

#[test]
fn pipeline_is_idempotent() {
    let layout = LayoutSnapshot::monospaced(&["the quick ", "brown fox ", "jumps"], 9.5, 17.25);
    let ranges = vec![HighlightRange::new(0, 4..23), HighlightRange::new(1, 23..25)];
    let config = Config::new().with_padding(2.5).with_corner_radius(3.3);
    let a = compute_paths(&ranges, &layout, &config);
    let b = compute_paths(&ranges, &layout, &config);
    assert_eq!(a, b);
    let da: Vec<String> = a.iter().map(|p| p.to_path_data()).collect();
    let db: Vec<String> = b.iter().map(|p| p.to_path_data()).collect();
    assert_eq!(da, db);
}

#[test]
fn larger_radius_lengthens_every_arc() {
    for rects in shapes() {
        let small = single_contour(&rects, &Config::new().with_corner_radius(2.0));
        let large = single_contour(&rects, &Config::new().with_corner_radius(3.0));
        let small_arcs = arcs(&small);
        let large_arcs = arcs(&large);
        assert_eq!(small_arcs.len(), large_arcs.len());
        for (s, l) in small_arcs.iter().zip(&large_arcs) {
            // Same corner, longer arc
            assert!((s.center - l.center).length() < 2.0);
            assert!(l.length() > s.length());
        }
    }
}

#[test]
fn inward_steps_stay_sharp_and_outward_steps_round() {
    let config = Config::new().with_padding(0.0).with_corner_radius(6.0);

    // Lower narrower: nothing rounds at the step
    let narrowing = single_contour(
        &[Rect::new(0.0, 0.0, 100.0, 20.0), Rect::new(0.0, 20.0, 40.0, 20.0)],
        &config,
    );
    let near_step = |contour: &Contour, x: f64| {
        arcs(contour)
            .iter()
            .filter(|a| (a.center.y - 20.0).abs() <= 6.0 + EPSILON && (a.center.x - x).abs() <= 6.0 + EPSILON)
            .count()
    };
    assert_eq!(arcs(&narrowing).len(), 4);
    assert_eq!(near_step(&narrowing, 40.0), 0);
    assert_eq!(near_step(&narrowing, 100.0), 0);

    // Lower wider: the outer corner of the step rounds, the inner one doesn't
    let widening = single_contour(
        &[Rect::new(0.0, 0.0, 40.0, 20.0), Rect::new(0.0, 20.0, 100.0, 20.0)],
        &config,
    );
    assert_eq!(arcs(&widening).len(), 5);
    assert_eq!(near_step(&widening, 40.0), 0);
    assert_eq!(near_step(&widening, 100.0), 1);
}

#[test]
fn contours_wind_clockwise_with_positive_area() {
    let config = Config::default();
    for rects in shapes() {
        let contour = single_contour(&rects, &config);
        assert!(contour.area() > 0.0);
        let bounds = contour.bounds().unwrap();
        let union = rects
            .iter()
            .copied()
            .reduce(|a, b| a.union(&b))
            .unwrap()
            .inflate(Sides::uniform(4.0));
        assert!((bounds.left() - union.left()).abs() < EPSILON);
        assert!((bounds.right() - union.right()).abs() < EPSILON);
        assert!((bounds.top() - union.top()).abs() < EPSILON);
        assert!((bounds.bottom() - union.bottom()).abs() < EPSILON);
    }
}
