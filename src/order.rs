//! Reading-order sort for detected panels.
//!
//! Two boxes whose top edges differ by more than `row_tolerance` (a fraction
//! of page height) are ordered top to bottom; otherwise they are treated as
//! the same row and ordered left to right.
//!
//! The rule is pairwise, not a clustering of rows. On staggered layouts it
//! can be non-transitive (A~B and B~C by the tolerance while A and C differ
//! by more), so the result then depends on the input order. The sort below is
//! a stable insertion sort so such inputs still produce a deterministic
//! sequence instead of tripping the total-order checks of `slice::sort_by`.

use crate::types::BoundingBox;
use std::cmp::Ordering;

/// Default row tolerance (5% of page height).
pub const DEFAULT_ROW_TOLERANCE: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadingOrder {
    pub row_tolerance: f64,
}

impl Default for ReadingOrder {
    fn default() -> Self {
        Self {
            row_tolerance: DEFAULT_ROW_TOLERANCE,
        }
    }
}

impl ReadingOrder {
    pub fn new(row_tolerance: f64) -> Self {
        Self { row_tolerance }
    }

    pub fn same_row(&self, a: &BoundingBox, b: &BoundingBox) -> bool {
        (a.y - b.y).abs() <= self.row_tolerance
    }

    pub fn compare(&self, a: &BoundingBox, b: &BoundingBox) -> Ordering {
        if self.same_row(a, b) {
            a.x.total_cmp(&b.x)
        } else {
            a.y.total_cmp(&b.y)
        }
    }

    /// Sort `boxes` in place. Equal keys keep their input order.
    pub fn sort(&self, boxes: &mut [BoundingBox]) {
        for i in 1..boxes.len() {
            let mut j = i;
            while j > 0 && self.compare(&boxes[j - 1], &boxes[j]) == Ordering::Greater {
                boxes.swap(j - 1, j);
                j -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bb(x: f64, y: f64) -> BoundingBox {
        BoundingBox {
            x,
            y,
            width: 0.2,
            height: 0.2,
        }
    }

    #[test]
    fn same_row_orders_left_to_right() {
        let mut boxes = vec![bb(0.6, 0.10), bb(0.1, 0.12)];
        ReadingOrder::default().sort(&mut boxes);
        assert_eq!(boxes[0].x, 0.1);
        assert_eq!(boxes[1].x, 0.6);
    }

    #[test]
    fn different_rows_order_top_to_bottom() {
        let mut boxes = vec![bb(0.1, 0.20), bb(0.6, 0.10)];
        ReadingOrder::default().sort(&mut boxes);
        assert_eq!(boxes[0].y, 0.10);
        assert_eq!(boxes[1].y, 0.20);
    }

    #[test]
    fn tops_exactly_tolerance_apart_share_a_row() {
        let order = ReadingOrder::default();
        let mut boxes = vec![bb(0.6, 10.0 / 100.0), bb(0.1, 15.0 / 100.0)];
        assert!(order.same_row(&boxes[0], &boxes[1]));
        order.sort(&mut boxes);
        assert_eq!(boxes[0].x, 0.1);
        assert_eq!(boxes[1].x, 0.6);

        // Page 1000 px tall, tops at rows 100 and 150.
        let upper = bb(0.7, 100.0 / 1000.0);
        let lower = bb(0.2, 150.0 / 1000.0);
        assert!(order.same_row(&upper, &lower));
        assert_eq!(order.compare(&upper, &lower), Ordering::Greater);
    }

    #[test]
    fn grid_layout_reads_row_major() {
        let mut boxes = vec![
            bb(0.5, 0.52),
            bb(0.0, 0.0),
            bb(0.5, 0.01),
            bb(0.0, 0.50),
        ];
        ReadingOrder::default().sort(&mut boxes);
        let got: Vec<_> = boxes.iter().map(|b| (b.x, b.y)).collect();
        assert_eq!(got, vec![(0.0, 0.0), (0.5, 0.01), (0.0, 0.50), (0.5, 0.52)]);
    }

    #[test]
    fn staggered_tiers_depend_on_input_order() {
        // a~b and b~c are within tolerance, a and c are not.
        let a = bb(0.8, 0.00);
        let b = bb(0.5, 0.04);
        let c = bb(0.1, 0.08);
        let order = ReadingOrder::default();
        assert!(order.same_row(&a, &b) && order.same_row(&b, &c));
        assert!(!order.same_row(&a, &c));

        let mut first = vec![a, b, c];
        order.sort(&mut first);
        let mut second = vec![c, a, b];
        order.sort(&mut second);
        assert_ne!(first, second);

        // Repeated runs on the same input are stable.
        let mut again = vec![a, b, c];
        order.sort(&mut again);
        assert_eq!(first, again);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut boxes = vec![
            BoundingBox {
                width: 0.3,
                ..bb(0.2, 0.3)
            },
            bb(0.2, 0.3),
        ];
        ReadingOrder::default().sort(&mut boxes);
        assert_eq!(boxes[0].width, 0.3);
    }
}
