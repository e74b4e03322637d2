// SPDX-License-Identifier: MIT OR Apache-2.0

use checkerboard_core::{BoardError, BoardGeometry, Coord, CIRCLE_PRECISION, MAX_GRID_WIDTH};

const EPS: f32 = 1e-5;

#[test]
fn grid_width_bounds() {
    assert_eq!(
        BoardGeometry::new(0),
        Err(BoardError::GridWidthOutOfRange(0))
    );
    assert_eq!(
        BoardGeometry::new(11),
        Err(BoardError::GridWidthOutOfRange(11))
    );

    for gw in 1..=MAX_GRID_WIDTH {
        assert!(BoardGeometry::new(gw).is_ok(), "grid width {} rejected", gw);
    }
}

#[test]
fn cell_boxes_are_axis_aligned_squares() {
    for gw in 1..=MAX_GRID_WIDTH {
        let geom = BoardGeometry::new(gw).unwrap();
        let boxw = geom.box_width();

        for i in 0..geom.cell_count() {
            let v = geom.cell_vertices(i);

            // corners line up on the two axes
            assert_eq!(v[0][0], v[1][0]);
            assert_eq!(v[2][0], v[3][0]);
            assert_eq!(v[0][1], v[2][1]);
            assert_eq!(v[1][1], v[3][1]);

            // both sides equal the computed box width
            assert!((v[2][0] - v[0][0] - boxw).abs() < EPS);
            assert!((v[1][1] - v[0][1] - boxw).abs() < EPS);
        }
    }
}

#[test]
fn adjacent_boxes_are_separated_by_one_border() {
    for gw in 2..=MAX_GRID_WIDTH {
        let geom = BoardGeometry::new(gw).unwrap();
        let border = geom.border_width();

        // horizontally adjacent: cell 0 and cell 1
        let a = geom.cell_vertices(0);
        let b = geom.cell_vertices(1);
        assert!((b[0][0] - a[2][0] - border).abs() < EPS);

        // vertically adjacent: cell 0 and the first cell of row 1
        let c = geom.cell_vertices(gw as usize);
        assert!((c[0][1] - a[1][1] - border).abs() < EPS);
    }
}

#[test]
fn circle_fan_emits_center_plus_rim() {
    let geom = BoardGeometry::new(10).unwrap();
    let fan = geom.circle_fan_vertices(400.0, 400.0, 800.0, 800.0, CIRCLE_PRECISION);

    assert_eq!(fan.len(), 3 * (CIRCLE_PRECISION + 2));

    // window center maps to the NDC origin
    let (cx, cy) = (fan[0], fan[1]);
    assert!(cx.abs() < EPS);
    assert!(cy.abs() < EPS);

    // every rim vertex sits at radius 1 / grid_width from the center
    for k in 1..(CIRCLE_PRECISION + 2) {
        let dx = fan[3 * k] - cx;
        let dy = fan[3 * k + 1] - cy;
        assert!((dx.hypot(dy) - 0.1).abs() < EPS);
        assert_eq!(fan[3 * k + 2], 0.0);
    }
}

#[test]
fn pixel_to_cell_maps_the_click_scenario() {
    let geom = BoardGeometry::new(10).unwrap();

    // 800x800 window: pixel (45, 760) lands on column 0, row 9
    assert_eq!(
        geom.pixel_to_cell(45.0, 760.0, 800.0, 800.0),
        Some(Coord::new(0, 9))
    );
    assert_eq!(
        geom.pixel_to_cell(0.0, 0.0, 800.0, 800.0),
        Some(Coord::new(0, 0))
    );
    assert_eq!(
        geom.pixel_to_cell(799.9, 799.9, 800.0, 800.0),
        Some(Coord::new(9, 9))
    );

    // outside the window
    assert_eq!(geom.pixel_to_cell(-1.0, 10.0, 800.0, 800.0), None);
    assert_eq!(geom.pixel_to_cell(800.0, 10.0, 800.0, 800.0), None);
}

#[test]
fn pixel_to_cell_inverts_piece_pixel_center() {
    for gw in 1..=MAX_GRID_WIDTH {
        let geom = BoardGeometry::new(gw).unwrap();

        for (win_w, win_h) in [(800.0, 800.0), (640.0, 480.0)] {
            for row in 0..gw {
                for col in 0..gw {
                    let coord = Coord::new(col, row);
                    let (px, py) = geom.piece_pixel_center(coord, win_w, win_h);
                    assert_eq!(
                        geom.pixel_to_cell(px, py, win_w, win_h),
                        Some(coord),
                        "center of {:?} mapped back to a different cell (gw={})",
                        coord,
                        gw
                    );
                }
            }
        }
    }
}
