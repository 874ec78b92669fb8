//! Viewport Mapping
//!
//! Maps between terminal cells and the shell's screen space. Screen space is
//! centered on the overview, x grows right and y grows down, matching body
//! positions. Terminal cells are about twice as tall as they are wide, so a
//! row covers [`CELL_ASPECT`] times the units of a column.

use ratatui::layout::Rect;

/// Height of a terminal cell relative to its width
pub const CELL_ASPECT: f64 = 2.0;

/// Screen-space width that must fit in the viewport
const VISIBLE_WIDTH: f64 = 900.0;

/// Screen-space height that must fit in the viewport
const VISIBLE_HEIGHT: f64 = 700.0;

/// A terminal area and its scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    area: Rect,
    units_per_col: f64,
}

impl Viewport {
    /// Fit the visible screen space into `area`
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let cols = f64::from(area.width.max(1));
        let rows = f64::from(area.height.max(1));
        let units_per_col = (VISIBLE_WIDTH / cols).max(VISIBLE_HEIGHT / (rows * CELL_ASPECT));
        Self {
            area,
            units_per_col,
        }
    }

    /// The terminal area
    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Screen units covered by one column
    #[must_use]
    pub fn units_per_col(&self) -> f64 {
        self.units_per_col
    }

    /// Screen units covered by one row
    #[must_use]
    pub fn units_per_row(&self) -> f64 {
        self.units_per_col * CELL_ASPECT
    }

    /// Canvas x bounds
    #[must_use]
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = f64::from(self.area.width) * self.units_per_col / 2.0;
        [-half, half]
    }

    /// Canvas y bounds
    #[must_use]
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = f64::from(self.area.height) * self.units_per_row() / 2.0;
        [-half, half]
    }

    /// Screen point to canvas coordinates (canvas y grows up)
    #[must_use]
    pub fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        (x, -y)
    }

    /// Center of a terminal cell in screen space, if inside the area
    #[must_use]
    pub fn cell_to_point(&self, col: u16, row: u16) -> Option<(f64, f64)> {
        if !self.contains(col, row) {
            return None;
        }
        let dx = f64::from(col - self.area.x) + 0.5 - f64::from(self.area.width) / 2.0;
        let dy = f64::from(row - self.area.y) + 0.5 - f64::from(self.area.height) / 2.0;
        Some((dx * self.units_per_col, dy * self.units_per_row()))
    }

    /// Terminal cell containing a screen point, if inside the area
    #[must_use]
    pub fn point_to_cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let col = (x / self.units_per_col + f64::from(self.area.width) / 2.0).floor();
        let row = (y / self.units_per_row() + f64::from(self.area.height) / 2.0).floor();
        if col < 0.0
            || row < 0.0
            || col >= f64::from(self.area.width)
            || row >= f64::from(self.area.height)
        {
            return None;
        }
        // In range, so the casts are exact
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cell = (self.area.x + col as u16, self.area.y + row as u16);
        Some(cell)
    }

    /// Rows a screen-space vertical offset spans
    #[must_use]
    pub fn rows_for(&self, offset: f64) -> u16 {
        let rows = (offset / self.units_per_row()).round();
        if rows <= 0.0 {
            0
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rows = rows.min(f64::from(u16::MAX)) as u16;
            rows
        }
    }

    fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.area.x
            && row >= self.area.y
            && col < self.area.x + self.area.width
            && row < self.area.y + self.area.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_region_fits() {
        for area in [Rect::new(0, 0, 80, 24), Rect::new(0, 0, 200, 30)] {
            let viewport = Viewport::new(area);
            let [left, right] = viewport.x_bounds();
            let [bottom, top] = viewport.y_bounds();
            assert!(right - left >= VISIBLE_WIDTH - 1e-9);
            assert!(top - bottom >= VISIBLE_HEIGHT - 1e-9);
            assert!((left + right).abs() < 1e-9);
        }
    }

    #[test]
    fn test_center_cell_is_near_origin() {
        let viewport = Viewport::new(Rect::new(0, 0, 80, 24));
        let (x, y) = viewport.cell_to_point(40, 12).unwrap();
        assert!(x.abs() <= viewport.units_per_col());
        assert!(y.abs() <= viewport.units_per_row());
    }

    #[test]
    fn test_cell_round_trip_with_offset_area() {
        let viewport = Viewport::new(Rect::new(5, 3, 60, 20));
        for (col, row) in [(5, 3), (34, 12), (64, 22)] {
            let (x, y) = viewport.cell_to_point(col, row).unwrap();
            assert_eq!(viewport.point_to_cell(x, y), Some((col, row)));
        }
    }

    #[test]
    fn test_outside_area() {
        let viewport = Viewport::new(Rect::new(5, 3, 60, 20));
        assert_eq!(viewport.cell_to_point(4, 10), None);
        assert_eq!(viewport.cell_to_point(10, 23), None);
        assert_eq!(viewport.point_to_cell(1e6, 0.0), None);
    }

    #[test]
    fn test_canvas_flips_y() {
        let viewport = Viewport::new(Rect::new(0, 0, 80, 24));
        assert_eq!(viewport.to_canvas(10.0, 20.0), (10.0, -20.0));
    }

    #[test]
    fn test_rows_for_offset() {
        let viewport = Viewport::new(Rect::new(0, 0, 80, 24));
        assert_eq!(viewport.rows_for(0.0), 0);
        assert_eq!(viewport.rows_for(-5.0), 0);
        assert!(viewport.rows_for(50.0) >= 1);
    }
}
