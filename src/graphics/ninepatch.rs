use serde::{Deserialize, Serialize};

use super::textureregion::TextureRegion;

/// Floats per vertex in the assembled buffer: x, y, u, v.
pub const VERTEX_SIZE: usize = 4;

/// A texture region cut into nine patches by four inset lines.
///
/// When drawn at an arbitrary size the four corners keep their pixel
/// dimensions, the edges stretch along one axis and the center stretches
/// along both. Patches with a zero-sized source cell are absent and emit
/// no vertices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NinePatch {
    patches: [Option<TextureRegion>; 9],
    left_width: f32,
    right_width: f32,
    top_height: f32,
    bottom_height: f32,
}

impl NinePatch {
    pub const TOP_LEFT: usize = 0;
    pub const TOP_CENTER: usize = 1;
    pub const TOP_RIGHT: usize = 2;
    pub const MIDDLE_LEFT: usize = 3;
    pub const MIDDLE_CENTER: usize = 4;
    pub const MIDDLE_RIGHT: usize = 5;
    pub const BOTTOM_LEFT: usize = 6;
    pub const BOTTOM_CENTER: usize = 7;
    pub const BOTTOM_RIGHT: usize = 8;

    /// Cut `region` into nine patches. `left`, `right`, `top` and `bottom`
    /// are pixel distances from the respective region edges defining the
    /// four cut lines.
    pub fn new(region: TextureRegion, left: u32, right: u32, top: u32, bottom: u32) -> Self {
        let middle_width = region.width.saturating_sub(left + right);
        let middle_height = region.height.saturating_sub(top + bottom);

        let column_x = [0, left, left + middle_width];
        let column_w = [left, middle_width, right];
        let row_y = [0, top, top + middle_height];
        let row_h = [top, middle_height, bottom];

        let mut patches: [Option<TextureRegion>; 9] = [None; 9];
        for row in 0..3 {
            for column in 0..3 {
                if column_w[column] > 0 && row_h[row] > 0 {
                    patches[row * 3 + column] = Some(region.region(
                        column_x[column],
                        row_y[row],
                        column_w[column],
                        row_h[row],
                    ));
                }
            }
        }

        NinePatch {
            patches,
            left_width: left as f32,
            right_width: right as f32,
            top_height: top as f32,
            bottom_height: bottom as f32,
        }
    }

    pub fn patch(&self, index: usize) -> Option<&TextureRegion> {
        self.patches[index].as_ref()
    }

    /// Smallest width the patch can be drawn at without inverting.
    pub fn total_inset_width(&self) -> f32 {
        self.left_width + self.right_width
    }

    /// Smallest height the patch can be drawn at without inverting.
    pub fn total_inset_height(&self) -> f32 {
        self.top_height + self.bottom_height
    }

    /// Assemble the vertex buffer for drawing at `(x, y)` with the given
    /// size: 4 vertices per present patch, [`VERTEX_SIZE`] floats each
    /// (x, y, u, v), corners in clockwise order from top-left.
    ///
    /// Corners keep their pixel size; the middle column and row absorb
    /// the remaining space (clamped at zero when the target is smaller
    /// than the insets).
    pub fn vertices(&self, x: f32, y: f32, width: f32, height: f32) -> Vec<f32> {
        let middle_width = (width - self.total_inset_width()).max(0.0);
        let middle_height = (height - self.total_inset_height()).max(0.0);

        let column_x = [x, x + self.left_width, x + self.left_width + middle_width];
        let column_w = [self.left_width, middle_width, self.right_width];
        let row_y = [y, y + self.top_height, y + self.top_height + middle_height];
        let row_h = [self.top_height, middle_height, self.bottom_height];

        let present = self.patches.iter().flatten().count();
        let mut buffer = Vec::with_capacity(present * 4 * VERTEX_SIZE);
        for row in 0..3 {
            for column in 0..3 {
                let Some(region) = &self.patches[row * 3 + column] else {
                    continue;
                };
                let x1 = column_x[column];
                let y1 = row_y[row];
                let x2 = x1 + column_w[column];
                let y2 = y1 + row_h[row];
                let (u, v, u2, v2) = (region.u(), region.v(), region.u2(), region.v2());
                buffer.extend_from_slice(&[
                    x1, y1, u, v, // top-left
                    x2, y1, u2, v, // top-right
                    x2, y2, u2, v2, // bottom-right
                    x1, y2, u, v2, // bottom-left
                ]);
            }
        }
        buffer
    }
}
