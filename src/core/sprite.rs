//=========================================================================
// Sprites
//=========================================================================
//
// Index math for uniform sprite sheets and frame-range animations.
//
// A sheet is an image cut into `columns x rows` equal cells. Each cell
// carries a uniform `padding` margin, so the drawable sprite is the cell
// minus twice the padding:
//
// ```text
//   cell   = image / count          (per axis)
//   sprite = cell - 2 * padding
//   source = (col * cell_w + padding, row * cell_h + padding)
// ```
//
// Out-of-range lookups return `None`; a draw call with a bad index simply
// draws nothing. Decoding the image itself belongs to the backend.
//
//=========================================================================

//=== SpriteSheet =========================================================

/// Grid layout of a sprite sheet image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    columns: i32,
    rows: i32,
    padding: i32,
    cell_width: i32,
    cell_height: i32,
}

impl SpriteSheet {
    /// Describes an `image_width x image_height` image cut into
    /// `columns x rows` cells.
    ///
    /// # Panics
    ///
    /// Panics if `columns` or `rows` is not positive.
    pub fn new(image_width: i32, image_height: i32, columns: i32, rows: i32, padding: i32) -> Self {
        assert!(
            columns > 0 && rows > 0,
            "Sprite sheet needs a positive grid, got {}x{}",
            columns,
            rows
        );

        Self {
            columns,
            rows,
            padding,
            cell_width: image_width / columns,
            cell_height: image_height / rows,
        }
    }

    //--- Layout -----------------------------------------------------------

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of sprites on the sheet.
    pub fn count(&self) -> i32 {
        self.columns * self.rows
    }

    /// Drawable sprite width (cell width minus both margins).
    pub fn sprite_width(&self) -> i32 {
        self.cell_width - 2 * self.padding
    }

    /// Drawable sprite height (cell height minus both margins).
    pub fn sprite_height(&self) -> i32 {
        self.cell_height - 2 * self.padding
    }

    //--- Lookup -----------------------------------------------------------

    /// Image coordinates of the sprite at grid cell `(column, row)`.
    pub fn source_at(&self, column: i32, row: i32) -> Option<(i32, i32)> {
        if !(0..self.columns).contains(&column) || !(0..self.rows).contains(&row) {
            return None;
        }

        Some((
            column * self.cell_width + self.padding,
            row * self.cell_height + self.padding,
        ))
    }

    /// Image coordinates of the sprite at row-major `index`.
    pub fn source_of(&self, index: i32) -> Option<(i32, i32)> {
        if !(0..self.count()).contains(&index) {
            return None;
        }

        self.source_at(index % self.columns, index / self.columns)
    }
}

//=== Animation ===========================================================

/// Inclusive range of sprite indices played as one animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    start: i32,
    end: i32,
}

impl Animation {
    /// Frames advanced per animation tick.
    pub const ANIMATION_DELAY: i32 = 1;

    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn frame_count(&self) -> i32 {
        (self.end - self.start + 1).max(0)
    }

    pub fn contains(&self, index: i32) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Frame following `index`, wrapping back to `start` after `end`.
    ///
    /// An index outside the range restarts the animation.
    pub fn next_frame(&self, index: i32) -> i32 {
        if !self.contains(index) {
            return self.start;
        }

        let next = index + Self::ANIMATION_DELAY;
        if next > self.end {
            self.start
        } else {
            next
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
