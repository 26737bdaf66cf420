//! Layout system - rectangles and flex-based splitting

/// Rectangle bounds in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Create rectangle from terminal dimensions (fills entire screen)
    pub fn fullscreen(cols: u16, rows: u16) -> Self {
        Rect::new(0, 0, cols, rows)
    }

    /// Get right edge x-coordinate
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get bottom edge y-coordinate
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if point is inside rectangle
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Create a subrect with padding applied
    pub fn inner(&self, padding: u16) -> Self {
        let padding2 = padding.saturating_mul(2);
        Rect {
            x: self.x.saturating_add(padding),
            y: self.y.saturating_add(padding),
            width: self.width.saturating_sub(padding2),
            height: self.height.saturating_sub(padding2),
        }
    }

    /// A `width` x `height` rectangle centered in this one, clamped to fit
    pub fn centered(&self, width: u16, height: u16) -> Self {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Rect {
            x: self.x + (self.width - width) / 2,
            y: self.y + (self.height - height) / 2,
            width,
            height,
        }
    }
}

/// Flex direction for container layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
}

/// Size constraint for flex children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// Fixed size in cells
    Fixed(u16),
    /// Proportional size (flex grow factor)
    Flex(u16),
}

/// Flex layout calculator
#[derive(Debug, Clone)]
pub struct FlexLayout {
    direction: FlexDirection,
    gap: u16,
    padding: u16,
}

impl FlexLayout {
    pub fn new(direction: FlexDirection) -> Self {
        FlexLayout {
            direction,
            gap: 0,
            padding: 0,
        }
    }

    pub fn row() -> Self {
        Self::new(FlexDirection::Row)
    }

    pub fn column() -> Self {
        Self::new(FlexDirection::Column)
    }

    /// Set gap between children
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Set padding around container
    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    /// Calculate child rectangles for given container and sizes
    ///
    /// Flex children share the space left after fixed children and gaps.
    /// The last flex child absorbs the rounding remainder.
    pub fn layout(&self, container: Rect, sizes: &[Size]) -> Vec<Rect> {
        if sizes.is_empty() {
            return Vec::new();
        }

        let inner = container.inner(self.padding);
        let main_size = match self.direction {
            FlexDirection::Row => inner.width,
            FlexDirection::Column => inner.height,
        };

        let total_gap = self
            .gap
            .saturating_mul(sizes.len().saturating_sub(1) as u16);
        let fixed: u16 = sizes
            .iter()
            .map(|s| match s {
                Size::Fixed(n) => *n,
                Size::Flex(_) => 0,
            })
            .fold(0, u16::saturating_add);
        let flex_units: u16 = sizes
            .iter()
            .map(|s| match s {
                Size::Fixed(_) => 0,
                Size::Flex(f) => *f,
            })
            .fold(0, u16::saturating_add);

        let flex_space = main_size.saturating_sub(total_gap).saturating_sub(fixed);
        let unit = if flex_units > 0 {
            flex_space / flex_units
        } else {
            0
        };
        let last_flex = sizes.iter().rposition(|s| matches!(s, Size::Flex(_)));
        let remainder = flex_space.saturating_sub(unit.saturating_mul(flex_units));

        let mut rects = Vec::with_capacity(sizes.len());
        let mut offset = 0u16;

        for (i, size) in sizes.iter().enumerate() {
            let mut child = match size {
                Size::Fixed(n) => *n,
                Size::Flex(f) => unit.saturating_mul(*f),
            };
            if Some(i) == last_flex {
                child = child.saturating_add(remainder);
            }
            // Never spill past the container
            let child = child.min(main_size.saturating_sub(offset));

            rects.push(match self.direction {
                FlexDirection::Row => {
                    Rect::new(inner.x.saturating_add(offset), inner.y, child, inner.height)
                }
                FlexDirection::Column => {
                    Rect::new(inner.x, inner.y.saturating_add(offset), inner.width, child)
                }
            });
            offset = offset.saturating_add(child).saturating_add(self.gap);
        }

        rects
    }
}
