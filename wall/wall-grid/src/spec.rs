//! Grid specification.

use crate::error::{GridError, GridResult};

/// Specification of a curtain-wall grid.
///
/// A grid has `columns x rows` interior cells of `cell_width x
/// cell_height`, separated and enclosed by members of
/// `member_thickness` (in the wall plane) and `member_depth`
/// (perpendicular to it). Members form a closing border: there is one
/// more member than cells along each axis.
///
/// `columns = 0` or `rows = 0` is legal and means "closing members
/// only" on the axis in question; it is the dimensions, not the
/// counts, that must be positive.
///
/// # Examples
///
/// ```
/// use wall_grid::GridSpec;
///
/// let spec = GridSpec::new(5, 4, 1.0, 1.0, 0.1, 0.1);
/// assert!(spec.validate().is_ok());
/// assert_eq!(spec.overall_width(), 5.0 * 1.1 + 0.1);
///
/// // Or derive cell sizes from an overall span
/// let spec = GridSpec::from_overall(5.0, 10.0, 5, 5, 0.1, 0.1)?;
/// assert!(spec.cell_width > 0.0);
/// # Ok::<(), wall_grid::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Number of interior cell columns.
    pub columns: u32,

    /// Number of interior cell rows.
    pub rows: u32,

    /// Width of one interior cell.
    pub cell_width: f64,

    /// Height of one interior cell.
    pub cell_height: f64,

    /// Member thickness in the wall plane.
    pub member_thickness: f64,

    /// Member depth perpendicular to the wall plane.
    pub member_depth: f64,
}

impl GridSpec {
    /// Create a grid spec from explicit cell dimensions.
    ///
    /// Dimensions are not checked here; call [`GridSpec::validate`]
    /// (the tessellators do so on entry).
    #[must_use]
    pub const fn new(
        columns: u32,
        rows: u32,
        cell_width: f64,
        cell_height: f64,
        member_thickness: f64,
        member_depth: f64,
    ) -> Self {
        Self {
            columns,
            rows,
            cell_width,
            cell_height,
            member_thickness,
            member_depth,
        }
    }

    /// Derive a grid spec from an overall wall span.
    ///
    /// Cell sizes are what remains of `width x height` after the
    /// `columns + 1` (resp. `rows + 1`) members are subtracted,
    /// divided evenly among the cells.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidCount`] when `columns` or `rows` is 0
    ///   (the division requires at least one cell; build a spec with
    ///   [`GridSpec::new`] for closing-members-only grids).
    /// - [`GridError::InvalidDimension`] when a span, thickness, or
    ///   depth is zero or negative.
    /// - [`GridError::InvalidCellSize`] when the members leave no room
    ///   for the cells.
    pub fn from_overall(
        width: f64,
        height: f64,
        columns: u32,
        rows: u32,
        member_thickness: f64,
        member_depth: f64,
    ) -> GridResult<Self> {
        if columns == 0 {
            return Err(GridError::InvalidCount {
                name: "columns",
                value: columns,
            });
        }
        if rows == 0 {
            return Err(GridError::InvalidCount {
                name: "rows",
                value: rows,
            });
        }
        if width <= 0.0 {
            return Err(GridError::invalid_dimension("width", width));
        }
        if height <= 0.0 {
            return Err(GridError::invalid_dimension("height", height));
        }
        if member_thickness <= 0.0 {
            return Err(GridError::invalid_dimension(
                "member_thickness",
                member_thickness,
            ));
        }
        if member_depth <= 0.0 {
            return Err(GridError::invalid_dimension("member_depth", member_depth));
        }

        let cell_width =
            (width - f64::from(columns + 1) * member_thickness) / f64::from(columns);
        let cell_height =
            (height - f64::from(rows + 1) * member_thickness) / f64::from(rows);

        if cell_width <= 0.0 || cell_height <= 0.0 {
            return Err(GridError::InvalidCellSize {
                cell_width,
                cell_height,
            });
        }

        Ok(Self::new(
            columns,
            rows,
            cell_width,
            cell_height,
            member_thickness,
            member_depth,
        ))
    }

    /// Check all dimensions, failing fast before any vertex is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] naming the first
    /// offending field.
    pub fn validate(&self) -> GridResult<()> {
        if self.cell_width <= 0.0 {
            return Err(GridError::invalid_dimension("cell_width", self.cell_width));
        }
        if self.cell_height <= 0.0 {
            return Err(GridError::invalid_dimension(
                "cell_height",
                self.cell_height,
            ));
        }
        if self.member_thickness <= 0.0 {
            return Err(GridError::invalid_dimension(
                "member_thickness",
                self.member_thickness,
            ));
        }
        if self.member_depth <= 0.0 {
            return Err(GridError::invalid_dimension(
                "member_depth",
                self.member_depth,
            ));
        }
        Ok(())
    }

    /// Horizontal pitch: one cell plus one member.
    #[must_use]
    pub fn pitch_x(&self) -> f64 {
        self.cell_width + self.member_thickness
    }

    /// Vertical pitch: one cell plus one member.
    #[must_use]
    pub fn pitch_z(&self) -> f64 {
        self.cell_height + self.member_thickness
    }

    /// Overall wall width including the closing member.
    #[must_use]
    pub fn overall_width(&self) -> f64 {
        f64::from(self.columns) * self.pitch_x() + self.member_thickness
    }

    /// Overall wall height including the closing member.
    #[must_use]
    pub fn overall_height(&self) -> f64 {
        f64::from(self.rows) * self.pitch_z() + self.member_thickness
    }
}
