//! Curtain-wall generation entry point.

use tracing::debug;
use wall_types::{MeshTopology, QuadMesh};

use crate::error::GridResult;
use crate::frame::tessellate_frame;
use crate::panel::tessellate_panels;
use crate::spec::GridSpec;
use crate::style::WallStyle;

/// Result of curtain-wall generation.
///
/// The two meshes are independent buffers: they share coincident
/// geometry at the panel/member seams deliberately (not shared
/// indices), since a host composites them as separate renderable or
/// simulatable objects.
#[derive(Debug, Clone, PartialEq)]
pub struct FacadeResult {
    /// Frame members (mullions).
    pub frame: QuadMesh,

    /// Infill panels.
    pub panels: QuadMesh,

    /// Number of vertical members emitted (`columns + 1`).
    pub vertical_members: u32,

    /// Number of horizontal members emitted (`rows + 1`).
    pub horizontal_members: u32,

    /// Number of infill panels emitted (`columns * rows`).
    pub panel_count: u32,
}

impl std::fmt::Display for FacadeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Facade: {} + {} members, {} panels",
            self.vertical_members, self.horizontal_members, self.panel_count
        )
    }
}

/// Generate the frame and panel meshes of a curtain wall.
///
/// This is a pure function of its parameters: identical inputs yield
/// bit-identical vertex coordinates and face index lists, and each
/// call returns fresh buffers with no state carried between calls.
///
/// # Errors
///
/// Returns a [`crate::GridError`] when the spec or style fails
/// validation; no partial mesh is ever returned.
///
/// # Examples
///
/// ```
/// use wall_grid::{generate_frame_and_panels, GridSpec, WallStyle};
/// use wall_types::MeshTopology;
///
/// let spec = GridSpec::new(1, 1, 1.0, 1.0, 0.1, 0.1);
/// let facade = generate_frame_and_panels(&spec, WallStyle::Flat)?;
///
/// assert_eq!(facade.frame.face_count(), 24);
/// assert_eq!(facade.panels.face_count(), 1);
/// # Ok::<(), wall_grid::GridError>(())
/// ```
pub fn generate_frame_and_panels(spec: &GridSpec, style: WallStyle) -> GridResult<FacadeResult> {
    spec.validate()?;
    style.validate()?;

    let frame = tessellate_frame(spec, style)?;
    let panels = tessellate_panels(spec, style)?;

    debug!(
        "Generated {}x{} facade: {} frame faces, {} panel faces",
        spec.columns,
        spec.rows,
        frame.face_count(),
        panels.face_count()
    );

    Ok(FacadeResult {
        frame,
        panels,
        vertical_members: spec.columns + 1,
        horizontal_members: spec.rows + 1,
        panel_count: spec.columns * spec.rows,
    })
}
