//! API Regression Tests for the Wall Crate Ecosystem
//!
//! These tests serve as a regression suite to ensure the public API
//! remains stable and consistent across the wall crate ecosystem. They
//! are organized in tiers of increasing complexity:
//!
//! - Tier 1: Foundation (wall-types, interpolation)
//! - Tier 2: Solid Primitives (wall-solid)
//! - Tier 3: Curtain Walls (wall-grid)
//! - Tier 4: Brick Walls & Canvases (wall-brick, wall-canvas)
//! - Tier 5: Preset Storage (wall-presets)
//!
//! If any of these tests fail after API changes, it indicates a
//! breaking change that needs documentation in CHANGELOG.md and a
//! version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::cast_lossless)]

use wall::{prelude::*, types};

// =============================================================================
// TIER 1: Foundation - Basic Types and Interpolation
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn vertex_creation_and_access() {
        let v = types::Vertex::from_coords(1.0, 2.0, 3.0);
        assert!((v.position.x - 1.0).abs() < f64::EPSILON);
        assert!((v.position.y - 2.0).abs() < f64::EPSILON);
        assert!((v.position.z - 3.0).abs() < f64::EPSILON);

        let point = types::Point3::new(4.0, 5.0, 6.0);
        let v2 = types::Vertex::new(point);
        assert!((v2.position.x - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn quad_mesh_construction() {
        let mesh = QuadMesh::new();
        assert!(mesh.vertices.is_empty());
        assert!(mesh.faces.is_empty());

        let vertices = vec![
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 1.0),
            Vertex::from_coords(0.0, 0.0, 1.0),
        ];
        let faces = vec![[0, 1, 2, 3]];
        let mesh = QuadMesh::from_parts(vertices, faces);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn mesh_merge_keeps_indices_valid() {
        let mut a = QuadMesh::new();
        for _ in 0..2 {
            let mut b = QuadMesh::new();
            for x in 0..4 {
                b.push_vertex(Vertex::from_coords(f64::from(x), 0.0, 0.0));
            }
            b.faces.push([0, 1, 2, 3]);
            a.merge(&b);
        }
        assert_eq!(a.vertex_count(), 8);
        assert_eq!(a.faces[1], [4, 5, 6, 7]);
    }

    #[test]
    fn lerp_is_exact_at_endpoints() {
        let a = Point3::new(0.1, 0.2, 0.3);
        let b = Point3::new(0.7, 0.8, 0.9);
        assert_eq!(types::lerp(&a, &b, 0.0), a);
        assert_eq!(types::lerp(&a, &b, 1.0), b);
    }

    #[test]
    fn quad_degeneracy_detection() {
        let flat = Quad::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        );
        assert!(flat.is_degenerate(1e-9));
    }
}

// =============================================================================
// TIER 2: Solid Primitives
// =============================================================================

mod tier2_solids {
    use super::*;
    use wall::solid::{build_quad, build_strut};

    #[test]
    fn quad_primitive_shape() {
        let mesh = build_quad(Point3::new(1.0, 0.0, 2.0), 3.0, 4.0).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);

        // Spans origin to origin + (width, 0, height)
        let top_right = mesh.vertices[2].position;
        assert!((top_right.x - 4.0).abs() < f64::EPSILON);
        assert!((top_right.z - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn strut_primitive_shape() {
        let mesh = build_strut(Point3::new(0.0, 0.0, 0.0), 1.0, 2.0, 0.5).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 6);
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn non_positive_dimensions_rejected() {
        assert!(build_quad(Point3::new(0.0, 0.0, 0.0), 0.0, 1.0).is_err());
        assert!(build_strut(Point3::new(0.0, 0.0, 0.0), 1.0, -2.0, 0.5).is_err());
    }
}

// =============================================================================
// TIER 3: Curtain Walls
// =============================================================================

mod tier3_curtain_walls {
    use super::*;

    #[test]
    fn facade_counts_follow_grid() {
        let spec = GridSpec::new(4, 3, 1.0, 1.2, 0.1, 0.1);
        let facade = generate_frame_and_panels(&spec, WallStyle::Flat).unwrap();

        assert_eq!(facade.panel_count, 12);
        assert_eq!(facade.panels.face_count(), 12);
        assert_eq!(facade.vertical_members, 5);
        assert_eq!(facade.horizontal_members, 4);
        assert_eq!(facade.frame.face_count(), 6 * 9);
    }

    #[test]
    fn overall_spec_constructor() {
        let spec = GridSpec::from_overall(10.0, 6.0, 5, 3, 0.1, 0.1).unwrap();
        assert_eq!(spec.columns, 5);
        assert_eq!(spec.rows, 3);
        assert!((spec.overall_width() - 10.0).abs() < 1e-12);
        assert!((spec.overall_height() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn styles_are_constructible() {
        let spec = GridSpec::new(3, 2, 1.0, 1.0, 0.05, 0.08);
        for style in [
            WallStyle::Flat,
            WallStyle::Curved { radius: 6.0 },
            WallStyle::Angled { angle_deg: 15.0 },
            WallStyle::CurvedAngled {
                radius: 6.0,
                angle_deg: 15.0,
            },
        ] {
            let facade = generate_frame_and_panels(&spec, style).unwrap();
            assert_eq!(facade.panel_count, 6);
        }
    }

    #[test]
    fn invalid_spec_is_rejected() {
        let spec = GridSpec::new(4, 3, -1.0, 1.0, 0.1, 0.1);
        assert!(generate_frame_and_panels(&spec, WallStyle::Flat).is_err());
    }
}

// =============================================================================
// TIER 4: Brick Walls & Canvases
// =============================================================================

mod tier4_bricks_and_canvases {
    use super::*;

    #[test]
    fn brick_wall_generation() {
        let params = BrickParams::new(5.0, 2.0);
        let wall = generate_brick_wall(&params).unwrap();
        assert_eq!(wall.brick_count, wall.columns * wall.rows);
        assert_eq!(wall.mesh.face_count(), 6 * wall.brick_count as usize);
    }

    #[test]
    fn brick_params_builders() {
        let params = BrickParams::new(4.0, 2.0)
            .with_brick(0.5, 0.25, 0.2)
            .with_gap(0.02)
            .with_stagger(false)
            .with_style(WallStyle::Angled { angle_deg: 10.0 });
        assert!(params.validate().is_ok());
        assert!(!params.stagger);
    }

    #[test]
    fn canvas_generation_and_pinning() {
        let anchors = AnchorQuad::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 3.0),
            Point3::new(0.0, 0.0, 3.0),
        )
        .with_subdivision(4);
        let canvas = generate_anchor_canvas(&anchors).unwrap();

        assert_eq!(canvas.mesh.vertex_count(), 25);
        assert_eq!(canvas.mesh.face_count(), 16);
        for (slot, &idx) in canvas.corner_indices.iter().enumerate() {
            assert_eq!(
                canvas.mesh.vertices[idx as usize].position,
                anchors.corners[slot]
            );
        }
    }

    #[test]
    fn degenerate_canvas_rejected() {
        let p = Point3::new(0.0, 0.0, 0.0);
        assert!(generate_anchor_canvas(&AnchorQuad::new(p, p, p, p)).is_err());
    }
}

// =============================================================================
// TIER 5: Preset Storage
// =============================================================================

mod tier5_presets {
    use super::*;

    #[test]
    fn store_save_get_remove() {
        let mut store = PresetStore::new();
        let preset = ClothPreset {
            mass: 0.15,
            ..ClothPreset::default()
        };
        assert!(store.save("silk", preset).is_none());
        assert_eq!(store.get("silk"), Some(&preset));
        assert_eq!(store.remove("silk"), Some(preset));
        assert!(store.is_empty());
    }

    #[test]
    fn store_persists_to_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.json");

        let mut store = PresetStore::new();
        store.save("denim", ClothPreset::default());
        store.save_path(&path).unwrap();

        let loaded = PresetStore::load_path(&path).unwrap();
        assert_eq!(loaded, store);
        assert_eq!(loaded.names().collect::<Vec<_>>(), ["denim"]);
    }

    #[test]
    fn missing_preset_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::load_path(dir.path().join("absent.json")).unwrap();
        assert!(store.is_empty());
    }
}
