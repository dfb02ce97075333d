//! Triangle meshes in local space.
//!
//! Two loaders are provided:
//! - [`Mesh::load`] / [`Mesh::parse`]: a lenient line reader that only
//!   understands `v x y z` and `f a b c`. Anything else is ignored, so stray
//!   OBJ statements (`vn`, `vt`, `usemtl`, comments) and malformed lines never
//!   fail the load.
//! - [`Mesh::from_obj`]: a strict loader backed by `tobj` that accepts the
//!   full OBJ syntax and triangulates polygons, but rejects broken files.

use std::path::Path;

use log::{debug, info};

use crate::error::MeshError;
use crate::math::vec3::Vec3;
use crate::triangle::Triangle;

/// Corners of the built-in cube, centred on the origin with edge length 1.
pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, 0.5),
];

/// Faces of the built-in cube as 0-based corner indices, wound
/// counter-clockwise when seen from outside.
pub const CUBE_FACES: [[usize; 3]; 12] = [
    // -X
    [0, 1, 3],
    [0, 3, 2],
    // +X
    [4, 6, 7],
    [4, 7, 5],
    // -Y
    [0, 4, 5],
    [0, 5, 1],
    // +Y
    [2, 3, 7],
    [2, 7, 6],
    // -Z
    [0, 2, 6],
    [0, 6, 4],
    // +Z
    [1, 5, 7],
    [1, 7, 3],
];

/// An ordered, immutable list of local-space triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// The unit cube.
    pub fn cube() -> Self {
        let triangles = CUBE_FACES
            .iter()
            .map(|&[a, b, c]| Triangle::new([CUBE_VERTICES[a], CUBE_VERTICES[b], CUBE_VERTICES[c]]))
            .collect();
        Self { triangles }
    }

    /// Reads a mesh with the lenient line reader.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MeshError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MeshError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mesh = Self::parse(&text);
        info!("loaded {} triangles from {}", mesh.len(), path.display());
        Ok(mesh)
    }

    /// Parses `v` and `f` statements, skipping everything else.
    ///
    /// Vertices are numbered from 1 in file order. A face may reference any
    /// vertex defined *before* it; faces naming an unknown vertex are dropped.
    /// Face tokens in `a/b/c` form use the leading position index.
    pub fn parse(text: &str) -> Self {
        let mut vertices = Vec::new();
        let mut triangles = Vec::new();
        let mut skipped = 0usize;

        for line in text.lines() {
            let mut tokens = line.split_whitespace();
            let parsed = match tokens.next() {
                Some("v") => parse_vertex(tokens).map(|v| vertices.push(v)),
                Some("f") => parse_face(tokens, &vertices).map(|t| triangles.push(t)),
                _ => continue,
            };
            if parsed.is_none() {
                skipped += 1;
            }
        }

        if skipped > 0 {
            debug!("skipped {skipped} malformed mesh lines");
        }
        Self { triangles }
    }

    /// Reads a mesh with `tobj`, triangulating polygons and merging every
    /// object in the file.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self, MeshError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut triangles = Vec::new();
        for model in &models {
            let mesh = &model.mesh;
            let position = |index: u32| {
                let i = index as usize * 3;
                Vec3::new(mesh.positions[i], mesh.positions[i + 1], mesh.positions[i + 2])
            };
            triangles.extend(mesh.indices.chunks_exact(3).map(|face| {
                Triangle::new([position(face[0]), position(face[1]), position(face[2])])
            }));
        }

        info!(
            "loaded {} triangles from {} objects in {}",
            triangles.len(),
            models.len(),
            path.display()
        );
        Ok(Self { triangles })
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<Vec3> {
    let mut coord = || tokens.next()?.parse::<f32>().ok();
    Some(Vec3::new(coord()?, coord()?, coord()?))
}

fn parse_face<'a>(mut tokens: impl Iterator<Item = &'a str>, vertices: &[Vec3]) -> Option<Triangle> {
    let mut corner = || {
        let index: usize = tokens.next()?.split('/').next()?.parse().ok()?;
        vertices.get(index.checked_sub(1)?).copied()
    };
    Some(Triangle::new([corner()?, corner()?, corner()?]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vertices_and_faces() {
        let mesh = Mesh::parse(
            "v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             v 0 0 1\n\
             f 1 2 3\n\
             f 1 3 4\n",
        );
        assert_eq!(mesh.len(), 2);
        assert_eq!(
            mesh.triangles()[1].points,
            [Vec3::ZERO, Vec3::Y, Vec3::Z]
        );
    }

    #[test]
    fn skips_malformed_and_unknown_lines() {
        let mesh = Mesh::parse(
            "# comment\n\
             o terrain\n\
             v 0 0 0\n\
             v 1 0 oops\n\
             v 1 0 0\n\
             vn 0 0 1\n\
             v 0 1 0\n\
             f 1 2\n\
             f 1 2 9\n\
             f 0 1 2\n\
             f 1 2 3\n\
             \n",
        );
        assert_eq!(mesh.len(), 1);
        assert_eq!(mesh.triangles()[0].points, [Vec3::ZERO, Vec3::X, Vec3::Y]);
    }

    #[test]
    fn face_tokens_use_leading_index() {
        let mesh = Mesh::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/4/7 2/5/8 3//9\n");
        assert_eq!(mesh.len(), 1);
        assert_eq!(mesh.triangles()[0].points[2], Vec3::Y);
    }

    #[test]
    fn faces_cannot_reference_later_vertices() {
        let mesh = Mesh::parse("v 0 0 0\nv 1 0 0\nf 1 2 3\nv 0 1 0\n");
        assert!(mesh.is_empty());
    }

    #[test]
    fn cube_faces_point_outward() {
        let cube = Mesh::cube();
        assert_eq!(cube.len(), 12);
        for triangle in cube.triangles() {
            let outward = triangle.centroid();
            assert!(
                triangle.normal().dot(outward) > 0.0,
                "inward face: {:?}",
                triangle.points
            );
        }
    }

    /// Writes `contents` to a uniquely named file in the system temp dir.
    fn write_temp_obj(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("painter3d-{}-{name}.obj", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn from_obj_triangulates_quads_and_ignores_normals() {
        let path = write_temp_obj(
            "quad",
            "o quad\n\
             v 0 0 0\n\
             v 1 0 0\n\
             v 1 1 0\n\
             v 0 1 0\n\
             vn 0 0 1\n\
             f 1//1 2//1 3//1 4//1\n",
        );
        let mesh = Mesh::from_obj(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let p = [
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::Y,
        ];
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.triangles()[0].points, [p[0], p[1], p[2]]);
        assert_eq!(mesh.triangles()[1].points, [p[0], p[2], p[3]]);
    }

    #[test]
    fn from_obj_merges_objects() {
        let path = write_temp_obj(
            "merge",
            "o first\n\
             v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             f 1 2 3\n\
             o second\n\
             v 0 0 1\n\
             f 1 2 4\n",
        );
        let mesh = Mesh::from_obj(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.triangles()[1].points, [Vec3::ZERO, Vec3::X, Vec3::Z]);
    }

    #[test]
    fn from_obj_missing_file_is_an_obj_error() {
        let err = Mesh::from_obj("does/not/exist.obj").unwrap_err();
        assert!(matches!(err, MeshError::Obj(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Mesh::load("does/not/exist.obj").unwrap_err();
        assert!(matches!(err, MeshError::Io { .. }));
    }
}
