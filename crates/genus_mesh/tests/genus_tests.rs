//! crates/genus_mesh/tests/genus_tests.rs
//!
//! 亏格计算端到端测试
//!
//! 覆盖：
//! - 闭合曲面（四面体、立方体、环面、双环面）
//! - 多连通分量求和
//! - 带边界网格
//! - 无效面输入
//! - OBJ 文件读取

use genus_mesh::{
    analyze, analyze_obj_file, compute_genus, find_connected_components, HalfEdgeMesh,
    InvalidFaceKind, MeshError,
};
use std::collections::HashSet;
use std::io::Write;
use tempfile::NamedTempFile;

const EPS: f64 = 1e-12;

// ============================================================
// 测试网格
// ============================================================

fn tetrahedron() -> (Vec<[f64; 3]>, Vec<Vec<usize>>) {
    let positions = vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ];
    let faces = vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]];
    (positions, faces)
}

/// 顶点编号按 (x, y, z) 三个比特编码
fn cube() -> (Vec<[f64; 3]>, Vec<Vec<usize>>) {
    let positions = (0..8)
        .map(|i| [(i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64])
        .collect();
    let faces = vec![
        vec![0, 2, 3, 1],
        vec![4, 5, 7, 6],
        vec![0, 1, 5, 4],
        vec![2, 6, 7, 3],
        vec![0, 4, 6, 2],
        vec![1, 3, 7, 5],
    ];
    (positions, faces)
}

fn torus_positions(n: usize, m: usize) -> Vec<[f64; 3]> {
    let (big_r, small_r) = (3.0, 1.0);
    let mut positions = Vec::with_capacity(n * m);
    for i in 0..n {
        let u = i as f64 * std::f64::consts::TAU / n as f64;
        for j in 0..m {
            let v = j as f64 * std::f64::consts::TAU / m as f64;
            positions.push([
                (big_r + small_r * v.cos()) * u.cos(),
                (big_r + small_r * v.cos()) * u.sin(),
                small_r * v.sin(),
            ]);
        }
    }
    positions
}

/// 环面四边形网格 (n × m, 首尾环绕)
fn quad_torus(n: usize, m: usize) -> (Vec<[f64; 3]>, Vec<Vec<usize>>) {
    let idx = |i: usize, j: usize| (i % n) * m + (j % m);
    let mut faces = Vec::with_capacity(n * m);
    for i in 0..n {
        for j in 0..m {
            faces.push(vec![idx(i, j), idx(i + 1, j), idx(i + 1, j + 1), idx(i, j + 1)]);
        }
    }
    (torus_positions(n, m), faces)
}

/// 标准环面三角剖分：每个四边形沿对角线拆成两个三角形
fn triangulated_torus(n: usize, m: usize) -> (Vec<[f64; 3]>, Vec<Vec<usize>>) {
    let (positions, quads) = quad_torus(n, m);
    let faces = quads
        .iter()
        .flat_map(|q| [vec![q[0], q[1], q[2]], vec![q[0], q[2], q[3]]])
        .collect();
    (positions, faces)
}

/// 两个环面各挖去一个四边形后沿洞口粘合（连通和），亏格为 2
///
/// 第二个环面洞口的 4 个顶点被重映射到第一个环面上，原位置保留为孤立顶点。
fn double_torus(n: usize, m: usize) -> (Vec<[f64; 3]>, Vec<Vec<usize>>) {
    let (mut positions, mut faces) = quad_torus(n, m);
    let hole_a = faces.remove(0);

    let offset = positions.len();
    let (positions_b, faces_b) = quad_torus(n, m);
    positions.extend(positions_b.iter().map(|p| [p[0] + 10.0, p[1], p[2]]));

    let hole_b: Vec<usize> = faces_b[0].iter().map(|&v| v + offset).collect();
    // 反向粘合，保证洞口两侧的半边方向相反
    let glue = |v: usize| match hole_b.iter().position(|&b| b == v) {
        Some(0) => hole_a[1],
        Some(1) => hole_a[0],
        Some(2) => hole_a[3],
        Some(3) => hole_a[2],
        _ => v,
    };

    for face in faces_b.iter().skip(1) {
        faces.push(face.iter().map(|&v| glue(v + offset)).collect());
    }
    (positions, faces)
}

fn disjoint_union(
    a: (Vec<[f64; 3]>, Vec<Vec<usize>>),
    b: (Vec<[f64; 3]>, Vec<Vec<usize>>),
) -> (Vec<[f64; 3]>, Vec<Vec<usize>>) {
    let (mut positions, mut faces) = a;
    let offset = positions.len();
    positions.extend(b.0.iter().map(|p| [p[0] + 5.0, p[1], p[2]]));
    faces.extend(b.1.iter().map(|f| f.iter().map(|&v| v + offset).collect::<Vec<_>>()));
    (positions, faces)
}

// ============================================================
// 闭合曲面
// ============================================================

#[test]
fn test_tetrahedron_is_sphere() {
    let (positions, faces) = tetrahedron();
    let report = analyze(&positions, &faces).unwrap();

    assert_eq!(report.n_components(), 1);
    let c = &report.components[0];
    assert_eq!((c.vertices, c.edges, c.faces), (4, 6, 4));
    assert_eq!(c.euler_characteristic, 2);
    assert!(c.is_closed());
    assert!(report.genus.abs() < EPS);
}

#[test]
fn test_cube_of_quads() {
    let (positions, faces) = cube();
    let report = analyze(&positions, &faces).unwrap();

    assert_eq!(report.n_components(), 1);
    let c = &report.components[0];
    assert_eq!((c.vertices, c.edges, c.faces), (8, 12, 6));
    assert_eq!(c.euler_characteristic, 2);
    assert!(report.is_closed());
    assert!(report.genus.abs() < EPS);
}

#[test]
fn test_triangulated_torus() {
    let (positions, faces) = triangulated_torus(6, 4);
    let report = analyze(&positions, &faces).unwrap();

    assert_eq!(report.n_components(), 1);
    let c = &report.components[0];
    assert_eq!((c.vertices, c.edges, c.faces), (24, 72, 48));
    assert_eq!(c.euler_characteristic, 0);
    assert!(report.is_closed());
    assert!((report.genus - 1.0).abs() < EPS);
}

#[test]
fn test_quad_torus_grid() {
    let (positions, faces) = quad_torus(5, 3);
    let genus = compute_genus(&positions, &faces).unwrap();
    assert!((genus - 1.0).abs() < EPS);
}

#[test]
fn test_double_torus() {
    let (positions, faces) = double_torus(4, 4);
    let report = analyze(&positions, &faces).unwrap();

    assert_eq!(report.n_components(), 1);
    assert!(report.is_closed());
    assert_eq!(report.components[0].euler_characteristic, -2);
    assert!((report.genus - 2.0).abs() < EPS);
}

// ============================================================
// 多分量与边界
// ============================================================

#[test]
fn test_two_disjoint_tetrahedra() {
    let (positions, faces) = disjoint_union(tetrahedron(), tetrahedron());
    let mesh = HalfEdgeMesh::from_polygons(&positions, &faces).unwrap();

    let components = find_connected_components(&mesh);
    assert_eq!(components.len(), 2);
    assert_eq!(components[0].len(), 12);
    assert_eq!(components[1].len(), 12);

    let genus = compute_genus(&positions, &faces).unwrap();
    assert!(genus.abs() < EPS);
}

#[test]
fn test_genus_sums_over_components() {
    let (positions, faces) = disjoint_union(tetrahedron(), quad_torus(4, 4));
    let report = analyze(&positions, &faces).unwrap();

    assert_eq!(report.n_components(), 2);
    assert!(report.components[0].genus.abs() < EPS);
    assert!((report.components[1].genus - 1.0).abs() < EPS);
    assert!((report.genus - 1.0).abs() < EPS);
}

#[test]
fn test_single_triangle_half_genus() {
    let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let report = analyze(&positions, &[[0usize, 1, 2]]).unwrap();

    let c = &report.components[0];
    assert_eq!((c.vertices, c.edges, c.faces), (3, 3, 1));
    assert_eq!(c.euler_characteristic, 1);
    assert!((report.genus - 0.5).abs() < EPS);
}

#[test]
fn test_bowtie_counts_two_open_components() {
    // 两个三角形只在顶点 0 相接
    let positions = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, -1.0, 0.0],
    ];
    let faces = [[0usize, 1, 2], [0, 3, 4]];
    let report = analyze(&positions, &faces).unwrap();

    assert_eq!(report.n_components(), 2);
    assert!((report.genus - 1.0).abs() < EPS);
}

#[test]
fn test_empty_mesh_genus_zero() {
    let faces: Vec<Vec<usize>> = Vec::new();
    let genus = compute_genus::<[f64; 3], _>(&[], &faces).unwrap();
    assert_eq!(genus, 0.0);
}

#[test]
fn test_idempotent_bit_identical() {
    let (positions, faces) = disjoint_union(triangulated_torus(5, 4), cube());
    let a = compute_genus(&positions, &faces).unwrap();
    let b = compute_genus(&positions, &faces).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());

    let ra = analyze(&positions, &faces).unwrap();
    let rb = analyze(&positions, &faces).unwrap();
    assert_eq!(ra, rb);
}

#[test]
fn test_components_partition_halfedges() {
    let (positions, faces) = disjoint_union(double_torus(4, 3), tetrahedron());
    let mesh = HalfEdgeMesh::from_polygons(&positions, &faces).unwrap();
    let components = find_connected_components(&mesh);

    let mut seen = HashSet::new();
    for component in &components {
        assert!(!component.is_empty());
        for &he in component.halfedges() {
            assert!(seen.insert(he));
        }
    }
    assert_eq!(seen.len(), mesh.n_halfedges());
}

#[test]
fn test_mixed_arity_mesh_validates() {
    let (mut positions, mut faces) = cube();
    // 把顶面换成四个三角形的扇形
    positions.push([0.5, 0.5, 1.0]);
    faces[1] = vec![4, 5, 8];
    faces.extend([vec![5, 7, 8], vec![7, 6, 8], vec![6, 4, 8]]);

    let mesh = HalfEdgeMesh::from_polygons(&positions, &faces).unwrap();
    let report = mesh.validate();
    assert!(report.is_valid(), "{:?}", report.errors);
    assert_eq!(report.boundary_halfedges, 0);

    let genus = compute_genus(&positions, &faces).unwrap();
    assert!(genus.abs() < EPS);
}

// ============================================================
// 无效输入
// ============================================================

#[test]
fn test_face_with_two_indices_rejected() {
    let (positions, mut faces) = tetrahedron();
    faces.push(vec![0, 1]);

    let err = compute_genus(&positions, &faces).unwrap_err();
    assert!(err.is_invalid_face());
    assert!(matches!(
        err,
        MeshError::InvalidFace { face: 4, kind: InvalidFaceKind::TooFewVertices { count: 2 } }
    ));
}

#[test]
fn test_index_equal_to_vertex_count_rejected() {
    let (positions, mut faces) = tetrahedron();
    faces[2] = vec![1, 2, 4];

    let err = analyze(&positions, &faces).unwrap_err();
    assert!(matches!(
        err,
        MeshError::InvalidFace {
            face: 2,
            kind: InvalidFaceKind::VertexOutOfRange { vertex: 4, n_vertices: 4 }
        }
    ));
}

// ============================================================
// OBJ
// ============================================================

fn write_obj(positions: &[[f64; 3]], faces: &[Vec<usize>]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# generated").unwrap();
    for p in positions {
        writeln!(file, "v {} {} {}", p[0], p[1], p[2]).unwrap();
    }
    writeln!(file, "vn 0 0 1").unwrap();
    for f in faces {
        let refs: Vec<String> = f.iter().map(|v| format!("{}//1", v + 1)).collect();
        writeln!(file, "f {}", refs.join(" ")).unwrap();
    }
    file
}

#[test]
fn test_obj_torus_end_to_end() {
    let (positions, faces) = triangulated_torus(4, 4);
    let file = write_obj(&positions, &faces);

    let report = analyze_obj_file(file.path()).unwrap();
    assert_eq!(report.n_components(), 1);
    assert!((report.genus - 1.0).abs() < EPS);
}

#[test]
fn test_obj_invalid_face_propagates() {
    let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let file = write_obj(&positions, &[vec![0, 1, 3]]);

    let err = analyze_obj_file(file.path()).unwrap_err();
    assert!(err.is_invalid_face());
}

#[test]
fn test_obj_empty_file() {
    let file = NamedTempFile::new().unwrap();
    let report = analyze_obj_file(file.path()).unwrap();
    assert_eq!(report.n_components(), 0);
    assert_eq!(report.genus, 0.0);
}
