use std::sync::atomic::{AtomicUsize, Ordering};

static ID_COUNT: AtomicUsize = AtomicUsize::new(0);

// Generates a process-unique handle id. Ids start at 1; 0 means unset.
pub fn new_id() -> u32 {
    ID_COUNT.fetch_add(1, Ordering::SeqCst) as u32 + 1
}

// Wall clock time in milliseconds.
pub fn timestamp() -> f64 {
    let timespec = time::get_time();
    timespec.sec as f64 * 1000.0 + (timespec.nsec as f64 / 1e6)
}

/// The identity matrix.
pub fn identity() -> [f32; 16] {
    identity_matrix!()
}

/// Multiplies two column-major matrices: out = a * b.
pub fn multiply_matrix(a: &[f32; 16], b: &[f32; 16], out: &mut [f32; 16]) {
    let mut tmp = [0.0; 16];
    for i in 0..4 {
        let (b0, b1, b2, b3) = (b[i * 4], b[i * 4 + 1], b[i * 4 + 2], b[i * 4 + 3]);
        tmp[i * 4] = b0 * a[0] + b1 * a[4] + b2 * a[8] + b3 * a[12];
        tmp[i * 4 + 1] = b0 * a[1] + b1 * a[5] + b2 * a[9] + b3 * a[13];
        tmp[i * 4 + 2] = b0 * a[2] + b1 * a[6] + b2 * a[10] + b3 * a[14];
        tmp[i * 4 + 3] = b0 * a[3] + b1 * a[7] + b2 * a[11] + b3 * a[15];
    }
    *out = tmp;
}

/// Computes the inverse of a column-major matrix.
/// Returns false and leaves `out` untouched if the matrix is singular.
pub fn inverse_matrix(m: &[f32; 16], out: &mut [f32; 16]) -> bool {
    let det = determinant4x4(m);
    if det == 0.0 {
        return false;
    }
    let mut adjoint = [0.0; 16];
    adjoint_matrix(m, &mut adjoint);
    let inv_det = 1.0 / det;
    for i in 0..16 {
        out[i] = adjoint[i] * inv_det;
    }
    true
}

/// Column-major translation matrix.
pub fn translation_matrix(x: f32, y: f32, z: f32) -> [f32; 16] {
    let mut m = identity_matrix!();
    m[12] = x;
    m[13] = y;
    m[14] = z;
    m
}

/// Symmetric perspective projection, column-major.
/// `fov_y` is the full vertical field of view in radians.
pub fn perspective_matrix(fov_y: f32, aspect: f32, near: f32, far: f32) -> [f32; 16] {
    let f = 1.0 / (fov_y * 0.5).tan();
    let nf = 1.0 / (near - far);
    let mut m = [0.0; 16];
    m[0] = f / aspect;
    m[5] = f;
    m[10] = (far + near) * nf;
    m[11] = -1.0;
    m[14] = 2.0 * far * near * nf;
    m
}

// Classical adjoint: the transpose of the cofactor matrix.
fn adjoint_matrix(m: &[f32; 16], out: &mut [f32; 16]) {
    let (a1, a2, a3, a4) = (m[0], m[1], m[2], m[3]);
    let (b1, b2, b3, b4) = (m[4], m[5], m[6], m[7]);
    let (c1, c2, c3, c4) = (m[8], m[9], m[10], m[11]);
    let (d1, d2, d3, d4) = (m[12], m[13], m[14], m[15]);

    out[0] = determinant3x3(b2, b3, b4, c2, c3, c4, d2, d3, d4);
    out[1] = -determinant3x3(a2, a3, a4, c2, c3, c4, d2, d3, d4);
    out[2] = determinant3x3(a2, a3, a4, b2, b3, b4, d2, d3, d4);
    out[3] = -determinant3x3(a2, a3, a4, b2, b3, b4, c2, c3, c4);

    out[4] = -determinant3x3(b1, b3, b4, c1, c3, c4, d1, d3, d4);
    out[5] = determinant3x3(a1, a3, a4, c1, c3, c4, d1, d3, d4);
    out[6] = -determinant3x3(a1, a3, a4, b1, b3, b4, d1, d3, d4);
    out[7] = determinant3x3(a1, a3, a4, b1, b3, b4, c1, c3, c4);

    out[8] = determinant3x3(b1, b2, b4, c1, c2, c4, d1, d2, d4);
    out[9] = -determinant3x3(a1, a2, a4, c1, c2, c4, d1, d2, d4);
    out[10] = determinant3x3(a1, a2, a4, b1, b2, b4, d1, d2, d4);
    out[11] = -determinant3x3(a1, a2, a4, b1, b2, b4, c1, c2, c4);

    out[12] = -determinant3x3(b1, b2, b3, c1, c2, c3, d1, d2, d3);
    out[13] = determinant3x3(a1, a2, a3, c1, c2, c3, d1, d2, d3);
    out[14] = -determinant3x3(a1, a2, a3, b1, b2, b3, d1, d2, d3);
    out[15] = determinant3x3(a1, a2, a3, b1, b2, b3, c1, c2, c3);
}

fn determinant4x4(m: &[f32; 16]) -> f32 {
    let (a1, a2, a3, a4) = (m[0], m[1], m[2], m[3]);
    let (b1, b2, b3, b4) = (m[4], m[5], m[6], m[7]);
    let (c1, c2, c3, c4) = (m[8], m[9], m[10], m[11]);
    let (d1, d2, d3, d4) = (m[12], m[13], m[14], m[15]);

    a1 * determinant3x3(b2, b3, b4, c2, c3, c4, d2, d3, d4)
        - b1 * determinant3x3(a2, a3, a4, c2, c3, c4, d2, d3, d4)
        + c1 * determinant3x3(a2, a3, a4, b2, b3, b4, d2, d3, d4)
        - d1 * determinant3x3(a2, a3, a4, b2, b3, b4, c2, c3, c4)
}

fn determinant3x3(
    a1: f32,
    a2: f32,
    a3: f32,
    b1: f32,
    b2: f32,
    b3: f32,
    c1: f32,
    c2: f32,
    c3: f32,
) -> f32 {
    a1 * determinant2x2(b2, b3, c2, c3) - b1 * determinant2x2(a2, a3, c2, c3)
        + c1 * determinant2x2(a2, a3, b2, b3)
}

fn determinant2x2(a: f32, b: f32, c: f32, d: f32) -> f32 {
    a * d - b * c
}
