/// Create a 3x3 box blur kernel with uniform weights summing to one.
pub fn box_kernel3() -> [[f32; 3]; 3] {
    [[1.0 / 9.0; 3]; 3]
}

/// Create the fixed 3x3 gaussian blur kernel.
///
/// The weights are the binomial approximation `[[1, 2, 1], [2, 4, 2], [1, 2, 1]] / 16`,
/// center-peaked and summing to one.
pub fn gaussian_kernel3() -> [[f32; 3]; 3] {
    [
        [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
        [2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0],
        [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
    ]
}
