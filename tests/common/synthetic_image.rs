use cell_segmenter::image::ImageF32;

/// Generates a grid with every pixel set to `value`.
pub fn uniform_f32(width: usize, height: usize, value: f32) -> ImageF32 {
    ImageF32::from_vec(width, height, vec![value; width * height])
}

/// Generates a centered `side`×`side` square of intensity `fg` on a
/// `bg` background.
pub fn centered_square_f32(width: usize, height: usize, side: usize, bg: f32, fg: f32) -> ImageF32 {
    assert!(side <= width && side <= height, "square must fit the grid");
    let x0 = (width - side) / 2;
    let y0 = (height - side) / 2;
    let mut img = uniform_f32(width, height, bg);
    for y in y0..y0 + side {
        for x in x0..x0 + side {
            img.set(x, y, fg);
        }
    }
    img
}

/// Top-left corner of the square produced by [`centered_square_f32`].
pub fn centered_square_origin(width: usize, height: usize, side: usize) -> (usize, usize) {
    ((width - side) / 2, (height - side) / 2)
}
