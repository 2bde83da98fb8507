use ball_and_cube::world::{CUBE_COLOR, SPHERE_COLOR};
use ball_and_cube::{CanvasRenderer, Color, Stage, World};

fn color_at(pixels: &[u8], width: u32, x: u32, y: u32) -> Color {
    let idx = ((y * width + x) * 4) as usize;
    Color::new(pixels[idx], pixels[idx + 1], pixels[idx + 2])
}

fn count_color(pixels: &[u8], color: Color) -> usize {
    pixels
        .chunks_exact(4)
        .filter(|px| px[0] == color.r && px[1] == color.g && px[2] == color.b)
        .count()
}

#[test]
fn renderer_surface_matches_requested_size() {
    let renderer = CanvasRenderer::new(400, 300);
    assert_eq!(renderer.width(), 400);
    assert_eq!(renderer.height(), 300);
    assert_eq!(renderer.pixels().len(), 400 * 300 * 4);
}

#[test]
fn set_size_reallocates_the_surface() {
    let mut renderer = CanvasRenderer::new(400, 300);
    renderer.set_size(640, 480);
    assert_eq!(renderer.pixels().len(), 640 * 480 * 4);
}

#[test]
fn first_frame_shows_both_objects() {
    let mut stage = Stage::new(400, 300);
    let pixels = stage.frame().to_vec();

    // the sphere fronts the screen center, nearer than any cube edge
    assert_eq!(color_at(&pixels, 400, 200, 150), SPHERE_COLOR);

    assert!(
        count_color(&pixels, CUBE_COLOR) > 0,
        "no wireframe pixels drawn"
    );
    assert!(
        count_color(&pixels, SPHERE_COLOR) > 0,
        "no sphere pixels drawn"
    );
}

#[test]
fn sphere_pixels_track_the_bounce() {
    let mut stage = Stage::new(400, 300);

    // march the sphere well off to the right, then look at the frame
    for _ in 0..100 {
        stage.frame();
    }
    let pixels = stage.renderer.pixels();

    let left_half: usize = (0..300)
        .flat_map(|y| (0..200).map(move |x| (x, y)))
        .filter(|&(x, y)| color_at(pixels, 400, x, y) == SPHERE_COLOR)
        .count();
    let right_half: usize = (0..300)
        .flat_map(|y| (200..400).map(move |x| (x, y)))
        .filter(|&(x, y)| color_at(pixels, 400, x, y) == SPHERE_COLOR)
        .count();

    assert!(
        right_half > left_half,
        "sphere at x=100 should sit mostly in the right half ({right_half} vs {left_half})"
    );
}

#[test]
fn render_is_deterministic_for_identical_state() {
    let world = World::new(400, 300);

    let mut first = CanvasRenderer::new(400, 300);
    first.render(&world.scene, &world.camera);

    let mut second = CanvasRenderer::new(400, 300);
    second.render(&world.scene, &world.camera);

    assert_eq!(first.pixels(), second.pixels());
}
