//! Rasterizes a state snapshot into a PNG frame

use crate::config::GameConfig;
use crate::game::GameState;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const BALL_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
const PADDLE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Draws one frame: black field, red ball square centered on the ball
/// position, white paddle rectangles inset one paddle-width from each edge.
/// Pure function of the snapshot; never touches live state.
pub fn render_frame(state: &GameState, config: &GameConfig) -> RgbaImage {
    let mut frame = RgbaImage::from_pixel(
        config.field_width as u32,
        config.field_height as u32,
        BACKGROUND,
    );

    fill_rect(
        &mut frame,
        state.ball_x - config.ball_size / 2,
        state.ball_y - config.ball_size / 2,
        config.ball_size,
        config.ball_size,
        BALL_COLOR,
    );

    fill_rect(
        &mut frame,
        config.paddle_width,
        state.player1_y,
        config.paddle_width,
        config.paddle_height,
        PADDLE_COLOR,
    );
    fill_rect(
        &mut frame,
        config.field_width - 2 * config.paddle_width,
        state.player2_y,
        config.paddle_width,
        config.paddle_height,
        PADDLE_COLOR,
    );

    frame
}

/// Fills an axis-aligned rectangle, clipped to the frame bounds. The ball
/// rectangle sticks out of the canvas near walls and goal lines.
fn fill_rect(frame: &mut RgbaImage, x: i32, y: i32, width: i32, height: i32, color: Rgba<u8>) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + width).min(frame.width() as i32);
    let y1 = (y + height).min(frame.height() as i32);

    for py in y0..y1 {
        for px in x0..x1 {
            frame.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Encodes a frame as PNG bytes.
pub fn encode_png(frame: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buffer = Cursor::new(Vec::new());
    frame.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (GameState, GameConfig) {
        let config = GameConfig::default();
        (GameState::new(&config), config)
    }

    #[test]
    fn test_frame_dimensions() {
        let (state, config) = setup();
        let frame = render_frame(&state, &config);
        assert_eq!(frame.width(), 600);
        assert_eq!(frame.height(), 400);
    }

    #[test]
    fn test_ball_drawn_centered() {
        let (state, config) = setup();
        let frame = render_frame(&state, &config);

        assert_eq!(*frame.get_pixel(300, 200), BALL_COLOR);
        // The square spans ball_size pixels starting half a ball left/up.
        assert_eq!(*frame.get_pixel(295, 195), BALL_COLOR);
        assert_eq!(*frame.get_pixel(304, 204), BALL_COLOR);
        assert_eq!(*frame.get_pixel(305, 200), BACKGROUND);
        assert_eq!(*frame.get_pixel(294, 200), BACKGROUND);
    }

    #[test]
    fn test_paddles_drawn_at_their_sides() {
        let (mut state, config) = setup();
        state.player1_y = 40;
        state.player2_y = 260;
        let frame = render_frame(&state, &config);

        // Left paddle occupies x 10..20, y 40..140.
        assert_eq!(*frame.get_pixel(10, 40), PADDLE_COLOR);
        assert_eq!(*frame.get_pixel(19, 139), PADDLE_COLOR);
        assert_eq!(*frame.get_pixel(9, 40), BACKGROUND);
        assert_eq!(*frame.get_pixel(20, 40), BACKGROUND);
        assert_eq!(*frame.get_pixel(10, 140), BACKGROUND);

        // Right paddle occupies x 580..590, y 260..360.
        assert_eq!(*frame.get_pixel(580, 260), PADDLE_COLOR);
        assert_eq!(*frame.get_pixel(589, 359), PADDLE_COLOR);
        assert_eq!(*frame.get_pixel(590, 260), BACKGROUND);
        assert_eq!(*frame.get_pixel(579, 260), BACKGROUND);
    }

    #[test]
    fn test_ball_clipped_at_corner() {
        let (mut state, config) = setup();
        state.ball_x = 0;
        state.ball_y = 0;

        // Must not panic even though most of the ball is off-canvas.
        let frame = render_frame(&state, &config);
        assert_eq!(*frame.get_pixel(0, 0), BALL_COLOR);
        assert_eq!(*frame.get_pixel(4, 4), BALL_COLOR);
        assert_eq!(*frame.get_pixel(5, 5), BACKGROUND);
    }

    #[test]
    fn test_ball_clipped_at_far_corner() {
        let (mut state, config) = setup();
        state.ball_x = 599;
        state.ball_y = 399;

        let frame = render_frame(&state, &config);
        assert_eq!(*frame.get_pixel(599, 399), BALL_COLOR);
    }

    #[test]
    fn test_encode_png_signature() {
        let (state, config) = setup();
        let frame = render_frame(&state, &config);
        let png = encode_png(&frame).unwrap();

        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_encoded_frame_decodes_back() {
        let (state, config) = setup();
        let frame = render_frame(&state, &config);
        let png = encode_png(&frame).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.width(), 600);
        assert_eq!(decoded.height(), 400);
        assert_eq!(*decoded.get_pixel(300, 200), BALL_COLOR);
    }
}
