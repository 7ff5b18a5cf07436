use glam::Vec2;

/// Map client-space pixel coordinates to normalized device coordinates
/// (x right, y up, both [-1, 1]). Degenerate viewport sizes map to the
/// center rather than dividing by zero.
#[inline]
pub fn pointer_ndc(client: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        2.0 * client.x / viewport.x - 1.0,
        1.0 - 2.0 * client.y / viewport.y,
    )
}
