/// Pointer position the cursor trail is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrailPosition {
    pub x: i32,
    pub y: i32,
}

impl TrailPosition {
    pub fn from_client(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// CSS value for the `left` property.
    pub fn left(&self) -> String {
        format!("{}px", self.x)
    }

    pub fn top(&self) -> String {
        format!("{}px", self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_values_are_pixels() {
        let pos = TrailPosition::from_client(120, 48);
        assert_eq!(pos.left(), "120px");
        assert_eq!(pos.top(), "48px");
    }

    #[test]
    fn negative_coordinates_pass_through() {
        let pos = TrailPosition::from_client(-3, 0);
        assert_eq!(pos.left(), "-3px");
        assert_eq!(pos.top(), "0px");
    }
}
