use crate::LayoutError;

/// Cone categories, the discriminant is the index stored in the layout `color` array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConeColor {
    Unknown = 0,
    Yellow = 1,
    Blue = 2,
    OrangeSmall = 3,
    OrangeBig = 4,
}

/// all categories in index order
pub const PALETTE: [ConeColor; 5] = [
    ConeColor::Unknown,
    ConeColor::Yellow,
    ConeColor::Blue,
    ConeColor::OrangeSmall,
    ConeColor::OrangeBig,
];

impl ConeColor {
    /// bounds checked lookup, negative indices are rejected too
    pub fn from_index(index: i64) -> Result<Self, LayoutError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| PALETTE.get(i).copied())
            .ok_or(LayoutError::UnknownColorIndex(index))
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// category name as used by the track files
    pub fn category(&self) -> &'static str {
        match self {
            ConeColor::Unknown => "unknown",
            ConeColor::Yellow => "yellow",
            ConeColor::Blue => "blue",
            ConeColor::OrangeSmall => "orange_small",
            ConeColor::OrangeBig => "orange_big",
        }
    }

    /// the color the cone is drawn with
    pub fn display_name(&self) -> &'static str {
        match self {
            ConeColor::Unknown => "black",
            ConeColor::Yellow => "gold",
            ConeColor::Blue => "blue",
            ConeColor::OrangeSmall => "orange",
            ConeColor::OrangeBig => "red",
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            ConeColor::Unknown => [0, 0, 0],
            ConeColor::Yellow => [255, 215, 0],
            ConeColor::Blue => [0, 0, 255],
            ConeColor::OrangeSmall => [255, 165, 0],
            ConeColor::OrangeBig => [255, 0, 0],
        }
    }
}

impl TryFrom<i64> for ConeColor {
    type Error = LayoutError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_follow_index() {
        let names: Vec<_> = (0..5)
            .map(|i| ConeColor::from_index(i).unwrap().display_name())
            .collect();
        assert_eq!(names, ["black", "gold", "blue", "orange", "red"]);
    }

    #[test]
    fn index_round_trips() {
        for color in PALETTE {
            assert_eq!(ConeColor::from_index(color.index() as i64).unwrap(), color);
        }
    }

    #[test]
    fn out_of_range() {
        for index in [5, 42, -1] {
            match ConeColor::try_from(index) {
                Err(LayoutError::UnknownColorIndex(i)) => assert_eq!(i, index),
                other => panic!("expected unknown color index for {index}, got {other:?}"),
            }
        }
    }

    #[test]
    fn error_message() {
        let err = ConeColor::from_index(7).unwrap_err();
        assert_eq!(err.to_string(), "unknown color index 7, expected 0..=4");
    }
}
