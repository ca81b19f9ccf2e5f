use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Stable index-based series colors.
///
/// Series `i` in configured symbol order always gets `colors[i % len]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPalette {
    colors: Vec<Color>,
}

impl SeriesPalette {
    pub fn new(colors: Vec<Color>) -> ChartResult<Self> {
        if colors.is_empty() {
            return Err(ChartError::InvalidConfig(
                "palette requires at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self { colors })
    }

    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> ChartResult<Self> {
        let parsed = colors
            .iter()
            .map(|hex| Color::from_hex(hex.as_ref()))
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(parsed)
    }

    #[must_use]
    pub fn color_for_index(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
