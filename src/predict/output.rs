/// Prediction output arrays

/// Channels per output pixel
pub const CHANNELS: usize = 3;

/// A (height, width, 3) float array, row-major with interleaved channels
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticOutput {
    height: usize,
    width: usize,
    values: Vec<f32>,
}

impl SyntheticOutput {
    /// Build an output by evaluating `f(row, col, channel)` for every cell
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize, usize) -> f32) -> Self {
        let mut values = Vec::with_capacity(height * width * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                for c in 0..CHANNELS {
                    values.push(f(y, x, c));
                }
            }
        }

        Self { height, width, values }
    }

    /// (height, width, channels)
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, CHANNELS)
    }

    #[cfg(test)]
    pub fn get(&self, y: usize, x: usize, c: usize) -> Option<f32> {
        if y >= self.height || x >= self.width || c >= CHANNELS {
            return None;
        }
        self.values.get((y * self.width + x) * CHANNELS + c).copied()
    }

    /// All three channels at (y, x). Panics when out of bounds.
    pub fn pixel(&self, y: usize, x: usize) -> [f32; CHANNELS] {
        let start = (y * self.width + x) * CHANNELS;
        [self.values[start], self.values[start + 1], self.values[start + 2]]
    }

    #[cfg(test)]
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
