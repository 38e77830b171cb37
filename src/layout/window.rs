//! The visible fret window: which absolute frets land in which row.

/// A run of `size` consecutive frets starting at `starting_fret`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretWindow {
    starting_fret: u32,
    size: u32,
}

impl FretWindow {
    pub fn new(starting_fret: u32, size: u32) -> Self {
        Self { starting_fret, size }
    }

    pub fn starting_fret(&self) -> u32 {
        self.starting_fret
    }

    /// `absolute - starting_fret + 1`, without clipping. May be zero or negative.
    pub fn relative_fret(&self, absolute: u32) -> i64 {
        i64::from(absolute) - i64::from(self.starting_fret) + 1
    }

    /// Row of `absolute` inside the window, or `None` when it falls outside.
    pub fn resolve(&self, absolute: u32) -> Option<u32> {
        let relative = self.relative_fret(absolute);
        (1..=i64::from(self.size))
            .contains(&relative)
            .then_some(relative as u32)
    }

    pub fn contains(&self, absolute: u32) -> bool {
        self.resolve(absolute).is_some()
    }
}
