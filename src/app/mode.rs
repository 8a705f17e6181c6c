#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Slider-driven narrative reveal.
    Reveal,
    /// Command deck open, collecting input.
    Command,
    Quit,
}
