/// Illustrations the renderer can substitute for icon glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Illustration {
    Person,
    Rocket,
    Skull,
    Lightning,
    Art,
    Code,
    Gaming,
    Brain,
    Fire,
    Planet,
    BlackHole,
    Sound,
    Stars,
    Dead,
    Compass,
}

impl Illustration {
    /// Stable lowercase name, usable as an asset key.
    pub fn name(&self) -> &'static str {
        match self {
            Illustration::Person => "person",
            Illustration::Rocket => "rocket",
            Illustration::Skull => "skull",
            Illustration::Lightning => "lightning",
            Illustration::Art => "art",
            Illustration::Code => "code",
            Illustration::Gaming => "gaming",
            Illustration::Brain => "brain",
            Illustration::Fire => "fire",
            Illustration::Planet => "planet",
            Illustration::BlackHole => "blackhole",
            Illustration::Sound => "sound",
            Illustration::Stars => "stars",
            Illustration::Dead => "dead",
            Illustration::Compass => "compass",
        }
    }
}

// Ordered: lookup is first-substring-match, so earlier entries win for
// glyphs that share a base code point (💀 before ☠️ matters less than 🎨
// before 🖌️, but the order is part of the contract).
static GLYPH_ILLUSTRATIONS: &[(&str, Illustration)] = &[
    ("🧍", Illustration::Person),
    ("🚀", Illustration::Rocket),
    ("💀", Illustration::Skull),
    ("⚡", Illustration::Lightning),
    ("🎨", Illustration::Art),
    ("💻", Illustration::Code),
    ("🖌️", Illustration::Art),
    ("✍️", Illustration::Art),
    ("🎮", Illustration::Gaming),
    ("🧠", Illustration::Brain),
    ("🔥", Illustration::Fire),
    ("🪐", Illustration::Planet),
    ("⚫", Illustration::BlackHole),
    ("🔊", Illustration::Sound),
    ("✨", Illustration::Stars),
    ("☠️", Illustration::Dead),
    ("🧭", Illustration::Compass),
];

/// Find the illustration for an icon token: first glyph contained in the
/// token wins. `None` means the renderer shows the raw glyph.
pub fn illustration_for(token: &str) -> Option<Illustration> {
    GLYPH_ILLUSTRATIONS
        .iter()
        .find(|(glyph, _)| token.contains(glyph))
        .map(|&(_, illustration)| illustration)
}
