//! The fixed environment color palette.

use std::collections::HashSet;

/// Palette used to colorize environments in the sidebar.
pub const ENV_COLORS: [&str; 9] = [
    "#F87171", // red
    "#FBBF24", // amber
    "#34D399", // emerald
    "#60A5FA", // blue
    "#A78BFA", // violet
    "#22D3EE", // cyan
    "#FB7185", // rose
    "#F97316", // orange
    "#84CC16", // lime
];

/// Picks a color for a new environment.
///
/// Prefers the first palette color not yet in use anywhere in the forest.
/// Once the palette is exhausted the choice wraps around, so uniqueness is
/// best-effort only.
pub fn pick_next_color(used: &HashSet<String>) -> String {
    for color in ENV_COLORS {
        if !used.contains(color) {
            return color.to_string();
        }
    }
    ENV_COLORS[used.len() % ENV_COLORS.len()].to_string()
}
