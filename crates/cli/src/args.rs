//! Inline polygon parsing: `"x,y;x,y;..."`.

use anyhow::{bail, Context, Result};
use convexfit::polygon::Polygon;

/// Parse `"x,y;x,y;x,y"` into a polygon; whitespace around numbers is ignored.
pub fn parse_polygon(text: &str) -> Result<Polygon> {
    let points = parse_points(text)?;
    Polygon::from_xy(&points).with_context(|| format!("invalid polygon `{text}`"))
}

pub fn parse_points(text: &str) -> Result<Vec<(f64, f64)>> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, pair)| {
            let Some((x, y)) = pair.split_once(',') else {
                bail!("point {i}: expected `x,y`, got `{pair}`");
            };
            let x: f64 = x.trim().parse().with_context(|| format!("point {i}: bad x `{x}`"))?;
            let y: f64 = y.trim().parse().with_context(|| format!("point {i}: bad y `{y}`"))?;
            Ok((x, y))
        })
        .collect()
}
