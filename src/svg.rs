//! Vector image output for generated snowflakes

use crate::gen::Snowflake;
use crate::Point;

use eyre::Context;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Configuration items for writing an SVG
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Fill color of every polygon, as any valid SVG color
    pub fill: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        SvgConfig {
            fill: "black".to_owned(),
        }
    }
}

impl SvgConfig {
    /// Writes the snowflake to a new SVG file at `path`, replacing anything already there
    pub fn save(&self, flake: &Snowflake, path: &Path) -> eyre::Result<()> {
        let file = File::create(path)
            .wrap_err_with(|| format!("failed to create file at {:?}", path.to_string_lossy()))?;

        let mut writer = BufWriter::new(file);
        self.write(flake, &mut writer)
            .and_then(|_| writer.flush())
            .wrap_err_with(|| format!("failed to write SVG to {:?}", path.to_string_lossy()))
    }

    /// Writes the full SVG document for the snowflake
    ///
    /// The canvas is a square of side `2L`, where `L` is the snowflake's extent. The snowflake is
    /// centered at the origin, so every polygon is placed in a single group translated by
    /// `(L, L)`. Polygons are written in the same order as they were generated.
    pub fn write(&self, flake: &Snowflake, w: &mut impl Write) -> io::Result<()> {
        let extent = flake.extent();
        let size = 2.0 * extent;

        writeln!(w, r#"<?xml version="1.0" encoding="utf-8" ?>"#)?;
        writeln!(
            w,
            r#"<svg baseProfile="tiny" version="1.2" width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            size, size
        )?;
        writeln!(
            w,
            r#"<g id="polys" fill="{}" transform="translate({},{})">"#,
            escape_attr(&self.fill),
            extent,
            extent
        )?;

        for polygon in flake.polygons() {
            write!(w, r#"<polygon points=""#)?;
            write_points(w, polygon.vertices())?;
            writeln!(w, r#""/>"#)?;
        }

        writeln!(w, "</g>")?;
        writeln!(w, "</svg>")
    }
}

/// Escapes the characters that can't appear verbatim inside a double-quoted XML attribute
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Writes the vertices in the SVG `points` format: `x1,y1 x2,y2 ...`
fn write_points(w: &mut impl Write, points: &[Point]) -> io::Result<()> {
    for (i, p) in points.iter().enumerate() {
        if i != 0 {
            write!(w, " ")?;
        }
        write!(w, "{},{}", p.x, p.y)?;
    }

    Ok(())
}
