use super::PlotGeometry;
use crate::core::prefs::Theme;
use std::fmt::Write;

struct Palette {
    background: &'static str,
    grid: &'static str,
    text: &'static str,
    line: &'static str,
    fill: &'static str,
    high: &'static str,
    low: &'static str,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                background: "#ffffff",
                grid: "#e5e7eb",
                text: "#4b5563",
                line: "#2563eb",
                fill: "rgba(37,99,235,0.12)",
                high: "#16a34a",
                low: "#dc2626",
            },
            Theme::Dark => Palette {
                background: "#0f172a",
                grid: "#1e293b",
                text: "#94a3b8",
                line: "#60a5fa",
                fill: "rgba(96,165,250,0.18)",
                high: "#4ade80",
                low: "#f87171",
            },
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders a standalone SVG document for the geometry.
pub fn render(geometry: &PlotGeometry, theme: Theme, title: &str) -> String {
    let palette = Palette::for_theme(theme);
    let layout = &geometry.layout;
    let left = layout.margin.left;
    let right = layout.width - layout.margin.right;
    let baseline = layout.height - layout.margin.bottom;

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="sans-serif" font-size="12">"#,
        w = layout.width,
        h = layout.height
    );
    let _ = writeln!(out, "  <title>{}</title>", escape(title));
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        palette.background
    );

    for tick in &geometry.y_ticks {
        let _ = writeln!(
            out,
            r#"  <line x1="{left:.2}" y1="{y:.2}" x2="{right:.2}" y2="{y:.2}" stroke="{}" stroke-width="1"/>"#,
            palette.grid,
            y = tick.position
        );
        let _ = writeln!(
            out,
            r#"  <text x="{x:.2}" y="{y:.2}" fill="{}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            palette.text,
            escape(&tick.label),
            x = left - 8.0,
            y = tick.position
        );
    }

    for tick in &geometry.x_ticks {
        let _ = writeln!(
            out,
            r#"  <text x="{x:.2}" y="{y:.2}" fill="{}" text-anchor="middle">{}</text>"#,
            palette.text,
            escape(&tick.label),
            x = tick.position,
            y = baseline + 20.0
        );
    }

    let _ = writeln!(
        out,
        r#"  <path d="{}" fill="{}" stroke="none"/>"#,
        geometry.fill.to_svg(),
        palette.fill
    );
    let _ = writeln!(
        out,
        r#"  <path d="{}" fill="none" stroke="{}" stroke-width="2" stroke-linejoin="round" stroke-linecap="round"/>"#,
        geometry.stroke.to_svg(),
        palette.line
    );

    for (marker, color, class) in [
        (&geometry.high, palette.high, "high"),
        (&geometry.low, palette.low, "low"),
    ] {
        let _ = writeln!(
            out,
            r#"  <circle class="{class}" cx="{:.2}" cy="{:.2}" r="4" fill="{color}"/>"#,
            marker.x, marker.y
        );
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chart::ChartLayout;
    use crate::core::series::{Sample, Series};
    use chrono::NaiveDate;

    fn geometry() -> PlotGeometry {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let series = Series::new(
            [1.10, 1.20, 1.15]
                .iter()
                .enumerate()
                .map(|(i, v)| Sample::new(start + chrono::Duration::days(i as i64), *v))
                .collect(),
        )
        .unwrap();
        PlotGeometry::build(&series, ChartLayout::default()).unwrap()
    }

    #[test]
    fn test_svg_document_structure() {
        let svg = render(&geometry(), Theme::Light, "USD/EUR <1M>");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 1000 300""#));
        assert!(svg.contains("<title>USD/EUR &lt;1M&gt;</title>"));
        assert_eq!(svg.matches("<path").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(">Jan 3</text>"));
        assert!(svg.contains(">1.1500</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_theme_changes_palette() {
        let light = render(&geometry(), Theme::Light, "t");
        let dark = render(&geometry(), Theme::Dark, "t");
        assert!(light.contains("#ffffff"));
        assert!(dark.contains("#0f172a"));
        assert_ne!(light, dark);
    }
}
