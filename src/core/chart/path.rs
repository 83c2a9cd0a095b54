use super::mapper::CoordinateMapper;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Close,
}

/// An ordered list of path commands, serializable to an SVG `d` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            let _ = match command {
                PathCommand::MoveTo(x, y) => write!(d, "M{x:.2},{y:.2}"),
                PathCommand::LineTo(x, y) => write!(d, "L{x:.2},{y:.2}"),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}

/// Open poly-line through every sample, in order.
pub fn stroke_path(values: &[f64], mapper: &CoordinateMapper) -> Path {
    let commands = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let (x, y) = mapper.point(i, *v);
            if i == 0 {
                PathCommand::MoveTo(x, y)
            } else {
                PathCommand::LineTo(x, y)
            }
        })
        .collect();
    Path { commands }
}

/// Stroke path closed along the baseline, enclosing the area under the curve.
pub fn fill_path(values: &[f64], mapper: &CoordinateMapper) -> Path {
    let mut path = stroke_path(values, mapper);
    if values.is_empty() {
        return path;
    }
    let baseline = mapper.baseline();
    let first_x = mapper.x(0);
    let last_x = mapper.x(values.len() - 1);
    path.commands.push(PathCommand::LineTo(last_x, baseline));
    path.commands.push(PathCommand::LineTo(first_x, baseline));
    path.commands.push(PathCommand::Close);
    path
}
