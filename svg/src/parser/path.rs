//! The command interpreter: reads commands and operands from a
//! [Stream](struct.Stream.html) and drives a path builder.

use super::error::{ErrorKind, ParseError};
use super::stream::{Stream, Token};
use crate::path::builder::{Build, PathBuilder};
use crate::path::geom::{ArcFlags, SvgArc};
use crate::path::math::{point, vector, Angle, Point};
use crate::path::Path;

/// Parses a path string, aborting on the first error.
///
/// # Examples
///
/// ```
/// use contour_svg::parser::parse_path;
///
/// let path = parse_path("M 0 0 L 10 0 10 10 L 0 10 z").unwrap();
/// ```
pub fn parse_path(src: &str) -> Result<Path, ParseError> {
    let mut builder = Path::builder();
    PathParser::new().parse(&mut Stream::new(src), &mut builder)?;

    Ok(builder.build())
}

/// Parses a path string, keeping the path built up to the first error
/// instead of discarding it.
///
/// The returned path is left open at the point of failure; the triggering
/// error is returned alongside it, or `None` for a clean parse.
pub fn parse_path_tolerant(src: &str) -> (Path, Option<ParseError>) {
    let mut builder = Path::builder();
    let error = PathParser::new()
        .parse(&mut Stream::new(src), &mut builder)
        .err();

    (builder.build(), error)
}

/// The path command interpreter.
///
/// Feeds any [PathBuilder](../path/builder/trait.PathBuilder.html) from a
/// path string. All interpreter state (current position, start of the
/// current sub-path, the control-point memory that smooth commands
/// reflect against) lives here for the duration of a single `parse` call
/// and is reset on the next one.
#[derive(Debug, Default)]
pub struct PathParser {
    current_position: Point,
    first_position: Point,
    prev_cubic_ctrl: Option<Point>,
    prev_quadratic_ctrl: Option<Point>,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<B: PathBuilder>(
        &mut self,
        src: &mut Stream,
        output: &mut B,
    ) -> Result<(), ParseError> {
        self.current_position = point(0.0, 0.0);
        self.first_position = point(0.0, 0.0);
        self.prev_cubic_ctrl = None;
        self.prev_quadratic_ctrl = None;

        let mut prev_cmd: Option<char> = None;

        loop {
            let token = match src.peek() {
                Some(token) => token,
                None => return Ok(()),
            };
            let cmd_at = src.pos();

            let cmd = match token {
                Token::Command(c) => {
                    src.advance();
                    c
                }
                // An operand group with no command letter before it
                // repeats the previous command.
                Token::Number => match prev_cmd {
                    Some(c) if c != 'z' && c != 'Z' => c,
                    _ => {
                        return Err(ParseError::new(
                            ErrorKind::UnexpectedNumber,
                            cmd_at,
                            src.text(),
                        ));
                    }
                },
            };

            let is_relative = cmd.is_ascii_lowercase();

            match cmd {
                'm' | 'M' => {
                    let to = self.parse_endpoint(is_relative, src)?;
                    self.first_position = to;
                    output.move_to(to);
                }
                'l' | 'L' => {
                    let to = self.parse_endpoint(is_relative, src)?;
                    output.line_to(to);
                }
                'h' | 'H' => {
                    let mut x = src.parse_number()?;
                    if is_relative {
                        x += self.current_position.x;
                    }
                    let to = point(x, self.current_position.y);
                    self.current_position = to;
                    output.line_to(to);
                }
                'v' | 'V' => {
                    let mut y = src.parse_number()?;
                    if is_relative {
                        y += self.current_position.y;
                    }
                    let to = point(self.current_position.x, y);
                    self.current_position = to;
                    output.line_to(to);
                }
                'c' | 'C' => {
                    let ctrl1 = self.parse_point(is_relative, src)?;
                    let ctrl2 = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    self.prev_cubic_ctrl = Some(ctrl2);
                    output.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                's' | 'S' => {
                    let ctrl1 = self.smooth_ctrl(self.prev_cubic_ctrl);
                    let ctrl2 = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    self.prev_cubic_ctrl = Some(ctrl2);
                    output.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                'q' | 'Q' => {
                    let ctrl = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    self.prev_quadratic_ctrl = Some(ctrl);
                    output.quadratic_bezier_to(ctrl, to);
                }
                't' | 'T' => {
                    let ctrl = self.smooth_ctrl(self.prev_quadratic_ctrl);
                    let to = self.parse_endpoint(is_relative, src)?;
                    self.prev_quadratic_ctrl = Some(ctrl);
                    output.quadratic_bezier_to(ctrl, to);
                }
                'a' | 'A' => {
                    let from = self.current_position;
                    let rx = src.parse_number()?;
                    let ry = src.parse_number()?;
                    let x_rotation = Angle::degrees(src.parse_number()?);
                    let large_arc = src.parse_number()? != 0.0;
                    let sweep = src.parse_number()? != 0.0;
                    let to = self.parse_endpoint(is_relative, src)?;

                    let svg_arc = SvgArc {
                        from,
                        to,
                        radii: vector(rx, ry),
                        x_rotation,
                        flags: ArcFlags { large_arc, sweep },
                    };

                    if svg_arc.is_straight_line() {
                        output.line_to(to);
                    } else {
                        output.arc(&svg_arc.to_arc());
                    }
                }
                'z' | 'Z' => {
                    self.current_position = self.first_position;
                    output.close();
                }
                _ => {
                    return Err(ParseError::new(
                        ErrorKind::UnrecognizedCommand(cmd),
                        cmd_at,
                        src.text(),
                    ));
                }
            }

            // Smooth commands reflect against the previous control point
            // of their own family only.
            match cmd {
                'c' | 'C' | 's' | 'S' => {
                    self.prev_quadratic_ctrl = None;
                }
                'q' | 'Q' | 't' | 'T' => {
                    self.prev_cubic_ctrl = None;
                }
                _ => {
                    self.prev_cubic_ctrl = None;
                    self.prev_quadratic_ctrl = None;
                }
            }

            prev_cmd = Some(cmd);
        }
    }

    /// The derived first control point of a smooth curve command: the
    /// previous control point reflected through the current position, or
    /// the current position itself when there is nothing to reflect.
    fn smooth_ctrl(&self, prev_ctrl: Option<Point>) -> Point {
        match prev_ctrl {
            Some(ctrl) => self.current_position + (self.current_position - ctrl),
            None => self.current_position,
        }
    }

    fn parse_point(&self, is_relative: bool, src: &mut Stream) -> Result<Point, ParseError> {
        let x = src.parse_number()?;
        let y = src.parse_number()?;

        let p = point(x, y);
        if is_relative {
            Ok(self.current_position + p.to_vector())
        } else {
            Ok(p)
        }
    }

    fn parse_endpoint(
        &mut self,
        is_relative: bool,
        src: &mut Stream,
    ) -> Result<Point, ParseError> {
        let position = self.parse_point(is_relative, src)?;
        self.current_position = position;

        Ok(position)
    }
}
