//! Text rendering of alignment results

use std::io::{self, Write};

use crate::types::AlignmentResult;

/// Renders the score and the two aligned rows for humans.
#[derive(Debug, Clone, Copy)]
pub struct ResultFormatter {
    /// Character printed in place of a gap
    pub gap: char,
    /// Print a marker line between the rows ('|' match, '.' mismatch)
    pub show_matches: bool,
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self {
            gap: '-',
            show_matches: true,
        }
    }
}

impl ResultFormatter {
    pub fn new(gap: char, show_matches: bool) -> Self {
        Self { gap, show_matches }
    }

    pub fn format<T>(&self, result: &AlignmentResult<T>) -> String
    where
        T: Copy + PartialEq + Into<char>,
    {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_to(&mut buffer, result);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    pub fn write_to<W, T>(&self, out: &mut W, result: &AlignmentResult<T>) -> io::Result<()>
    where
        W: Write,
        T: Copy + PartialEq + Into<char>,
    {
        let (row1, row2) = result.gapped(self.gap);
        writeln!(out, "Optimal alignment score is {}", result.score)?;
        writeln!(out, "  {}", row1)?;
        if self.show_matches {
            writeln!(out, "  {}", match_line(result))?;
        }
        writeln!(out, "  {}", row2)?;
        Ok(())
    }
}

fn match_line<T: PartialEq>(result: &AlignmentResult<T>) -> String {
    result
        .columns()
        .map(|column| match column {
            (Some(a), Some(b)) if a == b => '|',
            (Some(_), Some(_)) => '.',
            _ => ' ',
        })
        .collect()
}
