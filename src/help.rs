use crate::style::{Item, Style};
use std::fmt::{self, Display, Write};

const NAME: &str = "similarity";

type Span<'a> = (Item, &'a str);

const SUMMARY: &[&[Span]] = &[&[(
    Item::Text,
    "similarity - find and print text similarity between sets of strings",
)]];

const SYNOPSIS: &[&[Span]] = &[
    &[(Item::Name, NAME), (Item::Argument, "combfile")],
    &[
        (Item::Name, NAME),
        (Item::Argument, "reffile"),
        (Item::Argument, "testfile"),
    ],
];

const DESCRIPTION: &[&[Span]] = &[
    &[(
        Item::Text,
        "Finds the Damerau-Levenshtein distance between strings. Only transpositions of \
         adjacent characters are recognized, and strings are compared byte by byte.",
    )],
    &[
        (Item::Text, "The first form compares every string of"),
        (Item::Argument, "combfile"),
        (Item::Text, "with every other string of the same file."),
    ],
    &[
        (Item::Text, "The second form treats the strings of"),
        (Item::Argument, "reffile"),
        (Item::Text, "as correct references and compares each string of"),
        (Item::Argument, "testfile"),
        (
            Item::Text,
            "with all of them, keeping the three closest references for each test string.",
        ),
    ],
    &[(
        Item::Text,
        "Input files hold one string per line. Spaces and tabs around a string are trimmed and \
         blank lines are ignored; other non-printable characters are kept as they are.",
    )],
];

const OUTPUT: &[&[Span]] = &[
    &[(
        Item::Text,
        "One line is printed for each compared pair of strings, with tab separated fields:",
    )],
    &[(Item::Field, "pd d tl rl tstr rstr")],
    &[
        (Item::Text, "where"),
        (Item::Field, "d"),
        (Item::Text, "is the distance between the strings"),
        (Item::Field, "tstr"),
        (Item::Text, "and"),
        (Item::Field, "rstr,"),
        (Item::Field, "tl"),
        (Item::Text, "and"),
        (Item::Field, "rl"),
        (
            Item::Text,
            "are their line numbers counting only non-blank lines, and",
        ),
        (Item::Field, "pd"),
        (
            Item::Text,
            "is d / (len(tstr) + len(rstr)) printed with 4 significant digits.",
        ),
    ],
    &[
        (Item::Text, "With"),
        (Item::Argument, "reffile"),
        (Item::Text, "and"),
        (Item::Argument, "testfile,"),
        (Item::Field, "tstr"),
        (Item::Text, "comes from"),
        (Item::Argument, "testfile"),
        (Item::Text, "and the lines of each test string end with a"),
        (Item::Field, "----"),
        (Item::Text, "line."),
    ],
];

struct Helper<'a> {
    buffer: &'a mut String,
    style: &'a dyn Style,
    indent: usize,
}

impl<'a> Helper<'a> {
    fn space(&mut self, width: usize) -> Result<(), fmt::Error> {
        for _ in 0..width {
            write!(self.buffer, " ")?;
        }
        Ok(())
    }

    fn styled(&mut self, item: Item, value: impl Display) -> Result<(), fmt::Error> {
        let style = self.style;
        for format in style.begin(item) {
            write!(self.buffer, "{format}")?;
        }
        write!(self.buffer, "{value}")?;
        for format in style.end(item) {
            write!(self.buffer, "{format}")?;
        }
        Ok(())
    }

    fn head(&mut self, name: &str) -> Result<(), fmt::Error> {
        self.styled(Item::Head, name)?;
        writeln!(self.buffer)
    }

    /// Writes the spans word by word, breaking lines so that no line passes the
    /// style's width. Escape codes do not count toward the width.
    fn paragraph(&mut self, spans: &[Span]) -> Result<(), fmt::Error> {
        let width = self.style.width().saturating_sub(self.indent);
        let mut cursor = 0;
        self.space(self.indent)?;
        for &(item, value) in spans {
            for word in value.split_whitespace() {
                if cursor > 0 {
                    if cursor + 1 + word.len() > width {
                        writeln!(self.buffer)?;
                        self.space(self.indent)?;
                        cursor = 0;
                    } else {
                        write!(self.buffer, " ")?;
                        cursor += 1;
                    }
                }
                self.styled(item, word)?;
                cursor += word.len();
            }
        }
        writeln!(self.buffer)
    }

    fn section(&mut self, name: &str, paragraphs: &[&[Span]], gap: bool) -> Result<(), fmt::Error> {
        self.head(name)?;
        let mut helper = Helper {
            buffer: &mut *self.buffer,
            style: self.style,
            indent: self.indent + self.style.indent(),
        };
        for (index, spans) in paragraphs.iter().enumerate() {
            if gap && index > 0 {
                writeln!(helper.buffer)?;
            }
            helper.paragraph(spans)?;
        }
        writeln!(self.buffer)
    }
}

/// Renders the usage text shown when the arguments select no comparison.
pub fn usage(style: &dyn Style) -> Result<String, fmt::Error> {
    let mut buffer = String::new();
    let mut helper = Helper {
        buffer: &mut buffer,
        style,
        indent: 0,
    };
    writeln!(helper.buffer)?;
    helper.section("NAME", SUMMARY, false)?;
    helper.section("SYNOPSIS", SYNOPSIS, true)?;
    helper.section("DESCRIPTION", DESCRIPTION, true)?;
    helper.section("OUTPUT", OUTPUT, true)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Plain;

    #[test]
    fn plain_usage_has_every_section() -> Result<(), fmt::Error> {
        let usage = usage(&Plain)?;
        for head in ["NAME", "SYNOPSIS", "DESCRIPTION", "OUTPUT"] {
            assert!(usage.lines().any(|line| line == head), "missing {head}");
        }
        assert!(usage.contains("    similarity combfile\n"));
        assert!(usage.contains("    similarity reffile testfile\n"));
        assert!(usage.contains("    pd d tl rl tstr rstr\n"));
        assert!(!usage.contains('\x1b'));
        Ok(())
    }

    #[test]
    fn plain_usage_wraps_at_width() -> Result<(), fmt::Error> {
        let usage = usage(&Plain)?;
        assert!(usage.lines().all(|line| line.len() <= Plain.width()));
        assert!(usage.lines().all(|line| !line.ends_with(' ')));
        Ok(())
    }
}
