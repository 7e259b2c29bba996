use self::color::*;
use std::fmt::Display;
use termion::{
    color::{Fg, Rgb},
    style::{Bold, Italic, Reset, Underline},
};

pub struct Default;
pub struct Plain;

#[derive(Clone, Copy)]
#[non_exhaustive]
pub enum Item {
    Head,
    Name,
    Argument,
    Text,
    Field,
}

pub trait Style {
    fn indent(&self) -> usize;
    fn width(&self) -> usize;
    fn begin(&self, item: Item) -> &[&dyn Display];
    fn end(&self, item: Item) -> &[&dyn Display];
}

macro_rules! dynamic {
    ($($value: expr),*) => {
        &[$(&$value as &dyn Display),*]
    };
}

const NONE: &[&dyn Display] = dynamic!();
const RESET: &[&dyn Display] = dynamic!(Reset);
const HEAD: &[&dyn Display] = dynamic!(Bold, Fg(RUBY_RED));
const NAME: &[&dyn Display] = dynamic!(Bold, Fg(TURQUOISE));
const ARGUMENT: &[&dyn Display] = dynamic!(Underline, Fg(PEACH));
const FIELD: &[&dyn Display] = dynamic!(Italic, Fg(SILVER_GRAY));

impl Style for Default {
    #[inline]
    fn indent(&self) -> usize {
        4
    }

    #[inline]
    fn width(&self) -> usize {
        termion::terminal_size().map_or(80, |(width, _)| usize::from(width).clamp(40, 96))
    }

    #[inline]
    fn begin(&self, item: Item) -> &[&dyn Display] {
        match item {
            Item::Head => HEAD,
            Item::Name => NAME,
            Item::Argument => ARGUMENT,
            Item::Text => NONE,
            Item::Field => FIELD,
        }
    }

    #[inline]
    fn end(&self, item: Item) -> &[&dyn Display] {
        match item {
            Item::Text => NONE,
            _ => RESET,
        }
    }
}

impl Style for Plain {
    #[inline]
    fn indent(&self) -> usize {
        4
    }

    #[inline]
    fn width(&self) -> usize {
        96
    }

    #[inline]
    fn begin(&self, _: Item) -> &[&dyn Display] {
        NONE
    }

    #[inline]
    fn end(&self, _: Item) -> &[&dyn Display] {
        NONE
    }
}

pub mod color {
    use super::*;

    pub const TURQUOISE: Rgb = Rgb(64, 224, 208);
    pub const RUBY_RED: Rgb = Rgb(220, 20, 60);
    pub const SILVER_GRAY: Rgb = Rgb(169, 169, 169);
    pub const PEACH: Rgb = Rgb(255, 218, 185);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_width_stays_readable() {
        let width = Default.width();
        assert!((40..=96).contains(&width));
        assert_eq!(Plain.width(), 96);
    }
}
