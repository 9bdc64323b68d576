//! Keyboard colours from Qubes window labels.
//!
//! Lines are expected as printed by
//! `xprop -root -spy _NET_ACTIVE_WINDOW` piped through a per-window
//! `xprop -id <win> _QUBES_LABEL`:
//!
//! ```text
//! _QUBES_LABEL(CARDINAL)=3
//! _QUBES_LABEL:  not found.
//! ```

use std::collections::BTreeMap;
use std::io::BufRead;

use log::{debug, warn};
use razer_matrix::{
    Colour, ColourFrame, MatrixLayout, MatrixSink, CYAN, GREEN, GREY, ORANGE, PURPLE, RED, YELLOW,
};

const LABEL_PREFIX: &str = "_QUBES_LABEL(CARDINAL)=";
const NOT_FOUND: &str = "_QUBES_LABEL:  not found";

/// The colours Qubes uses for labels 1 to 8
pub fn default_label_colours() -> BTreeMap<u32, Colour> {
    BTreeMap::from([
        (1, RED),
        (2, ORANGE),
        (3, YELLOW),
        (4, GREEN),
        (5, GREY),
        (6, CYAN),
        (7, PURPLE),
        (8, GREY),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelLine {
    /// The window has no label, e.g dom0 windows
    NotFound,
    Label(u32),
    Unknown,
}

impl LabelLine {
    pub fn parse(line: &str) -> Self {
        if line.starts_with(NOT_FOUND) {
            return LabelLine::NotFound;
        }
        if let Some(rest) = line.strip_prefix(LABEL_PREFIX) {
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if let Ok(label) = rest[..end].parse() {
                return LabelLine::Label(label);
            }
        }
        LabelLine::Unknown
    }
}

/// Shows a colour on the keyboard for each label line it reads
pub struct LabelWatcher<'a, S: MatrixSink> {
    sink: &'a S,
    layout: &'a MatrixLayout,
    label_colours: &'a BTreeMap<u32, Colour>,
    idle_colour: Colour,
    use_static_effect: bool,
    last: Option<Colour>,
}

impl<'a, S: MatrixSink> LabelWatcher<'a, S> {
    pub fn new(
        sink: &'a S,
        layout: &'a MatrixLayout,
        label_colours: &'a BTreeMap<u32, Colour>,
        idle_colour: Colour,
    ) -> Self {
        Self {
            sink,
            layout,
            label_colours,
            idle_colour,
            use_static_effect: false,
            last: None,
        }
    }

    pub fn use_static_effect(mut self, use_static: bool) -> Self {
        self.use_static_effect = use_static;
        self
    }

    /// Show `colour` unless it is already showing
    pub fn show(&mut self, colour: Colour) -> Result<(), S::Error> {
        if self.last == Some(colour) {
            debug!("Colour {colour} already showing");
            return Ok(());
        }
        if self.use_static_effect {
            self.sink.write_static_colour(colour)?;
        } else {
            self.sink.show(&ColourFrame::new(colour, self.layout))?;
        }
        self.last = Some(colour);
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Result<(), S::Error> {
        match LabelLine::parse(line) {
            LabelLine::NotFound => self.show(self.idle_colour),
            LabelLine::Label(label) => match self.label_colours.get(&label) {
                Some(colour) => self.show(*colour),
                None => {
                    warn!("No colour for label {label}");
                    Ok(())
                }
            },
            LabelLine::Unknown => {
                warn!("Unknown line: {line}");
                Ok(())
            }
        }
    }

    /// Show the idle colour, then follow the lines of `reader` until it ends
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<(), Box<dyn std::error::Error>>
    where
        S::Error: 'static,
    {
        self.show(self.idle_colour)?;
        for line in reader.lines() {
            self.handle_line(&line?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::io::Cursor;

    use razer_matrix::{
        Colour, ColourFrame, MatrixLayout, MatrixSink, GREEN, ORANGE, RED, WHITE, YELLOW,
    };

    use super::{default_label_colours, LabelLine, LabelWatcher};

    #[derive(Debug, Clone, PartialEq)]
    enum Write {
        Static(Colour),
        Frame(Vec<u8>),
    }

    #[derive(Default)]
    struct RecordingSink(RefCell<Vec<Write>>);

    impl MatrixSink for RecordingSink {
        type Error = std::io::Error;

        fn write_static_colour(&self, colour: Colour) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Write::Static(colour));
            Ok(())
        }

        fn write_custom_frame(&self, frame: &[u8]) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Write::Frame(frame.to_vec()));
            Ok(())
        }
    }

    fn frame_of(colour: Colour, layout: &MatrixLayout) -> Write {
        Write::Frame(ColourFrame::new(colour, layout).to_bytes())
    }

    #[test]
    fn parse_lines() {
        assert_eq!(
            LabelLine::parse("_QUBES_LABEL(CARDINAL)=3"),
            LabelLine::Label(3)
        );
        assert_eq!(
            LabelLine::parse("_QUBES_LABEL(CARDINAL)=12 trailing"),
            LabelLine::Label(12)
        );
        assert_eq!(
            LabelLine::parse("_QUBES_LABEL:  not found."),
            LabelLine::NotFound
        );
        assert_eq!(LabelLine::parse("_QUBES_LABEL(CARDINAL)="), LabelLine::Unknown);
        assert_eq!(LabelLine::parse("_QUBES_LABEL(CARDINAL)=x"), LabelLine::Unknown);
        assert_eq!(LabelLine::parse(" _QUBES_LABEL(CARDINAL)=3"), LabelLine::Unknown);
        assert_eq!(LabelLine::parse(""), LabelLine::Unknown);
    }

    #[test]
    fn follows_labels_with_frames() {
        let layout = MatrixLayout::qwertz().unwrap();
        let sink = RecordingSink::default();
        let labels = default_label_colours();
        let input = "_QUBES_LABEL(CARDINAL)=1\n\
                     garbage\n\
                     _QUBES_LABEL(CARDINAL)=2\n\
                     _QUBES_LABEL(CARDINAL)=99\n\
                     _QUBES_LABEL:  not found.\n";

        LabelWatcher::new(&sink, &layout, &labels, WHITE)
            .run(Cursor::new(input))
            .unwrap();

        assert_eq!(
            *sink.0.borrow(),
            vec![
                frame_of(WHITE, &layout),
                frame_of(RED, &layout),
                frame_of(ORANGE, &layout),
                frame_of(WHITE, &layout),
            ]
        );
    }

    #[test]
    fn static_effect_skips_repeats() {
        let layout = MatrixLayout::qwertz().unwrap();
        let sink = RecordingSink::default();
        let labels = BTreeMap::from([(3, YELLOW), (4, GREEN)]);
        let input = "_QUBES_LABEL(CARDINAL)=3\n\
                     _QUBES_LABEL(CARDINAL)=3\n\
                     _QUBES_LABEL(CARDINAL)=4\n";

        LabelWatcher::new(&sink, &layout, &labels, WHITE)
            .use_static_effect(true)
            .run(Cursor::new(input))
            .unwrap();

        assert_eq!(
            *sink.0.borrow(),
            vec![
                Write::Static(WHITE),
                Write::Static(YELLOW),
                Write::Static(GREEN),
            ]
        );
    }
}
