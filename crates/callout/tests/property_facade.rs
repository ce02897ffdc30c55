//! Property tests tying the facade's output to the layout layer.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use callout::{split_lines, uncolor, wraptext, Log, LogOptions};
use proptest::prelude::*;

#[derive(Clone, Default)]
struct Capture(Rc<RefCell<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn contents(&self) -> String {
        uncolor(&String::from_utf8_lossy(&self.0.borrow()))
    }
}

fn capture_log(options: LogOptions) -> (Log, Capture) {
    let capture = Capture::default();
    (Log::with_sink(options, capture.clone()), capture)
}

proptest! {
    #[test]
    fn errorlns_prefixes_every_wrapped_line_and_counts_once(
        words in proptest::collection::vec("[a-z]{1,8}", 1..40),
    ) {
        let msg = words.join(" ");
        let (log, out) = capture_log(LogOptions::new());
        log.errorlns(msg.as_str()).unwrap();

        let expected_lines = split_lines(77, &msg).unwrap().len();
        let written = out.contents();
        let lines: Vec<&str> = written.trim_end_matches('\n').split('\n').collect();
        prop_assert_eq!(lines.len(), expected_lines);
        for line in lines {
            prop_assert!(line.starts_with(">> "), "missing prefix on {:?}", line);
        }
        prop_assert_eq!(log.error_count(), 1);
    }

    #[test]
    fn writelns_matches_wraptext_at_default_width(
        msg in "[a-z ]{0,200}",
    ) {
        let (log, out) = capture_log(LogOptions::new());
        log.writelns(msg.as_str()).unwrap();
        prop_assert_eq!(out.contents(), format!("{}\n", wraptext(80, &msg).unwrap()));
    }

    #[test]
    fn writetableln_fields_measure_their_columns(
        widths in proptest::collection::vec(1usize..12, 1..4),
        cells in proptest::collection::vec("[a-z ]{0,20}", 1..8),
    ) {
        let (log, out) = capture_log(LogOptions::new());
        log.writetableln(&widths, &cells).unwrap();

        let written = out.contents();
        for line in written.trim_end_matches('\n').split('\n') {
            let fields: Vec<&str> = line.split('|').collect();
            prop_assert_eq!(fields.len(), widths.len());
            for (field, &width) in fields.iter().zip(&widths) {
                prop_assert_eq!(field.chars().count(), width);
            }
        }
    }
}
