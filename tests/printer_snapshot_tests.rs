//! Snapshot tests for printer layout
//!
//! Uses insta inline snapshots. Review changes: `cargo insta review`

use ptk_utils::printer::{Printer, PrinterConfig};

/// Minimal tree rendered through the printer
struct Element {
    name: &'static str,
    children: Vec<Element>,
}

fn el(name: &'static str, children: Vec<Element>) -> Element {
    Element { name, children }
}

fn render(printer: &mut Printer<&'static str>, element: &Element) {
    let Some(memo) = printer.memoize_start(element.name) else {
        return;
    };
    if element.children.is_empty() {
        printer.indentln(format!("<{}/>", element.name));
    } else {
        printer.indentln(format!("<{}>", element.name));
        printer.inc_indent();
        for child in &element.children {
            render(printer, child);
        }
        printer.dec_indent();
        printer.indentln(format!("</{}>", element.name));
    }
    printer.memoize_stop(memo).unwrap();
}

fn document() -> Element {
    el(
        "doc",
        vec![
            el("head", vec![el("title", vec![])]),
            el("body", vec![el("p", vec![el("br", vec![])]), el("p", vec![el("br", vec![])])]),
        ],
    )
}

#[test]
fn test_nested_elements() {
    let mut printer = Printer::new();
    render(&mut printer, &document());
    let output = printer.finish();

    insta::assert_snapshot!(output.trim_end(), @r"
<doc>
  <head>
    <title/>
  </head>
  <body>
    <p>
      <br/>
    </p>
    <p>
      <br/>
    </p>
  </body>
</doc>
");
}

#[test]
fn test_memoized_output_matches_plain_output() {
    let mut memoized = Printer::new();
    render(&mut memoized, &document());
    let stats = memoized.memo_stats();

    let mut plain = Printer::with_config(PrinterConfig::new().with_memoize(false));
    render(&mut plain, &document());

    // The second <p> is replayed from the first one's rendering.
    assert_eq!(stats.reuse, 1);
    assert_eq!(plain.memo_stats().entries, 0);
    assert_eq!(memoized.finish(), plain.finish());
}

#[test]
fn test_blank_lines_between_sections() {
    let mut printer: Printer = Printer::with_config(PrinterConfig::new().with_indent_width(4));
    for section in ["alpha", "beta"] {
        printer.indentln(format!("[{section}]"));
        printer.inc_indent();
        printer.indentln("key = 1");
        printer.dec_indent();
        printer.need_newlines(2);
    }
    let output = printer.finish();

    insta::assert_snapshot!(output.trim_end(), @r"
[alpha]
    key = 1

[beta]
    key = 1
");
}
