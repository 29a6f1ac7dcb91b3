//! End-to-end tests for the `ptk-abbrev` command line with a manifest fixture

use clap::Parser;
use ptk_utils::cli::{Cli, ExitCode, execute};

const MANIFEST: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/registry.json");

fn run(args: &[&str]) -> Result<String, ptk_utils::cli::CliError> {
    let argv = ["ptk-abbrev", "--manifest", MANIFEST].into_iter().chain(args.iter().copied());
    execute(Cli::try_parse_from(argv).unwrap())
}

#[test]
fn test_abbrev_with_manifest() {
    let out = run(&["abbrev", "de.fau.cs.osr.utils.test2.ClassB", "org.example.ast.NodeImpl", "int[]"]).unwrap();
    assert_eq!(out, "ptk:de.fau.cs.osr.utils.test2.ClassB\nast:Node\nptk:int[]\n");
}

#[test]
fn test_resolve_with_manifest() {
    let out = run(&["resolve", "ast:Node", "ClassB", "ptk:ClassC[]"]).unwrap();
    assert_eq!(
        out,
        "org.example.ast.NodeImpl\nde.fau.cs.osr.utils.test1.ClassB\nde.fau.cs.osr.utils.test2.ClassC[]\n"
    );
}

#[test]
fn test_prefixes_with_manifest() {
    let out = run(&["prefixes"]).unwrap();
    assert_eq!(out, "ptk = http://example.org/test-dummy-for-ptk\nast = http://example.org/ast\n");
}

#[test]
fn test_command_line_namespaces_follow_manifest() {
    let out = run(&["abbrev", "other.ClassA", "-n", "other=o=urn:other", "-t", "other.ClassA"]).unwrap();
    assert_eq!(out, "ptk:other.ClassA\n");

    let out = run(&["prefixes", "-n", "other=o=urn:other"]).unwrap();
    assert!(out.ends_with("o = urn:other\n"));
}

#[test]
fn test_namespaces_listing() {
    let out = run(&["namespaces"]).unwrap();
    let expected = "\
ptk.lang (ptk = http://sweble.org/doc/site/tooling/parser-toolkit/ptk-xml-tools)
de.fau.cs.osr.utils.test1 (ptk = http://example.org/test-dummy-for-ptk)
  ClassA -> ptk:ClassA
  ClassB -> ptk:ClassB
de.fau.cs.osr.utils.test2 (ptk)
  ClassB -> ptk:de.fau.cs.osr.utils.test2.ClassB
  ClassC -> ptk:ClassC
org.example.ast (ast = http://example.org/ast)
  Node -> ast:Node
  NodeImpl -> ast:Node
";
    assert_eq!(out, expected);
}

#[test]
fn test_missing_manifest_file() {
    let cli = Cli::try_parse_from(["ptk-abbrev", "--manifest", "/nonexistent/registry.json", "prefixes"]).unwrap();
    let err = execute(cli).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("failed to read manifest"), "{}", err.message);
}

#[test]
fn test_unregistered_type_fails_unless_lenient() {
    let err = run(&["abbrev", "java.util.List"]).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("java.util.List"), "{}", err.message);

    let out = run(&["abbrev", "java.util.List", "--lenient"]).unwrap();
    assert_eq!(out, "java.util.List\n");
}
