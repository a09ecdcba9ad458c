use std::fs;
use std::path::Path;

use projgen::error::Error;
use projgen::filter::{IdentityFilter, Substitutor};
use projgen::manifest::{Manifest, OperationSet};
use projgen::processor::{needs_bom, Processor};
use projgen::variables::VariableTable;
use tempfile::TempDir;

const BOM: &[u8] = b"\xEF\xBB\xBF";

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn main_set(manifest: &str) -> OperationSet {
    Manifest::parse(manifest, &IdentityFilter).main().clone()
}

#[test]
fn test_needs_bom() {
    assert!(needs_bom("Sources/Main.cpp"));
    assert!(needs_bom("Sources/Main.H"));
    assert!(!needs_bom("Sources/Main.hpp"));
    assert!(!needs_bom("build.gradle"));
    assert!(!needs_bom("Makefile"));
}

#[test_log::test]
fn test_copy_subtree() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "Proj/a.txt", "a");
    write(template.path(), "Proj/sub/b.txt", "b");
    write(template.path(), "Proj/sub/deeper/c.txt", "c");
    fs::create_dir_all(template.path().join("Proj/empty")).unwrap();

    let processor = Processor::new(&IdentityFilter, template.path(), output.path(), false);
    let report = processor.run(&main_set("C: Proj/* : Out"));

    assert!(report.skipped.is_empty());
    assert_eq!(report.written, 3);
    assert_eq!(fs::read_to_string(output.path().join("Out/a.txt")).unwrap(), "a");
    assert_eq!(fs::read_to_string(output.path().join("Out/sub/deeper/c.txt")).unwrap(), "c");
    assert!(output.path().join("Out/empty").is_dir());
}

#[test_log::test]
fn test_missing_sources_are_skipped() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "present.txt", "here");

    let processor = Processor::new(&IdentityFilter, template.path(), output.path(), false);
    let report = processor.run(&main_set("C: nodir/*\nC: absent.txt\nF: absent.h\nC: present.txt"));

    assert_eq!(report.written, 1);
    assert_eq!(report.skipped.len(), 3);
    assert!(report.skipped.iter().all(|e| matches!(e, Error::SourceNotFound { .. })));
    assert!(output.path().join("present.txt").is_file());
    assert!(!output.path().join("absent.txt").exists());
}

#[test_log::test]
fn test_copy_file_creates_parents() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "icon.png", "png");

    let processor = Processor::new(&IdentityFilter, template.path(), output.path(), false);
    let report = processor.run(&main_set("C: icon.png : res/drawable/icon.png"));

    assert!(report.skipped.is_empty());
    assert_eq!(fs::read(output.path().join("res/drawable/icon.png")).unwrap(), b"png");
}

#[test_log::test]
fn test_copy_does_not_overwrite_without_flag() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "a.txt", "new");
    write(output.path(), "a.txt", "old");

    let processor = Processor::new(&IdentityFilter, template.path(), output.path(), false);
    let report = processor.run(&main_set("C: a.txt"));
    assert!(matches!(report.skipped.as_slice(), [Error::TargetExists { .. }]));
    assert_eq!(fs::read_to_string(output.path().join("a.txt")).unwrap(), "old");

    let processor = Processor::new(&IdentityFilter, template.path(), output.path(), true);
    let report = processor.run(&main_set("C: a.txt"));
    assert!(report.skipped.is_empty());
    assert_eq!(fs::read_to_string(output.path().join("a.txt")).unwrap(), "new");
}

#[test_log::test]
fn test_filter_file_encoding() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "Main.cpp", "// ${{ProgramName}}\n");
    write(template.path(), "Info.plist", "<string>${{ProgramName:U}}</string>");

    let variables = VariableTable::builder().set("ProgramName", "SpaceTrip").build();
    let substitutor = Substitutor::new(&variables);
    let processor = Processor::new(&substitutor, template.path(), output.path(), false);
    let report = processor.run(&main_set("F: Main.cpp : src/Main.cpp\nF: Info.plist"));

    assert!(report.skipped.is_empty());
    assert_eq!(report.written, 2);

    let cpp = fs::read(output.path().join("src/Main.cpp")).unwrap();
    assert_eq!(&cpp[..3], BOM);
    assert_eq!(&cpp[3..], b"// SpaceTrip\n");

    let plist = fs::read(output.path().join("Info.plist")).unwrap();
    assert_eq!(plist, b"<string>SPACETRIP</string>");
}

#[test_log::test]
fn test_filter_strips_source_bom() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let mut content = BOM.to_vec();
    content.extend_from_slice(b"text");
    fs::write(template.path().join("a.txt"), content).unwrap();

    let processor = Processor::new(&IdentityFilter, template.path(), output.path(), false);
    processor.run(&main_set("F: a.txt"));

    assert_eq!(fs::read(output.path().join("a.txt")).unwrap(), b"text");
}

#[test_log::test]
fn test_filter_rejects_invalid_utf8() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(template.path().join("bin.dat"), [0xff, 0xfe, 0x00]).unwrap();

    let processor = Processor::new(&IdentityFilter, template.path(), output.path(), false);
    let report = processor.run(&main_set("F: bin.dat"));

    assert!(matches!(report.skipped.as_slice(), [Error::ReadError { .. }]));
    assert!(!output.path().join("bin.dat").exists());
}

#[test_log::test]
fn test_kind_order_lets_filter_replace_copied_file() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "Proj/Game.h", "#define NAME \"${{ProgramName}}\"");

    let variables = VariableTable::builder().set("ProgramName", "SpaceTrip").build();
    let substitutor = Substitutor::new(&variables);
    let processor = Processor::new(&substitutor, template.path(), output.path(), false);

    // Declared filter first; the subtree copy still runs before it
    let report = processor.run(&main_set("F: Proj/Game.h\nC: Proj/*"));

    assert!(report.skipped.is_empty());
    let header = fs::read(output.path().join("Proj/Game.h")).unwrap();
    assert_eq!(&header[3..], b"#define NAME \"SpaceTrip\"");
}

#[test_log::test]
fn test_subtree_directory_failure_is_recorded() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "Proj/a.txt", "a");
    write(template.path(), "Proj/sub/b.txt", "b");
    // A regular file where the subtree needs a directory
    write(output.path(), "Out/sub", "blocking");

    let processor = Processor::new(&IdentityFilter, template.path(), output.path(), false);
    let report = processor.run(&main_set("C: Proj/* : Out"));

    assert_eq!(report.written, 1);
    match report.skipped.as_slice() {
        [Error::WriteError { path, .. }, Error::CopyError { .. }] => {
            assert_eq!(path, &output.path().join("Out").join("sub"));
        }
        other => panic!("Expected WriteError then CopyError, got {:?}", other),
    }
    assert_eq!(fs::read_to_string(output.path().join("Out/sub")).unwrap(), "blocking");
}
