//! End-to-end driver tests against a real temporary directory tree.

use std::fs;
use std::path::Path;

use testport::cli::args::{CommonArgs, GenerateArgs, GenerateCommand};
use testport::cli::commands::{CommandSummary, FileStatus, generate::generate};

const ORIGIN_MYSQL: &str = r#"class TestMysql(Validator):
    dialect = "mysql"

    def test_basic(self):
        self.validate_identity("SELECT 1")
        self.validate_all(
            "SELECT 1",
            write={"presto": "SELECT 1"},
        )
        self.validate_identity("CREATE TABLE t (a INT)")
"#;

fn command(origin: &Path, out: &Path, dialect: Option<&str>, dry_run: bool) -> GenerateCommand {
    GenerateCommand {
        args: GenerateArgs {
            common: CommonArgs {
                origin_root: Some(origin.to_path_buf()),
                out_root: Some(out.to_path_buf()),
                config: None,
                verbose: false,
            },
            dialect: dialect.map(String::from),
            dry_run,
        },
    }
}

#[test]
fn generates_one_destination_file_per_origin_file() {
    let origin = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(origin.path().join("test_mysql.py"), ORIGIN_MYSQL).unwrap();

    let result = generate(command(origin.path(), out.path(), None, false)).unwrap();
    assert_eq!(result.failed_count, 0);

    let generated = fs::read_to_string(out.path().join("test_mysql.test.ts")).unwrap();
    assert!(generated.starts_with("// @generated by testport -- DO NOT EDIT"));
    assert!(generated.contains("const DIALECT = \"mysql\";"));
    assert!(generated.contains("describe(\"Mysql: basic\", () => {"));
    assert!(generated.contains("    validateIdentity(\"SELECT 1\");"));
    assert!(generated.contains(
        "    const result = transpile(\"SELECT 1\", { readDialect: DIALECT, writeDialect: \"presto\" })[0];"
    ));
    assert!(generated.contains("  it.todo(\"CREATE TABLE t (a INT) (DDL/DML not supported)\");"));
}

#[test]
fn regeneration_is_byte_identical() {
    let origin = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(origin.path().join("test_mysql.py"), ORIGIN_MYSQL).unwrap();

    generate(command(origin.path(), out.path(), None, false)).unwrap();
    let first = fs::read_to_string(out.path().join("test_mysql.test.ts")).unwrap();
    generate(command(origin.path(), out.path(), None, false)).unwrap();
    let second = fs::read_to_string(out.path().join("test_mysql.test.ts")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn protected_destinations_are_never_overwritten() {
    let origin = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(
        origin.path().join("test_playground_e2e.py"),
        "class TestPlayground(Validator):\n    def test_x(self):\n        self.validate_identity(\"SELECT 1\")\n",
    )
    .unwrap();
    let protected_path = out.path().join("test_playground_e2e.test.ts");
    fs::write(&protected_path, "// hand-maintained\n").unwrap();

    let result = generate(command(origin.path(), out.path(), None, false)).unwrap();
    let CommandSummary::Generate(summary) = &result.summary else {
        panic!("expected a generate summary");
    };
    assert!(matches!(summary.files[0].status, FileStatus::Protected));
    assert_eq!(
        fs::read_to_string(&protected_path).unwrap(),
        "// hand-maintained\n"
    );
}

#[test]
fn a_broken_file_does_not_stop_the_others() {
    let origin = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(origin.path().join("test_broken.py"), "def broken(:\n").unwrap();
    fs::write(origin.path().join("test_mysql.py"), ORIGIN_MYSQL).unwrap();

    let result = generate(command(origin.path(), out.path(), None, false)).unwrap();
    assert_eq!(result.failed_count, 1);
    assert!(out.path().join("test_mysql.test.ts").exists());
    assert!(!out.path().join("test_broken.test.ts").exists());

    let CommandSummary::Generate(summary) = &result.summary else {
        panic!("expected a generate summary");
    };
    let broken = summary
        .files
        .iter()
        .find(|f| f.out_name == "test_broken.test.ts")
        .unwrap();
    assert!(matches!(broken.status, FileStatus::Failed(_)));
}

#[test]
fn unknown_dialect_is_a_fatal_error() {
    let origin = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(origin.path().join("test_mysql.py"), ORIGIN_MYSQL).unwrap();

    let err = generate(command(origin.path(), out.path(), Some("nope"), false)).unwrap_err();
    assert!(err.to_string().contains("'nope' not found"));
}

#[test]
fn dry_run_renders_without_writing() {
    let origin = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(origin.path().join("test_mysql.py"), ORIGIN_MYSQL).unwrap();

    let result = generate(command(origin.path(), out.path(), None, true)).unwrap();
    assert!(!out.path().join("test_mysql.test.ts").exists());

    let CommandSummary::Generate(summary) = &result.summary else {
        panic!("expected a generate summary");
    };
    let FileStatus::Written { content, .. } = &summary.files[0].status else {
        panic!("expected rendered content");
    };
    assert!(content.as_deref().unwrap().contains("describe(\"Mysql: basic\""));
}

#[test]
fn skip_listed_origin_files_are_ignored() {
    let origin = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(origin.path().join("test_dialect.py"), ORIGIN_MYSQL).unwrap();
    fs::write(origin.path().join("test_mysql.py"), ORIGIN_MYSQL).unwrap();

    let result = generate(command(origin.path(), out.path(), None, false)).unwrap();
    let CommandSummary::Generate(summary) = &result.summary else {
        panic!("expected a generate summary");
    };
    assert_eq!(summary.files.len(), 1);
    assert!(!out.path().join("test_dialect.test.ts").exists());
}
