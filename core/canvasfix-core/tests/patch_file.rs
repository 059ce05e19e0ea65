/// Runs the patcher against real files in a scratch directory.
use std::fs;

use canvasfix_core::artifact::{check_file, patch_file};
use canvasfix_core::rule::PatchOutcome;

const GLUE_SNIPPET: &str = r#"export function __wbg_instanceof_CanvasRenderingContext2d_ff80c06d296e3622(arg0) {
    let result;
    try {
        result = getObject(arg0) instanceof CanvasRenderingContext2D;
    } catch (_) {
        result = false;
    }
    const ret = result;
    return ret;
};
"#;

#[test]
fn single_occurrence_is_rewritten_and_rest_is_byte_identical() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("wasm_demos_bg.js");
    fs::write(&path, GLUE_SNIPPET).unwrap();

    let report = patch_file(&path).expect("patch");

    let expected = GLUE_SNIPPET.replacen(
        "instanceof CanvasRenderingContext2D",
        "instanceof OffscreenCanvasRenderingContext2D",
        1,
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    assert_eq!(report.outcome, PatchOutcome::Applied);
    assert_eq!(report.remaining, 0);
    assert!(report.written);
}

#[test]
fn later_occurrences_survive() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("glue.js");
    let src = "a instanceof CanvasRenderingContext2D\nb instanceof CanvasRenderingContext2D\n";
    fs::write(&path, src).unwrap();

    let report = patch_file(&path).expect("patch");

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "a instanceof OffscreenCanvasRenderingContext2D\nb instanceof CanvasRenderingContext2D\n"
    );
    assert_eq!(report.offset, Some(2));
    assert_eq!(report.remaining, 1);
}

#[test]
fn content_without_literal_is_unchanged() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("glue.js");
    let src = "export const memory = wasm.memory;\n";
    fs::write(&path, src).unwrap();

    let report = patch_file(&path).expect("patch");

    assert_eq!(fs::read_to_string(&path).unwrap(), src);
    assert_eq!(report.outcome, PatchOutcome::NotFound);
    assert!(report.written);
}

#[test]
fn second_run_is_a_no_op() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("glue.js");
    fs::write(&path, "x instanceof CanvasRenderingContext2D;").unwrap();

    let first = patch_file(&path).expect("first run");
    let after_first = fs::read_to_string(&path).unwrap();
    let second = patch_file(&path).expect("second run");

    assert_eq!(first.outcome, PatchOutcome::Applied);
    assert_eq!(second.outcome, PatchOutcome::AlreadyApplied);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    assert_eq!(after_first, "x instanceof OffscreenCanvasRenderingContext2D;");
}

#[test]
fn missing_file_errors_and_is_not_created() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("pkg").join("wasm_demos_bg.js");

    let result = patch_file(&path);

    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn non_utf8_content_is_an_error_and_left_alone() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("glue.js");
    let bytes = [0x66, 0x6f, 0xff, 0xfe, 0x6f];
    fs::write(&path, bytes).unwrap();

    assert!(patch_file(&path).is_err());
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn check_then_patch_then_check() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("glue.js");
    fs::write(&path, GLUE_SNIPPET).unwrap();

    assert_eq!(check_file(&path).unwrap().outcome, PatchOutcome::Applied);
    assert_eq!(fs::read_to_string(&path).unwrap(), GLUE_SNIPPET);

    patch_file(&path).expect("patch");

    let after = check_file(&path).unwrap();
    assert_eq!(after.outcome, PatchOutcome::AlreadyApplied);
    assert_eq!(after.offset, None);
}
