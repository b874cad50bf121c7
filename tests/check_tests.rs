//! Check command tests against the real binary

mod common;

use predicates::prelude::*;

#[test]
fn test_check_reports_duplicates_per_map() {
    let workspace = common::TestWorkspace::new();
    workspace.copy_fixture("duplicates.config", "rewriteMap.config");

    workspace
        .cmd()
        .args(["check", "--file", "rewriteMap.config"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"Duplicate key found: "/k1" in map "Redirects""#,
        ))
        .stdout(predicate::str::contains(
            r#"Duplicate key found: "/k2" in map "Redirects""#,
        ))
        .stdout(predicate::str::contains(r#"in map "Legacy""#).not())
        .stdout(predicate::str::contains("No other duplicates found"));
}

#[test]
fn test_check_is_idempotent_and_read_only() {
    let workspace = common::TestWorkspace::new();
    workspace.copy_fixture("duplicates.config", "rewriteMap.config");
    let before = workspace.read_file("rewriteMap.config");

    let first = workspace
        .cmd()
        .args(["check", "-f", "rewriteMap.config"])
        .output()
        .expect("run check");
    let second = workspace
        .cmd()
        .args(["check", "-f", "rewriteMap.config"])
        .output()
        .expect("run check again");

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(workspace.read_file("rewriteMap.config"), before);
}

#[test]
fn test_check_fix_in_place() {
    let workspace = common::TestWorkspace::new();
    workspace.copy_fixture("duplicates.config", "rewriteMap.config");

    workspace
        .cmd()
        .args(["check", "-f", "rewriteMap.config", "--fix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixing duplicates"))
        .stdout(predicate::str::contains("Removed 2 duplicate entries"));

    assert_eq!(
        workspace.read_file("rewriteMap.config"),
        "<rewriteMaps>\n\
         \t<rewriteMap name=\"Redirects\">\n\
         \t\t<add key=\"/k1\" value=\"/v1\" />\n\
         \t\t<add key=\"/k2\" value=\"/v2a\" />\n\
         \t\t<add key=\"/k3\" value=\"/v3\" />\n\
         \t</rewriteMap>\n\
         \t<rewriteMap name=\"Legacy\">\n\
         \t\t<add key=\"/k1\" value=\"/legacy\" />\n\
         \t</rewriteMap>\n\
         </rewriteMaps>\n"
    );

    // A second pass finds nothing left to fix
    workspace
        .cmd()
        .args(["check", "-f", "rewriteMap.config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicate key found").not());
}

#[test]
fn test_check_output_writes_corrected_copy() {
    let workspace = common::TestWorkspace::new();
    workspace.copy_fixture("duplicates.config", "rewriteMap.config");
    let before = workspace.read_file("rewriteMap.config");

    workspace
        .cmd()
        .args(["check", "-f", "rewriteMap.config", "-o", "fixed.config"])
        .assert()
        .success();

    assert_eq!(workspace.read_file("rewriteMap.config"), before);
    let fixed = workspace.read_file("fixed.config");
    assert!(!fixed.contains("/v1b"));
    assert!(!fixed.contains("/v2b"));
    assert!(fixed.contains("/legacy"));
}

#[test]
fn test_check_generated_map_has_no_duplicates() {
    let workspace = common::TestWorkspace::new();
    workspace.copy_fixture("redirects.csv", "redirects.csv");

    workspace
        .cmd()
        .args(["generate", "-f", "redirects.csv", "-n", "Test", "-q"])
        .assert()
        .success();

    workspace
        .cmd()
        .args(["check", "-f", "rewriteMap.config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicate key found").not())
        .stdout(predicate::str::contains("No other duplicates found"));
}

#[test]
fn test_check_missing_file_fails() {
    let workspace = common::TestWorkspace::new();

    workspace
        .cmd()
        .args(["check", "-f", "missing.config"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_check_malformed_xml_fails_without_touching_file() {
    let workspace = common::TestWorkspace::new();
    let broken = "<rewriteMaps><rewriteMap name=\"M\"></rewriteMaps>";
    workspace.write_file("broken.config", broken);

    workspace
        .cmd()
        .args(["check", "-f", "broken.config", "--fix"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse rewrite map XML"));

    assert_eq!(workspace.read_file("broken.config"), broken);
}

#[test]
fn test_check_fix_refuses_other_xml_documents() {
    let workspace = common::TestWorkspace::new();
    let web_config = "<configuration>\n\
        \t<system.webServer>\n\
        \t\t<rewrite>\n\
        \t\t\t<rewriteMaps>\n\
        \t\t\t\t<rewriteMap name=\"M\">\n\
        \t\t\t\t\t<add key=\"/a\" value=\"/b\" />\n\
        \t\t\t\t\t<add key=\"/a\" value=\"/c\" />\n\
        \t\t\t\t</rewriteMap>\n\
        \t\t\t</rewriteMaps>\n\
        \t\t</rewrite>\n\
        \t</system.webServer>\n\
        </configuration>\n";
    workspace.write_file("web.config", web_config);

    workspace
        .cmd()
        .args(["check", "-f", "web.config", "--fix"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("No other duplicates found").not())
        .stderr(predicate::str::contains("expected root element <rewriteMaps>"));

    assert_eq!(workspace.read_file("web.config"), web_config);
}

#[test]
fn test_check_skips_remove_and_clear_children() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(
        "rewriteMap.config",
        "<rewriteMaps>\n\
         \t<rewriteMap name=\"M\">\n\
         \t\t<clear />\n\
         \t\t<add key=\"/a\" value=\"/b\" />\n\
         \t\t<remove key=\"/x\" />\n\
         \t\t<add key=\"/a\" value=\"/c\" />\n\
         \t</rewriteMap>\n\
         </rewriteMaps>\n",
    );

    workspace
        .cmd()
        .args(["check", "-f", "rewriteMap.config"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"Duplicate key found: "/a" in map "M""#));
}
