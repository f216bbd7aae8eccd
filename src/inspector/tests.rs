use super::*;
use crate::test_utils::{FakeProc, FakeWindow, FakeWindowSystem};
use serde_json::{json, Value};

fn inspector(windows: FakeWindowSystem, fake: &FakeProc) -> Inspector<FakeWindowSystem> {
    let config = HostConfig::default().with_proc_root(fake.root());
    Inspector::new(windows, &config)
}

fn parse(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

fn editor_fixture() -> (FakeWindowSystem, FakeProc) {
    let fake = FakeProc::new();
    fake.process(2200)
        .comm("cursor\n")
        .cmdline(b"/opt/cursor/cursor\0--no-sandbox\0")
        .stat("2200 (cursor) S 1800 2200 2200 0 -1")
        .cwd("/home/user/myproject");

    let windows = FakeWindowSystem::focused(
        FakeWindow::new("Cursor", "README.md - myproject - Cursor")
            .with_pid(2200)
            .with_role("editor")
            .with_geometry(0, 27, 1920, 1053)
            .with_workspace(1, "Code"),
    );
    (windows, fake)
}

#[test]
fn test_no_focused_window_scalars_are_empty() {
    let fake = FakeProc::new();
    let inspector = inspector(FakeWindowSystem::new(vec![FakeWindow::new("firefox", "x")]), &fake);

    assert_eq!(inspector.focused_window_title(), "");
    assert_eq!(inspector.focused_window_pid(), "");
    assert_eq!(inspector.focused_window_class(), "");
    assert_eq!(inspector.focused_window_role(), "");
    assert_eq!(inspector.process_name(), "");
    assert_eq!(inspector.process_executable_path(), "");
    assert_eq!(inspector.process_command_line(), "");
    assert_eq!(inspector.process_working_directory(), "");
    assert_eq!(inspector.process_parent_pid(), "");
}

#[test]
fn test_no_focused_window_structured_results() {
    let fake = FakeProc::new();
    let inspector = inspector(FakeWindowSystem::new(vec![]), &fake);
    let expected = json!({ "error": "No focused window found" });

    for raw in [
        inspector.window_geometry(),
        inspector.window_workspace(),
        inspector.browser_url(),
        inspector.browser_tab_info(),
        inspector.ide_project_info(),
        inspector.ide_active_file(),
        inspector.terminal_context(),
        inspector.file_manager_path(),
        inspector.document_path(),
    ] {
        assert_eq!(parse(&raw), expected);
    }
}

#[test]
fn test_no_focused_window_aggregates() {
    let fake = FakeProc::new();
    let inspector = inspector(FakeWindowSystem::failing(), &fake);

    for raw in [inspector.all_window_data_json(), inspector.app_context_json()] {
        let value = parse(&raw);
        assert_eq!(value["error"], "No focused window found");
        assert_eq!(value["dataAvailable"], false);
        assert!(value["timestamp"].is_u64());
    }
}

#[test]
fn test_core_fields_of_focused_window() {
    let (windows, fake) = editor_fixture();
    let inspector = inspector(windows, &fake);

    assert_eq!(inspector.focused_window_title(), "README.md - myproject - Cursor");
    assert_eq!(inspector.focused_window_pid(), "2200");
    assert_eq!(inspector.focused_window_class(), "Cursor");
    assert_eq!(inspector.focused_window_role(), "editor");
    assert_eq!(inspector.process_name(), "cursor");
    assert_eq!(inspector.process_command_line(), "/opt/cursor/cursor --no-sandbox");
    assert_eq!(inspector.process_working_directory(), "/home/user/myproject");
    assert_eq!(inspector.process_parent_pid(), "1800");
    // No exe link in the fake record
    assert_eq!(inspector.process_executable_path(), "");

    assert_eq!(
        parse(&inspector.window_geometry()),
        json!({ "x": 0, "y": 27, "width": 1920, "height": 1053 })
    );
    assert_eq!(
        parse(&inspector.window_workspace()),
        json!({ "index": 1, "name": "Code" })
    );
}

#[test]
fn test_window_without_pid() {
    let fake = FakeProc::new();
    let inspector = inspector(FakeWindowSystem::focused(FakeWindow::new("xterm", "xterm")), &fake);

    assert_eq!(inspector.focused_window_pid(), "");
    assert_eq!(inspector.process_name(), "");
    assert_eq!(inspector.process_parent_pid(), "");

    let terminal = parse(&inspector.terminal_context());
    assert_eq!(terminal["workingDirectory"], "");
    assert_eq!(terminal["isTerminal"], true);
}

#[test]
fn test_parent_pid_is_zero_when_unreadable() {
    let fake = FakeProc::new();
    fake.process(55).comm("dolphin");
    let inspector = inspector(
        FakeWindowSystem::focused(FakeWindow::new("dolphin", "Home").with_pid(55)),
        &fake,
    );

    assert_eq!(inspector.process_name(), "dolphin");
    assert_eq!(inspector.process_parent_pid(), "0");
}

#[test]
fn test_broken_window_attributes_degrade() {
    let fake = FakeProc::new();
    let inspector = inspector(
        FakeWindowSystem::focused(FakeWindow::new("Evince", "a.pdf").broken_attributes()),
        &fake,
    );

    assert_eq!(inspector.focused_window_role(), "");
    assert_eq!(
        parse(&inspector.window_geometry()),
        json!({ "x": 0, "y": 0, "width": 0, "height": 0 })
    );
    assert_eq!(parse(&inspector.window_workspace()), json!({ "index": 0, "name": "" }));
}

#[test]
fn test_category_operations_on_browser_window() {
    let fake = FakeProc::new();
    let inspector = inspector(
        FakeWindowSystem::focused(FakeWindow::new(
            "Brave-browser",
            "GitHub - https://github.com - Brave",
        )),
        &fake,
    );

    let url = parse(&inspector.browser_url());
    assert_eq!(url["url"], "https://github.com");
    assert_eq!(url["isBrowser"], true);
    assert_eq!(url["extractionMethod"], "window_title");

    let tab = parse(&inspector.browser_tab_info());
    assert_eq!(tab["windowClass"], "Brave-browser");
    assert!(tab["timestamp"].is_u64());

    assert_eq!(
        parse(&inspector.ide_project_info()),
        json!({ "error": "Not an IDE window", "windowClass": "Brave-browser", "isIde": false })
    );
    assert_eq!(
        parse(&inspector.ide_active_file()),
        json!({ "error": "Not an IDE window", "windowClass": "Brave-browser", "isIde": false })
    );
    assert_eq!(parse(&inspector.terminal_context())["isTerminal"], false);
    assert_eq!(parse(&inspector.file_manager_path())["isFileManager"], false);
    assert_eq!(parse(&inspector.document_path())["isDocument"], false);
}

#[test]
fn test_unified_context_for_browser() {
    let fake = FakeProc::new();
    let inspector = inspector(
        FakeWindowSystem::focused(
            FakeWindow::new("firefox", "Docs - www.rust-lang.org - Mozilla Firefox").with_pid(10),
        ),
        &fake,
    );

    let value = parse(&inspector.app_context_json());
    assert_eq!(value["appType"], "browser");
    assert_eq!(value["windowClass"], "firefox");
    assert_eq!(value["pid"], 10);
    assert_eq!(value["context"]["url"], "www.rust-lang.org");
    assert!(value["timestamp"].is_u64());
}

#[test]
fn test_unified_context_for_unknown_app() {
    let fake = FakeProc::new();
    let inspector = inspector(FakeWindowSystem::focused(FakeWindow::new("Slack", "general")), &fake);

    let value = parse(&inspector.app_context_json());
    assert_eq!(value["appType"], "unknown");
    assert_eq!(value["context"], json!({}));
    assert_eq!(value["pid"], 0);
}

#[test]
fn test_unified_ide_context_matches_dedicated_operations() {
    let (windows, fake) = editor_fixture();
    let inspector = inspector(windows, &fake);

    let unified = parse(&inspector.app_context_json());
    assert_eq!(unified["appType"], "ide");
    assert_eq!(unified["context"]["projectInfo"], parse(&inspector.ide_project_info()));
    assert_eq!(unified["context"]["activeFileInfo"], parse(&inspector.ide_active_file()));
    assert_eq!(unified["context"]["activeFileInfo"]["activeFile"], "README.md");
    assert_eq!(unified["context"]["projectInfo"]["projectName"], "myproject");
}

#[test]
fn test_full_snapshot_shape() {
    let (windows, fake) = editor_fixture();
    let inspector = inspector(windows, &fake);

    let value = parse(&inspector.all_window_data_json());
    assert!(value["timestamp"].is_u64());
    assert_eq!(value["dataCollectionVersion"], "1.0");
    assert_eq!(value["extensionInfo"]["name"], "focuslens");

    let core = &value["core"];
    assert_eq!(core["title"], "README.md - myproject - Cursor");
    assert_eq!(core["windowClass"], "Cursor");
    assert_eq!(core["pid"], 2200);
    assert_eq!(core["processName"], "cursor");
    assert_eq!(core["workingDirectory"], "/home/user/myproject");
    assert_eq!(core["parentPid"], 1800);
    assert_eq!(core["geometry"]["width"], 1920);
    assert_eq!(core["workspace"]["name"], "Code");

    assert_eq!(value["applicationContext"]["detectedType"], "ide");
    assert_eq!(
        value["applicationContext"]["specificData"],
        parse(&inspector.app_context_json())["context"]
    );
    assert!(value["performance"]["collectionDuration"].is_u64());
    assert!(value.get("dataAvailable").is_none());
}

#[test]
fn test_full_snapshot_duration_is_non_negative() {
    let (windows, fake) = editor_fixture();
    let inspector = inspector(windows, &fake);

    if let WindowDataSnapshot::Found { performance, .. } = inspector.all_window_data() {
        // u64 is never negative; sub-millisecond runs report 0
        assert!(performance.collection_duration < 60_000);
    } else {
        unreachable!("focused window expected");
    }
}

#[test]
fn test_extension_info() {
    let fake = FakeProc::new();
    let inspector = inspector(FakeWindowSystem::new(vec![]), &fake);

    let value = parse(&inspector.extension_info());
    assert_eq!(value["name"], "focuslens");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["dataCollectionVersion"], "1.0");
}

#[test]
fn test_calls_are_independent() {
    let (windows, fake) = editor_fixture();
    let inspector = inspector(windows, &fake);

    let first = inspector.ide_project_info();
    let second = inspector.ide_project_info();
    assert_eq!(first, second);
}

#[test]
fn test_now_millis_is_epoch_milliseconds() {
    // 2020-01-01T00:00:00Z
    assert!(now_millis() > 1_577_836_800_000);
}
