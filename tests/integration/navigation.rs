use batchsh::types::NodePath;
use batchsh::{CdMode, Interpreter};

#[test]
fn navigate_mode_descends_and_returns() {
    let mut shell = Interpreter::new(CdMode::Navigate);
    shell.execute("mkdir a");
    shell.execute("cd a");
    shell.execute("mkdir b");
    shell.execute("cd b");
    assert_eq!(
        shell.session().cwd(),
        &NodePath::root().join("a").join("b")
    );
    assert_eq!(shell.execute("ls"), vec![String::new()]);

    shell.execute("cd ..");
    assert_eq!(shell.execute("ls"), vec!["b"]);

    assert_eq!(shell.execute("cd /"), vec!["Changing to directory: /"]);
    assert!(shell.session().cwd().is_root());
}

#[test]
fn failed_cd_does_not_move_cursor() {
    let mut shell = Interpreter::new(CdMode::Navigate);
    shell.execute("cd directory1");
    assert_eq!(
        shell.execute("cd missing"),
        vec!["Error: Directory not found - missing"]
    );
    assert_eq!(shell.session().cwd(), &NodePath::root().join("directory1"));
}

#[test]
fn files_are_scoped_to_current_directory() {
    let mut shell = Interpreter::new(CdMode::Navigate);
    shell.execute("cd directory1");
    assert_eq!(
        shell.execute("copy file1.txt here.txt"),
        vec!["Error: Source file not found - file1.txt"]
    );
    shell.execute("cd ..");
    shell.execute("copy file1.txt here.txt");
    shell.execute("cd directory1");
    assert_eq!(
        shell.execute("cat here.txt"),
        vec!["Error: File not found - here.txt"]
    );
}
