use batchsh::{CdMode, Interpreter};

fn run(interpreter: &mut Interpreter, line: &str) -> Vec<String> {
    interpreter.execute(line)
}

#[test]
fn fresh_session_walkthrough() {
    let mut shell = Interpreter::new(CdMode::Validate);

    assert_eq!(run(&mut shell, "ls"), vec!["file1.txt file2.txt directory1"]);
    assert_eq!(run(&mut shell, "cat file1.txt"), vec!["Hello, this is file1!"]);
    assert_eq!(run(&mut shell, "mkdir newdir"), vec!["Directory created: newdir"]);
    assert_eq!(
        run(&mut shell, "ls"),
        vec!["file1.txt file2.txt directory1 newdir"]
    );
    assert_eq!(
        run(&mut shell, "cd newdir"),
        vec!["Changing to directory: newdir"]
    );
    // validate-only cd leaves the cursor at the root
    assert_eq!(run(&mut shell, "cat file1.txt"), vec!["Hello, this is file1!"]);
}

#[test]
fn echo_without_text_prints_empty_line() {
    let mut shell = Interpreter::default();
    assert_eq!(run(&mut shell, "echo "), vec![String::new()]);
    assert_eq!(run(&mut shell, "echo hello world"), vec!["hello world"]);
}

#[test]
fn del_missing_file_leaves_listing_unchanged() {
    let mut shell = Interpreter::default();
    assert_eq!(
        run(&mut shell, "del nofile.txt"),
        vec!["Error: File not found - nofile.txt"]
    );
    assert_eq!(run(&mut shell, "ls"), vec!["file1.txt file2.txt directory1"]);
}

#[test]
fn cd_to_file_or_missing_name_fails() {
    let mut shell = Interpreter::default();
    assert_eq!(
        run(&mut shell, "cd file1.txt"),
        vec!["Error: Directory not found - file1.txt"]
    );
    assert_eq!(
        run(&mut shell, "cd nowhere"),
        vec!["Error: Directory not found - nowhere"]
    );
}

#[test]
fn type_reads_like_cat() {
    let mut shell = Interpreter::default();
    assert_eq!(
        run(&mut shell, "type file2.txt"),
        vec!["Welcome to your second file!"]
    );
}

#[test]
fn delete_then_copy_restores_name_at_end() {
    let mut shell = Interpreter::default();
    assert_eq!(run(&mut shell, "del file1.txt"), vec!["File deleted: file1.txt"]);
    assert_eq!(
        run(&mut shell, "copy file2.txt file1.txt"),
        vec!["File copied: file1.txt"]
    );
    assert_eq!(run(&mut shell, "ls"), vec!["file2.txt directory1 file1.txt"]);
    assert_eq!(
        run(&mut shell, "cat file1.txt"),
        vec!["Welcome to your second file!"]
    );
}

#[test]
fn rmdir_drops_whole_subtree() {
    let mut shell = Interpreter::new(CdMode::Navigate);
    run(&mut shell, "cd directory1");
    run(&mut shell, "mkdir inner");
    run(&mut shell, "cd ..");
    assert_eq!(
        run(&mut shell, "rmdir directory1"),
        vec!["Directory removed: directory1"]
    );
    assert_eq!(run(&mut shell, "ls"), vec!["file1.txt file2.txt"]);
    assert_eq!(
        run(&mut shell, "cd directory1"),
        vec!["Error: Directory not found - directory1"]
    );
}
