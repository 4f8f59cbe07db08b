use batchsh::Interpreter;
use proptest::prelude::*;

fn listing(shell: &mut Interpreter) -> Vec<String> {
    shell.execute("ls")[0]
        .split(' ')
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn fresh_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}".prop_filter("seed names are taken", |name| {
        name != "directory1"
    })
}

proptest! {
    #[test]
    fn mkdir_lists_name_exactly_once(name in fresh_name()) {
        let mut shell = Interpreter::default();
        prop_assert_eq!(
            shell.execute(&format!("mkdir {}", name)),
            vec![format!("Directory created: {}", name)]
        );
        let names = listing(&mut shell);
        prop_assert_eq!(names.iter().filter(|n| **n == name).count(), 1);
    }

    #[test]
    fn second_mkdir_fails_and_keeps_tree(name in fresh_name()) {
        let mut shell = Interpreter::default();
        shell.execute(&format!("mkdir {}", name));
        let before = listing(&mut shell);
        prop_assert_eq!(
            shell.execute(&format!("mkdir {}", name)),
            vec![format!("Error: Directory already exists - {}", name)]
        );
        prop_assert_eq!(listing(&mut shell), before);
    }

    #[test]
    fn copy_duplicates_content(name in "[a-z]{1,8}\\.txt") {
        prop_assume!(name != "file1.txt");
        let mut shell = Interpreter::default();
        shell.execute(&format!("copy file1.txt {}", name));
        prop_assert_eq!(shell.execute(&format!("cat {}", name)), shell.execute("cat file1.txt"));

        shell.execute("del file1.txt");
        prop_assert_eq!(
            shell.execute(&format!("cat {}", name)),
            vec!["Hello, this is file1!".to_string()]
        );
    }

    #[test]
    fn rmdir_removes_created_directory(name in fresh_name()) {
        let mut shell = Interpreter::default();
        shell.execute(&format!("mkdir {}", name));
        prop_assert_eq!(
            shell.execute(&format!("rmdir {}", name)),
            vec![format!("Directory removed: {}", name)]
        );
        prop_assert!(!listing(&mut shell).contains(&name));
    }

    #[test]
    fn del_of_absent_name_is_harmless(name in "[a-z]{1,8}\\.dat") {
        let mut shell = Interpreter::default();
        let before = listing(&mut shell);
        prop_assert_eq!(
            shell.execute(&format!("del {}", name)),
            vec![format!("Error: File not found - {}", name)]
        );
        prop_assert_eq!(listing(&mut shell), before);
    }
}
