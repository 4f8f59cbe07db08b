//! Static help text.

pub const HELP_LINES: &[&str] = &[
    "Available commands:",
    "- help: Display this help message",
    "- echo [text]: Print the specified text",
    "- ls: List files in the current directory",
    "- cd [directory]: Change current directory",
    "- cat [file]: Display the contents of a file",
    "- mkdir [directory]: Create a new directory",
    "- rmdir [directory]: Remove a directory",
    "- copy [source] [destination]: Copy a file",
    "- del [file]: Delete a file",
    "- type [file]: Display the contents of a file",
];

pub fn help_lines() -> Vec<String> {
    HELP_LINES.iter().map(|line| line.to_string()).collect()
}
