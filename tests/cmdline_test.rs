use projgen::cmdline::{ArgsTokenizer, OptionEntry, ParseResult};

fn entry(name: &str, value: Option<&str>) -> OptionEntry {
    OptionEntry { name: name.to_string(), value: value.map(str::to_string) }
}

#[test]
fn test_value_in_same_token() {
    let tokenizer = ArgsTokenizer::new(["path"]);
    let result = tokenizer.parse(["--path=x", "y"]);

    assert_eq!(result.options, vec![entry("path", Some("x"))]);
    assert_eq!(result.positionals, vec!["y".to_string()]);
}

#[test]
fn test_value_in_next_token() {
    let tokenizer = ArgsTokenizer::new(["path"]);
    let result = tokenizer.parse(["--path", "x"]);

    assert_eq!(result.options, vec![entry("path", Some("x"))]);
    assert!(result.positionals.is_empty());
}

#[test]
fn test_value_never_crosses_a_flag() {
    let tokenizer = ArgsTokenizer::new(["path"]);
    let result = tokenizer.parse(["--path", "--other"]);

    assert_eq!(result.options, vec![entry("path", None), entry("other", None)]);
    assert!(result.positionals.is_empty());
}

#[test]
fn test_pending_flag_at_end_of_input() {
    let tokenizer = ArgsTokenizer::new(["path"]);
    let result = tokenizer.parse(["first", "-path"]);

    assert_eq!(
        result,
        ParseResult {
            positionals: vec!["first".to_string()],
            options: vec![entry("path", None)],
        }
    );
}

#[test]
fn test_default_prefixes_and_delimiters() {
    let tokenizer = ArgsTokenizer::new(["title", "t"]);
    let result = tokenizer.parse(["/title:Game", "-t=Other", "-tInline", "--title", "Last"]);

    assert_eq!(
        result.options,
        vec![
            entry("title", Some("Game")),
            entry("t", Some("Other")),
            entry("t", Some("Inline")),
            entry("title", Some("Last")),
        ]
    );
}

#[test]
fn test_longest_option_wins() {
    let tokenizer = ArgsTokenizer::new(["a", "app-id"]);
    let result = tokenizer.parse(["--app-id=com.example.Game", "-ab"]);

    assert_eq!(
        result.options,
        vec![entry("app-id", Some("com.example.Game")), entry("a", Some("b"))]
    );
}

#[test]
fn test_only_one_delimiter_is_stripped() {
    let tokenizer = ArgsTokenizer::new(["d"]);
    let result = tokenizer.parse(["-d=:x", "-d:C:/path"]);

    assert_eq!(result.options, vec![entry("d", Some(":x")), entry("d", Some("C:/path"))]);
}

#[test]
fn test_bare_prefix_is_positional() {
    let tokenizer = ArgsTokenizer::new(["path"]);
    let result = tokenizer.parse(["--path", "-", "--", "x"]);

    assert_eq!(result.options, vec![entry("path", None)]);
    assert_eq!(result.positionals, vec!["-".to_string(), "--".to_string(), "x".to_string()]);
}

#[test]
fn test_custom_prefixes_and_delimiters() {
    let tokenizer = ArgsTokenizer::new(["name"]).with_prefixes(["+"]).with_delimiters(["=>"]);
    let result = tokenizer.parse(["+name=>value", "-name", "+flag"]);

    assert_eq!(result.options, vec![entry("name", Some("value")), entry("flag", None)]);
    assert_eq!(result.positionals, vec!["-name".to_string()]);
}

#[test]
fn test_register_and_unregister() {
    let mut tokenizer = ArgsTokenizer::default();
    assert_eq!(tokenizer.parse(["--out", "file"]).positionals, vec!["file".to_string()]);

    tokenizer.register_value_option("out");
    assert_eq!(tokenizer.parse(["--out", "file"]).options, vec![entry("out", Some("file"))]);

    tokenizer.unregister_value_option("out");
    assert_eq!(tokenizer.value_options().count(), 0);
}
