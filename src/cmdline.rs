//! Generic command-line tokenizer.
//!
//! Splits raw arguments into positional arguments and options. Flag prefixes
//! (`-`, `--`, `/` by default) and value delimiters (`=`, `:` by default) are
//! configurable. Options registered as value-taking accept their value in the same
//! token (`--name=value`, `--name:value`, `--namevalue`) or in the following
//! non-flag token (`--name value`).
//!
//! Prefixes, value option names and delimiters are each kept sorted longest first,
//! so `--` is tried before `-` and `app-id` before `a`.

/// One option found on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    /// Option name without its prefix
    pub name: String,
    /// Value, `None` for flags and for value options given without one
    pub value: Option<String>,
}

impl OptionEntry {
    fn flag(name: &str) -> Self {
        Self { name: name.to_string(), value: None }
    }
}

/// Result of tokenizing a command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Non-option arguments, in order
    pub positionals: Vec<String>,
    /// Options, in order
    pub options: Vec<OptionEntry>,
}

/// Command-line tokenizer configuration.
#[derive(Debug, Clone)]
pub struct ArgsTokenizer {
    value_options: Vec<String>,
    prefixes: Vec<String>,
    delimiters: Vec<String>,
}

impl Default for ArgsTokenizer {
    fn default() -> Self {
        Self {
            value_options: Vec::new(),
            prefixes: longest_first(["-", "--", "/"]),
            delimiters: longest_first(["=", ":"]),
        }
    }
}

fn longest_first<I, S>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<String> = Vec::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if !candidate.is_empty() && !sorted.iter().any(|c| c == candidate) {
            sorted.push(candidate.to_string());
        }
    }
    // Stable: equal lengths keep their given order
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    sorted
}

fn strip_longest<'t>(candidates: &[String], text: &'t str) -> Option<(&'t str, &'t str)> {
    candidates.iter().find_map(|candidate| {
        text.strip_prefix(candidate.as_str())
            .map(|rest| (&text[..candidate.len()], rest))
    })
}

impl ArgsTokenizer {
    /// Creates a tokenizer with default prefixes and delimiters.
    pub fn new<I, S>(value_options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokenizer = Self::default();
        for option in value_options {
            tokenizer.register_value_option(option);
        }
        tokenizer
    }

    /// Replaces the flag prefixes. Empty prefixes are ignored.
    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.prefixes = longest_first(prefixes);
        self
    }

    /// Replaces the value delimiters. Empty delimiters are ignored.
    pub fn with_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.delimiters = longest_first(delimiters);
        self
    }

    /// Registers an option that takes a value. Blank names are ignored.
    ///
    /// A name should not contain any of the delimiters.
    pub fn register_value_option<S: AsRef<str>>(&mut self, name: S) {
        let name = name.as_ref();
        if name.trim().is_empty() || self.value_options.iter().any(|o| o == name) {
            return;
        }
        let position = self
            .value_options
            .iter()
            .position(|o| o.len() < name.len())
            .unwrap_or(self.value_options.len());
        self.value_options.insert(position, name.to_string());
    }

    pub fn unregister_value_option(&mut self, name: &str) {
        self.value_options.retain(|o| o != name);
    }

    /// Registered value options, longest first.
    pub fn value_options(&self) -> impl Iterator<Item = &str> {
        self.value_options.iter().map(String::as_str)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    pub fn delimiters(&self) -> impl Iterator<Item = &str> {
        self.delimiters.iter().map(String::as_str)
    }

    /// Tokenizes `args`, which should not include the program path.
    pub fn parse<I, S>(&self, args: I) -> ParseResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = ParseResult::default();
        let mut pending: Option<OptionEntry> = None;

        for arg in args {
            let arg = arg.as_ref();

            let Some((_, flag)) = strip_longest(&self.prefixes, arg) else {
                match pending.take() {
                    Some(mut option) => {
                        option.value = Some(arg.to_string());
                        result.options.push(option);
                    }
                    None => result.positionals.push(arg.to_string()),
                }
                continue;
            };

            // A value never carries across a flag
            if let Some(option) = pending.take() {
                result.options.push(option);
            }

            if flag.trim().is_empty() {
                result.positionals.push(arg.to_string());
                continue;
            }

            match strip_longest(&self.value_options, flag) {
                None => result.options.push(OptionEntry::flag(flag)),
                Some((name, "")) => pending = Some(OptionEntry::flag(name)),
                Some((name, rest)) => {
                    let value = strip_longest(&self.delimiters, rest)
                        .map(|(_, value)| value)
                        .unwrap_or(rest);
                    result.options.push(OptionEntry {
                        name: name.to_string(),
                        value: Some(value.to_string()),
                    });
                }
            }
        }

        if let Some(option) = pending {
            result.options.push(option);
        }

        result
    }
}
