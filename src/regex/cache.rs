/// Compile a pattern once and hand back a process-wide reference to it on
/// every subsequent call. Patterns are fixed strings, so failing to compile
/// one is a programming error rather than something input can provoke.
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
