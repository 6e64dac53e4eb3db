//! Identifier token codec.
//!
//! Every modal form created through this extension carries an identifier
//! token of the shape `<prefix><command>(<separator><arg>)*`. The prefix
//! marks the token as ours — submissions whose token lacks it are left for
//! other subscribers of the same platform event. The remaining segments are
//! the command name followed by the positional arguments baked into the form
//! at build time.
//!
//! No escaping is performed: a separator character inside a command name or
//! an argument value corrupts decoding (extra arguments appear). Pick a
//! separator that cannot occur in your argument values.

/// Encodes and decodes identifier tokens for one extension instance.
#[derive(Debug, Clone)]
pub struct ModalCodec {
    prefix: String,
    separator: char,
}

impl ModalCodec {
    /// Creates a codec with the given prefix and separator.
    pub fn new(prefix: impl Into<String>, separator: char) -> Self {
        Self {
            prefix: prefix.into(),
            separator,
        }
    }

    /// The prefix every token of this codec starts with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The separator joining the command name and its arguments.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Builds the token for a command name and its positional arguments.
    ///
    /// With no arguments the result is `prefix + name`, without a trailing
    /// separator.
    pub fn encode<I, S>(&self, name: &str, args: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut token = format!("{}{}", self.prefix, name);
        for arg in args {
            token.push(self.separator);
            token.push_str(arg.as_ref());
        }
        token
    }

    /// Splits a token into its command name and positional arguments.
    ///
    /// Returns `None` when the token does not start with this codec's
    /// prefix, i.e. the submission belongs to somebody else.
    pub fn decode(&self, token: &str) -> Option<(String, Vec<String>)> {
        let rest = self.strip(token)?;
        let mut segments = rest.split(self.separator);
        let name = segments.next().unwrap_or_default().to_string();
        let args = segments.map(str::to_string).collect();
        Some((name, args))
    }

    /// Strips the prefix off a token, returning `None` for foreign tokens.
    pub fn strip<'a>(&self, token: &'a str) -> Option<&'a str> {
        token.strip_prefix(&self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> ModalCodec {
        ModalCodec::new("MC:", ':')
    }

    #[test]
    fn test_encode_without_args_has_no_trailing_separator() {
        assert_eq!(codec().encode("poll", Vec::<String>::new()), "MC:poll");
    }

    #[test]
    fn test_encode_joins_args_with_separator() {
        assert_eq!(codec().encode("poll", ["2", "extra"]), "MC:poll:2:extra");
    }

    #[test]
    fn test_decode_round_trip() {
        let codec = codec();
        let args = vec!["42".to_string(), "hello world".to_string()];
        let token = codec.encode("vote", &args);
        let (name, decoded) = codec.decode(&token).expect("our token");
        assert_eq!(name, "vote");
        assert_eq!(decoded, args);
    }

    #[test]
    fn test_decode_round_trip_without_args() {
        let codec = codec();
        let token = codec.encode("vote", Vec::<String>::new());
        let (name, decoded) = codec.decode(&token).expect("our token");
        assert_eq!(name, "vote");
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_rejects_foreign_prefix() {
        assert!(codec().decode("XX:poll:2").is_none());
        assert!(codec().decode("poll:2").is_none());
    }

    #[test]
    fn test_decode_requires_full_prefix() {
        // "MC" alone is not the prefix "MC:".
        assert!(codec().decode("MC").is_none());
    }

    #[test]
    fn test_separator_inside_arg_corrupts_decoding() {
        // Documented limitation: no escaping is performed.
        let codec = codec();
        let token = codec.encode("note", ["a:b"]);
        let (_, args) = codec.decode(&token).expect("our token");
        assert_eq!(args, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_empty_remainder_decodes_to_empty_name() {
        let (name, args) = codec().decode("MC:").expect("our token");
        assert_eq!(name, "");
        assert!(args.is_empty());
    }
}
