//! Classification of a tokenized command line.

/// Trailing token that runs the command without waiting for it.
pub const BACKGROUND_OPERATOR: &str = "&";
/// Second-to-last token that sends standard output to the file named by the last token.
pub const REDIRECT_OPERATOR: &str = ">";
/// Token separating the two commands of a pipeline.
pub const PIPE_OPERATOR: &str = "|";

/// The shape of a command line, which decides how it is executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandShape {
    /// Run one command and wait for it.
    Simple,
    /// Run one command, minus the trailing `&`, without waiting for it.
    Background,
    /// Connect the output of the tokens before `split_index` to the input of the tokens
    /// after it.
    Pipeline {
        /// Index of the leftmost `|` token.
        split_index: usize,
    },
    /// Run the tokens before the `>` with standard output sent to a file.
    Redirect {
        /// Index of the token naming the destination file; the `>` sits just before it.
        target_path_index: usize,
    },
}

impl CommandShape {
    /// Determines the shape of `tokens`.
    ///
    /// Checks run in a fixed order against the unmodified tokens: a trailing `&`, then a `>`
    /// as second-to-last token, then the leftmost `|`. The first match wins, so a line ending
    /// in `&` is a background command even if it also contains `>` or `|`.
    pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Self {
        let count = tokens.len();

        if count > 1 && token_is(tokens.last(), BACKGROUND_OPERATOR) {
            return Self::Background;
        }

        if count > 2 && token_is(tokens.get(count - 2), REDIRECT_OPERATOR) {
            return Self::Redirect {
                target_path_index: count - 1,
            };
        }

        if let Some(split_index) = tokens.iter().position(|t| t.as_ref() == PIPE_OPERATOR) {
            return Self::Pipeline { split_index };
        }

        Self::Simple
    }
}

fn token_is<S: AsRef<str>>(token: Option<&S>, expected: &str) -> bool {
    token.is_some_and(|t| t.as_ref() == expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple() {
        assert_eq!(CommandShape::classify(&["echo", "hi"]), CommandShape::Simple);
        assert_eq!(CommandShape::classify(&["ls"]), CommandShape::Simple);

        let empty: [&str; 0] = [];
        assert_eq!(CommandShape::classify(&empty), CommandShape::Simple);
    }

    #[test]
    fn test_background() {
        assert_eq!(
            CommandShape::classify(&["sleep", "5", "&"]),
            CommandShape::Background
        );
        // A lone `&` is too short to be a background command.
        assert_eq!(CommandShape::classify(&["&"]), CommandShape::Simple);
    }

    #[test]
    fn test_redirect() {
        assert_eq!(
            CommandShape::classify(&["echo", "hi", ">", "out.txt"]),
            CommandShape::Redirect {
                target_path_index: 3
            }
        );
        // Needs at least one token before the `>`.
        assert_eq!(CommandShape::classify(&[">", "out.txt"]), CommandShape::Simple);
        // Only the second-to-last position counts.
        assert_eq!(
            CommandShape::classify(&["echo", ">", "a", "b"]),
            CommandShape::Simple
        );
    }

    #[test]
    fn test_pipeline() {
        assert_eq!(
            CommandShape::classify(&["ls", "|", "wc", "-l"]),
            CommandShape::Pipeline { split_index: 1 }
        );
        assert_eq!(
            CommandShape::classify(&["a", "|", "b", "|", "c"]),
            CommandShape::Pipeline { split_index: 1 }
        );
        assert_eq!(
            CommandShape::classify(&["|", "wc"]),
            CommandShape::Pipeline { split_index: 0 }
        );
    }

    #[test]
    fn test_detection_order() {
        assert_eq!(
            CommandShape::classify(&["echo", "hi", ">", "out.txt", "&"]),
            CommandShape::Background
        );
        assert_eq!(
            CommandShape::classify(&["ls", "|", "wc", "&"]),
            CommandShape::Background
        );
        assert_eq!(
            CommandShape::classify(&["ls", "|", "wc", ">", "out.txt"]),
            CommandShape::Redirect {
                target_path_index: 4
            }
        );
        assert_eq!(
            CommandShape::classify(&["echo", ">", "|", "wc"]),
            CommandShape::Pipeline { split_index: 2 }
        );
    }

    #[test]
    fn test_owned_tokens() {
        let tokens: Vec<String> = ["cat", "|", "sort"].map(String::from).to_vec();
        assert_eq!(
            CommandShape::classify(&tokens),
            CommandShape::Pipeline { split_index: 1 }
        );
    }
}
