use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Programming language tracked by the assessment.
///
/// Every submission carries one solution per language, and each solution is
/// executed by the sandbox under the identifier returned by [`Language::as_str`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Solutions compiled and run as a Rust binary.
    Rust,
    /// Solutions run as a TypeScript script.
    TypeScript,
}

impl Language {
    /// All tracked languages.
    pub const ALL: &'static [Language] = &[Self::Rust, Self::TypeScript];

    /// Sandbox language identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::TypeScript => "typescript",
        }
    }

    /// File name the source is uploaded under.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Rust => "main.rs",
            Self::TypeScript => "main.ts",
        }
    }

    /// Test invocation appended to the candidate's code.
    ///
    /// Both harnesses call the candidate's `sum` with `[1, 2, 3]` and print the
    /// result, so a correct solution prints exactly `6`.
    pub fn harness(&self) -> &'static str {
        match self {
            Self::Rust => {
                "fn main() {\n    let result = sum(vec![1, 2, 3]);\n    println!(\"{}\", result);\n}\n"
            }
            Self::TypeScript => "console.log(sum([1, 2, 3]));\n",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown language string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    invalid: String,
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid language '{}'. Valid values: {}",
            self.invalid,
            Language::ALL
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(Self::Rust),
            "typescript" | "ts" => Ok(Self::TypeScript),
            _ => Err(ParseLanguageError {
                invalid: s.to_string(),
            }),
        }
    }
}
