//! Directive comment parsing.
//!
//! Grammar, matched case-sensitively against the raw comment text (the
//! comment node text includes the leading `//`):
//!
//! ```text
//! directive  := "//structinit:exhaustive" [ "," "omit=" field-list ]
//! field-list := field-name { "," field-name }
//! ```
//!
//! A malformed suffix after the marker is tolerated and ignored; field
//! names are split strictly on `,` with no trimming.

use std::collections::BTreeSet;

/// The directive marker. Process-wide constant, not configuration.
pub const DIRECTIVE: &str = "//structinit:exhaustive";

const OMIT_PREFIX: &str = ",omit=";

/// Result of parsing one comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Whether the comment opts the literal into exhaustiveness checking.
    pub exhaustive: bool,
    /// Field names excused from the check, if an omit list was given.
    pub omitted: Option<BTreeSet<String>>,
}

/// Parse a comment line into a [`Directive`].
///
/// Pure and total: any input yields a result, identical input yields
/// identical output.
pub fn parse(text: &str) -> Directive {
    let suffix = match text.strip_prefix(DIRECTIVE) {
        Some(s) => s,
        None => {
            return Directive {
                exhaustive: false,
                omitted: None,
            }
        }
    };

    let list = match suffix.strip_prefix(OMIT_PREFIX) {
        Some(l) => l,
        None => {
            // Bare marker, or a suffix that is not an omit list.
            return Directive {
                exhaustive: true,
                omitted: None,
            };
        }
    };

    let omitted = list.split(',').map(str::to_string).collect();

    Directive {
        exhaustive: true,
        omitted: Some(omitted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse() {
        struct Case {
            name: &'static str,
            text: &'static str,
            exhaustive: bool,
            omitted: Option<BTreeSet<String>>,
        }

        let cases = [
            Case {
                name: "unrelated_comment",
                text: "// documentation related to definition",
                exhaustive: false,
                omitted: None,
            },
            Case {
                name: "basic_tag",
                text: "//structinit:exhaustive",
                exhaustive: true,
                omitted: None,
            },
            Case {
                name: "basic_tag_with_single_omit",
                text: "//structinit:exhaustive,omit=ID",
                exhaustive: true,
                omitted: Some(set(&["ID"])),
            },
            Case {
                name: "basic_tag_with_multiple_omit",
                text: "//structinit:exhaustive,omit=ID,FirstName,LastName",
                exhaustive: true,
                omitted: Some(set(&["ID", "FirstName", "LastName"])),
            },
            Case {
                name: "malformed_suffix_tolerated",
                text: "//structinit:exhaustive,omitted=ID",
                exhaustive: true,
                omitted: None,
            },
            Case {
                name: "trailing_text_tolerated",
                text: "//structinit:exhaustive please",
                exhaustive: true,
                omitted: None,
            },
            Case {
                name: "marker_is_case_sensitive",
                text: "//structinit:Exhaustive",
                exhaustive: false,
                omitted: None,
            },
            Case {
                name: "whitespace_before_marker_rejected",
                text: "// structinit:exhaustive",
                exhaustive: false,
                omitted: None,
            },
            Case {
                name: "empty_input",
                text: "",
                exhaustive: false,
                omitted: None,
            },
        ];

        for case in cases {
            let directive = parse(case.text);
            assert_eq!(directive.exhaustive, case.exhaustive, "{}", case.name);
            assert_eq!(directive.omitted, case.omitted, "{}", case.name);
        }
    }

    #[test]
    fn test_omit_names_not_trimmed() {
        let directive = parse("//structinit:exhaustive,omit=ID, Name");
        assert_eq!(directive.omitted, Some(set(&["ID", " Name"])));
    }

    #[test]
    fn test_empty_omit_list_yields_empty_name() {
        // strings.Split semantics: splitting "" on ',' gives one empty entry.
        let directive = parse("//structinit:exhaustive,omit=");
        assert!(directive.exhaustive);
        assert_eq!(directive.omitted, Some(set(&[""])));
    }

    #[test]
    fn test_round_trip_field_list() {
        let names = ["Alpha", "beta", "G4mm4"];
        let text = format!("{},omit={}", DIRECTIVE, names.join(","));
        let directive = parse(&text);
        assert_eq!(directive.omitted, Some(set(&names)));
    }

    #[test]
    fn test_deterministic() {
        let text = "//structinit:exhaustive,omit=A,B";
        assert_eq!(parse(text), parse(text));
    }
}
