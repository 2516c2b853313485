//! Property key classification
//!
//! Slide property keys are namespaced by prefix (`tiff.`, `openslide.`,
//! vendor tags). Classification turns one key into a display group and a
//! residual key, driven by an ordered rule table evaluated
//! first-match-wins.

/// A single classification rule.
///
/// Keys starting with `matches` belong to `group`; `strip` is the literal
/// removed from the key to produce the residual display key.
struct GroupRule {
    matches: &'static str,
    group: &'static str,
    strip: &'static str,
}

/// Ordered rule table, most specific prefix first.
///
/// The MIRAX rule matches `mirax.GENERAL` but strips `mirax.GENERAL.`,
/// trailing dot included: a key like `mirax.GENERALHEADER.foo` groups
/// under MIRAX General Tags with its key left intact. The mismatch is
/// load-bearing display behavior; see DESIGN.md before touching it.
const GROUP_RULES: &[GroupRule] = &[
    GroupRule {
        matches: "tiff.ImageDescription.",
        group: "TIFF Image Description",
        strip: "tiff.ImageDescription.",
    },
    GroupRule {
        matches: "tiff.",
        group: "TIFF Tags",
        strip: "tiff.",
    },
    GroupRule {
        matches: "mirax.GENERAL",
        group: "MIRAX General Tags",
        strip: "mirax.GENERAL.",
    },
    GroupRule {
        matches: "openslide.",
        group: "OpenSlide Properties",
        strip: "openslide.",
    },
];

/// Group for keys no rule matches.
pub const DEFAULT_GROUP: &str = "Other Properties";

/// A property key split into its display group and residual key.
///
/// Derived on demand from the key string alone; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Display group derived from the key's namespace prefix.
    pub group: &'static str,
    /// The key with its recognized prefix removed.
    pub key: String,
}

/// Classifies a property key into a display group and residual key.
///
/// Total and deterministic: every string classifies, unmatched keys fall
/// into [`DEFAULT_GROUP`] with the key unchanged. Stripping removes the
/// first occurrence of the rule's literal strip string anywhere in the
/// key, not an anchored prefix; if the literal is absent the key passes
/// through untouched.
///
/// # Example
///
/// ```
/// use slidemeta_lib::classify::classify;
///
/// let c = classify("tiff.ImageDescription.Make");
/// assert_eq!(c.group, "TIFF Image Description");
/// assert_eq!(c.key, "Make");
/// ```
pub fn classify(key: &str) -> Classification {
    for rule in GROUP_RULES {
        if key.starts_with(rule.matches) {
            return Classification {
                group: rule.group,
                key: key.replacen(rule.strip, "", 1),
            };
        }
    }
    Classification {
        group: DEFAULT_GROUP,
        key: key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_groups() {
        let c = classify("tiff.ImageDescription.Make");
        assert_eq!(c.group, "TIFF Image Description");
        assert_eq!(c.key, "Make");

        let c = classify("tiff.Software");
        assert_eq!(c.group, "TIFF Tags");
        assert_eq!(c.key, "Software");

        let c = classify("mirax.GENERAL.SLIDE_NAME");
        assert_eq!(c.group, "MIRAX General Tags");
        assert_eq!(c.key, "SLIDE_NAME");

        let c = classify("openslide.vendor");
        assert_eq!(c.group, "OpenSlide Properties");
        assert_eq!(c.key, "vendor");
    }

    #[test]
    fn test_default_group() {
        let c = classify("unknown.key");
        assert_eq!(c.group, DEFAULT_GROUP);
        assert_eq!(c.key, "unknown.key");

        let c = classify("");
        assert_eq!(c.group, DEFAULT_GROUP);
        assert_eq!(c.key, "");
    }

    #[test]
    fn test_more_specific_rule_wins() {
        // tiff.ImageDescription. must be tried before the bare tiff. rule
        let c = classify("tiff.ImageDescription.ScannerModel");
        assert_eq!(c.group, "TIFF Image Description");
        assert_eq!(c.key, "ScannerModel");
    }

    #[test]
    fn test_mirax_trailing_dot_mismatch() {
        // Matches the rule but lacks the dotted strip literal, so the key
        // comes through whole.
        let c = classify("mirax.GENERALHEADER.foo");
        assert_eq!(c.group, "MIRAX General Tags");
        assert_eq!(c.key, "mirax.GENERALHEADER.foo");
    }

    #[test]
    fn test_strip_removes_first_occurrence_only() {
        let c = classify("tiff.Make.tiff.Model");
        assert_eq!(c.group, "TIFF Tags");
        assert_eq!(c.key, "Make.tiff.Model");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(classify("openslide.mpp-x"), classify("openslide.mpp-x"));
    }
}
