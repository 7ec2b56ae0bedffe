//! Class-name composition for utility-first stylesheets.
//!
//! Components carry a fixed base style token and accept an optional override
//! from the caller. [`merge_classes`] folds them into one token where a later
//! utility replaces an earlier one that sets the same property, so
//! `"p-2 p-4"` collapses to `"p-4"` while unrelated classes are kept in order.
//!
//! # Example
//!
//! ```rust
//! use leptos_avatar::cn;
//!
//! let extra: Option<&str> = Some("size-12 ring-2");
//! assert_eq!(
//!     cn!("relative flex size-8 rounded-full", extra),
//!     "relative flex rounded-full size-12 ring-2"
//! );
//! ```

pub mod tailwind;

use std::collections::HashSet;

use tailwind::{ConflictKey, ParsedClass};

/// A value that can contribute classes to a merged style token.
///
/// Implemented for string types and for `Option`, so absent overrides can be
/// passed straight through without unwrapping.
pub trait ClassValue {
    /// Appends this value's classes to `buf`, space separated.
    fn append_to(&self, buf: &mut String);
}

impl ClassValue for str {
    fn append_to(&self, buf: &mut String) {
        if self.trim().is_empty() {
            return;
        }
        if !buf.is_empty() {
            buf.push(' ');
        }
        buf.push_str(self);
    }
}

impl ClassValue for String {
    fn append_to(&self, buf: &mut String) {
        self.as_str().append_to(buf);
    }
}

impl<T: ClassValue + ?Sized> ClassValue for &T {
    fn append_to(&self, buf: &mut String) {
        (**self).append_to(buf);
    }
}

impl<T: ClassValue> ClassValue for Option<T> {
    fn append_to(&self, buf: &mut String) {
        if let Some(value) = self {
            value.append_to(buf);
        }
    }
}

/// Concatenates class values and resolves conflicts, later arguments winning.
///
/// Accepts anything implementing [`ClassValue`]: `&str`, `String`, and
/// `Option`s of either.
#[macro_export]
macro_rules! cn {
    ($($value:expr),* $(,)?) => {{
        let mut buf = ::std::string::String::new();
        $( $crate::style::ClassValue::append_to(&$value, &mut buf); )*
        $crate::style::merge_classes(&buf)
    }};
}

/// Normalizes a whitespace-separated class list.
///
/// Conflicting utilities are resolved in favor of the one appearing last.
/// Classes outside any known utility group are never dropped, except for
/// exact duplicates, which keep their last position.
#[must_use]
pub fn merge_classes(input: &str) -> String {
    let classes: Vec<&str> = input.split_ascii_whitespace().collect();

    let mut claimed: HashSet<ConflictKey> = HashSet::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(classes.len());

    for class in classes.into_iter().rev() {
        if !seen.insert(class) {
            continue;
        }

        let parsed = ParsedClass::parse(class);
        if let Some(key) = parsed.conflict_key() {
            if claimed.contains(&key) {
                continue;
            }
            claimed.extend(parsed.claimed_keys());
        }

        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_without_override_keeps_base() {
        let base = "relative flex size-8 shrink-0 overflow-hidden rounded-full";
        let absent: Option<&str> = None;
        assert_eq!(cn!(base, absent), base);
        assert_eq!(cn!(base, Some("")), base);
        assert_eq!(cn!(base, Some("   ")), base);
    }

    #[test]
    fn test_merge_appends_unrelated_classes() {
        assert_eq!(
            cn!(
                "relative flex size-8 shrink-0 overflow-hidden rounded-full",
                Some("ring-2")
            ),
            "relative flex size-8 shrink-0 overflow-hidden rounded-full ring-2"
        );
    }

    #[test]
    fn test_later_class_wins_within_group() {
        assert_eq!(merge_classes("p-2 p-4"), "p-4");
        assert_eq!(merge_classes("bg-muted text-sm bg-red-500"), "text-sm bg-red-500");
        assert_eq!(merge_classes("rounded-full rounded-md"), "rounded-md");
        assert_eq!(merge_classes("flex hidden"), "hidden");
    }

    #[test]
    fn test_shorthand_overrides_longhands() {
        assert_eq!(merge_classes("px-2 pt-1 p-4"), "p-4");
        assert_eq!(merge_classes("w-4 h-6 size-10"), "size-10");
        assert_eq!(merge_classes("rounded-tl-lg rounded-full"), "rounded-full");
        // A longhand after the shorthand refines it.
        assert_eq!(merge_classes("p-4 pt-1"), "p-4 pt-1");
        assert_eq!(merge_classes("size-8 w-10"), "size-8 w-10");
    }

    #[test]
    fn test_text_size_and_color_do_not_conflict() {
        assert_eq!(merge_classes("text-sm text-red-500"), "text-sm text-red-500");
        assert_eq!(merge_classes("text-sm text-lg"), "text-lg");
        assert_eq!(merge_classes("text-left text-center"), "text-center");
    }

    #[test]
    fn test_sibling_families_do_not_conflict() {
        for input in [
            "justify-center justify-items-start",
            "justify-center justify-self-end",
            "bg-muted bg-clip-padding",
            "bg-muted bg-origin-border",
            "bg-muted bg-opacity-50",
            "bg-muted bg-blend-multiply",
            "text-muted text-ellipsis",
            "text-muted text-wrap",
            "text-muted text-nowrap",
            "shadow-md shadow-red-500",
            "content-center content-none",
        ] {
            assert_eq!(merge_classes(input), input);
        }
    }

    #[test]
    fn test_sibling_families_conflict_within_themselves() {
        assert_eq!(merge_classes("justify-items-start justify-items-end"), "justify-items-end");
        assert_eq!(merge_classes("bg-clip-border bg-clip-text"), "bg-clip-text");
        assert_eq!(merge_classes("text-wrap text-nowrap"), "text-nowrap");
        assert_eq!(merge_classes("truncate text-clip"), "text-clip");
        assert_eq!(merge_classes("shadow shadow-lg"), "shadow-lg");
        assert_eq!(merge_classes("shadow-red-500 shadow-primary"), "shadow-primary");
        assert_eq!(merge_classes("content-none content-['*']"), "content-['*']");
    }

    #[test]
    fn test_modifiers_scope_conflicts() {
        assert_eq!(merge_classes("hover:bg-muted bg-red-500"), "hover:bg-muted bg-red-500");
        assert_eq!(merge_classes("hover:bg-muted hover:bg-red-500"), "hover:bg-red-500");
        assert_eq!(
            merge_classes("hover:focus:p-2 focus:hover:p-4"),
            "focus:hover:p-4"
        );
    }

    #[test]
    fn test_important_is_separate_key() {
        assert_eq!(merge_classes("!p-2 p-4"), "!p-2 p-4");
        assert_eq!(merge_classes("!p-2 !p-4"), "!p-4");
    }

    #[test]
    fn test_unknown_classes_survive_and_dedupe() {
        assert_eq!(merge_classes("avatar-ring foo foo"), "avatar-ring foo");
        assert_eq!(merge_classes("foo bar foo"), "bar foo");
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(merge_classes(""), "");
        assert_eq!(merge_classes(" \t\n "), "");
        assert_eq!(merge_classes("[[[ :: ]]] !"), "[[[ :: ]]] !");
    }

    #[test]
    fn test_cn_macro_accepts_mixed_values() {
        let owned = String::from("ring-2");
        let absent: Option<&str> = None;
        assert_eq!(cn!("flex", owned, absent, Some("p-1")), "flex ring-2 p-1");
        assert_eq!(cn!(), "");
    }
}
