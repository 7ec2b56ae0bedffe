//! Utility-class parsing and conflict groups.
//!
//! A class such as `md:hover:!-mt-2` splits into variant modifiers
//! (`md`, `hover`), an important flag and a base utility (`mt-2`, sign
//! stripped). The base utility maps to a [`Group`]: the CSS property it sets.
//! Two classes conflict when they share modifiers, important flag and group,
//! or when one's group is a shorthand covering the other's.

/// Property group a utility class writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Display,
    Position,
    Visibility,
    Overflow,
    OverflowX,
    OverflowY,
    Inset,
    InsetX,
    InsetY,
    Top,
    Right,
    Bottom,
    Left,
    ZIndex,
    FlexDirection,
    FlexWrap,
    Flex,
    Grow,
    Shrink,
    Basis,
    Order,
    AlignItems,
    JustifyContent,
    JustifyItems,
    JustifySelf,
    AlignContent,
    AlignSelf,
    Gap,
    GapX,
    GapY,
    P,
    Px,
    Py,
    Pt,
    Pr,
    Pb,
    Pl,
    Ps,
    Pe,
    M,
    Mx,
    My,
    Mt,
    Mr,
    Mb,
    Ml,
    Ms,
    Me,
    Size,
    W,
    MinW,
    MaxW,
    H,
    MinH,
    MaxH,
    AspectRatio,
    ObjectFit,
    ObjectPosition,
    FontSize,
    FontWeight,
    FontFamily,
    TextAlign,
    TextColor,
    TextOpacity,
    TextOverflow,
    TextWrap,
    LineHeight,
    Tracking,
    BgColor,
    BgImage,
    BgSize,
    BgPosition,
    BgRepeat,
    BgAttachment,
    BgClip,
    BgOrigin,
    BgOpacity,
    BgBlend,
    Rounded,
    RoundedT,
    RoundedR,
    RoundedB,
    RoundedL,
    RoundedS,
    RoundedE,
    RoundedTl,
    RoundedTr,
    RoundedBr,
    RoundedBl,
    RoundedSs,
    RoundedSe,
    RoundedEe,
    RoundedEs,
    BorderWidth,
    BorderWidthX,
    BorderWidthY,
    BorderWidthT,
    BorderWidthR,
    BorderWidthB,
    BorderWidthL,
    BorderStyle,
    BorderColor,
    RingWidth,
    RingInset,
    RingColor,
    RingOffsetWidth,
    RingOffsetColor,
    Shadow,
    ShadowColor,
    Opacity,
    Cursor,
    PointerEvents,
    Select,
    Transition,
    Duration,
    Ease,
    Content,
}

impl Group {
    /// Longhand groups a shorthand overrides.
    fn covers(self) -> &'static [Group] {
        use Group::{
            Basis, Bottom, BorderWidthB, BorderWidthL, BorderWidthR, BorderWidthT, BorderWidthX,
            BorderWidthY, GapX, GapY, Grow, H, Left, LineHeight, Mb, Me, Ml, Mr, Ms, Mt, Mx,
            My, OverflowX, OverflowY, Pb, Pe, Pl, Pr, Ps, Pt, Px, Py, Right, RoundedBl, RoundedBr,
            RoundedEe, RoundedEs, RoundedSe, RoundedSs, RoundedTl, RoundedTr, Shrink, Top, W,
        };

        match self {
            Group::Overflow => &[OverflowX, OverflowY],
            Group::Inset => &[Group::InsetX, Group::InsetY, Top, Right, Bottom, Left],
            Group::InsetX => &[Right, Left],
            Group::InsetY => &[Top, Bottom],
            Group::Flex => &[Basis, Grow, Shrink],
            Group::Gap => &[GapX, GapY],
            Group::P => &[Px, Py, Pt, Pr, Pb, Pl, Ps, Pe],
            Group::Px => &[Pr, Pl],
            Group::Py => &[Pt, Pb],
            Group::M => &[Mx, My, Mt, Mr, Mb, Ml, Ms, Me],
            Group::Mx => &[Mr, Ml],
            Group::My => &[Mt, Mb],
            Group::Size => &[W, H],
            Group::FontSize => &[LineHeight],
            Group::Rounded => &[
                Group::RoundedT,
                Group::RoundedR,
                Group::RoundedB,
                Group::RoundedL,
                Group::RoundedS,
                Group::RoundedE,
                RoundedTl,
                RoundedTr,
                RoundedBr,
                RoundedBl,
                RoundedSs,
                RoundedSe,
                RoundedEe,
                RoundedEs,
            ],
            Group::RoundedT => &[RoundedTl, RoundedTr],
            Group::RoundedR => &[RoundedTr, RoundedBr],
            Group::RoundedB => &[RoundedBr, RoundedBl],
            Group::RoundedL => &[RoundedTl, RoundedBl],
            Group::RoundedS => &[RoundedSs, RoundedEs],
            Group::RoundedE => &[RoundedSe, RoundedEe],
            Group::BorderWidth => &[
                BorderWidthX,
                BorderWidthY,
                BorderWidthT,
                BorderWidthR,
                BorderWidthB,
                BorderWidthL,
            ],
            Group::BorderWidthX => &[BorderWidthR, BorderWidthL],
            Group::BorderWidthY => &[BorderWidthT, BorderWidthB],
            _ => &[],
        }
    }
}

/// What a class writes to: a known group, or an arbitrary CSS property
/// written as `[property:value]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Group(Group),
    Property(String),
}

/// Identity under which two classes override each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConflictKey {
    variant: String,
    target: Target,
}

/// A class split into its variant, important flag and base utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    /// Modifiers in canonical order, each followed by `:`.
    pub variant: String,
    pub important: bool,
    /// Utility with sign, important marker and postfix modifier removed.
    pub base: &'a str,
}

impl<'a> ParsedClass<'a> {
    /// Splits `class` into its parts. Never fails; malformed input yields a
    /// base that matches no group.
    pub fn parse(class: &'a str) -> Self {
        let mut modifiers: Vec<&'a str> = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;
        for (idx, ch) in class.char_indices() {
            match ch {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&class[start..idx]);
                    start = idx + 1;
                }
                _ => {}
            }
        }
        let mut base = &class[start..];

        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            important = true;
            base = rest;
        } else if let Some(rest) = base.strip_suffix('!') {
            important = true;
            base = rest;
        }

        if !base.starts_with('[') {
            base = strip_postfix(base);
        }
        if let Some(rest) = base.strip_prefix('-') {
            base = rest;
        }

        let mut variant = String::new();
        for modifier in sort_modifiers(modifiers) {
            variant.push_str(modifier);
            variant.push(':');
        }
        if important {
            variant.push('!');
        }

        Self {
            variant,
            important,
            base,
        }
    }

    /// What this class writes to, if recognized.
    pub fn target(&self) -> Option<Target> {
        if let Some(property) = arbitrary_property(self.base) {
            return Some(Target::Property(property.to_string()));
        }
        classify(self.base).map(Target::Group)
    }

    /// Key identifying this class for conflict detection.
    pub fn conflict_key(&self) -> Option<ConflictKey> {
        self.target().map(|target| ConflictKey {
            variant: self.variant.clone(),
            target,
        })
    }

    /// Keys that this class overrides when it appears later in a list: its
    /// own key plus any longhands it covers.
    pub fn claimed_keys(&self) -> Vec<ConflictKey> {
        let Some(target) = self.target() else {
            return Vec::new();
        };

        let mut keys = Vec::new();
        if let Target::Group(group) = &target {
            keys.extend(group.covers().iter().map(|covered| ConflictKey {
                variant: self.variant.clone(),
                target: Target::Group(*covered),
            }));
        }
        keys.push(ConflictKey {
            variant: self.variant.clone(),
            target,
        });
        keys
    }
}

/// Sorts modifiers so `hover:focus:` and `focus:hover:` compare equal.
/// Arbitrary variants keep their position; only the runs between them sort.
fn sort_modifiers(modifiers: Vec<&str>) -> Vec<&str> {
    let mut sorted = Vec::with_capacity(modifiers.len());
    let mut run: Vec<&str> = Vec::new();
    for modifier in modifiers {
        if modifier.starts_with('[') {
            run.sort_unstable();
            sorted.append(&mut run);
            sorted.push(modifier);
        } else {
            run.push(modifier);
        }
    }
    run.sort_unstable();
    sorted.append(&mut run);
    sorted
}

/// Drops a `/` postfix (`bg-red-500/50`, `text-lg/7`) outside brackets.
fn strip_postfix(base: &str) -> &str {
    let mut depth = 0usize;
    for (idx, ch) in base.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '/' if depth == 0 && idx > 0 => return &base[..idx],
            _ => {}
        }
    }
    base
}

/// `[mask-type:luminance]` → `mask-type`.
fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    let valid = !property.is_empty()
        && !value.is_empty()
        && property
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '-');
    valid.then_some(property)
}

fn is_number(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_digit() || c == '.')
        && value.chars().any(|c| c.is_ascii_digit())
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']') && value.len() > 2
}

/// Arbitrary value that reads as a length (`[3px]`, `[length:1rem]`).
fn is_arbitrary_length(value: &str) -> bool {
    if !is_arbitrary(value) {
        return false;
    }
    let inner = &value[1..value.len() - 1];
    if inner.starts_with("length:") {
        return true;
    }
    let digits_end = inner
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(inner.len());
    digits_end > 0
        && matches!(
            &inner[digits_end..],
            "" | "px" | "rem" | "em" | "%" | "vh" | "vw" | "ch" | "pt"
        )
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "inline-table",
    "table-row",
    "table-cell",
    "contents",
    "flow-root",
    "list-item",
    "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const VISIBILITY: &[&str] = &["visible", "invisible", "collapse"];

const OVERFLOW: &[&str] = &["auto", "hidden", "clip", "visible", "scroll"];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const OBJECT_FIT: &[&str] = &["contain", "cover", "fill", "none", "scale-down"];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

const ALIGN_CONTENT: &[&str] = &[
    "normal", "center", "start", "end", "between", "around", "evenly", "baseline", "stretch",
];

const TEXT_WRAP: &[&str] = &["wrap", "nowrap", "balance", "pretty"];

const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

const BG_POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];

/// Prefix families whose value never changes the group.
const PREFIXED: &[(&str, Group)] = &[
    ("overflow-x-", Group::OverflowX),
    ("overflow-y-", Group::OverflowY),
    ("inset-x-", Group::InsetX),
    ("inset-y-", Group::InsetY),
    ("inset-", Group::Inset),
    ("top-", Group::Top),
    ("right-", Group::Right),
    ("bottom-", Group::Bottom),
    ("left-", Group::Left),
    ("z-", Group::ZIndex),
    ("basis-", Group::Basis),
    ("order-", Group::Order),
    ("items-", Group::AlignItems),
    ("justify-items-", Group::JustifyItems),
    ("justify-self-", Group::JustifySelf),
    ("justify-", Group::JustifyContent),
    ("self-", Group::AlignSelf),
    ("gap-x-", Group::GapX),
    ("gap-y-", Group::GapY),
    ("gap-", Group::Gap),
    ("px-", Group::Px),
    ("py-", Group::Py),
    ("pt-", Group::Pt),
    ("pr-", Group::Pr),
    ("pb-", Group::Pb),
    ("pl-", Group::Pl),
    ("ps-", Group::Ps),
    ("pe-", Group::Pe),
    ("p-", Group::P),
    ("mx-", Group::Mx),
    ("my-", Group::My),
    ("mt-", Group::Mt),
    ("mr-", Group::Mr),
    ("mb-", Group::Mb),
    ("ml-", Group::Ml),
    ("ms-", Group::Ms),
    ("me-", Group::Me),
    ("m-", Group::M),
    ("size-", Group::Size),
    ("min-w-", Group::MinW),
    ("max-w-", Group::MaxW),
    ("w-", Group::W),
    ("min-h-", Group::MinH),
    ("max-h-", Group::MaxH),
    ("h-", Group::H),
    ("aspect-", Group::AspectRatio),
    ("leading-", Group::LineHeight),
    ("tracking-", Group::Tracking),
    ("opacity-", Group::Opacity),
    ("cursor-", Group::Cursor),
    ("pointer-events-", Group::PointerEvents),
    ("select-", Group::Select),
    ("duration-", Group::Duration),
    ("ease-", Group::Ease),
];

/// Maps a base utility (no modifiers, sign or important marker) to its group.
pub fn classify(base: &str) -> Option<Group> {
    if base.is_empty() {
        return None;
    }
    if DISPLAY.contains(&base) {
        return Some(Group::Display);
    }
    if POSITION.contains(&base) {
        return Some(Group::Position);
    }
    if VISIBILITY.contains(&base) {
        return Some(Group::Visibility);
    }

    match base {
        "grow" => return Some(Group::Grow),
        "shrink" => return Some(Group::Shrink),
        "shadow" => return Some(Group::Shadow),
        "truncate" => return Some(Group::TextOverflow),
        "transition" => return Some(Group::Transition),
        "rounded" => return Some(Group::Rounded),
        "border" => return Some(Group::BorderWidth),
        "ring" => return Some(Group::RingWidth),
        "ring-inset" => return Some(Group::RingInset),
        _ => {}
    }

    if let Some(value) = base.strip_prefix("overflow-") {
        if OVERFLOW.contains(&value) {
            return Some(Group::Overflow);
        }
    }
    if let Some(value) = base.strip_prefix("flex-") {
        return Some(match value {
            "row" | "row-reverse" | "col" | "col-reverse" => Group::FlexDirection,
            "wrap" | "wrap-reverse" | "nowrap" => Group::FlexWrap,
            _ => Group::Flex,
        });
    }
    if base.starts_with("grow-") {
        return Some(Group::Grow);
    }
    if base.starts_with("shrink-") {
        return Some(Group::Shrink);
    }
    if let Some(value) = base.strip_prefix("shadow-").filter(|v| !v.is_empty()) {
        let is_size =
            SHADOW_SIZES.contains(&value) || (is_arbitrary(value) && value.contains('_'));
        return Some(if is_size {
            Group::Shadow
        } else {
            Group::ShadowColor
        });
    }
    if let Some(value) = base.strip_prefix("content-").filter(|v| !v.is_empty()) {
        return Some(if ALIGN_CONTENT.contains(&value) {
            Group::AlignContent
        } else {
            Group::Content
        });
    }
    if base.starts_with("transition-") {
        return Some(Group::Transition);
    }

    if let Some(value) = base.strip_prefix("object-") {
        return Some(if OBJECT_FIT.contains(&value) {
            Group::ObjectFit
        } else {
            Group::ObjectPosition
        });
    }
    if let Some(value) = base.strip_prefix("text-") {
        return Some(classify_text(value));
    }
    if let Some(value) = base.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&value) || is_number(value) {
            Group::FontWeight
        } else {
            Group::FontFamily
        });
    }
    if let Some(value) = base.strip_prefix("bg-") {
        return Some(classify_bg(value));
    }
    if let Some(value) = base.strip_prefix("rounded-") {
        return Some(classify_rounded(value));
    }
    if let Some(value) = base.strip_prefix("border-") {
        return Some(classify_border(value));
    }
    if let Some(value) = base.strip_prefix("ring-offset-") {
        return Some(if is_number(value) || is_arbitrary_length(value) {
            Group::RingOffsetWidth
        } else {
            Group::RingOffsetColor
        });
    }
    if let Some(value) = base.strip_prefix("ring-") {
        return Some(if is_number(value) || is_arbitrary_length(value) {
            Group::RingWidth
        } else {
            Group::RingColor
        });
    }

    PREFIXED
        .iter()
        .find(|(prefix, _)| base.len() > prefix.len() && base.starts_with(prefix))
        .map(|(_, group)| *group)
}

fn classify_text(value: &str) -> Group {
    match value {
        v if FONT_SIZES.contains(&v) || is_arbitrary_length(v) => Group::FontSize,
        v if TEXT_ALIGN.contains(&v) => Group::TextAlign,
        v if TEXT_WRAP.contains(&v) => Group::TextWrap,
        "ellipsis" | "clip" => Group::TextOverflow,
        v if v.starts_with("opacity-") => Group::TextOpacity,
        _ => Group::TextColor,
    }
}

fn classify_bg(value: &str) -> Group {
    match value {
        "fixed" | "local" | "scroll" => Group::BgAttachment,
        "auto" | "cover" | "contain" => Group::BgSize,
        "none" => Group::BgImage,
        v if v.starts_with("gradient-") || v.starts_with("linear-") => Group::BgImage,
        v if v.starts_with("repeat") || v == "no-repeat" => Group::BgRepeat,
        v if BG_POSITIONS.contains(&v) => Group::BgPosition,
        v if v.starts_with("clip-") => Group::BgClip,
        v if v.starts_with("origin-") => Group::BgOrigin,
        v if v.starts_with("opacity-") => Group::BgOpacity,
        v if v.starts_with("blend-") => Group::BgBlend,
        _ => Group::BgColor,
    }
}

fn classify_rounded(value: &str) -> Group {
    let (side, _) = value.split_once('-').unwrap_or((value, ""));
    match side {
        "t" => Group::RoundedT,
        "r" => Group::RoundedR,
        "b" => Group::RoundedB,
        "l" => Group::RoundedL,
        "s" => Group::RoundedS,
        "e" => Group::RoundedE,
        "tl" => Group::RoundedTl,
        "tr" => Group::RoundedTr,
        "br" => Group::RoundedBr,
        "bl" => Group::RoundedBl,
        "ss" => Group::RoundedSs,
        "se" => Group::RoundedSe,
        "ee" => Group::RoundedEe,
        "es" => Group::RoundedEs,
        _ => Group::Rounded,
    }
}

fn classify_border(value: &str) -> Group {
    if is_number(value) || is_arbitrary_length(value) {
        return Group::BorderWidth;
    }
    if BORDER_STYLES.contains(&value) {
        return Group::BorderStyle;
    }

    let (side, width) = value.split_once('-').unwrap_or((value, ""));
    let side_group = match side {
        "x" => Some(Group::BorderWidthX),
        "y" => Some(Group::BorderWidthY),
        "t" => Some(Group::BorderWidthT),
        "r" => Some(Group::BorderWidthR),
        "b" => Some(Group::BorderWidthB),
        "l" => Some(Group::BorderWidthL),
        _ => None,
    };
    match side_group {
        Some(group) if width.is_empty() || is_number(width) || is_arbitrary_length(width) => group,
        _ => Group::BorderColor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_modifiers_and_flags() {
        let parsed = ParsedClass::parse("md:hover:!-mt-2");
        assert_eq!(parsed.variant, "hover:md:!");
        assert!(parsed.important);
        assert_eq!(parsed.base, "mt-2");

        let suffix = ParsedClass::parse("p-4!");
        assert!(suffix.important);
        assert_eq!(suffix.base, "p-4");
    }

    #[test]
    fn test_parse_keeps_colons_inside_brackets() {
        let parsed = ParsedClass::parse("[&>*]:p-2");
        assert_eq!(parsed.variant, "[&>*]:");
        assert_eq!(parsed.base, "p-2");

        let property = ParsedClass::parse("[mask-type:luminance]");
        assert_eq!(property.variant, "");
        assert_eq!(
            property.target(),
            Some(Target::Property("mask-type".to_string()))
        );
    }

    #[test]
    fn test_postfix_modifier_is_ignored_for_grouping() {
        assert_eq!(ParsedClass::parse("bg-red-500/50").base, "bg-red-500");
        assert_eq!(classify(ParsedClass::parse("w-1/2").base), Some(Group::W));
    }

    #[test]
    fn test_classify_avatar_base_tokens() {
        assert_eq!(classify("relative"), Some(Group::Position));
        assert_eq!(classify("flex"), Some(Group::Display));
        assert_eq!(classify("size-8"), Some(Group::Size));
        assert_eq!(classify("shrink-0"), Some(Group::Shrink));
        assert_eq!(classify("overflow-hidden"), Some(Group::Overflow));
        assert_eq!(classify("rounded-full"), Some(Group::Rounded));
        assert_eq!(classify("aspect-square"), Some(Group::AspectRatio));
        assert_eq!(classify("size-full"), Some(Group::Size));
        assert_eq!(classify("bg-muted"), Some(Group::BgColor));
        assert_eq!(classify("items-center"), Some(Group::AlignItems));
        assert_eq!(classify("justify-center"), Some(Group::JustifyContent));
    }

    #[test]
    fn test_classify_ambiguous_prefixes() {
        assert_eq!(classify("ring-2"), Some(Group::RingWidth));
        assert_eq!(classify("ring-primary"), Some(Group::RingColor));
        assert_eq!(classify("ring-offset-2"), Some(Group::RingOffsetWidth));
        assert_eq!(classify("border-2"), Some(Group::BorderWidth));
        assert_eq!(classify("border-t"), Some(Group::BorderWidthT));
        assert_eq!(classify("border-dashed"), Some(Group::BorderStyle));
        assert_eq!(classify("border-panelBorder"), Some(Group::BorderColor));
        assert_eq!(classify("text-[13px]"), Some(Group::FontSize));
        assert_eq!(classify("text-[#fff]"), Some(Group::TextColor));
        assert_eq!(classify("font-mono"), Some(Group::FontFamily));
        assert_eq!(classify("flex-col"), Some(Group::FlexDirection));
        assert_eq!(classify("flex-1"), Some(Group::Flex));
    }

    #[test]
    fn test_classify_sibling_families() {
        assert_eq!(classify("justify-items-start"), Some(Group::JustifyItems));
        assert_eq!(classify("justify-self-end"), Some(Group::JustifySelf));
        assert_eq!(classify("content-center"), Some(Group::AlignContent));
        assert_eq!(classify("content-none"), Some(Group::Content));
        assert_eq!(classify("content-['*']"), Some(Group::Content));
        assert_eq!(classify("bg-clip-padding"), Some(Group::BgClip));
        assert_eq!(classify("bg-origin-border"), Some(Group::BgOrigin));
        assert_eq!(classify("bg-opacity-50"), Some(Group::BgOpacity));
        assert_eq!(classify("bg-blend-multiply"), Some(Group::BgBlend));
        assert_eq!(classify("text-ellipsis"), Some(Group::TextOverflow));
        assert_eq!(classify("truncate"), Some(Group::TextOverflow));
        assert_eq!(classify("text-nowrap"), Some(Group::TextWrap));
        assert_eq!(classify("text-opacity-75"), Some(Group::TextOpacity));
        assert_eq!(classify("shadow"), Some(Group::Shadow));
        assert_eq!(classify("shadow-md"), Some(Group::Shadow));
        assert_eq!(classify("shadow-red-500"), Some(Group::ShadowColor));
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("avatar-ring"), None);
        assert_eq!(classify("p-"), None);
        assert_eq!(classify("overflow-wrap"), None);
    }

    #[test]
    fn test_claimed_keys_include_longhands() {
        let keys = ParsedClass::parse("size-8").claimed_keys();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&ConflictKey {
            variant: String::new(),
            target: Target::Group(Group::W),
        }));
    }
}
