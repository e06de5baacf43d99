//! Character classes used by the directive constructs.

use crate::code::Code;

/// Line ending (virtual, already normalized).
#[must_use]
pub fn is_line_ending(code: Code) -> bool {
    code == Code::LineEnding
}

/// Space, horizontal tab or virtual space.
#[must_use]
pub fn is_space(code: Code) -> bool {
    matches!(
        code,
        Code::Char(' ') | Code::HorizontalTab | Code::VirtualSpace
    )
}

/// Line ending or [space](is_space).
#[must_use]
pub fn is_line_ending_or_space(code: Code) -> bool {
    is_line_ending(code) || is_space(code)
}

#[must_use]
pub fn is_comma(code: Code) -> bool {
    code.is(',')
}

/// Code that may appear in a separator run between list entries.
///
/// Line endings only count when `allow_eol` is set.
#[must_use]
pub fn is_separator(code: Code, allow_eol: bool) -> bool {
    is_space(code) || is_comma(code) || (allow_eol && is_line_ending(code))
}

#[must_use]
pub fn is_ascii_alpha(code: Code) -> bool {
    matches!(code, Code::Char(ch) if ch.is_ascii_alphabetic())
}

#[must_use]
pub fn is_ascii_alphanumeric(code: Code) -> bool {
    matches!(code, Code::Char(ch) if ch.is_ascii_alphanumeric())
}

#[must_use]
pub fn is_ascii_punctuation(code: Code) -> bool {
    matches!(code, Code::Char(ch) if ch.is_ascii_punctuation())
}

/// `"` or `'`.
#[must_use]
pub fn is_quote(code: Code) -> bool {
    matches!(code, Code::Char('"' | '\''))
}

/// Code allowed inside an unquoted value: ASCII alphanumerics, `-`, `.`,
/// `@` and `_`.
#[must_use]
pub fn is_bareword(code: Code) -> bool {
    is_ascii_alphanumeric(code) || matches!(code, Code::Char('-' | '.' | '@' | '_'))
}

/// First code of an attribute name, arg key or label identifier.
#[must_use]
pub fn is_key_start(code: Code) -> bool {
    is_ascii_alpha(code) || matches!(code, Code::Char('@' | '_'))
}

/// Code allowed inside an `#id` or `.class` shortcut.
///
/// Same as [`is_bareword`] minus `.`, which starts the next class.
#[must_use]
pub fn is_shortcut(code: Code) -> bool {
    is_bareword(code) && !code.is('.')
}

/// Codes that can never start or continue an unquoted value.
#[must_use]
pub fn is_value_forbidden(code: Code) -> bool {
    code == Code::Eof || matches!(code, Code::Char('<' | '=' | ':' | '>' | '`'))
}

/// `:` or `=`, between a key and its value.
#[must_use]
pub fn is_initializer(code: Code) -> bool {
    matches!(code, Code::Char(':' | '='))
}

/// Code allowed after the first one in a directive name.
#[must_use]
pub fn is_name(code: Code) -> bool {
    is_ascii_alphanumeric(code) || matches!(code, Code::Char('-' | '_'))
}
