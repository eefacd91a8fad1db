//! Token kinds for the Java lexical layer
//!
//! This enum defines every token kind the lexer produces. Folding never builds
//! a syntax tree, so there are no node kinds here.

/// All token kinds of Java source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - skipped by the token cursor)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,
    DOC_COMMENT,        // /** ... */

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,              // identifier
    INTEGER,            // 42, 0x2A, 42L
    FLOAT,              // 3.14, 1e3, 2f
    CHAR,               // 'c'
    STRING,             // "hello"
    TEXT_BLOCK,         // """ ... """

    // =========================================================================
    // SEPARATORS
    // =========================================================================
    L_PAREN,            // (
    R_PAREN,            // )
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    SEMICOLON,          // ;
    COMMA,              // ,
    DOT,                // .
    ELLIPSIS,           // ...
    AT,                 // @
    COLON_COLON,        // ::

    // =========================================================================
    // OPERATORS
    // =========================================================================
    EQ,                 // =
    GT,                 // >
    LT,                 // <
    BANG,               // !
    TILDE,              // ~
    QUESTION,           // ?
    COLON,              // :
    ARROW,              // ->
    EQ_EQ,              // ==
    GT_EQ,              // >=
    LT_EQ,              // <=
    BANG_EQ,            // !=
    AMP_AMP,            // &&
    PIPE_PIPE,          // ||
    PLUS_PLUS,          // ++
    MINUS_MINUS,        // --
    PLUS,               // +
    MINUS,              // -
    STAR,               // *
    SLASH,              // /
    AMP,                // &
    PIPE,               // |
    CARET,              // ^
    PERCENT,            // %
    SHL,                // <<
    SHR,                // >>  (closes two type argument lists)
    USHR,               // >>> (closes three type argument lists)
    PLUS_EQ,            // +=
    MINUS_EQ,           // -=
    STAR_EQ,            // *=
    SLASH_EQ,           // /=
    AMP_EQ,             // &=
    PIPE_EQ,            // |=
    CARET_EQ,           // ^=
    PERCENT_EQ,         // %=
    SHL_EQ,             // <<=
    SHR_EQ,             // >>=
    USHR_EQ,            // >>>=

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ABSTRACT_KW,
    ASSERT_KW,
    BOOLEAN_KW,
    BREAK_KW,
    BYTE_KW,
    CASE_KW,
    CATCH_KW,
    CHAR_KW,
    CLASS_KW,
    CONST_KW,
    CONTINUE_KW,
    DEFAULT_KW,
    DO_KW,
    DOUBLE_KW,
    ELSE_KW,
    ENUM_KW,
    EXTENDS_KW,
    FALSE_KW,
    FINAL_KW,
    FINALLY_KW,
    FLOAT_KW,
    FOR_KW,
    GOTO_KW,
    IF_KW,
    IMPLEMENTS_KW,
    IMPORT_KW,
    INSTANCEOF_KW,
    INT_KW,
    INTERFACE_KW,
    LONG_KW,
    NATIVE_KW,
    NEW_KW,
    NULL_KW,
    PACKAGE_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    PUBLIC_KW,
    RETURN_KW,
    SHORT_KW,
    STATIC_KW,
    STRICTFP_KW,
    SUPER_KW,
    SWITCH_KW,
    SYNCHRONIZED_KW,
    THIS_KW,
    THROW_KW,
    THROWS_KW,
    TRANSIENT_KW,
    TRUE_KW,
    TRY_KW,
    VOID_KW,
    VOLATILE_KW,
    WHILE_KW,

    // Special
    ERROR,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT | Self::DOC_COMMENT
        )
    }

    /// Check if this is a comment
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Self::LINE_COMMENT | Self::BLOCK_COMMENT | Self::DOC_COMMENT
        )
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_KW as u16) && (self as u16) <= (Self::WHILE_KW as u16)
    }

    /// Check if this is a separator or operator token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_PAREN as u16) && (self as u16) <= (Self::USHR_EQ as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INTEGER | Self::FLOAT | Self::CHAR | Self::STRING | Self::TEXT_BLOCK
        )
    }

    /// Keywords that open a statement with its own nested control flow.
    ///
    /// A body crossing one of these is never folded as a single statement.
    pub fn is_control_flow(self) -> bool {
        matches!(
            self,
            Self::IF_KW | Self::FOR_KW | Self::WHILE_KW | Self::DO_KW | Self::TRY_KW
        )
    }
}
