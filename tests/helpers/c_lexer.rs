//! Logos-based C lexer producing frontend tokens for test fixtures.
//!
//! Kind names follow the clang token spellings (`kw_int`, `identifier`,
//! `l_paren`, ...) so fixtures read like real frontend output.

use compy::syntax::RawToken;
use compy::TextSize;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum CToken {
    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("int")]
    KwInt,
    #[token("char")]
    KwChar,
    #[token("float")]
    KwFloat,
    #[token("void")]
    KwVoid,
    #[token("unsigned")]
    KwUnsigned,
    #[token("struct")]
    KwStruct,
    #[token("union")]
    KwUnion,
    #[token("enum")]
    KwEnum,
    #[token("typedef")]
    KwTypedef,
    #[token("return")]
    KwReturn,
    #[token("if")]
    KwIf,
    #[token("else")]
    KwElse,
    #[token("while")]
    KwWhile,
    #[token("for")]
    KwFor,

    // =========================================================================
    // LITERALS AND NAMES
    // =========================================================================
    #[regex("[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    #[regex("[0-9]+(\\.[0-9]+)?")]
    NumericConstant,
    #[regex(r"#pragma[^\n]*")]
    Pragma,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LSquare,
    #[token("]")]
    RSquare,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token(".")]
    Period,
    #[token("->")]
    Arrow,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("++")]
    PlusPlus,
    #[token("-")]
    Minus,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
}

impl CToken {
    pub fn kind_name(self) -> &'static str {
        match self {
            CToken::KwInt => "kw_int",
            CToken::KwChar => "kw_char",
            CToken::KwFloat => "kw_float",
            CToken::KwVoid => "kw_void",
            CToken::KwUnsigned => "kw_unsigned",
            CToken::KwStruct => "kw_struct",
            CToken::KwUnion => "kw_union",
            CToken::KwEnum => "kw_enum",
            CToken::KwTypedef => "kw_typedef",
            CToken::KwReturn => "kw_return",
            CToken::KwIf => "kw_if",
            CToken::KwElse => "kw_else",
            CToken::KwWhile => "kw_while",
            CToken::KwFor => "kw_for",
            CToken::Identifier => "identifier",
            CToken::NumericConstant => "numeric_constant",
            CToken::Pragma => "annot_pragma",
            CToken::LParen => "l_paren",
            CToken::RParen => "r_paren",
            CToken::LBrace => "l_brace",
            CToken::RBrace => "r_brace",
            CToken::LSquare => "l_square",
            CToken::RSquare => "r_square",
            CToken::Semi => "semi",
            CToken::Comma => "comma",
            CToken::Period => "period",
            CToken::Arrow => "arrow",
            CToken::Star => "star",
            CToken::Plus => "plus",
            CToken::PlusPlus => "plusplus",
            CToken::Minus => "minus",
            CToken::Equal => "equal",
            CToken::EqualEqual => "equalequal",
            CToken::Less => "less",
            CToken::Greater => "greater",
        }
    }
}

/// Tokenize C source into frontend tokens located at their byte offsets.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let mut lexer = CToken::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or_else(|()| panic!("unexpected input {:?}", lexer.slice()));
        tokens.push(RawToken::new(
            kind.kind_name(),
            lexer.slice(),
            TextSize::new(lexer.span().start as u32),
        ));
    }
    tokens
}

#[test]
fn test_tokenize_function() {
    let tokens = tokenize("int foo() { return 1; }");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind.as_str()).collect();
    assert_eq!(
        kinds,
        vec![
            "kw_int",
            "identifier",
            "l_paren",
            "r_paren",
            "l_brace",
            "kw_return",
            "numeric_constant",
            "semi",
            "r_brace"
        ]
    );
    assert_eq!(tokens[1].location, TextSize::new(4));
}
