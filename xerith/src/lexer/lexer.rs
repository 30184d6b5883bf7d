// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display, str::CharIndices};

use log::debug;
use thiserror::Error;

use crate::{Diagnostic, DiagnosticKind, Keyword, Punctuator, Reporter, Severity, SourceCode, Span, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    offset: usize,
    line: usize,
    column: usize,
}

pub struct Lexer<'source_code> {
    input: &'source_code SourceCode,
    chars: CharIndices<'source_code>,

    current: Option<(Position, char)>,
    line: usize,
    column: usize,
    errors: Vec<LexerError>,
    emitted_end_of_file: bool,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code SourceCode) -> Self {
        Self {
            input,
            chars: input.contents().char_indices(),
            current: None,
            line: 1,
            column: 1,
            errors: Vec::new(),
            emitted_end_of_file: false,
        }
    }

    pub fn next(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace();

            let Some(ch) = self.peek_char() else {
                return self.end_of_file();
            };

            let token = match ch {
                '"' => self.consume_string(),

                'a'..='z' | 'A'..='Z' | '_' => Some(self.consume_identifier_or_keyword()),
                '0'..='9' => Some(self.consume_number()),

                '(' => Some(self.consume_single_char_token(Punctuator::LeftParenthesis)),
                ')' => Some(self.consume_single_char_token(Punctuator::RightParenthesis)),
                '{' => Some(self.consume_single_char_token(Punctuator::LeftCurlyBracket)),
                '}' => Some(self.consume_single_char_token(Punctuator::RightCurlyBracket)),
                ',' => Some(self.consume_single_char_token(Punctuator::Comma)),
                '.' => Some(self.consume_single_char_token(Punctuator::Period)),
                '-' => Some(self.consume_single_char_token(Punctuator::HyphenMinus)),
                '+' => Some(self.consume_single_char_token(Punctuator::PlusSign)),
                ';' => Some(self.consume_single_char_token(Punctuator::Semicolon)),
                '*' => Some(self.consume_single_char_token(Punctuator::Asterisk)),
                '!' => Some(self.consume_single_or_assign_token(Punctuator::Not, Punctuator::NotEquals)),
                '=' => Some(self.consume_single_or_assign_token(Punctuator::Assignment, Punctuator::Equals)),
                '<' => Some(self.consume_single_or_assign_token(Punctuator::LessThan, Punctuator::LessThanOrEqual)),
                '>' => Some(self.consume_single_or_assign_token(Punctuator::GreaterThan, Punctuator::GreaterThanOrEqual)),
                '/' => self.handle_solidus(),

                _ => {
                    let begin = self.current_position();
                    self.consume_char();
                    self.errors.push(LexerError {
                        span: self.span_at(begin),
                        kind: LexerErrorKind::UnexpectedCharacter(ch),
                    });
                    None
                }
            };

            if token.is_some() {
                return token;
            }
        }
    }

    fn end_of_file(&mut self) -> Option<Token> {
        if self.emitted_end_of_file {
            return None;
        }

        self.emitted_end_of_file = true;
        let position = self.current_position();
        Some(Token::new(TokenKind::EndOfFile, "", self.span_at(position)))
    }

    fn consume_single_char_token(&mut self, punctuator: Punctuator) -> Token {
        let begin = self.current_position();
        self.consume_char();
        self.token_from(begin, TokenKind::Punctuator(punctuator))
    }

    fn consume_single_or_assign_token(&mut self, single: Punctuator, with_assign: Punctuator) -> Token {
        let begin = self.current_position();
        self.consume_char();

        let punctuator = if self.peek_char() == Some('=') {
            self.consume_char();
            with_assign
        } else {
            single
        };

        self.token_from(begin, TokenKind::Punctuator(punctuator))
    }

    fn handle_solidus(&mut self) -> Option<Token> {
        let token = self.consume_single_char_token(Punctuator::Solidus);

        if self.peek_char() == Some('/') {
            self.consume_until_end_of_line();
            return None;
        }

        Some(token)
    }

    fn consume_until_end_of_line(&mut self) {
        while let Some(c) = self.next_char() {
            if c == '\n' {
                break;
            }
        }
    }

    fn consume_string(&mut self) -> Option<Token> {
        let begin = self.current_position();
        self.consume_char();

        let mut value = String::new();

        loop {
            let Some(c) = self.next_char() else {
                self.errors.push(LexerError {
                    span: self.span_at(begin),
                    kind: LexerErrorKind::UnterminatedString,
                });
                return None;
            };

            match c {
                '"' => break,

                '\\' => {
                    let escape_position = self.current_position();
                    match self.next_char() {
                        Some('"') => value.push('"'),
                        Some('\\') => value.push('\\'),
                        Some('n') => value.push('\n'),
                        Some('r') => value.push('\r'),
                        Some('t') => value.push('\t'),

                        Some(invalid) => {
                            value.push('\\');
                            value.push(invalid);

                            self.errors.push(LexerError {
                                span: self.span_at(escape_position),
                                kind: LexerErrorKind::InvalidEscape { invalid },
                            });
                        }

                        None => {
                            self.errors.push(LexerError {
                                span: self.span_at(begin),
                                kind: LexerErrorKind::UnterminatedString,
                            });
                            return None;
                        }
                    }
                }

                _ => value.push(c),
            }
        }

        Some(Token::new(TokenKind::StringLiteral, value, self.span_at(begin)))
    }

    fn consume_identifier_or_keyword(&mut self) -> Token {
        let begin = self.current_position();

        while self.peek_char().is_some_and(is_identifier_char) {
            self.consume_char();
        }

        let end = self.current_position();
        let text = &self.input.contents()[begin.offset..end.offset];

        let kind = match Keyword::parse(text) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };

        self.token_from(begin, kind)
    }

    fn consume_number(&mut self) -> Token {
        let begin = self.current_position();
        self.consume_digits();

        if self.peek_char() == Some('.') && self.peek_second_char().is_some_and(|c| c.is_ascii_digit()) {
            self.consume_char();
            self.consume_digits();
        }

        self.token_from(begin, TokenKind::Number)
    }

    fn consume_digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.consume_char();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !matches!(c, ' ' | '\t' | '\r' | '\n') {
                break;
            }

            self.consume_char();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next()
            .map(|(offset, char)| {
                let position = Position { offset, line: self.line, column: self.column };

                if char == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }

                (position, char)
            });
        Some(self.current?.1)
    }

    /// Looks one character past [`Self::peek_char`] without consuming it.
    fn peek_second_char(&mut self) -> Option<char> {
        _ = self.peek_char()?;
        self.chars.clone().next().map(|(_, c)| c)
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.consume_char();
        Some(c)
    }

    fn consume_char(&mut self) {
        self.current = None;
        _ = self.peek_char();
    }

    fn current_position(&mut self) -> Position {
        _ = self.peek_char();
        match self.current {
            Some((position, _)) => position,
            None => Position {
                offset: self.input.contents().len(),
                line: self.line,
                column: self.column,
            },
        }
    }

    fn span_at(&self, position: Position) -> Span {
        self.input.span(position.line, position.column)
    }

    fn token_from(&mut self, begin: Position, kind: TokenKind) -> Token {
        let end = self.current_position();
        let lexeme = &self.input.contents()[begin.offset..end.offset];
        Token::new(kind, lexeme, self.span_at(begin))
    }

    #[must_use]
    pub fn errors(&self) -> &[LexerError] {
        &self.errors
    }

    pub fn collect_all(mut self) -> (Vec<Token>, Vec<LexerError>) {
        let mut tokens = Vec::new();

        while let Some(token) = self.next() {
            tokens.push(token);
        }

        (tokens, self.errors)
    }
}

impl<'source_code> Iterator for Lexer<'source_code> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scans the whole input. The returned tokens always end with exactly one
/// end-of-file token; lexical errors go to the `reporter`.
pub fn scan(source: &str, filename: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    let source_code = SourceCode::new(filename, source);
    let (tokens, errors) = Lexer::new(&source_code).collect_all();

    debug!("Scanned {} tokens with {} lexical errors from {filename}", tokens.len(), errors.len());

    for error in errors {
        reporter.report(error.to_diagnostic());
    }

    tokens
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerError {
    pub span: Span,
    pub kind: LexerErrorKind,
}

impl LexerError {
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::Lexical, self.span.clone(), &self.kind)
            .with_severity(self.kind.severity())
            .with_code(self.kind.code())
    }
}

impl Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for LexerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexerErrorKind {
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),

    #[error("unterminated string")]
    UnterminatedString,

    #[error("invalid escape sequence `\\{invalid}`, only `\\\"`, `\\\\`, `\\n`, `\\r` and `\\t` are allowed")]
    InvalidEscape { invalid: char },
}

impl LexerErrorKind {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnexpectedCharacter(..) => "E001",
            Self::UnterminatedString => "E002",
            Self::InvalidEscape { .. } => "E003",
        }
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::InvalidEscape { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kinds_and_lexemes(input: &str) -> (Vec<(TokenKind, String)>, Vec<LexerError>) {
        let source_code = SourceCode::new_test(input);
        let (tokens, errors) = Lexer::new(&source_code).collect_all();
        let tokens = tokens.into_iter()
            .map(|token| (token.kind, token.lexeme))
            .collect();
        (tokens, errors)
    }

    #[rstest]
    #[case("h", TokenKind::Identifier, "h")]
    #[case("s ", TokenKind::Identifier, "s")]
    #[case("_snake_case1 ", TokenKind::Identifier, "_snake_case1")]
    #[case("let", TokenKind::Keyword(Keyword::Let), "let")]
    #[case("fun", TokenKind::Keyword(Keyword::Fun), "fun")]
    #[case("\"Hal\\nlo\" ", TokenKind::StringLiteral, "Hal\nlo")]
    #[case("\"Hal\\tlo\" ", TokenKind::StringLiteral, "Hal\tlo")]
    #[case("\"Hal\\rlo\" ", TokenKind::StringLiteral, "Hal\rlo")]
    #[case("\"a \\\"b\\\" c\"", TokenKind::StringLiteral, "a \"b\" c")]
    #[case("\"\"", TokenKind::StringLiteral, "")]
    #[case("< 1", TokenKind::Punctuator(Punctuator::LessThan), "<")]
    #[case("> 1", TokenKind::Punctuator(Punctuator::GreaterThan), ">")]
    #[case("<= 1", TokenKind::Punctuator(Punctuator::LessThanOrEqual), "<=")]
    #[case(">= 1", TokenKind::Punctuator(Punctuator::GreaterThanOrEqual), ">=")]
    #[case("! 1", TokenKind::Punctuator(Punctuator::Not), "!")]
    #[case("!= 1", TokenKind::Punctuator(Punctuator::NotEquals), "!=")]
    #[case("= 1", TokenKind::Punctuator(Punctuator::Assignment), "=")]
    #[case("== 1", TokenKind::Punctuator(Punctuator::Equals), "==")]
    #[case("* 1", TokenKind::Punctuator(Punctuator::Asterisk), "*")]
    #[case("/ 1", TokenKind::Punctuator(Punctuator::Solidus), "/")]
    #[case("123", TokenKind::Number, "123")]
    #[case("3.25;", TokenKind::Number, "3.25")]
    #[case("// comment\nx", TokenKind::Identifier, "x")]
    #[case("", TokenKind::EndOfFile, "")]
    fn next_token(#[case] input: &'static str, #[case] kind: TokenKind, #[case] lexeme: &str) {
        let source_code = SourceCode::new_test(input);
        let mut lexer = Lexer::new(&source_code);
        let actual = lexer.next();

        assert!(lexer.errors().is_empty());
        assert_eq!(actual.map(|token| (token.kind, token.lexeme)), Some((kind, lexeme.to_string())));
    }

    #[test]
    fn number_followed_by_period_without_digit() {
        let (tokens, errors) = kinds_and_lexemes("12.");
        assert_eq!(errors, Vec::new());
        assert_eq!(tokens, vec![
            (TokenKind::Number, "12".to_string()),
            (TokenKind::Punctuator(Punctuator::Period), ".".to_string()),
            (TokenKind::EndOfFile, String::new()),
        ]);
    }

    #[test]
    fn unterminated_string_emits_no_string_token() {
        let (tokens, errors) = kinds_and_lexemes("\"abc");
        assert_eq!(tokens, vec![(TokenKind::EndOfFile, String::new())]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, LexerErrorKind::UnterminatedString);
        assert_eq!((errors[0].span.line(), errors[0].span.column()), (1, 1));
    }

    #[test]
    fn invalid_escape_is_kept_verbatim() {
        let (tokens, errors) = kinds_and_lexemes("\"a\\qb\"");
        assert_eq!(tokens[0], (TokenKind::StringLiteral, "a\\qb".to_string()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, LexerErrorKind::InvalidEscape { invalid: 'q' });
        assert_eq!(errors[0].to_diagnostic().severity(), Severity::Warning);
    }

    #[test]
    fn unexpected_characters_are_skipped() {
        let (tokens, errors) = kinds_and_lexemes("a @ # b");
        let kinds: Vec<_> = tokens.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EndOfFile]);

        let kinds: Vec<_> = errors.iter().map(|error| error.kind).collect();
        assert_eq!(kinds, vec![
            LexerErrorKind::UnexpectedCharacter('@'),
            LexerErrorKind::UnexpectedCharacter('#'),
        ]);
        assert_eq!(errors[0].to_diagnostic().code(), Some("E001"));
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t ")]
    #[case("print 1;")]
    #[case("\"never closed")]
    #[case("// only a comment")]
    #[case("~~~")]
    fn exactly_one_end_of_file_token(#[case] input: &str) {
        let (tokens, _) = kinds_and_lexemes(input);
        let count = tokens.iter().filter(|(kind, _)| *kind == TokenKind::EndOfFile).count();
        assert_eq!(count, 1);
        assert_eq!(tokens.last().map(|(kind, _)| *kind), Some(TokenKind::EndOfFile));
    }

    #[test]
    fn iterator_stops_after_end_of_file() {
        let source_code = SourceCode::new_test("x");
        let mut lexer = Lexer::new(&source_code);
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_some_and(|token| token.is_end_of_file()));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let source_code = SourceCode::new_test("let a = 1;\n  print \"x\ny\" a;");
        let (tokens, _) = Lexer::new(&source_code).collect_all();
        let positions: Vec<_> = tokens.iter()
            .map(|token| (token.span.line(), token.span.column()))
            .collect();

        assert_eq!(positions, vec![
            (1, 1), (1, 5), (1, 7), (1, 9), (1, 10),
            (2, 3), (2, 9), (3, 4), (3, 5),
            (3, 6),
        ]);
        assert_eq!(tokens[0].span.filename(), "test.xrth");
    }

    #[test]
    fn scan_reports_to_the_reporter() {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let tokens = scan("let $ = 1;", "main.xrth", &mut diagnostics);

        assert_eq!(tokens.len(), 5);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind(), DiagnosticKind::Lexical);
        assert_eq!(diagnostics[0].to_string(), "[E001] lexical error at main.xrth:1:5: unexpected character `$`");
    }
}
