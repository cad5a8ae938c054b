//! The Soluna parser.

use soluna_common::{Position, Span};
use soluna_diagnostic::{Diagnostic, ErrorCode, Label, Phase};
use soluna_lexer::{Token, TokenKind};
use soluna_syntax::*;

use crate::recovery::{is_stmt_end, is_stmt_start};

/// Marker for a production that failed and already reported itself.
///
/// Every failing production records exactly one diagnostic before
/// returning this; the enclosing loop synchronizes and keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recovered;

pub type ParseResult<T> = Result<T, Recovered>;

/// The Soluna parser.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Build a parser over a lexed token stream. Trivia (whitespace and
    /// comments) is filtered out here; `Unknown` tokens stay in so they
    /// surface as parse errors at the right position.
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens
            .last()
            .map(|t| t.span.end)
            .unwrap_or(Position::START);
        let mut tokens: Vec<Token> = tokens.into_iter().filter(|t| !t.is_trivia()).collect();
        tokens.push(Token::new(TokenKind::Eof, "", Span::new(end, end)));

        Self {
            tokens,
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Parse a complete program. Returns `None` only when no item could
    /// be built at all (empty or fully malformed input).
    pub fn parse_program(&mut self) -> Option<ParseNode> {
        let mut items = Vec::new();

        while !self.at_end() {
            match self.parse_item() {
                Ok(item) => items.push(item),
                Err(Recovered) => self.synchronize(),
            }
        }

        if items.is_empty() {
            return None;
        }

        let span = items[0].span.merge(items[items.len() - 1].span);
        Some(ParseNode::new(NodeKind::Program { items }, span))
    }

    // ========== Items ==========

    fn parse_item(&mut self) -> ParseResult<ParseNode> {
        let kind = *self.current_kind();

        // `type name (` opens a function definition; a lone type keyword
        // opens a variable declaration.
        if (kind.is_type_keyword() || kind == TokenKind::Void)
            && self.peek_kind(1) == TokenKind::Ident
            && self.peek_kind(2) == TokenKind::LParen
        {
            return self.parse_func_decl();
        }

        self.parse_statement()
    }

    fn parse_func_decl(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        let return_type = self.parse_return_type()?;
        let name = self.parse_ident()?;

        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        while !self.check(TokenKind::RParen) && !self.at_end() {
            let param_start = self.current_span();
            let data_type = self.parse_data_type()?;
            let param_name = self.parse_ident()?;
            let span = param_start.merge(self.previous_span());
            params.push(ParseNode::new(
                NodeKind::Param {
                    data_type: Box::new(data_type),
                    name: Box::new(param_name),
                },
                span,
            ));
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;

        let body = self.parse_block(&[TokenKind::Mos]);
        self.expect_or_note(TokenKind::Mos);

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(
            NodeKind::FuncDecl {
                return_type: Box::new(return_type),
                name: Box::new(name),
                params,
                body: Box::new(body),
            },
            span,
        ))
    }

    fn parse_var_decl(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        let constant = self.eat(TokenKind::Zeta);
        let data_type = self.parse_data_type()?;

        let mut names = vec![self.parse_ident()?];
        while self.eat(TokenKind::Comma) {
            names.push(self.parse_ident()?);
        }

        let mut values = Vec::new();
        if self.eat(TokenKind::Eq) {
            values.push(self.parse_expr()?);
            while self.eat(TokenKind::Comma) {
                values.push(self.parse_expr()?);
            }
        }
        self.expect_or_note(TokenKind::Semicolon);

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(
            NodeKind::VarDecl {
                constant,
                data_type: Box::new(data_type),
                names,
                values,
            },
            span,
        ))
    }

    fn parse_table_decl(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        self.advance(); // hubble

        let data_type = self.parse_data_type()?;
        let name = self.parse_ident()?;
        self.expect(TokenKind::Eq)?;
        self.expect(TokenKind::LBrace)?;

        let mut elements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.at_end() {
            elements.push(self.parse_expr()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect_or_note(TokenKind::RBrace);
        self.expect_or_note(TokenKind::Semicolon);

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(
            NodeKind::TableDecl {
                data_type: Box::new(data_type),
                name: Box::new(name),
                elements,
            },
            span,
        ))
    }

    fn parse_local_decl(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        self.advance(); // local

        let decl = match self.current_kind() {
            TokenKind::Hubble => self.parse_table_decl()?,
            TokenKind::Zeta => self.parse_var_decl()?,
            k if k.is_type_keyword() => self.parse_var_decl()?,
            _ => {
                self.error("expected a declaration after `local`");
                return Err(Recovered);
            }
        };

        let span = start.merge(decl.span);
        Ok(ParseNode::new(
            NodeKind::LocalDecl {
                decl: Box::new(decl),
            },
            span,
        ))
    }

    // ========== Statements ==========

    /// Declarations are statements too: a block body may open a
    /// variable, table, or `local` declaration anywhere a statement is
    /// legal.
    fn parse_statement(&mut self) -> ParseResult<ParseNode> {
        match self.current_kind() {
            TokenKind::Zeta => self.parse_var_decl(),
            k if k.is_type_keyword() => self.parse_var_decl(),
            TokenKind::Hubble => self.parse_table_decl(),
            TokenKind::Local => self.parse_local_decl(),
            TokenKind::Sol => self.parse_if_statement(),
            TokenKind::Orbit => self.parse_while_loop(),
            TokenKind::Phase => self.parse_for_loop(),
            TokenKind::Wax => self.parse_repeat_until(),
            TokenKind::Zara => self.parse_return_statement(),
            TokenKind::Nova => self.parse_output(OutputKind::Nova),
            TokenKind::Lumen => self.parse_output(OutputKind::Lumen),
            TokenKind::Leo => self.parse_goto(),
            TokenKind::Warp => self.parse_break(),
            TokenKind::LabelLit => self.parse_label_statement(),
            TokenKind::Semicolon => {
                let span = self.current_span();
                self.advance();
                Ok(ParseNode::new(NodeKind::EmptyStatement, span))
            }
            _ => self.parse_expr_or_assignment(),
        }
    }

    fn parse_if_statement(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        self.advance(); // sol

        let cond = self.parse_expr()?;
        // Stopping at `soluna`/`luna` too lets a missing `mos` recover
        // with the arm structure intact.
        let then_block = self.parse_block(&[TokenKind::Mos, TokenKind::Soluna, TokenKind::Luna]);
        self.expect_or_note(TokenKind::Mos);

        let mut elifs = Vec::new();
        while self.check(TokenKind::Soluna) {
            let arm_start = self.current_span();
            self.advance(); // soluna
            let arm_cond = self.parse_expr()?;
            let arm_block =
                self.parse_block(&[TokenKind::Mos, TokenKind::Soluna, TokenKind::Luna]);
            self.expect_or_note(TokenKind::Mos);
            let span = arm_start.merge(self.previous_span());
            elifs.push(ParseNode::new(
                NodeKind::ElseIf {
                    cond: Box::new(arm_cond),
                    block: Box::new(arm_block),
                },
                span,
            ));
        }

        let else_block = if self.eat(TokenKind::Luna) {
            let block = self.parse_block(&[TokenKind::Mos]);
            self.expect_or_note(TokenKind::Mos);
            Some(Box::new(block))
        } else {
            None
        };

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(
            NodeKind::IfStatement {
                cond: Box::new(cond),
                then_block: Box::new(then_block),
                elifs,
                else_block,
            },
            span,
        ))
    }

    fn parse_while_loop(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        self.advance(); // orbit

        let cond = self.parse_expr()?;
        self.expect_or_note(TokenKind::Cos);
        let body = self.parse_block(&[TokenKind::Mos]);
        self.expect_or_note(TokenKind::Mos);

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(
            NodeKind::WhileLoop {
                cond: Box::new(cond),
                body: Box::new(body),
            },
            span,
        ))
    }

    fn parse_for_loop(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        self.advance(); // phase

        // The loop counter is always a kai.
        self.expect(TokenKind::Kai)?;
        let var = self.parse_ident()?;
        self.expect(TokenKind::Eq)?;
        let init = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let limit = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let step = self.parse_expr()?;
        self.expect_or_note(TokenKind::Cos);

        let body = self.parse_block(&[TokenKind::Mos]);
        self.expect_or_note(TokenKind::Mos);

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(
            NodeKind::ForLoop {
                var: Box::new(var),
                init: Box::new(init),
                limit: Box::new(limit),
                step: Box::new(step),
                body: Box::new(body),
            },
            span,
        ))
    }

    fn parse_repeat_until(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        self.advance(); // wax

        let body = self.parse_block(&[TokenKind::Wane]);
        self.expect_or_note(TokenKind::Wane);
        let cond = self.parse_expr()?;

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(
            NodeKind::RepeatUntil {
                body: Box::new(body),
                cond: Box::new(cond),
            },
            span,
        ))
    }

    fn parse_return_statement(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        self.advance(); // zara

        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        self.expect_or_note(TokenKind::Semicolon);

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(NodeKind::ReturnStatement { value }, span))
    }

    fn parse_output(&mut self, kind: OutputKind) -> ParseResult<ParseNode> {
        let start = self.current_span();
        self.advance(); // nova / lumen

        self.expect(TokenKind::LParen)?;
        let arg = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        self.expect_or_note(TokenKind::Semicolon);

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(
            NodeKind::Output {
                kind,
                arg: Box::new(arg),
            },
            span,
        ))
    }

    fn parse_goto(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        self.advance(); // leo

        let label = if self.check(TokenKind::Ident) {
            let name = self.current().lexeme.clone();
            self.advance();
            name
        } else {
            self.error("expected a label name after `leo`");
            return Err(Recovered);
        };
        self.expect_or_note(TokenKind::Semicolon);

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(NodeKind::Goto { label }, span))
    }

    fn parse_break(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        self.advance(); // warp
        self.expect_or_note(TokenKind::Semicolon);

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(NodeKind::Break, span))
    }

    fn parse_label_statement(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        let name = self.current().lexeme.trim_matches(':').to_string();
        self.advance(); // ::name::
        self.expect_or_note(TokenKind::Semicolon);

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(NodeKind::LabelStatement { name }, span))
    }

    /// A statement that begins with an expression: either an assignment
    /// (`a, b = e1, e2;` with `=` or a compound operator) or a bare
    /// expression statement (calls, `x++;`).
    fn parse_expr_or_assignment(&mut self) -> ParseResult<ParseNode> {
        let start = self.current_span();
        let first = self.parse_expr()?;

        if !self.check(TokenKind::Comma) && self.current_assign_op().is_none() {
            self.expect_or_note(TokenKind::Semicolon);
            let span = start.merge(self.previous_span());
            return Ok(ParseNode::new(
                NodeKind::ExpressionStatement {
                    expr: Box::new(first),
                },
                span,
            ));
        }

        let mut targets = vec![first];
        while self.eat(TokenKind::Comma) {
            targets.push(self.parse_expr()?);
        }

        let Some(op) = self.current_assign_op() else {
            self.error("expected an assignment operator");
            return Err(Recovered);
        };
        self.advance();

        if targets.iter().any(|t| !is_lvalue(t)) {
            self.error("assignment target must be a name or a table element");
            return Err(Recovered);
        }

        let mut values = vec![self.parse_expr()?];
        while self.eat(TokenKind::Comma) {
            values.push(self.parse_expr()?);
        }
        self.expect_or_note(TokenKind::Semicolon);

        let span = start.merge(self.previous_span());
        Ok(ParseNode::new(
            NodeKind::Assignment {
                op,
                targets,
                values,
            },
            span,
        ))
    }

    /// Parse statements until one of `enders` (or the end of input) and
    /// wrap them in a block. The ender itself is not consumed.
    fn parse_block(&mut self, enders: &[TokenKind]) -> ParseNode {
        let start = self.current_span();
        let mut stmts = Vec::new();

        while !self.at_end() && !enders.contains(self.current_kind()) {
            match self.parse_statement() {
                Ok(stmt) => stmts.push(stmt),
                Err(Recovered) => self.synchronize(),
            }
        }

        let span = if stmts.is_empty() {
            Span::new(start.start, start.start)
        } else {
            stmts[0].span.merge(stmts[stmts.len() - 1].span)
        };
        ParseNode::new(NodeKind::Block { stmts }, span)
    }

    // ========== Expression Parsing ==========

    fn parse_expr(&mut self) -> ParseResult<ParseNode> {
        self.parse_binary(0)
    }

    /// Precedence climbing over the fixed binding-power table.
    fn parse_binary(&mut self, min_bp: u8) -> ParseResult<ParseNode> {
        let mut lhs = self.parse_unary()?;

        loop {
            let Some((op, bp, right_assoc)) = binding_power(*self.current_kind()) else {
                break;
            };
            if bp < min_bp {
                break;
            }
            self.advance();

            let next_min = if right_assoc { bp } else { bp + 1 };
            let rhs = self.parse_binary(next_min)?;

            let span = lhs.span.merge(rhs.span);
            lhs = ParseNode::new(
                NodeKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> ParseResult<ParseNode> {
        let op = match self.current_kind() {
            TokenKind::Bang | TokenKind::Not => Some(UnaryOp::Not),
            TokenKind::PlusPlus => Some(UnaryOp::Inc),
            TokenKind::MinusMinus => Some(UnaryOp::Dec),
            TokenKind::Hash => Some(UnaryOp::Len),
            _ => None,
        };

        let Some(op) = op else {
            return self.parse_postfix();
        };

        let start = self.current_span();
        self.advance();
        let operand = self.parse_unary()?;
        let span = start.merge(operand.span);
        Ok(ParseNode::new(
            NodeKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    fn parse_postfix(&mut self) -> ParseResult<ParseNode> {
        let mut expr = self.parse_primary()?;

        loop {
            match self.current_kind() {
                TokenKind::LParen => {
                    self.advance();
                    let mut args = Vec::new();
                    while !self.check(TokenKind::RParen) && !self.at_end() {
                        args.push(self.parse_expr()?);
                        if !self.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                    self.expect(TokenKind::RParen)?;
                    let span = expr.span.merge(self.previous_span());
                    expr = ParseNode::new(
                        NodeKind::FunctionCall {
                            callee: Box::new(expr),
                            args,
                        },
                        span,
                    );
                }
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.parse_expr()?;
                    self.expect(TokenKind::RBracket)?;
                    let span = expr.span.merge(self.previous_span());
                    expr = ParseNode::new(
                        NodeKind::TableAccess {
                            base: Box::new(expr),
                            index: Box::new(index),
                        },
                        span,
                    );
                }
                TokenKind::PlusPlus => {
                    self.advance();
                    let span = expr.span.merge(self.previous_span());
                    expr = ParseNode::new(
                        NodeKind::Postfix {
                            op: PostfixOp::Inc,
                            operand: Box::new(expr),
                        },
                        span,
                    );
                }
                TokenKind::MinusMinus => {
                    self.advance();
                    let span = expr.span.merge(self.previous_span());
                    expr = ParseNode::new(
                        NodeKind::Postfix {
                            op: PostfixOp::Dec,
                            operand: Box::new(expr),
                        },
                        span,
                    );
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> ParseResult<ParseNode> {
        let span = self.current_span();
        let lexeme = self.current().lexeme.clone();

        let kind = match self.current_kind() {
            TokenKind::IntLit => NodeKind::Literal {
                kind: LitKind::Int,
                text: lexeme,
            },
            TokenKind::FloatLit => NodeKind::Literal {
                kind: LitKind::Float,
                text: lexeme,
            },
            TokenKind::StrLit => NodeKind::Literal {
                kind: LitKind::Str,
                text: lexeme,
            },
            TokenKind::CharLit => NodeKind::Literal {
                kind: LitKind::Char,
                text: lexeme,
            },
            TokenKind::Iris | TokenKind::Sage => NodeKind::Literal {
                kind: LitKind::Bool,
                text: lexeme,
            },
            TokenKind::Ident => NodeKind::Ident { name: lexeme },
            TokenKind::Lumina => {
                self.advance();
                self.expect(TokenKind::LParen)?;
                self.expect(TokenKind::RParen)?;
                let span = span.merge(self.previous_span());
                return Ok(ParseNode::new(NodeKind::InputExpr, span));
            }
            TokenKind::LParen => {
                self.advance();
                let mut inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                inner.span = span.merge(self.previous_span());
                return Ok(inner);
            }
            _ => {
                self.error("expected an expression");
                return Err(Recovered);
            }
        };

        self.advance();
        Ok(ParseNode::new(kind, span))
    }

    // ========== Token Helpers ==========

    fn current(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .unwrap_or(&self.tokens[self.tokens.len() - 1])
    }

    fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    fn check(&self, kind: TokenKind) -> bool {
        *self.current_kind() == kind
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect a token; a mismatch reports and fails the production.
    fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            self.error(&format!(
                "expected `{}`, found `{}`",
                kind.type_str(),
                self.current_kind().type_str()
            ));
            Err(Recovered)
        }
    }

    /// Expect a closer; a mismatch reports but keeps the production, so
    /// a missing `mos` or `;` still yields the partial node.
    fn expect_or_note(&mut self, kind: TokenKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(&format!(
                "expected `{}`, found `{}`",
                kind.type_str(),
                self.current_kind().type_str()
            ));
            false
        }
    }

    fn error(&mut self, message: &str) {
        let span = self.current_span();
        self.diagnostics.push(
            Diagnostic::error(Phase::Syntactic, ErrorCode::ParserError, span, message)
                .with_label(Label::new(span, "here")),
        );
    }

    fn current_assign_op(&self) -> Option<AssignOp> {
        match self.current_kind() {
            TokenKind::Eq => Some(AssignOp::Assign),
            TokenKind::PlusEq => Some(AssignOp::AddAssign),
            TokenKind::MinusEq => Some(AssignOp::SubAssign),
            TokenKind::StarEq => Some(AssignOp::MulAssign),
            TokenKind::SlashEq => Some(AssignOp::DivAssign),
            TokenKind::PercentEq => Some(AssignOp::ModAssign),
            _ => None,
        }
    }

    fn parse_ident(&mut self) -> ParseResult<ParseNode> {
        if self.check(TokenKind::Ident) {
            let span = self.current_span();
            let name = self.current().lexeme.clone();
            self.advance();
            Ok(ParseNode::new(NodeKind::Ident { name }, span))
        } else {
            self.error(&format!(
                "expected an identifier, found `{}`",
                self.current_kind().type_str()
            ));
            Err(Recovered)
        }
    }

    fn parse_data_type(&mut self) -> ParseResult<ParseNode> {
        if self.current_kind().is_type_keyword() {
            let span = self.current_span();
            let name = self.current().lexeme.clone();
            self.advance();
            Ok(ParseNode::new(NodeKind::DataType { name }, span))
        } else {
            self.error(&format!(
                "expected a data type, found `{}`",
                self.current_kind().type_str()
            ));
            Err(Recovered)
        }
    }

    fn parse_return_type(&mut self) -> ParseResult<ParseNode> {
        if self.current_kind().is_type_keyword() || self.check(TokenKind::Void) {
            let span = self.current_span();
            let name = self.current().lexeme.clone();
            self.advance();
            Ok(ParseNode::new(NodeKind::DataType { name }, span))
        } else {
            self.error(&format!(
                "expected a return type, found `{}`",
                self.current_kind().type_str()
            ));
            Err(Recovered)
        }
    }

    // ========== Error Recovery ==========

    /// Synchronize to the next statement boundary.
    /// This skips tokens until a statement-ending token has just been
    /// passed or the next token starts a statement, always making at
    /// least one token of progress.
    fn synchronize(&mut self) {
        // Must advance at least once to avoid looping on a token the
        // productions cannot handle
        let mut advanced = false;

        while !self.at_end() {
            if self.pos > 0 && is_stmt_end(self.tokens[self.pos - 1].kind) && advanced {
                return;
            }

            if advanced && is_stmt_start(*self.current_kind()) {
                return;
            }

            self.advance();
            advanced = true;
        }
    }
}

/// Is this node a legal assignment target?
fn is_lvalue(node: &ParseNode) -> bool {
    matches!(
        node.kind,
        NodeKind::Ident { .. } | NodeKind::TableAccess { .. }
    )
}

/// Binding power table for binary operators.
/// Returns (operator, power, right-associative); higher binds tighter.
fn binding_power(kind: TokenKind) -> Option<(BinOp, u8, bool)> {
    match kind {
        TokenKind::OrOr | TokenKind::Or => Some((BinOp::Or, 1, false)),
        TokenKind::AndAnd | TokenKind::And => Some((BinOp::And, 2, false)),
        TokenKind::EqEq => Some((BinOp::Eq, 3, false)),
        TokenKind::BangEq => Some((BinOp::Ne, 3, false)),
        TokenKind::Lt => Some((BinOp::Lt, 4, false)),
        TokenKind::LtEq => Some((BinOp::Le, 4, false)),
        TokenKind::Gt => Some((BinOp::Gt, 4, false)),
        TokenKind::GtEq => Some((BinOp::Ge, 4, false)),
        TokenKind::DotDot => Some((BinOp::Concat, 5, false)),
        TokenKind::Plus => Some((BinOp::Add, 6, false)),
        TokenKind::Minus => Some((BinOp::Sub, 6, false)),
        TokenKind::Star => Some((BinOp::Mul, 7, false)),
        TokenKind::Slash => Some((BinOp::Div, 7, false)),
        TokenKind::SlashSlash => Some((BinOp::IntDiv, 7, false)),
        TokenKind::Percent => Some((BinOp::Mod, 7, false)),
        TokenKind::Caret => Some((BinOp::Pow, 8, true)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_source(source: &str) -> (Option<ParseNode>, Vec<Diagnostic>) {
        let (tokens, _lex_diags) = soluna_lexer::tokenize(source);
        let mut parser = Parser::new(tokens);
        let tree = parser.parse_program();
        (tree, parser.diagnostics())
    }

    #[test]
    fn test_parse_var_decl() {
        let (tree, diags) = parse_source("kai x, y = 1, 2;");
        assert!(diags.is_empty(), "unexpected errors: {:?}", diags);

        let tree = tree.unwrap();
        let NodeKind::Program { items } = &tree.kind else {
            panic!("expected a program");
        };
        assert_eq!(items.len(), 1);
        let NodeKind::VarDecl {
            constant,
            names,
            values,
            ..
        } = &items[0].kind
        else {
            panic!("expected a variable declaration");
        };
        assert!(!constant);
        assert_eq!(names.len(), 2);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_parse_function() {
        let source = "kai add(kai a, kai b) zara a + b; mos";
        let (tree, diags) = parse_source(source);
        assert!(diags.is_empty(), "unexpected errors: {:?}", diags);

        let tree = tree.unwrap();
        let NodeKind::Program { items } = &tree.kind else {
            panic!("expected a program");
        };
        let NodeKind::FuncDecl { params, body, .. } = &items[0].kind else {
            panic!("expected a function");
        };
        assert_eq!(params.len(), 2);
        let NodeKind::Block { stmts } = &body.kind else {
            panic!("expected a block body");
        };
        assert_eq!(stmts.len(), 1);
    }

    #[test]
    fn test_pow_is_right_associative() {
        let (tree, diags) = parse_source("x = 2 ^ 3 ^ 4;");
        assert!(diags.is_empty(), "unexpected errors: {:?}", diags);

        let tree = tree.unwrap();
        let NodeKind::Program { items } = &tree.kind else {
            panic!("expected a program");
        };
        let NodeKind::Assignment { values, .. } = &items[0].kind else {
            panic!("expected an assignment");
        };
        let NodeKind::Binary { op, rhs, .. } = &values[0].kind else {
            panic!("expected a binary expression");
        };
        assert_eq!(*op, BinOp::Pow);
        assert!(matches!(rhs.kind, NodeKind::Binary { op: BinOp::Pow, .. }));
    }

    #[test]
    fn test_missing_mos_reports_once_and_keeps_tree() {
        let (tree, diags) = parse_source("sol iris nova(1); ");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, ErrorCode::ParserError);

        let tree = tree.expect("partial tree should survive");
        let NodeKind::Program { items } = &tree.kind else {
            panic!("expected a program");
        };
        assert!(matches!(items[0].kind, NodeKind::IfStatement { .. }));
    }

    #[test]
    fn test_recovery_continues_after_error() {
        let (tree, diags) = parse_source("kai = 1; kai y = 2;");
        assert!(!diags.is_empty());

        let tree = tree.expect("second declaration should parse");
        let NodeKind::Program { items } = &tree.kind else {
            panic!("expected a program");
        };
        assert!(
            items
                .iter()
                .any(|i| matches!(i.kind, NodeKind::VarDecl { .. }))
        );
    }
}
